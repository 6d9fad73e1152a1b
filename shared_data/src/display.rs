//! Everything the public pages need to turn a [`WeddingData`] into cards, minus the markup itself.

use std::{borrow::Cow, str::FromStr};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use crate::{InfoItem, PartyMember, ScheduleEvent, WeddingData};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
	Users,
	Calendar,
	Music,
	Camera,
	Utensils,
	Clock,
	MapPin,
}

impl Icon {
	pub const ALL: [Self; 7] = [
		Self::Users,
		Self::Calendar,
		Self::Music,
		Self::Camera,
		Self::Utensils,
		Self::Clock,
		Self::MapPin,
	];

	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Users => "Users",
			Self::Calendar => "Calendar",
			Self::Music => "Music",
			Self::Camera => "Camera",
			Self::Utensils => "Utensils",
			Self::Clock => "Clock",
			Self::MapPin => "MapPin",
		}
	}

	#[must_use]
	pub const fn glyph(self) -> &'static str {
		match self {
			Self::Users => "👥",
			Self::Calendar => "📅",
			Self::Music => "🎵",
			Self::Camera => "📷",
			Self::Utensils => "🍴",
			Self::Clock => "🕒",
			Self::MapPin => "📍",
		}
	}
}

impl FromStr for Icon {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|i| i.name() == s)
			.ok_or(())
	}
}

// The admin dashboard lets people pick icons by name, and older documents have names we don't
// know about (or objects, or nulls). A name we don't know is shown as a calendar no matter what
// kind of card it's on; anything that isn't a name at all becomes `None` so the card uses its own
// default. Neither ever fails the whole document.
pub(crate) fn lenient_icon<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Icon>, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Name(String),
		Other(serde::de::IgnoredAny),
	}

	Ok(match Raw::deserialize(de)? {
		Raw::Name(name) => Some(name.parse().unwrap_or(Icon::Calendar)),
		Raw::Other(_) => None,
	})
}

impl ScheduleEvent {
	#[must_use]
	pub fn display_icon(&self) -> Icon {
		self.icon.unwrap_or(Icon::Calendar)
	}
}

impl InfoItem {
	#[must_use]
	pub fn display_icon(&self) -> Icon {
		self.icon.unwrap_or(Icon::Users)
	}
}

fn or_fallback<T: Clone>(list: &[T], fallback: fn() -> Vec<T>) -> Cow<'_, [T]> {
	if list.is_empty() {
		Cow::Owned(fallback())
	} else {
		Cow::Borrowed(list)
	}
}

#[must_use]
pub fn schedule_events(doc: &WeddingData) -> Cow<'_, [ScheduleEvent]> {
	or_fallback(&doc.schedule_events, default_schedule)
}

#[must_use]
pub fn important_info(doc: &WeddingData) -> Cow<'_, [InfoItem]> {
	or_fallback(&doc.important_info, default_info)
}

fn default_schedule() -> Vec<ScheduleEvent> {
	let event = |time: &str, title: &str, description: &str, location: &str, duration: &str, highlight| ScheduleEvent {
		time: time.into(),
		title: title.into(),
		description: description.into(),
		location: location.into(),
		duration: duration.into(),
		highlight,
		icon: None,
	};

	vec![
		event(
			"2:00 PM",
			"Guests Arrival & Welcome",
			"Please arrive by 2:00 PM for welcome drinks and mingling before the ceremony begins.",
			"Sunset Garden Estate - Main Entrance",
			"30 minutes",
			false
		),
		event(
			"3:00 PM",
			"Wedding Ceremony",
			"The main event! Exchange vows in our beautiful garden setting.",
			"Sunset Garden Estate - Ceremony Garden",
			"45 minutes",
			true
		),
		event(
			"5:00 PM",
			"Reception Dinner",
			"Join us for a wonderful dinner featuring locally sourced ingredients.",
			"Grand Ballroom",
			"2 hours",
			false
		),
	]
}

fn default_info() -> Vec<InfoItem> {
	[
		("Dress Code", "Formal/Black Tie Optional. We encourage elegant attire in garden-friendly footwear."),
		("Weather Plan", "Our venue has both indoor and covered outdoor spaces for any weather conditions."),
		("Transportation", "Complimentary shuttle service available from nearby hotels. Valet parking provided."),
		("Special Accommodations", "Please let us know of any accessibility needs or dietary restrictions in your RSVP."),
	].into_iter()
		.map(|(title, description)| InfoItem {
			title: title.into(),
			description: description.into(),
			icon: None,
		})
		.collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartySection {
	Bride,
	Groom,
	Special,
}

impl PartySection {
	pub const ALL: [Self; 3] = [Self::Bride, Self::Groom, Self::Special];

	#[must_use]
	pub fn members(self, doc: &WeddingData) -> &[PartyMember] {
		match self {
			Self::Bride => &doc.bridal_party,
			Self::Groom => &doc.groom_party,
			Self::Special => &doc.special_roles,
		}
	}

	#[must_use]
	pub const fn title(self) -> &'static str {
		match self {
			Self::Bride => "Bride's Party",
			Self::Groom => "Groom's Party",
			Self::Special => "Special Roles",
		}
	}

	#[must_use]
	pub const fn blurb(self) -> &'static str {
		match self {
			Self::Bride => "The wonderful women who will stand by the bride's side as she says \"I do.\"",
			Self::Groom => "The incredible men who will stand proudly beside the groom on this momentous day.",
			Self::Special => "Our precious little ones who will add extra magic and joy to our ceremony.",
		}
	}

	#[must_use]
	pub const fn header_glyph(self) -> &'static str {
		match self {
			Self::Bride => Badge::Heart.glyph(),
			Self::Groom => Icon::Users.glyph(),
			Self::Special => Badge::Star.glyph(),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
	Crown,
	Star,
	Heart,
}

impl Badge {
	#[must_use]
	pub const fn glyph(self) -> &'static str {
		match self {
			Self::Crown => "👑",
			Self::Star => "⭐",
			Self::Heart => "❤️",
		}
	}
}

const HONOR_ROLES: [&str; 2] = ["Maid of Honor", "Best Man"];

impl PartyMember {
	// Both fields get checked since the dashboard has historically put the title in either one
	#[must_use]
	pub fn badge(&self, section: PartySection) -> Badge {
		if [&self.role, &self.designation].iter().any(|r| HONOR_ROLES.contains(&r.trim())) {
			Badge::Crown
		} else if section == PartySection::Special {
			Badge::Star
		} else {
			Badge::Heart
		}
	}
}

// Sections with nobody in them just don't get shown at all
#[must_use]
pub fn party_sections(doc: &WeddingData) -> Vec<(PartySection, &[PartyMember])> {
	PartySection::ALL.into_iter()
		.map(|section| (section, section.members(doc)))
		.filter(|(_, members)| !members.is_empty())
		.collect()
}

#[must_use]
pub fn format_wedding_date(date: &str) -> String {
	NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
		.map_or_else(
			|_| date.to_string(),
			|d| d.format("%A, %B %-d, %Y").to_string()
		)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn icons_fall_back_to_calendar_or_the_card_default() {
		let doc: WeddingData = serde_json::from_str(r#"{
			"schedule_events": [
				{ "title": "Dinner", "icon": "Utensils" },
				{ "title": "Dancing", "icon": "DiscoBall" },
				{ "title": "Photos", "icon": { "weird": true } },
				{ "title": "Toast" }
			],
			"important_info": [
				{ "title": "Parking", "icon": "Sparkles" },
				{ "title": "Weather" },
				{ "title": "Dress Code", "icon": null },
				{ "title": "Music", "icon": "Music" }
			]
		}"#).unwrap();

		let icons = doc.schedule_events.iter().map(ScheduleEvent::display_icon).collect::<Vec<_>>();
		assert_eq!(icons, [Icon::Utensils, Icon::Calendar, Icon::Calendar, Icon::Calendar]);

		// only a name we don't know becomes a calendar; no name at all is the info card's default
		let icons = doc.important_info.iter().map(InfoItem::display_icon).collect::<Vec<_>>();
		assert_eq!(icons, [Icon::Calendar, Icon::Users, Icon::Users, Icon::Music]);
	}

	#[test]
	fn empty_lists_fall_back() {
		let mut doc = WeddingData::default();
		let events = schedule_events(&doc);
		assert_eq!(events.len(), 3);
		assert!(events[1].highlight);
		assert_eq!(important_info(&doc).len(), 4);

		doc.schedule_events.push(ScheduleEvent { title: "Only".into(), ..ScheduleEvent::default() });
		let events = schedule_events(&doc);
		assert!(matches!(events, Cow::Borrowed(_)));
		assert_eq!(events.len(), 1);
	}

	#[test]
	fn empty_party_sections_are_hidden() {
		let doc = WeddingData {
			groom_party: vec![PartyMember { name: "Liam".into(), ..PartyMember::default() }],
			..WeddingData::default()
		};

		let sections = party_sections(&doc);
		assert_eq!(sections.len(), 1);
		assert_eq!(sections[0].0, PartySection::Groom);
	}

	#[test]
	fn badges() {
		let mut member = PartyMember { name: "Ava".into(), ..PartyMember::default() };
		assert_eq!(member.badge(PartySection::Bride), Badge::Heart);
		assert_eq!(member.badge(PartySection::Special), Badge::Star);

		member.designation = "Maid of Honor".into();
		assert_eq!(member.badge(PartySection::Bride), Badge::Crown);
		assert_eq!(member.badge(PartySection::Special), Badge::Crown);
	}

	#[test]
	fn wedding_dates() {
		assert_eq!(format_wedding_date("2025-06-15"), "Sunday, June 15, 2025");
		assert_eq!(format_wedding_date("sometime next summer"), "sometime next summer");
	}
}
