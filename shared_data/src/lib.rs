use serde::{Deserialize, Deserializer, Serialize};

mod md_to_html;
pub mod config;
pub mod display;
pub mod editor;
pub mod theme;

pub use md_to_html::md_to_html;
pub use display::Icon;
pub use theme::Theme;

// The whole document the backend keeps for a single wedding. We only model the fields that this
// frontend actually reads or writes; everything else the store sends along is ignored, and
// everything we do model is allowed to be missing since older documents don't have all of them.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WeddingData {
	pub id: String,
	pub couple_name_1: String,
	pub couple_name_2: String,
	pub wedding_date: String,
	pub venue_name: String,
	pub venue_location: String,
	#[serde(deserialize_with = "theme::lenient_theme")]
	pub theme: Theme,
	pub faqs: Vec<Faq>,
	pub schedule_events: Vec<ScheduleEvent>,
	pub important_info: Vec<InfoItem>,
	pub bridal_party: Vec<PartyMember>,
	pub groom_party: Vec<PartyMember>,
	pub special_roles: Vec<PartyMember>,
}

impl WeddingData {
	#[must_use]
	pub fn couple_display(&self) -> String {
		match (self.couple_name_1.trim(), self.couple_name_2.trim()) {
			("", "") => "Our Wedding".into(),
			(one, "") | ("", one) => one.to_string(),
			(one, two) => format!("{one} & {two}"),
		}
	}
}

// the store happily accepts faqs without ids (or without answers, sometimes), so we have to as well
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Faq {
	pub id: String,
	pub question: String,
	pub answer: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PartyMember {
	pub id: String,
	pub name: String,
	pub role: String,
	pub designation: String,
	pub relationship: String,
	#[serde(deserialize_with = "string_or_number")]
	pub age: String,
	pub description: String,
	pub image: String,
	pub photo: String,
}

pub const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/400x400?text=No+Photo";

impl PartyMember {
	#[must_use]
	pub fn display_role(&self) -> &str {
		if self.role.is_empty() {
			&self.designation
		} else {
			&self.role
		}
	}

	#[must_use]
	pub fn display_photo(&self) -> &str {
		[&self.image, &self.photo]
			.into_iter()
			.find(|url| !url.trim().is_empty())
			.map_or(PLACEHOLDER_PHOTO, String::as_str)
	}

	#[must_use]
	pub fn initial(&self) -> char {
		self.name.trim().chars().next().unwrap_or('?')
	}
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleEvent {
	pub time: String,
	pub title: String,
	pub description: String,
	pub location: String,
	pub duration: String,
	pub highlight: bool,
	#[serde(deserialize_with = "display::lenient_icon", skip_serializing_if = "Option::is_none")]
	pub icon: Option<Icon>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct InfoItem {
	pub title: String,
	pub description: String,
	#[serde(deserialize_with = "display::lenient_icon", skip_serializing_if = "Option::is_none")]
	pub icon: Option<Icon>,
}

// What we send when we want to change part of the document. Anything left as `None` isn't sent at
// all, so the store leaves it as-is.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct WeddingUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub faqs: Option<Vec<Faq>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bridal_party: Option<Vec<PartyMember>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub groom_party: Option<Vec<PartyMember>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub special_roles: Option<Vec<PartyMember>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub theme: Option<Theme>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LoginReq {
	pub username: String,
	pub password: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LoginResp {
	pub success: bool,
	pub session_id: String,
	pub user_id: String,
}

// Ages get typed in by hand on the backend side, so sometimes they show up as numbers
fn string_or_number<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Text(String),
		Number(serde_json::Number),
		Other(serde::de::IgnoredAny),
	}

	Ok(match Raw::deserialize(de)? {
		Raw::Text(s) => s,
		Raw::Number(n) => n.to_string(),
		Raw::Other(_) => String::new(),
	})
}

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display&family=Montserrat&family=Dancing+Script&display=swap');
body {
	margin: 0;
	background: var(--gradient-primary);
	color: var(--text);
	font-family: Arial, sans-serif;
}
h1, h2, h3 {
	font-family: var(--font-primary);
	color: var(--primary);
	font-weight: 300;
}
.page {
	max-width: 1100px;
	margin: 0 auto;
	padding: 64px 32px;
}
.page-header {
	text-align: center;
	margin-bottom: 48px;
}
.page-header > h1 {
	font-size: 56px;
	margin-bottom: 16px;
}
.divider {
	width: 96px;
	height: 2px;
	margin: 0 auto 24px auto;
	background: var(--accent);
}
.subtitle {
	color: var(--text-light);
	font-size: 20px;
	max-width: 720px;
	margin: 0 auto;
}
.card {
	background-color: rgba(255, 255, 255, 0.1);
	border: 1px solid rgba(255, 255, 255, 0.2);
	border-radius: 24px;
	padding: 28px;
}
.icon-badge {
	display: inline-flex;
	align-items: center;
	justify-content: center;
	width: 56px;
	height: 56px;
	border-radius: 16px;
	background: var(--gradient-accent);
	font-size: 28px;
}
input, textarea {
	width: 100%;
	box-sizing: border-box;
	padding: 10px;
	border: 2px solid var(--accent);
	border-radius: 8px;
	font-size: 16px;
}
button {
	background-color: var(--primary);
	color: var(--secondary);
	border: none;
	border-radius: 8px;
	padding: 8px 14px;
	cursor: pointer;
}
button.secondary {
	background-color: #6b7280;
	color: white;
}
button.add-new {
	width: 100%;
	padding: 12px;
	background: none;
	border: 2px dashed var(--primary);
	color: var(--primary);
}
nav.site-nav {
	display: flex;
	justify-content: center;
	gap: 24px;
	padding: 16px;
}
nav.site-nav a {
	color: var(--primary);
}
.editor-form {
	background-color: white;
	border: 2px solid var(--accent);
	border-radius: 16px;
	padding: 24px;
	margin: 16px 0;
}
.editor-form > * {
	margin-bottom: 12px;
}
.entry-card {
	background-color: white;
	border-radius: 16px;
	margin: 12px 0;
	padding: 16px 24px;
	cursor: pointer;
}
.entry-card.expanded {
	border: 2px solid var(--primary);
}
.entry-card .actions {
	float: right;
}
.entry-card .actions > button {
	margin-left: 8px;
}
.section-toggle {
	display: inline-block;
	width: 44px;
	height: 24px;
	border-radius: 12px;
	background-color: #d1d5db;
}
.section-toggle.on {
	background-color: #22c55e;
}
.empty-state {
	text-align: center;
	color: var(--text-light);
	padding: 32px;
}
.hint {
	color: var(--text-light);
	font-size: 14px;
}
.timeline > .card {
	margin-bottom: 24px;
}
.event.highlight {
	border: 2px solid var(--accent);
}
.info-grid, .party-grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
	gap: 32px;
	margin-bottom: 64px;
}
.member {
	text-align: center;
}
.member .photo {
	position: relative;
}
.member .photo > img {
	width: 100%;
	aspect-ratio: 1;
	object-fit: cover;
	border-radius: 16px;
}
.member .photo > .icon-badge {
	position: absolute;
	top: 12px;
	right: 12px;
}
"#;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sparse_document_parses() {
		let doc: WeddingData = serde_json::from_str(r#"{
			"id": "abc",
			"couple_name_1": "Emily",
			"faqs": [{ "question": "Q", "answer": "A" }],
			"bridal_party": [{ "name": "Isabella", "designation": "Maid of Honor", "age": 27 }],
			"registry_items": [],
			"theme": "boho"
		}"#).unwrap();

		assert_eq!(doc.id, "abc");
		assert_eq!(doc.faqs, vec![Faq { id: String::new(), question: "Q".into(), answer: "A".into() }]);
		assert_eq!(doc.bridal_party[0].age, "27");
		assert_eq!(doc.bridal_party[0].display_role(), "Maid of Honor");
		assert_eq!(doc.theme, Theme::Boho);
		assert!(doc.schedule_events.is_empty());
		assert!(doc.special_roles.is_empty());
	}

	#[test]
	fn update_only_sends_what_was_set() {
		let update = WeddingUpdate {
			faqs: Some(vec![Faq { id: "1".into(), question: "Q".into(), answer: "A".into() }]),
			..WeddingUpdate::default()
		};

		let value = serde_json::to_value(&update).unwrap();
		let obj = value.as_object().unwrap();
		assert_eq!(obj.len(), 1);
		assert_eq!(obj["faqs"][0]["question"], "Q");
	}

	#[test]
	fn photo_falls_back() {
		let mut member = PartyMember { name: "Liam".into(), ..PartyMember::default() };
		assert_eq!(member.display_photo(), PLACEHOLDER_PHOTO);
		assert_eq!(member.initial(), 'L');

		member.photo = "https://example.com/photo.jpg".into();
		assert_eq!(member.display_photo(), "https://example.com/photo.jpg");

		member.image = "https://example.com/image.jpg".into();
		assert_eq!(member.display_photo(), "https://example.com/image.jpg");
	}

	#[test]
	fn couple_names() {
		let mut doc = WeddingData::default();
		assert_eq!(doc.couple_display(), "Our Wedding");
		doc.couple_name_2 = "James".into();
		assert_eq!(doc.couple_display(), "James");
		doc.couple_name_1 = "Emily".into();
		assert_eq!(doc.couple_display(), "Emily & James");
	}
}
