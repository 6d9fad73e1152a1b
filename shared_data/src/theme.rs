use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Classic,
	Modern,
	Boho,
}

pub struct Palette {
	pub primary: &'static str,
	pub secondary: &'static str,
	pub accent: &'static str,
	pub text: &'static str,
	pub text_light: &'static str,
	pub font_primary: &'static str,
	pub gradient_primary: &'static str,
	pub gradient_accent: &'static str,
}

impl Theme {
	pub const ALL: [Self; 3] = [Self::Classic, Self::Modern, Self::Boho];

	#[must_use]
	pub const fn palette(self) -> Palette {
		match self {
			Self::Classic => Palette {
				primary: "#1e3a5f",
				secondary: "#f8f5f0",
				accent: "#c9a961",
				text: "#2c2c2c",
				text_light: "#6b6b6b",
				font_primary: "'Playfair Display', serif",
				gradient_primary: "linear-gradient(135deg, #f8f5f0 0%, #ffffff 100%)",
				gradient_accent: "linear-gradient(135deg, #c9a961 0%, #e8d5a3 100%)",
			},
			Self::Modern => Palette {
				primary: "#111111",
				secondary: "#ffffff",
				accent: "#ff6b6b",
				text: "#333333",
				text_light: "#777777",
				font_primary: "'Montserrat', sans-serif",
				gradient_primary: "linear-gradient(135deg, #fafafa 0%, #ececec 100%)",
				gradient_accent: "linear-gradient(135deg, #ff6b6b 0%, #ffa8a8 100%)",
			},
			Self::Boho => Palette {
				primary: "#8b4513",
				secondary: "#f4e8d0",
				accent: "#d2691e",
				text: "#5d4037",
				text_light: "#8d6e63",
				font_primary: "'Dancing Script', cursive",
				gradient_primary: "linear-gradient(135deg, #f4e8d0 0%, #fdf6e9 100%)",
				gradient_accent: "linear-gradient(135deg, #d2691e 0%, #f0b27a 100%)",
			},
		}
	}

	// Every page puts this at the top so that the shared styles can just refer to `var(--accent)`
	// and such instead of every component needing to know what theme it's in
	#[must_use]
	pub fn css_vars(self) -> String {
		let Palette {
			primary,
			secondary,
			accent,
			text,
			text_light,
			font_primary,
			gradient_primary,
			gradient_accent
		} = self.palette();

		format!("
:root {{
	--primary: {primary};
	--secondary: {secondary};
	--accent: {accent};
	--text: {text};
	--text-light: {text_light};
	--font-primary: {font_primary};
	--gradient-primary: {gradient_primary};
	--gradient-accent: {gradient_accent};
}}
")
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Classic => "classic",
			Self::Modern => "modern",
			Self::Boho => "boho",
		})
	}
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
	type Err = UnknownTheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownTheme(s.to_string()))
	}
}

// A theme we don't know about shouldn't stop the whole document from loading; we just show the
// default one instead
pub(crate) fn lenient_theme<'de, D: Deserializer<'de>>(de: D) -> Result<Theme, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Name(String),
		Other(serde::de::IgnoredAny),
	}

	Ok(match Raw::deserialize(de)? {
		Raw::Name(name) => name.parse().unwrap_or_default(),
		Raw::Other(_) => Theme::default(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::WeddingData;

	#[test]
	fn unknown_theme_falls_back_to_classic() {
		let doc: WeddingData = serde_json::from_str(r#"{ "theme": "vaporwave" }"#).unwrap();
		assert_eq!(doc.theme, Theme::Classic);

		let doc: WeddingData = serde_json::from_str(r#"{ "theme": "Modern" }"#).unwrap();
		assert_eq!(doc.theme, Theme::Modern);
	}

	#[test]
	fn theme_names_round_trip() {
		for theme in Theme::ALL {
			assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
			assert_eq!(serde_json::to_string(&theme).unwrap(), format!("\"{theme}\""));
		}
	}

	#[test]
	fn css_vars_use_the_palette() {
		let css = Theme::Boho.css_vars();
		assert!(css.contains("--accent: #d2691e;"));
		assert!(css.contains("--font-primary: 'Dancing Script', cursive;"));
	}
}
