//! # Display Preferences
//!
//! Theme, font, gradient, and the toggle switches the settings window
//! exposes. Each preference persists under its own store key — they are
//! independent values, not one config blob — and every read is
//! permissive: an unknown or missing stored value falls back to its
//! default rather than erroring.

use crate::error::{NoteError, Result};
use crate::store::SnapshotStore;
use std::fmt;
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";
pub const FONT_KEY: &str = "font";
pub const GRADIENT_KEY: &str = "gradient";
pub const GLOW_KEY: &str = "glow";
pub const GRADIENT_OUTLINE_KEY: &str = "gradient-outline";
pub const CONFIRM_CLOSE_KEY: &str = "confirm-close";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    DarkMica,
    LightMica,
    Acrylic,
    Kurzgesagt,
    DeepOcean,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[
            Theme::DarkMica,
            Theme::LightMica,
            Theme::Acrylic,
            Theme::Kurzgesagt,
            Theme::DeepOcean,
        ]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::DarkMica => "dark-mica",
            Theme::LightMica => "light-mica",
            Theme::Acrylic => "acrylic",
            Theme::Kurzgesagt => "kurzgesagt",
            Theme::DeepOcean => "deep-ocean",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dark-mica" => Ok(Theme::DarkMica),
            "light-mica" => Ok(Theme::LightMica),
            "acrylic" => Ok(Theme::Acrylic),
            "kurzgesagt" => Ok(Theme::Kurzgesagt),
            "deep-ocean" => Ok(Theme::DeepOcean),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub font: Option<String>,
    pub gradient: Option<String>,
    pub glow: bool,
    pub gradient_outline: bool,
    pub confirm_close: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font: None,
            gradient: None,
            glow: true,
            gradient_outline: true,
            confirm_close: false,
        }
    }
}

impl Preferences {
    /// Reads every preference key, defaulting anything absent or
    /// unparseable.
    pub fn load<S: SnapshotStore>(store: &S) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            theme: store
                .get(THEME_KEY)?
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.theme),
            font: store.get(FONT_KEY)?,
            gradient: store.get(GRADIENT_KEY)?,
            glow: read_toggle(store, GLOW_KEY, defaults.glow)?,
            gradient_outline: read_toggle(store, GRADIENT_OUTLINE_KEY, defaults.gradient_outline)?,
            confirm_close: read_toggle(store, CONFIRM_CLOSE_KEY, defaults.confirm_close)?,
        })
    }

    /// Validates and writes one preference under its key.
    pub fn set_value<S: SnapshotStore>(store: &mut S, key: &str, value: &str) -> Result<()> {
        match key {
            THEME_KEY => {
                let theme: Theme = value
                    .parse()
                    .map_err(|e: String| NoteError::Api(e))?;
                store.set(THEME_KEY, &theme.to_string())
            }
            GLOW_KEY | GRADIENT_OUTLINE_KEY | CONFIRM_CLOSE_KEY => {
                if value != "on" && value != "off" {
                    return Err(NoteError::Api(format!(
                        "{} must be \"on\" or \"off\"",
                        key
                    )));
                }
                store.set(key, value)
            }
            FONT_KEY | GRADIENT_KEY => store.set(key, value),
            other => Err(NoteError::Api(format!("Unknown preference: {}", other))),
        }
    }

    /// The current value of one preference, formatted for display.
    pub fn value_of(&self, key: &str) -> Result<String> {
        match key {
            THEME_KEY => Ok(self.theme.to_string()),
            FONT_KEY => Ok(self.font.clone().unwrap_or_else(|| "(default)".into())),
            GRADIENT_KEY => Ok(self.gradient.clone().unwrap_or_else(|| "(default)".into())),
            GLOW_KEY => Ok(toggle_str(self.glow).to_string()),
            GRADIENT_OUTLINE_KEY => Ok(toggle_str(self.gradient_outline).to_string()),
            CONFIRM_CLOSE_KEY => Ok(toggle_str(self.confirm_close).to_string()),
            other => Err(NoteError::Api(format!("Unknown preference: {}", other))),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            THEME_KEY,
            FONT_KEY,
            GRADIENT_KEY,
            GLOW_KEY,
            GRADIENT_OUTLINE_KEY,
            CONFIRM_CLOSE_KEY,
        ]
    }
}

fn read_toggle<S: SnapshotStore>(store: &S, key: &str, default: bool) -> Result<bool> {
    Ok(match store.get(key)?.as_deref() {
        Some("on") => true,
        Some("off") => false,
        _ => default,
    })
}

fn toggle_str(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_defaults() {
        let store = InMemoryStore::new();
        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::DarkMica);
        assert!(prefs.glow);
        assert!(prefs.gradient_outline);
        assert!(!prefs.confirm_close);
    }

    #[test]
    fn test_set_and_load() {
        let mut store = InMemoryStore::new();
        Preferences::set_value(&mut store, THEME_KEY, "acrylic").unwrap();
        Preferences::set_value(&mut store, GLOW_KEY, "off").unwrap();
        Preferences::set_value(&mut store, FONT_KEY, "Inter").unwrap();

        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.theme, Theme::Acrylic);
        assert!(!prefs.glow);
        assert_eq!(prefs.font.as_deref(), Some("Inter"));
    }

    #[test]
    fn unknown_stored_theme_falls_back_to_default() {
        let mut store = InMemoryStore::new();
        store.set(THEME_KEY, "hot-pink").unwrap();

        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.theme, Theme::DarkMica);
    }

    #[test]
    fn invalid_writes_are_rejected() {
        let mut store = InMemoryStore::new();
        assert!(Preferences::set_value(&mut store, THEME_KEY, "hot-pink").is_err());
        assert!(Preferences::set_value(&mut store, GLOW_KEY, "maybe").is_err());
        assert!(Preferences::set_value(&mut store, "volume", "11").is_err());
    }

    #[test]
    fn test_theme_roundtrip() {
        for theme in Theme::all() {
            let parsed: Theme = theme.to_string().parse().unwrap();
            assert_eq!(parsed, *theme);
        }
    }

    #[test]
    fn value_of_formats_toggles() {
        let prefs = Preferences::default();
        assert_eq!(prefs.value_of(GLOW_KEY).unwrap(), "on");
        assert_eq!(prefs.value_of(CONFIRM_CLOSE_KEY).unwrap(), "off");
        assert!(prefs.value_of("volume").is_err());
    }
}
