use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShelfError};
use crate::store::{StorageBackend, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads the persisted theme. Missing, unreadable or unknown values give `Light`.
    pub fn load<B: StorageBackend + ?Sized>(backend: &B) -> Self {
        match backend.get(THEME_KEY) {
            Ok(Some(raw)) => Self::parse_stored(&raw),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("could not read theme: {}", e);
                Theme::default()
            }
        }
    }

    // Accepts both the JSON form (`"dark"`) and a bare name (`dark`).
    fn parse_stored(raw: &str) -> Self {
        serde_json::from_str::<Theme>(raw)
            .ok()
            .or_else(|| raw.trim().parse().ok())
            .unwrap_or_default()
    }

    pub fn save<B: StorageBackend + ?Sized>(self, backend: &B) -> Result<()> {
        backend.set(THEME_KEY, &serde_json::to_string(&self)?)
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Code highlighting stylesheet paired with this theme.
    pub fn highlight_stylesheet(self) -> &'static str {
        match self {
            Theme::Light => "github",
            Theme::Dark => "github-dark",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ShelfError::Validation(format!("unknown theme: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::load(&MemBackend::new()), Theme::Light);
    }

    #[test]
    fn test_toggle_and_persist() {
        let backend = MemBackend::new();
        let theme = Theme::load(&backend).toggle();
        theme.save(&backend).unwrap();

        assert_eq!(backend.get(THEME_KEY).unwrap().as_deref(), Some("\"dark\""));
        assert_eq!(Theme::load(&backend), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_bare_stored_value_is_accepted() {
        let backend = MemBackend::new().with_value(THEME_KEY, "dark");
        assert_eq!(Theme::load(&backend), Theme::Dark);
    }

    #[test]
    fn test_unknown_stored_value_loads_light() {
        let backend = MemBackend::new().with_value(THEME_KEY, "\"solarized\"");
        assert_eq!(Theme::load(&backend), Theme::Light);
    }

    #[test]
    fn test_stylesheets() {
        assert_eq!(Theme::Light.highlight_stylesheet(), "github");
        assert_eq!(Theme::Dark.highlight_stylesheet(), "github-dark");
    }

    #[test]
    fn test_save_failure_is_reported() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(Theme::Dark.save(&backend).is_err());
    }
}
