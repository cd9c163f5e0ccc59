//! Response languages supported by XIVAPI

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages XIVAPI can localize responses into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// French
    Fr,
    /// German
    De,
    /// Japanese
    Ja,
}

impl Language {
    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Fr, Language::De, Language::Ja]
    }

    /// Convert to the two-letter code XIVAPI expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Ja => "ja",
        }
    }

    /// Parse a language from its two-letter code
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| crate::Error::invalid_language(s))
    }
}
