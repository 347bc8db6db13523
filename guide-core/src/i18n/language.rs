//! Supported guide languages

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Base language the content is authored in
    #[default]
    Es,
    En,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Es, Language::En, Language::Fr, Language::De];

    /// Language the translation trees and host content are written in
    pub const BASE: Language = Language::Es;

    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::Es => "🇪🇸",
            Self::En => "🇬🇧",
            Self::Fr => "🇫🇷",
            Self::De => "🇩🇪",
        }
    }

    /// Translation key of the language's display name
    pub fn name_key(self) -> &'static str {
        match self {
            Self::Es => "languages.spanish",
            Self::En => "languages.english",
            Self::Fr => "languages.french",
            Self::De => "languages.german",
        }
    }

    pub fn is_base(self) -> bool {
        self == Self::BASE
    }

    /// Parse a code, falling back to the base language
    pub fn parse_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            tracing::warn!(code = %code, "Unsupported language, using default");
            Self::default()
        })
    }
}

impl FromStr for Language {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "de" => Ok(Self::De),
            _ => Err(GuideError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
