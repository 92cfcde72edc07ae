//! Supported display languages and their document direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// One of the two languages the storefront ships translations for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    Ar,
}

/// Text direction applied to the document when a language is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("`{0}` is not a valid language tag")]
    InvalidTag(String),
    #[error("language `{0}` is not supported (expected fr or ar)")]
    Unsupported(String),
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::Ar];

    /// Short code used for storage, the `lang` attribute and dictionary leaves.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Name of the language written in that language (for the switcher).
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::Ar => "العربية",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::Fr => TextDirection::Ltr,
            Self::Ar => TextDirection::Rtl,
        }
    }

    /// Parse a BCP-47 tag (`fr`, `fr-FR`, `ar-MA`, ...) into a supported language.
    ///
    /// Only the primary language subtag is considered. Anything outside the two
    /// shipped languages is an error; callers holding untrusted input (e.g. a
    /// stored preference) should fall back to [`Language::default`] instead.
    pub fn parse(tag: &str) -> Result<Self, LanguageError> {
        let id: LanguageIdentifier = tag
            .trim()
            .parse()
            .map_err(|_| LanguageError::InvalidTag(tag.to_string()))?;
        match id.language.as_str() {
            "fr" => Ok(Self::Fr),
            "ar" => Ok(Self::Ar),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_regional_tags() {
        assert_eq!(Language::parse("fr").unwrap(), Language::Fr);
        assert_eq!(Language::parse("ar").unwrap(), Language::Ar);
        assert_eq!(Language::parse("fr-FR").unwrap(), Language::Fr);
        assert_eq!(Language::parse("ar-MA").unwrap(), Language::Ar);
        assert_eq!(" AR ".parse::<Language>().unwrap(), Language::Ar);
    }

    #[test]
    fn rejects_unsupported_languages() {
        assert_eq!(
            Language::parse("en-US"),
            Err(LanguageError::Unsupported("en".into()))
        );
        assert!(matches!(
            Language::parse("not a tag!"),
            Err(LanguageError::InvalidTag(_))
        ));
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::Fr.direction().as_str(), "ltr");
        assert_eq!(Language::default(), Language::Fr);
    }
}
