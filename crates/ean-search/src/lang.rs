use std::{fmt, str::FromStr};

use crate::{Error, ErrorKind};

/// Language in which the service should return product names.
///
/// The discriminants are the codes the service expects; the gaps are intentional.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Language {
    English = 1,
    Danish = 2,
    German = 3,
    Spanish = 4,
    Finnish = 5,
    French = 6,
    Italian = 8,
    Dutch = 10,
    Norwegian = 11,
    Polish = 12,
    Portuguese = 13,
    Swedish = 15,
    /// Names in whichever language the service has.
    #[default]
    Any = 99,
}

impl Language {
    /// Every language the service understands, in code order.
    pub const ALL: [Self; 13] = [
        Self::English,
        Self::Danish,
        Self::German,
        Self::Spanish,
        Self::Finnish,
        Self::French,
        Self::Italian,
        Self::Dutch,
        Self::Norwegian,
        Self::Polish,
        Self::Portuguese,
        Self::Swedish,
        Self::Any,
    ];

    /// The code sent in the `lang` query parameter.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a wire code back to its language.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Lowercase English name of the language, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Danish => "danish",
            Self::German => "german",
            Self::Spanish => "spanish",
            Self::Finnish => "finnish",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Dutch => "dutch",
            Self::Norwegian => "norwegian",
            Self::Polish => "polish",
            Self::Portuguese => "portuguese",
            Self::Swedish => "swedish",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either a language name (case-insensitive) or its numeric code.
impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let found = match s.parse::<u8>() {
            Ok(code) => Self::from_code(code),
            Err(_) => Self::ALL
                .into_iter()
                .find(|lang| lang.name().eq_ignore_ascii_case(s)),
        };

        found.ok_or_else(|| Error::new(ErrorKind::Configuration, format!("unknown language '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn codes_match_the_service_numbering() {
        let codes: Vec<u8> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 8, 10, 11, 12, 13, 15, 99], codes);
    }

    #[test]
    fn default_is_any_language() {
        assert_eq!(Language::Any, Language::default());
    }

    #[test]
    fn parses_names_and_codes() {
        assert_eq!(Language::German, "German".parse().unwrap());
        assert_eq!(Language::Dutch, "10".parse().unwrap());
        assert_eq!(Language::Any, "any".parse().unwrap());
    }

    #[test]
    fn gaps_in_numbering_are_not_languages() {
        assert!(Language::from_code(7).is_none());
        assert!("9".parse::<Language>().is_err());
        assert!("klingon".parse::<Language>().is_err());
    }
}
