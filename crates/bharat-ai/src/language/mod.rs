//! Supported interface languages and the UI string table.

pub mod router;
mod strings;

pub use router::language_router;
pub use strings::{strings_for, translate, UI_STRING_KEYS};

use serde::{Deserialize, Serialize};

/// Interface language chosen by a citizen. Serialized as its ISO 639-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "gu")]
    Gujarati,
    #[serde(rename = "kn")]
    Kannada,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Bengali,
        Language::Marathi,
        Language::Gujarati,
        Language::Kannada,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Bengali => "bn",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
            Language::Kannada => "kn",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Bengali => "Bengali",
            Language::Marathi => "Marathi",
            Language::Gujarati => "Gujarati",
            Language::Kannada => "Kannada",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Bengali => "বাংলা",
            Language::Marathi => "मराठी",
            Language::Gujarati => "ગુજરાતી",
            Language::Kannada => "ಕನ್ನಡ",
        }
    }

    /// Case-insensitive lookup by code; surrounding whitespace is ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    pub fn option(&self) -> LanguageOption {
        LanguageOption {
            code: *self,
            name: self.english_name(),
            native_name: self.native_name(),
        }
    }
}

/// Entry in the language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: Language,
    pub name: &'static str,
    pub native_name: &'static str,
}

pub fn language_options() -> Vec<LanguageOption> {
    Language::ALL.iter().map(Language::option).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_lookup() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code(" HI "), Some(Language::Hindi));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn serializes_as_language_code() {
        let json = serde_json::to_value(Language::Kannada).expect("serializes");
        assert_eq!(json, serde_json::json!("kn"));
        let parsed: Language = serde_json::from_str("\"ta\"").expect("deserializes");
        assert_eq!(parsed, Language::Tamil);
    }

    #[test]
    fn picker_lists_every_language_once() {
        let options = language_options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[1].native_name, "हिंदी");
    }
}
