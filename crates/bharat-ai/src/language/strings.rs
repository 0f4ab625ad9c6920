use super::Language;
use std::collections::BTreeMap;

struct UiString {
    key: &'static str,
    english: &'static str,
    hindi: Option<&'static str>,
}

const UI_STRINGS: &[UiString] = &[
    UiString {
        key: "welcome",
        english: "Welcome to AI for Bharat",
        hindi: Some("एआई फॉर भारत में आपका स्वागत है"),
    },
    UiString {
        key: "selectLanguage",
        english: "Select Your Language",
        hindi: Some("अपनी भाषा चुनें"),
    },
    UiString {
        key: "continue",
        english: "Continue",
        hindi: Some("जारी रखें"),
    },
    UiString {
        key: "login",
        english: "Login",
        hindi: Some("लॉग इन करें"),
    },
    UiString {
        key: "signup",
        english: "Sign Up",
        hindi: Some("साइन अप करें"),
    },
    UiString {
        key: "logout",
        english: "Logout",
        hindi: Some("लॉग आउट"),
    },
    UiString {
        key: "loading",
        english: "Loading...",
        hindi: Some("लोड हो रहा है..."),
    },
    UiString {
        key: "dashboard",
        english: "Dashboard",
        hindi: Some("डैशबोर्ड"),
    },
    UiString {
        key: "profile",
        english: "Profile",
        hindi: Some("प्रोफ़ाइल"),
    },
    UiString {
        key: "aiAssistant",
        english: "AI Assistant",
        hindi: Some("एआई सहायक"),
    },
    UiString {
        key: "govSchemes",
        english: "Government Schemes",
        hindi: Some("सरकारी योजनाएं"),
    },
    UiString {
        key: "studentSupport",
        english: "Student Support",
        hindi: Some("छात्र सहायता"),
    },
    UiString {
        key: "careerGuidance",
        english: "Career Guidance",
        hindi: Some("करियर मार्गदर्शन"),
    },
    UiString {
        key: "studyPlanner",
        english: "Study Planner",
        hindi: Some("अध्ययन योजना"),
    },
    UiString {
        key: "doubtSolving",
        english: "Doubt Solving",
        hindi: Some("शंका समाधान"),
    },
    UiString {
        key: "mentalWellness",
        english: "Mental Wellness",
        hindi: Some("मानसिक स्वास्थ्य"),
    },
    UiString {
        key: "typeMessage",
        english: "Type your message...",
        hindi: None,
    },
];

/// Every key the string table knows, in table order.
pub const UI_STRING_KEYS: [&str; 17] = [
    "welcome",
    "selectLanguage",
    "continue",
    "login",
    "signup",
    "logout",
    "loading",
    "dashboard",
    "profile",
    "aiAssistant",
    "govSchemes",
    "studentSupport",
    "careerGuidance",
    "studyPlanner",
    "doubtSolving",
    "mentalWellness",
    "typeMessage",
];

fn localized(entry: &UiString, language: Language) -> &'static str {
    match language {
        Language::Hindi => entry.hindi.unwrap_or(entry.english),
        _ => entry.english,
    }
}

/// Look up a UI string. Untranslated entries fall back to English and unknown keys
/// are returned unchanged so the caller still renders something.
pub fn translate<'a>(key: &'a str, language: Language) -> &'a str {
    UI_STRINGS
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| localized(entry, language))
        .unwrap_or(key)
}

pub fn strings_for(language: Language) -> BTreeMap<&'static str, &'static str> {
    UI_STRINGS
        .iter()
        .map(|entry| (entry.key, localized(entry, language)))
        .collect()
}
