use std::collections::BTreeMap;

/// Codes are ISO-639-1 style, plus the two ad hoc Chinese variants and a
/// bare "zh" entry for classifiers that do not distinguish scripts.
const LANGUAGE_NAMES: [(&str, &str); 56] = [
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("sq", "Albanian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
];

/// Immutable code-to-display-name table, fixed at process start.
pub struct LanguageNamesService {
    names: BTreeMap<&'static str, &'static str>,
}

impl LanguageNamesService {
    pub fn new() -> LanguageNamesService {
        LanguageNamesService {
            names: LANGUAGE_NAMES.into_iter().collect(),
        }
    }

    /// Display name for a code, falling back to the code itself.
    pub fn name_for(&self, code: &str) -> String {
        match self.names.get(code) {
            Some(name) => (*name).to_string(),
            None => code.to_string(),
        }
    }

    pub fn all_entries(&self) -> BTreeMap<&'static str, &'static str> {
        self.names.clone()
    }
}

impl Default for LanguageNamesService {
    fn default() -> LanguageNamesService {
        LanguageNamesService::new()
    }
}

#[cfg(test)]
mod tests {
    use super::LanguageNamesService;

    #[test]
    fn resolves_known_codes() {
        let names = LanguageNamesService::new();

        assert_eq!(names.name_for("en"), "English");
        assert_eq!(names.name_for("zh-cn"), "Chinese (Simplified)");
        assert_eq!(names.name_for("zh-tw"), "Chinese (Traditional)");
    }

    #[test]
    fn unknown_code_falls_back_to_the_code() {
        let names = LanguageNamesService::new();

        assert_eq!(names.name_for("xx"), "xx");
        assert_eq!(names.name_for(""), "");
    }

    #[test]
    fn exposes_full_table() {
        let names = LanguageNamesService::new();
        let entries = names.all_entries();

        assert_eq!(entries.len(), 56);
        assert_eq!(entries.get("en"), Some(&"English"));
    }
}
