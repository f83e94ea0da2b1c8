use regex::Regex;

use crate::profile::LanguageSkill;
use crate::vocab::{ConfigError, ConfigResult, Vocabulary};

/// Matches `<language> : <level>` occurrences against the configured
/// vocabularies. The union pattern is compiled once at configuration time.
#[derive(Debug)]
pub struct LanguageMatcher {
    pattern: Regex,
}

impl LanguageMatcher {
    pub fn new(languages: &Vocabulary, levels: &Vocabulary) -> ConfigResult<Self> {
        if languages.is_empty() {
            return Err(ConfigError::EmptyVocabulary("languages"));
        }
        if levels.is_empty() {
            return Err(ConfigError::EmptyVocabulary("language_levels"));
        }

        let pattern = format!(
            r"(?i)\b({})\b\s*:\s*\b({})\b",
            alternation(languages),
            alternation(levels),
        );

        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    pub fn extract(&self, text: &str) -> Vec<LanguageSkill> {
        self.pattern
            .captures_iter(text)
            .map(|caps| LanguageSkill::new(capitalize(&caps[1]), capitalize(&caps[2])))
            .collect()
    }
}

fn alternation(vocabulary: &Vocabulary) -> String {
    vocabulary
        .iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Lexicons;

    fn matcher() -> LanguageMatcher {
        let lexicons = Lexicons::french();
        LanguageMatcher::new(&lexicons.languages, &lexicons.language_levels).unwrap()
    }

    #[test]
    fn test_extracts_language_level_pair() {
        let skills = matcher().extract("Anglais : Courant");
        assert_eq!(skills, vec![LanguageSkill::new("Anglais", "Courant")]);
    }

    #[test]
    fn test_case_insensitive_with_capitalized_output() {
        let skills = matcher().extract("ANGLAIS : COURANT");
        assert_eq!(skills, vec![LanguageSkill::new("Anglais", "Courant")]);
    }

    #[test]
    fn test_multiple_matches_in_order() {
        let skills = matcher().extract("Langues : Anglais : B2 ; Espagnol : Débutant");
        assert_eq!(
            skills,
            vec![
                LanguageSkill::new("Anglais", "B2"),
                LanguageSkill::new("Espagnol", "Débutant"),
            ]
        );
    }

    #[test]
    fn test_multi_word_level() {
        let skills = matcher().extract("Français : langue maternelle");
        assert_eq!(skills, vec![LanguageSkill::new("Français", "Langue maternelle")]);
    }

    #[test]
    fn test_separator_required() {
        assert!(matcher().extract("Anglais courant").is_empty());
    }

    #[test]
    fn test_unknown_language_ignored() {
        assert!(matcher().extract("Klingon : Courant").is_empty());
    }

    #[test]
    fn test_empty_vocabulary_is_config_error() {
        let lexicons = Lexicons::french();
        let empty = Vocabulary::default();
        let err = LanguageMatcher::new(&empty, &lexicons.language_levels).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVocabulary("languages")));
    }
}
