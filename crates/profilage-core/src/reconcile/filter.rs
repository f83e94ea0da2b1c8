use crate::vocab::Vocabulary;

use super::normalize::normalize;

/// Drops experience entries contaminated by detected person names: any
/// entry whose normalized form contains a normalized name word as a
/// substring. Common words that double as name fragments are over-removed;
/// that is the documented tagger-noise trade-off.
pub fn filter_name_leakage(entries: &[String], names: &[String]) -> Vec<String> {
    let name_words: Vec<String> = names
        .iter()
        .flat_map(|name| name.split_whitespace())
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect();

    entries
        .iter()
        .filter(|entry| {
            let normalized = normalize(entry);
            !name_words.iter().any(|word| normalized.contains(word.as_str()))
        })
        .cloned()
        .collect()
}

/// Strict whitelist: keeps entries containing at least one degree keyword
/// as a surface substring, silently dropping the rest.
pub fn detect_formations(entries: &[String], degrees: &Vocabulary) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| degrees.iter().any(|degree| entry.contains(degree)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Lexicons;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_name_contaminated_entries_removed() {
        let entries = strings(&["Jean Dupont Ingénieur", "Chef de projet"]);
        let names = strings(&["Jean Dupont"]);

        let filtered = filter_name_leakage(&entries, &names);
        assert_eq!(filtered, vec!["Chef de projet"]);
    }

    #[test]
    fn test_matching_is_accent_and_case_insensitive() {
        let entries = strings(&["Direction DUPONT", "Analyste"]);
        let names = strings(&["Jérôme Dupont"]);

        let filtered = filter_name_leakage(&entries, &names);
        assert_eq!(filtered, vec!["Analyste"]);
    }

    #[test]
    fn test_no_names_keeps_everything() {
        let entries = strings(&["Ingénieur", "Consultant"]);
        let filtered = filter_name_leakage(&entries, &[]);
        assert_eq!(filtered, entries);
    }

    #[test]
    fn test_blank_name_fragments_ignored() {
        let entries = strings(&["Ingénieur"]);
        let names = strings(&["   ", ""]);
        let filtered = filter_name_leakage(&entries, &names);
        assert_eq!(filtered, entries);
    }

    #[test]
    fn test_substring_policy_over_removes_common_words() {
        // A name particle that is also a regular word ("De") wipes
        // every entry containing it.
        let entries = strings(&["Chef de projet"]);
        let names = strings(&["Marie De Gaulle"]);

        let filtered = filter_name_leakage(&entries, &names);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_formation_whitelist() {
        let lexicons = Lexicons::french();
        let entries = strings(&[
            "Master Informatique",
            "Développeur Web",
            "BTS Systèmes Numériques",
        ]);

        let formations = detect_formations(&entries, &lexicons.degrees);
        assert_eq!(formations, vec!["Master Informatique", "BTS Systèmes Numériques"]);

        for formation in &formations {
            assert!(lexicons.degrees.iter().any(|d| formation.contains(d)));
        }
    }

    #[test]
    fn test_formation_match_is_case_sensitive() {
        let lexicons = Lexicons::french();
        let entries = strings(&["master informatique"]);
        assert!(detect_formations(&entries, &lexicons.degrees).is_empty());
    }
}
