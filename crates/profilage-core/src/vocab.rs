use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reconcile::normalize;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Vocabulary must not be empty: {0}")]
    EmptyVocabulary(&'static str),
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A curated reference set. Entries keep their surface form in a stable,
/// deduplicated order (fuzzy tie-breaking depends on it); membership tests
/// run against normalized forms precomputed at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    entries: Vec<String>,
    normalized: HashSet<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        let mut normalized = HashSet::new();

        for entry in entries {
            let entry = entry.into();
            if seen.insert(entry.clone()) {
                normalized.insert(normalize(&entry));
                ordered.push(entry);
            }
        }

        Self {
            entries: ordered,
            normalized,
        }
    }

    /// Membership test against the pre-normalized set. The needle must
    /// already be normalized.
    #[must_use]
    pub fn contains_normalized(&self, needle: &str) -> bool {
        self.normalized.contains(needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.entries
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningRules {
    pub drop_if_alone: Vocabulary,
    pub drop_in_phrase: Vocabulary,
    pub drop_always: Vocabulary,
}

impl CleaningRules {
    #[must_use]
    pub fn new(drop_if_alone: Vocabulary, drop_in_phrase: Vocabulary, drop_always: Vocabulary) -> Self {
        Self {
            drop_if_alone,
            drop_in_phrase,
            drop_always,
        }
    }
}

/// The full set of curated vocabularies the pipeline runs against. Loaded
/// once at startup and treated as read-only afterwards; fields missing from
/// a JSON config fall back to the shipped French set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicons {
    pub competencies: Vocabulary,
    pub experience_titles: Vocabulary,
    pub degrees: Vocabulary,
    pub languages: Vocabulary,
    pub language_levels: Vocabulary,
    pub competency_rules: CleaningRules,
    pub experience_rules: CleaningRules,
    pub location_blacklist: Vocabulary,
    pub name_blacklist: Vocabulary,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::french()
    }
}

impl Lexicons {
    #[must_use]
    pub fn french() -> Self {
        Self {
            competencies: Vocabulary::new([
                "AWS",
                "Azure",
                "Google Cloud",
                "Serverless",
                "Cloud Security",
                "Python",
                "Machine Learning",
                "Deep Learning",
                "HTML",
                "CSS",
                "JavaScript",
                "React",
                "Node.js",
                "PHP",
                "Pandas",
                "Scikit-Learn",
                "TensorFlow",
                "Docker",
                "Kubernetes",
                "CI/CD",
                "Ansible",
                "Terraform",
                "Pentesting",
                "SIEM",
                "Firewall",
                "Intrusion Detection",
                "OSINT",
                "NLP",
                "Computer Vision",
                "Transformers",
                "CamemBERT",
                "GPT",
                "Développer des programmes informatiques",
                "Utiliser des langages de programmation",
                "Concevoir des architectures logicielles",
                "Administrer des bases de données",
                "Concevoir des bases de données",
                "Optimiser les performances des bases de données",
                "Mettre en œuvre des politiques de sécurité",
                "Gérer des incidents de sécurité",
                "Effectuer des tests d'intrusion",
                "Configurer des réseaux",
                "Superviser des réseaux",
                "Diagnostiquer des problèmes réseau",
                "Analyser des données",
                "Utiliser des outils de business intelligence",
                "Interpréter des données statistiques",
                "Respecter les principes de protection des données",
                "Protéger des données à caractère personnel et la vie privée",
                "Comprendre les concepts physiques et techniques de l'organisation du stockage numérique de données",
                "Maîtriser les techniques de représentation visuelle telles que les histogrammes, nuages de points, graphiques de surface",
            ]),
            experience_titles: Vocabulary::new([
                "Développeur",
                "Ingénieur",
                "Chef de projet",
                "Consultant",
                "Analyste",
                "Manager",
                "Technicien",
                "Administrateur système",
                "Data Scientist",
                "Architecte logiciel",
                "UX Designer",
            ]),
            degrees: Vocabulary::new([
                "Licence", "Master", "Doctorat", "BTS", "DUT", "CAP", "Ingénieur", "MBA", "PhD",
            ]),
            languages: Vocabulary::new([
                "français",
                "anglais",
                "espagnol",
                "allemand",
                "italien",
                "portugais",
                "néerlandais",
                "russe",
                "chinois",
                "japonais",
                "arabe",
                "coréen",
                "hindi",
                "suédois",
                "norvégien",
            ]),
            language_levels: Vocabulary::new([
                "A1",
                "A2",
                "B1",
                "B2",
                "C1",
                "C2",
                "débutant",
                "intermédiaire",
                "courant",
                "bilingue",
                "natif",
                "Langue maternelle",
            ]),
            competency_rules: CleaningRules::new(
                Vocabulary::new(["informatique", "data", "skills", "email", "mail", "e mail"]),
                Vocabulary::new(["base", "de", "niveau", "expert"]),
                Vocabulary::new(["misc", "loc", "per", "org"]),
            ),
            experience_rules: CleaningRules::new(
                Vocabulary::new(["informatique", "data", "experience"]),
                Vocabulary::new(["professionnelle", "experience"]),
                Vocabulary::new(["misc", "loc", "per", "org", "skills"]),
            ),
            location_blacklist: Vocabulary::new([
                "adresse",
                "rue",
                "avenue",
                "route",
                "université",
            ]),
            name_blacklist: Vocabulary::new([
                "email",
                "contact",
                "adresse",
                "tel",
                "tél",
                "téléphone",
            ]),
        }
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let lexicons: Self = serde_json::from_str(json)?;
        lexicons.validate()?;
        Ok(lexicons)
    }

    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Correction and detection vocabularies must be populated; the word
    /// removal lists and blacklists may legitimately be empty.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, vocab) in [
            ("competencies", &self.competencies),
            ("experience_titles", &self.experience_titles),
            ("degrees", &self.degrees),
            ("languages", &self.languages),
            ("language_levels", &self.language_levels),
        ] {
            if vocab.is_empty() {
                return Err(ConfigError::EmptyVocabulary(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_deduplicates_preserving_order() {
        let vocab = Vocabulary::new(["Python", "React", "Python", "AWS"]);
        let entries: Vec<&str> = vocab.iter().collect();
        assert_eq!(entries, vec!["Python", "React", "AWS"]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_membership_is_pre_normalized() {
        let vocab = Vocabulary::new(["Université", "Chef de Projet"]);
        assert!(vocab.contains_normalized("universite"));
        assert!(vocab.contains_normalized("chef de projet"));
        assert!(!vocab.contains_normalized("Université"));
    }

    #[test]
    fn test_french_defaults_validate() {
        Lexicons::french().validate().unwrap();
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let lexicons =
            Lexicons::from_json_str(r#"{"degrees": ["Licence", "Master"]}"#).unwrap();
        assert_eq!(lexicons.degrees.len(), 2);
        assert!(!lexicons.languages.is_empty());
        assert!(lexicons
            .competency_rules
            .drop_if_alone
            .contains_normalized("informatique"));
    }

    #[test]
    fn test_empty_required_vocabulary_rejected() {
        let err = Lexicons::from_json_str(r#"{"degrees": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVocabulary("degrees")));
    }

    #[test]
    fn test_json_round_trip() {
        let lexicons = Lexicons::french();
        let json = serde_json::to_string(&lexicons).unwrap();
        let back = Lexicons::from_json_str(&json).unwrap();
        assert_eq!(back.degrees.len(), lexicons.degrees.len());
        assert_eq!(back.competencies.len(), lexicons.competencies.len());
    }
}
