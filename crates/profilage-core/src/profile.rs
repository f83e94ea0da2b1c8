use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    #[serde(rename = "Langue")]
    pub language: String,
    #[serde(rename = "Niveau")]
    pub level: String,
}

impl LanguageSkill {
    #[must_use]
    pub fn new(language: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            level: level.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "Noms")]
    pub names: Vec<String>,
    #[serde(rename = "Emails")]
    pub emails: BTreeSet<String>,
    #[serde(rename = "Téléphone")]
    pub phones: BTreeSet<String>,
}

impl Identity {
    #[must_use]
    pub fn new<E, P>(names: Vec<String>, emails: E, phones: P) -> Self
    where
        E: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
    {
        Self {
            names: dedup_names(names),
            emails: emails.into_iter().collect(),
            phones: phones.into_iter().collect(),
        }
    }
}

/// The reconciled record handed to the report writer and the domain
/// classifier. Field names serialize to the schema those consumers expect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredProfile {
    #[serde(rename = "Formations")]
    pub formations: Vec<String>,
    #[serde(rename = "Compétences")]
    pub competencies: BTreeSet<String>,
    #[serde(rename = "Expériences")]
    pub experiences: Vec<String>,
    #[serde(rename = "Localisation")]
    pub locations: Vec<String>,
    #[serde(rename = "Identité")]
    pub identity: Identity,
    #[serde(rename = "Langues")]
    pub languages: Vec<LanguageSkill>,
}

impl StructuredProfile {
    #[must_use]
    pub fn assemble<C>(
        formations: Vec<String>,
        competencies: C,
        experiences: Vec<String>,
        locations: Vec<String>,
        identity: Identity,
        languages: Vec<LanguageSkill>,
    ) -> Self
    where
        C: IntoIterator<Item = String>,
    {
        Self {
            formations,
            competencies: competencies.into_iter().collect(),
            experiences,
            locations,
            identity,
            languages,
        }
    }

    /// Concatenated Expériences + Compétences text scored by the external
    /// domain classifier.
    #[must_use]
    pub fn classifier_text(&self) -> String {
        self.experiences
            .iter()
            .chain(self.competencies.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
            && self.competencies.is_empty()
            && self.experiences.is_empty()
            && self.locations.is_empty()
            && self.identity.names.is_empty()
            && self.identity.emails.is_empty()
            && self.identity.phones.is_empty()
            && self.languages.is_empty()
    }
}

/// Case-insensitive dedup keeping first-seen order; among duplicates the
/// last-seen casing wins.
fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut canonical: HashMap<String, String> = HashMap::new();

    for name in names {
        let key = name.to_lowercase();
        if !canonical.contains_key(&key) {
            order.push(key.clone());
        }
        canonical.insert(key, name);
    }

    order
        .into_iter()
        .filter_map(|key| canonical.remove(&key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_dedup_case_insensitive() {
        let identity = Identity::new(
            vec![
                "Jean Dupont".into(),
                "JEAN DUPONT".into(),
                "Marie Curie".into(),
            ],
            [],
            [],
        );

        assert_eq!(identity.names, vec!["JEAN DUPONT", "Marie Curie"]);

        let lowered: BTreeSet<String> =
            identity.names.iter().map(|n| n.to_lowercase()).collect();
        assert_eq!(lowered.len(), identity.names.len());
    }

    #[test]
    fn test_contact_set_union() {
        let identity = Identity::new(
            vec![],
            ["a@b.fr".to_string(), "a@b.fr".to_string()],
            ["0612345678".to_string(), "0612345678".to_string()],
        );
        assert_eq!(identity.emails.len(), 1);
        assert_eq!(identity.phones.len(), 1);
    }

    #[test]
    fn test_assemble_keeps_order_and_dedups_sets() {
        let profile = StructuredProfile::assemble(
            vec!["Master Informatique".into()],
            vec!["Python".to_string(), "Python".to_string(), "AWS".to_string()],
            vec!["Ingénieur".into(), "Chef de projet".into()],
            vec!["paris".into()],
            Identity::default(),
            vec![LanguageSkill::new("Anglais", "Courant")],
        );

        assert_eq!(profile.competencies.len(), 2);
        assert_eq!(profile.experiences, vec!["Ingénieur", "Chef de projet"]);
        assert_eq!(profile.formations, vec!["Master Informatique"]);
    }

    #[test]
    fn test_classifier_text_concatenates_experiences_then_competencies() {
        let profile = StructuredProfile::assemble(
            vec![],
            vec!["Python".to_string()],
            vec!["Ingénieur".into()],
            vec![],
            Identity::default(),
            vec![],
        );
        assert_eq!(profile.classifier_text(), "Ingénieur Python");
    }

    #[test]
    fn test_serialized_schema_uses_french_keys() {
        let profile = StructuredProfile::default();
        let json = serde_json::to_value(&profile).unwrap();
        for key in [
            "Formations",
            "Compétences",
            "Expériences",
            "Localisation",
            "Identité",
            "Langues",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json["Identité"].get("Téléphone").is_some());
    }

    #[test]
    fn test_empty_profile_is_legal() {
        assert!(StructuredProfile::default().is_empty());
    }
}
