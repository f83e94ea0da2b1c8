use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanLabel {
    Person,
    Location,
    Organization,
    Misc,
    Experience,
    Competence,
    Credential,
    Duration,
    Date,
}

impl SpanLabel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Location => "location",
            Self::Organization => "organization",
            Self::Misc => "misc",
            Self::Experience => "experience",
            Self::Competence => "competence",
            Self::Credential => "credential",
            Self::Duration => "duration",
            Self::Date => "date",
        }
    }
}

impl std::fmt::Display for SpanLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpanLabel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(Self::Person),
            "location" => Ok(Self::Location),
            "organization" => Ok(Self::Organization),
            "misc" => Ok(Self::Misc),
            "experience" => Ok(Self::Experience),
            "competence" => Ok(Self::Competence),
            "credential" => Ok(Self::Credential),
            "duration" => Ok(Self::Duration),
            "date" => Ok(Self::Date),
            _ => Err(crate::Error::InvalidSpanLabel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanSource {
    GenericTagger,
    FineTunedTagger,
    Regex,
}

impl SpanSource {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenericTagger => "generic_tagger",
            Self::FineTunedTagger => "fine_tuned_tagger",
            Self::Regex => "regex",
        }
    }
}

impl std::fmt::Display for SpanSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpan {
    pub text: String,
    pub label: SpanLabel,
    pub source: SpanSource,
}

impl RawSpan {
    #[must_use]
    pub fn new(text: impl Into<String>, label: SpanLabel, source: SpanSource) -> Self {
        Self {
            text: text.into(),
            label,
            source,
        }
    }

    #[must_use]
    pub fn generic(text: impl Into<String>, label: SpanLabel) -> Self {
        Self::new(text, label, SpanSource::GenericTagger)
    }

    #[must_use]
    pub fn fine_tuned(text: impl Into<String>, label: SpanLabel) -> Self {
        Self::new(text, label, SpanSource::FineTunedTagger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_label_round_trip() {
        for label in [
            SpanLabel::Person,
            SpanLabel::Location,
            SpanLabel::Organization,
            SpanLabel::Misc,
            SpanLabel::Experience,
            SpanLabel::Competence,
            SpanLabel::Credential,
            SpanLabel::Duration,
            SpanLabel::Date,
        ] {
            assert_eq!(SpanLabel::from_str(label.as_str()).unwrap(), label);
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!(SpanLabel::from_str("paragraph").is_err());
    }

    #[test]
    fn test_span_constructors() {
        let span = RawSpan::generic("Jean Dupont", SpanLabel::Person);
        assert_eq!(span.source, SpanSource::GenericTagger);
        assert_eq!(span.label, SpanLabel::Person);
        assert_eq!(span.text, "Jean Dupont");
    }
}
