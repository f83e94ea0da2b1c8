use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::span::{RawSpan, SpanLabel};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.[a-z]{2,}").expect("valid email pattern"));

// French phone numbers, with +33 or 0 prefix.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+33|0)\s?[1-9](?:[\s.-]?\d{2}){4}").expect("valid phone pattern")
});

/// Per-category raw candidate lists merged from both taggers and the
/// contact regex extractors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpanCollection {
    pub names: Vec<String>,
    pub experiences: Vec<String>,
    pub competencies: Vec<String>,
    pub locations: Vec<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

impl SpanCollection {
    #[must_use]
    pub fn collect<I>(text: &str, spans: I) -> Self
    where
        I: IntoIterator<Item = RawSpan>,
    {
        let mut collection = Self::default();

        for span in spans {
            collection.route(span);
        }
        collection.extract_contacts(text);

        tracing::debug!(
            names = collection.names.len(),
            experiences = collection.experiences.len(),
            competencies = collection.competencies.len(),
            locations = collection.locations.len(),
            emails = collection.emails.len(),
            phones = collection.phones.len(),
            "collected raw spans"
        );

        collection
    }

    fn route(&mut self, span: RawSpan) {
        let text = span.text.trim().to_string();
        if text.is_empty() {
            return;
        }

        match span.label {
            SpanLabel::Person => self.names.push(text),
            SpanLabel::Organization | SpanLabel::Experience | SpanLabel::Credential => {
                self.experiences.push(text);
            }
            SpanLabel::Misc => {
                // Generic taggers routinely tag contact lines as MISC.
                if !starts_with_email(&text) {
                    self.competencies.push(text);
                }
            }
            SpanLabel::Competence => self.competencies.push(text),
            SpanLabel::Location => self.locations.push(text),
            SpanLabel::Duration | SpanLabel::Date => {}
        }
    }

    fn extract_contacts(&mut self, text: &str) {
        self.emails
            .extend(EMAIL_RE.find_iter(text).map(|m| m.as_str().to_string()));
        self.phones
            .extend(PHONE_RE.find_iter(text).map(|m| m.as_str().to_string()));
    }

    pub fn span_count(&self) -> usize {
        self.names.len()
            + self.experiences.len()
            + self.competencies.len()
            + self.locations.len()
            + self.emails.len()
            + self.phones.len()
    }
}

fn starts_with_email(text: &str) -> bool {
    EMAIL_RE.find(text).is_some_and(|m| m.start() == 0)
}
