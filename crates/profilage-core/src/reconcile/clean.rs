use std::collections::BTreeSet;

use crate::services::Lemmatizer;
use crate::vocab::{CleaningRules, Vocabulary};

use super::normalize::{normalize, NormalizedEntry};

/// Word-removal cleaner for one entity family. Membership tests run on
/// normalized words; the emitted form is the original surface (experiences,
/// names) or the lemmatized normalized form when a lemmatizer is attached
/// (competencies).
pub struct EntryCleaner<'a> {
    rules: &'a CleaningRules,
    lemmatizer: Option<&'a dyn Lemmatizer>,
}

impl<'a> EntryCleaner<'a> {
    #[must_use]
    pub fn new(rules: &'a CleaningRules) -> Self {
        Self {
            rules,
            lemmatizer: None,
        }
    }

    #[must_use]
    pub fn with_lemmatizer(mut self, lemmatizer: &'a dyn Lemmatizer) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    pub fn clean<I, S>(&self, entries: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cleaned = BTreeSet::new();

        for raw in entries {
            let entry = NormalizedEntry::new(raw.as_ref());
            let pairs = entry.word_pairs();

            match pairs.as_slice() {
                [] => {}
                [(original, word)] => {
                    if self.rules.drop_if_alone.contains_normalized(word)
                        || self.rules.drop_always.contains_normalized(word)
                    {
                        continue;
                    }
                    cleaned.insert(self.emit(original, word));
                }
                _ => {
                    let surviving: Vec<String> = pairs
                        .iter()
                        .filter(|(_, word)| {
                            !self.rules.drop_in_phrase.contains_normalized(word)
                                && !self.rules.drop_always.contains_normalized(word)
                        })
                        .map(|(original, word)| self.emit(original, word))
                        .collect();

                    let reconstructed = surviving.join(" ");
                    if is_substantive(&reconstructed) {
                        cleaned.insert(reconstructed);
                    }
                }
            }
        }

        cleaned
    }

    fn emit(&self, original: &str, normalized: &str) -> String {
        match self.lemmatizer {
            Some(lemmatizer) => lemmatizer.lemmatize(normalized),
            None => original.to_string(),
        }
    }
}

/// Location variant: whole-entry filtering on the lowercased surface, no
/// word removal.
pub fn clean_locations<I, S>(entries: I, blacklist: &Vocabulary) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|raw| {
            let location = raw.as_ref().trim().to_lowercase();
            let keep = !blacklist.contains_normalized(&normalize(&location))
                && location.chars().count() > 2
                && has_alphanumeric(&location);
            keep.then_some(location)
        })
        .collect()
}

/// Name variant: strips blacklisted contact words word-by-word, keeps the
/// original surface and ordering, never applies whole-entry rules.
pub fn clean_names<I, S>(names: I, blacklist: &Vocabulary) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned = Vec::new();

    for raw in names {
        let entry = NormalizedEntry::new(raw.as_ref());
        let surviving: Vec<&str> = entry
            .word_pairs()
            .iter()
            .filter(|(_, word)| !blacklist.contains_normalized(word))
            .map(|(original, _)| *original)
            .collect();

        let name = surviving.join(" ");
        if name.chars().count() > 1 {
            cleaned.push(name);
        }
    }

    cleaned
}

fn is_substantive(entry: &str) -> bool {
    entry.chars().count() > 1 && has_alphanumeric(entry)
}

fn has_alphanumeric(entry: &str) -> bool {
    entry.chars().any(|c| c.is_ascii_alphanumeric())
}
