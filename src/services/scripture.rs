//! Translation comparison service.
//!
//! Holds the in-memory corpus of translations and lines up the same verses
//! across all of them.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::bible::{parse_reference, VerseRef};
use crate::constants::UNTRANSLATED;
use crate::error::Result;

/// A named translation: verse key (`"John 3:16"`) to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    /// Translation name (e.g., "meiji").
    pub name: String,
    verses: HashMap<String, String>,
}

impl Translation {
    /// Create an empty translation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verses: HashMap::new(),
        }
    }

    /// Builder-style insert of one verse.
    #[must_use]
    pub fn with_verse(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Insert or replace the text stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.verses.insert(key.into(), text.into());
    }

    /// Text for a verse, if this translation has it.
    pub fn verse(&self, verse: &VerseRef) -> Option<&str> {
        self.verses.get(&verse.key()).map(String::as_str)
    }

    /// Text for a verse, or the untranslated placeholder.
    pub fn verse_or_placeholder(&self, verse: &VerseRef) -> &str {
        self.verse(verse).unwrap_or_else(|| {
            tracing::trace!("{}: no text for {verse}", self.name);
            UNTRANSLATED
        })
    }

    /// Number of stored verses.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// True when no verses are stored.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// All translations available for comparison, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    translations: Vec<Translation>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation. A translation with the same name is replaced in place.
    pub fn insert(&mut self, translation: Translation) {
        match self.translations.iter_mut().find(|t| t.name == translation.name) {
            Some(existing) => *existing = translation,
            None => self.translations.push(translation),
        }
    }

    /// Builder-style [`Corpus::insert`].
    #[must_use]
    pub fn with(mut self, translation: Translation) -> Self {
        self.insert(translation);
        self
    }

    /// Look up a translation by name.
    pub fn get(&self, name: &str) -> Option<&Translation> {
        self.translations.iter().find(|t| t.name == name)
    }

    /// Translations in corpus order.
    pub fn iter(&self) -> std::slice::Iter<'_, Translation> {
        self.translations.iter()
    }
}

impl FromIterator<Translation> for Corpus {
    fn from_iter<I: IntoIterator<Item = Translation>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for translation in iter {
            corpus.insert(translation);
        }
        corpus
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Translation;
    type IntoIter = std::slice::Iter<'a, Translation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Trait for scripture lookup providers.
///
/// `Corpus` is the in-memory implementation; anything that can answer a
/// verse lookup per translation name can stand in for it.
pub trait ScriptureProvider {
    /// Look up one verse in the named translation.
    fn lookup(&self, translation: &str, verse: &VerseRef) -> Option<&str>;

    /// Translation names in the order comparisons should list them.
    fn names(&self) -> Vec<&str>;

    /// Check if a specific translation is available.
    fn has_translation(&self, name: &str) -> bool {
        self.names().contains(&name)
    }
}

impl ScriptureProvider for Corpus {
    fn lookup(&self, translation: &str, verse: &VerseRef) -> Option<&str> {
        self.get(translation)?.verse(verse)
    }

    fn names(&self) -> Vec<&str> {
        self.translations.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Texts of the same verses lined up per translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    entries: Vec<(String, Vec<String>)>,
}

impl Comparison {
    /// Texts for one translation.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, texts)| texts.as_slice())
    }

    /// `(translation, texts)` pairs in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_slice()))
    }

    /// Number of translations compared.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was compared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many positions fell back to the placeholder, across all translations.
    pub fn missing_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, texts)| texts)
            .filter(|t| t.as_str() == UNTRANSLATED)
            .count()
    }

    /// Pretty-printed JSON object, translations in corpus order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text report: a `--- NAME ---` header per translation, then one
    /// verse per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, texts) in self.iter() {
            out.push_str(&format!("\n--- {} ---\n", name.to_uppercase()));
            for text in texts {
                out.push_str(text);
                out.push('\n');
            }
        }
        out
    }
}

impl Serialize for Comparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, texts) in &self.entries {
            map.serialize_entry(name, texts)?;
        }
        map.end()
    }
}

/// Line up already-parsed verses across every translation in the corpus.
pub fn compare_refs(verses: &[VerseRef], corpus: &Corpus) -> Comparison {
    let entries = corpus
        .iter()
        .map(|translation| {
            let texts = verses
                .iter()
                .map(|verse| translation.verse_or_placeholder(verse).to_string())
                .collect();
            (translation.name.clone(), texts)
        })
        .collect();
    Comparison { entries }
}

/// Parse `reference` and compare its verses across the corpus.
///
/// Missing verses become the `[untranslated]` placeholder; only a malformed
/// reference is an error.
pub fn compare_translations(reference: &str, corpus: &Corpus) -> Result<Comparison> {
    let verses = parse_reference(reference)?;
    let comparison = compare_refs(&verses, corpus);
    tracing::debug!(
        "Compared {} verses across {} translations ({} missing)",
        verses.len(),
        comparison.len(),
        comparison.missing_count()
    );
    Ok(comparison)
}
