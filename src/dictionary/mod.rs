//! Dictionary membership for word legality.
//!
//! The word service is an injected [`WordSource`]; [`Dictionary`] keeps a
//! local set built from its bulk list and falls back to the source for
//! anything not found locally. A failing lookup means "not a word".

use std::collections::HashSet;
use std::future::Future;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("word lookup failed: {0}")]
    Lookup(String),

    #[error("could not read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// External dictionary service.
pub trait WordSource: Send + Sync {
    fn exists(&self, word: &str) -> impl Future<Output = Result<bool, DictionaryError>> + Send;

    fn bulk_list(&self) -> impl Future<Output = Result<Vec<String>, DictionaryError>> + Send;
}

/// In-memory word source, also handy as a controlled test double.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
    ordered: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = WordList::default();
        for word in words {
            let word: String = word.into();
            let word = word.trim();
            if !word.is_empty() && list.words.insert(word.to_string()) {
                list.ordered.push(word.to_string());
            }
        }
        list
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path)?;
        Ok(WordList::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        ))
    }

    /// Words in first-seen order.
    pub fn words(&self) -> &[String] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl WordSource for WordList {
    async fn exists(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.words.contains(word))
    }

    async fn bulk_list(&self) -> Result<Vec<String>, DictionaryError> {
        Ok(self.ordered.clone())
    }
}

/// Source with nothing behind it, for dictionaries that live entirely in the
/// local list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemoteLookup;

impl WordSource for NoRemoteLookup {
    async fn exists(&self, _word: &str) -> Result<bool, DictionaryError> {
        Ok(false)
    }

    async fn bulk_list(&self) -> Result<Vec<String>, DictionaryError> {
        Ok(Vec::new())
    }
}

pub struct Dictionary<S = NoRemoteLookup> {
    local: HashSet<String>,
    words: Vec<String>,
    source: S,
}

impl Dictionary<NoRemoteLookup> {
    /// Dictionary backed only by the given words.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Dictionary::with_words(WordList::new(words).ordered, NoRemoteLookup)
    }
}

impl<S: WordSource> Dictionary<S> {
    pub fn with_words(words: Vec<String>, source: S) -> Self {
        let local = words.iter().cloned().collect();
        Dictionary {
            local,
            words,
            source,
        }
    }

    /// Pull the bulk list from the source to seed the local set.
    pub async fn load(source: S) -> Result<Self, DictionaryError> {
        let words = source.bulk_list().await?;
        log::info!("dictionary loaded with {} words", words.len());
        Ok(Dictionary::with_words(words, source))
    }

    /// Local list first, then the source. Lookup errors count as "no".
    pub async fn contains(&self, word: &str) -> bool {
        if self.local.contains(word) {
            return true;
        }
        match self.source.exists(word).await {
            Ok(found) => found,
            Err(e) => {
                log::warn!("lookup for '{}' failed, treating as unknown: {}", word, e);
                false
            }
        }
    }

    /// The bulk list, used as the sampling pool of the simple AI.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
