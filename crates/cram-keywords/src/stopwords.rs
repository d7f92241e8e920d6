//! Language selection and stop-word filtering.
//!
//! Stop-word lists come from the `stop-words` crate (Stopwords ISO). The list
//! for the configured language is loaded once at ranker construction and shared
//! read-only by candidate filtering and the unsupervised extractor.

use std::{collections::HashSet, fmt, str};

use stop_words::LANGUAGE;

use crate::error::KeywordError;

/// Languages with bundled linguistic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (default).
    #[default]
    English,
    /// Spanish.
    Spanish,
    /// French.
    French,
    /// German.
    German,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Dutch.
    Dutch,
}

impl Language {
    /// Maps to the `stop-words` crate language constant.
    fn stop_word_language(self) -> LANGUAGE {
        match self {
            Self::English => LANGUAGE::English,
            Self::Spanish => LANGUAGE::Spanish,
            Self::French => LANGUAGE::French,
            Self::German => LANGUAGE::German,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Dutch => LANGUAGE::Dutch,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::Spanish => write!(f, "spanish"),
            Self::French => write!(f, "french"),
            Self::German => write!(f, "german"),
            Self::Italian => write!(f, "italian"),
            Self::Portuguese => write!(f, "portuguese"),
            Self::Dutch => write!(f, "dutch"),
        }
    }
}

impl str::FromStr for Language {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "es" | "spanish" => Ok(Self::Spanish),
            "fr" | "french" => Ok(Self::French),
            "de" | "german" => Ok(Self::German),
            "it" | "italian" => Ok(Self::Italian),
            "pt" | "portuguese" => Ok(Self::Portuguese),
            "nl" | "dutch" => Ok(Self::Dutch),
            _ => Err(KeywordError::UnsupportedLanguage {
                language: s.to_string(),
            }),
        }
    }
}

/// A stop-word filter for one language.
///
/// Uses a `HashSet` for O(1) lookup. All words are stored lowercase for
/// case-insensitive matching.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stop words.
    words: HashSet<String>,
}

impl Stopwords {
    /// Loads the stop-word list for a language.
    ///
    /// Returns an error if no list is available; the ranker cannot function
    /// without one.
    pub fn for_language(language: Language) -> Result<Self, KeywordError> {
        let mut words: HashSet<String> = HashSet::new();
        for word in stop_words::get(language.stop_word_language()) {
            words.insert(word.to_lowercase());
        }

        if words.is_empty() {
            return Err(KeywordError::StopwordsUnavailable {
                language: language.to_string(),
            });
        }

        Ok(Self { words })
    }

    /// Checks whether a term is a stop word. Case-insensitive.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the stop words as a vector, for collaborators that take slices.
    pub fn as_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Returns the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stop words are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
