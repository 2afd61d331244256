//! The profanity lexicon used by text screening.
//!
//! The built-in lexicon merges a base English word list with a
//! supplementary Spanish one, reflecting the languages providers write
//! listings in. It is assembled once and shared read-only afterwards, so
//! concurrent screening needs no synchronization.

use std::collections::HashSet;
use std::path::Path;

use lazy_static::lazy_static;

/// Base English word list.
const BASE_WORDS: &[&str] = &[
    "arse",
    "ass",
    "asshole",
    "bastard",
    "bitch",
    "bollocks",
    "bullshit",
    "crap",
    "cunt",
    "damn",
    "dick",
    "dickhead",
    "douche",
    "dumbass",
    "fuck",
    "fucker",
    "fucking",
    "goddamn",
    "jackass",
    "motherfucker",
    "piss",
    "prick",
    "pussy",
    "shit",
    "shitty",
    "slut",
    "twat",
    "wanker",
    "whore",
];

/// Supplementary Spanish word list, merged on top of the base.
const SUPPLEMENTARY_WORDS: &[&str] = &[
    "cabron",
    "cabrón",
    "carajo",
    "chingada",
    "chingado",
    "cojones",
    "coño",
    "culero",
    "gilipollas",
    "hijueputa",
    "joder",
    "mierda",
    "pendeja",
    "pendejo",
    "puta",
    "puto",
    "verga",
    "zorra",
];

lazy_static! {
    static ref SHARED: Lexicon = Lexicon::builtin();
}

/// Case-folded word set consulted by text screening.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// The built-in lexicon: base English merged with supplementary
    /// Spanish.
    pub fn builtin() -> Self {
        let mut lexicon = Self::from_words(BASE_WORDS.iter().copied());
        lexicon.merge_words(SUPPLEMENTARY_WORDS.iter().copied());
        lexicon
    }

    /// Build a lexicon from an explicit word list.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut lexicon = Self {
            words: HashSet::new(),
        };
        lexicon.merge_words(words);
        lexicon
    }

    /// Merge additional words into the lexicon, lowercased and trimmed.
    pub fn merge_words<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            let word = word.trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
    }

    /// Merge a newline-separated word file, best effort.
    ///
    /// Supplementary language data is optional. When the file is missing
    /// or unreadable the lexicon is left unchanged and screening continues
    /// on the already-loaded languages. Lines starting with `#` are
    /// comments.
    pub fn with_supplementary_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let before = self.words.len();
                self.merge_words(
                    contents
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty() && !line.starts_with('#')),
                );
                tracing::debug!(
                    path = %path.display(),
                    added = self.words.len() - before,
                    "Merged supplementary lexicon"
                );
            }
            Err(error) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %error,
                    "Supplementary lexicon unavailable, continuing without it"
                );
            }
        }
        self
    }

    /// Process-wide lexicon, initialized on first use.
    pub fn shared() -> &'static Lexicon {
        &SHARED
    }

    /// Membership test for a single word token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct words loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
