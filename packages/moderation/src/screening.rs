//! Text screening for content-tier changes.
//!
//! Two independent checks run over each piece of text: a lexicon check
//! for inappropriate language and a whole-word match against the
//! submitter's display name (self-promotion inside listing content is
//! reviewed by an admin before it goes live). Screening never errors;
//! text that can't be checked passes vacuously.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Reason recorded when the lexicon matches.
pub(crate) const INAPPROPRIATE_LANGUAGE: &str = "Contains inappropriate language";

/// Submitter names this short collide with too much ordinary text to be
/// useful signals, so they are not matched at all.
const MIN_NAME_CHARS: usize = 3;

/// Outcome of screening one piece of text or one field value.
///
/// `passed` is true exactly when `reasons` is empty. Build results through
/// the constructors to keep the two in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub passed: bool,
    pub reasons: Vec<String>,
}

impl ScreeningResult {
    /// A passing result with no reasons.
    pub fn pass() -> Self {
        Self {
            passed: true,
            reasons: Vec::new(),
        }
    }

    /// Build a result from accumulated reasons; passes when none.
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            passed: reasons.is_empty(),
            reasons,
        }
    }
}

/// Screen text against the shared lexicon and an optional submitter name.
pub fn screen_text(text: &str, submitter_name: Option<&str>) -> ScreeningResult {
    screen_text_with(Lexicon::shared(), text, submitter_name)
}

/// Screen text against an explicit lexicon.
///
/// Empty or whitespace-only text passes vacuously. The checks are
/// independent: each appends its own reason, and the result passes only
/// when no check fired.
pub fn screen_text_with(
    lexicon: &Lexicon,
    text: &str,
    submitter_name: Option<&str>,
) -> ScreeningResult {
    if text.trim().is_empty() {
        return ScreeningResult::pass();
    }

    let mut reasons = Vec::new();

    if contains_lexicon_word(lexicon, text) {
        reasons.push(INAPPROPRIATE_LANGUAGE.to_string());
    }

    if let Some(name) = submitter_name {
        if mentions_submitter(text, name) {
            reasons.push(format!("Contains company name \"{}\"", name));
        }
    }

    ScreeningResult::from_reasons(reasons)
}

/// True when any word token of the text is in the lexicon.
fn contains_lexicon_word(lexicon: &Lexicon, text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .any(|token| lexicon.contains(token))
}

/// Whole-word, case-insensitive match of the submitter's display name.
///
/// The name is matched literally (regex metacharacters escaped). A
/// pattern that still fails to compile simply doesn't match; screening
/// must not error on odd display names.
fn mentions_submitter(text: &str, name: &str) -> bool {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return false;
    }
    let pattern = format!(r"(?i)\b{}\b", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(matcher) => matcher.is_match(text),
        Err(_) => false,
    }
}
