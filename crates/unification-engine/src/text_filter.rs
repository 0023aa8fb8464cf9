//! Removes unified-requirement prose that only concerns unselected frameworks
//!
//! A sentence is dropped when it names at least one framework and every
//! framework it names is switched off. Sentences naming a selected framework,
//! and sentences naming no framework at all, always stay.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{FrameworkKey, FrameworkSelection, UnifiedRequirement};

lazy_static! {
    /// Mention patterns per framework, in canonical order
    static ref FRAMEWORK_MENTIONS: Vec<(FrameworkKey, Regex)> = vec![
        (
            FrameworkKey::IsoA,
            Regex::new(r"(?i)\bISO(?:/IEC)?\s*27001\b").unwrap(),
        ),
        (
            FrameworkKey::IsoB,
            Regex::new(r"(?i)\bISO(?:/IEC)?\s*27002\b").unwrap(),
        ),
        (
            FrameworkKey::TieredControls,
            Regex::new(r"(?i)\bCIS(?:\s+Controls?)?\b|\bIG[123]\b").unwrap(),
        ),
        (
            FrameworkKey::Regulation,
            Regex::new(r"(?i)\bGDPR\b|\bgeneral\s+data\s+protection\s+regulation\b").unwrap(),
        ),
        (
            FrameworkKey::Directive,
            Regex::new(r"(?i)\bNIS\s?2\b|\bNIS2\b").unwrap(),
        ),
    ];
}

/// Frameworks named in `text`, canonical order
pub fn mentioned_frameworks(text: &str) -> Vec<FrameworkKey> {
    FRAMEWORK_MENTIONS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(key, _)| *key)
        .collect()
}

/// Tokens that end in a period without ending the sentence ("Art. 33", "e.g. backups")
const ABBREVIATIONS: &[&str] = &["art", "e.g", "i.e", "no", "nr", "sec", "para", "cf", "vs"];

/// Whether the terminator `c` at byte `at` closes a sentence
fn ends_sentence(text: &str, at: usize, c: char) -> bool {
    let rest = &text[at + c.len_utf8()..];
    match rest.chars().next() {
        None => return true,
        Some(next) if !next.is_whitespace() => return false,
        Some(_) => {}
    }
    if c != '.' {
        return true;
    }

    match rest.trim_start().chars().next() {
        None => true,
        Some(next) if next.is_ascii_digit() || next.is_lowercase() => false,
        Some(_) => {
            let token = text[..at]
                .rsplit(char::is_whitespace)
                .next()
                .unwrap_or_default()
                .trim_start_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            !ABBREVIATIONS.contains(&token.as_str())
        }
    }
}

/// Split prose into sentences. A sentence ends at `.`, `!` or `?` followed by
/// whitespace or the end of text, so control codes like "A.5.1" stay intact.
/// A period after an abbreviation, or one followed by a digit or a lowercase
/// word, does not end the sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') && ends_sentence(text, i, c) {
            let end = i + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }
    sentences
}

fn keep_sentence(sentence: &str, selection: &FrameworkSelection) -> bool {
    let mentioned = mentioned_frameworks(sentence);
    mentioned.is_empty() || mentioned.iter().any(|key| selection.is_selected(*key))
}

/// Filter one block of prose. Text with nothing to remove is returned as-is.
pub fn filter_text(text: &str, selection: &FrameworkSelection) -> String {
    let sentences = split_sentences(text);
    if sentences.iter().all(|s| keep_sentence(s, selection)) {
        return text.to_string();
    }
    sentences
        .into_iter()
        .filter(|s| keep_sentence(s, selection))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Copy of `unified` with unselected-framework prose removed from the
/// description and sub-requirements. Sub-requirements left empty are
/// dropped; the rest keep their order.
pub fn filter_unified_requirement(
    unified: &UnifiedRequirement,
    selection: &FrameworkSelection,
) -> UnifiedRequirement {
    UnifiedRequirement {
        title: unified.title.clone(),
        description: filter_text(&unified.description, selection),
        sub_requirements: unified
            .sub_requirements
            .iter()
            .map(|sub| filter_text(sub, selection))
            .filter(|sub| !sub.trim().is_empty())
            .collect(),
    }
}
