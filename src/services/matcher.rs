// src/services/matcher.rs

//! AND/OR phrase matching against review text.

use std::collections::BTreeSet;

/// Outcome of evaluating a review text against the phrase rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Whether the text satisfies the rule
    pub ok: bool,

    /// OR-phrases found in the text (lowercased, deduplicated, sorted)
    pub matched_any: BTreeSet<String>,
}

/// Evaluate OR-set and AND-set phrase membership against `text`.
///
/// Phrases are case-insensitive literal substrings; blank phrases are
/// ignored after trimming. Any absent AND-phrase short-circuits to
/// `ok = false`. Otherwise the rule holds when the OR-set is empty or at
/// least one OR-phrase was found.
pub fn match_phrases(text: &str, phrases_any: &[String], phrases_all: &[String]) -> PhraseMatch {
    let text_low = text.to_lowercase();

    let mut matched_any = BTreeSet::new();
    for phrase in phrases_any {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            continue;
        }
        if text_low.contains(&phrase) {
            matched_any.insert(phrase);
        }
    }

    for phrase in phrases_all {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            continue;
        }
        if !text_low.contains(&phrase) {
            return PhraseMatch {
                ok: false,
                matched_any,
            };
        }
    }

    PhraseMatch {
        ok: phrases_any.is_empty() || !matched_any.is_empty(),
        matched_any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_constraints_is_ok() {
        let m = match_phrases("anything at all", &[], &[]);
        assert!(m.ok);
        assert!(m.matched_any.is_empty());
    }

    #[test]
    fn test_missing_and_phrase_fails_regardless_of_or() {
        let m = match_phrases("this text has a in it", &phrases(&["a"]), &phrases(&["b"]));
        assert!(!m.ok);
        assert!(m.matched_any.contains("a"));
    }

    #[test]
    fn test_or_set_requires_at_least_one_hit() {
        let m = match_phrases("nothing relevant", &phrases(&["budget", "planner"]), &[]);
        assert!(!m.ok);

        let m = match_phrases("my budget tracker", &phrases(&["budget", "planner"]), &[]);
        assert!(m.ok);
        assert_eq!(m.matched_any.len(), 1);
    }

    #[test]
    fn test_case_insensitive_literal_match() {
        let m = match_phrases("Great BUDGET App (v2.1)", &phrases(&["budget app (v2.1)"]), &[]);
        assert!(m.ok);
    }

    #[test]
    fn test_blank_phrases_ignored() {
        let m = match_phrases("text", &phrases(&["text"]), &phrases(&["  ", ""]));
        assert!(m.ok);
    }

    #[test]
    fn test_matched_any_deduplicates_and_sorts() {
        let m = match_phrases(
            "zebra and apple",
            &phrases(&["zebra", "Apple", "apple "]),
            &[],
        );
        let found: Vec<&str> = m.matched_any.iter().map(String::as_str).collect();
        assert_eq!(found, vec!["apple", "zebra"]);
    }

    #[test]
    fn test_all_phrases_present_without_or_set() {
        let m = match_phrases("sync across devices", &[], &phrases(&["sync", "devices"]));
        assert!(m.ok);
        assert!(m.matched_any.is_empty());
    }
}
