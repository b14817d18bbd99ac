//! Keyword relevance filter
//!
//! Decides whether a question can be answered from the stored text at all.
//! Each whitespace-separated question token is lower-cased and searched for
//! as a literal substring of the lower-cased text. The first occurrence of
//! every matching token contributes a window of text around it. There is no
//! stemming, no stop-word list and no punctuation stripping, so short tokens
//! like "a" match almost anything.

/// Characters taken on each side of a match start.
pub const EXCERPT_RADIUS: usize = 30;

/// Appended after every excerpt window.
pub const EXCERPT_SEPARATOR: &str = "... ";

/// Collect excerpt windows for every question token found in `text`.
///
/// Windows follow question token order, not document order, and may overlap
/// or repeat. Returns `None` when no token matches.
pub fn find_relevant_text(question: &str, text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = text.chars().collect();
    let mut matched = String::new();

    for keyword in question.split_whitespace().map(str::to_lowercase) {
        let Some(byte_index) = lowered.find(keyword.as_str()) else {
            continue;
        };

        // Index is measured in the lower-cased text and applied to the original.
        let index = lowered[..byte_index].chars().count();
        let end = (index + EXCERPT_RADIUS).min(chars.len());
        let start = index.saturating_sub(EXCERPT_RADIUS).min(end);

        matched.extend(&chars[start..end]);
        matched.push_str(EXCERPT_SEPARATOR);
    }

    let trimmed = matched.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox jumps over the lazy dog.";

    #[test]
    fn test_no_matching_token_returns_none() {
        assert_eq!(find_relevant_text("elephant giraffe", FOX), None);
    }

    #[test]
    fn test_empty_question_returns_none() {
        assert_eq!(find_relevant_text("", FOX), None);
        assert_eq!(find_relevant_text("   \t ", FOX), None);
    }

    #[test]
    fn test_short_text_is_returned_whole() {
        assert_eq!(
            find_relevant_text("fox", FOX).as_deref(),
            Some("The quick brown fox jumps over the lazy dog....")
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(find_relevant_text("FOX", FOX), find_relevant_text("fox", FOX));
        assert!(find_relevant_text("the", "THE END").is_some());
    }

    #[test]
    fn test_window_is_clipped_around_match() {
        let text = format!("{}needle{}", "x".repeat(50), "y".repeat(50));
        let expected = format!("{}needle{}...", "x".repeat(30), "y".repeat(24));
        assert_eq!(find_relevant_text("needle", &text), Some(expected));
    }

    #[test]
    fn test_window_clipped_at_text_start() {
        let text = format!("needle{}", "z".repeat(100));
        let expected = format!("needle{}...", "z".repeat(24));
        assert_eq!(find_relevant_text("Needle", &text), Some(expected));
    }

    #[test]
    fn test_only_first_occurrence_is_used() {
        let text = format!("cat{}cat{}", "-".repeat(60), "+".repeat(60));
        let result = find_relevant_text("cat", &text).unwrap();
        assert!(result.starts_with("cat---"));
        assert!(!result.contains('+'));
    }

    #[test]
    fn test_excerpts_follow_question_order() {
        let text = format!("alpha{}omega", " ".repeat(80));
        let result = find_relevant_text("omega alpha", &text).unwrap();
        assert!(result.find("omega").unwrap() < result.find("alpha").unwrap());
    }

    #[test]
    fn test_duplicate_tokens_repeat_windows() {
        let result = find_relevant_text("fox fox", FOX).unwrap();
        assert_eq!(result.matches("fox").count(), 2);
        assert_eq!(result.matches(EXCERPT_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        assert_eq!(find_relevant_text("fox?", FOX), None);
        assert!(find_relevant_text("dog.", FOX).is_some());
    }

    #[test]
    fn test_unmatched_tokens_contribute_nothing() {
        assert_eq!(find_relevant_text("zebra fox", FOX), find_relevant_text("fox", FOX));
    }

    #[test]
    fn test_token_matches_inside_words() {
        assert!(find_relevant_text("ump", FOX).is_some());
    }

    #[test]
    fn test_multibyte_text_never_splits_characters() {
        let text = format!("{}café{}", "é".repeat(40), "ü".repeat(40));
        let result = find_relevant_text("CAFÉ", &text).unwrap();
        assert_eq!(result, format!("{}café{}...", "é".repeat(30), "ü".repeat(26)));
    }

    #[test]
    fn test_result_contains_window_for_every_match() {
        let text = "Mitochondria are the powerhouse of the cell, producing ATP through respiration.";
        let result = find_relevant_text("what produces atp", text).unwrap();
        let index = text.to_lowercase().find("atp").unwrap();
        let window: String = text
            .chars()
            .skip(index.saturating_sub(EXCERPT_RADIUS))
            .take(index + EXCERPT_RADIUS - index.saturating_sub(EXCERPT_RADIUS))
            .collect();
        assert!(result.contains(&window));
    }

    #[test]
    fn test_is_deterministic() {
        let first = find_relevant_text("lazy quick", FOX);
        let second = find_relevant_text("lazy quick", FOX);
        assert_eq!(first, second);
    }
}
