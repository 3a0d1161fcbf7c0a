//! Turns the model's raw text into a displayable question list.

/// Questions kept from the first generation for a session.
pub const INITIAL_QUESTION_LIMIT: usize = 5;

/// Splits `text` on line breaks, drops blank lines, and keeps at most `limit`
/// of the rest. Kept lines are returned as-is, numbering included.
pub fn parse_questions(text: &str, limit: Option<usize>) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .take(limit.unwrap_or(usize::MAX))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIX: &str = "1. Q1\n2. Q2\n3. Q3\n4. Q4\n5. Q5\n6. Q6";

    #[test]
    fn test_initial_limit_drops_sixth_question() {
        let questions = parse_questions(SIX, Some(INITIAL_QUESTION_LIMIT));
        assert_eq!(questions, vec!["1. Q1", "2. Q2", "3. Q3", "4. Q4", "5. Q5"]);
    }

    #[test]
    fn test_no_limit_keeps_everything() {
        let questions = parse_questions(SIX, None);
        assert_eq!(questions.len(), 6);
        assert_eq!(questions[5], "6. Q6");
    }

    #[test]
    fn test_blank_lines_are_dropped_on_both_paths() {
        let text = "1. Q1\n\n   \n2. Q2\n\t\n3. Q3\n";
        assert_eq!(parse_questions(text, None), vec!["1. Q1", "2. Q2", "3. Q3"]);
        assert_eq!(
            parse_questions(text, Some(INITIAL_QUESTION_LIMIT)),
            vec!["1. Q1", "2. Q2", "3. Q3"]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(parse_questions("1. A\r\n\r\n2. B", None), vec!["1. A", "2. B"]);
    }

    #[test]
    fn test_empty_text_yields_no_questions() {
        assert!(parse_questions("", Some(5)).is_empty());
        assert!(parse_questions("\n\n", None).is_empty());
    }
}
