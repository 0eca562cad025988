//! Identity and normalization helpers.
//!
//! There is no identity system beyond the deterministic user id: the same
//! (username, department) pair always maps to the same chat history.

/// Derives the chat-history user id from username and department.
#[must_use]
pub fn history_user_id(username: &str, department: &str) -> String {
    format!("{}_{}", username.to_lowercase(), department.to_lowercase())
}

/// Normalizes free text for cache keys and exact matching: trim + lowercase.
#[must_use]
pub fn normalize_text(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Cache key for a memoized FAQ answer.
#[must_use]
pub fn answer_cache_key(department: &str, query: &str) -> String {
    format!("{}:{}", normalize_text(department), normalize_text(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_user_id_lowercases_both_parts() {
        assert_eq!(history_user_id("Alice", "HR"), "alice_hr");
    }

    #[test]
    fn test_history_user_id_deterministic() {
        assert_eq!(history_user_id("bob", "Sales"), history_user_id("Bob", "sales"));
    }

    #[test]
    fn test_normalize_text_trims_and_lowercases() {
        assert_eq!(normalize_text("  How DO I?  "), "how do i?");
    }

    #[test]
    fn test_answer_cache_key_is_normalized() {
        assert_eq!(
            answer_cache_key("HR", " Vacation time? "),
            answer_cache_key("hr", "vacation time?")
        );
    }
}
