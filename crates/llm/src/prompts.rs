//! Fixed prompt templates.

/// System prompt prepended to every generative chat query.
pub const SYSTEM_PROMPT: &str = "You are an enterprise support assistant. Follow these rules:\n\
1. Use FAQs from the knowledge base when available\n\
2. For department-specific queries, provide general answers\n\
3. Escalate unclear queries with confidence < 0.8\n\
4. Maintain professional tone";

/// Builds the full prompt for a chat query: system rules, query, department.
#[must_use]
pub fn chat_prompt(message: &str, department: &str) -> String {
    format!("{SYSTEM_PROMPT}\nQuery: {message}\nDepartment: {department}")
}

/// Builds the self-rating prompt asking for a single numeric confidence.
#[must_use]
pub fn rating_prompt(query: &str, response: &str) -> String {
    format!(
        "Rate confidence (0-1) that this response answers the query:\n\
         Query: {query}\n\
         Response: {response}\n\
         Score:"
    )
}
