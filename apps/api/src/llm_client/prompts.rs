// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Output-format rules appended to every prompt that expects a JSON object back.
pub const JSON_OUTPUT_RULES: &str = r#"**JSON Output Format Rules:**
You MUST follow these rules for your response:
1.  The response MUST be a single, valid JSON object and NOTHING else. No extra text, no explanations, no markdown.
2.  All property names (keys) in the JSON object MUST be enclosed in double quotes (e.g., "employee_id").
3.  All string values MUST be enclosed in double quotes.
4.  Any double quotes inside a string value MUST be escaped with a backslash (e.g., "a string with a \"quote\"").
5.  There must NOT be any trailing commas after the last element in an object or array."#;
