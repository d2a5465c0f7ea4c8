//! Locating embedded JSON in free text.
//!
//! Models that are merely *asked* for JSON wrap it in prose, markdown
//! fences, or both. Extraction precedence:
//!
//! 1. A fenced code block (opened and closed by triple backticks,
//!    optionally tagged `json`, case-insensitive): the block interior,
//!    trimmed.
//! 2. Brace-depth matching from the first `{` to the `}` that returns the
//!    depth to zero.
//! 3. Neither: no candidate.

/// Extract the JSON candidate from model output text, if any.
///
/// # Example
///
/// ```rust
/// use veristruct_output::extract_json_candidate;
///
/// let text = "Here you go:\n```json\n{\"no_claims\": true}\n```";
/// assert_eq!(
///     extract_json_candidate(text).as_deref(),
///     Some("{\"no_claims\": true}")
/// );
/// ```
#[must_use]
pub fn extract_json_candidate(text: &str) -> Option<String> {
    if let Some(inner) = extract_fenced_block(text) {
        return Some(inner);
    }
    find_json_object(text)
}

/// Extract the interior of the first closed triple-backtick fence.
fn extract_fenced_block(text: &str) -> Option<String> {
    let open = text.find("```")?;
    let mut rest = &text[open + 3..];
    if rest
        .get(..4)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
    {
        rest = &rest[4..];
    }
    let close = rest.find("```")?;
    Some(rest[..close].trim().to_string())
}

/// Find a JSON object in text using brace-depth matching.
///
/// Braces inside string literals are ignored. Returns `None` when there is
/// no `{` or the braces never balance.
#[must_use]
pub fn find_json_object(text: &str) -> Option<String> {
    let start = text.find('{')?;

    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[start..=start + i].to_string());
                }
            }
            _ => {}
        }
    }
    None
}
