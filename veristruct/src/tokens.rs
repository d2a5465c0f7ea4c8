//! Token estimation and evidence budgeting.
//!
//! Verification prompts embed retrieved evidence snippets, and enough of
//! them will blow the context window. The budget fitter keeps the most
//! recently retrieved snippets (scanning from the end) while preserving
//! their original order in the prompt.

use tracing::info;

use crate::outputs::Evidence;

/// Default prompt token budget.
pub const DEFAULT_MAX_PROMPT_TOKENS: usize = 120_000;

/// Tokens reserved for the model's response.
const RESPONSE_HEADROOM_TOKENS: usize = 1_000;

/// Rough token count estimate (4 chars per token).
#[must_use]
pub fn estimate_token_count(text: &str) -> usize {
    text.len() / 4
}

/// Render evidence snippets the way verification prompts embed them.
#[must_use]
pub fn format_evidence(items: &[Evidence]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, evidence)| match &evidence.title {
            Some(title) => format!(
                "Evidence {} ({}): {}\n{}",
                i + 1,
                evidence.url,
                title,
                evidence.text
            ),
            None => format!("Evidence {} ({}): {}", i + 1, evidence.url, evidence.text),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Fit evidence snippets into a prompt token budget.
///
/// `base_prompt` is the rendered prompt without any evidence. When the
/// budget cannot hold everything, the longest fitting suffix of `items`
/// is kept, in original order; when it cannot even hold the base prompt,
/// the first item alone is kept so the verifier still sees something.
#[must_use]
pub fn fit_evidence_to_budget(
    items: Vec<Evidence>,
    base_prompt: &str,
    max_tokens: usize,
) -> Vec<Evidence> {
    if items.is_empty() {
        return items;
    }

    let base_tokens = estimate_token_count(base_prompt);
    let available = max_tokens.saturating_sub(base_tokens + RESPONSE_HEADROOM_TOKENS);
    if available == 0 {
        return items.into_iter().take(1).collect();
    }

    let mut selected: Vec<Evidence> = Vec::new();
    for item in items.iter().rev() {
        let mut trial = selected.clone();
        trial.push(item.clone());
        if estimate_token_count(&format_evidence(&trial)) <= available {
            selected.push(item.clone());
        } else {
            break;
        }
    }

    if selected.len() < items.len() {
        info!(
            total = items.len(),
            kept = selected.len(),
            "truncated evidence to fit token budget"
        );
    }

    selected.reverse();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snippet(n: usize, len: usize) -> Evidence {
        Evidence::new(format!("https://example.org/{n}"), "x".repeat(len))
    }

    #[test]
    fn test_estimate() {
        assert_eq!(estimate_token_count(""), 0);
        assert_eq!(estimate_token_count("abcd"), 1);
        assert_eq!(estimate_token_count(&"x".repeat(400)), 100);
    }

    #[test]
    fn test_under_budget_is_unchanged() {
        let items = vec![snippet(1, 40), snippet(2, 40)];
        let kept = fit_evidence_to_budget(items.clone(), "base", DEFAULT_MAX_PROMPT_TOKENS);
        assert_eq!(kept, items);
    }

    #[test]
    fn test_over_budget_keeps_suffix_in_order() {
        // Each snippet is ~1000 chars => ~250 tokens; budget fits roughly two.
        let items = vec![snippet(1, 1000), snippet(2, 1000), snippet(3, 1000)];
        let kept = fit_evidence_to_budget(items.clone(), "", 1_600);
        assert!(kept.len() < items.len());
        assert!(!kept.is_empty());
        // Suffix of the input, original order.
        assert_eq!(kept, items[items.len() - kept.len()..].to_vec());
    }

    #[test]
    fn test_no_room_at_all_keeps_first_item() {
        let items = vec![snippet(1, 100), snippet(2, 100)];
        let base = "b".repeat(8_000);
        let kept = fit_evidence_to_budget(items.clone(), &base, 100);
        assert_eq!(kept, vec![items[0].clone()]);
    }

    #[test]
    fn test_format_evidence_numbering() {
        let rendered = format_evidence(&[
            Evidence::new("https://a", "one").with_title("A"),
            Evidence::new("https://b", "two"),
        ]);
        assert!(rendered.starts_with("Evidence 1 (https://a): A\none"));
        assert!(rendered.contains("Evidence 2 (https://b): two"));
    }

    #[test]
    fn test_empty_items_pass_through() {
        assert!(fit_evidence_to_budget(Vec::new(), "base", 100).is_empty());
    }
}
