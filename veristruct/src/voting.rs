//! Consensus voting over repeated completions.
//!
//! One completion per item is cheap but noisy; the benchmark runs ask each
//! question several times and keep an item only when enough attempts
//! succeed.

use futures::future::join_all;
use std::future::Future;
use tracing::info;

/// How many attempts to make per item and how many must succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotingConfig {
    /// Completions per item.
    pub completions: usize,
    /// Minimum successful completions for the item to count.
    pub min_successes: usize,
}

impl VotingConfig {
    /// Create a voting config.
    #[must_use]
    pub fn new(completions: usize, min_successes: usize) -> Self {
        Self {
            completions,
            min_successes,
        }
    }
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            completions: 1,
            min_successes: 1,
        }
    }
}

/// Bump temperature for diversity when sampling multiple completions.
///
/// A deterministic temperature defeats the point of voting, so 0.0 becomes
/// 0.2 whenever more than one completion is requested.
#[must_use]
pub fn diversity_temperature(temperature: f64, completions: usize) -> f64 {
    if completions > 1 && temperature == 0.0 {
        0.2
    } else {
        temperature
    }
}

/// Process items with multiple attempts and consensus voting.
///
/// For each item, `processor` runs `config.completions` times
/// concurrently. Items with fewer than `config.min_successes` successful
/// attempts are skipped (with an info log). Otherwise the first successful
/// attempt is passed through `result_factory`, whose `Some` output is
/// collected.
///
/// `description` names the item kind in log lines.
pub async fn process_with_voting<T, R, O, F, Fut, G>(
    items: Vec<T>,
    processor: F,
    config: &VotingConfig,
    result_factory: G,
    description: &str,
) -> Vec<O>
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Option<R>>,
    G: Fn(R, &T) -> Option<O>,
{
    let mut results = Vec::new();

    for item in items {
        let attempts = join_all(
            (0..config.completions).map(|_| processor(item.clone())),
        )
        .await;

        let success_count = attempts.iter().filter(|a| a.is_some()).count();
        if success_count < config.min_successes {
            info!(
                successes = success_count,
                required = config.min_successes,
                description,
                "not enough successes, skipping item"
            );
            continue;
        }

        for attempt in attempts {
            if let Some(result) = attempt {
                if let Some(processed) = result_factory(result, &item) {
                    results.push(processed);
                    break;
                }
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_diversity_temperature() {
        assert_eq!(diversity_temperature(0.0, 1), 0.0);
        assert_eq!(diversity_temperature(0.0, 3), 0.2);
        assert_eq!(diversity_temperature(0.7, 3), 0.7);
    }

    #[tokio::test]
    async fn test_quorum_met_takes_first_success() {
        let items = vec!["a", "b"];
        let results = process_with_voting(
            items,
            |item| async move { Some(format!("{item}-claim")) },
            &VotingConfig::new(3, 2),
            |claim, item| Some((item.to_string(), claim)),
            "sentence",
        )
        .await;

        assert_eq!(
            results,
            vec![
                ("a".to_string(), "a-claim".to_string()),
                ("b".to_string(), "b-claim".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_quorum_not_met_skips_item() {
        let calls = AtomicUsize::new(0);
        let results: Vec<String> = process_with_voting(
            vec!["only"],
            |_item| {
                // One success out of three attempts; quorum needs two.
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Some("lone success".to_string())
                    } else {
                        None
                    }
                }
            },
            &VotingConfig::new(3, 2),
            |result, _| Some(result),
            "sentence",
        )
        .await;

        assert!(results.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_result_factory_can_reject() {
        let results: Vec<String> = process_with_voting(
            vec![1, 2, 3],
            |item| async move { Some(item) },
            &VotingConfig::default(),
            |n, _| if n % 2 == 0 { Some(format!("even-{n}")) } else { None },
            "number",
        )
        .await;

        assert_eq!(results, vec!["even-2".to_string()]);
    }
}
