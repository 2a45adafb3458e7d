//! Token accounting.
//!
//! Token counting is a capability, not an algorithm this crate owns: real
//! deployments pair the pipeline with whatever tokenizer their model uses.
//! [`TokenCounter`] is the seam; [`CharTokenCounter`] is the built-in
//! deterministic estimator used when nothing better is supplied.

/// Counts tokens of a text for budget accounting.
///
/// Implementations must be pure: the same text always yields the same
/// count, and counting has no side effects. The pipeline invokes the
/// counter once on the final content string and attaches the result.
pub trait TokenCounter {
    fn count(&self, text: &str) -> usize;
}

/// Character-ratio token estimator.
///
/// Approximates one token per `chars_per_token` characters, rounding up.
/// The default of 4 tracks common BPE tokenizers on English prose closely
/// enough for budgeting purposes.
#[derive(Debug, Clone)]
pub struct CharTokenCounter {
    /// Characters per estimated token.
    pub chars_per_token: usize,
}

impl Default for CharTokenCounter {
    fn default() -> Self {
        Self { chars_per_token: 4 }
    }
}

impl TokenCounter for CharTokenCounter {
    fn count(&self, text: &str) -> usize {
        let chars = text.chars().count();
        if chars == 0 {
            return 0;
        }
        chars.div_ceil(self.chars_per_token.max(1))
    }
}

/// Truncates text to a token budget at `\n\n` block boundaries.
///
/// Trailing blocks are dropped until the text fits. Truncation is
/// whole-block: the first block is always kept even when it alone exceeds
/// the budget, so a non-empty input never truncates to an empty string.
pub fn truncate_to_budget(counter: &dyn TokenCounter, text: &str, max_tokens: usize) -> String {
    if counter.count(text) <= max_tokens {
        return text.to_string();
    }

    let mut kept = String::new();
    for block in text.split("\n\n") {
        let candidate =
            if kept.is_empty() { block.to_string() } else { format!("{}\n\n{}", kept, block) };

        if counter.count(&candidate) > max_tokens && !kept.is_empty() {
            break;
        }

        let over_budget = counter.count(&candidate) > max_tokens;
        kept = candidate;
        if over_budget {
            break;
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_counts_zero() {
        assert_eq!(CharTokenCounter::default().count(""), 0);
    }

    #[test]
    fn test_count_rounds_up() {
        let counter = CharTokenCounter::default();
        assert_eq!(counter.count("abcd"), 1);
        assert_eq!(counter.count("abcde"), 2);
    }

    #[test]
    fn test_count_is_deterministic() {
        let counter = CharTokenCounter::default();
        let text = "The same text always counts the same.";
        assert_eq!(counter.count(text), counter.count(text));
    }

    #[test]
    fn test_truncate_noop_within_budget() {
        let counter = CharTokenCounter::default();
        let text = "Short block.\n\nAnother short block.";
        assert_eq!(truncate_to_budget(&counter, text, 1000), text);
    }

    #[test]
    fn test_truncate_drops_trailing_blocks() {
        let counter = CharTokenCounter::default();
        let first = "a".repeat(40);
        let second = "b".repeat(40);
        let text = format!("{}\n\n{}", first, second);

        let truncated = truncate_to_budget(&counter, &text, 12);
        assert_eq!(truncated, first);
        assert!(counter.count(&truncated) <= 12);
    }

    #[test]
    fn test_truncate_keeps_oversized_first_block() {
        let counter = CharTokenCounter::default();
        let first = "a".repeat(400);
        let text = format!("{}\n\nmore", first);

        let truncated = truncate_to_budget(&counter, &text, 10);
        assert_eq!(truncated, first);
    }
}
