//! Variant-key extraction from free-text node names.
//!
//! Design tools encode variant axes inline, e.g.
//! `"Checkbox, Status=Active, State=Default"`. This module pulls the ordered
//! `Key=Value` pairs out of such text. It is deliberately a small pure
//! function with its own tests, independent of any classifier weight.

/// One parsed `Key=Value` pair, keys and values normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPair {
    pub key: String,
    pub value: String,
}

/// Ordered variant pairs extracted from one text fragment.
///
/// Unknown keys are retained (classifiers simply ignore keys they do not
/// reference). On duplicate keys, [`VariantKeys::get`] returns the last
/// occurrence. Fragments that look like assignments but fail to parse are
/// dropped and counted in [`VariantKeys::skipped`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantKeys {
    pairs: Vec<VariantPair>,
    skipped: usize,
}

impl VariantKeys {
    /// Parse comma-separated `Key=Value` fragments, case-insensitively and
    /// whitespace-tolerantly. Fragments without `=` (plain name tokens) are
    /// ignored without counting as malformed.
    pub fn parse(text: &str) -> Self {
        let mut pairs = Vec::new();
        let mut skipped = 0;

        for fragment in text.split(',') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            let Some(eq) = fragment.find('=') else {
                // Plain token such as the component name prefix; not a
                // malformed assignment.
                continue;
            };

            let key = fragment[..eq].trim().to_lowercase();
            let value = fragment[eq + 1..].trim().to_lowercase();

            if key.is_empty() || value.is_empty() || value.contains('=') {
                skipped += 1;
                continue;
            }

            pairs.push(VariantPair { key, value });
        }

        Self { pairs, skipped }
    }

    /// Last-wins lookup by case-insensitive key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.pairs
            .iter()
            .rev()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// True when `key` resolves (last-wins) to exactly `value`.
    pub fn has_pair(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value.to_lowercase().as_str())
    }

    /// Ordered pairs as parsed, duplicates included.
    pub fn pairs(&self) -> &[VariantPair] {
        &self.pairs
    }

    /// Number of assignment-shaped fragments that failed to parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}
