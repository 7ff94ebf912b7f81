//! Signal scoring primitives shared by all kind classifiers.
//!
//! Each classifier accumulates independent weighted signals into a
//! [`SignalScore`]; the running total is capped at 1.0 and every
//! contribution records a human-readable reason for diagnostics.

use crate::config::weights;
use crate::node::{DesignNode, NodeKind};
use smallvec::SmallVec;

/// Capped additive score with one reason per contributing signal.
#[derive(Debug, Clone, Default)]
pub struct SignalScore {
    total: f32,
    reasons: SmallVec<[String; 4]>,
}

impl SignalScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weighted signal. The total saturates at 1.0 but the reason is
    /// always recorded.
    pub fn add(&mut self, weight: f32, reason: impl Into<String>) {
        self.total = (self.total + weight).min(1.0);
        self.reasons.push(reason.into());
    }

    /// Record a diagnostic reason that contributes no weight (e.g. malformed
    /// variant text that was ignored).
    pub fn note(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub fn value(&self) -> f32 {
        self.total
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn into_parts(self) -> (f32, Vec<String>) {
        (self.total, self.reasons.into_vec())
    }
}

/// Name-token signal: match `canonical` (strong) or one of `aliases` (weak)
/// against the lowercased node name. Any hit from `exclusions` zeroes the
/// signal even on a partial match, which is what keeps a "check" icon-button
/// out of the Checkbox classifier.
pub fn name_signal(
    node: &DesignNode,
    canonical: &str,
    aliases: &[&str],
    exclusions: &[&str],
) -> Option<(f32, String)> {
    let name = node.name_norm();
    if name.is_empty() {
        return None;
    }

    if let Some(excluded) = exclusions.iter().find(|e| name.contains(**e)) {
        return Some((0.0, format!("name excluded by token '{}'", excluded)));
    }

    // The stem is the text before any inline variant block.
    let stem = name.split(',').next().unwrap_or("").trim();

    if stem == canonical {
        return Some((weights::NAME_EXACT, format!("name is '{}'", canonical)));
    }
    if name.contains(canonical) {
        return Some((weights::NAME_TOKEN, format!("name contains '{}'", canonical)));
    }
    for alias in aliases {
        if name.contains(alias) {
            return Some((weights::NAME_WEAK, format!("name contains alias '{}'", alias)));
        }
    }
    None
}

/// Count distinct role keywords matched by direct children's names.
/// Used by composite kinds (Alert, Card, Dialog, Field, ...).
pub fn matched_roles<'a>(node: &DesignNode, roles: &[&'a str]) -> Vec<&'a str> {
    roles
        .iter()
        .copied()
        .filter(|role| node.has_child_named(role))
        .collect()
}

/// True if the node carries at least one text-kind direct child.
pub fn has_text_child(node: &DesignNode) -> bool {
    node.has_child_of_kind(NodeKind::Text)
}

/// True if the node carries at least one vector-kind direct child.
pub fn has_vector_child(node: &DesignNode) -> bool {
    node.has_child_of_kind(NodeKind::Vector)
}

/// Wide-and-short geometry typical of inline controls (inputs, sliders).
pub fn is_wide(node: &DesignNode) -> bool {
    node.size.aspect_ratio() >= 2.0
}

/// Small square footprint typical of toggles and icons.
pub fn is_compact_square(node: &DesignNode) -> bool {
    node.size.is_squarish() && node.size.width > 0.0 && node.size.width <= 48.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn test_score_caps_at_one() {
        let mut score = SignalScore::new();
        score.add(0.7, "a");
        score.add(0.5, "b");
        score.add(0.4, "c");
        assert_eq!(score.value(), 1.0);
        assert_eq!(score.reasons().len(), 3);
    }

    #[test]
    fn test_note_adds_no_weight() {
        let mut score = SignalScore::new();
        score.note("variant text ignored");
        assert_eq!(score.value(), 0.0);
        assert_eq!(score.reasons().len(), 1);
    }

    #[test]
    fn test_name_signal_exact_vs_substring() {
        let exact = DesignNode::new("1", "Checkbox, State=Default", NodeKind::Instance);
        let sub = DesignNode::new("2", "My Checkbox Row", NodeKind::Frame);
        assert_eq!(
            name_signal(&exact, "checkbox", &[], &[]).unwrap().0,
            weights::NAME_EXACT
        );
        assert_eq!(
            name_signal(&sub, "checkbox", &[], &[]).unwrap().0,
            weights::NAME_TOKEN
        );
    }

    #[test]
    fn test_exclusion_zeroes_partial_match() {
        let node = DesignNode::new("1", "Check Icon Button", NodeKind::Instance);
        let (weight, reason) =
            name_signal(&node, "checkbox", &["check"], &["button", "icon"]).unwrap();
        assert_eq!(weight, 0.0);
        assert!(reason.contains("excluded"));
    }

    #[test]
    fn test_matched_roles() {
        let node = DesignNode::new("1", "Alert", NodeKind::Frame).with_children(vec![
            DesignNode::new("2", "Icon", NodeKind::Vector),
            DesignNode::new("3", "Title", NodeKind::Text),
        ]);
        let roles = matched_roles(&node, &["icon", "title", "description"]);
        assert_eq!(roles, vec!["icon", "title"]);
    }
}
