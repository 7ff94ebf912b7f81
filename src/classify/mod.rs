//! Classification Engine: ordered, first-past-threshold kind resolution.
//!
//! Classifiers run in registry order; the first kind whose confidence
//! reaches the acceptance threshold wins. No global re-ranking: the trade
//! is recall for explainability and predictable tie-breaking. When nothing
//! qualifies the node resolves to `Unknown` with confidence 0, keeping the
//! best-scoring attempt's reasons for diagnostics.

pub mod kinds;
pub mod signals;

use crate::config::EngineConfig;
use crate::kind::ComponentKind;
use crate::node::DesignNode;
use crate::registry::KindRegistry;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Outcome of classifying one node. Always produced; never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub kind: ComponentKind,
    /// Heuristic certainty in [0, 1]; not a calibrated probability.
    pub confidence: f32,
    /// Human-readable contributing signals, in evaluation order.
    pub reasons: Vec<String>,
}

impl ClassificationResult {
    pub fn is_unknown(&self) -> bool {
        self.kind.is_unknown()
    }
}

/// Run the ordered classifier table against one node.
pub(crate) fn classify_node(
    registry: &KindRegistry,
    config: &EngineConfig,
    node: &DesignNode,
) -> ClassificationResult {
    let mut best: Option<(ComponentKind, f32, Vec<String>)> = None;

    for entry in registry.entries() {
        let (confidence, reasons) = (entry.classifier)(node).into_parts();
        trace!(kind = %entry.kind, confidence, "classifier evaluated");

        if confidence >= config.accept_threshold {
            debug!(
                kind = %entry.kind,
                confidence,
                node = %node.name,
                "classification accepted"
            );
            return ClassificationResult { kind: entry.kind, confidence, reasons };
        }

        let improves = best
            .as_ref()
            .map_or(confidence > 0.0, |(_, b, _)| confidence > *b);
        if improves {
            best = Some((entry.kind, confidence, reasons));
        }
    }

    // Nothing cleared the threshold: explicit Unknown fallback, keeping the
    // nearest miss visible for diagnostics.
    let reasons = match best {
        Some((kind, confidence, mut reasons)) => {
            reasons.push(format!("best attempt: {} at {:.2}", kind, confidence));
            reasons
        }
        None => Vec::new(),
    };
    debug!(node = %node.name, "no classifier cleared threshold; Unknown");
    ClassificationResult {
        kind: ComponentKind::Unknown,
        confidence: 0.0,
        reasons,
    }
}
