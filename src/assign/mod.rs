//! Slot Assignment Engine: maps a classified node's descendants onto the
//! kind's slot structure.
//!
//! Depth-first over the schema. At each level the still-unassigned
//! candidates (direct children, plus one nested level when enabled) are
//! scored against each slot's detection rules in slot order. A required
//! slot that matches nothing records a violation and processing continues;
//! the result is always fully populated, partial matches included.

use crate::classify::classify_node;
use crate::config::EngineConfig;
use crate::kind::ComponentKind;
use crate::node::DesignNode;
use crate::registry::KindRegistry;
use crate::schema::{RuleSignal, SlotSchema};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Non-owning reference to a matched design node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
    pub name: String,
}

impl NodeRef {
    fn of(node: &DesignNode) -> Self {
        Self { id: node.id.clone(), name: node.name.clone() }
    }
}

/// One node matched into a slot, with its own nested slot assignments when
/// the slot declares a child schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotMatch {
    pub node: NodeRef,
    /// Capped rule-sum score that won this node the slot.
    pub score: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SlotAssignment>,
}

/// Assignment outcome for one slot: matched nodes in encounter order and
/// the slot confidence (max contributing rule score across matches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub slot: String,
    pub confidence: f32,
    pub matches: Vec<SlotMatch>,
}

impl SlotAssignment {
    pub fn is_filled(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Recoverable mapping conditions, surfaced in the result rather than
/// raised. Nested slot paths are dotted (e.g. "header.title").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    SchemaMissing { component: ComponentKind },
    RequiredSlotUnfilled { slot: String },
}

/// Final mapping for one node: always populated, even on low-confidence or
/// partial matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub kind: ComponentKind,
    /// Violation-penalized average over the required slots that were
    /// scanned; an unfilled required slot counts as 0.
    pub confidence: f32,
    pub slots: Vec<SlotAssignment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl MappingResult {
    pub fn slot(&self, name: &str) -> Option<&SlotAssignment> {
        self.slots.iter().find(|s| s.slot == name)
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// A scoring candidate: a descendant of the node being mapped.
struct Candidate<'a> {
    node: &'a DesignNode,
    /// Index among its own siblings, used by the positional heuristic.
    index: usize,
    direct: bool,
}

/// Map `node`, already classified as `kind`, onto the kind's schema.
pub(crate) fn assign_kind(
    registry: &KindRegistry,
    config: &EngineConfig,
    kind: ComponentKind,
    node: &DesignNode,
) -> MappingResult {
    let Some(schema) = registry.schema_for(kind) else {
        warn!(%kind, node = %node.name, "kind has no registered schema");
        return MappingResult {
            kind,
            confidence: 0.0,
            slots: Vec::new(),
            violations: vec![Violation::SchemaMissing { component: kind }],
        };
    };

    let mut violations = Vec::new();
    let mut required_confidences = Vec::new();
    let slots = assign_level(
        registry,
        config,
        &schema.slots,
        node,
        "",
        &mut violations,
        &mut required_confidences,
    );

    let confidence = overall_confidence(schema.is_empty(), &slots, &required_confidences);
    MappingResult { kind, confidence, slots, violations }
}

/// Assign one schema level against one parent node. Sibling slots compete
/// for the same candidate pool; a candidate fills at most one slot.
fn assign_level(
    registry: &KindRegistry,
    config: &EngineConfig,
    slots: &[SlotSchema],
    parent: &DesignNode,
    path_prefix: &str,
    violations: &mut Vec<Violation>,
    required_confidences: &mut Vec<f32>,
) -> Vec<SlotAssignment> {
    let candidates = collect_candidates(parent, config);
    let mut assigned: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(slots.len());

    for (ordinal, slot) in slots.iter().enumerate() {
        let path = if path_prefix.is_empty() {
            slot.name.clone()
        } else {
            format!("{}.{}", path_prefix, slot.name)
        };

        // Score every still-unassigned candidate against this slot.
        let mut scored: Vec<(usize, f32, f32)> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| !assigned.contains(c.node.id.as_str()))
            .map(|(i, c)| {
                let (total, max_rule) = score_candidate(registry, config, slot, c);
                (i, total, max_rule)
            })
            .filter(|(_, total, _)| *total >= config.slot_floor)
            .collect();

        let taken: Vec<(usize, f32, f32)> = if slot.allows_multiple {
            // Every qualifying candidate, in encounter order.
            scored
        } else {
            // Best score; ties break by proximity to the expected position.
            let expected = slot.expected_index().unwrap_or(ordinal);
            scored.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| {
                        let da = candidates[a.0].index.abs_diff(expected);
                        let db = candidates[b.0].index.abs_diff(expected);
                        da.cmp(&db)
                    })
            });
            scored.truncate(1);
            scored
        };

        let mut matches = Vec::with_capacity(taken.len());
        let mut slot_confidence = 0.0f32;

        for (i, total, max_rule) in taken {
            let candidate = &candidates[i];
            assigned.insert(candidate.node.id.as_str());
            slot_confidence = slot_confidence.max(max_rule);

            let children = if slot.children.is_empty() {
                Vec::new()
            } else {
                assign_level(
                    registry,
                    config,
                    &slot.children,
                    candidate.node,
                    &path,
                    violations,
                    required_confidences,
                )
            };

            debug!(slot = %path, node = %candidate.node.name, score = total, "slot filled");
            matches.push(SlotMatch { node: NodeRef::of(candidate.node), score: total, children });
        }

        if matches.is_empty() && slot.required {
            debug!(slot = %path, "required slot unfilled");
            violations.push(Violation::RequiredSlotUnfilled { slot: path });
        }
        if slot.required {
            required_confidences.push(slot_confidence);
        }

        out.push(SlotAssignment {
            slot: slot.name.clone(),
            confidence: slot_confidence,
            matches,
        });
    }

    out
}

/// Direct children first, then one nested level, all in encounter order.
fn collect_candidates<'a>(parent: &'a DesignNode, config: &EngineConfig) -> Vec<Candidate<'a>> {
    let mut out: Vec<Candidate<'a>> = parent
        .children
        .iter()
        .enumerate()
        .map(|(index, node)| Candidate { node, index, direct: true })
        .collect();

    if config.nested_candidates {
        for child in &parent.children {
            for (index, node) in child.children.iter().enumerate() {
                out.push(Candidate { node, index, direct: false });
            }
        }
    }

    out
}

/// Score one candidate against one slot's rules. Returns the capped rule
/// sum (selection score) and the max single-rule contribution (the slot
/// confidence when this candidate wins).
fn score_candidate(
    registry: &KindRegistry,
    config: &EngineConfig,
    slot: &SlotSchema,
    candidate: &Candidate<'_>,
) -> (f32, f32) {
    let mut total = 0.0f32;
    let mut max_rule = 0.0f32;
    let name = candidate.node.name_norm();

    for rule in &slot.rules {
        let contribution = match &rule.signal {
            RuleSignal::NameToken { tokens } => {
                if tokens.iter().any(|t| name.contains(t.as_str())) {
                    rule.weight
                } else {
                    0.0
                }
            }
            RuleSignal::Position { expected } => match candidate.index.abs_diff(*expected) {
                0 => rule.weight,
                1 => rule.weight * 0.5,
                _ => 0.0,
            },
            RuleSignal::Content { kinds } => {
                let classified = classify_node(registry, config, candidate.node);
                if kinds.contains(&classified.kind) {
                    rule.weight
                } else {
                    0.0
                }
            }
            RuleSignal::NodeTag { kinds } => {
                if kinds.contains(&candidate.node.kind) {
                    rule.weight
                } else {
                    0.0
                }
            }
            RuleSignal::DirectChild => {
                if candidate.direct {
                    rule.weight
                } else {
                    0.0
                }
            }
        };

        total = (total + contribution).min(1.0);
        max_rule = max_rule.max(contribution);
    }

    (total, max_rule)
}

/// Overall result confidence. With required slots: their average, unfilled
/// counting 0. Without: average of filled slot confidences, 1.0 for a leaf
/// kind with an empty schema, neutral 0.5 when nothing matched at all.
fn overall_confidence(
    schema_empty: bool,
    slots: &[SlotAssignment],
    required_confidences: &[f32],
) -> f32 {
    if !required_confidences.is_empty() {
        return required_confidences.iter().sum::<f32>() / required_confidences.len() as f32;
    }
    let filled: Vec<f32> = slots
        .iter()
        .filter(|s| s.is_filled())
        .map(|s| s.confidence)
        .collect();
    if !filled.is_empty() {
        filled.iter().sum::<f32>() / filled.len() as f32
    } else if schema_empty {
        1.0
    } else {
        0.5
    }
}
