//! Slot schemas: the named, typed structure each component kind expects.
//!
//! Schemas are pure data. Tuning a kind's structure happens here (or in the
//! catalog) without touching classifier or engine logic.

pub mod catalog;

use crate::kind::ComponentKind;
use crate::node::NodeKind;
use serde::{Deserialize, Serialize};

/// A weighted detection rule for matching a child node to a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRule {
    pub signal: RuleSignal,
    pub weight: f32,
}

/// The signal a detection rule evaluates against a candidate child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleSignal {
    /// Candidate name contains any of these lowercase tokens.
    NameToken { tokens: Vec<String> },
    /// Candidate sits at (or adjacent to) this index among its siblings.
    Position { expected: usize },
    /// Candidate itself classifies as one of these kinds.
    Content { kinds: Vec<ComponentKind> },
    /// Candidate carries one of these node kind tags.
    NodeTag { kinds: Vec<NodeKind> },
    /// Candidate is a direct child rather than a nested descendant.
    DirectChild,
}

/// One named slot in a kind's structure. Recursive: a matched child can be
/// mapped further through `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSchema {
    pub name: String,
    pub required: bool,
    pub allows_multiple: bool,
    pub rules: Vec<DetectionRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SlotSchema>,
}

impl SlotSchema {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            allows_multiple: false,
            rules: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            allows_multiple: false,
            rules: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn multiple(mut self) -> Self {
        self.allows_multiple = true;
        self
    }

    pub fn rule(mut self, signal: RuleSignal, weight: f32) -> Self {
        self.rules.push(DetectionRule { signal, weight });
        self
    }

    /// Shorthand for the common name-token rule.
    pub fn named(self, tokens: &[&str], weight: f32) -> Self {
        self.rule(
            RuleSignal::NameToken {
                tokens: tokens.iter().map(|t| t.to_string()).collect(),
            },
            weight,
        )
    }

    /// Shorthand for the content-type rule.
    pub fn content(self, kinds: &[ComponentKind], weight: f32) -> Self {
        self.rule(RuleSignal::Content { kinds: kinds.to_vec() }, weight)
    }

    pub fn at_index(self, expected: usize, weight: f32) -> Self {
        self.rule(RuleSignal::Position { expected }, weight)
    }

    pub fn direct(self, weight: f32) -> Self {
        self.rule(RuleSignal::DirectChild, weight)
    }

    pub fn with_children(mut self, children: Vec<SlotSchema>) -> Self {
        self.children = children;
        self
    }

    /// Expected index from the positional rule, if the slot declares one.
    pub fn expected_index(&self) -> Option<usize> {
        self.rules.iter().find_map(|r| match r.signal {
            RuleSignal::Position { expected } => Some(expected),
            _ => None,
        })
    }
}

/// The slot structure registered for one component kind: an ordered list of
/// top-level slots, each possibly carrying nested slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSchema {
    pub slots: Vec<SlotSchema>,
}

impl ComponentSchema {
    pub fn new(slots: Vec<SlotSchema>) -> Self {
        Self { slots }
    }

    /// Leaf kinds map to an empty structure.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in depth-first order, with dotted path names.
    pub fn walk(&self) -> Vec<(String, &SlotSchema)> {
        fn visit<'a>(prefix: &str, slots: &'a [SlotSchema], out: &mut Vec<(String, &'a SlotSchema)>) {
            for slot in slots {
                let path = if prefix.is_empty() {
                    slot.name.clone()
                } else {
                    format!("{}.{}", prefix, slot.name)
                };
                out.push((path.clone(), slot));
                visit(&path, &slot.children, out);
            }
        }
        let mut out = Vec::new();
        visit("", &self.slots, &mut out);
        out
    }
}
