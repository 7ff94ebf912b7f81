//! design-mapper - design-node classification and semantic slot mapping
//!
//! Takes a hierarchical UI design tree (as exported by a design tool and
//! parsed by an upstream ingestion layer) and:
//!
//! 1. classifies each node into a closed set of semantic component kinds
//!    using ordered, multi-signal confidence scoring, then
//! 2. recursively maps the node's descendants onto the named slot structure
//!    registered for the matched kind.
//!
//! The output [`MappingResult`] is consumed by a downstream code-generation
//! layer. The engine itself is pure and synchronous: no I/O, no shared
//! mutable state beyond the immutable registries built at startup.
//!
//! ## Quick start
//!
//! ```rust
//! use design_mapper::{DesignNode, MappingEngine, NodeKind};
//!
//! let engine = MappingEngine::new().expect("valid standard registry");
//! let node = DesignNode::new("1:1", "Checkbox, State=Default", NodeKind::Instance);
//!
//! let classification = engine.classify(&node);
//! let mapping = engine.map(&node);
//! assert_eq!(mapping.kind, classification.kind);
//! ```

pub mod assign;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod kind;
pub mod node;
pub mod registry;
pub mod schema;
pub mod variant;

pub use assign::{MappingResult, NodeRef, SlotAssignment, SlotMatch, Violation};
pub use classify::signals::SignalScore;
pub use classify::ClassificationResult;
pub use config::{weights, EngineConfig};
pub use engine::MappingEngine;
pub use error::RegistryError;
pub use kind::ComponentKind;
pub use node::{DesignNode, LayoutAxis, NodeKind, NodeSize, StyleFlags};
pub use registry::{ClassifierFn, KindEntry, KindRegistry};
pub use schema::{ComponentSchema, DetectionRule, RuleSignal, SlotSchema};
pub use variant::{VariantKeys, VariantPair};
