//! Construction-time error types.
//!
//! Classification and mapping never fail for data-shape reasons; every
//! runtime condition is captured inside the result values. The only
//! fallible point is registry construction, which fails fast here.

use crate::kind::ComponentKind;
use thiserror::Error;

/// Registry wiring problems, surfaced once at startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("component kind '{kind}' is registered more than once")]
    DuplicateKind { kind: ComponentKind },

    #[error("'Unknown' is the engine fallback and cannot be a table entry")]
    ReservedKind,

    #[error("empty registry: at least one kind entry is required")]
    Empty,

    #[error("rule weight {weight} out of [0, 1] in slot '{slot}' of kind '{kind}'")]
    InvalidRuleWeight {
        kind: ComponentKind,
        slot: String,
        weight: f32,
    },

    #[error("empty slot name in schema for kind '{kind}'")]
    EmptySlotName { kind: ComponentKind },

    #[error("duplicate slot name '{slot}' at one schema level of kind '{kind}'")]
    DuplicateSlotName { kind: ComponentKind, slot: String },
}
