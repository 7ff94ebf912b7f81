//! Engine tuning values.
//!
//! Thresholds and signal weights are empirically tuned, not derived.
//! Changing one is a tuning decision, not a correctness fix, and should be
//! treated as such in review. Everything here is a named constant or an
//! overridable config field; no magic literals elsewhere.

/// Per-signal weight constants used by the kind classifiers.
pub mod weights {
    /// Canonical token equals the normalized name stem (text before the
    /// first comma).
    pub const NAME_EXACT: f32 = 0.7;
    /// Canonical token appears as a substring of the name.
    pub const NAME_TOKEN: f32 = 0.5;
    /// A weaker alias appears as a substring of the name.
    pub const NAME_WEAK: f32 = 0.4;
    /// An expected variant key is present for this kind.
    pub const VARIANT_KEY: f32 = 0.2;
    /// Per matched structural child role (icon/title/description/...).
    pub const STRUCTURAL_ROLE: f32 = 0.15;
    /// Node kind tag matches (e.g. a vector node for Icon).
    pub const NODE_KIND: f32 = 0.4;
    /// Layout-axis tie-breaker.
    pub const LAYOUT_HINT: f32 = 0.1;
    /// Aspect-ratio / absolute-size tie-breaker.
    pub const GEOMETRY_HINT: f32 = 0.1;
    /// Fill/border/corner-radius tie-breaker.
    pub const STYLE_HINT: f32 = 0.1;
}

/// Tunable engine parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Minimum classifier confidence for a kind to win (first past this
    /// threshold in registry order is returned).
    pub accept_threshold: f32,
    /// Minimum candidate score for a child to fill a slot. Lower than the
    /// acceptance threshold on purpose: a slot match rides on an already
    /// accepted classification.
    pub slot_floor: f32,
    /// Whether slot candidates include one nested level (grandchildren) in
    /// addition to direct children.
    pub nested_candidates: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 0.4,
            slot_floor: 0.3,
            nested_candidates: true,
        }
    }
}
