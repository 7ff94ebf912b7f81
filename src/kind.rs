//! The closed set of semantic component kinds a node can classify into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic target type for a design node.
///
/// This is a CLOSED set: the engine can only classify into these variants,
/// and adding one means adding a classifier and a slot schema alongside it
/// (the registry refuses partially wired kinds at construction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Slider,
    Pagination,
    Tabs,
    Button,
    Input,
    Textarea,
    Field,
    Checkbox,
    RadioGroup,
    Radio,
    Switch,
    ToggleGroup,
    Select,
    Dialog,
    Card,
    Form,
    Alert,
    Badge,
    Icon,
    Image,
    Text,
    /// Fallback when no classifier clears the acceptance threshold.
    /// Never an entry in the registry table.
    Unknown,
}

impl ComponentKind {
    /// Content-level kinds the slot assignment content heuristic targets.
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Icon | Self::Image | Self::Text)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slider => "Slider",
            Self::Pagination => "Pagination",
            Self::Tabs => "Tabs",
            Self::Button => "Button",
            Self::Input => "Input",
            Self::Textarea => "Textarea",
            Self::Field => "Field",
            Self::Checkbox => "Checkbox",
            Self::RadioGroup => "RadioGroup",
            Self::Radio => "Radio",
            Self::Switch => "Switch",
            Self::ToggleGroup => "ToggleGroup",
            Self::Select => "Select",
            Self::Dialog => "Dialog",
            Self::Card => "Card",
            Self::Form => "Form",
            Self::Alert => "Alert",
            Self::Badge => "Badge",
            Self::Icon => "Icon",
            Self::Image => "Image",
            Self::Text => "Text",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}
