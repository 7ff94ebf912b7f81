//! The ordered kind table: classifier and schema bound at one definition
//! site per kind.
//!
//! Order is significant and explicit: narrow structural kinds come before
//! broad catch-alls, and the first classifier to clear the acceptance
//! threshold wins. Two composite kinds with overlapping structural signals
//! can legitimately tie for a node; the earlier entry takes it. That is a
//! documented property of the table, kept visible and regression-tested
//! rather than resolved by global re-ranking.
//!
//! A [`KindEntry`] carries kind, classifier, and schema together, so a kind
//! wired into the order without a backing classifier or schema is not
//! representable. Everything else is validated once in
//! [`KindRegistry::from_entries`].

use crate::classify::kinds;
use crate::classify::signals::SignalScore;
use crate::error::RegistryError;
use crate::kind::ComponentKind;
use crate::node::DesignNode;
use crate::schema::{catalog, ComponentSchema, SlotSchema};
use std::collections::HashSet;

/// A kind classifier: scores one node against one kind.
pub type ClassifierFn = fn(&DesignNode) -> SignalScore;

/// One row of the kind table.
#[derive(Debug)]
pub struct KindEntry {
    pub kind: ComponentKind,
    pub classifier: ClassifierFn,
    pub schema: ComponentSchema,
}

impl KindEntry {
    pub fn new(kind: ComponentKind, classifier: ClassifierFn, schema: ComponentSchema) -> Self {
        Self { kind, classifier, schema }
    }
}

/// Immutable, ordered kind table constructed once per process.
#[derive(Debug)]
pub struct KindRegistry {
    entries: Vec<KindEntry>,
}

impl KindRegistry {
    /// The standard table. Ordering is deliberate and specificity-first;
    /// reordering entries changes which kind wins structural ties.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::from_entries(vec![
            KindEntry::new(ComponentKind::Slider, kinds::classify_slider, catalog::slider()),
            KindEntry::new(ComponentKind::Pagination, kinds::classify_pagination, catalog::pagination()),
            KindEntry::new(ComponentKind::Tabs, kinds::classify_tabs, catalog::tabs()),
            KindEntry::new(ComponentKind::Button, kinds::classify_button, catalog::button()),
            KindEntry::new(ComponentKind::Input, kinds::classify_input, catalog::input()),
            KindEntry::new(ComponentKind::Textarea, kinds::classify_textarea, catalog::textarea()),
            KindEntry::new(ComponentKind::Field, kinds::classify_field, catalog::field()),
            KindEntry::new(ComponentKind::Checkbox, kinds::classify_checkbox, catalog::checkbox()),
            KindEntry::new(ComponentKind::RadioGroup, kinds::classify_radio_group, catalog::radio_group()),
            KindEntry::new(ComponentKind::Radio, kinds::classify_radio, catalog::radio()),
            KindEntry::new(ComponentKind::Switch, kinds::classify_switch, catalog::switch()),
            KindEntry::new(ComponentKind::ToggleGroup, kinds::classify_toggle_group, catalog::toggle_group()),
            KindEntry::new(ComponentKind::Select, kinds::classify_select, catalog::select()),
            KindEntry::new(ComponentKind::Dialog, kinds::classify_dialog, catalog::dialog()),
            KindEntry::new(ComponentKind::Card, kinds::classify_card, catalog::card()),
            KindEntry::new(ComponentKind::Form, kinds::classify_form, catalog::form()),
            KindEntry::new(ComponentKind::Alert, kinds::classify_alert, catalog::alert()),
            KindEntry::new(ComponentKind::Badge, kinds::classify_badge, catalog::badge()),
            KindEntry::new(ComponentKind::Icon, kinds::classify_icon, catalog::icon()),
            KindEntry::new(ComponentKind::Image, kinds::classify_image, catalog::image()),
            KindEntry::new(ComponentKind::Text, kinds::classify_text, catalog::text()),
        ])
    }

    /// Validate and seal a table. Fails fast on duplicate kinds, a wired-in
    /// `Unknown`, or malformed schemas; none of these conditions may survive
    /// to per-node processing.
    pub fn from_entries(entries: Vec<KindEntry>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.kind.is_unknown() {
                return Err(RegistryError::ReservedKind);
            }
            if !seen.insert(entry.kind) {
                return Err(RegistryError::DuplicateKind { kind: entry.kind });
            }
            validate_slots(entry.kind, &entry.schema.slots)?;
        }

        Ok(Self { entries })
    }

    /// Entries in evaluation order.
    pub fn entries(&self) -> &[KindEntry] {
        &self.entries
    }

    /// Kinds in evaluation order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.entries.iter().map(|e| e.kind)
    }

    /// Schema lookup. `None` is a recoverable condition for the caller
    /// (surfaced as a mapping violation), never a fault.
    pub fn schema_for(&self, kind: ComponentKind) -> Option<&ComponentSchema> {
        self.entries.iter().find(|e| e.kind == kind).map(|e| &e.schema)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_slots(kind: ComponentKind, slots: &[SlotSchema]) -> Result<(), RegistryError> {
    let mut names = HashSet::new();
    for slot in slots {
        if slot.name.trim().is_empty() {
            return Err(RegistryError::EmptySlotName { kind });
        }
        if !names.insert(slot.name.as_str()) {
            return Err(RegistryError::DuplicateSlotName {
                kind,
                slot: slot.name.clone(),
            });
        }
        for rule in &slot.rules {
            if !(0.0..=1.0).contains(&rule.weight) {
                return Err(RegistryError::InvalidRuleWeight {
                    kind,
                    slot: slot.name.clone(),
                    weight: rule.weight,
                });
            }
        }
        validate_slots(kind, &slot.children)?;
    }
    Ok(())
}
