//! End-to-end mapping scenarios.
//!
//! These pin the engine's observable behavior: the variant-driven checkbox
//! classification, the documented Card/Alert structural tie, the Field slot
//! mapping, violation handling, multi-slot capture, and exact serde
//! round-tripping of mapping results.

use anyhow::Result;
use design_mapper::{
    classify::kinds, ComponentKind, DesignNode, MappingEngine, MappingResult, NodeKind,
    VariantKeys, Violation,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn engine() -> MappingEngine {
    init_tracing();
    MappingEngine::new().expect("standard registry is valid")
}

fn alert_shaped_node() -> DesignNode {
    DesignNode::new("10:1", "Alert", NodeKind::Frame).with_children(vec![
        DesignNode::new("10:2", "Icon", NodeKind::Vector),
        DesignNode::new("10:3", "Title", NodeKind::Text),
        DesignNode::new("10:4", "Description", NodeKind::Text),
    ])
}

/// A leaf instance named with inline variant keys classifies as Checkbox
/// with high confidence, and the variant parser recovers both axes.
#[test]
fn test_checkbox_with_variant_keys() {
    let node = DesignNode::new("1:1", "Checkbox, Status=Active, State=Default", NodeKind::Instance);

    let result = engine().classify(&node);
    assert_eq!(result.kind, ComponentKind::Checkbox);
    assert!(result.confidence >= 0.6, "confidence {}", result.confidence);

    let keys = VariantKeys::parse(node.variant_source());
    assert_eq!(keys.get("status"), Some("active"));
    assert_eq!(keys.get("state"), Some("default"));
    assert_eq!(keys.len(), 2);
}

/// Documented structural tie: a node named "Alert" whose children also fit
/// Card's structural signals goes to Card, because Card sits earlier in the
/// registry and clears the threshold first. This is deliberate, order-
/// sensitive behavior; do not "fix" it by re-ranking.
#[test]
fn test_card_wins_structural_tie_with_alert() {
    let node = alert_shaped_node();

    // Both classifiers genuinely clear the acceptance threshold.
    assert!(kinds::classify_card(&node).value() >= 0.4);
    assert!(kinds::classify_alert(&node).value() >= 0.4);

    let result = engine().classify(&node);
    assert_eq!(result.kind, ComponentKind::Card);
}

/// The same node mapped explicitly as Alert fills its slot structure.
#[test]
fn test_alert_maps_cleanly_when_kind_is_pinned() {
    let result = engine().map_as(&alert_shaped_node(), ComponentKind::Alert);
    assert!(!result.has_violations());
    assert_eq!(result.slot("icon").unwrap().matches[0].node.id, "10:2");
    assert_eq!(result.slot("title").unwrap().matches[0].node.id, "10:3");
    assert_eq!(result.slot("description").unwrap().matches[0].node.id, "10:4");
}

/// Field with [Label, Input]: required control filled, optional description
/// and message empty without violations, overall confidence high.
#[test]
fn test_field_mapping_scenario() {
    let node = DesignNode::new("2:1", "Field", NodeKind::Frame).with_children(vec![
        DesignNode::new("2:2", "Label", NodeKind::Text),
        DesignNode::new("2:3", "Input", NodeKind::Frame),
    ]);

    let result = engine().map(&node);
    assert_eq!(result.kind, ComponentKind::Field);
    assert!(!result.has_violations());
    assert!(result.slot("label").unwrap().is_filled());
    assert!(result.slot("control").unwrap().is_filled());
    assert!(!result.slot("description").unwrap().is_filled());
    assert!(!result.slot("message").unwrap().is_filled());
    assert!(result.confidence >= 0.5, "confidence {}", result.confidence);
}

/// A required slot with zero matching children yields exactly one
/// RequiredSlotUnfilled violation and a still-populated result.
#[test]
fn test_required_slot_violation_does_not_abort() {
    let node = DesignNode::new("3:1", "Field", NodeKind::Frame)
        .with_children(vec![DesignNode::new("3:2", "Decoration", NodeKind::Vector)]);

    let result = engine().map_as(&node, ComponentKind::Field);
    assert_eq!(result.kind, ComponentKind::Field);
    let unfilled: Vec<&Violation> = result
        .violations
        .iter()
        .filter(|v| matches!(v, Violation::RequiredSlotUnfilled { .. }))
        .collect();
    assert_eq!(unfilled.len(), 1);
    assert_eq!(result.slots.len(), 4);
}

/// allows_multiple slots capture every qualifying child in encounter order.
#[test]
fn test_multiple_slot_captures_all_in_encounter_order() {
    let node = DesignNode::new("4:1", "Form", NodeKind::Frame).with_children(vec![
        DesignNode::new("4:2", "Name Field", NodeKind::Frame),
        DesignNode::new("4:3", "Email Field", NodeKind::Frame),
        DesignNode::new("4:4", "Password Field", NodeKind::Frame),
        DesignNode::new("4:5", "Submit Button", NodeKind::Instance),
    ]);

    let result = engine().map(&node);
    assert_eq!(result.kind, ComponentKind::Form);

    let fields = result.slot("fields").unwrap();
    let ids: Vec<&str> = fields.matches.iter().map(|m| m.node.id.as_str()).collect();
    assert_eq!(ids, vec!["4:2", "4:3", "4:4"]);
}

/// Pagination: previous/next fill their slots, the numbered pages land in
/// the multiple slot in encounter order.
#[test]
fn test_pagination_maps_pages_in_order() {
    let node = DesignNode::new("8:1", "Pagination", NodeKind::Frame).with_children(vec![
        DesignNode::new("8:2", "Previous", NodeKind::Instance),
        DesignNode::new("8:3", "Page 1", NodeKind::Instance),
        DesignNode::new("8:4", "Page 2", NodeKind::Instance),
        DesignNode::new("8:5", "Page 3", NodeKind::Instance),
        DesignNode::new("8:6", "Next", NodeKind::Instance),
    ]);

    let result = engine().map(&node);
    assert_eq!(result.kind, ComponentKind::Pagination);
    assert_eq!(result.slot("previous").unwrap().matches[0].node.id, "8:2");
    assert_eq!(result.slot("next").unwrap().matches[0].node.id, "8:6");
    let pages: Vec<&str> = result
        .slot("pages")
        .unwrap()
        .matches
        .iter()
        .map(|m| m.node.id.as_str())
        .collect();
    assert_eq!(pages, vec!["8:3", "8:4", "8:5"]);
}

/// A radio group takes precedence over the bare Radio name match and
/// captures every option.
#[test]
fn test_radio_group_captures_options() {
    let node = DesignNode::new("9:1", "Radio Group", NodeKind::Frame).with_children(vec![
        DesignNode::new("9:2", "Label", NodeKind::Text),
        DesignNode::new("9:3", "Radio Option A", NodeKind::Instance),
        DesignNode::new("9:4", "Radio Option B", NodeKind::Instance),
    ]);

    let result = engine().map(&node);
    assert_eq!(result.kind, ComponentKind::RadioGroup);
    assert!(!result.has_violations());
    assert!(result.slot("label").unwrap().is_filled());
    assert_eq!(result.slot("options").unwrap().matches.len(), 2);
}

/// A segmented toggle group is not swallowed by the earlier Switch entry.
#[test]
fn test_toggle_group_not_classified_as_switch() {
    let node = DesignNode::new("11:1", "Toggle Group", NodeKind::Frame).with_children(vec![
        DesignNode::new("11:2", "Toggle Bold", NodeKind::Instance),
        DesignNode::new("11:3", "Toggle Italic", NodeKind::Instance),
    ]);

    let result = engine().map(&node);
    assert_eq!(result.kind, ComponentKind::ToggleGroup);
    let items: Vec<&str> = result
        .slot("items")
        .unwrap()
        .matches
        .iter()
        .map(|m| m.node.id.as_str())
        .collect();
    assert_eq!(items, vec!["11:2", "11:3"]);
}

/// Unknown classifications still produce a populated MappingResult with a
/// SchemaMissing violation and confidence 0.
#[test]
fn test_unknown_node_maps_with_schema_missing() {
    let node = DesignNode::new("5:1", "Decorative Squiggle", NodeKind::Frame);
    let result = engine().map(&node);
    assert_eq!(result.kind, ComponentKind::Unknown);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(
        result.violations,
        vec![Violation::SchemaMissing { component: ComponentKind::Unknown }]
    );
}

/// Serializing then deserializing a MappingResult preserves slot-tree
/// shape, assigned-node identities, and confidence values exactly.
#[test]
fn test_mapping_result_round_trips_exactly() -> Result<()> {
    let node = DesignNode::new("6:1", "Tabs", NodeKind::Frame).with_children(vec![
        DesignNode::new("6:2", "Tab List", NodeKind::Frame).with_children(vec![
            DesignNode::new("6:3", "Tab Home", NodeKind::Frame),
            DesignNode::new("6:4", "Tab Settings", NodeKind::Frame),
        ]),
        DesignNode::new("6:5", "Panel", NodeKind::Frame),
    ]);

    let result = engine().map(&node);
    let json = serde_json::to_string(&result)?;
    let back: MappingResult = serde_json::from_str(&json)?;
    assert_eq!(result, back);

    // Nested identities survive.
    let tab_list = back.slot("tab_list").unwrap();
    let nested_tabs = tab_list.matches[0]
        .children
        .iter()
        .find(|s| s.slot == "tab")
        .unwrap();
    assert_eq!(nested_tabs.matches.len(), 2);
    assert_eq!(nested_tabs.matches[0].node.id, "6:3");
    Ok(())
}

/// The input tree itself round-trips through serde, so ingestion layers can
/// hand trees over as JSON.
#[test]
fn test_design_node_round_trips() -> Result<()> {
    let node = DesignNode::new("7:1", "Button", NodeKind::Instance)
        .with_size(120.0, 40.0)
        .with_variant_text("Variant=Primary, State=Hover")
        .with_children(vec![DesignNode::new("7:2", "Label", NodeKind::Text)]);

    let json = serde_json::to_string(&node)?;
    let back: DesignNode = serde_json::from_str(&json)?;
    assert_eq!(node, back);
    Ok(())
}
