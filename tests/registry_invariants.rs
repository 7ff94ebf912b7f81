//! Registry-level properties: completeness, totality, idempotence,
//! monotonicity, and explicit order-sensitivity.

use design_mapper::{
    classify::kinds, schema::catalog, ComponentKind, DesignNode, EngineConfig, KindEntry,
    KindRegistry, LayoutAxis, MappingEngine, NodeKind, StyleFlags,
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

/// A corpus of awkward inputs: empty fields, degenerate sizes, deep
/// nesting, hostile variant text.
fn degenerate_corpus() -> Vec<DesignNode> {
    let deep = (0..16).fold(DesignNode::new("d:0", "leaf", NodeKind::Text), |inner, i| {
        DesignNode::new(format!("d:{}", i + 1), format!("wrap {}", i), NodeKind::Group)
            .with_children(vec![inner])
    });

    vec![
        DesignNode::new("", "", NodeKind::Other),
        DesignNode::new("c:1", "   ", NodeKind::Frame),
        DesignNode::new("c:2", "Button", NodeKind::Instance).with_size(0.0, 0.0),
        DesignNode::new("c:3", "x=,==,=", NodeKind::Frame),
        DesignNode::new("c:4", "Checkbox, State=", NodeKind::Instance),
        DesignNode::new("c:5", "CHECKBOX, STATE=DEFAULT", NodeKind::Instance),
        DesignNode::new("c:6", "tab tab tab table", NodeKind::Frame),
        deep,
    ]
}

/// Every kind reachable through the classifier table resolves a schema.
#[test]
fn test_registry_completeness() {
    let registry = KindRegistry::standard().unwrap();
    for kind in registry.kinds().collect::<Vec<_>>() {
        assert!(
            registry.schema_for(kind).is_some(),
            "kind {} has no schema",
            kind
        );
    }
}

/// classify is total: confidence stays in [0, 1] and a kind always comes
/// back, for every tree in the corpus and every subtree of it.
#[test]
fn test_classify_is_total_over_degenerate_inputs() {
    let engine = engine();

    fn walk(engine: &MappingEngine, node: &DesignNode) {
        let result = engine.classify(node);
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} out of range for '{}'",
            result.confidence,
            node.name
        );
        for child in &node.children {
            walk(engine, child);
        }
    }

    for node in degenerate_corpus() {
        walk(&engine, &node);
        // Mapping is total too: always a populated result.
        let mapped = engine.map(&node);
        assert!((0.0..=1.0).contains(&mapped.confidence));
    }
}

/// Classifying the same node twice yields identical kind and confidence.
#[test]
fn test_classify_is_idempotent() {
    let engine = engine();
    for node in degenerate_corpus() {
        let a = engine.classify(&node);
        let b = engine.classify(&node);
        assert_eq!(a, b);
    }
}

/// Adding one more positive signal never lowers a kind's score.
#[test]
fn test_signal_contributions_are_monotone() {
    // Name only.
    let bare = DesignNode::new("1", "Checkbox", NodeKind::Instance);
    // Name plus an expected variant key.
    let with_variant = DesignNode::new("1", "Checkbox, State=Default", NodeKind::Instance);
    assert!(kinds::classify_checkbox(&with_variant).value() >= kinds::classify_checkbox(&bare).value());

    // Structural signals accumulate the same way.
    let one_role = DesignNode::new("2", "Alert", NodeKind::Frame)
        .with_children(vec![DesignNode::new("2:1", "Icon", NodeKind::Vector)]);
    let two_roles = DesignNode::new("2", "Alert", NodeKind::Frame).with_children(vec![
        DesignNode::new("2:1", "Icon", NodeKind::Vector),
        DesignNode::new("2:2", "Title", NodeKind::Text),
    ]);
    assert!(kinds::classify_alert(&two_roles).value() >= kinds::classify_alert(&one_role).value());

    // Style hint on top of everything else.
    let styled = DesignNode::new("3", "Badge", NodeKind::Frame)
        .with_size(24.0, 24.0)
        .with_style(StyleFlags { has_fill: true, has_border: false, corner_radius: 12.0 });
    let plain = DesignNode::new("3", "Badge", NodeKind::Frame);
    assert!(kinds::classify_badge(&styled).value() >= kinds::classify_badge(&plain).value());
}

/// Registry order decides structural ties: swapping two overlapping entries
/// changes the winner for an ambiguous node. The ordering is configuration,
/// not accident.
#[test]
fn test_ordering_is_decision_relevant() {
    init_tracing();
    let ambiguous = DesignNode::new("1", "Alert", NodeKind::Frame).with_children(vec![
        DesignNode::new("2", "Icon", NodeKind::Vector),
        DesignNode::new("3", "Title", NodeKind::Text),
        DesignNode::new("4", "Description", NodeKind::Text),
    ]);

    let card_first = KindRegistry::from_entries(vec![
        KindEntry::new(ComponentKind::Card, kinds::classify_card, catalog::card()),
        KindEntry::new(ComponentKind::Alert, kinds::classify_alert, catalog::alert()),
    ])
    .unwrap();
    let alert_first = KindRegistry::from_entries(vec![
        KindEntry::new(ComponentKind::Alert, kinds::classify_alert, catalog::alert()),
        KindEntry::new(ComponentKind::Card, kinds::classify_card, catalog::card()),
    ])
    .unwrap();

    let config = EngineConfig::default();
    let a = MappingEngine::with_registry(card_first, config.clone()).classify(&ambiguous);
    let b = MappingEngine::with_registry(alert_first, config).classify(&ambiguous);
    assert_eq!(a.kind, ComponentKind::Card);
    assert_eq!(b.kind, ComponentKind::Alert);
}

/// Layout axis is only ever a tie-breaking increment.
#[test]
fn test_layout_hint_is_small() {
    let vertical = DesignNode::new("1", "Stack", NodeKind::Frame).with_layout(LayoutAxis::Vertical);
    let result = engine().classify(&vertical);
    // A layout hint alone never clears the acceptance threshold.
    assert_eq!(result.kind, ComponentKind::Unknown);
}

/// Tuning values are overridable configuration: a permissive floor accepts
/// matches the default floor rejects.
#[test]
fn test_slot_floor_is_tunable() {
    let node = DesignNode::new("1", "Field", NodeKind::Frame).with_children(vec![
        DesignNode::new("2", "Label", NodeKind::Text),
        DesignNode::new("3", "Value Entry", NodeKind::Frame),
    ]);

    let strict = engine().map_as(&node, ComponentKind::Field);
    assert!(!strict.slot("control").unwrap().is_filled());

    let permissive = MappingEngine::with_config(EngineConfig {
        slot_floor: 0.1,
        ..EngineConfig::default()
    })
    .unwrap()
    .map_as(&node, ComponentKind::Field);
    assert!(permissive.slot("control").unwrap().is_filled());
}
