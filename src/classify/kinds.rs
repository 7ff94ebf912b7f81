//! Per-kind classifier functions.
//!
//! One function per [`ComponentKind`], each a capped sum of independent
//! weighted signals (see [`crate::config::weights`]). Order of evaluation
//! across kinds lives in the registry, not here; these functions only score
//! a single node against a single kind.
//!
//! Signal conventions:
//! - name token: canonical strong, aliases weak, exclusions zero the signal
//! - variant keys: fixed bonus when an expected key is present
//! - structural: per matched child role keyword
//! - layout/geometry/style: small tie-breaking increments only

use super::signals::{
    has_text_child, has_vector_child, is_compact_square, is_wide, matched_roles, name_signal,
    SignalScore,
};
use crate::config::weights;
use crate::node::{DesignNode, LayoutAxis, NodeKind};
use crate::variant::VariantKeys;

/// Apply a name signal if one fires (including a zero-weight exclusion hit).
fn apply_name(score: &mut SignalScore, node: &DesignNode, canonical: &str, aliases: &[&str], exclusions: &[&str]) {
    if let Some((weight, reason)) = name_signal(node, canonical, aliases, exclusions) {
        if weight > 0.0 {
            score.add(weight, reason);
        } else {
            score.note(reason);
        }
    }
}

/// Apply the variant-key signal when any expected key is present. Malformed
/// assignment fragments never contribute but leave a diagnostic trace.
fn apply_variant(score: &mut SignalScore, node: &DesignNode, expected: &[&str]) {
    let keys = VariantKeys::parse(node.variant_source());
    if keys.skipped() > 0 {
        score.note("malformed variant fragment ignored");
    }
    if let Some(key) = expected.iter().find(|k| keys.contains_key(k)) {
        score.add(weights::VARIANT_KEY, format!("variant key '{}' present", key));
    }
}

/// Apply the structural signal: one increment per matched child role.
fn apply_roles(score: &mut SignalScore, node: &DesignNode, roles: &[&str]) {
    for role in matched_roles(node, roles) {
        score.add(weights::STRUCTURAL_ROLE, format!("child role '{}'", role));
    }
}

pub fn classify_slider(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "slider", &["range"], &[]);
    apply_roles(&mut score, node, &["track", "thumb"]);
    apply_variant(&mut score, node, &["value", "state"]);
    if is_wide(node) && node.size.height > 0.0 && node.size.height <= 40.0 {
        score.add(weights::GEOMETRY_HINT, "wide short footprint");
    }
    score
}

pub fn classify_pagination(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "pagination", &["pager", "page navigation"], &[]);
    let page_children = node
        .children
        .iter()
        .filter(|c| c.name_norm().contains("page"))
        .count();
    if page_children >= 2 {
        score.add(weights::STRUCTURAL_ROLE, format!("{} page children", page_children));
    }
    apply_roles(&mut score, node, &["previous", "next"]);
    if node.layout == LayoutAxis::Horizontal {
        score.add(weights::LAYOUT_HINT, "horizontal layout");
    }
    score
}

pub fn classify_tabs(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "tabs", &["tab bar", "tab list", "tablist"], &["table"]);
    let tab_children = node
        .children
        .iter()
        .filter(|c| c.name_norm().contains("tab"))
        .count();
    if tab_children >= 2 {
        score.add(weights::STRUCTURAL_ROLE, format!("{} tab children", tab_children));
    }
    if node.layout == LayoutAxis::Horizontal {
        score.add(weights::LAYOUT_HINT, "horizontal layout");
    }
    score
}

pub fn classify_button(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "button", &["btn", "cta"], &["radio", "group"]);
    apply_variant(&mut score, node, &["state", "variant", "size"]);
    apply_roles(&mut score, node, &["icon", "label"]);
    if has_text_child(node) {
        score.add(weights::STRUCTURAL_ROLE, "text child");
    }
    if node.style.has_fill && node.style.corner_radius > 0.0 {
        score.add(weights::STYLE_HINT, "filled rounded shape");
    }
    score
}

pub fn classify_input(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "input", &["text field", "textfield", "text input"], &[]);
    apply_roles(&mut score, node, &["placeholder"]);
    apply_variant(&mut score, node, &["state"]);
    if node.style.has_border {
        score.add(weights::STYLE_HINT, "bordered");
    }
    if is_wide(node) {
        score.add(weights::GEOMETRY_HINT, "wide footprint");
    }
    score
}

pub fn classify_textarea(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "textarea", &["text area", "multiline"], &[]);
    if node.style.has_border {
        score.add(weights::STYLE_HINT, "bordered");
    }
    if node.size.height >= 80.0 && node.size.aspect_ratio() < 3.0 {
        score.add(weights::GEOMETRY_HINT, "tall text box footprint");
    }
    score
}

pub fn classify_field(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(
        &mut score,
        node,
        "field",
        &["form field"],
        &["text field", "textfield"],
    );
    apply_roles(&mut score, node, &["label", "input", "control", "description", "message"]);
    if node.layout == LayoutAxis::Vertical {
        score.add(weights::LAYOUT_HINT, "vertical layout");
    }
    score
}

pub fn classify_checkbox(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(
        &mut score,
        node,
        "checkbox",
        &["check box", "check"],
        &["button", "btn", "icon"],
    );
    apply_variant(&mut score, node, &["checked", "state", "status"]);
    if is_compact_square(node) && node.style.has_border {
        score.add(weights::GEOMETRY_HINT, "small bordered square");
    }
    score
}

pub fn classify_radio_group(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "radio group", &["radiogroup"], &[]);
    let radio_children = node
        .children
        .iter()
        .filter(|c| c.name_norm().contains("radio"))
        .count();
    if radio_children >= 2 {
        score.add(weights::STRUCTURAL_ROLE, format!("{} radio children", radio_children));
    }
    if node.layout == LayoutAxis::Vertical {
        score.add(weights::LAYOUT_HINT, "vertical layout");
    }
    score
}

pub fn classify_radio(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "radio", &["radio button"], &[]);
    apply_variant(&mut score, node, &["checked", "selected", "state"]);
    if node.style.is_circular(node.size) {
        score.add(weights::STYLE_HINT, "circular shape");
    }
    score
}

pub fn classify_switch(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "switch", &["toggle"], &["group"]);
    apply_variant(&mut score, node, &["state", "on", "checked"]);
    let ratio = node.size.aspect_ratio();
    if (1.5..=2.5).contains(&ratio) && node.size.height > 0.0 && node.size.height <= 40.0 {
        score.add(weights::GEOMETRY_HINT, "pill toggle footprint");
    }
    score
}

pub fn classify_toggle_group(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(
        &mut score,
        node,
        "toggle group",
        &["togglegroup", "segmented control", "button group"],
        &[],
    );
    let toggle_children = node
        .children
        .iter()
        .filter(|c| {
            let name = c.name_norm();
            name.contains("toggle") || name.contains("segment")
        })
        .count();
    if toggle_children >= 2 {
        score.add(weights::STRUCTURAL_ROLE, format!("{} toggle children", toggle_children));
    }
    if node.layout == LayoutAxis::Horizontal {
        score.add(weights::LAYOUT_HINT, "horizontal layout");
    }
    score
}

pub fn classify_select(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(
        &mut score,
        node,
        "select",
        &["dropdown", "drop down", "combobox", "picker"],
        &[],
    );
    apply_roles(&mut score, node, &["chevron", "caret", "arrow", "value"]);
    apply_variant(&mut score, node, &["state", "open"]);
    if node.style.has_border {
        score.add(weights::STYLE_HINT, "bordered");
    }
    score
}

pub fn classify_dialog(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "dialog", &["modal", "popup", "sheet", "drawer"], &[]);
    apply_roles(&mut score, node, &["title", "close", "footer", "overlay"]);
    if node.size.width >= 320.0 && node.size.height >= 200.0 {
        score.add(weights::GEOMETRY_HINT, "dialog-sized");
    }
    score
}

pub fn classify_card(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "card", &["tile", "panel"], &[]);
    apply_roles(
        &mut score,
        node,
        &["header", "content", "footer", "icon", "title", "description"],
    );
    if node.style.has_fill && node.style.corner_radius > 0.0 {
        score.add(weights::STYLE_HINT, "filled rounded surface");
    }
    score
}

pub fn classify_form(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "form", &[], &["field"]);
    apply_roles(&mut score, node, &["field", "input", "email", "password", "submit"]);
    if node.layout == LayoutAxis::Vertical {
        score.add(weights::LAYOUT_HINT, "vertical layout");
    }
    score
}

pub fn classify_alert(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(
        &mut score,
        node,
        "alert",
        &["banner", "notification", "toast", "callout"],
        &[],
    );
    apply_roles(&mut score, node, &["icon", "title", "description", "message"]);
    if node.style.has_fill {
        score.add(weights::STYLE_HINT, "filled surface");
    }
    score
}

pub fn classify_badge(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "badge", &["chip", "tag", "pill"], &[]);
    if node.style.is_circular(node.size) {
        score.add(weights::STYLE_HINT, "pill shape");
    }
    if node.size.height > 0.0 && node.size.height <= 32.0 {
        score.add(weights::GEOMETRY_HINT, "compact height");
    }
    score
}

pub fn classify_icon(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "icon", &["glyph"], &[]);
    if node.kind == NodeKind::Vector {
        score.add(weights::NODE_KIND, "vector node");
    } else if has_vector_child(node) && node.children.len() == 1 {
        score.add(weights::STRUCTURAL_ROLE, "single vector child");
    }
    if is_compact_square(node) {
        score.add(weights::GEOMETRY_HINT, "small square footprint");
    }
    score
}

pub fn classify_image(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    apply_name(&mut score, node, "image", &["img", "picture", "photo", "avatar"], &[]);
    if node.style.has_fill && node.children.is_empty() && node.kind != NodeKind::Text {
        score.add(weights::STYLE_HINT, "filled leaf node");
    }
    score
}

pub fn classify_text(node: &DesignNode) -> SignalScore {
    let mut score = SignalScore::new();
    if node.kind == NodeKind::Text {
        score.add(weights::NODE_KIND, "text node");
    }
    apply_name(
        &mut score,
        node,
        "text",
        &["label", "heading", "title", "paragraph", "caption"],
        &[],
    );
    score
}
