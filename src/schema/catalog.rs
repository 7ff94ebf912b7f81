//! The standard slot-schema catalog, one definition per component kind.
//!
//! Rule weights follow a common scale: name token 0.5–0.6, content type
//! 0.3–0.4, position 0.15, direct-child 0.1. A candidate needs to clear the
//! engine's slot floor (0.3 by default), so a name hit alone is enough and
//! weaker signals must combine.

use super::{ComponentSchema, RuleSignal, SlotSchema};
use crate::kind::ComponentKind;
use crate::node::NodeKind;

const NAME: f32 = 0.6;
const NAME_SOFT: f32 = 0.5;
const CONTENT: f32 = 0.4;
const CONTENT_SOFT: f32 = 0.3;
// Kept below the default slot floor even when combined with DIRECT, so
// position alone can never fill a slot.
const POSITION: f32 = 0.15;
const DIRECT: f32 = 0.1;

fn node_tag(slot: SlotSchema, kinds: &[NodeKind], weight: f32) -> SlotSchema {
    slot.rule(RuleSignal::NodeTag { kinds: kinds.to_vec() }, weight)
}

pub fn slider() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::required("track").named(&["track", "rail"], NAME).direct(DIRECT),
        SlotSchema::optional("thumb")
            .multiple()
            .named(&["thumb", "handle", "knob"], NAME),
    ])
}

pub fn pagination() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::optional("previous")
            .named(&["previous", "prev", "back"], NAME)
            .content(&[ComponentKind::Button, ComponentKind::Icon], CONTENT_SOFT)
            .at_index(0, POSITION),
        SlotSchema::optional("pages")
            .multiple()
            .named(&["page", "ellipsis"], NAME_SOFT),
        SlotSchema::optional("next")
            .named(&["next", "forward"], NAME)
            .content(&[ComponentKind::Button, ComponentKind::Icon], CONTENT_SOFT),
    ])
}

pub fn tabs() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::required("tab_list")
            .named(&["tab list", "tablist", "tabs", "bar"], NAME)
            .direct(DIRECT)
            .with_children(vec![SlotSchema::optional("tab")
                .multiple()
                .named(&["tab"], NAME)]),
        SlotSchema::optional("panel")
            .multiple()
            .named(&["panel", "content"], NAME),
    ])
}

pub fn button() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::optional("icon")
            .named(&["icon"], NAME)
            .content(&[ComponentKind::Icon], CONTENT),
        SlotSchema::optional("label")
            .named(&["label", "text"], NAME)
            .content(&[ComponentKind::Text], CONTENT)
            .direct(DIRECT),
    ])
}

pub fn input() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::optional("placeholder")
            .named(&["placeholder", "value", "text"], NAME)
            .content(&[ComponentKind::Text], CONTENT),
        SlotSchema::optional("icon")
            .named(&["icon"], NAME)
            .content(&[ComponentKind::Icon], CONTENT),
    ])
}

pub fn textarea() -> ComponentSchema {
    ComponentSchema::new(vec![SlotSchema::optional("placeholder")
        .named(&["placeholder", "value", "text"], NAME)
        .content(&[ComponentKind::Text], CONTENT)])
}

pub fn field() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::optional("label")
            .named(&["label"], NAME)
            .content(&[ComponentKind::Text], CONTENT_SOFT)
            .at_index(0, POSITION)
            .direct(DIRECT),
        SlotSchema::required("control")
            .named(
                &["input", "control", "select", "textarea", "checkbox", "switch"],
                NAME,
            )
            .content(
                &[
                    ComponentKind::Input,
                    ComponentKind::Select,
                    ComponentKind::Textarea,
                    ComponentKind::Checkbox,
                    ComponentKind::Switch,
                    ComponentKind::Radio,
                ],
                CONTENT,
            )
            .at_index(1, POSITION)
            .direct(DIRECT),
        SlotSchema::optional("description")
            .named(&["description", "desc", "hint", "helper"], NAME)
            .direct(DIRECT),
        SlotSchema::optional("message")
            .named(&["message", "error", "validation"], NAME)
            .direct(DIRECT),
    ])
}

pub fn checkbox() -> ComponentSchema {
    ComponentSchema::new(vec![
        node_tag(
            SlotSchema::optional("control").named(&["box", "control", "check"], NAME),
            &[NodeKind::Rectangle, NodeKind::Vector],
            CONTENT_SOFT,
        ),
        SlotSchema::optional("label")
            .named(&["label"], NAME)
            .content(&[ComponentKind::Text], CONTENT),
    ])
}

pub fn radio_group() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::optional("label")
            .named(&["label", "legend"], NAME)
            .content(&[ComponentKind::Text], CONTENT_SOFT),
        SlotSchema::required("options")
            .multiple()
            .named(&["radio", "option"], NAME_SOFT)
            .content(&[ComponentKind::Radio], CONTENT),
    ])
}

pub fn radio() -> ComponentSchema {
    ComponentSchema::new(vec![
        node_tag(
            SlotSchema::optional("control").named(&["circle", "control", "dot"], NAME),
            &[NodeKind::Ellipse, NodeKind::Vector],
            CONTENT_SOFT,
        ),
        SlotSchema::optional("label")
            .named(&["label"], NAME)
            .content(&[ComponentKind::Text], CONTENT),
    ])
}

pub fn switch() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::optional("track").named(&["track", "background"], NAME),
        SlotSchema::optional("thumb").named(&["thumb", "knob", "handle"], NAME),
    ])
}

pub fn toggle_group() -> ComponentSchema {
    ComponentSchema::new(vec![SlotSchema::required("items")
        .multiple()
        .named(&["toggle", "segment", "item", "option"], NAME_SOFT)
        .content(&[ComponentKind::Button], CONTENT)])
}

pub fn select() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::required("trigger")
            .named(&["trigger", "value", "selected", "label"], NAME)
            .content(&[ComponentKind::Text], CONTENT_SOFT)
            .at_index(0, POSITION),
        SlotSchema::optional("chevron")
            .named(&["chevron", "caret", "arrow"], NAME)
            .content(&[ComponentKind::Icon], CONTENT),
        SlotSchema::optional("menu").named(&["menu", "options", "list", "dropdown"], NAME),
    ])
}

pub fn dialog() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::required("title")
            .named(&["title", "heading"], NAME)
            .content(&[ComponentKind::Text], CONTENT_SOFT),
        SlotSchema::optional("description").named(&["description", "body", "text"], NAME_SOFT),
        SlotSchema::optional("close")
            .named(&["close", "dismiss"], NAME)
            .content(&[ComponentKind::Icon, ComponentKind::Button], CONTENT_SOFT),
        SlotSchema::optional("actions")
            .multiple()
            .named(&["button", "action", "cta"], NAME_SOFT)
            .content(&[ComponentKind::Button], CONTENT),
    ])
}

pub fn card() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::optional("header")
            .named(&["header"], NAME)
            .at_index(0, POSITION)
            .with_children(vec![
                SlotSchema::optional("title")
                    .named(&["title", "heading"], NAME)
                    .content(&[ComponentKind::Text], CONTENT_SOFT),
                SlotSchema::optional("description").named(&["description", "subtitle"], NAME),
            ]),
        SlotSchema::optional("content").named(&["content", "body"], NAME),
        SlotSchema::optional("footer").named(&["footer", "actions"], NAME),
    ])
}

pub fn form() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::required("fields")
            .multiple()
            .named(&["field", "input", "email", "password", "name"], NAME_SOFT)
            .content(
                &[
                    ComponentKind::Field,
                    ComponentKind::Input,
                    ComponentKind::Select,
                    ComponentKind::Checkbox,
                    ComponentKind::Textarea,
                ],
                CONTENT,
            ),
        SlotSchema::optional("actions")
            .multiple()
            .named(&["button", "submit", "action"], NAME)
            .content(&[ComponentKind::Button], CONTENT),
    ])
}

pub fn alert() -> ComponentSchema {
    ComponentSchema::new(vec![
        SlotSchema::optional("icon")
            .named(&["icon"], NAME)
            .content(&[ComponentKind::Icon], CONTENT)
            .at_index(0, POSITION),
        SlotSchema::required("title")
            .named(&["title", "heading"], NAME)
            .content(&[ComponentKind::Text], CONTENT_SOFT)
            .at_index(1, POSITION),
        SlotSchema::optional("description")
            .named(&["description", "message", "body"], NAME)
            .content(&[ComponentKind::Text], CONTENT_SOFT),
    ])
}

pub fn badge() -> ComponentSchema {
    ComponentSchema::new(vec![SlotSchema::optional("label")
        .named(&["label", "text"], NAME)
        .content(&[ComponentKind::Text], CONTENT)])
}

pub fn icon() -> ComponentSchema {
    ComponentSchema::empty()
}

pub fn image() -> ComponentSchema {
    ComponentSchema::empty()
}

pub fn text() -> ComponentSchema {
    ComponentSchema::empty()
}
