//! Input data model: the design tree handed over by the ingestion layer.
//!
//! A [`DesignNode`] tree is produced once by the external design-tool export
//! parser and treated as immutable input here. The engine only reads the
//! fields below; anything else the export carries stays upstream.

use serde::{Deserialize, Serialize};

/// Node kind tag as reported by the design tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Frame,
    Group,
    Instance,
    Component,
    Text,
    Vector,
    Rectangle,
    Ellipse,
    Other,
}

/// Auto-layout axis of a container node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutAxis {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Node bounding-box size in export units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSize {
    pub width: f32,
    pub height: f32,
}

impl NodeSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; 0.0 when the height is degenerate.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height <= f32::EPSILON {
            0.0
        } else {
            self.width / self.height
        }
    }

    /// Roughly square within 15% tolerance.
    pub fn is_squarish(&self) -> bool {
        let ratio = self.aspect_ratio();
        ratio > 0.85 && ratio < 1.15
    }
}

/// Style flags the classifiers care about; everything else stays upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleFlags {
    pub has_fill: bool,
    pub has_border: bool,
    pub corner_radius: f32,
}

impl StyleFlags {
    /// Corner radius large enough to render the node as a circle/pill.
    pub fn is_circular(&self, size: NodeSize) -> bool {
        let half_min = size.width.min(size.height) / 2.0;
        half_min > 0.0 && self.corner_radius >= half_min - f32::EPSILON
    }
}

/// One node of the input design tree. Owned children only, no back-edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignNode {
    /// Export-assigned identifier, unique within one tree (e.g. "12:304").
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<DesignNode>,
    #[serde(default)]
    pub layout: LayoutAxis,
    #[serde(default)]
    pub size: NodeSize,
    #[serde(default)]
    pub style: StyleFlags,
    /// Free-text variant string when the export separates it from the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_text: Option<String>,
}

impl DesignNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
            layout: LayoutAxis::None,
            size: NodeSize::default(),
            style: StyleFlags::default(),
            variant_text: None,
        }
    }

    pub fn with_children(mut self, children: Vec<DesignNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_layout(mut self, layout: LayoutAxis) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = NodeSize::new(width, height);
        self
    }

    pub fn with_style(mut self, style: StyleFlags) -> Self {
        self.style = style;
        self
    }

    pub fn with_variant_text(mut self, text: impl Into<String>) -> Self {
        self.variant_text = Some(text.into());
        self
    }

    /// Lowercased name used by all token matching.
    pub fn name_norm(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Text the variant-key parser should look at: the dedicated variant
    /// field when present, otherwise the node name (exports commonly encode
    /// variants inline, e.g. "Checkbox, State=Default").
    pub fn variant_source(&self) -> &str {
        self.variant_text.as_deref().unwrap_or(&self.name)
    }

    /// True if any direct child's lowercased name contains `token`.
    pub fn has_child_named(&self, token: &str) -> bool {
        self.children
            .iter()
            .any(|c| c.name_norm().contains(token))
    }

    /// True if any direct child carries the given node kind.
    pub fn has_child_of_kind(&self, kind: NodeKind) -> bool {
        self.children.iter().any(|c| c.kind == kind)
    }

    /// Number of nodes in this subtree, self included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(DesignNode::subtree_len).sum::<usize>()
    }
}
