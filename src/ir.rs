use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Visual variant of a diagram node as seen by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    Rectangle,
    /// Rectangle split into named horizontal bands used as connector anchors.
    RectangleHtmlForPorts,
    Folder,
    Octagon,
    Diamond,
    Circle,
    CircleInRect,
    Oval,
    RoundRectangle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 9] = [
        ShapeType::Rectangle,
        ShapeType::RectangleHtmlForPorts,
        ShapeType::Folder,
        ShapeType::Octagon,
        ShapeType::Diamond,
        ShapeType::Circle,
        ShapeType::CircleInRect,
        ShapeType::Oval,
        ShapeType::RoundRectangle,
    ];

    /// Whether a non-zero shield padding may be requested for this variant.
    pub fn accepts_shield(self) -> bool {
        matches!(self, ShapeType::Rectangle | ShapeType::RectangleHtmlForPorts)
    }
}

/// Role of the entity on the border of its container (state entry/exit points, pins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityPosition {
    #[default]
    Normal,
    EntryPoint,
    ExitPoint,
    InputPin,
    OutputPin,
    ExpansionInput,
    ExpansionOutput,
}

/// Non-owning reference to the group a shape is drawn inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterId(pub usize);

/// Vertical band occupied by a port along the shape height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortGeometry {
    pub position: f64,
    pub height: f64,
}

impl PortGeometry {
    pub fn new(position: f64, height: f64) -> Self {
        Self { position, height }
    }

    pub fn last_y(&self) -> f64 {
        self.position + self.height
    }
}

/// Ports keyed by name; iteration order is top to bottom.
pub type Ports = IndexMap<String, PortGeometry>;
