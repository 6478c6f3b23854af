use std::sync::Arc;

use crate::color::{ColorSequence, as_html};
use crate::error::{Error, Result};
use crate::geometry::{ClusterPosition, Dimension, Point, Polygon};
use crate::image::EntityImage;
use crate::ir::{ClusterId, EntityPosition, ShapeType};
use crate::text_metrics::TextMeasurer;

/// Geometry of one diagram node as exchanged with the layout engine.
///
/// Size, type and identity are fixed at construction. The position starts at the origin
/// and only moves through [`Shape::translate`], so applying a layout result twice is
/// visible as a double offset rather than silently overwritten.
#[derive(Debug)]
pub struct Shape {
    shape_type: ShapeType,
    width: f64,
    height: f64,
    uid: Option<String>,
    color: u32,
    shield: u32,
    min_x: f64,
    min_y: f64,
    top: bool,
    entity_position: EntityPosition,
    image: Arc<dyn EntityImage>,
    cluster: Option<ClusterId>,
    pub(crate) octagon: Option<Polygon>,
}

impl Shape {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        image: Arc<dyn EntityImage>,
        shape_type: ShapeType,
        width: f64,
        height: f64,
        colors: &mut ColorSequence,
        top: bool,
        shield: u32,
        entity_position: EntityPosition,
    ) -> Result<Self> {
        if shield > 0 && !shape_type.accepts_shield() {
            return Err(Error::InvalidConfiguration { shape_type, shield });
        }
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(Error::InvalidSize { width, height });
        }
        let color = colors.next_value()?;
        Ok(Self {
            shape_type,
            width,
            height,
            uid: Some(format!("sh{color:04}")),
            color,
            shield,
            min_x: 0.0,
            min_y: 0.0,
            top,
            entity_position,
            image,
            cluster: None,
            octagon: None,
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    /// Identity token naming this shape in the emitted syntax.
    pub fn uid(&self) -> Result<&str> {
        self.uid
            .as_deref()
            .ok_or(Error::IllegalState("shape identity read before it was assigned"))
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn html_color(&self) -> String {
        as_html(self.color)
    }

    pub fn shield(&self) -> u32 {
        self.shield
    }

    pub fn is_shielded(&self) -> bool {
        self.shield > 0
    }

    pub fn is_top(&self) -> bool {
        self.top
    }

    pub fn entity_position(&self) -> EntityPosition {
        self.entity_position
    }

    pub fn image(&self) -> &Arc<dyn EntityImage> {
        &self.image
    }

    pub fn is_hidden(&self) -> bool {
        self.image.is_hidden()
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn position(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn cluster_position(&self) -> ClusterPosition {
        ClusterPosition::new(
            self.min_x,
            self.min_y,
            self.min_x + self.width,
            self.min_y + self.height,
        )
    }

    /// Converts a point in the shape's local frame to absolute coordinates.
    pub fn point(&self, x: f64, y: f64) -> Point {
        Point::new(self.min_x + x, self.min_y + y)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.min_x += dx;
        self.min_y += dy;
    }

    pub fn cluster(&self) -> Option<ClusterId> {
        self.cluster
    }

    pub fn set_cluster(&mut self, cluster: ClusterId) -> Result<()> {
        if self.cluster.is_some() {
            return Err(Error::IllegalState("shape already belongs to a cluster"));
        }
        self.cluster = Some(cluster);
        Ok(())
    }

    pub fn octagon(&self) -> Option<&Polygon> {
        self.octagon.as_ref()
    }

    pub fn max_width_from_label_for_entry_exit(&self, measurer: &dyn TextMeasurer) -> Result<f64> {
        let provider = self.image.as_entry_exit_width_provider().ok_or_else(|| {
            self.missing_capability("an entry/exit label width")
        })?;
        Ok(provider.max_width_from_label_for_entry_exit(measurer))
    }

    pub(crate) fn missing_capability(&self, capability: &'static str) -> Error {
        Error::MissingCapability {
            uid: self.uid.clone().unwrap_or_default(),
            capability,
        }
    }

    #[cfg(test)]
    pub(crate) fn forget_identity(&mut self) {
        self.uid = None;
    }
}
