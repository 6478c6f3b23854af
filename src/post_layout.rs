use std::collections::HashMap;

use crate::config::GeometryConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, Polygon};
use crate::ir::ShapeType;
use crate::plain::{PlainEdge, PlainLayout};
use crate::shape::Shape;
use crate::text_metrics::TextMeasurer;

impl Shape {
    /// Stores the outline the engine drew for this node, moved into the shape's local frame.
    /// Only octagons consult it when drawing.
    pub fn attach_octagon(&mut self, min_x: f64, min_y: f64, points: Vec<Point>) -> Result<()> {
        if self.octagon.is_some() {
            return Err(Error::IllegalState("octagon outline already attached"));
        }
        self.octagon = Some(Polygon::new(points).translate(-min_x, -min_y));
        Ok(())
    }

    pub fn project(&self, pt: Point, measurer: &dyn TextMeasurer) -> Result<Point> {
        self.project_with(pt, measurer, &GeometryConfig::default())
    }

    /// Moves connector anchors that land on a folder's tab row below the name tab.
    /// Anchors inside the tab's own width stay where they are.
    pub fn project_with(
        &self,
        pt: Point,
        measurer: &dyn TextMeasurer,
        config: &GeometryConfig,
    ) -> Result<Point> {
        if self.shape_type() != ShapeType::Folder {
            return Ok(pt);
        }
        let bounds = self.cluster_position();
        if !bounds.is_point_just_upper(pt, config.just_upper_tolerance) {
            return Ok(pt);
        }
        let name = self
            .image()
            .as_name_dimension_provider()
            .ok_or_else(|| self.missing_capability("a name dimension"))?
            .name_dimension(measurer);
        if pt.x < self.min_x() + name.width {
            return Ok(pt);
        }
        Ok(Point::new(
            pt.x,
            pt.y + name.height + config.folder_label_clearance,
        ))
    }
}

/// Moves every shape named in `layout` by the offset of its computed box.
///
/// Computed boxes are relative to an unplaced shape at the origin, so running the same
/// layout twice moves a shape twice. Returns the number of shapes that were placed.
pub fn apply_layout<'a>(
    shapes: impl IntoIterator<Item = &'a mut Shape>,
    layout: &PlainLayout,
) -> Result<usize> {
    let mut placed = 0;
    for shape in shapes {
        let uid = shape.uid()?;
        let Some(bounds) = layout.nodes.get(uid) else {
            tracing::warn!(uid, "shape missing from layout output");
            continue;
        };
        shape.translate(bounds.min_x, bounds.min_y);
        placed += 1;
    }
    if placed < layout.nodes.len() {
        tracing::warn!(
            placed,
            nodes = layout.nodes.len(),
            "layout output names nodes no shape owns"
        );
    }
    Ok(placed)
}

/// Returns the engine's edge routes with each endpoint projected onto the shape it leaves
/// or enters. Endpoints of nodes no shape owns are kept as routed.
pub fn route_edges(
    shapes: &[Shape],
    layout: &PlainLayout,
    measurer: &dyn TextMeasurer,
    config: &GeometryConfig,
) -> Result<Vec<PlainEdge>> {
    let mut by_uid = HashMap::with_capacity(shapes.len());
    for shape in shapes {
        by_uid.insert(shape.uid()?, shape);
    }
    let mut routed = Vec::with_capacity(layout.edges.len());
    for edge in &layout.edges {
        let mut edge = edge.clone();
        if let (Some(shape), Some(first)) = (by_uid.get(edge.tail.as_str()), edge.points.first_mut())
        {
            *first = shape.project_with(*first, measurer, config)?;
        }
        if let (Some(shape), Some(last)) = (by_uid.get(edge.head.as_str()), edge.points.last_mut())
        {
            *last = shape.project_with(*last, measurer, config)?;
        }
        routed.push(edge);
    }
    Ok(routed)
}
