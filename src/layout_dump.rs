use crate::document::Diagram;
use crate::error::Result;
use crate::geometry::Point;
use crate::ir::{EntityPosition, ShapeType};
use crate::plain::PlainEdge;
use crate::shape::Shape;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Placed shapes handed to the drawing stage.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<ShapeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct ShapeDump {
    pub uid: String,
    pub name: Option<String>,
    pub shape: ShapeType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub hidden: bool,
    pub top: bool,
    pub entity_position: EntityPosition,
    pub cluster: Option<usize>,
    pub octagon: Option<Vec<[f64; 2]>>,
}

/// Edge route with its endpoints already projected onto the shapes.
#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub tail: String,
    pub head: String,
    pub points: Vec<[f64; 2]>,
}

impl From<&PlainEdge> for EdgeDump {
    fn from(edge: &PlainEdge) -> Self {
        EdgeDump {
            tail: edge.tail.clone(),
            head: edge.head.clone(),
            points: edge.points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

impl ShapeDump {
    pub fn from_shape(shape: &Shape, name: Option<&str>) -> Result<Self> {
        Ok(ShapeDump {
            uid: shape.uid()?.to_string(),
            name: name.map(|n| n.to_string()),
            shape: shape.shape_type(),
            x: shape.min_x(),
            y: shape.min_y(),
            width: shape.width(),
            height: shape.height(),
            color: shape.html_color(),
            hidden: shape.is_hidden(),
            top: shape.is_top(),
            entity_position: shape.entity_position(),
            cluster: shape.cluster().map(|c| c.0),
            octagon: shape
                .octagon()
                .map(|poly| poly.points().iter().map(|p: &Point| [p.x, p.y]).collect()),
        })
    }
}

impl LayoutDump {
    pub fn from_diagram(
        diagram: &Diagram,
        width: f64,
        height: f64,
        edges: &[PlainEdge],
    ) -> Result<Self> {
        let mut shapes = Vec::with_capacity(diagram.shapes.len());
        for shape in &diagram.shapes {
            let uid = shape.uid()?;
            shapes.push(ShapeDump::from_shape(shape, diagram.name_of(uid))?);
        }
        Ok(LayoutDump {
            width,
            height,
            shapes,
            edges: edges.iter().map(EdgeDump::from).collect(),
        })
    }
}

pub fn write_layout_dump(path: Option<&Path>, dump: &LayoutDump) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, dump)?;
        }
        None => {
            println!("{}", serde_json::to_string_pretty(dump)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSequence;
    use crate::document::DiagramDocument;

    #[test]
    fn dump_carries_names_and_outline() {
        let doc = DiagramDocument::from_json(
            r#"{ "shapes": [ { "name": "stop", "type": "octagon", "width": 20, "height": 20 } ] }"#,
        )
        .unwrap();
        let mut diagram = Diagram::build(&doc, &mut ColorSequence::default()).unwrap();
        let shape = &mut diagram.shapes[0];
        shape.translate(10.0, 10.0);
        shape
            .attach_octagon(10.0, 10.0, vec![Point::new(15.0, 10.0), Point::new(25.0, 10.0)])
            .unwrap();
        let edges = [PlainEdge {
            tail: "sh0001".to_string(),
            head: "sh0001".to_string(),
            points: vec![Point::new(20.0, 10.0), Point::new(30.0, 5.0)],
        }];
        let dump = LayoutDump::from_diagram(&diagram, 100.0, 50.0, &edges).unwrap();
        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["shapes"][0]["name"], "stop");
        assert_eq!(json["shapes"][0]["shape"], "octagon");
        assert_eq!(json["shapes"][0]["x"], 10.0);
        assert_eq!(json["shapes"][0]["octagon"][1][0], 15.0);
        assert_eq!(json["edges"][0]["points"][1][1], 5.0);
    }
}
