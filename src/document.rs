//! JSON description of a set of shapes, used by the command line tool and the fixtures.

use crate::color::ColorSequence;
use crate::error::{Error, Result};
use crate::geometry::Dimension;
use crate::image::{EntityImage, EntryExitWidthProvider, NameDimensionProvider, PortProvider};
use crate::ir::{ClusterId, EntityPosition, PortGeometry, Ports, ShapeType};
use crate::shape::Shape;
use crate::text_metrics::TextMeasurer;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramDocument {
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub shield: u32,
    #[serde(default)]
    pub entity_position: EntityPosition,
    #[serde(default)]
    pub hidden: bool,
    pub cluster: Option<usize>,
    /// Folder name drawn in the tab; enables name-dimension queries.
    pub label: Option<String>,
    /// Entry/exit point label; enables the label width query.
    pub entry_exit_label: Option<String>,
    /// Connection bands; enables port queries.
    pub ports: Option<Vec<PortSpec>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortSpec {
    pub name: String,
    pub position: f64,
    pub height: f64,
}

impl DiagramDocument {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Image backed by the static data of a [`ShapeSpec`].
#[derive(Debug, Clone)]
pub struct DocumentImage {
    hidden: bool,
    label: Option<String>,
    entry_exit_label: Option<String>,
    ports: Option<Ports>,
}

impl DocumentImage {
    pub fn from_spec(spec: &ShapeSpec) -> Self {
        let ports = spec.ports.as_ref().map(|ports| {
            ports
                .iter()
                .map(|p| (p.name.clone(), PortGeometry::new(p.position, p.height)))
                .collect()
        });
        Self {
            hidden: spec.hidden,
            label: spec.label.clone(),
            entry_exit_label: spec.entry_exit_label.clone(),
            ports,
        }
    }
}

impl EntityImage for DocumentImage {
    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn as_port_provider(&self) -> Option<&dyn PortProvider> {
        self.ports.as_ref().map(|_| self as &dyn PortProvider)
    }

    fn as_name_dimension_provider(&self) -> Option<&dyn NameDimensionProvider> {
        self.label.as_ref().map(|_| self as &dyn NameDimensionProvider)
    }

    fn as_entry_exit_width_provider(&self) -> Option<&dyn EntryExitWidthProvider> {
        self.entry_exit_label
            .as_ref()
            .map(|_| self as &dyn EntryExitWidthProvider)
    }
}

impl PortProvider for DocumentImage {
    fn ports(&self, _measurer: &dyn TextMeasurer) -> Ports {
        self.ports.clone().unwrap_or_default()
    }
}

impl NameDimensionProvider for DocumentImage {
    fn name_dimension(&self, measurer: &dyn TextMeasurer) -> Dimension {
        measurer.measure(self.label.as_deref().unwrap_or_default())
    }
}

impl EntryExitWidthProvider for DocumentImage {
    fn max_width_from_label_for_entry_exit(&self, measurer: &dyn TextMeasurer) -> f64 {
        measurer
            .measure(self.entry_exit_label.as_deref().unwrap_or_default())
            .width
    }
}

/// Shapes built from a document, in document order.
#[derive(Debug)]
pub struct Diagram {
    pub shapes: Vec<Shape>,
    /// Document name to identity token.
    pub names: IndexMap<String, String>,
    /// Identity token back to document name.
    uid_names: HashMap<String, String>,
}

impl Diagram {
    pub fn build(doc: &DiagramDocument, colors: &mut ColorSequence) -> Result<Self> {
        let mut shapes = Vec::with_capacity(doc.shapes.len());
        let mut names = IndexMap::with_capacity(doc.shapes.len());
        let mut uid_names = HashMap::with_capacity(doc.shapes.len());
        for spec in &doc.shapes {
            if names.contains_key(&spec.name) {
                return Err(Error::DuplicateName {
                    name: spec.name.clone(),
                });
            }
            let mut shape = Shape::new(
                Arc::new(DocumentImage::from_spec(spec)),
                spec.shape_type,
                spec.width,
                spec.height,
                colors,
                spec.top,
                spec.shield,
                spec.entity_position,
            )?;
            if let Some(cluster) = spec.cluster {
                shape.set_cluster(ClusterId(cluster))?;
            }
            let uid = shape.uid()?.to_string();
            uid_names.insert(uid.clone(), spec.name.clone());
            names.insert(spec.name.clone(), uid);
            shapes.push(shape);
        }
        Ok(Self {
            shapes,
            names,
            uid_names,
        })
    }

    pub fn name_of(&self, uid: &str) -> Option<&str> {
        self.uid_names.get(uid).map(String::as_str)
    }
}
