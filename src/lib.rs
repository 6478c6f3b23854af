#![forbid(unsafe_code)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod image;
pub mod ir;
pub mod layout_dump;
pub mod plain;
pub mod post_layout;
pub mod render;
pub mod shape;
pub mod text_metrics;

#[cfg(feature = "cli")]
pub use cli::run;
pub use color::ColorSequence;
pub use config::{Config, GeometryConfig, RenderConfig, load_config};
pub use document::{Diagram, DiagramDocument};
pub use error::{Error, Result};
pub use geometry::{ClusterPosition, Dimension, Point, Polygon};
pub use image::{EntityImage, EntryExitWidthProvider, NameDimensionProvider, PortProvider};
pub use ir::{ClusterId, EntityPosition, PortGeometry, Ports, ShapeType};
pub use plain::{PlainEdge, PlainLayout, parse_plain};
pub use post_layout::{apply_layout, route_edges};
pub use render::{append_shape, render_graph};
pub use shape::Shape;
pub use text_metrics::{DeterministicTextMeasurer, TextMeasurer};
