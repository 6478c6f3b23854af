mod table;

pub use table::{HtmlTable, SHIELD_CENTER_PORT, TableCell, padding_table, port_table};

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::ir::ShapeType;
use crate::shape::Shape;
use crate::text_metrics::TextMeasurer;
use std::path::Path;

/// Graphviz measures node sizes in inches at 72 points per inch.
pub const PIXELS_PER_INCH: f64 = 72.0;

pub fn pixel_to_inches(pixels: f64) -> f64 {
    pixels / PIXELS_PER_INCH
}

pub fn inches_to_pixel(inches: f64) -> f64 {
    inches * PIXELS_PER_INCH
}

/// Appends the node declaration of `shape` to `out`, one line terminated by `\n`.
/// Nothing is appended when an error is returned.
pub fn append_shape(out: &mut String, shape: &Shape, measurer: &dyn TextMeasurer) -> Result<()> {
    let decl = match (shape.shape_type(), shape.is_shielded()) {
        (ShapeType::RectangleHtmlForPorts, _) => port_declaration(shape, measurer)?,
        (ShapeType::Rectangle, true) => padding_declaration(shape)?,
        _ => flat_declaration(shape)?,
    };
    out.push_str(&decl);
    Ok(())
}

fn flat_declaration(shape: &Shape) -> Result<String> {
    let uid = shape.uid()?;
    let kind = shape_attributes(shape)?;
    tracing::debug!(uid, kind, "flat node declaration");
    Ok(format!(
        "{uid} [{kind},label=\"\",width={},height={},color=\"{}\"];\n",
        pixel_to_inches(shape.width()),
        pixel_to_inches(shape.height()),
        shape.html_color()
    ))
}

fn shape_attributes(shape: &Shape) -> Result<&'static str> {
    let kind = match shape.shape_type() {
        ShapeType::Rectangle if shape.is_shielded() => {
            return Err(Error::invariant(
                "shielded rectangle must be declared through its padding table",
            ));
        }
        ShapeType::RectangleHtmlForPorts => {
            return Err(Error::invariant(
                "port rectangle must be declared through its port table",
            ));
        }
        ShapeType::Rectangle | ShapeType::Folder => "shape=rect",
        ShapeType::Octagon => "shape=octagon",
        ShapeType::Diamond => "shape=diamond",
        ShapeType::Circle | ShapeType::CircleInRect => "shape=circle",
        ShapeType::Oval => "shape=ellipse",
        ShapeType::RoundRectangle => "shape=rect,style=rounded",
    };
    Ok(kind)
}

fn padding_declaration(shape: &Shape) -> Result<String> {
    if shape.shape_type() != ShapeType::Rectangle || !shape.is_shielded() {
        return Err(Error::invariant(format!(
            "padding table requested for {:?} with shield {}",
            shape.shape_type(),
            shape.shield()
        )));
    }
    let uid = shape.uid()?;
    tracing::debug!(uid, shield = shape.shield(), "padded node declaration");
    let table = padding_table(
        shape.width(),
        shape.height(),
        &shape.html_color(),
        shape.shield(),
    );
    Ok(plaintext_declaration(uid, &table))
}

fn port_declaration(shape: &Shape, measurer: &dyn TextMeasurer) -> Result<String> {
    let uid = shape.uid()?;
    let provider = shape
        .image()
        .as_port_provider()
        .ok_or_else(|| shape.missing_capability("port geometry"))?;
    let ports = provider.ports(measurer);
    tracing::debug!(uid, ports = ports.len(), "port node declaration");
    let table = port_table(shape.width(), shape.height(), &shape.html_color(), &ports);
    Ok(plaintext_declaration(uid, &table))
}

fn plaintext_declaration(uid: &str, table: &HtmlTable) -> String {
    let mut decl = String::new();
    decl.push_str(uid);
    decl.push_str(" [shape=plaintext,label=<");
    table.write_to(&mut decl);
    decl.push_str(">];\n");
    decl
}

/// Wraps the declarations of `shapes`, in order, into a complete `digraph`.
pub fn render_graph<'a>(
    shapes: impl IntoIterator<Item = &'a Shape>,
    measurer: &dyn TextMeasurer,
    config: &RenderConfig,
) -> Result<String> {
    let mut dot = String::new();
    dot.push_str(&format!("digraph {} {{\n", config.graph_name));
    dot.push_str(&format!("nodesep={};\n", config.nodesep));
    dot.push_str(&format!("ranksep={};\n", config.ranksep));
    dot.push_str("remincross=true;\n");
    dot.push_str("searchsize=500;\n");
    dot.push_str(&format!("rankdir={};\n", config.rankdir));
    dot.push_str(&format!("splines={};\n", config.splines));
    for shape in shapes {
        append_shape(&mut dot, shape, measurer)?;
    }
    dot.push_str("}\n");
    Ok(dot)
}

pub fn write_output(dot: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, dot)?;
        }
        None => {
            print!("{}", dot);
        }
    }
    Ok(())
}

pub(crate) fn escape_attr(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
