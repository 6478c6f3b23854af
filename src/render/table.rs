//! HTML-like table labels for shapes whose border carries anchors.
//!
//! Graphviz lays a `shape=plaintext` node out from its table label, so every cell size is
//! given in pixels here and no node width/height attribute is emitted alongside.

use super::escape_attr;
use crate::ir::Ports;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub bgcolor: Option<String>,
    pub fixed_size: bool,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub port: Option<String>,
}

impl TableCell {
    fn empty() -> Self {
        Self::default()
    }

    fn fixed(width: f64, height: f64) -> Self {
        Self {
            fixed_size: true,
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("<TD");
        if let Some(color) = &self.bgcolor {
            out.push_str(&format!(" BGCOLOR=\"{color}\""));
        }
        if self.fixed_size {
            out.push_str(" FIXEDSIZE=\"TRUE\"");
        }
        if let Some(width) = self.width {
            out.push_str(&format!(" WIDTH=\"{width}\""));
        }
        if let Some(height) = self.height {
            out.push_str(&format!(" HEIGHT=\"{height}\""));
        }
        if let Some(port) = &self.port {
            out.push_str(&format!(" PORT=\"{}\"", escape_attr(port)));
        }
        out.push_str("></TD>");
    }
}

/// Borderless, spacing-free table; one inner `Vec` per `<TR>`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HtmlTable {
    pub bgcolor: Option<String>,
    pub rows: Vec<Vec<TableCell>>,
}

impl HtmlTable {
    pub fn write_to(&self, out: &mut String) {
        out.push_str("<TABLE");
        if let Some(color) = &self.bgcolor {
            out.push_str(&format!(" BGCOLOR=\"{color}\""));
        }
        out.push_str(" BORDER=\"0\" CELLBORDER=\"0\" CELLSPACING=\"0\" CELLPADDING=\"0\">");
        for row in &self.rows {
            out.push_str("<TR>");
            for cell in row {
                cell.write_to(out);
            }
            out.push_str("</TR>");
        }
        out.push_str("</TABLE>");
    }

    /// Sum of the first cell height of every row.
    pub fn total_height(&self) -> f64 {
        self.rows
            .iter()
            .filter_map(|row| row.first().and_then(|cell| cell.height))
            .sum()
    }
}

/// Single-column table: one fixed-height row per port band, filler rows for the gaps.
pub fn port_table(width: f64, height: f64, color: &str, ports: &Ports) -> HtmlTable {
    let mut table = HtmlTable {
        bgcolor: Some(color.to_string()),
        rows: Vec::new(),
    };
    let mut position = 0.0;
    for (name, geom) in ports {
        push_band(&mut table, width, geom.position - position, None);
        push_band(&mut table, width, geom.height, Some(name.as_str()));
        position = geom.last_y();
    }
    push_band(&mut table, width, height - position, None);
    table
}

fn push_band(table: &mut HtmlTable, width: f64, height: f64, port: Option<&str>) {
    if height <= 0.0 {
        tracing::trace!(?port, height, "skipping empty port band");
        return;
    }
    let mut cell = TableCell::fixed(width, height);
    cell.port = port.map(|name| name.to_string());
    table.rows.push(vec![cell]);
}

/// Port every connector attaches to on a shielded rectangle.
pub const SHIELD_CENTER_PORT: &str = "h";

/// 3x3 table: the margin cells reserve `shield` pixels on each side of the colored center.
pub fn padding_table(width: f64, height: f64, color: &str, shield: u32) -> HtmlTable {
    let s = f64::from(shield);
    let corner = || TableCell::fixed(s, s);
    let horizontal_edge = || TableCell {
        height: Some(s),
        ..TableCell::empty()
    };
    let vertical_edge = || TableCell {
        width: Some(s),
        ..TableCell::empty()
    };
    let center = TableCell {
        bgcolor: Some(color.to_string()),
        port: Some(SHIELD_CENTER_PORT.to_string()),
        ..TableCell::fixed(width, height)
    };
    HtmlTable {
        bgcolor: None,
        rows: vec![
            vec![corner(), horizontal_edge(), corner()],
            vec![vertical_edge(), center, vertical_edge()],
            vec![corner(), horizontal_edge(), corner()],
        ],
    }
}
