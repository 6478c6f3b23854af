//! Reader for the layout engine's `-Tplain` output.
//!
//! Plain output is in inches with the origin at the bottom-left corner and node
//! coordinates at the node center. Everything returned here is converted to pixels with the
//! origin at the top-left and boxes anchored at their minimum corner, matching [`Shape`].
//!
//! [`Shape`]: crate::shape::Shape

use crate::error::{Error, Result};
use crate::geometry::{ClusterPosition, Point};
use crate::render::inches_to_pixel;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static GRAPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^graph\s+\S+\s+(?P<w>\S+)\s+(?P<h>\S+)").unwrap());
static NODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^node\s+(?P<name>"(?:[^"\\]|\\.)*"|\S+)\s+(?P<x>\S+)\s+(?P<y>\S+)\s+(?P<w>\S+)\s+(?P<h>\S+)"#,
    )
    .unwrap()
});
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""(?:[^"\\]|\\.)*"|\S+"#).unwrap());

/// Spline the engine routed between two nodes, control points in absolute pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainEdge {
    pub tail: String,
    pub head: String,
    pub points: Vec<Point>,
}

/// Graph size in pixels plus every node box and edge route, in output order.
#[derive(Debug, Clone, Default)]
pub struct PlainLayout {
    pub width: f64,
    pub height: f64,
    /// Absolute node boxes keyed by node name.
    pub nodes: IndexMap<String, ClusterPosition>,
    pub edges: Vec<PlainEdge>,
}

pub fn parse_plain(input: &str) -> Result<PlainLayout> {
    let mut layout: Option<PlainLayout> = None;

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let keyword = line.split_whitespace().next().unwrap_or_default();
        match keyword {
            "graph" => {
                let caps = GRAPH_RE
                    .captures(line)
                    .ok_or_else(|| malformed(line_no, "graph line needs scale, width and height"))?;
                layout = Some(PlainLayout {
                    width: inches_to_pixel(number(&caps["w"], line_no)?),
                    height: inches_to_pixel(number(&caps["h"], line_no)?),
                    ..PlainLayout::default()
                });
            }
            "node" => {
                let layout = layout
                    .as_mut()
                    .ok_or_else(|| malformed(line_no, "node line before graph line"))?;
                let caps = NODE_RE
                    .captures(line)
                    .ok_or_else(|| malformed(line_no, "node line needs name, x, y, width and height"))?;
                let name = unquote(&caps["name"]);
                let cx = inches_to_pixel(number(&caps["x"], line_no)?);
                let cy = layout.height - inches_to_pixel(number(&caps["y"], line_no)?);
                let w = inches_to_pixel(number(&caps["w"], line_no)?);
                let h = inches_to_pixel(number(&caps["h"], line_no)?);
                let bounds =
                    ClusterPosition::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0);
                layout.nodes.insert(name, bounds);
            }
            "edge" => {
                let layout = layout
                    .as_mut()
                    .ok_or_else(|| malformed(line_no, "edge line before graph line"))?;
                let edge = parse_edge(line, line_no, layout.height)?;
                layout.edges.push(edge);
            }
            "stop" => break,
            other => {
                return Err(malformed(line_no, &format!("unknown statement `{other}`")));
            }
        }
    }

    layout.ok_or_else(|| Error::LayoutOutput {
        line: 0,
        message: "missing graph line".to_string(),
    })
}

/// `edge tail head n x1 y1 .. xn yn [label xl yl] style color`; only the route is kept.
fn parse_edge(line: &str, line_no: usize, graph_height: f64) -> Result<PlainEdge> {
    let tokens: Vec<&str> = TOKEN_RE.find_iter(line).map(|m| m.as_str()).collect();
    if tokens.len() < 4 {
        return Err(malformed(line_no, "edge line needs tail, head and a point count"));
    }
    let count = tokens[3]
        .parse::<usize>()
        .map_err(|_| malformed(line_no, &format!("`{}` is not a point count", tokens[3])))?;
    let coords = count
        .checked_mul(2)
        .and_then(|len| len.checked_add(4))
        .and_then(|end| tokens.get(4..end))
        .ok_or_else(|| malformed(line_no, &format!("edge line declares {count} points")))?;
    let mut points = Vec::with_capacity(count);
    for pair in coords.chunks(2) {
        let x = inches_to_pixel(number(pair[0], line_no)?);
        let y = graph_height - inches_to_pixel(number(pair[1], line_no)?);
        points.push(Point::new(x, y));
    }
    Ok(PlainEdge {
        tail: unquote(tokens[1]),
        head: unquote(tokens[2]),
        points,
    })
}

fn number(token: &str, line: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| malformed(line, &format!("`{token}` is not a number")))
}

fn unquote(token: &str) -> String {
    match token.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => token.to_string(),
    }
}

fn malformed(line: usize, message: &str) -> Error {
    Error::LayoutOutput {
        line,
        message: message.to_string(),
    }
}
