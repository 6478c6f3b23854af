use serde::{Deserialize, Serialize};
use std::path::Path;

/// Graph-level attributes written around the node declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub graph_name: String,
    pub rankdir: String,
    pub nodesep: f64,
    pub ranksep: f64,
    pub splines: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            graph_name: "unix".to_string(),
            rankdir: "TB".to_string(),
            nodesep: 0.486111,
            ranksep: 0.833333,
            splines: "spline".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Gap left under a folder's name tab when a connector is pushed below it.
    pub folder_label_clearance: f64,
    /// How far below a top edge a point may sit and still count as touching it from above.
    pub just_upper_tolerance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            folder_label_clearance: 4.0,
            just_upper_tolerance: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub start: u32,
    pub step: u32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { start: 1, step: 1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    pub font_size: f64,
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            char_width_factor: 0.6,
            line_height_factor: 1.2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: RenderConfig,
    pub geometry: GeometryConfig,
    pub colors: ColorConfig,
    pub text: TextConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    graph: Option<GraphConfigFile>,
    geometry: Option<GeometryConfigFile>,
    colors: Option<ColorConfigFile>,
    text: Option<TextConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GraphConfigFile {
    name: Option<String>,
    rankdir: Option<String>,
    nodesep: Option<f64>,
    ranksep: Option<f64>,
    splines: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GeometryConfigFile {
    folder_label_clearance: Option<f64>,
    just_upper_tolerance: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ColorConfigFile {
    start: Option<u32>,
    step: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct TextConfigFile {
    font_size: Option<f64>,
    char_width_factor: Option<f64>,
    line_height_factor: Option<f64>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(err) => json5::from_str(contents).map_err(|_| err)?,
    };
    let mut config = Config::default();

    if let Some(graph) = parsed.graph {
        if let Some(v) = graph.name {
            config.render.graph_name = v;
        }
        if let Some(v) = graph.rankdir {
            config.render.rankdir = v;
        }
        if let Some(v) = graph.nodesep {
            config.render.nodesep = v;
        }
        if let Some(v) = graph.ranksep {
            config.render.ranksep = v;
        }
        if let Some(v) = graph.splines {
            config.render.splines = v;
        }
    }

    if let Some(geometry) = parsed.geometry {
        if let Some(v) = geometry.folder_label_clearance {
            config.geometry.folder_label_clearance = v;
        }
        if let Some(v) = geometry.just_upper_tolerance {
            config.geometry.just_upper_tolerance = v.max(0.0);
        }
    }

    if let Some(colors) = parsed.colors {
        if let Some(v) = colors.start {
            config.colors.start = v;
        }
        if let Some(v) = colors.step {
            config.colors.step = v;
        }
    }

    if let Some(text) = parsed.text {
        if let Some(v) = text.font_size {
            config.text.font_size = v;
        }
        if let Some(v) = text.char_width_factor {
            config.text.char_width_factor = v;
        }
        if let Some(v) = text.line_height_factor {
            config.text.line_height_factor = v;
        }
    }

    Ok(config)
}
