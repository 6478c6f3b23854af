use crate::color::ColorSequence;
use crate::config::load_config;
use crate::document::{Diagram, DiagramDocument};
use crate::layout_dump::{LayoutDump, write_layout_dump};
use crate::plain::parse_plain;
use crate::post_layout::{apply_layout, route_edges};
use crate::render::{render_graph, write_output};
use crate::text_metrics::DeterministicTextMeasurer;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "shapedot",
    version,
    about = "Emit Graphviz node declarations for diagram shapes and read back their layout"
)]
pub struct Args {
    /// Shape document (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// DOT output file. Defaults to stdout unless a layout is read back.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Layout engine output (`dot -Tplain`) to place the shapes with
    #[arg(short = 'l', long = "layout")]
    pub layout: Option<PathBuf>,

    /// JSON layout dump file. Defaults to stdout if omitted.
    #[arg(short = 'd', long = "dump", requires = "layout")]
    pub dump: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let doc = DiagramDocument::from_json(&input).context("reading shape document")?;
    let measurer = DeterministicTextMeasurer::from_config(&config.text);
    let mut colors = ColorSequence::from_config(&config.colors);
    let mut diagram = Diagram::build(&doc, &mut colors)?;

    let Some(layout_path) = args.layout.as_deref() else {
        let dot = render_graph(&diagram.shapes, &measurer, &config.render)?;
        write_output(&dot, args.output.as_deref())?;
        return Ok(());
    };
    if let Some(output) = args.output.as_deref() {
        let dot = render_graph(&diagram.shapes, &measurer, &config.render)?;
        write_output(&dot, Some(output))?;
    }

    let plain = std::fs::read_to_string(layout_path)
        .with_context(|| format!("reading layout output {}", layout_path.display()))?;
    let layout = parse_plain(&plain)?;
    let placed = apply_layout(&mut diagram.shapes, &layout)?;
    let edges = route_edges(&diagram.shapes, &layout, &measurer, &config.geometry)?;
    tracing::info!(
        placed,
        total = diagram.shapes.len(),
        edges = edges.len(),
        "applied layout"
    );
    let dump = LayoutDump::from_diagram(&diagram, layout.width, layout.height, &edges)?;
    write_layout_dump(args.dump.as_deref(), &dump)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()));
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
