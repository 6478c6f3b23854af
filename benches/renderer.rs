use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shape_dot::config::RenderConfig;
use shape_dot::document::{Diagram, DiagramDocument};
use shape_dot::plain::parse_plain;
use shape_dot::post_layout::apply_layout;
use shape_dot::render::render_graph;
use shape_dot::text_metrics::DeterministicTextMeasurer;
use shape_dot::ColorSequence;
use std::hint::black_box;

const TYPES: [&str; 8] = [
    "rectangle",
    "folder",
    "octagon",
    "diamond",
    "circle",
    "circle_in_rect",
    "oval",
    "round_rectangle",
];

fn mixed_document(shapes: usize, ports_per_table: usize) -> String {
    let mut items = Vec::with_capacity(shapes);
    for i in 0..shapes {
        let item = match i % 10 {
            8 => format!(
                r#"{{ "name": "b{i}", "type": "rectangle", "width": 80, "height": 40, "shield": 6 }}"#
            ),
            9 => {
                let ports: Vec<String> = (0..ports_per_table)
                    .map(|p| {
                        format!(
                            r#"{{ "name": "p{p}", "position": {}, "height": 12 }}"#,
                            4 + p * 16
                        )
                    })
                    .collect();
                format!(
                    r#"{{ "name": "t{i}", "type": "rectangle_html_for_ports", "width": 120, "height": {}, "ports": [{}] }}"#,
                    8 + ports_per_table * 16,
                    ports.join(",")
                )
            }
            k => format!(
                r#"{{ "name": "n{i}", "type": "{}", "width": 60, "height": 30, "label": "n{i}" }}"#,
                TYPES[k % TYPES.len()]
            ),
        };
        items.push(item);
    }
    format!(r#"{{ "shapes": [{}] }}"#, items.join(","))
}

fn plain_output(shapes: usize) -> String {
    let mut out = format!("graph 1 {} 2\n", shapes as f64);
    for i in 0..shapes {
        out.push_str(&format!(
            "node sh{:04} {} 1 0.8 0.5 \"\" solid rect black lightgrey\n",
            i + 1,
            i as f64 + 0.5
        ));
    }
    out.push_str("stop\n");
    out
}

fn build(doc: &DiagramDocument) -> Diagram {
    Diagram::build(doc, &mut ColorSequence::default()).expect("build failed")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_graph");
    let measurer = DeterministicTextMeasurer::default();
    let config = RenderConfig::default();
    for (shapes, ports) in [(10, 2), (200, 4), (2000, 12)] {
        let doc = DiagramDocument::from_json(&mixed_document(shapes, ports)).expect("doc");
        let diagram = build(&doc);
        group.bench_with_input(
            BenchmarkId::new("mixed", format!("{shapes}x{ports}")),
            &diagram,
            |b, data| {
                b.iter(|| {
                    let dot = render_graph(black_box(&data.shapes), &measurer, &config)
                        .expect("render failed");
                    black_box(dot.len());
                });
            },
        );
    }
    group.finish();
}

fn bench_apply_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_layout");
    for shapes in [10usize, 200, 2000] {
        let doc = DiagramDocument::from_json(&mixed_document(shapes, 3)).expect("doc");
        let plain = plain_output(shapes);
        group.bench_with_input(BenchmarkId::from_parameter(shapes), &plain, |b, data| {
            b.iter(|| {
                let mut diagram = build(&doc);
                let layout = parse_plain(black_box(data)).expect("plain parse failed");
                let placed = apply_layout(&mut diagram.shapes, &layout).expect("apply failed");
                black_box(placed);
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_render, bench_apply_layout
);
criterion_main!(benches);
