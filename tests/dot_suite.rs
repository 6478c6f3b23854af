use std::path::{Path, PathBuf};

use shape_dot::{
    ColorSequence, DeterministicTextMeasurer, Diagram, DiagramDocument, GeometryConfig, Point,
    RenderConfig, ShapeType, TextMeasurer, apply_layout, parse_plain, render_graph, route_edges,
};

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_diagram(rel: &str) -> Diagram {
    let input = std::fs::read_to_string(fixtures_root().join(rel)).expect("fixture read failed");
    let doc = DiagramDocument::from_json(&input).expect("document parse failed");
    Diagram::build(&doc, &mut ColorSequence::default()).expect("diagram build failed")
}

fn assert_valid_dot(dot: &str, fixture: &str, shapes: usize) {
    assert!(dot.starts_with("digraph "), "{fixture}: missing digraph header");
    assert!(dot.ends_with("}\n"), "{fixture}: missing closing brace");
    let decls: Vec<&str> = dot.lines().filter(|l| l.starts_with("sh")).collect();
    assert_eq!(decls.len(), shapes, "{fixture}: one declaration per shape");
    for decl in decls {
        assert!(decl.ends_with("];"), "{fixture}: unterminated {decl}");
        if decl.contains("shape=plaintext") {
            assert_eq!(
                decl.matches("<TABLE").count(),
                decl.matches("</TABLE>").count(),
                "{fixture}: unbalanced table in {decl}"
            );
            assert_eq!(decl.matches("<TD").count(), decl.matches("</TD>").count());
        }
    }
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = ["basic.json", "folder.json", "ports.json", "shielded.json"];
    let measurer = DeterministicTextMeasurer::default();

    for rel in candidates {
        let path = fixtures_root().join(rel);
        assert!(path.exists(), "fixture missing: {}", rel);
        let diagram = load_diagram(rel);
        let dot = render_graph(&diagram.shapes, &measurer, &RenderConfig::default())
            .expect("render failed");
        assert_valid_dot(&dot, rel, diagram.shapes.len());
    }
}

#[test]
fn port_fixture_rows() {
    let diagram = load_diagram("ports.json");
    let dot = render_graph(
        &diagram.shapes,
        &DeterministicTextMeasurer::default(),
        &RenderConfig::default(),
    )
    .unwrap();
    assert!(dot.contains(
        "<TR><TD FIXEDSIZE=\"TRUE\" WIDTH=\"40\" HEIGHT=\"10\" PORT=\"a\"></TD></TR>\
         <TR><TD FIXEDSIZE=\"TRUE\" WIDTH=\"40\" HEIGHT=\"5\"></TD></TR>\
         <TR><TD FIXEDSIZE=\"TRUE\" WIDTH=\"40\" HEIGHT=\"5\" PORT=\"b\"></TD></TR>\
         <TR><TD FIXEDSIZE=\"TRUE\" WIDTH=\"40\" HEIGHT=\"5\"></TD></TR></TABLE>"
    ));
}

#[test]
fn folder_fixture_round_trip_through_layout_output() {
    let mut diagram = load_diagram("folder.json");
    let plain = std::fs::read_to_string(fixtures_root().join("folder.plain")).unwrap();
    let layout = parse_plain(&plain).unwrap();
    let placed = apply_layout(&mut diagram.shapes, &layout).unwrap();
    assert_eq!(placed, 2);

    let folder = &diagram.shapes[0];
    assert_eq!(folder.shape_type(), ShapeType::Folder);
    assert!((folder.min_x() - 22.0).abs() < 0.01);
    assert!((folder.min_y() - 52.0).abs() < 0.01);

    let measurer = DeterministicTextMeasurer::default();
    let name = measurer.measure("model");
    let top = folder.min_y();
    let far = Point::new(folder.min_x() + 90.0, top);
    let near = Point::new(folder.min_x() + 1.0, top);
    assert_eq!(
        folder.project(far, &measurer).unwrap(),
        Point::new(far.x, top + name.height + 4.0)
    );
    assert_eq!(folder.project(near, &measurer).unwrap(), near);

    let octagon = &mut diagram.shapes[1];
    let (ox, oy) = (octagon.min_x(), octagon.min_y());
    octagon
        .attach_octagon(ox, oy, vec![Point::new(ox + 15.0, oy), Point::new(ox + 35.0, oy)])
        .unwrap();
    let first = octagon.octagon().unwrap().points()[0];
    assert!((first.x - 15.0).abs() < 1e-9);
    assert_eq!(first.y, 0.0);
}

#[test]
fn folder_fixture_edge_lands_below_the_tab() {
    let mut diagram = load_diagram("folder.json");
    let plain = std::fs::read_to_string(fixtures_root().join("folder.plain")).unwrap();
    let layout = parse_plain(&plain).unwrap();
    apply_layout(&mut diagram.shapes, &layout).unwrap();

    let measurer = DeterministicTextMeasurer::default();
    let edges = route_edges(
        &diagram.shapes,
        &layout,
        &measurer,
        &GeometryConfig::default(),
    )
    .unwrap();
    assert_eq!(edges.len(), 1);
    let edge = &edges[0];
    assert_eq!((edge.tail.as_str(), edge.head.as_str()), ("sh0002", "sh0001"));

    let routed = &layout.edges[0].points;
    assert_eq!(edge.points[0], routed[0]);
    assert_eq!(edge.points[1..3], routed[1..3]);
    let end = edge.points[3];
    let name = measurer.measure("model");
    assert_eq!(end.x, routed[3].x);
    assert!((end.y - (routed[3].y + name.height + 4.0)).abs() < 1e-9);
    assert!(end.y > diagram.shapes[0].min_y());
}
