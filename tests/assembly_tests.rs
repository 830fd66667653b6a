//! End-to-end tests: descriptions in, documents out.

use assembly_svg::render::{ConnectorParams, Protrude, draw_connector};
use assembly_svg::types::BBox;
use assembly_svg::{
    Canvas, ComponentGraph, Connector, Error, GraphError, Layout, LayoutParams, LoadError,
    SvgOptions, SvgUnit, parse, parse_named, render_assembly, render_hexagonal, render_stacked,
};
use glam::dvec2;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const WEBSHOP: &str = r#"
# a small web shop
component spa fill lightblue inbound [] outbound [semicircle]
component fetch fill yellow inbound [semicircle] outbound [triangle]
component fake-fetch fill grey inbound [semicircle] outbound []
component api fill pink inbound [triangle] outbound []

spa -> fetch : production
fetch -> api : production
spa -> fake-fetch : test
"#;

const APP: &str = r#"
component app fill lightgreen inbound [rectangle, stairs] outbound [semicircle, triangle]
component api-client inbound [] outbound [rectangle]
component hypermedia-client inbound [] outbound [stairs]
component email inbound [semicircle] outbound []
component payment inbound [triangle] outbound []

api-client -> app : production
hypermedia-client -> app : production
app -> email : production
app -> payment : production
"#;

#[test]
fn stack_follows_the_connections() {
    init_tracing();
    let graph = parse(WEBSHOP).unwrap();
    let stack = graph.to_stacked_assembly("production").unwrap();
    let names = stack.names();

    for connection in graph.connections().filter(|c| c.assembly == "production") {
        let source = names.iter().position(|n| *n == connection.source).unwrap();
        let target = names.iter().position(|n| *n == connection.target).unwrap();
        assert!(source < target, "{} must precede {}", connection.source, connection.target);
    }
    assert!(!names.contains(&"fake-fetch"));
}

#[test]
fn assemblies_are_drawn_separately() {
    init_tracing();
    let graph = parse(WEBSHOP).unwrap();
    let params = LayoutParams::default();

    let production = render_stacked(&graph, "production", &params, SvgUnit::Px).unwrap();
    assert!(production.contains(">fetch</text>"));
    assert!(!production.contains(">fake-fetch</text>"));

    let test = render_stacked(&graph, "test", &params, SvgUnit::Px).unwrap();
    assert!(test.contains(">fake-fetch</text>"));
    assert!(!test.contains(">api</text>"));
}

#[test]
fn incompatible_neighbours_are_reported() {
    let mut graph = ComponentGraph::new();
    graph
        .add_component("spa", "white", [], [Connector::Semicircle])
        .add_component("api", "white", [Connector::Triangle], [])
        .add_connection("spa", "api", "production");

    let err = render_stacked(&graph, "production", &LayoutParams::default(), SvgUnit::Px)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Component spa--semicircle--> is incompatible with --triangle-->api"
    );
}

#[test]
fn undefined_components_are_reported() {
    let graph = parse("spa -> ghost : production\ncomponent spa inbound [] outbound []").unwrap();
    let err = graph.to_stacked_assembly("production").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Component ghost is missing the inbound attribute. Is it defined?"
    );
}

#[test]
fn hexagon_groups_neighbours_around_the_hub() {
    init_tracing();
    let graph = parse(APP).unwrap();
    assert_eq!(graph.to_assembly_subgraph("production").hub(), Some("app"));

    let hexagon = graph.to_hexagonal_assembly("production").unwrap();
    assert_eq!(hexagon.hub().name, "app");
    let inbound: Vec<&str> = hexagon.inbound().iter().map(|c| c.name.as_str()).collect();
    let outbound: Vec<&str> = hexagon.outbound().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(inbound, ["api-client", "hypermedia-client"]);
    assert_eq!(outbound, ["email", "payment"]);
    assert_eq!(hexagon.sides(), 3);

    let svg = render_hexagonal(&graph, "production", &LayoutParams::default(), SvgUnit::Mm)
        .unwrap();
    assert_eq!(svg.matches("<path ").count(), 5);
    assert!(svg.contains(r#"fill="lightgreen""#));
}

#[test]
fn hexagon_needs_a_unique_hub() {
    let mut graph = ComponentGraph::new();
    graph
        .add_connection("a", "b", "production")
        .add_connection("b", "c", "production");

    let err = graph.to_hexagonal_assembly("production").unwrap_err();
    assert!(matches!(err, GraphError::NoUniqueHub { .. }));
}

#[test]
fn drawn_corner_bounds() {
    let mut canvas = Canvas::new();
    canvas.draw(10.0).turn_left(90.0).draw(10.0);

    let limits = canvas.limits();
    assert!((limits.min - dvec2(-0.5, -10.5)).length() < 1e-9);
    assert!((limits.max - dvec2(10.5, 0.5)).length() < 1e-9);
}

#[test]
fn serializing_leaves_the_canvas_alone() {
    let mut canvas = Canvas::new();
    canvas.draw(10.0).turn_right(45.0).draw(3.0).text("corner");

    let first = canvas.as_svg(SvgUnit::Px).unwrap();
    assert_eq!(first, canvas.as_svg(SvgUnit::Px).unwrap());
    assert!(first.starts_with("<svg ") && first.ends_with("</svg>"));
}

#[test]
fn connectors_advance_by_their_span() {
    for connector in Connector::ALL {
        for protrude in [Protrude::In, Protrude::Out] {
            let params = ConnectorParams {
                unit: 10.0,
                protrude,
                pad: 2.0,
            };
            let mut canvas = Canvas::new();
            draw_connector(&mut canvas, connector, &params);

            assert!(
                (canvas.position() - dvec2(params.span(), 0.0)).length() < 1e-6,
                "{connector} {protrude} ended at {}",
                canvas.position()
            );
            assert!((canvas.heading().direction() - dvec2(1.0, 0.0)).length() < 1e-9);
        }
    }
}

#[test]
fn unknown_connectors_point_at_the_source() {
    let source = "component a fill red\ncomponent b inbound [zigzag]";
    let err = parse_named("shop.assembly", source).unwrap_err();
    match err {
        LoadError::UnknownConnector { name, span, .. } => {
            assert_eq!(name, "zigzag");
            assert_eq!(&source[span.offset()..span.offset() + span.len()], "zigzag");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn document_options_are_honoured() {
    let graph = parse(WEBSHOP).unwrap();
    let options = SvgOptions::new(SvgUnit::Mm)
        .with_stylesheet("text { font-family: sans-serif; }")
        .with_bounds(BBox::from_corners(dvec2(0.0, -200.0), dvec2(300.0, 100.0)));

    let svg = render_assembly(
        &graph,
        "production",
        Layout::Stacked,
        &LayoutParams::default(),
        &options,
    )
    .unwrap();
    assert!(svg.contains(r#"width="300mm" height="300mm" viewBox="0 -200 300 300""#));
    assert!(svg.contains("><style>text { font-family: sans-serif; }</style>"));
}

#[test]
fn layouts_parse_from_names() {
    let graph = parse(APP).unwrap();
    let layout: Layout = "hexagon".parse().unwrap();
    let svg = render_assembly(
        &graph,
        "production",
        layout,
        &LayoutParams::default(),
        &SvgOptions::default(),
    )
    .unwrap();
    assert!(svg.contains(">app</text>"));
}

#[test]
fn invalid_layout_parameters_are_rejected() {
    let graph = parse(WEBSHOP).unwrap();
    let err = render_stacked(
        &graph,
        "production",
        &LayoutParams::new(10.0, 0.0, 8.0),
        SvgUnit::Px,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Render(_)));
}
