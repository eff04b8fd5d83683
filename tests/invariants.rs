//! Contract Invariant Tests
//!
//! These tests verify the guarantees callers rely on: determinism,
//! error kinds, catalog order and seamless tiling.

use base64::Engine;
use proptest::prelude::*;

use tessera_core::{
    GenerationOptions, GeneratorKind, Pattern, PatternError, RenderReport, Seams, SvgNode,
};

fn render(input: &str, generator: GeneratorKind) -> Pattern {
    Pattern::create(input, GenerationOptions::default().with_generator(generator.name())).unwrap()
}

#[test]
fn invariant_same_input_same_bytes() {
    for input in ["", "hello", "Tessera", "ünïcödé ✓"] {
        let a = Pattern::new(input).unwrap().to_string();
        let b = Pattern::new(input).unwrap().to_string();
        assert_eq!(a, b, "output differs for {input:?}");
    }
}

#[test]
fn invariant_unknown_generator_rejected() {
    let options = GenerationOptions::default().with_generator("NotAThing");
    match Pattern::create("hello", options) {
        Err(PatternError::InvalidGenerator(name)) => assert_eq!(name, "NotAThing"),
        other => panic!("expected InvalidGenerator, got {other:?}"),
    }
}

#[test]
fn invariant_bad_colors_rejected() {
    let bad_color = GenerationOptions::default().with_color("#12");
    assert!(matches!(
        Pattern::create("hello", bad_color),
        Err(PatternError::InvalidColorFormat(c)) if c == "#12"
    ));

    let bad_base = GenerationOptions::default().with_base_color("#zzzzzz");
    assert!(matches!(
        Pattern::create("hello", bad_base),
        Err(PatternError::InvalidColorFormat(c)) if c == "#zzzzzz"
    ));
}

#[test]
fn invariant_shorthand_color_expands() {
    let with_base = |color: &str| {
        Pattern::create("hello", GenerationOptions::default().with_base_color(color)).unwrap()
    };
    assert_eq!(with_base("#abc").to_string(), with_base("#aabbcc").to_string());
}

#[test]
fn invariant_every_generator_renders() {
    for kind in GeneratorKind::ALL {
        let pattern = render("abc", kind);
        assert_eq!(pattern.generator(), kind);
        assert!(pattern.width() > 0, "{kind} has zero width");
        assert!(pattern.height() > 0, "{kind} has zero height");
        // background plus at least one shape
        assert!(pattern.document().nodes().len() > 1, "{kind} drew nothing");
    }
}

#[test]
fn invariant_golden_hello_squares() {
    let pattern = render("hello", GeneratorKind::Squares);
    let svg = pattern.to_string();

    assert!(svg.starts_with(concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="260" height="260">"#,
        r#"<rect x="0" y="0" width="100%" height="100%" fill="rgb(50,157,69)"></rect>"#,
        r##"<rect x="0" y="0" width="43.333333333333336" height="43.333333333333336" fill="#ddd" fill-opacity="0.10666666666666667" stroke="#000" stroke-opacity="0.02"></rect>"##,
    )));
    assert!(svg.ends_with(concat!(
        r##"<rect x="216.66666666666669" y="216.66666666666669" width="43.333333333333336" height="43.333333333333336" fill="#222" fill-opacity="0.098" stroke="#000" stroke-opacity="0.02"></rect>"##,
        "</svg>",
    )));
    // background plus a 6x6 grid, no edge copies
    assert_eq!(pattern.document().nodes().len(), 37);
}

/// Where a tile was placed: `cx`/`cy` for circles, otherwise the leading
/// `translate(x,y)` of its transform.
fn position(node: &SvgNode) -> (f64, f64) {
    let number = |key: &str| node.attribute(key).and_then(|v| v.as_number());
    if let (Some(cx), Some(cy)) = (number("cx"), number("cy")) {
        return (cx, cy);
    }
    let transform = node.attribute("transform").and_then(|v| v.as_text()).unwrap();
    let args = transform.strip_prefix("translate(").unwrap();
    let (args, _) = args.split_once(')').unwrap();
    let (x, y) = args.split_once(',').unwrap();
    (x.parse().unwrap(), y.parse().unwrap())
}

/// Everything about a tile except where it was placed.
fn shape(node: &SvgNode) -> String {
    let mut out = node.tag().as_str().to_string();
    for (key, value) in node.attributes() {
        match key.as_str() {
            "cx" | "cy" => {}
            "transform" => {
                let text = value.as_text().unwrap();
                let rest = text.split_once(')').map_or("", |(_, rest)| rest);
                out.push_str(&format!(" transform={rest}"));
            }
            _ => out.push_str(&format!(" {key}={value}")),
        }
    }
    for child in node.children() {
        out.push_str(&child.to_string());
    }
    out
}

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
}

/// Assert some node sits at `at` and looks exactly like `source`.
fn assert_copy(kind: GeneratorKind, nodes: &[SvgNode], source: &SvgNode, at: (f64, f64)) {
    let copy = nodes
        .iter()
        .find(|n| close(position(n), at))
        .unwrap_or_else(|| panic!("{kind}: no copy at {at:?}"));
    assert_eq!(shape(copy), shape(source), "{kind}: copy at {at:?} differs");
}

#[test]
fn invariant_edge_copies_sit_one_grid_span_away() {
    for kind in GeneratorKind::ALL {
        let seams = kind.seams();
        if seams == Seams::NONE {
            continue;
        }
        let (cols, rows) = if kind == GeneratorKind::WaveFishScales { (3, 6) } else { (6, 6) };
        let pattern = render("hello", kind);
        let nodes = pattern.document().nodes();

        // nodes[0] is the background, then cell (0,0) and its copies
        let copies = [seams.right, seams.bottom, seams.corner].iter().filter(|s| **s).count();
        let second = 2 + copies;
        let next_row = second + (cols - 1) * (1 + usize::from(seams.bottom));

        let origin = position(&nodes[1]);
        let step_x = position(&nodes[second]).0 - origin.0;
        let step_y = position(&nodes[next_row]).1 - origin.1;
        let span_x = cols as f64 * step_x;
        let span_y = rows as f64 * step_y;

        if seams.right {
            assert_copy(kind, nodes, &nodes[1], (origin.0 + span_x, origin.1));
            assert!((span_x - f64::from(pattern.width())).abs() < 1.0, "{kind}: width span");
        }
        if seams.bottom {
            assert_copy(kind, nodes, &nodes[1], (origin.0, origin.1 + span_y));
            let cell = position(&nodes[second]);
            assert_copy(kind, nodes, &nodes[second], (cell.0, cell.1 + span_y));
            assert!((span_y - f64::from(pattern.height())).abs() < 1.0, "{kind}: height span");
        }
        if seams.corner {
            assert_copy(kind, nodes, &nodes[1], (origin.0 + span_x, origin.1 + span_y));
        }
        if seams.top {
            let last_row = (origin.0, origin.1 + (rows - 1) as f64 * step_y);
            let source = nodes.iter().find(|n| close(position(n), last_row)).unwrap();
            assert_copy(kind, nodes, source, (origin.0, origin.1 - step_y));
        }
    }
}

#[test]
fn invariant_wave_fish_scales_span_three_double_diameters() {
    let pattern = render("hello", GeneratorKind::WaveFishScales);
    let nodes = pattern.document().nodes();
    // "hello" starts with gene 0xa
    let diameter = tessera_core::remap(10.0, 0.0, 15.0, 25.0, 200.0);

    // cell (0,0) then its right-hand copy
    let (base, copy) = (position(&nodes[1]), position(&nodes[2]));
    assert!((copy.0 - base.0 - 3.0 * 2.0 * diameter).abs() < 1e-6);
    assert_eq!(copy.1, base.1);
}

#[test]
fn invariant_right_copy_offset_by_canvas_width() {
    let pattern = render("hello", GeneratorKind::OverlappingCircles);
    let nodes = pattern.document().nodes();
    let cx = |n: &SvgNode| n.attribute("cx").and_then(|v| v.as_number()).unwrap();
    let r = nodes[1].attribute("r").and_then(|v| v.as_number()).unwrap();

    assert_eq!(cx(&nodes[1]), 0.0);
    assert_eq!(cx(&nodes[2]), 6.0 * r);
    assert_eq!(pattern.width(), (6.0 * r).floor() as u32);
}

#[test]
fn invariant_exact_fit_generators_emit_no_copies() {
    for kind in [GeneratorKind::Squares, GeneratorKind::Octogons, GeneratorKind::MosaicSquares] {
        assert_eq!(kind.seams(), Seams::NONE);
    }
}

#[test]
fn invariant_hash_selection_skips_catalog_tail() {
    let tail = &GeneratorKind::ALL[16..];
    for i in 0..400 {
        let pattern = Pattern::new(&format!("input-{i}")).unwrap();
        assert!(!tail.contains(&pattern.generator()), "{} selected by hash", pattern.generator());
    }
    for kind in tail {
        assert_eq!(render("hello", *kind).generator(), *kind);
    }
}

#[test]
fn invariant_job_hash_stable() {
    let report = |input: &str| RenderReport::from_pattern(&Pattern::new(input).unwrap()).unwrap();

    let a = report("hello");
    let b = report("hello");
    assert_eq!(a.job_hash, b.job_hash);
    assert_eq!(a.svg_hash, b.svg_hash);
    assert_ne!(a.job_hash, report("world").job_hash);
}

#[test]
fn invariant_data_uri_decodes_to_svg() {
    let pattern = Pattern::new("hello").unwrap();
    let uri = pattern.to_data_uri();
    let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
    let decoded = base64::engine::general_purpose::STANDARD.decode(encoded).unwrap();

    assert_eq!(String::from_utf8(decoded).unwrap(), pattern.to_string());
    assert_eq!(pattern.to_data_url(), format!("url(\"{uri}\")"));
}

#[test]
fn invariant_parallel_generation_matches_serial() {
    let inputs: Vec<String> = (0..8).map(|i| format!("thread-{i}")).collect();
    let serial: Vec<String> = inputs.iter().map(|s| Pattern::new(s).unwrap().to_string()).collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|s| std::thread::spawn(move || Pattern::new(&s).unwrap().to_string()))
        .collect();
    let parallel: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(serial, parallel);
}

proptest! {
    #[test]
    fn invariant_any_input_is_deterministic(input in ".{0,32}") {
        let a = Pattern::new(&input).unwrap();
        let b = Pattern::new(&input).unwrap();
        prop_assert_eq!(a.generator(), b.generator());
        prop_assert_eq!(a.to_string(), b.to_string());
    }
}
