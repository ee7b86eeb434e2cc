// File: crates/dayline-core/tests/render.rs
// Purpose: Empty renders clear to the background only; ready renders draw into the plot.

use dayline_core::{ChartOptions, ChartState, RenderOptions, ScaleKind, Theme};

const DARK_BG: [u8; 4] = [18, 18, 20, 255];

#[test]
fn empty_state_renders_background_only() {
    let state = ChartState::empty(ChartOptions::default());
    let opts = RenderOptions {
        width: 64,
        height: 48,
        theme: Theme::dark(),
        draw_labels: false,
    };

    let (pixels, w, h, stride) = state.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(stride, w as usize * 4);
    assert_eq!(pixels.len(), stride * h as usize);
    // No axes, no paths: every pixel is the cleared background.
    for px in pixels.chunks_exact(4) {
        assert_eq!(px, DARK_BG);
    }
}

#[test]
fn ready_state_renders_axes_and_paths() {
    let options = ChartOptions {
        categories: vec!["a".to_string()],
        scale: ScaleKind::Linear,
        ..ChartOptions::default()
    };
    let state = ChartState::from_tsv(
        options,
        "2021-01-01\t1\n2021-01-02\t3\n2021-01-03\t2\n",
    )
    .expect("parse");
    assert!(!state.is_empty());

    let opts = RenderOptions {
        width: 320,
        height: 200,
        theme: Theme::dark(),
        draw_labels: false,
    };

    let bytes = state.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let (pixels, _, _, _) = state.render_to_rgba8(&opts).expect("rgba render");
    let touched = pixels.chunks_exact(4).filter(|px| *px != DARK_BG).count();
    assert!(touched > 0, "axes and series should touch pixels");
}

#[test]
fn render_is_a_pure_projection_of_state() {
    let options = ChartOptions {
        categories: vec!["a".to_string(), "b".to_string()],
        ..ChartOptions::default()
    };
    let state = ChartState::from_tsv(
        options,
        "2021-01-01\t1\t4\n2021-01-02\t3\t1\n2021-01-03\t2\t5\n",
    )
    .expect("parse");

    let opts = RenderOptions {
        width: 320,
        height: 200,
        theme: Theme::dark(),
        draw_labels: false,
    };
    let (first, ..) = state.render_to_rgba8(&opts).expect("first render");
    let (second, ..) = state.render_to_rgba8(&opts).expect("second render");
    assert_eq!(first, second, "repeated renders of one state are identical");
}
