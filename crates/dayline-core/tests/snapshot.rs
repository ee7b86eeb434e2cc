// File: crates/dayline-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use dayline_core::{ChartOptions, ChartState, RenderOptions, ScaleKind};

fn render_bytes() -> Vec<u8> {
    let options = ChartOptions {
        categories: vec!["a".to_string(), "b".to_string()],
        scale: ScaleKind::Linear,
        ..ChartOptions::default()
    };
    let state = ChartState::from_tsv(
        options,
        "2021-01-01\t1\t4\n2021-01-02\t3\t1\n2021-01-03\t2\t5\n2021-01-04\t4\t3\n",
    )
    .expect("parse sample day");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    state.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let bytes = render_bytes();
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/__snapshots__/basic_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if update {
        if let Some(parent) = snap_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "Pixels differ: {}",
            snap_path.display()
        );
    } else {
        eprintln!(
            "[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.",
            snap_path.display()
        );
    }
}
