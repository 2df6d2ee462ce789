// File: crates/plot-core/tests/snapshot.rs
// Purpose: Pixel-exact baselines for every plot kind, stored under tests/__snapshots__.
// Behavior:
// - The dataset is built from exact quarter steps so the baselines do not depend on libm.
// - UPDATE_SNAPSHOTS=1 rewrites the baselines instead of comparing.
// - A missing baseline fails the test.

use std::path::{Path, PathBuf};

use plot_core::{parse_color, PlotKind, PlotRenderer};

fn updating() -> bool {
    matches!(std::env::var("UPDATE_SNAPSHOTS").as_deref(), Ok("1") | Ok("true"))
}

fn baseline(kind: PlotKind) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(format!("{kind}.png"))
}

// 200 samples, quarter steps between -3 and 22
fn dataset() -> Vec<f64> {
    (0..200u32).map(|i| ((i * 37) % 101) as f64 * 0.25 - 3.0).collect()
}

fn render(kind: PlotKind) -> Vec<u8> {
    let color = parse_color("#2078c8").unwrap();
    let mut plot = PlotRenderer::new(dataset(), 160, 100, color, "baseline", "unused.png").unwrap();
    plot.set_bins(32).unwrap();
    plot.render_to_png_bytes(kind).expect("render bytes")
}

fn check(kind: PlotKind, png: &[u8]) {
    let path = baseline(kind);
    if updating() {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, png).unwrap();
        eprintln!("updated baseline {}", path.display());
        return;
    }
    let stored = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("no baseline at {} ({e}); rerun with UPDATE_SNAPSHOTS=1", path.display()));
    let expected = image::load_from_memory(&stored).expect("decode baseline").to_rgba8();
    let actual = image::load_from_memory(png).expect("decode render").to_rgba8();
    assert_eq!(actual.dimensions(), expected.dimensions(), "{kind}");
    assert!(actual.as_raw() == expected.as_raw(), "{kind} differs from {}", path.display());
}

#[test]
fn dataset_spans_known_range() {
    let data = dataset();
    assert_eq!(data.iter().copied().fold(f64::INFINITY, f64::min), -3.0);
    assert_eq!(data.iter().copied().fold(f64::NEG_INFINITY, f64::max), 22.0);
}

#[test]
fn plots_match_baselines() {
    for kind in PlotKind::ALL {
        check(kind, &render(kind));
    }
}
