// File: crates/plot-core/tests/rgba.rs
// Purpose: Validate the in-memory RGBA canvas shape and a few pixels.

use plot_core::{parse_color, PlotKind, PlotRenderer, WHITE};

#[test]
fn render_rgba8_buffer() {
    let color = parse_color("#1e78c8").unwrap();
    let mut plot = PlotRenderer::new(vec![0.0, 1.0, 4.0, 2.0], 40, 30, color, "rgba", "unused.png").unwrap();

    for kind in PlotKind::ALL {
        let canvas = plot.render(kind).expect("rgba render");
        let (w, h) = (canvas.width(), canvas.height());
        assert_eq!((w, h), (40, 30));
        assert_eq!(w as usize * h as usize * 4, canvas.as_raw().len());

        // Only background and mark colors appear
        let marks = canvas.count_pixels(color);
        assert!(marks > 0, "{kind} drew nothing");
        assert_eq!(marks + canvas.count_pixels(WHITE), (w * h) as usize, "{kind}");
    }
}

#[test]
fn background_is_configurable() {
    let bg = parse_color("#121214").unwrap();
    let mut plot = PlotRenderer::new(vec![1.0, 2.0, 3.0, 4.0], 8, 8, WHITE, "bg", "unused.png").unwrap();
    plot.set_background(bg);

    let canvas = plot.render(PlotKind::Box).unwrap();
    // Q1, median, Q3 (2, 3, 4) map to columns 2, 5, 7; both fences are clipped
    let px = &canvas.as_raw()[..4];
    assert_eq!(px, &[0x12, 0x12, 0x14, 255]);
}
