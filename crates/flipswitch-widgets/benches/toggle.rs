//! Benchmark tests for toggle interaction and painting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipswitch_core::{Point, RecordingCanvas, Rect, Size, Widget};
use flipswitch_widgets::{Toggle, ToggleConfig, ToggleInteractionController};

fn bench_continue_track(c: &mut Criterion) {
    let mut controller =
        ToggleInteractionController::new(Size::new(315.0, 175.0), ToggleConfig::default());
    controller.begin_track(Point::new(80.0, 80.0));
    let mut x = 80.0f32;

    c.bench_function("controller_continue_track", |b| {
        b.iter(|| {
            x = if x > 300.0 { 0.0 } else { x + 3.0 };
            controller.continue_track(black_box(Point::new(x, 80.0)))
        });
    });
}

fn bench_tap_and_settle(c: &mut Criterion) {
    c.bench_function("controller_tap_settle", |b| {
        b.iter(|| {
            let mut controller =
                ToggleInteractionController::new(Size::new(50.0, 30.0), ToggleConfig::default());
            controller.handle_tap();
            while controller.is_animating() {
                controller.tick(black_box(1.0 / 60.0));
            }
            controller.is_on()
        });
    });
}

fn bench_toggle_paint(c: &mut Criterion) {
    let toggle = Toggle::new(Rect::new(30.0, 246.0, 315.0, 175.0));
    let mut canvas = RecordingCanvas::new();

    c.bench_function("toggle_paint", |b| {
        b.iter(|| {
            canvas.clear();
            toggle.paint(black_box(&mut canvas));
            canvas.command_count()
        });
    });
}

criterion_group!(
    benches,
    bench_continue_track,
    bench_tap_and_settle,
    bench_toggle_paint,
);
criterion_main!(benches);
