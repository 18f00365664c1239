#![allow(clippy::float_cmp)]

use super::*;

fn segments(actions: &[Action]) -> Vec<Segment> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::SegmentRendered(seg) => Some(*seg),
            _ => None,
        })
        .collect()
}

fn draw_line(surface: &mut CaptureSurface) {
    surface.on_pointer_down(Point::new(40.0, 40.0));
    surface.on_pointer_move(Point::new(200.0, 200.0));
    surface.on_pointer_up(Point::new(200.0, 200.0));
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_surface_is_empty_and_idle() {
    let surface = CaptureSurface::new(280, 280);
    assert!(surface.is_empty());
    assert!(!surface.is_stroke_active());
    assert_eq!((surface.width(), surface.height()), (280, 280));
}

#[test]
fn default_surface_uses_default_size() {
    let surface = CaptureSurface::default();
    assert_eq!((surface.width(), surface.height()), (DEFAULT_SIZE_PX, DEFAULT_SIZE_PX));
}

// =============================================================
// Stroke lifecycle
// =============================================================

#[test]
fn pointer_down_starts_stroke_without_painting() {
    let mut surface = CaptureSurface::new(100, 100);
    let actions = surface.on_pointer_down(Point::new(10.0, 20.0));
    assert_eq!(actions, vec![Action::StrokeStarted(Point::new(10.0, 20.0))]);
    assert!(surface.is_stroke_active());
    assert!(surface.is_empty());
}

#[test]
fn move_without_down_is_ignored() {
    let mut surface = CaptureSurface::new(100, 100);
    assert!(surface.on_pointer_move(Point::new(10.0, 10.0)).is_empty());
    assert!(surface.is_empty());
}

#[test]
fn move_renders_segment_immediately() {
    let mut surface = CaptureSurface::new(100, 100);
    surface.on_pointer_down(Point::new(10.0, 10.0));
    let actions = surface.on_pointer_move(Point::new(50.0, 10.0));
    assert_eq!(
        actions,
        vec![Action::SegmentRendered(Segment { from: Point::new(10.0, 10.0), to: Point::new(50.0, 10.0) })]
    );
    assert!(!surface.is_empty());
    assert_eq!(surface.pixels().get_pixel(30, 10).0, INK);
}

#[test]
fn segments_follow_mapped_points_in_order() {
    let mut surface = CaptureSurface::new(280, 280);
    let path = [(5.0, 5.0), (20.0, 30.0), (60.0, 45.0), (61.0, 120.0), (200.0, 100.0)];
    let mut actions = surface.on_pointer_down(Point::new(path[0].0, path[0].1));
    for &(x, y) in &path[1..] {
        actions.extend(surface.on_pointer_move(Point::new(x, y)));
    }
    actions.extend(surface.on_pointer_up(Point::new(200.0, 100.0)));

    let expected: Vec<Segment> = path
        .windows(2)
        .map(|w| Segment { from: Point::new(w[0].0, w[0].1), to: Point::new(w[1].0, w[1].1) })
        .collect();
    assert_eq!(segments(&actions), expected);
    assert_eq!(actions.last(), Some(&Action::StrokeEnded));
}

#[test]
fn segments_scale_with_display_ratio() {
    let mut surface = CaptureSurface::new(280, 280).with_bounds(Rect::new(10.0, 10.0, 140.0, 140.0));
    surface.on_pointer_down(Point::new(10.0, 10.0));
    let actions = surface.on_pointer_move(Point::new(80.0, 45.0));
    assert_eq!(
        segments(&actions),
        vec![Segment { from: Point::new(0.0, 0.0), to: Point::new(140.0, 70.0) }]
    );
}

#[test]
fn pointer_up_ends_stroke() {
    let mut surface = CaptureSurface::new(100, 100);
    surface.on_pointer_down(Point::new(10.0, 10.0));
    assert_eq!(surface.on_pointer_up(Point::new(10.0, 10.0)), vec![Action::StrokeEnded]);
    assert!(!surface.is_stroke_active());
}

#[test]
fn leave_ends_stroke_and_later_moves_do_not_extend() {
    let mut surface = CaptureSurface::new(100, 100);
    surface.on_pointer_down(Point::new(10.0, 10.0));
    assert_eq!(surface.on_pointer_leave(Point::new(0.0, 0.0)), vec![Action::StrokeEnded]);
    assert!(surface.on_pointer_move(Point::new(90.0, 90.0)).is_empty());
    assert!(surface.is_empty());
}

#[test]
fn up_while_idle_emits_nothing() {
    let mut surface = CaptureSurface::new(100, 100);
    assert!(surface.on_pointer_up(Point::new(1.0, 1.0)).is_empty());
    assert!(surface.on_pointer_leave(Point::new(1.0, 1.0)).is_empty());
}

#[test]
fn handle_dispatches_by_kind() {
    let mut surface = CaptureSurface::new(100, 100);
    let mut actions = Vec::new();
    for ev in [
        PointerEvent::down(10.0, 10.0),
        PointerEvent::moved(20.0, 20.0),
        PointerEvent::moved(30.0, 20.0),
        PointerEvent::up(30.0, 20.0),
    ] {
        actions.extend(surface.handle(ev));
    }
    assert_eq!(actions.len(), 4);
    assert_eq!(segments(&actions).len(), 2);
    assert!(!surface.is_stroke_active());
}

// =============================================================
// clear / is_empty
// =============================================================

#[test]
fn clear_after_stroke_is_empty() {
    let mut surface = CaptureSurface::new(280, 280);
    draw_line(&mut surface);
    assert!(!surface.is_empty());
    surface.clear();
    assert!(surface.is_empty());
}

#[test]
fn clear_does_not_end_active_stroke() {
    let mut surface = CaptureSurface::new(100, 100);
    surface.on_pointer_down(Point::new(10.0, 10.0));
    surface.clear();
    assert!(surface.is_stroke_active());
    assert_eq!(segments(&surface.on_pointer_move(Point::new(20.0, 20.0))).len(), 1);
}

#[test]
fn stroke_entirely_off_surface_stays_empty() {
    let mut surface = CaptureSurface::new(50, 50);
    surface.on_pointer_down(Point::new(-100.0, -100.0));
    surface.on_pointer_move(Point::new(-80.0, -100.0));
    assert!(surface.is_empty());
}

// =============================================================
// snapshot / import
// =============================================================

#[test]
fn snapshot_is_detached_from_later_strokes() {
    let mut surface = CaptureSurface::new(100, 100);
    let before = surface.snapshot();
    draw_line(&mut surface);
    assert_ne!(&before, surface.pixels());
    assert!(before.pixels().all(|px| px.0 == BACKGROUND));
}

#[test]
fn import_without_file_is_noop() {
    let mut surface = CaptureSurface::new(50, 50);
    draw_line(&mut surface);
    let before = surface.snapshot();
    assert!(!surface.import_image(None).unwrap());
    assert_eq!(surface.pixels(), &before);
}

#[test]
fn import_same_size_reproduces_pixels() {
    let src = RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 4) as u8, (y * 4) as u8, 128, 255]));
    let png = codec::encode_png(&src).unwrap();
    let mut surface = CaptureSurface::new(64, 64);
    assert!(surface.import_image(Some(&png)).unwrap());
    assert_eq!(surface.pixels(), &src);
    assert!(!surface.is_empty());
}

#[test]
fn import_is_scaled_to_surface() {
    let src = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
    let png = codec::encode_png(&src).unwrap();
    let mut surface = CaptureSurface::new(280, 280);
    surface.import_image(Some(&png)).unwrap();
    assert_eq!(surface.pixels().dimensions(), (280, 280));
    assert!(!surface.is_empty());
}

#[test]
fn import_of_blank_image_keeps_surface_empty() {
    let png = codec::encode_png(&RgbaImage::from_pixel(280, 280, Rgba(BACKGROUND))).unwrap();
    let mut surface = CaptureSurface::new(280, 280);
    surface.import_image(Some(&png)).unwrap();
    assert!(surface.is_empty());
}

#[test]
fn corrupt_import_keeps_prior_content() {
    let mut surface = CaptureSurface::new(50, 50);
    draw_line(&mut surface);
    let before = surface.snapshot();
    assert!(surface.import_image(Some(b"\x89PNG broken")).is_err());
    assert_eq!(surface.pixels(), &before);
}
