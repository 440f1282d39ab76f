use super::*;

fn seg(start: u64, end: u64, from: f64, to: f64, ease: Ease) -> Segment<f64> {
    Segment {
        range: FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap(),
        from,
        to,
        ease,
    }
}

#[test]
fn holds_initial_before_first_segment() {
    let mut track = Track::constant(2.0);
    track.push(seg(10, 20, 0.0, 1.0, Ease::Linear)).unwrap();
    assert_eq!(track.sample(FrameIndex(0)), 2.0);
    assert_eq!(track.sample(FrameIndex(9)), 2.0);
}

#[test]
fn interpolates_inside_segment_and_holds_after() {
    let mut track = Track::constant(0.0);
    track.push(seg(0, 10, 0.0, 10.0, Ease::Linear)).unwrap();
    assert_eq!(track.sample(FrameIndex(5)), 5.0);
    assert_eq!(track.sample(FrameIndex(10)), 10.0);
    assert_eq!(track.sample(FrameIndex(500)), 10.0);
    assert_eq!(track.final_value(), 10.0);
}

#[test]
fn round_trip_segment_ends_at_its_start_value() {
    let mut track = Track::constant(1.0);
    track.push(seg(0, 10, 1.0, 1.2, Ease::ThereAndBack)).unwrap();
    assert!((track.sample(FrameIndex(5)) - 1.2).abs() < 1e-9);
    assert_eq!(track.sample(FrameIndex(10)), 1.0);
    assert_eq!(track.final_value(), 1.0);
}

#[test]
fn later_segment_takes_over() {
    let mut track = Track::constant(0.0);
    track.push(seg(0, 10, 0.0, 1.0, Ease::Linear)).unwrap();
    track.push(seg(20, 30, 1.0, 0.0, Ease::Linear)).unwrap();
    assert_eq!(track.sample(FrameIndex(15)), 1.0);
    assert_eq!(track.sample(FrameIndex(25)), 0.5);
    assert_eq!(track.final_value(), 0.0);
}

#[test]
fn out_of_order_push_is_rejected() {
    let mut track = Track::constant(0.0);
    track.push(seg(10, 20, 0.0, 1.0, Ease::Linear)).unwrap();
    assert!(track.push(seg(5, 8, 0.0, 1.0, Ease::Linear)).is_err());
}

#[test]
fn paint_lerp_blends_gradient_into_solid() {
    let a = Paint::Gradient(vec![Color::rgba(1.0, 0.0, 0.0, 1.0), Color::rgba(0.0, 0.0, 1.0, 1.0)]);
    let b = Paint::Solid(Color::rgba(0.0, 1.0, 0.0, 1.0));
    let Paint::Gradient(stops) = Paint::lerp(&a, &b, 1.0) else {
        panic!("expected gradient");
    };
    assert_eq!(stops.len(), 2);
    assert!(stops.iter().all(|c| (c.g - 1.0).abs() < 1e-12 && c.r.abs() < 1e-12));
}

#[test]
fn overlapping_push_is_rejected() {
    let mut track = Track::constant(0.0);
    track.push(seg(0, 10, 0.0, 1.0, Ease::Linear)).unwrap();
    assert!(track.push(seg(0, 10, 1.0, 2.0, Ease::Linear)).is_err());
    assert!(track.push(seg(5, 15, 1.0, 2.0, Ease::Linear)).is_err());
    track.push(seg(10, 20, 1.0, 2.0, Ease::Linear)).unwrap();
}

#[test]
fn composed_push_adds_changes_over_the_same_frames() {
    let mut track = Track::constant(1.0);
    track.push_composed(seg(0, 10, 1.0, 3.0, Ease::Linear)).unwrap();
    track.push_composed(seg(0, 10, 3.0, 4.0, Ease::Linear)).unwrap();
    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.sample(FrameIndex(5)), 2.5);
    assert_eq!(track.final_value(), 4.0);
}

#[test]
fn composed_round_trip_segments_still_return_to_rest() {
    let mut track = Track::constant(1.0);
    track.push_composed(seg(0, 10, 1.0, 1.2, Ease::ThereAndBack)).unwrap();
    let rest = track.final_value();
    track.push_composed(seg(0, 10, rest, 1.5, Ease::ThereAndBack)).unwrap();
    assert!((track.sample(FrameIndex(5)) - 1.7).abs() < 1e-9);
    assert_eq!(track.final_value(), 1.0);
}

#[test]
fn composed_push_with_a_different_window_falls_back_to_push() {
    let mut track = Track::constant(0.0);
    track.push_composed(seg(0, 10, 0.0, 1.0, Ease::Linear)).unwrap();
    assert!(track.push_composed(seg(5, 10, 1.0, 2.0, Ease::Linear)).is_err());
    track.push_composed(seg(10, 20, 1.0, 2.0, Ease::Linear)).unwrap();
    assert_eq!(track.segments.len(), 2);
}
