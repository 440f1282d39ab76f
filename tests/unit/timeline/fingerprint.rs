use super::*;
use crate::animation::directive::Play;
use crate::animation::ops::{fade_in, fade_out};
use crate::engine::{Engine, timeline::TimelineEngine};
use crate::foundation::core::{Canvas, Fps, Point};
use crate::scene::element::Element;

fn timeline(x: f64, seed: u64) -> Timeline {
    let mut e = TimelineEngine::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 640,
            height: 360,
        },
        seed,
    );
    let dot = e.spawn(Element::dot().at(Point::new(x, 0.0))).unwrap();
    e.play(Play::one(fade_in(dot))).unwrap();
    e.play(Play::one(fade_out(dot))).unwrap();
    e.finish().unwrap()
}

#[test]
fn identical_timelines_share_a_fingerprint() {
    let a = fingerprint_timeline(&timeline(1.0, 3)).unwrap();
    let b = fingerprint_timeline(&timeline(1.0, 3)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string().len(), 32);
}

#[test]
fn any_change_moves_the_fingerprint() {
    let base = fingerprint_timeline(&timeline(1.0, 3)).unwrap();
    assert_ne!(base, fingerprint_timeline(&timeline(1.5, 3)).unwrap());
    assert_ne!(base, fingerprint_timeline(&timeline(1.0, 4)).unwrap());
}
