use super::*;
use crate::animation::ops::{create, write};
use crate::engine::timeline::TimelineEngine;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::scene::color::palette;
use crate::timeline::model::Command;

fn engine() -> TimelineEngine {
    TimelineEngine::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
        0,
    )
}

#[test]
fn finish_fades_out_everything_still_visible() {
    let mut e = engine();
    let mut scope = SceneScope::open(&mut e, "demo");
    let t = scope.title("Demo", 64.0, &[palette::TEAL, palette::PURPLE]).unwrap();
    let d = scope.spawn(Element::dot()).unwrap();
    scope.play(Play::new([write(t), create(d)])).unwrap();
    scope.finish().unwrap();

    assert!(!e.stage().is_visible(t));
    assert!(!e.stage().is_visible(d));
    let tl = e.finish().unwrap();
    let span = tl.scene("demo").unwrap();
    assert_eq!(span.range.end, FrameIndex(60));
    assert_eq!(tl.element(t).unwrap().presence.end, FrameIndex(60));
    assert_eq!(tl.element(t).unwrap().opacity.final_value(), 0.0);
}

#[test]
fn title_is_labelled_and_pinned_to_the_top() {
    let mut e = engine();
    let mut scope = SceneScope::open(&mut e, "demo");
    let t = scope.title("Education", 64.0, &[palette::TEAL]).unwrap();
    let el = scope.stage().get(t).unwrap();
    assert_eq!(el.label.as_deref(), Some(TITLE_LABEL));
    let top = scope.stage().frame_size().rect().max_y();
    assert!((el.bounds().max_y() - (top - EDGE_BUFF)).abs() < 1e-9);
    scope.finish().unwrap();
}

#[test]
fn finish_without_visible_elements_plays_nothing() {
    let mut e = engine();
    let scope = SceneScope::open(&mut e, "empty");
    scope.finish().unwrap();
    assert_eq!(e.clock(), FrameIndex(0));
    assert!(e.commands().is_empty());
}

#[test]
fn dropping_an_unfinished_scope_clears_its_elements() {
    let mut e = engine();
    let d;
    {
        let mut scope = SceneScope::open(&mut e, "broken");
        d = scope.spawn(Element::dot()).unwrap();
        scope.play(Play::one(create(d))).unwrap();
        let missing = ElementId(999);
        assert!(scope.play(Play::one(create(missing))).is_err());
    }
    assert!(!e.stage().is_visible(d));
    assert!(matches!(
        e.commands().last().map(|c| &c.command),
        Some(Command::Clear { targets }) if targets == &vec![d]
    ));
    let tl = e.finish().unwrap();
    assert_eq!(tl.element(d).unwrap().presence.end, FrameIndex(30));
    assert!(tl.scene("broken").is_some());
}

#[test]
fn build_takes_ownership_of_factory_spawns() {
    let mut e = engine();
    let mut scope = SceneScope::open(&mut e, "demo");
    let first = scope.spawn(Element::dot()).unwrap();
    let made = scope
        .build(|stage| {
            let a = stage.spawn(Element::dot())?;
            let b = stage.spawn(Element::circle(1.0))?;
            Ok(Group::from_iter([a, b]))
        })
        .unwrap();
    assert_eq!(scope.owned().len(), 3);
    assert!(scope.owned().contains(first));
    assert!(made.iter().all(|id| scope.owned().contains(id)));
    scope.finish().unwrap();
}

#[test]
fn duplicates_are_owned_too() {
    let mut e = engine();
    let mut scope = SceneScope::open(&mut e, "demo");
    let a = scope.spawn(Element::circle(1.0)).unwrap();
    let b = scope.duplicate(a).unwrap();
    assert_ne!(a, b);
    assert!(scope.owned().contains(b));
    scope.finish().unwrap();
}
