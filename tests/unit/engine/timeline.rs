use super::*;
use crate::animation::ops::{
    animate, change_value, create, fade_in, fade_in_shift, fade_out, fade_out_shift, lagged,
    move_along_path, move_to, type_letters, write,
};
use crate::foundation::core::UP;
use crate::scene::color::palette;
use crate::scene::element::Element;

fn engine() -> TimelineEngine {
    TimelineEngine::new(
        Fps::new(30, 1).unwrap(),
        Canvas {
            width: 1920,
            height: 1080,
        },
        7,
    )
}

#[test]
fn play_advances_clock_by_run_time() {
    let mut e = engine();
    let t = e.spawn(Element::text("Education", 64.0)).unwrap();
    e.play(Play::one(write(t))).unwrap();
    assert_eq!(e.clock(), FrameIndex(30));
    e.play(Play::one(fade_out(t)).run_time(0.5)).unwrap();
    assert_eq!(e.clock(), FrameIndex(45));
    e.wait(1.0).unwrap();
    assert_eq!(e.clock(), FrameIndex(75));
}

#[test]
fn fade_in_with_shift_slides_into_rest_position() {
    let mut e = engine();
    let t = e
        .spawn(Element::text("Software Developer", 48.0).at(Point::new(0.0, -1.0)))
        .unwrap();
    e.play(Play::one(fade_in_shift(t, UP)).ease(Ease::Linear))
        .unwrap();
    let tl = e.finish().unwrap();
    let el = tl.element(t).unwrap();
    assert_eq!(el.opacity.sample(FrameIndex(0)), 0.0);
    assert_eq!(el.center.sample(FrameIndex(0)), Point::new(0.0, -2.0));
    assert_eq!(el.opacity.sample(FrameIndex(30)), 1.0);
    assert_eq!(el.center.sample(FrameIndex(30)), Point::new(0.0, -1.0));
}

#[test]
fn fade_out_removes_from_stage_and_closes_presence() {
    let mut e = engine();
    let t = e.spawn(Element::text("bye", 36.0)).unwrap();
    e.play(Play::one(write(t))).unwrap();
    assert!(e.stage().is_visible(t));
    e.play(Play::one(fade_out_shift(t, UP))).unwrap();
    assert!(!e.stage().is_visible(t));
    e.wait(1.0).unwrap();

    let tl = e.finish().unwrap();
    let el = tl.element(t).unwrap();
    assert_eq!(el.presence.end, FrameIndex(60));
    assert_eq!(el.opacity.final_value(), 0.0);
    assert_eq!(tl.duration, FrameIndex(90));
}

#[test]
fn animating_a_removed_element_is_an_error() {
    let mut e = engine();
    let t = e.spawn(Element::dot()).unwrap();
    e.play(Play::one(create(t))).unwrap();
    e.play(Play::one(fade_out(t))).unwrap();
    assert!(e.play(Play::one(fade_in(t))).is_err());
}

#[test]
fn unknown_target_is_an_error() {
    let mut e = engine();
    assert!(e.play(Play::one(write(ElementId(42)))).is_err());
}

#[test]
fn change_value_requires_decimal_and_updates_stage() {
    let mut e = engine();
    let text = e.spawn(Element::text("GPA: ", 36.0)).unwrap();
    let num = e.spawn(Element::decimal(0.0, 1, 36.0)).unwrap();
    assert!(e.play(Play::one(change_value(text, 7.9))).is_err());

    e.play(Play::one(change_value(num, 7.9)).run_time(2.0))
        .unwrap();
    assert_eq!(
        e.stage().get(num).unwrap().text_content().as_deref(),
        Some("7.9")
    );
    let tl = e.finish().unwrap();
    let value = &tl.element(num).unwrap().value;
    assert_eq!(value.sample(FrameIndex(0)), 0.0);
    assert!((value.sample(FrameIndex(60)) - 7.9).abs() < 1e-12);
}

#[test]
fn lagged_start_staggers_presence() {
    let mut e = engine();
    let dots: Vec<ElementId> = (0..4)
        .map(|i| {
            e.spawn(Element::dot().at(Point::new(f64::from(i), 0.0)))
                .unwrap()
        })
        .collect();
    e.play(Play::one(lagged(0.5, dots.iter().map(|&d| create(d)))))
        .unwrap();
    let tl = e.finish().unwrap();
    let starts: Vec<u64> = dots
        .iter()
        .map(|&d| tl.element(d).unwrap().presence.start.0)
        .collect();
    assert_eq!(starts[0], 0);
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
    let last = &tl.element(dots[3]).unwrap().progress;
    assert_eq!(last.final_value(), 1.0);
    assert_eq!(last.segments[0].range.end, FrameIndex(30));
}

#[test]
fn move_along_path_runs_between_line_endpoints() {
    let mut e = engine();
    let line = e
        .spawn(Element::line(Point::new(-5.0, -1.0), Point::new(5.0, -1.0)))
        .unwrap();
    let dot = e.spawn(Element::dot()).unwrap();
    assert!(e.play(Play::one(move_along_path(line, dot))).is_err());
    e.play(Play::one(move_along_path(dot, line))).unwrap();
    let end = e.stage().get(dot).unwrap().center;
    assert!((end - Point::new(5.0, -1.0)).hypot() < 1e-9);
}

#[test]
fn move_to_translates_group_as_a_unit() {
    let mut e = engine();
    let a = e.spawn(Element::dot().at(Point::new(-1.0, 0.0))).unwrap();
    let b = e.spawn(Element::dot().at(Point::new(1.0, 0.0))).unwrap();
    let g: Group = [a, b].into_iter().collect();
    e.play(Play::one(move_to(&g, Point::new(0.0, 3.0)))).unwrap();
    assert_eq!(e.stage().get(a).unwrap().center, Point::new(-1.0, 3.0));
    assert_eq!(e.stage().get(b).unwrap().center, Point::new(1.0, 3.0));
}

#[test]
fn there_and_back_transform_returns_to_rest() {
    let mut e = engine();
    let c = e.spawn(Element::circle(1.0).color(palette::GREEN)).unwrap();
    e.play(Play::one(create(c))).unwrap();
    e.play(
        Play::one(animate(c).scale(1.2).color(palette::TEAL).done()).ease(Ease::ThereAndBack),
    )
    .unwrap();
    let rest = e.stage().get(c).unwrap();
    assert_eq!(rest.scale, 1.0);
    assert_eq!(rest.fill, Paint::Solid(palette::GREEN));

    let tl = e.finish().unwrap();
    let el = tl.element(c).unwrap();
    assert!((el.scale.sample(FrameIndex(45)) - 1.2).abs() < 1e-9);
    assert_eq!(el.scale.sample(FrameIndex(60)), 1.0);
}

#[test]
fn fade_transform_drives_opacity_to_zero() {
    let mut e = engine();
    let ripple = e.spawn(Element::circle(0.3)).unwrap();
    e.play(Play::new([
        create(ripple),
        animate(ripple).scale(3.0).fade(1.0).done(),
    ]))
    .unwrap();
    assert_eq!(e.stage().get(ripple).unwrap().opacity, 0.0);
    assert_eq!(e.stage().get(ripple).unwrap().scale, 3.0);
}

#[test]
fn type_letters_marks_write_style() {
    let mut e = engine();
    let name = e.spawn(Element::text("Atilla", 72.0)).unwrap();
    e.play(Play::one(type_letters(name)).run_time(1.5)).unwrap();
    let tl = e.finish().unwrap();
    assert_eq!(
        tl.element(name).unwrap().write_style,
        Some(crate::animation::directive::WriteStyle::LetterByLetter)
    );
}

#[test]
fn clear_removes_instantly_and_is_logged() {
    let mut e = engine();
    let t = e.spawn(Element::text("oops", 36.0)).unwrap();
    let never_shown = e.spawn(Element::dot()).unwrap();
    e.play(Play::one(write(t))).unwrap();
    let g: Group = [t, never_shown].into_iter().collect();
    e.clear(&g).unwrap();
    assert!(!e.stage().is_visible(t));
    let Some(CommandRecord {
        command: Command::Clear { targets },
        ..
    }) = e.commands().last()
    else {
        panic!("clear should be logged");
    };
    assert_eq!(targets, &vec![t]);
    let tl = e.finish().unwrap();
    assert_eq!(tl.element(t).unwrap().presence.end, FrameIndex(30));
    assert!(tl.element(never_shown).is_none());
}

#[test]
fn scene_markers_become_spans_and_tag_elements() {
    let mut e = engine();
    e.begin_scene("intro");
    let t = e.spawn(Element::text("hi", 36.0)).unwrap();
    e.play(Play::one(write(t))).unwrap();
    e.play(Play::one(fade_out(t))).unwrap();
    e.end_scene("intro");
    let tl = e.finish().unwrap();
    assert_eq!(tl.scenes.len(), 1);
    assert_eq!(tl.scenes[0].range.end, FrameIndex(60));
    assert_eq!(tl.element(t).unwrap().scene.as_deref(), Some("intro"));
    assert_eq!(tl.commands_in_scene("intro").count(), 2);
}

#[test]
fn finishing_with_open_scene_is_an_error() {
    let mut e = engine();
    e.begin_scene("intro");
    let t = e.spawn(Element::text("hi", 36.0)).unwrap();
    e.play(Play::one(write(t))).unwrap();
    assert!(e.finish().is_err());
}

#[test]
fn elements_left_on_stage_stay_until_the_end() {
    let mut e = engine();
    let bg = e.spawn(Element::rectangle(10.0, 10.0)).unwrap();
    e.play(Play::one(fade_in(bg))).unwrap();
    e.wait(2.0).unwrap();
    let tl = e.finish().unwrap();
    let el = tl.element(bg).unwrap();
    assert_eq!(el.presence.start, FrameIndex(0));
    assert_eq!(el.presence.end, tl.duration);
}

#[test]
fn move_and_scale_in_one_batch_play_out_together() {
    let mut e = engine();
    let d = e.spawn(Element::dot()).unwrap();
    e.play(Play::one(create(d))).unwrap();
    e.play(
        Play::new([
            move_to(d, Point::new(4.0, 0.0)),
            animate(d).scale(2.0).done(),
        ])
        .ease(Ease::Linear),
    )
    .unwrap();
    assert_eq!(e.stage().get(d).unwrap().center, Point::new(4.0, 0.0));

    let tl = e.finish().unwrap();
    let el = tl.element(d).unwrap();
    let mid = el.center.sample(FrameIndex(45));
    assert!((mid - Point::new(2.0, 0.0)).hypot() < 1e-9, "mid = {mid:?}");
    assert!((el.scale.sample(FrameIndex(45)) - 1.5).abs() < 1e-9);
    assert_eq!(el.center.sample(FrameIndex(60)), Point::new(4.0, 0.0));
    assert_eq!(el.scale.final_value(), 2.0);
}

#[test]
fn fade_in_shift_and_move_to_in_one_batch_compose() {
    let mut e = engine();
    let t = e
        .spawn(Element::text("hello", 36.0).at(Point::new(0.0, -1.0)))
        .unwrap();
    e.play(
        Play::new([fade_in_shift(t, UP), move_to(t, Point::new(3.0, -1.0))]).ease(Ease::Linear),
    )
    .unwrap();
    let tl = e.finish().unwrap();
    let center = &tl.element(t).unwrap().center;
    assert_eq!(center.sample(FrameIndex(0)), Point::new(0.0, -2.0));
    assert!((center.sample(FrameIndex(15)) - Point::new(1.5, -1.5)).hypot() < 1e-9);
    assert!((center.final_value() - Point::new(3.0, -1.0)).hypot() < 1e-9);
}

#[test]
fn conflicting_opacity_targets_in_one_batch_are_rejected() {
    let mut e = engine();
    let d = e.spawn(Element::dot()).unwrap();
    let err = e
        .play(Play::new([fade_in(d), animate(d).fade(0.5).done()]))
        .unwrap_err();
    assert!(err.to_string().contains("overlaps"), "{err}");
}
