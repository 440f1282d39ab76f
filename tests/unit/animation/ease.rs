use super::*;

const FORWARD: [Ease; 10] = [
    Ease::Linear,
    Ease::Smooth,
    Ease::RushInto,
    Ease::RushFrom,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in FORWARD {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn monotonic_and_bounded() {
    for ease in FORWARD {
        let mut prev = ease.apply(0.0);
        for i in 1..=200 {
            let v = ease.apply(f64::from(i) / 200.0);
            assert!(v >= prev - 1e-12, "{ease:?} decreased at step {i}");
            assert!((0.0..=1.0 + 1e-12).contains(&v), "{ease:?} out of bounds");
            prev = v;
        }
    }
}

#[test]
fn there_and_back_returns_to_start() {
    let e = Ease::ThereAndBack;
    assert!(e.is_round_trip());
    assert_eq!(e.apply(0.0), 0.0);
    assert!((e.apply(0.5) - 1.0).abs() < 1e-12);
    assert_eq!(e.apply(1.0), 0.0);
    assert!((e.apply(0.25) - e.apply(0.75)).abs() < 1e-12);
}

#[test]
fn smooth_is_symmetric_around_midpoint() {
    let e = Ease::Smooth;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
    assert!((e.apply(0.2) + e.apply(0.8) - 1.0).abs() < 1e-9);
}

#[test]
fn default_is_smooth() {
    assert_eq!(Ease::default(), Ease::Smooth);
}
