use super::*;

const ALL: [Ease; 11] = [
    Ease::Linear,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(Ease::EaseInOut.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseInOut.apply(7.0), 1.0);
}

#[test]
fn diagonal_bezier_is_linear() {
    let e = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    for t in [0.1, 0.3, 0.5, 0.9] {
        assert!((e.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    let e = Ease::EaseInOut;
    assert!((e.apply(0.5) - 0.5).abs() < 1e-5);
    assert!((e.apply(0.2) + e.apply(0.8) - 1.0).abs() < 1e-5);
}

#[test]
fn validate_rejects_x_outside_unit_interval() {
    let bad = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(bad.validate().is_err());
    assert!(Ease::EaseIn.validate().is_ok());
}
