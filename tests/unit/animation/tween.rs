use super::*;

#[test]
fn transition_interpolates_and_clamps() {
    let t = Transition::new(10.0, 20.0);
    assert_eq!(t.at(0.0), 10.0);
    assert_eq!(t.at(0.5), 15.0);
    assert_eq!(t.at(1.0), 20.0);
    assert_eq!(t.at(2.0), 20.0);
    assert_eq!(t.at(-1.0), 10.0);
}

#[test]
fn rect_lerp_moves_all_edges() {
    let t = Transition::new(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(t.at(0.5), Rect::new(5.0, 10.0, 20.0, 25.0));
}

#[test]
fn hold_is_static() {
    let t = Transition::hold(Point::new(1.0, 2.0));
    assert!(t.is_static());
    assert_eq!(t.at(0.7), Point::new(1.0, 2.0));
}

#[test]
fn timing_defaults_to_one_second_ease_in_out() {
    let timing = Timing::default();
    assert_eq!(timing.duration_secs, 1.0);
    assert_eq!(timing.ease, Ease::EaseInOut);
    assert_eq!(timing.progress_at(0.0), 0.0);
    assert_eq!(timing.progress_at(1.0), 1.0);
    assert_eq!(timing.progress_at(5.0), 1.0);
}

#[test]
fn timing_follows_frame_clock() {
    let timing = Timing {
        duration_secs: 2.0,
        ease: Ease::Linear,
    };
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(timing.frame_count(fps), 60);
    assert!((timing.progress_at_frame(15, fps) - 0.25).abs() < 1e-12);
}

#[test]
fn zero_duration_jumps_to_end() {
    let timing = Timing {
        duration_secs: 0.0,
        ease: Ease::Linear,
    };
    assert_eq!(timing.progress_at(0.0), 1.0);
    assert!(timing.validate().is_ok());
}

#[test]
fn negative_duration_is_rejected() {
    let timing = Timing {
        duration_secs: -1.0,
        ease: Ease::Linear,
    };
    assert!(timing.validate().is_err());
}
