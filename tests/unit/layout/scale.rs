use super::*;

#[test]
fn zero_maps_to_zero() {
    let s = LinearScale::new(2500.0, 100.0).unwrap();
    assert_eq!(s.scale(0.0), 0.0);
    assert_eq!(s.scale(2500.0), 100.0);
    assert_eq!(s.scale(1250.0), 50.0);
}

#[test]
fn monotonic_over_non_negative_inputs() {
    let s = LinearScale::new(37.0, 411.0).unwrap();
    let mut prev = s.scale(0.0);
    for i in 1..500 {
        let cur = s.scale(i as f64 * 0.37);
        assert!(cur >= prev);
        prev = cur;
    }
}

#[test]
fn invert_undoes_scale() {
    let s = LinearScale::new(2500.0, 2500.0 / 6.0).unwrap();
    for v in [0.0, 12.0, 250.0, 2400.0] {
        assert!((s.invert(s.scale(v)) - v).abs() < 1e-9);
    }
}

#[test]
fn non_positive_or_non_finite_bounds_are_invalid_domain() {
    for (d, r) in [
        (0.0, 100.0),
        (-1.0, 100.0),
        (100.0, 0.0),
        (100.0, -5.0),
        (f64::NAN, 100.0),
        (100.0, f64::INFINITY),
    ] {
        let err = LinearScale::new(d, r).unwrap_err();
        assert!(matches!(err, RaceError::InvalidDomain(_)), "{d} {r}");
    }
}

#[test]
fn ticks_cover_domain_inclusive() {
    let s = LinearScale::new(2500.0, 100.0).unwrap();
    let ticks = s.ticks(250.0).unwrap();
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks.last(), Some(&2500.0));
    assert!(s.ticks(0.0).is_err());
}

#[test]
fn ticks_are_capped() {
    let s = LinearScale::new(MAX_TICKS as f64, 1.0).unwrap();
    assert_eq!(s.ticks(1.0).unwrap().len(), MAX_TICKS + 1);
    assert!(s.ticks(0.5).is_err());
}
