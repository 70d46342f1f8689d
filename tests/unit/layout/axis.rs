use super::*;

#[test]
fn default_axis_matches_medal_table_ticks() {
    let cfg = ChartConfig::default();
    let scale = cfg.scale().unwrap();
    let ticks = build_axis(&scale, &cfg).unwrap();

    let texts: Vec<&str> = ticks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "0", "250", "500", "750", "1000", "1250", "1500", "1750", "2000", "2250", "2500"
        ]
    );
    assert!(!ticks[0].gridline);
    assert!(ticks[1..].iter().all(|t| t.gridline));
    assert_eq!(ticks[0].x, cfg.bar_origin_x);
    assert!((ticks[10].x - (cfg.bar_origin_x + 2500.0 / 6.0)).abs() < 1e-9);
}

#[test]
fn invalid_tick_step_is_reported() {
    let cfg = ChartConfig {
        tick_step: -1.0,
        ..ChartConfig::default()
    };
    let scale = cfg.scale().unwrap();
    assert!(build_axis(&scale, &cfg).is_err());
}

#[test]
fn oversized_tick_count_is_rejected_not_allocated() {
    let cfg = ChartConfig {
        domain_max: 1e20,
        tick_step: 1.0,
        ..ChartConfig::default()
    };
    let scale = LinearScale::new(cfg.domain_max, cfg.range_max).unwrap();
    assert!(matches!(
        build_axis(&scale, &cfg).unwrap_err(),
        crate::foundation::error::RaceError::Validation(_)
    ));
}
