use super::*;
use crate::{
    chart::model::{EntityRecord, SeriesDef},
    foundation::color::Color,
    layout::rows::RowPhase,
    layout::segments::SegmentGeom,
};

fn medals() -> SeriesSet {
    SeriesSet::single(vec![
        SeriesDef::new("gold", Color::from_rgb8(0xd4, 0xaf, 0x37), "Gold"),
        SeriesDef::new("silver", Color::from_rgb8(0xc0, 0xc0, 0xc0), "Silver").with_opacity(0.8),
        SeriesDef::new("bronze", Color::from_rgb8(0xcd, 0x7f, 0x32), "Bronze"),
    ])
}

fn rec(key: &str, g: f64, s: f64, b: f64) -> EntityRecord {
    EntityRecord::new(key)
        .with("gold", g)
        .with("silver", s)
        .with("bronze", b)
}

fn engine() -> RaceLayout {
    RaceLayout::new(ChartConfig::default(), medals()).unwrap()
}

#[test]
fn invalid_domain_fails_at_construction() {
    let cfg = ChartConfig {
        domain_max: 0.0,
        ..ChartConfig::default()
    };
    let err = RaceLayout::new(cfg, medals()).unwrap_err();
    assert!(matches!(err, RaceError::InvalidDomain(_)));

    let cfg = ChartConfig {
        display_divisor: 0.0,
        ..ChartConfig::default()
    };
    assert!(matches!(
        RaceLayout::new(cfg, medals()).unwrap_err(),
        RaceError::InvalidDomain(_)
    ));
}

#[test]
fn duplicate_keys_in_current_frame_are_fatal() {
    let cur = Frame::new(vec![rec("USA", 1.0, 0.0, 0.0), rec("USA", 2.0, 0.0, 0.0)]);
    let err = engine().layout(None, &cur).unwrap_err();
    assert!(matches!(err, RaceError::DuplicateKey { .. }));
}

#[test]
fn reordering_changes_rows_but_not_segments() {
    let e = engine();
    let prev = Frame::new(vec![
        rec("GBR", 100.0, 80.0, 60.0),
        rec("USA", 90.0, 85.0, 70.0),
        rec("FRA", 50.0, 40.0, 30.0),
    ]);
    let cur_a = Frame::new(vec![
        rec("USA", 120.0, 90.0, 75.0),
        rec("GBR", 110.0, 85.0, 60.0),
        rec("FRA", 55.0, 40.0, 33.0),
    ]);
    let mut cur_b = cur_a.clone();
    cur_b.entities.reverse();

    let a = e.layout(Some(&prev), &cur_a).unwrap();
    let b = e.layout(Some(&prev), &cur_b).unwrap();

    for key in ["USA", "GBR", "FRA"] {
        let sa: Vec<_> = a.segments_for(key).map(|s| s.geom).collect();
        let sb: Vec<_> = b.segments_for(key).map(|s| s.geom).collect();
        assert_eq!(sa, sb, "{key}");
        assert_eq!(
            a.row_for(key).unwrap().y.from,
            b.row_for(key).unwrap().y.from
        );
    }
    assert_ne!(a.row_for("USA").unwrap().y.to, b.row_for("USA").unwrap().y.to);
}

#[test]
fn previous_order_does_not_leak_into_segments() {
    let e = engine();
    let prev_a = Frame::new(vec![rec("USA", 10.0, 0.0, 0.0), rec("GBR", 20.0, 0.0, 0.0)]);
    let prev_b = Frame::new(vec![rec("GBR", 20.0, 0.0, 0.0), rec("USA", 10.0, 0.0, 0.0)]);
    let cur = Frame::new(vec![rec("USA", 12.0, 0.0, 0.0), rec("GBR", 21.0, 0.0, 0.0)]);

    let a = e.layout(Some(&prev_a), &cur).unwrap();
    let b = e.layout(Some(&prev_b), &cur).unwrap();
    assert_eq!(a.segments, b.segments);
    let usa_gold = a.segments_for("USA").next().unwrap();
    assert_eq!(usa_gold.geom.from.width, e.scale().scale(10.0));
}

#[test]
fn entrant_and_exit_are_reported() {
    let e = engine();
    let prev = Frame::new(vec![rec("EUN", 45.0, 38.0, 29.0), rec("USA", 37.0, 34.0, 37.0)]);
    let cur = Frame::new(vec![
        rec("USA", 44.0, 32.0, 25.0),
        rec("ZZX", 0.0, 0.0, 0.0),
    ]);
    let out = e.layout(Some(&prev), &cur).unwrap();

    let zzx = out.row_for("ZZX").unwrap();
    assert_eq!(zzx.phase, RowPhase::Enter);
    assert_eq!(zzx.y.from, e.config().offscreen_y);
    for s in out.segments_for("ZZX") {
        assert_eq!(s.geom.from, SegmentGeom::ZERO);
        assert_eq!(s.geom.to, SegmentGeom::ZERO);
        assert!(s.label.is_none());
    }

    assert_eq!(out.exits.len(), 1);
    assert_eq!(out.exits[0].key.as_str(), "EUN");
    assert_eq!(out.exit_segments.len(), 3);
    assert!(out.exit_segments.iter().all(|s| s.geom.is_static()));
}

#[test]
fn sequence_pairs_each_frame_with_its_predecessor() {
    let e = engine();
    let frames = vec![
        Frame::labeled("1896", vec![rec("USA", 11.0, 7.0, 2.0)]),
        Frame::labeled("1900", vec![rec("FRA", 26.0, 41.0, 34.0), rec("USA", 30.0, 21.0, 16.0)]),
        Frame::labeled("1904", vec![rec("USA", 108.0, 74.0, 57.0)]),
    ];
    let out = e.layout_sequence(&frames).unwrap();
    assert_eq!(out.len(), 3);

    assert!(out[0].rows.iter().all(|r| r.phase == RowPhase::Enter));
    assert!(out[0].exits.is_empty());

    let usa = out[1].row_for("USA").unwrap();
    assert_eq!(usa.phase, RowPhase::Update);
    assert_eq!(usa.from_rank, Some(0));
    assert_eq!(usa.to_rank, Some(1));
    let gold = out[1].segments_for("USA").next().unwrap();
    assert_eq!(gold.geom.from.width, e.scale().scale(11.0));
    assert_eq!(gold.geom.to.width, e.scale().scale(30.0));

    assert_eq!(out[2].label.as_deref(), Some("1904"));
    assert_eq!(out[2].exits.len(), 1);
    assert_eq!(out[2].exits[0].key.as_str(), "FRA");
}

#[test]
fn draw_list_orders_legend_rows_segments_labels() {
    let e = engine();
    let legend = e.legend();
    let cur = Frame::new(vec![rec("USA", 1000.0, 10.0, 0.0)]);
    let out = e.layout(None, &cur).unwrap();
    let list = out.draw_list(&legend);

    assert!(matches!(list[0], DrawDescriptor::Legend(_)));
    assert!(matches!(list[3], DrawDescriptor::Row(_)));
    assert!(matches!(list[4], DrawDescriptor::Segment(_)));
    // Only the 1000-gold segment is wide enough for a label.
    assert!(matches!(list.last(), Some(DrawDescriptor::Label { series_index: 0, .. })));
    assert_eq!(list.len(), 3 + 1 + 3 + 1);

    let json = serde_json::to_value(list[4]).unwrap();
    assert_eq!(json["kind"], "segment");
    assert_eq!(json["from"]["width"], 0.0);
}
