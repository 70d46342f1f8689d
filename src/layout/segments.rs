use crate::{
    animation::tween::{Lerp, Transition, Tween},
    chart::model::{ChartConfig, EntityRecord, SeriesDef, SeriesGroup, SeriesSet},
    foundation::color::Color,
    foundation::core::EntityKey,
    layout::matcher::Match,
    layout::scale::LinearScale,
};

/// Horizontal placement of one segment, in pixels relative to the bar origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentGeom {
    /// Left edge (scaled sum of the series stacked before this one).
    pub offset: f64,
    /// Scaled value of this series.
    pub width: f64,
}

impl SegmentGeom {
    /// Zero-width segment at the bar origin.
    pub const ZERO: Self = Self {
        offset: 0.0,
        width: 0.0,
    };

    /// Right edge.
    pub fn end(&self) -> f64 {
        self.offset + self.width
    }
}

impl Lerp for SegmentGeom {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            offset: f64::lerp(&a.offset, &b.offset, t),
            width: f64::lerp(&a.width, &b.width, t),
        }
    }
}

/// Value label attached to a wide enough segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SegmentLabel {
    /// Raw (unscaled) value as displayed.
    pub text: String,
    /// Raw value.
    pub value: f64,
    /// Label x relative to the bar origin.
    pub x: Transition<f64>,
}

/// One series' share of one entity's bar, with both animation endpoints.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BarSegment {
    /// Entity the segment belongs to.
    pub key: EntityKey,
    /// Bar (series group) index within the entity row.
    pub group: usize,
    /// Stack position within the bar.
    pub series_index: usize,
    /// Source field name.
    pub field: String,
    /// Fill color.
    pub color: Color,
    /// Opacity hint.
    pub opacity: f64,
    /// Start and end geometry.
    #[serde(flatten)]
    pub geom: Transition<SegmentGeom>,
    /// Present only when the end width reaches the label threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<SegmentLabel>,
}

/// A [`BarSegment`] resolved at one progress value.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSegment {
    /// Entity the segment belongs to.
    pub key: EntityKey,
    /// Bar index within the row.
    pub group: usize,
    /// Stack position within the bar.
    pub series_index: usize,
    /// Fill color.
    pub color: Color,
    /// Opacity hint.
    pub opacity: f64,
    /// Interpolated geometry.
    pub geom: SegmentGeom,
    /// Label text and x, when labeled.
    pub label: Option<(String, f64)>,
}

impl Tween for BarSegment {
    type Output = ResolvedSegment;

    fn at(&self, progress: f64) -> ResolvedSegment {
        ResolvedSegment {
            key: self.key.clone(),
            group: self.group,
            series_index: self.series_index,
            color: self.color,
            opacity: self.opacity,
            geom: self.geom.at(progress),
            label: self
                .label
                .as_ref()
                .map(|l| (l.text.clone(), l.x.at(progress))),
        }
    }
}

/// Stacked geometry of `group` for `record`; an absent record stacks as all zeros.
pub fn stack_geometry(
    record: Option<&EntityRecord>,
    group: &SeriesGroup,
    scale: &LinearScale,
) -> Vec<SegmentGeom> {
    let Some(record) = record else {
        return vec![SegmentGeom::ZERO; group.0.len()];
    };
    let mut sum = 0.0;
    group
        .0
        .iter()
        .map(|def| {
            let value = record.value(&def.field);
            let geom = SegmentGeom {
                offset: scale.scale(sum),
                width: scale.scale(value),
            };
            sum += value;
            geom
        })
        .collect()
}

/// Segments for one entity of the current frame, animating from its matched previous state.
pub fn build_segments(
    record: &EntityRecord,
    previous: Match<'_>,
    series: &SeriesSet,
    scale: &LinearScale,
    config: &ChartConfig,
) -> Vec<BarSegment> {
    let mut out = Vec::with_capacity(series.iter_flat().count());
    for (group_idx, group) in series.groups().iter().enumerate() {
        let to = stack_geometry(Some(record), group, scale);
        let from = stack_geometry(previous.record(), group, scale);
        for (series_idx, def) in group.0.iter().enumerate() {
            out.push(make_segment(
                record,
                def,
                group_idx,
                series_idx,
                Transition::new(from[series_idx], to[series_idx]),
                config,
            ));
        }
    }
    out
}

/// Segments for an entity leaving the chart: geometry is held at its last state.
pub fn hold_segments(
    record: &EntityRecord,
    series: &SeriesSet,
    scale: &LinearScale,
    config: &ChartConfig,
) -> Vec<BarSegment> {
    let mut out = Vec::with_capacity(series.iter_flat().count());
    for (group_idx, group) in series.groups().iter().enumerate() {
        let held = stack_geometry(Some(record), group, scale);
        for (series_idx, def) in group.0.iter().enumerate() {
            out.push(make_segment(
                record,
                def,
                group_idx,
                series_idx,
                Transition::hold(held[series_idx]),
                config,
            ));
        }
    }
    out
}

fn make_segment(
    record: &EntityRecord,
    def: &SeriesDef,
    group: usize,
    series_index: usize,
    geom: Transition<SegmentGeom>,
    config: &ChartConfig,
) -> BarSegment {
    let label = (geom.to.width >= config.label_width_threshold).then(|| {
        let value = record.value(&def.field);
        SegmentLabel {
            text: format_value(value),
            value,
            x: Transition::new(
                geom.from.offset + config.label_inset,
                geom.to.offset + config.label_inset,
            ),
        }
    });
    BarSegment {
        key: record.key.clone(),
        group,
        series_index,
        field: def.field.clone(),
        color: def.color,
        opacity: def.opacity.unwrap_or(config.default_opacity),
        geom,
        label,
    }
}

/// Integral values print without a fractional part.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/segments.rs"]
mod tests;
