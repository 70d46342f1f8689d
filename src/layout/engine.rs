use crate::{
    chart::model::{ChartConfig, ChartSpec, Frame, SeriesSet},
    foundation::core::EntityKey,
    foundation::error::{RaceError, RaceResult},
    layout::{
        axis::{AxisTick, build_axis},
        legend::{LegendEntry, build_legend},
        matcher::PreviousIndex,
        rows::{RowMotion, RowPhase, current_rows, exit_rows},
        scale::LinearScale,
        segments::{BarSegment, SegmentLabel, build_segments, hold_segments},
    },
};

/// Everything needed to animate from one frame to the next.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameLayout {
    /// Label of the current frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// One row per current entity, in current rank order.
    pub rows: Vec<RowMotion>,
    /// Segments of current entities, row by row, group by group, left to right.
    pub segments: Vec<BarSegment>,
    /// Rows of entities that left the chart.
    pub exits: Vec<RowMotion>,
    /// Last segments of exiting entities, held in place while their row slides out.
    pub exit_segments: Vec<BarSegment>,
}

/// Flat, ordered view over a [`FrameLayout`] plus the chart legend.
#[derive(Clone, Copy, Debug, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawDescriptor<'a> {
    /// Legend glyph and text.
    Legend(&'a LegendEntry),
    /// Entity row motion (enter, update or exit).
    Row(&'a RowMotion),
    /// Stacked bar segment.
    Segment(&'a BarSegment),
    /// Value label of a segment.
    Label {
        /// Owning entity.
        key: &'a EntityKey,
        /// Bar index within the row.
        group: usize,
        /// Stack position within the bar.
        series_index: usize,
        /// Label text and position.
        label: &'a SegmentLabel,
    },
}

impl FrameLayout {
    /// Segments belonging to `key`, current entities first, then exiting ones.
    pub fn segments_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a BarSegment> + 'a {
        self.segments
            .iter()
            .chain(self.exit_segments.iter())
            .filter(move |s| s.key.as_str() == key)
    }

    /// Row of `key`, whether present or exiting.
    pub fn row_for(&self, key: &str) -> Option<&RowMotion> {
        self.rows
            .iter()
            .chain(self.exits.iter())
            .find(|r| r.key.as_str() == key)
    }

    /// Draw order: legend, rows (exits last), segments, labels.
    pub fn draw_list<'a>(&'a self, legend: &'a [LegendEntry]) -> Vec<DrawDescriptor<'a>> {
        let bars = || self.segments.iter().chain(self.exit_segments.iter());
        let mut out = Vec::with_capacity(
            legend.len() + self.rows.len() + self.exits.len() + 2 * bars().count(),
        );
        out.extend(legend.iter().map(DrawDescriptor::Legend));
        out.extend(self.rows.iter().chain(self.exits.iter()).map(DrawDescriptor::Row));
        out.extend(bars().map(DrawDescriptor::Segment));
        out.extend(bars().filter_map(|s| {
            s.label.as_ref().map(|label| DrawDescriptor::Label {
                key: &s.key,
                group: s.group,
                series_index: s.series_index,
                label,
            })
        }));
        out
    }
}

/// Racing bar layout engine.
///
/// Holds the immutable chart configuration and series; every [`RaceLayout::layout`] call is a
/// pure function of `(previous, current)`.
#[derive(Clone, Debug)]
pub struct RaceLayout {
    config: ChartConfig,
    series: SeriesSet,
    scale: LinearScale,
}

impl RaceLayout {
    /// Validate `config` and `series` and build the engine.
    pub fn new(config: ChartConfig, series: SeriesSet) -> RaceResult<Self> {
        config.validate()?;
        series.validate()?;
        let scale = config.scale()?;
        Ok(Self {
            config,
            series,
            scale,
        })
    }

    /// Engine for a loaded chart document.
    pub fn from_spec(spec: &ChartSpec) -> RaceResult<Self> {
        Self::new(spec.config.clone(), spec.series.clone())
    }

    /// Geometry options.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Series layout.
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    /// Value-to-pixel scale derived from the config.
    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    /// Legend entries; entity-independent, so computed once per chart.
    pub fn legend(&self) -> Vec<LegendEntry> {
        build_legend(&self.series, &self.config)
    }

    /// Axis ticks; entity-independent like the legend.
    pub fn axis(&self) -> RaceResult<Vec<AxisTick>> {
        build_axis(&self.scale, &self.config)
    }

    /// Layout of the transition from `previous` (absent on the first frame) to `current`.
    #[tracing::instrument(skip(self, previous, current), fields(entities = current.len()))]
    pub fn layout(&self, previous: Option<&Frame>, current: &Frame) -> RaceResult<FrameLayout> {
        current.validate()?;
        let index = PreviousIndex::build(previous)?;

        let rows = current_rows(current, &index, &self.config);
        let mut segments = Vec::with_capacity(current.len() * self.series.iter_flat().count());
        for record in &current.entities {
            segments.extend(build_segments(
                record,
                index.lookup(record.key.as_str()),
                &self.series,
                &self.scale,
                &self.config,
            ));
        }

        let exits = exit_rows(previous, current, &self.config);
        let mut exit_segments = Vec::new();
        for row in &exits {
            let record = index.lookup(row.key.as_str()).record().ok_or_else(|| {
                RaceError::validation(format!("exiting entity \"{}\" not indexed", row.key))
            })?;
            exit_segments.extend(hold_segments(
                record,
                &self.series,
                &self.scale,
                &self.config,
            ));
        }

        tracing::debug!(
            rows = rows.len(),
            entrants = rows
                .iter()
                .filter(|r| r.phase == RowPhase::Enter)
                .count(),
            exits = exits.len(),
            matched = index.len(),
            segments = segments.len(),
            "frame laid out"
        );

        Ok(FrameLayout {
            label: current.label.clone(),
            rows,
            segments,
            exits,
            exit_segments,
        })
    }

    /// Lay out an in-memory frame sequence, pairing each frame with its predecessor.
    #[tracing::instrument(skip(self, frames), fields(frames = frames.len()))]
    pub fn layout_sequence(&self, frames: &[Frame]) -> RaceResult<Vec<FrameLayout>> {
        let mut out = Vec::with_capacity(frames.len());
        let mut previous: Option<&Frame> = None;
        for frame in frames {
            out.push(self.layout(previous, frame)?);
            previous = Some(frame);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
