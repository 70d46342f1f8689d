use std::{
    collections::{BTreeMap, HashSet},
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    animation::tween::Timing,
    foundation::color::Color,
    foundation::core::EntityKey,
    foundation::error::{RaceError, RaceResult},
    layout::scale::{LinearScale, MAX_TICKS},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One ranked entity in one frame.
///
/// JSON form is a flat object: the `key` plus any number of named fields. Only the fields
/// named by a [`SeriesDef`] are read; missing or non-numeric fields read as zero.
pub struct EntityRecord {
    /// Stable identity used to match records across frames.
    pub key: EntityKey,
    /// Raw field values.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl EntityRecord {
    /// Record with no fields.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: EntityKey::new(key),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style numeric field setter.
    pub fn with(mut self, field: impl Into<String>, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Set a numeric field.
    pub fn set(&mut self, field: impl Into<String>, value: f64) {
        let v = serde_json::Number::from_f64(value)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null);
        self.fields.insert(field.into(), v);
    }

    /// Numeric value of `field`, zero when absent or not a number.
    pub fn value(&self, field: &str) -> f64 {
        self.fields
            .get(field)
            .and_then(serde_json::Value::as_f64)
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "FrameRepr")]
/// One snapshot of every entity's values; entity order is rank order.
pub struct Frame {
    /// Optional display label (e.g. the games edition).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Ranked entities, best first.
    pub entities: Vec<EntityRecord>,
}

// Frames may be written as a bare record array or as `{label, entities}`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum FrameRepr {
    Labeled {
        #[serde(default)]
        label: Option<String>,
        entities: Vec<EntityRecord>,
    },
    Bare(Vec<EntityRecord>),
}

impl From<FrameRepr> for Frame {
    fn from(value: FrameRepr) -> Self {
        match value {
            FrameRepr::Labeled { label, entities } => Self { label, entities },
            FrameRepr::Bare(entities) => Self {
                label: None,
                entities,
            },
        }
    }
}

impl Frame {
    /// Unlabeled frame.
    pub fn new(entities: Vec<EntityRecord>) -> Self {
        Self {
            label: None,
            entities,
        }
    }

    /// Labeled frame.
    pub fn labeled(label: impl Into<String>, entities: Vec<EntityRecord>) -> Self {
        Self {
            label: Some(label.into()),
            entities,
        }
    }

    /// Number of ranked entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when the frame has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Human-readable identifier for diagnostics.
    pub fn describe(&self) -> String {
        match &self.label {
            Some(l) => format!("frame \"{l}\""),
            None => format!("unlabeled frame of {} entities", self.entities.len()),
        }
    }

    /// Reject frames where two records share a key.
    pub fn validate(&self) -> RaceResult<()> {
        let mut seen = HashSet::with_capacity(self.entities.len());
        for e in &self.entities {
            if !seen.insert(e.key.as_str()) {
                return Err(RaceError::duplicate_key(e.key.as_str(), self.describe()));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One stacked component of a bar.
pub struct SeriesDef {
    /// Entity field the series reads.
    #[serde(alias = "property")]
    pub field: String,
    /// Fill color.
    pub color: Color,
    /// Legend label.
    pub label: String,
    /// Opacity hint; falls back to [`ChartConfig::default_opacity`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl SeriesDef {
    /// Series without an opacity hint.
    pub fn new(field: impl Into<String>, color: Color, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            color,
            label: label.into(),
            opacity: None,
        }
    }

    /// Builder-style opacity hint.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Series stacked left to right into one bar.
pub struct SeriesGroup(pub Vec<SeriesDef>);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "SeriesRepr", into = "Vec<SeriesGroup>")]
/// Immutable series layout of a chart: one or more stacked bars per entity row.
///
/// JSON accepts either a flat list of series (one bar) or a list of lists.
pub struct SeriesSet {
    groups: Vec<SeriesGroup>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SeriesRepr {
    Grouped(Vec<SeriesGroup>),
    Flat(Vec<SeriesDef>),
}

impl From<SeriesRepr> for SeriesSet {
    fn from(value: SeriesRepr) -> Self {
        match value {
            SeriesRepr::Grouped(groups) => Self { groups },
            SeriesRepr::Flat(defs) => Self::single(defs),
        }
    }
}

impl From<SeriesSet> for Vec<SeriesGroup> {
    fn from(value: SeriesSet) -> Self {
        value.groups
    }
}

impl SeriesSet {
    /// One stacked bar per entity.
    pub fn single(defs: Vec<SeriesDef>) -> Self {
        Self {
            groups: vec![SeriesGroup(defs)],
        }
    }

    /// Several stacked bars per entity, drawn top to bottom in group order.
    pub fn grouped(groups: Vec<Vec<SeriesDef>>) -> Self {
        Self {
            groups: groups.into_iter().map(SeriesGroup).collect(),
        }
    }

    /// Bars of each entity row, top to bottom.
    pub fn groups(&self) -> &[SeriesGroup] {
        &self.groups
    }

    /// Every series in legend order (group by group, left to right).
    pub fn iter_flat(&self) -> impl Iterator<Item = &SeriesDef> {
        self.groups.iter().flat_map(|g| g.0.iter())
    }

    /// Reject empty sets, empty groups, blank fields and out-of-range opacity hints.
    pub fn validate(&self) -> RaceResult<()> {
        if self.groups.is_empty() || self.groups.iter().any(|g| g.0.is_empty()) {
            return Err(RaceError::validation(
                "series set must contain at least one non-empty group",
            ));
        }
        for def in self.iter_flat() {
            if def.field.is_empty() {
                return Err(RaceError::validation("series field name must not be empty"));
            }
            if let Some(o) = def.opacity {
                if !(0.0..=1.0).contains(&o) {
                    return Err(RaceError::validation(format!(
                        "series \"{}\" opacity must be in [0, 1]",
                        def.field
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Named chart geometry options. Defaults reproduce the medal-table race.
pub struct ChartConfig {
    /// Upper bound of the value domain.
    pub domain_max: f64,
    /// Upper bound of the display range, before `display_divisor`.
    pub range_max: f64,
    /// Display-density correction; scaled widths are divided by this.
    pub display_divisor: f64,
    /// Vertical distance between successive ranks.
    pub row_pitch: f64,
    /// y of the rank-0 row.
    pub row_origin: f64,
    /// Height of one stacked bar.
    pub bar_thickness: f64,
    /// Bar top relative to its row y.
    pub bar_offset_y: f64,
    /// x where bars start.
    pub bar_origin_x: f64,
    /// y used for rows entering or leaving the chart.
    pub offscreen_y: f64,
    /// Minimum pixel width for a segment to carry a value label.
    pub label_width_threshold: f64,
    /// Horizontal padding between a segment's left edge and its label.
    pub label_inset: f64,
    /// Opacity for series without their own hint.
    pub default_opacity: f64,
    /// Axis tick spacing in domain units.
    pub tick_step: f64,
    /// x of the first legend glyph.
    pub legend_origin_x: f64,
    /// Horizontal distance between legend entries.
    pub legend_spacing: f64,
    /// Right edge of the entity key labels.
    pub row_label_x: f64,
    /// Surface width.
    pub canvas_width: f64,
    /// Surface height.
    pub canvas_height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            domain_max: 2500.0,
            range_max: 2500.0,
            display_divisor: 6.0,
            row_pitch: 25.0,
            row_origin: 20.0,
            bar_thickness: 12.0,
            bar_offset_y: -11.5,
            bar_origin_x: 143.8,
            offscreen_y: 320.0,
            label_width_threshold: 15.0,
            label_inset: 2.0,
            default_opacity: 0.4,
            tick_step: 250.0,
            legend_origin_x: 130.0,
            legend_spacing: 150.0,
            row_label_x: 130.0,
            canvas_width: 600.0,
            canvas_height: 340.0,
        }
    }
}

impl ChartConfig {
    /// Value-to-pixel scale with the display divisor folded into the range.
    pub fn scale(&self) -> RaceResult<LinearScale> {
        if !self.display_divisor.is_finite() || self.display_divisor <= 0.0 {
            return Err(RaceError::invalid_domain(format!(
                "display_divisor must be finite and > 0 (got {})",
                self.display_divisor
            )));
        }
        LinearScale::new(self.domain_max, self.range_max / self.display_divisor)
    }

    /// y of the row at `rank`.
    pub fn row_y(&self, rank: usize) -> f64 {
        self.row_origin + (rank as f64) * self.row_pitch
    }

    /// Reject non-finite or degenerate geometry.
    pub fn validate(&self) -> RaceResult<()> {
        self.scale()?;

        let all = [
            ("row_pitch", self.row_pitch),
            ("row_origin", self.row_origin),
            ("bar_thickness", self.bar_thickness),
            ("bar_offset_y", self.bar_offset_y),
            ("bar_origin_x", self.bar_origin_x),
            ("offscreen_y", self.offscreen_y),
            ("label_width_threshold", self.label_width_threshold),
            ("label_inset", self.label_inset),
            ("default_opacity", self.default_opacity),
            ("tick_step", self.tick_step),
            ("legend_origin_x", self.legend_origin_x),
            ("legend_spacing", self.legend_spacing),
            ("row_label_x", self.row_label_x),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];
        if let Some((name, _)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RaceError::validation(format!("{name} must be finite")));
        }

        if self.row_pitch <= 0.0 {
            return Err(RaceError::validation("row_pitch must be > 0"));
        }
        if self.bar_thickness <= 0.0 {
            return Err(RaceError::validation("bar_thickness must be > 0"));
        }
        if self.label_width_threshold < 0.0 {
            return Err(RaceError::validation("label_width_threshold must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.default_opacity) {
            return Err(RaceError::validation("default_opacity must be in [0, 1]"));
        }
        if self.tick_step <= 0.0 {
            return Err(RaceError::validation("tick_step must be > 0"));
        }
        if self.domain_max / self.tick_step > MAX_TICKS as f64 {
            return Err(RaceError::validation(format!(
                "tick_step {} yields more than {MAX_TICKS} axis ticks",
                self.tick_step
            )));
        }
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(RaceError::validation("canvas size must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete chart document: configuration, series and the in-memory frame sequence.
pub struct ChartSpec {
    /// Vertical axis title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Geometry options.
    #[serde(default)]
    pub config: ChartConfig,
    /// Transition timing suggested to the renderer.
    #[serde(default)]
    pub timing: Timing,
    /// Series layout.
    pub series: SeriesSet,
    /// Frames in playback order.
    pub frames: Vec<Frame>,
}

impl ChartSpec {
    /// Load a chart document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> RaceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RaceError::validation(format!("open chart JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse and validate a chart document.
    pub fn from_reader(r: impl Read) -> RaceResult<Self> {
        let spec: Self = serde_json::from_reader(r)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Parse and validate a chart document held in memory.
    pub fn from_json_str(s: &str) -> RaceResult<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Validate config, timing, series and every frame.
    pub fn validate(&self) -> RaceResult<()> {
        self.config.validate()?;
        self.timing.validate()?;
        self.series.validate()?;
        for frame in &self.frames {
            frame.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/model.rs"]
mod tests;
