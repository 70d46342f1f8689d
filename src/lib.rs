//! barrace is the layout and interpolation engine behind an animated "bar chart race".
//!
//! Given the previous frame (if any), the current frame and a fixed set of stacked series,
//! it computes draw descriptors whose geometry carries both a `from` and a `to` endpoint.
//! A rendering collaborator tweens between them over whatever duration it chooses.
//!
//! # Pipeline overview
//!
//! 1. **Match**: index the previous frame by entity key ([`PreviousIndex`])
//! 2. **Stack**: per entity and series, scaled offset/width endpoints ([`build_segments`])
//! 3. **Rank**: per entity, row y endpoints including enter/exit motion ([`RowMotion`])
//! 4. **Paint** (optional): resolve at a progress value onto a [`DrawSurface`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Identity, not position**: previous and current records are paired by key.
//! - **Pure per frame**: [`RaceLayout::layout`] is a function of `(previous, current)` only.
//! - **Caller owns time**: easing helpers exist ([`Timing`], [`Ease`]) but the engine never
//!   looks at a clock.
//!
//! For a walkthrough see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod chart;
mod foundation;
mod layout;
mod render;

/// Standalone walkthrough of barrace's concepts.
pub mod guide;

pub use animation::ease::Ease;
pub use animation::tween::{Lerp, Timing, Transition, Tween};
pub use chart::model::{
    ChartConfig, ChartSpec, EntityRecord, Frame, SeriesDef, SeriesGroup, SeriesSet,
};
pub use foundation::color::Color;
pub use foundation::core::{EntityKey, Fps, Point, Rect};
pub use foundation::error::{RaceError, RaceResult};
pub use layout::axis::{AxisTick, build_axis};
pub use layout::engine::{DrawDescriptor, FrameLayout, RaceLayout};
pub use layout::legend::{LegendEntry, build_legend};
pub use layout::matcher::{Match, PreviousIndex};
pub use layout::rows::{RowMotion, RowPhase, current_rows, exit_rows};
pub use layout::scale::LinearScale;
pub use layout::segments::{
    BarSegment, ResolvedSegment, SegmentGeom, SegmentLabel, build_segments, format_value,
    hold_segments, stack_geometry,
};
pub use render::surface::{Chrome, DrawSurface, TextAnchor, TextStyle, paint_frame};
pub use render::svg::SvgSurface;
