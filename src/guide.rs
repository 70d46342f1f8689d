//! # barrace guide
//!
//! A short end-to-end tour of the engine.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Frame`](crate::Frame): ranked [`EntityRecord`](crate::EntityRecord)s at one point in
//!   time; order is rank
//! - [`SeriesSet`](crate::SeriesSet): the stacked series, fixed for the life of a chart
//! - [`ChartConfig`](crate::ChartConfig): named geometry options (scale, row pitch, ...)
//! - [`RaceLayout`](crate::RaceLayout): the engine; one `layout(previous, current)` call per
//!   frame transition
//! - [`FrameLayout`](crate::FrameLayout): rows, segments and exits with `from`/`to` endpoints
//!
//! ---
//!
//! ## Matching by key
//!
//! Every current record is paired with the previous record carrying the same key
//! ([`PreviousIndex`](crate::PreviousIndex)). Rank changes therefore only move the row; the
//! segment endpoints of an entity are the same whatever order either frame lists it in.
//!
//! An entity missing from the previous frame is an entrant: its segments start at zero and
//! its row slides in from [`ChartConfig::offscreen_y`](crate::ChartConfig::offscreen_y). An
//! entity missing from the current frame exits: its row slides to the same off-canvas y with
//! its last bars held.
//!
//! ---
//!
//! ## Scale and display divisor
//!
//! Widths go through a [`LinearScale`](crate::LinearScale) from `[0, domain_max]` to
//! `[0, range_max / display_divisor]`. The divisor is a plain display-density knob; set it to
//! `1` to make `range_max` the literal pixel extent.
//!
//! ---
//!
//! ## Driving an animation
//!
//! ```
//! use barrace::{
//!     ChartConfig, Color, EntityRecord, Frame, RaceLayout, SeriesDef, SeriesSet, Timing, Tween,
//! };
//!
//! let series = SeriesSet::single(vec![
//!     SeriesDef::new("gold", Color::from_rgb8(212, 175, 55), "Gold"),
//!     SeriesDef::new("silver", Color::from_rgb8(192, 192, 192), "Silver"),
//! ]);
//! let engine = RaceLayout::new(ChartConfig::default(), series)?;
//!
//! let y1896 = Frame::new(vec![EntityRecord::new("USA").with("gold", 11.0)]);
//! let y1900 = Frame::new(vec![
//!     EntityRecord::new("FRA").with("gold", 26.0),
//!     EntityRecord::new("USA").with("gold", 30.0),
//! ]);
//! let step = engine.layout(Some(&y1896), &y1900)?;
//!
//! let timing = Timing::default();
//! let halfway = timing.progress_at(0.5);
//! let usa_gold = step.segments_for("USA").next().unwrap().at(halfway);
//! assert!(usa_gold.geom.width > 0.0);
//! # Ok::<(), barrace::RaceError>(())
//! ```
//!
//! To draw, implement [`DrawSurface`](crate::DrawSurface) (or use
//! [`SvgSurface`](crate::SvgSurface)) and call [`paint_frame`](crate::paint_frame).
