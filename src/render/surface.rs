use std::collections::HashMap;

use crate::{
    animation::tween::Tween,
    chart::model::ChartConfig,
    foundation::color::Color,
    foundation::core::{Point, Rect},
    layout::{axis::AxisTick, engine::FrameLayout, legend::LegendEntry},
};

const INK: Color = Color::rgba(42.0 / 255.0, 63.0 / 255.0, 85.0 / 255.0, 1.0);
const LEGEND_GLYPH_RADIUS: f64 = 5.0;
const AXIS_TEXT_FROM_BOTTOM: f64 = 27.2;
const GRIDLINE_GAP: f64 = 14.4;

/// Horizontal alignment of text relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// Font and fill of a text draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f64,
    /// Semi-bold weight.
    pub bold: bool,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Fill color.
    pub color: Color,
}

impl TextStyle {
    fn ink(size: f64, bold: bool, anchor: TextAnchor) -> Self {
        Self {
            size,
            bold,
            anchor,
            color: INK,
        }
    }
}

/// Rendering collaborator: anything that accepts positioned shapes and text.
pub trait DrawSurface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color, opacity: f64);
    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color, opacity: f64);
    /// Draw a single line of text with its baseline at `pos.y`.
    fn text(&mut self, pos: Point, text: &str, style: &TextStyle);
    /// Stroke a straight line, optionally dashed.
    fn line(&mut self, a: Point, b: Point, color: Color, width: f64, dashed: bool);
}

/// Chart-level elements that do not change between frames.
#[derive(Clone, Copy, Debug)]
pub struct Chrome<'a> {
    /// Geometry options.
    pub config: &'a ChartConfig,
    /// Legend entries, see [`crate::RaceLayout::legend`].
    pub legend: &'a [LegendEntry],
    /// Axis ticks, see [`crate::RaceLayout::axis`].
    pub axis: &'a [AxisTick],
    /// Axis title drawn left of the tick labels.
    pub title: Option<&'a str>,
}

/// Resolve every descriptor of `layout` at `progress` and draw it.
///
/// Draw order: legend, axis, entity labels, bars, value labels, frame label.
pub fn paint_frame(
    layout: &FrameLayout,
    chrome: &Chrome<'_>,
    progress: f64,
    surface: &mut dyn DrawSurface,
) {
    let cfg = chrome.config;

    for entry in chrome.legend {
        surface.fill_circle(entry.glyph, LEGEND_GLYPH_RADIUS, entry.color, entry.opacity);
        surface.text(
            entry.text,
            &entry.label,
            &TextStyle::ink(10.0, true, TextAnchor::Start),
        );
    }

    let axis_y = cfg.canvas_height - AXIS_TEXT_FROM_BOTTOM;
    for tick in chrome.axis {
        surface.text(
            Point::new(tick.x, axis_y),
            &tick.text,
            &TextStyle::ink(13.0, false, TextAnchor::Middle),
        );
        if tick.gridline {
            surface.line(
                Point::new(tick.x, 0.0),
                Point::new(tick.x, axis_y - GRIDLINE_GAP),
                INK,
                0.3,
                true,
            );
        }
    }

    if let Some(title) = chrome.title {
        surface.text(
            Point::new(cfg.row_label_x - 40.0, axis_y),
            title,
            &TextStyle::ink(15.0, true, TextAnchor::End),
        );
    }

    let mut row_y: HashMap<&str, f64> = HashMap::with_capacity(layout.rows.len());
    for row in layout.rows.iter().chain(layout.exits.iter()) {
        let y = row.at(progress);
        row_y.insert(row.key.as_str(), y);
        surface.text(
            Point::new(cfg.row_label_x, y),
            row.key.as_str(),
            &TextStyle::ink(13.0, false, TextAnchor::End),
        );
    }

    let resolved: Vec<_> = layout
        .segments
        .iter()
        .chain(layout.exit_segments.iter())
        .filter_map(|s| {
            let y = *row_y.get(s.key.as_str())?;
            let top = y + cfg.bar_offset_y + (s.group as f64) * cfg.bar_thickness;
            Some((top, s.at(progress)))
        })
        .collect();

    for (top, seg) in &resolved {
        if seg.geom.width <= 0.0 {
            continue;
        }
        let x0 = cfg.bar_origin_x + seg.geom.offset;
        surface.fill_rect(
            Rect::new(x0, *top, x0 + seg.geom.width, top + cfg.bar_thickness),
            seg.color,
            seg.opacity,
        );
    }

    for (top, seg) in &resolved {
        if let Some((text, x)) = &seg.label {
            surface.text(
                Point::new(cfg.bar_origin_x + x, top + cfg.bar_thickness * 0.7),
                text,
                &TextStyle::ink(8.0, true, TextAnchor::Start),
            );
        }
    }

    if let Some(label) = &layout.label {
        surface.text(
            Point::new(cfg.canvas_width - 10.0, cfg.canvas_height - 60.0),
            label,
            &TextStyle::ink(20.0, true, TextAnchor::End),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
