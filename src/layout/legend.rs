use crate::{
    chart::model::{ChartConfig, SeriesSet},
    foundation::color::Color,
    foundation::core::Point,
};

/// Horizontal distance from a legend glyph to its label.
const LEGEND_TEXT_GAP: f64 = 18.0;
/// Baseline of the legend strip.
const LEGEND_TEXT_Y: f64 = 10.0;
const LEGEND_GLYPH_Y: f64 = 6.0;

/// One legend glyph + label.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LegendEntry {
    /// Series label.
    pub label: String,
    /// Series color.
    pub color: Color,
    /// Series opacity hint.
    pub opacity: f64,
    /// Center of the color glyph.
    pub glyph: Point,
    /// Left baseline point of the label.
    pub text: Point,
}

/// Flatten every series of every group into legend order.
pub fn build_legend(series: &SeriesSet, config: &ChartConfig) -> Vec<LegendEntry> {
    series
        .iter_flat()
        .enumerate()
        .map(|(idx, def)| {
            let x = config.legend_origin_x + (idx as f64) * config.legend_spacing;
            LegendEntry {
                label: def.label.clone(),
                color: def.color,
                opacity: def.opacity.unwrap_or(config.default_opacity),
                glyph: Point::new(x, LEGEND_GLYPH_Y),
                text: Point::new(x + LEGEND_TEXT_GAP, LEGEND_TEXT_Y),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/legend.rs"]
mod tests;
