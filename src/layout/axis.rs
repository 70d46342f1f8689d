use crate::{
    chart::model::ChartConfig,
    foundation::error::RaceResult,
    layout::{scale::LinearScale, segments::format_value},
};

/// One value tick on the horizontal axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AxisTick {
    /// Domain value.
    pub value: f64,
    /// Display text.
    pub text: String,
    /// Absolute x on the surface.
    pub x: f64,
    /// Whether a vertical gridline is drawn (every tick but zero).
    pub gridline: bool,
}

/// Axis ticks from zero to the domain maximum every `tick_step`.
pub fn build_axis(scale: &LinearScale, config: &ChartConfig) -> RaceResult<Vec<AxisTick>> {
    Ok(scale
        .ticks(config.tick_step)?
        .into_iter()
        .map(|value| AxisTick {
            value,
            text: format_value(value),
            x: config.bar_origin_x + scale.scale(value),
            gridline: value != 0.0,
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/axis.rs"]
mod tests;
