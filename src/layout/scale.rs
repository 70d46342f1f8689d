use crate::foundation::error::{RaceError, RaceResult};

/// Upper bound on the number of ticks a single axis may produce.
pub const MAX_TICKS: usize = 10_000;

/// Linear map from `[0, domain_max]` to `[0, range_max]`.
///
/// Inputs outside the domain extrapolate linearly; the map is monotonic and `scale(0) == 0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LinearScale {
    domain_max: f64,
    range_max: f64,
}

impl LinearScale {
    /// Both bounds must be finite and strictly positive.
    pub fn new(domain_max: f64, range_max: f64) -> RaceResult<Self> {
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(RaceError::invalid_domain(format!(
                "domain_max must be finite and > 0 (got {domain_max})"
            )));
        }
        if !range_max.is_finite() || range_max <= 0.0 {
            return Err(RaceError::invalid_domain(format!(
                "range_max must be finite and > 0 (got {range_max})"
            )));
        }
        Ok(Self {
            domain_max,
            range_max,
        })
    }

    /// Pixel extent of domain value `v`.
    #[inline]
    pub fn scale(&self, v: f64) -> f64 {
        v * self.range_max / self.domain_max
    }

    /// Domain value at pixel extent `px`.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        px * self.domain_max / self.range_max
    }

    /// `0, step, 2 * step, ..` up to and including `domain_max`.
    pub fn ticks(&self, step: f64) -> RaceResult<Vec<f64>> {
        if !step.is_finite() || step <= 0.0 {
            return Err(RaceError::validation("tick step must be finite and > 0"));
        }
        let count = self.domain_max / step;
        if count > MAX_TICKS as f64 {
            return Err(RaceError::validation(format!(
                "tick step {step} yields more than {MAX_TICKS} ticks over [0, {}]",
                self.domain_max
            )));
        }
        // Integer stepping avoids drift from repeated float addition.
        let n = (count + 1e-9).floor() as usize;
        Ok((0..=n).map(|i| (i as f64) * step).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scale.rs"]
mod tests;
