//! Evaluate a kernel while one factor walks a range.
//!
//! Sweep points are produced by repeated addition (`start`, `start + step`,
//! `start + step + step`, ...) while `(value - end) * direction <= 0`. The
//! last point can therefore sit a few ulps away from `end`, and whether a
//! point near `end` is included depends on the accumulated rounding. Points
//! are never computed as `start + i * step`, so sweeps reproduce reference
//! sequences at floating-point boundary cases.
//!
//! A step too small to change the accumulated value ends the sweep after
//! the current point.

use tracing::debug;

use crate::types::{FactorName, FactorSet, OptionResult};
use crate::validation::{validate_factor_name, validate_step, validate_sweep_range};

/// A validated single-factor sweep request.
///
/// # Examples
/// ```
/// use pricer_core::scenarios::SweepSpec;
/// use pricer_core::types::FactorName;
///
/// let spec = SweepSpec::new("sig", 0.1, 0.9, 0.2).unwrap();
/// assert_eq!(spec.factor(), FactorName::Sig);
///
/// let points: Vec<f64> = spec.points().collect();
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[0], 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSpec {
    factor: FactorName,
    start: f64,
    end: f64,
    step: f64,
}

impl SweepSpec {
    /// Creates a sweep specification.
    ///
    /// Validates the factor token and that `step` walks towards `end`. The
    /// endpoint bounds are a separate check ([`SweepSpec::validate_range`])
    /// because matrix generation does not apply them.
    ///
    /// # Errors
    /// - `OptionError::InvalidFactorName` for an unknown token
    /// - `OptionError::InvalidStepDirection` for a zero or backwards step
    pub fn new(factor: &str, start: f64, end: f64, step: f64) -> OptionResult<Self> {
        let factor = validate_factor_name(factor)?;
        validate_step(start, end, step)?;
        Ok(Self {
            factor,
            start,
            end,
            step,
        })
    }

    /// Returns the swept factor.
    #[inline]
    pub fn factor(&self) -> FactorName {
        self.factor
    }

    /// Returns the first value of the range.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the last value of the range.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the step between consecutive values.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns +1 for an increasing sweep, -1 otherwise.
    #[inline]
    pub fn direction(&self) -> f64 {
        if self.end > self.start {
            1.0
        } else {
            -1.0
        }
    }

    /// Checks the endpoint bounds for a pricing sweep.
    ///
    /// # Errors
    /// `OptionError::InvalidFactorValue` if an endpoint is negative, or the
    /// swept factor is K and an endpoint is zero.
    #[inline]
    pub fn validate_range(&self) -> OptionResult<()> {
        validate_sweep_range(self.factor, self.start, self.end)
    }

    /// Returns the swept values in order.
    pub fn points(&self) -> SweepPoints {
        SweepPoints {
            next: self.start,
            end: self.end,
            step: self.step,
            direction: self.direction(),
            single: self.start == self.end,
            finished: false,
        }
    }

    /// Returns one factor set per swept value, with the swept factor
    /// replaced on a copy of `base`.
    pub fn factor_sets(&self, base: FactorSet) -> impl Iterator<Item = FactorSet> {
        let factor = self.factor;
        self.points().map(move |value| base.with(factor, value))
    }
}

/// Iterator over the values of a [`SweepSpec`].
#[derive(Debug, Clone)]
pub struct SweepPoints {
    next: f64,
    end: f64,
    step: f64,
    direction: f64,
    single: bool,
    finished: bool,
}

impl Iterator for SweepPoints {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.finished || (self.next - self.end) * self.direction > 0.0 {
            self.finished = true;
            return None;
        }

        let value = self.next;
        self.next += self.step;
        // A degenerate range has exactly one point whatever the step sign.
        if self.single || self.next == value {
            self.finished = true;
        }
        Some(value)
    }
}

impl std::iter::FusedIterator for SweepPoints {}

/// Evaluates `kernel` at every point of a sweep over one factor.
///
/// Validation order: factor token, step direction, endpoint bounds. Nothing
/// is evaluated unless all three pass. `base` is never modified.
///
/// # Errors
/// - `OptionError::InvalidFactorName` for an unknown token
/// - `OptionError::InvalidStepDirection` for a zero or backwards step
/// - `OptionError::InvalidFactorValue` for a negative endpoint, or a zero
///   endpoint on a strike sweep
///
/// # Examples
/// ```
/// use pricer_core::scenarios::sweep_factor;
/// use pricer_core::types::FactorSet;
///
/// let base = FactorSet::new(1.0, 100.0, 0.2, 0.05, 0.05, 100.0);
/// let spots = sweep_factor(&base, "S", 90.0, 110.0, 10.0, |f| f.s).unwrap();
/// assert_eq!(spots, vec![90.0, 100.0, 110.0]);
///
/// let down = sweep_factor(&base, "S", 110.0, 90.0, -10.0, |f| f.s).unwrap();
/// assert_eq!(down, vec![110.0, 100.0, 90.0]);
/// ```
pub fn sweep_factor<F>(
    base: &FactorSet,
    factor: &str,
    start: f64,
    end: f64,
    step: f64,
    kernel: F,
) -> OptionResult<Vec<f64>>
where
    F: Fn(&FactorSet) -> f64,
{
    let spec = SweepSpec::new(factor, start, end, step)?;
    spec.validate_range()?;

    let values: Vec<f64> = spec.factor_sets(*base).map(|f| kernel(&f)).collect();

    debug!(
        factor = %spec.factor(),
        start,
        end,
        step,
        points = values.len(),
        "factor sweep evaluated"
    );

    Ok(values)
}
