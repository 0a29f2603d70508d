use tracing::debug;

use crate::config::{Tolerances, DEFAULT_ON_CURVE_TOLERANCE};
use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::math::Point3;
use crate::operations::query::CutParameters;

/// Cuts curves into pieces between consecutive points that lie on them.
///
/// For each curve, the parameters of the on-curve points are sorted and the
/// curve is trimmed between every consecutive pair, giving `count - 1`
/// pieces; the parts before the first and after the last cut point are
/// discarded. Pieces from all curves are concatenated in curve order.
pub struct SplitAtPoints<'a, C> {
    curves: &'a [C],
    points: &'a [Point3],
    on_curve: f64,
}

impl<'a, C: Curve> SplitAtPoints<'a, C> {
    /// Creates a new `SplitAtPoints` operation.
    #[must_use]
    pub fn new(curves: &'a [C], points: &'a [Point3]) -> Self {
        Self {
            curves,
            points,
            on_curve: DEFAULT_ON_CURVE_TOLERANCE,
        }
    }

    /// Overrides the on-curve acceptance distance.
    #[must_use]
    pub fn with_on_curve_tolerance(mut self, on_curve: f64) -> Self {
        self.on_curve = on_curve;
        self
    }

    /// Takes the on-curve acceptance distance from a [`Tolerances`] value.
    #[must_use]
    pub fn with_tolerances(self, tolerances: &Tolerances) -> Self {
        self.with_on_curve_tolerance(tolerances.on_curve)
    }

    /// Executes the split.
    ///
    /// # Errors
    ///
    /// Returns an error if a curve rejects a trim interval as out of range.
    /// Degenerate pieces are skipped.
    pub fn execute(&self) -> Result<Vec<C>> {
        let mut pieces = Vec::new();
        for (i, curve) in self.curves.iter().enumerate() {
            let params = CutParameters::new(curve, self.points)
                .with_on_curve_tolerance(self.on_curve)
                .execute();
            if params.len() < 2 {
                debug!(curve = i, cuts = params.len(), "curve yields no pieces");
                continue;
            }
            for w in params.windows(2) {
                match curve.trim(w[0], w[1]) {
                    Ok(piece) => pieces.push(piece),
                    Err(e) if e.is_degenerate() => {
                        debug!(
                            curve = i,
                            t0 = w[0],
                            t1 = w[1],
                            error = %e,
                            "skipping degenerate piece"
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        debug!(
            curves = self.curves.len(),
            pieces = pieces.len(),
            "split at points"
        );
        Ok(pieces)
    }
}
