//! Interpolation schedules for annealing bridges.

use serde::{Deserialize, Serialize};

use crate::errors::{AisError, ErrorInfo};

/// Monotone partition of the interpolation interval `[0, 1]`.
///
/// A schedule is the ordered sequence of bridge settings a path steps
/// through: it starts at exactly 0, ends at exactly 1, is strictly
/// increasing, and has at least two points. Anything else is rejected at
/// construction so downstream code never sees a degenerate bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Schedule {
    points: Vec<f64>,
}

impl Schedule {
    /// Validates and wraps an explicit sequence of schedule points.
    pub fn new(points: Vec<f64>) -> Result<Self, AisError> {
        if points.len() < 2 {
            return Err(AisError::Input(
                ErrorInfo::new("schedule-too-short", "a schedule needs at least two points")
                    .with_context("len", points.len().to_string()),
            ));
        }
        if points[0] != 0.0 || *points.last().unwrap_or(&f64::NAN) != 1.0 {
            return Err(AisError::Input(
                ErrorInfo::new("schedule-endpoints", "a schedule must run from 0 to 1")
                    .with_context("first", points[0].to_string())
                    .with_context("last", points[points.len() - 1].to_string()),
            ));
        }
        if points.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(AisError::Input(ErrorInfo::new(
                "schedule-not-increasing",
                "schedule points must be strictly increasing",
            )));
        }
        Ok(Self { points })
    }

    /// Builds a schedule from an unconstrained increment vector.
    ///
    /// The increments are squared and accumulated, and the running sum is
    /// normalized by the total, which guarantees monotonicity and the `[0, 1]`
    /// endpoints without explicit constraints. This is the parametrization the
    /// schedule optimizer searches over.
    pub fn from_increments(increments: &[f64]) -> Result<Self, AisError> {
        if increments.is_empty() {
            return Err(AisError::Input(ErrorInfo::new(
                "schedule-no-increments",
                "cannot build a schedule from zero increments",
            )));
        }
        let total: f64 = increments.iter().map(|x| x * x).sum();
        if !(total > 0.0) || !total.is_finite() {
            return Err(AisError::Input(
                ErrorInfo::new(
                    "schedule-degenerate-increments",
                    "squared increments must have a positive finite sum",
                )
                .with_context("total", total.to_string()),
            ));
        }
        let mut points = Vec::with_capacity(increments.len() + 1);
        points.push(0.0);
        let mut acc = 0.0;
        for x in increments {
            acc += x * x;
            points.push(acc / total);
        }
        // The final running sum equals the total, so the last point is 1.
        Self::new(points)
    }

    /// Evenly spaced schedule with `len` points.
    pub fn uniform(len: usize) -> Result<Self, AisError> {
        if len < 2 {
            return Err(AisError::Input(
                ErrorInfo::new("schedule-too-short", "a schedule needs at least two points")
                    .with_context("len", len.to_string()),
            ));
        }
        let points = (0..len).map(|i| i as f64 / (len - 1) as f64).collect();
        Self::new(points)
    }

    /// Schedule points in increasing order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points in the schedule.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A valid schedule is never empty; this exists for clippy's sake.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<f64>> for Schedule {
    type Error = AisError;

    fn try_from(points: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Schedule> for Vec<f64> {
    fn from(schedule: Schedule) -> Self {
        schedule.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_and_unsorted() {
        assert!(Schedule::new(vec![0.0]).is_err());
        assert!(Schedule::new(vec![0.0, 0.5, 0.4, 1.0]).is_err());
        assert!(Schedule::new(vec![0.1, 1.0]).is_err());
        assert!(Schedule::new(vec![0.0, 0.9]).is_err());
    }

    #[test]
    fn increments_normalize_to_unit_interval() {
        let s = Schedule::from_increments(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s.points()[0], 0.0);
        assert_eq!(s.points()[4], 1.0);
        assert!((s.points()[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_increments_are_rejected() {
        assert!(Schedule::from_increments(&[]).is_err());
        assert!(Schedule::from_increments(&[0.0, 0.0]).is_err());
    }

    #[test]
    fn serde_round_trip_preserves_points() {
        let s = Schedule::from_increments(&[0.5, 1.0, 2.0]).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
