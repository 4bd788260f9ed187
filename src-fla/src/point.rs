//! Point model: a real vector plus an objective value.

use crate::error::{FlaError, FlaResult};

/// Objective value of a point. `Unset` replaces the source's `DBLMAX`
/// sentinel with an explicit variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Objective {
    Unset,
    Value(f64),
}

/// A single evaluated (or not-yet-evaluated) candidate in the search space.
#[derive(Debug, Clone)]
pub struct Point {
    coords: Vec<f64>,
    objective: Objective,
}

impl Point {
    /// Construct an unevaluated point at the given coordinates.
    pub fn new(coords: Vec<f64>) -> Self {
        Self {
            coords,
            objective: Objective::Unset,
        }
    }

    /// Construct a point that is already evaluated.
    pub fn evaluated(coords: Vec<f64>, y: f64) -> Self {
        Self {
            coords,
            objective: Objective::Value(y),
        }
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate value at index `i`.
    pub fn get(&self, i: usize) -> f64 {
        self.coords[i]
    }

    /// All coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Whether this point carries an objective value.
    pub fn is_evaluated(&self) -> bool {
        matches!(self.objective, Objective::Value(_))
    }

    /// Set the objective value, marking the point evaluated.
    pub fn set_fit(&mut self, y: f64) {
        self.objective = Objective::Value(y);
    }

    /// Read the objective value. Fails if the point is unevaluated.
    pub fn fit(&self) -> FlaResult<f64> {
        match self.objective {
            Objective::Value(y) => Ok(y),
            Objective::Unset => Err(FlaError::NotEvaluated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unevaluated_point_fails_on_fit() {
        let p = Point::new(vec![1.0, 2.0]);
        assert!(matches!(p.fit(), Err(FlaError::NotEvaluated)));
    }

    #[test]
    fn evaluated_point_reports_fit() {
        let p = Point::evaluated(vec![1.0, 2.0], 3.5);
        assert_eq!(p.fit().unwrap(), 3.5);
        assert!(p.is_evaluated());
    }

    #[test]
    fn set_fit_marks_evaluated() {
        let mut p = Point::new(vec![0.0]);
        assert!(!p.is_evaluated());
        p.set_fit(1.0);
        assert!(p.is_evaluated());
        assert_eq!(p.fit().unwrap(), 1.0);
    }
}
