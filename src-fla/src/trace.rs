//! Trace (`Sample`) and population-snapshot model.
//!
//! Ownership is strictly tree-shaped: the trace owns its points, and each
//! point optionally owns a population snapshot (itself an ordered list of
//! owned points). There is no sharing or back-references, unlike the
//! hand-managed pointer graphs of the original implementation (spec.md §9).

use crate::point::Point;

/// The swarm considered at one iteration: an ordered list of evaluated
/// points. Order has no semantic meaning beyond "all current members".
pub type Population = Vec<Point>;

/// An ordered sequence of evaluated points, each with an optional co-indexed
/// population snapshot.
pub struct Trace {
    points: Vec<Point>,
    populations: Vec<Option<Population>>,
    advertised_len: Option<usize>,
}

impl Trace {
    /// Build a trace from parallel point/population vectors. `populations`
    /// must have the same length as `points`; use `None` for iterations with
    /// no recorded swarm.
    pub fn new(points: Vec<Point>, populations: Vec<Option<Population>>) -> Self {
        assert_eq!(
            points.len(),
            populations.len(),
            "points and populations must be co-indexed"
        );
        Self {
            points,
            populations,
            advertised_len: None,
        }
    }

    /// Actual number of points in the trace, ignoring any advertised size.
    pub fn actual_len(&self) -> usize {
        self.points.len()
    }

    /// Size exposed to FLMs: the advertised prefix length if set, else the
    /// actual length. Part of the contract (spec.md §3) though the
    /// orchestrator currently always uses the actual length.
    pub fn len(&self) -> usize {
        self.advertised_len.unwrap_or(self.points.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Restrict the trace to its first `m` points without discarding the
    /// rest.
    pub fn set_advertised_len(&mut self, m: usize) {
        assert!(m <= self.points.len());
        self.advertised_len = Some(m);
    }

    pub fn reset_advertised_len(&mut self) {
        self.advertised_len = None;
    }

    /// The point at index `i` (within the advertised length).
    pub fn point(&self, i: usize) -> &Point {
        assert!(i < self.len());
        &self.points[i]
    }

    pub fn points(&self) -> &[Point] {
        &self.points[..self.len()]
    }

    /// The population recorded at iteration `i`, if any.
    pub fn population(&self, i: usize) -> Option<&Population> {
        assert!(i < self.len());
        self.populations[i].as_ref()
    }

    /// Dimensionality of the trace's points (taken from the first point).
    pub fn dims(&self) -> usize {
        self.points.first().map(|p| p.dim()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trace(n: usize) -> Trace {
        let points = (0..n)
            .map(|i| Point::evaluated(vec![i as f64, 0.0], i as f64))
            .collect();
        let populations = vec![None; n];
        Trace::new(points, populations)
    }

    #[test]
    fn advertised_len_restricts_view() {
        let mut t = sample_trace(10);
        assert_eq!(t.len(), 10);
        t.set_advertised_len(4);
        assert_eq!(t.len(), 4);
        assert_eq!(t.points().len(), 4);
        assert_eq!(t.actual_len(), 10);
        t.reset_advertised_len();
        assert_eq!(t.len(), 10);
    }

    #[test]
    fn dims_from_first_point() {
        let t = sample_trace(5);
        assert_eq!(t.dims(), 2);
    }
}
