//! Scenario 4, spec.md §8: at `n=7`, `floor(0.15*7) = 1` elite points, below
//! the 2-point minimum needed to form a pairwise distance. `Pairwise` must
//! fail locally and the orchestrator zero-fills its 54 slots without
//! shrinking the overall output.

use autoeq_fla::flm::{Flm, Pairwise};
use autoeq_fla::{characterize, FlaError, Point, Trace};

fn trace(n: usize) -> Trace {
    let points: Vec<Point> = (0..n)
        .map(|i| Point::evaluated(vec![i as f64, (i as f64).sin()], (i as f64 * 0.2).cos()))
        .collect();
    Trace::new(points, vec![None; n])
}

#[test]
fn pairwise_alone_reports_sample_too_small() {
    let t = trace(7);
    assert!(matches!(
        Pairwise::new(1).calculate(&t),
        Err(FlaError::SampleTooSmall { elite: 1 })
    ));
}

#[test]
fn orchestrator_zero_fills_and_keeps_full_length() {
    let n = 7;
    let d = 2;
    let t = trace(n);
    let out = characterize(&t, 1).unwrap();

    assert_eq!(out.pairwise, vec![0.0; 54]);
    let expected = 1 + 2 + 54 + 1 + 7 + 2 + 2 + n + (n - 1) + 2 * d + 2 * d;
    assert_eq!(out.packed().len(), expected);
}
