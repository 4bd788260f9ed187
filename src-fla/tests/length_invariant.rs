//! The packed output length must match the sum of its component widths for
//! any trace shape.

use autoeq_fla::{characterize, Point, Trace};

fn trace(n: usize, d: usize) -> Trace {
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let coords: Vec<f64> = (0..d).map(|c| ((i + c) as f64 * 0.37).sin()).collect();
            let y = coords.iter().map(|x| x * x).sum::<f64>() + i as f64 * 0.01;
            Point::evaluated(coords, y)
        })
        .collect();
    Trace::new(points, vec![None; n])
}

#[test]
fn length_matches_component_sum_across_shapes() {
    for &(n, d) in &[(40usize, 1usize), (55, 2), (90, 3), (200, 4)] {
        let t = trace(n, d);
        let out = characterize(&t, 1).unwrap();
        let expected = 1 + 2 + 54 + 1 + 7 + 2 + 2 + n + (n - 1) + 2 * d + 2 * d;
        assert_eq!(
            out.packed().len(),
            expected,
            "mismatch at n={n}, d={d}"
        );
    }
}

#[test]
fn elite_too_small_still_yields_full_length() {
    let t = trace(7, 2);
    let out = characterize(&t, 1).unwrap();
    let expected = 1 + 2 + 54 + 1 + 7 + 2 + 2 + 7 + 6 + 4 + 4;
    assert_eq!(out.packed().len(), expected);
}
