//! Track boundary solver.
//!
//! Turns per-entry size requirements on one axis into the smallest
//! non-decreasing list of track boundaries that satisfies all of them.

/// A size requirement over a run of tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackConstraint {
    /// First track.
    pub start: usize,
    /// Number of tracks, at least 1.
    pub span: usize,
    /// Space needed between boundary `start` and boundary `start + span`.
    pub size: i32,
}

impl TrackConstraint {
    pub fn new(start: usize, span: usize, size: i32) -> Self {
        Self { start, span, size }
    }

    pub fn end(&self) -> usize {
        self.start + self.span
    }
}

/// Solve track boundaries for `dimension` tracks.
///
/// Returns `dimension + 1` boundaries starting at 0. Every constraint must
/// satisfy `span >= 1` and `start + span <= dimension`.
///
/// Constraints are processed by ascending start. A constraint that could
/// still move boundary `start` has to end there, so it started strictly
/// earlier and has already been applied; `result[start]` is final when read.
pub fn solve_coordinates(dimension: usize, constraints: &[TrackConstraint]) -> Vec<i32> {
    let mut result = vec![0; dimension + 1];

    let mut sorted: Vec<&TrackConstraint> = constraints.iter().collect();
    sorted.sort_by_key(|c| c.start);

    // Boundaries up to `settled` are non-decreasing.
    let mut settled = 0;
    for constraint in sorted {
        carry_forward(&mut result, &mut settled, constraint.start);
        let end = constraint.end();
        result[end] = result[end].max(result[constraint.start] + constraint.size);
    }
    carry_forward(&mut result, &mut settled, dimension);

    result
}

fn carry_forward(result: &mut [i32], settled: &mut usize, up_to: usize) {
    while *settled < up_to {
        *settled += 1;
        result[*settled] = result[*settled].max(result[*settled - 1]);
    }
}
