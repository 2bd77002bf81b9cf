//! Dash/gap subdivision of line segments.
//!
//! The generator walks each input segment with a cyclic dash pattern and
//! emits the boundary points where drawing starts and stops. The output is
//! consumed two points at a time: each disjoint pair is one drawn dash,
//! the space between pairs is a gap.

use crate::error::{Error, Result};
use glamx::Vec3;

/// Fixed divisor tying dash lengths to the line thickness: a pattern entry
/// of `n` advances the walk by `thickness * n / 10` world units.
pub const DASH_SCALE: f32 = 10.0;

/// Relative distance from the segment end below which a boundary counts as
/// an overrun. Keeps exact pattern fits from producing sliver dashes.
const END_EPSILON: f32 = 1.0e-5;

/// A cyclic sequence of relative dash/gap lengths.
///
/// Entries at even positions are drawn, entries at odd positions are gaps,
/// and the sequence repeats along each segment. A pattern with fewer than
/// two entries describes a solid line.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashPattern {
    lengths: Vec<f32>,
}

impl DashPattern {
    /// Creates a dash pattern from relative dash/gap lengths.
    ///
    /// Every entry must be finite and strictly positive; anything else is
    /// rejected with [`Error::InvalidDashLength`]. This also guarantees the
    /// dash walk always advances and therefore terminates.
    pub fn new(lengths: Vec<f32>) -> Result<DashPattern> {
        for &len in &lengths {
            if !len.is_finite() || len <= 0.0 {
                return Err(Error::InvalidDashLength(len));
            }
        }

        Ok(DashPattern { lengths })
    }

    /// Creates the pattern describing a solid, undashed line.
    pub fn solid() -> DashPattern {
        DashPattern::default()
    }

    /// Whether this pattern describes a solid line.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.lengths.len() < 2
    }

    /// The relative dash/gap lengths.
    #[inline]
    pub fn lengths(&self) -> &[f32] {
        &self.lengths[..]
    }
}

/// Splits line segments into dash boundary points.
///
/// `points` is consumed as disjoint pairs, one segment per pair; a trailing
/// unpaired point is ignored. For each segment the walk starts at the
/// segment start and advances by `thickness * length / 10` per pattern
/// entry, emitting every boundary that still lies on the segment. When a
/// draw phase overruns the segment (or lands within a tiny relative
/// distance of its end), the dash is closed at the segment end; an
/// overrunning gap just ends the segment.
///
/// Solid patterns return `points` verbatim, as does a non-positive
/// thickness (the walk could not advance). A zero-length segment
/// contributes its two coincident endpoints unchanged so that later
/// segments keep their draw/gap alignment.
pub fn dash_points(points: &[Vec3], thickness: f32, pattern: &DashPattern) -> Vec<Vec3> {
    if pattern.is_solid() || thickness <= 0.0 {
        return points.to_vec();
    }

    let mut out = Vec::new();

    for segment in points.chunks_exact(2) {
        let (start, end) = (segment[0], segment[1]);
        let length = (end - start).length();

        out.push(start);

        if length == 0.0 {
            out.push(end);
            continue;
        }

        // Walk in parametric coordinates along the segment. Pattern
        // entries are validated positive, so `t` strictly increases and
        // the loop is bounded.
        let mut t = 0.0;
        'walk: loop {
            for (phase, &dash) in pattern.lengths().iter().enumerate() {
                let next = t + thickness * dash / DASH_SCALE / length;

                if next < 1.0 - END_EPSILON {
                    t = next;
                    out.push(start.lerp(end, t));
                } else {
                    // Even phases are drawn: close the dash at the
                    // segment boundary. Odd phases are gaps and end the
                    // segment without an extra point.
                    if phase % 2 == 0 {
                        out.push(end);
                    }
                    break 'walk;
                }
            }
        }
    }

    out
}
