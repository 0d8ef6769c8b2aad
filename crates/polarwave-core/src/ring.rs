//! Polar ring mapping of modulated samples.

use std::f64::consts::PI;

use crate::geometry::{Point, PolarPoint};
use crate::sampler::Sample;

/// Geometry of the closed ring a sampled wave is wrapped onto.
///
/// The mapping produces a closed double loop: a wave-perturbed half circle
/// followed by an undisturbed half circle back to the start, so the output
/// can be stroked as one continuous contour without re-drawing wave detail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMapper {
    /// Radius of the undisturbed ring, in viewport-relative units.
    pub base_radius: f64,
    /// Divisor applied to sample values before they perturb the radius.
    pub detail_scale: f64,
    /// Horizontal recentering applied after projection.
    pub recenter_x: f64,
}

impl Default for RingMapper {
    fn default() -> Self {
        Self {
            base_radius: 0.2,
            detail_scale: 50.0,
            recenter_x: 0.5,
        }
    }
}

impl RingMapper {
    /// Wraps wave samples onto the closed ring.
    ///
    /// The first half maps each sample to `angle = pi + x*pi` with the radius
    /// perturbed by `y / detail_scale`; the second half retraces
    /// `angle = x*pi` at the constant base radius. Output length is twice the
    /// input length.
    pub fn map(&self, samples: &[Sample]) -> Vec<Point> {
        let mut points = Vec::with_capacity(samples.len() * 2);

        for sample in samples {
            let polar = PolarPoint::new(
                PI + sample.x * PI,
                self.base_radius + sample.y / self.detail_scale,
            );
            points.push(self.project(polar));
        }

        for sample in samples {
            let polar = PolarPoint::new(sample.x * PI, self.base_radius);
            points.push(self.project(polar));
        }

        points
    }

    fn project(&self, polar: PolarPoint) -> Point {
        let mut point = polar.to_cartesian();
        point.x += self.recenter_x;
        point
    }
}
