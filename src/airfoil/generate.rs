use crate::airfoil::designation::NacaDesignation;
use crate::airfoil::{Airfoil, CamberStation};
use crate::errors::{AirfoilError, Result};
use ncollide2d::na::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Upper bound on the number of stations generated for a single airfoil
pub const MAX_POINTS: usize = 100_000;

/// The distribution of x-stations along the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Evenly spaced stations, which keeps the output comparable point for point with other
    /// uniform NACA generators
    #[default]
    Uniform,

    /// Cosine spaced stations, which cluster near the leading and trailing edges where the
    /// curvature is highest
    Cosine,
}

impl Spacing {
    /// Returns `n` fractions of the chord running from 0.0 to 1.0 inclusive, `n` must be at
    /// least 2
    fn fractions(&self, n: usize) -> Vec<f64> {
        let last = (n - 1) as f64;
        (0..n)
            .map(|i| match self {
                Spacing::Uniform => i as f64 / last,
                Spacing::Cosine => 0.5 * (1.0 - (PI * i as f64 / last).cos()),
            })
            .collect()
    }
}

/// An AirfoilGenerator is an entity which can generate the x, y position of the mean camber line,
/// its slope, and the airfoil half thickness at fractions of the chord. This provides the
/// information necessary for a generator to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Return a 2D point with the position of the camber line at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> Point2<f64>;

    /// Return the slope dy/dx of the camber line at a fraction from 0.0 to 1.0
    fn camber_slope(&self, x: f64) -> f64;

    /// Return the half thickness of the airfoil, measured perpendicular to the camber line, at a
    /// fraction from 0.0 to 1.0
    fn half_thickness(&self, x: f64) -> f64;

    /// Offsets the half thickness to either side of the camber line along its normal
    fn station_at(&self, x: f64) -> CamberStation {
        let clx = self.camber_line(x);
        let theta = self.camber_slope(x).atan();
        let yt = self.half_thickness(x);
        let n = Vector2::new(-theta.sin(), theta.cos());

        CamberStation::new(clx, clx + n * yt, clx - n * yt)
    }

    /// Generates `n` stations from the leading edge to the trailing edge with the given spacing
    fn generate(&self, n: usize, spacing: Spacing) -> Result<Airfoil> {
        if n < 2 {
            return Err(AirfoilError::NotEnoughPoints { requested: n });
        }
        if n > MAX_POINTS {
            return Err(AirfoilError::TooManyPoints {
                requested: n,
                max: MAX_POINTS,
            });
        }

        let stations: Vec<CamberStation> = spacing
            .fractions(n)
            .into_iter()
            .map(|x| self.station_at(x))
            .collect();

        debug!(stations = stations.len(), ?spacing, "generated airfoil stations");
        Ok(Airfoil::from_stations(&stations))
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
#[derive(Debug, Clone)]
pub struct Naca4Digit {
    t: f64,
    chord_len: f64,
    m: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `chord_len` - the actual length of the airfoil chord
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    pub fn new(t_max: f64, chord_len: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            chord_len,
            m: max_camber,
            p: max_camber_chord,
        }
    }

    pub fn from_designation(designation: &NacaDesignation, chord_len: f64) -> Naca4Digit {
        Naca4Digit::new(
            designation.max_thickness(),
            chord_len,
            designation.max_camber(),
            designation.camber_position(),
        )
    }

    pub fn chord_len(&self) -> f64 {
        self.chord_len
    }

    /// With no camber the position digit carries no meaning, and a zero position would otherwise
    /// divide by zero in the forward branch
    fn is_symmetric(&self) -> bool {
        self.m == 0.0
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> Point2<f64> {
        let y = if self.is_symmetric() {
            0.0
        } else if x < self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p * x - x.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2)) * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2))
        };

        Point2::new(x * self.chord_len, y * self.chord_len)
    }

    fn camber_slope(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            0.0
        } else if x < self.p {
            (2.0 * self.m / self.p.powi(2)) * (self.p - x)
        } else {
            (2.0 * self.m / (1.0 - self.p).powi(2)) * (self.p - x)
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        (5.0 * self.t * self.chord_len)
            * (0.2969 * x.sqrt()
                + -0.1260 * x
                + -0.3516 * x.powi(2)
                + 0.2843 * x.powi(3)
                + -0.1015 * x.powi(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use test_case::test_case;

    #[test_case(1.000000, 0.001260)]
    #[test_case(0.840000, 0.021694)]
    #[test_case(0.680000, 0.038557)]
    #[test_case(0.520000, 0.051635)]
    #[test_case(0.360000, 0.059263)]
    #[test_case(0.200000, 0.057375)]
    #[test_case(0.040000, 0.032277)]
    fn test_naca_4_thickness(x: f64, e: f64) {
        let naca = Naca4Digit::new(0.12, 1.0, 0.0, 0.0);
        let result = naca.half_thickness(x);
        assert_relative_eq!(e, result, epsilon = 1e-3);
    }

    #[test_case(1.000000, 0.001260)]
    #[test_case(0.840000, 0.021694)]
    #[test_case(0.680000, 0.038557)]
    #[test_case(0.520000, 0.051635)]
    #[test_case(0.360000, 0.059263)]
    #[test_case(0.200000, 0.057375)]
    #[test_case(0.040000, 0.032277)]
    fn test_naca_4_thickness_scaled(x: f64, e: f64) {
        let naca = Naca4Digit::new(0.12, 2.0, 0.0, 0.0);
        let result = naca.half_thickness(x);
        assert_relative_eq!(e * 2.0, result, epsilon = 1e-3);
    }

    #[test_case(1.0000, 0.0013)]
    #[test_case(0.9000, 0.0208)]
    #[test_case(0.7000, 0.0518)]
    #[test_case(0.5000, 0.0724)]
    #[test_case(0.3000, 0.0788)]
    #[test_case(0.2000, 0.0726)]
    #[test_case(0.1000, 0.0563)]
    fn test_naca_4_camber(x: f64, e: f64) {
        let naca = Naca4Digit::new(0.12, 1.0, 0.02, 0.4);
        let t = naca.half_thickness(x);
        let p = naca.camber_line(x);
        assert_relative_eq!(e, t + p.y, epsilon = 1e-3);
    }

    #[test_case(0.0, 0.1)]
    #[test_case(0.2, 0.05)]
    #[test_case(0.4, 0.0)]
    #[test_case(0.7, -0.0333333)]
    #[test_case(1.0, -0.0666667)]
    fn test_naca_4_camber_slope(x: f64, e: f64) {
        let naca = Naca4Digit::new(0.12, 1.0, 0.02, 0.4);
        assert_relative_eq!(e, naca.camber_slope(x), epsilon = 1e-6);
    }

    #[test]
    fn test_camber_peaks_at_position() {
        let naca = Naca4Digit::new(0.12, 100.0, 0.02, 0.4);
        let peak = naca.camber_line(0.4);
        assert_relative_eq!(40.0, peak.x, epsilon = 1e-9);
        assert_relative_eq!(2.0, peak.y, epsilon = 1e-9);
        assert_relative_eq!(0.0, naca.camber_line(1.0).y, epsilon = 1e-9);
    }

    #[test]
    fn test_camber_continuous_at_position() {
        let naca = Naca4Digit::new(0.12, 1.0, 0.04, 0.4);
        let before = naca.camber_line(0.4 - 1e-9);
        let after = naca.camber_line(0.4);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-8);
    }

    #[test]
    fn test_symmetric_zero_position_is_finite() {
        let naca = Naca4Digit::new(0.0, 100.0, 0.0, 0.0);
        let airfoil = naca.generate(11, Spacing::Uniform).unwrap();
        for p in airfoil.upper.iter().chain(airfoil.lower.iter()) {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert_relative_eq!(0.0, p.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cambered_zero_position_uses_rear_branch() {
        let naca = Naca4Digit::new(0.12, 1.0, 0.02, 0.0);
        assert_relative_eq!(0.02, naca.camber_line(0.0).y, epsilon = 1e-12);
        assert_relative_eq!(0.0, naca.camber_line(1.0).y, epsilon = 1e-12);
        assert!(naca.camber_slope(0.5).is_finite());
    }

    #[test]
    fn test_symmetric_camber_is_zero() {
        let naca = Naca4Digit::new(0.12, 100.0, 0.0, 0.4);
        let airfoil = naca.generate(21, Spacing::Uniform).unwrap();
        for c in airfoil.camber.iter() {
            assert_relative_eq!(0.0, c.y, epsilon = 1e-12);
        }
        for (u, l) in airfoil.upper.iter().zip(airfoil.lower.iter()) {
            assert_relative_eq!(u.x, l.x, epsilon = 1e-12);
            assert_relative_eq!(u.y, -l.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_station_is_perpendicular_to_camber() {
        let naca = Naca4Digit::new(0.12, 1.0, 0.04, 0.4);
        let s = naca.station_at(0.25);
        let contact = s.upper - s.lower;
        let tangent = Vector2::new(1.0, naca.camber_slope(0.25));
        assert_relative_eq!(0.0, contact.dot(&tangent), epsilon = 1e-12);
        assert_relative_eq!(2.0 * naca.half_thickness(0.25), s.thickness(), epsilon = 1e-12);
    }

    #[test_case(Spacing::Uniform)]
    #[test_case(Spacing::Cosine)]
    fn test_edges_placed_on_chord(spacing: Spacing) {
        let naca = Naca4Digit::new(0.12, 100.0, 0.02, 0.4);
        let airfoil = naca.generate(7, spacing).unwrap();
        assert_eq!(7, airfoil.len());
        assert_relative_eq!(0.0, airfoil.camber[0].x, epsilon = 1e-9);
        assert_relative_eq!(100.0, airfoil.camber[6].x, epsilon = 1e-9);
    }

    #[test]
    fn test_uniform_fractions() {
        let f = Spacing::Uniform.fractions(5);
        assert_eq!(vec![0.0, 0.25, 0.5, 0.75, 1.0], f);
    }

    #[test]
    fn test_cosine_fractions_cluster_at_edges() {
        let f = Spacing::Cosine.fractions(9);
        assert_eq!(9, f.len());
        assert_relative_eq!(0.0, f[0], epsilon = 1e-12);
        assert_relative_eq!(0.5, f[4], epsilon = 1e-12);
        assert_relative_eq!(1.0, f[8], epsilon = 1e-12);
        assert!(f[1] < 0.125);
        assert!(f.windows(2).all(|w| w[0] < w[1]));
    }

    #[test_case(0)]
    #[test_case(1)]
    fn test_generate_rejects_too_few_stations(n: usize) {
        let naca = Naca4Digit::new(0.12, 100.0, 0.0, 0.0);
        let result = naca.generate(n, Spacing::Uniform);
        assert!(matches!(
            result,
            Err(AirfoilError::NotEnoughPoints { requested }) if requested == n
        ));
    }

    #[test_case(MAX_POINTS + 1)]
    #[test_case(usize::MAX)]
    fn test_generate_rejects_too_many_stations(n: usize) {
        let naca = Naca4Digit::new(0.12, 100.0, 0.02, 0.4);
        let result = naca.generate(n, Spacing::Cosine);
        assert!(matches!(
            result,
            Err(AirfoilError::TooManyPoints { requested, max }) if requested == n && max == MAX_POINTS
        ));
    }

    #[test]
    fn test_generate_accepts_max_stations() {
        let naca = Naca4Digit::new(0.12, 100.0, 0.02, 0.4);
        let airfoil = naca.generate(MAX_POINTS, Spacing::Uniform).unwrap();
        assert_eq!(MAX_POINTS, airfoil.len());
        assert_relative_eq!(100.0, airfoil.camber[MAX_POINTS - 1].x, epsilon = 1e-9);
    }

    #[test]
    fn test_random_sections_are_finite() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let d = NacaDesignation::new(
                rng.gen_range(0..10),
                rng.gen_range(0..10),
                rng.gen_range(0..41),
            );
            let chord = rng.gen_range(1.0..500.0);
            let n = rng.gen_range(2..200);
            let naca = Naca4Digit::from_designation(&d, chord);
            let outline = naca.generate(n, Spacing::Uniform).unwrap().to_outline();

            assert_eq!(2 * n - 1, outline.len());
            assert!(outline.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}
