use crate::geometry::distances2::dist;
use ncollide2d::na::Point2;

pub mod designation;
pub mod generate;

/// The evaluated airfoil geometry at a single x-station along the chord
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }

    /// The straight line distance between the upper and lower surface points
    pub fn thickness(&self) -> f64 {
        dist(&self.upper, &self.lower)
    }
}

/// Station-ordered airfoil surfaces, running from the leading edge to the trailing edge
pub struct Airfoil {
    pub camber: Vec<Point2<f64>>,
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.camber.len()
    }

    pub fn is_empty(&self) -> bool {
        self.camber.is_empty()
    }

    /// Builds the outline traced by the cutter: the upper surface from the trailing edge forward
    /// to the leading edge, then the lower surface back towards the trailing edge. The lower
    /// surface skips its leading edge station, which coincides with the last upper point, so an
    /// airfoil with n stations produces 2n - 1 points. The outline is not explicitly closed.
    pub fn to_outline(&self) -> Vec<Point2<f64>> {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().cloned().collect();
        result.extend(self.lower.iter().skip(1).cloned());
        result
    }

    /// The largest distance between matching upper and lower surface points
    pub fn max_thickness(&self) -> f64 {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .map(|(u, l)| dist(u, l))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_airfoil() -> Airfoil {
        let stations = vec![
            CamberStation::new(
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 0.0),
            ),
            CamberStation::new(
                Point2::new(1.0, 0.1),
                Point2::new(1.0, 0.5),
                Point2::new(1.0, -0.3),
            ),
            CamberStation::new(
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 0.1),
                Point2::new(2.0, -0.1),
            ),
        ];
        Airfoil::from_stations(&stations)
    }

    #[test]
    fn test_outline_ordering() {
        let outline = sample_airfoil().to_outline();
        let expected = vec![
            Point2::new(2.0, 0.1),
            Point2::new(1.0, 0.5),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, -0.3),
            Point2::new(2.0, -0.1),
        ];

        assert_eq!(expected, outline);
    }

    #[test]
    fn test_outline_length() {
        let airfoil = sample_airfoil();
        assert_eq!(2 * airfoil.len() - 1, airfoil.to_outline().len());
    }

    #[test]
    fn test_max_thickness() {
        assert_relative_eq!(0.8, sample_airfoil().max_thickness(), epsilon = 1e-12);
    }
}
