use serde::{Deserialize, Serialize};

/// A WGS84 position.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside world bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }

    /// "lat, lng" with four decimals, as shown under entity names.
    pub fn display(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// South-west / north-east corners enclosing a set of points.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl Bounds {
    /// Bounds over every valid point, or `None` if there are none.
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Coordinates>) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for p in points.into_iter().filter(|p| p.is_valid()) {
            bounds = Some(match bounds {
                None => Bounds { south_west: *p, north_east: *p },
                Some(b) => Bounds {
                    south_west: Coordinates::new(b.south_west.lat.min(p.lat), b.south_west.lng.min(p.lng)),
                    north_east: Coordinates::new(b.north_east.lat.max(p.lat), b.north_east.lng.max(p.lng)),
                },
            });
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_rejects_nan_and_out_of_world() {
        assert!(Coordinates::new(20.0, 73.8).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(f64::NAN, 73.8).is_valid());
        assert!(!Coordinates::new(20.0, f64::INFINITY).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn bounds_skip_invalid_points() {
        let points = [
            Coordinates::new(19.93, 73.53),
            Coordinates::new(f64::NAN, 0.0),
            Coordinates::new(20.03, 73.85),
        ];
        let b = Bounds::enclosing(points.iter()).unwrap();
        assert_eq!(b.south_west, Coordinates::new(19.93, 73.53));
        assert_eq!(b.north_east, Coordinates::new(20.03, 73.85));
        assert!(Bounds::enclosing([].iter()).is_none());
    }

    #[test]
    fn display_uses_four_decimals() {
        assert_eq!(Coordinates::new(20.008185630454562, 73.79198282777092).display(), "20.0082, 73.7920");
    }
}
