use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A geographic query coordinate in latitude/longitude order.
///
/// Region geometry is stored in `(x = longitude, y = latitude)` order, which
/// is the reverse of how callers usually write coordinates. `LatLng` keeps the
/// human order at the API boundary and performs the swap in one place.
///
/// # Examples
///
/// ```
/// use tzlocate_types::coordinate::LatLng;
///
/// let dc = LatLng::new(38.8044, -77.0920);
/// let coord = dc.to_coord();
/// assert_eq!(coord.x, -77.0920);
/// assert_eq!(coord.y, 38.8044);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar coordinate with `x = longitude`, `y = latitude`.
    pub fn to_coord(&self) -> Coord<f64> {
        geo::coord! { x: self.longitude, y: self.latitude }
    }

    pub fn to_point(&self) -> Point<f64> {
        Point::from(self.to_coord())
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        value.to_coord()
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}
