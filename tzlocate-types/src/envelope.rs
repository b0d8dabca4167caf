use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box.
///
/// Unlike `geo::Rect`, the corners are stored exactly as given and are never
/// reordered, so a malformed box (`min > max`) stays observable through
/// [`Envelope::is_valid`] instead of being silently normalised.
///
/// All containment tests are closed: points on the border are inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Minimum x coordinate (longitude)
    pub min_x: f64,
    /// Minimum y coordinate (latitude)
    pub min_y: f64,
    /// Maximum x coordinate (longitude)
    pub max_x: f64,
    /// Maximum y coordinate (latitude)
    pub max_y: f64,
}

impl Envelope {
    /// Create a new envelope from minimum and maximum coordinates.
    ///
    /// # Arguments
    ///
    /// * `min_x` - Minimum longitude/x coordinate
    /// * `min_y` - Minimum latitude/y coordinate
    /// * `max_x` - Maximum longitude/x coordinate
    /// * `max_y` - Maximum latitude/y coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use tzlocate_types::envelope::Envelope;
    ///
    /// let envelope = Envelope::new(-74.0, 40.7, -73.9, 40.8);
    /// assert!(envelope.is_valid());
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Degenerate envelope covering a single coordinate.
    pub fn from_coord(coord: Coord<f64>) -> Self {
        Self::new(coord.x, coord.y, coord.x, coord.y)
    }

    /// Create an envelope from a `geo::Rect`.
    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    /// Convert to a `geo::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            geo::coord! { x: self.min_x, y: self.min_y },
            geo::coord! { x: self.max_x, y: self.max_y },
        )
    }

    /// True when every bound is finite and `min <= max` on both axes.
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Centre of the box, used as the sort key when packing.
    pub fn center(&self) -> Coord<f64> {
        geo::coord! {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0
        }
    }

    /// Check if a coordinate lies inside or on the border of this envelope.
    ///
    /// Always false for NaN coordinates.
    #[inline]
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    #[inline]
    pub fn contains_coord(&self, coord: Coord<f64>) -> bool {
        self.contains_xy(coord.x, coord.y)
    }

    /// Check if `other` lies entirely inside this envelope.
    pub fn contains_envelope(&self, other: &Envelope) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Check if this envelope intersects with another (touching counts).
    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    /// Smallest envelope covering both inputs.
    pub fn union(&self, other: &Envelope) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Union of every envelope in the iterator, or `None` when it is empty.
    pub fn union_all<'a, I>(envelopes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Envelope>,
    {
        envelopes
            .into_iter()
            .fold(None, |acc: Option<Envelope>, e| {
                Some(match acc {
                    Some(acc) => acc.union(e),
                    None => *e,
                })
            })
    }
}

impl From<Rect<f64>> for Envelope {
    fn from(rect: Rect<f64>) -> Self {
        Self::from_rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_validity() {
        assert!(Envelope::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(Envelope::new(2.0, 2.0, 2.0, 2.0).is_valid());
        assert!(!Envelope::new(1.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Envelope::new(0.0, 1.0, 1.0, 0.0).is_valid());
        assert!(!Envelope::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
        assert!(!Envelope::new(0.0, 0.0, f64::INFINITY, 1.0).is_valid());
    }

    #[test]
    fn test_contains_is_closed() {
        let envelope = Envelope::new(0.0, 0.0, 10.0, 10.0);
        assert!(envelope.contains_xy(0.0, 0.0));
        assert!(envelope.contains_xy(10.0, 5.0));
        assert!(envelope.contains_xy(5.0, 5.0));
        assert!(!envelope.contains_xy(10.0001, 5.0));
        assert!(!envelope.contains_xy(f64::NAN, 5.0));
    }

    #[test]
    fn test_intersects_and_contains_envelope() {
        let a = Envelope::new(0.0, 0.0, 10.0, 10.0);
        let b = Envelope::new(10.0, 10.0, 20.0, 20.0);
        let c = Envelope::new(11.0, 0.0, 12.0, 1.0);
        let inner = Envelope::new(2.0, 2.0, 3.0, 3.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.contains_envelope(&inner));
        assert!(!inner.contains_envelope(&a));
    }

    #[test]
    fn test_union_all() {
        let boxes = [
            Envelope::new(0.0, 0.0, 1.0, 1.0),
            Envelope::new(-5.0, 2.0, -4.0, 3.0),
            Envelope::new(7.0, -1.0, 8.0, 0.5),
        ];
        let union = Envelope::union_all(&boxes).unwrap();
        assert_eq!(union, Envelope::new(-5.0, -1.0, 8.0, 3.0));
        assert!(Envelope::union_all(std::iter::empty::<&Envelope>()).is_none());
    }

    #[test]
    fn test_rect_round_trip_keeps_bounds() {
        let envelope = Envelope::new(-74.0, 40.7, -73.9, 40.8);
        assert_eq!(Envelope::from_rect(envelope.to_rect()), envelope);
        assert!((envelope.center().x - -73.95).abs() < 1e-9);
    }

    #[test]
    fn test_envelope_serde() {
        let envelope = Envelope::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"min_x":1.0,"min_y":2.0,"max_x":3.0,"max_y":4.0}"#);
    }
}
