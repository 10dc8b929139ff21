use geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Map any longitude onto `[-180, 180]`.
///
/// Values already inside the range are returned unchanged, so both `-180` and
/// `180` are preserved.
///
/// # Examples
///
/// ```
/// use geohash_query_types::bbox::wrap_longitude;
///
/// assert_eq!(wrap_longitude(182.0), -178.0);
/// assert_eq!(wrap_longitude(-270.0), 90.0);
/// assert_eq!(wrap_longitude(180.0), 180.0);
/// ```
pub fn wrap_longitude(degrees: f64) -> f64 {
    if (-180.0..=180.0).contains(&degrees) {
        return degrees;
    }
    let adjusted = degrees + 180.0;
    if adjusted > 0.0 {
        adjusted % 360.0 - 180.0
    } else {
        180.0 - (-adjusted % 360.0)
    }
}

/// A geographic bounding box given by its four edges in degrees.
///
/// Unlike `geo::Rect`, the western edge may lie east of the eastern edge: such a
/// box crosses the antimeridian and covers `[west, 180] ∪ [-180, east]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    /// Western edge (longitude)
    pub west: f64,
    /// Southern edge (latitude)
    pub south: f64,
    /// Eastern edge (longitude)
    pub east: f64,
    /// Northern edge (latitude)
    pub north: f64,
}

impl GeoBoundingBox {
    /// Create a new bounding box from its edges.
    ///
    /// # Arguments
    ///
    /// * `west` - Western longitude
    /// * `south` - Southern latitude
    /// * `east` - Eastern longitude (less than `west` when crossing the antimeridian)
    /// * `north` - Northern latitude
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_query_types::bbox::GeoBoundingBox;
    ///
    /// let manhattan = GeoBoundingBox::new(-74.0479, 40.6829, -73.9067, 40.8820);
    /// assert!(!manhattan.crosses_antimeridian());
    /// ```
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Create a bounding box covering every longitude between two latitudes.
    pub fn full_width(south: f64, north: f64) -> Self {
        Self::new(-180.0, south, 180.0, north)
    }

    /// Create a bounding box from a `geo::Rect` (x = longitude, y = latitude).
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    /// Convert into a `geo::Rect`, or `None` when the box crosses the antimeridian.
    pub fn to_rect(&self) -> Option<Rect> {
        if self.crosses_antimeridian() {
            return None;
        }
        Some(Rect::new(
            geo::coord! { x: self.west, y: self.south },
            geo::coord! { x: self.east, y: self.north },
        ))
    }

    /// Whether the box wraps around the ±180° meridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Whether the box spans every longitude.
    pub fn is_full_width(&self) -> bool {
        self.width() >= 360.0
    }

    /// Longitudinal extent in degrees, accounting for antimeridian wrap.
    pub fn width(&self) -> f64 {
        if self.crosses_antimeridian() {
            self.east - self.west + 360.0
        } else {
            self.east - self.west
        }
    }

    /// Latitudinal extent in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Get the center point of the bounding box.
    pub fn center(&self) -> Point {
        Point::new(
            wrap_longitude(self.west + self.width() / 2.0),
            (self.south + self.north) / 2.0,
        )
    }

    /// Check if a point (x = longitude, y = latitude) lies within this box.
    pub fn contains_point(&self, point: &Point) -> bool {
        let (lon, lat) = (point.x(), point.y());
        if lat < self.south || lat > self.north {
            return false;
        }
        if self.crosses_antimeridian() {
            lon >= self.west || lon <= self.east
        } else {
            lon >= self.west && lon <= self.east
        }
    }

    /// Split a box crossing the antimeridian into its eastern-hemisphere part
    /// `[west, 180]` and western-hemisphere part `[-180, east]`.
    ///
    /// Boxes that do not cross are returned as the single element.
    pub fn split_antimeridian(&self) -> Vec<GeoBoundingBox> {
        if !self.crosses_antimeridian() {
            return vec![*self];
        }
        vec![
            Self::new(self.west, self.south, 180.0, self.north),
            Self::new(-180.0, self.south, self.east, self.north),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_longitude() {
        let values = [
            (1.0, 1.0),
            (0.0, 0.0),
            (180.0, 180.0),
            (-180.0, -180.0),
            (182.0, -178.0),
            (270.0, -90.0),
            (360.0, 0.0),
            (540.0, -180.0),
            (630.0, -90.0),
            (720.0, 0.0),
            (810.0, 90.0),
            (-360.0, 0.0),
            (-182.0, 178.0),
            (-270.0, 90.0),
            (-450.0, -90.0),
            (-540.0, 180.0),
            (-630.0, 90.0),
            (1080.0, 0.0),
            (-1080.0, 0.0),
        ];

        for (input, expected) in values {
            let wrapped = wrap_longitude(input);
            assert!(
                (wrapped - expected).abs() < 1e-6,
                "wrap_longitude({input}) = {wrapped}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_bbox_dimensions() {
        let bbox = GeoBoundingBox::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 5.0);
        assert!(!bbox.crosses_antimeridian());
    }

    #[test]
    fn test_bbox_crossing_dimensions() {
        let bbox = GeoBoundingBox::new(170.0, -10.0, -170.0, 10.0);
        assert!(bbox.crosses_antimeridian());
        assert_eq!(bbox.width(), 20.0);

        let center = bbox.center();
        assert_eq!(center.x(), 180.0);
        assert_eq!(center.y(), 0.0);
    }

    #[test]
    fn test_bbox_contains() {
        let bbox = GeoBoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(bbox.contains_point(&Point::new(5.0, 5.0)));
        assert!(bbox.contains_point(&Point::new(0.0, 0.0)));
        assert!(bbox.contains_point(&Point::new(10.0, 10.0)));
        assert!(!bbox.contains_point(&Point::new(-1.0, 5.0)));
        assert!(!bbox.contains_point(&Point::new(5.0, 11.0)));

        let pacific = GeoBoundingBox::new(170.0, -10.0, -170.0, 10.0);
        assert!(pacific.contains_point(&Point::new(175.0, 0.0)));
        assert!(pacific.contains_point(&Point::new(-175.0, 0.0)));
        assert!(!pacific.contains_point(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_split_antimeridian() {
        let bbox = GeoBoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(bbox.split_antimeridian(), vec![bbox]);

        let pacific = GeoBoundingBox::new(170.0, -10.0, -170.0, 10.0);
        let parts = pacific.split_antimeridian();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], GeoBoundingBox::new(170.0, -10.0, 180.0, 10.0));
        assert_eq!(parts[1], GeoBoundingBox::new(-180.0, -10.0, -170.0, 10.0));
        assert!(parts.iter().all(|p| !p.crosses_antimeridian()));
    }

    #[test]
    fn test_rect_conversion() {
        let bbox = GeoBoundingBox::new(-74.0, 40.7, -73.9, 40.8);
        let rect = bbox.to_rect().expect("non-crossing box converts");
        assert_eq!(GeoBoundingBox::from_rect(rect), bbox);

        let pacific = GeoBoundingBox::new(170.0, -10.0, -170.0, 10.0);
        assert!(pacific.to_rect().is_none());
    }

    #[test]
    fn test_full_width() {
        let bbox = GeoBoundingBox::full_width(-5.0, 5.0);
        assert!(bbox.is_full_width());
        assert!(!bbox.crosses_antimeridian());
        assert_eq!(bbox.split_antimeridian().len(), 1);
    }
}
