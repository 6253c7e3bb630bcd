//! Point data model for submitted polygon coordinates.

use serde::{Deserialize, Serialize};

use super::error::AnnotateError;

/// Bound on rasterized coordinates. Vertices are clamped to this range after
/// truncation so a far-off-canvas point cannot force the line rasterizer to
/// walk millions of pixels.
pub const MAX_PIXEL_COORD: i32 = 16_384;

/// A 2D point in image pixel coordinates (origin top-left, x growing right,
/// y growing down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The ordered vertex list submitted with one request.
///
/// Order is significant: consecutive points form polygon edges, and the last
/// point closes back to the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    pub points: Vec<Point>,
}

impl PointSet {
    /// Parses the JSON text of a `points` form field.
    ///
    /// Accepts exactly the `{"points": [{"x": .., "y": ..}, ...]}` shape with
    /// numeric coordinates. Anything else (missing fields, string coordinates,
    /// truncated JSON) is reported as [`AnnotateError::MalformedPoints`] with
    /// the parser's description of the problem.
    pub fn from_json(raw: &str) -> Result<Self, AnnotateError> {
        serde_json::from_str(raw).map_err(|err| AnnotateError::MalformedPoints(err.to_string()))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Integer pixel positions handed to the drawing primitive.
    ///
    /// Fractional coordinates truncate toward zero (`10.9` becomes `10`,
    /// `-3.7` becomes `-3`), then clamp to [`MAX_PIXEL_COORD`] in either
    /// direction.
    pub fn pixel_vertices(&self) -> Vec<(i32, i32)> {
        self.points
            .iter()
            .map(|point| (truncate(point.x), truncate(point.y)))
            .collect()
    }
}

fn truncate(coord: f32) -> i32 {
    (coord as i32).clamp(-MAX_PIXEL_COORD, MAX_PIXEL_COORD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_payload() {
        let set = PointSet::from_json(r#"{"points": [{"x": 10, "y": 20}, {"x": 5.5, "y": 0}]}"#)
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.points[0], Point::new(10.0, 20.0));
        assert_eq!(set.points[1], Point::new(5.5, 0.0));
    }

    #[test]
    fn parses_empty_point_list() {
        let set = PointSet::from_json(r#"{"points": []}"#).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn parses_payload_with_extra_fields() {
        let set = PointSet::from_json(
            r#"{"points": [{"x": 10, "y": 20, "label": "a"}], "version": 3}"#,
        )
        .unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.points[0], Point::new(10.0, 20.0));
    }

    #[test]
    fn rejects_missing_coordinate_field() {
        let err = PointSet::from_json(r#"{"points": [{"x": 10}]}"#).unwrap_err();
        match err {
            AnnotateError::MalformedPoints(detail) => assert!(detail.contains("missing field")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_string_coordinates() {
        let err = PointSet::from_json(r#"{"points": [{"x": "10", "y": 20}]}"#).unwrap_err();
        assert!(matches!(err, AnnotateError::MalformedPoints(_)));
    }

    #[test]
    fn rejects_truncated_json() {
        let err = PointSet::from_json(r#"{"points": [{"x": 1,"#).unwrap_err();
        assert!(matches!(err, AnnotateError::MalformedPoints(_)));
    }

    #[test]
    fn rejects_top_level_array() {
        let err = PointSet::from_json(r#"[{"x": 1, "y": 2}]"#).unwrap_err();
        assert!(matches!(err, AnnotateError::MalformedPoints(_)));
    }

    #[test]
    fn vertices_truncate_toward_zero() {
        let set = PointSet {
            points: vec![Point::new(10.9, 20.1), Point::new(-3.7, -0.2)],
        };
        assert_eq!(set.pixel_vertices(), vec![(10, 20), (-3, 0)]);
    }

    #[test]
    fn vertices_clamp_far_outliers() {
        let set = PointSet {
            points: vec![Point::new(1.0e9, -1.0e9)],
        };
        assert_eq!(set.pixel_vertices(), vec![(MAX_PIXEL_COORD, -MAX_PIXEL_COORD)]);
    }
}
