use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box in absolute diagram coordinates, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterPosition {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ClusterPosition {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when `pt` sits horizontally over the box and on or above its top edge.
    /// `tolerance` lets points slightly below the edge still count.
    pub fn is_point_just_upper(&self, pt: Point, tolerance: f64) -> bool {
        pt.x >= self.min_x && pt.x <= self.max_x && pt.y <= self.min_y + tolerance
    }
}

/// Closed polygon; the last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translate(dx, dy)).collect(),
        }
    }

    pub fn bounds(&self) -> Option<ClusterPosition> {
        let first = self.points.first()?;
        let mut bounds = ClusterPosition::new(first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_upper_requires_horizontal_overlap() {
        let b = ClusterPosition::new(10.0, 20.0, 110.0, 60.0);
        assert!(b.is_point_just_upper(Point::new(50.0, 20.0), 0.0));
        assert!(b.is_point_just_upper(Point::new(10.0, 5.0), 0.0));
        assert!(!b.is_point_just_upper(Point::new(5.0, 20.0), 0.0));
        assert!(!b.is_point_just_upper(Point::new(50.0, 21.0), 0.0));
        assert!(b.is_point_just_upper(Point::new(50.0, 21.0), 1.5));
    }

    #[test]
    fn polygon_translation_and_bounds() {
        let poly = Polygon::new(vec![
            Point::new(10.0, 10.0),
            Point::new(30.0, 12.0),
            Point::new(20.0, 40.0),
        ]);
        let moved = poly.translate(-10.0, -10.0);
        assert_eq!(moved.points()[0], Point::new(0.0, 0.0));
        let bounds = moved.bounds().unwrap();
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 30.0);
        assert!(Polygon::default().bounds().is_none());
    }
}
