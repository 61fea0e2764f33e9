//! Pointer-driven card effects: 3D tilt and the hover spotlight.

use crate::cursor::Point;

/// Maximum rotation at the card edges, in degrees.
pub const MAX_TILT_DEG: f64 = 5.0;

/// Viewport-relative rect as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Tilt {
    /// Tilt toward the pointer. `None` for a collapsed rect.
    pub fn from_pointer(rect: ElementRect, pointer: Point) -> Option<Tilt> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let rx = (pointer.x - rect.left) / rect.width;
        let ry = (pointer.y - rect.top) / rect.height;
        Some(Tilt {
            x_deg: (ry - 0.5) * -2.0 * MAX_TILT_DEG,
            y_deg: (rx - 0.5) * 2.0 * MAX_TILT_DEG,
        })
    }

    pub fn css(&self) -> String {
        format!(
            "perspective(700px) rotateX({}deg) rotateY({}deg) scale3d(.95, .95, .95)",
            self.x_deg, self.y_deg
        )
    }
}

/// Pointer position inside the card, origin at its top-left corner.
pub fn spotlight(rect: ElementRect, pointer: Point) -> Point {
    Point::new(pointer.x - rect.left, pointer.y - rect.top)
}

pub fn spotlight_vars(local: Point) -> String {
    format!("--mouse-x: {}px; --mouse-y: {}px;", local.x, local.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ElementRect = ElementRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_center_is_flat() {
        let tilt = Tilt::from_pointer(RECT, Point::new(200.0, 100.0)).unwrap();
        assert_eq!(tilt.x_deg, 0.0);
        assert_eq!(tilt.y_deg, 0.0);
    }

    #[test]
    fn test_edges_reach_max_tilt() {
        let top_left = Tilt::from_pointer(RECT, Point::new(100.0, 50.0)).unwrap();
        assert_eq!(top_left.x_deg, MAX_TILT_DEG);
        assert_eq!(top_left.y_deg, -MAX_TILT_DEG);

        let bottom_right = Tilt::from_pointer(RECT, Point::new(300.0, 150.0)).unwrap();
        assert_eq!(bottom_right.x_deg, -MAX_TILT_DEG);
        assert_eq!(bottom_right.y_deg, MAX_TILT_DEG);
    }

    #[test]
    fn test_collapsed_rect() {
        let rect = ElementRect {
            width: 0.0,
            ..RECT
        };
        assert_eq!(Tilt::from_pointer(rect, Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_css() {
        let tilt = Tilt {
            x_deg: 2.5,
            y_deg: -1.0,
        };
        assert_eq!(
            tilt.css(),
            "perspective(700px) rotateX(2.5deg) rotateY(-1deg) scale3d(.95, .95, .95)"
        );
    }

    #[test]
    fn test_spotlight_is_local() {
        let local = spotlight(RECT, Point::new(130.0, 70.0));
        assert_eq!(local, Point::new(30.0, 20.0));
        assert_eq!(spotlight_vars(local), "--mouse-x: 30px; --mouse-y: 20px;");
    }
}
