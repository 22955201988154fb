//! Placement of the enlarged hover copy of a key
//!
//! The copy is scaled around the key's centre, then nudged back inside the
//! keyboard when the key sits near an edge. Placements are computed once per
//! key when the layout loads.

use super::geometry::{Point, Rect};

/// Scale applied to the hover copy when nothing else is configured
pub const DEFAULT_HOVER_SCALE: f64 = 1.5;

/// Where and how large the hover copy of a key is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPlacement {
    /// Uniform scale factor
    pub scale: f64,
    /// Translation applied after scaling, in keyboard coordinates.
    /// The copy's transform is `matrix(scale, 0, 0, scale, e, f)`.
    pub e: f64,
    pub f: f64,
    /// Absolute bounds of the scaled copy
    pub bounds: Rect,
}

impl HoverPlacement {
    /// Compute the placement of a key at `key` (relative to its group origin
    /// `origin`) on a keyboard of size `extent`
    pub fn compute(key: Rect, origin: Point, extent: (f64, f64), scale: f64) -> Self {
        let (width, height) = extent;
        let margin = (scale - 1.0) / 2.0;
        let center = key.center();

        let mut e = (1.0 - scale) * center.x + origin.x;
        let mut f = (1.0 - scale) * center.y + origin.y;

        let shift_x = margin * key.width;
        if origin.x + key.x - shift_x < 0.0 {
            e += shift_x;
        } else if origin.x + key.right() + shift_x > width {
            e -= shift_x;
        }

        let shift_y = margin * key.height;
        if origin.y + key.y - shift_y < 0.0 {
            f += shift_y;
        } else if origin.y + key.bottom() + shift_y > height {
            f -= shift_y;
        }

        let bounds = Rect::new(
            scale * key.x + e,
            scale * key.y + f,
            scale * key.width,
            scale * key.height,
        );
        Self {
            scale,
            e,
            f,
            bounds,
        }
    }

    /// SVG transform attribute for the hover copy
    pub fn transform(&self) -> String {
        format!(
            "matrix({}, 0, 0, {}, {}, {})",
            self.scale, self.scale, self.e, self.f
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: (f64, f64) = (200.0, 100.0);

    #[test]
    fn test_interior_key_is_centered() {
        let key = Rect::new(40.0, 20.0, 20.0, 20.0);
        let hover = HoverPlacement::compute(key, Point::new(10.0, 10.0), EXTENT, 1.5);

        // Centre stays on the key's absolute centre (60, 40)
        assert_eq!(hover.bounds.center(), Point::new(60.0, 40.0));
        assert_eq!(hover.bounds.width, 30.0);
        assert_eq!(hover.e, -0.5 * 50.0 + 10.0);
    }

    #[test]
    fn test_left_edge_key_is_pushed_inside() {
        let key = Rect::new(0.0, 40.0, 20.0, 20.0);
        let hover = HoverPlacement::compute(key, Point::new(0.0, 0.0), EXTENT, 1.5);
        assert_eq!(hover.bounds.x, 0.0);
    }

    #[test]
    fn test_bottom_right_key_is_pulled_inside() {
        let key = Rect::new(180.0, 80.0, 20.0, 20.0);
        let hover = HoverPlacement::compute(key, Point::new(0.0, 0.0), EXTENT, 1.5);
        assert_eq!(hover.bounds.right(), 200.0);
        assert_eq!(hover.bounds.bottom(), 100.0);
    }

    #[test]
    fn test_transform_attribute() {
        let hover = HoverPlacement {
            scale: 1.5,
            e: -5.0,
            f: 2.5,
            bounds: Rect::default(),
        };
        assert_eq!(hover.transform(), "matrix(1.5, 0, 0, 1.5, -5, 2.5)");
    }
}
