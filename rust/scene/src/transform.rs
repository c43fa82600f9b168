// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar-to-world coordinate mapping

use nalgebra::Point3;
use planlift_core::Point2D;

/// Map a planar point into world space: `(x, y) -> (x * scale, 0, -y * scale)`.
///
/// The world is Y-up and right-handed; increasing planar `y` ("down" on the
/// drawing) maps to decreasing world `z` ("away from the camera").
///
/// The scale is validated once at the plan boundary; this function assumes a
/// positive, finite factor.
#[inline]
pub fn to_3d(p: Point2D, scale: f64) -> Point3<f64> {
    Point3::new(p.x * scale, 0.0, -p.y * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_maps_y_to_negative_z() {
        let world = to_3d(Point2D::new(3.0, 4.0), 1.0);
        assert_relative_eq!(world.x, 3.0);
        assert_relative_eq!(world.y, 0.0);
        assert_relative_eq!(world.z, -4.0);
    }

    #[test]
    fn test_applies_scale() {
        let world = to_3d(Point2D::new(100.0, 50.0), 0.01);
        assert_relative_eq!(world.x, 1.0);
        assert_relative_eq!(world.z, -0.5);
    }

    #[test]
    fn test_origin_is_fixed() {
        let world = to_3d(Point2D::new(0.0, 0.0), 42.0);
        assert_relative_eq!(world.x, 0.0);
        assert_relative_eq!(world.y, 0.0);
        assert_relative_eq!(world.z, 0.0);
    }
}
