// slab.rs
use raylib::prelude::*;

/// A translucent box marking one of the two media. The box is thin along
/// `normal` and reoriented with the incidence plane so it always contains
/// the ray.
pub struct MediumSlab {
    pub center: Vector3,
    pub axis_u: Vector3,
    pub axis_v: Vector3,
    pub normal: Vector3,
    pub half_u: f32,
    pub half_v: f32,
    pub half_n: f32,
    pub color: Color,
    pub visible: bool,
}

impl MediumSlab {
    pub fn new(center: Vector3, half_u: f32, half_v: f32, half_n: f32, color: Color) -> Self {
        MediumSlab {
            center,
            axis_u: Vector3::new(1.0, 0.0, 0.0),
            axis_v: Vector3::new(0.0, 1.0, 0.0),
            normal: Vector3::new(0.0, 0.0, 1.0),
            half_u,
            half_v,
            half_n,
            color,
            visible: true,
        }
    }

    /// Turns the thin axis of the slab toward `normal`, keeping world up as
    /// the vertical axis. `normal` must not be vertical.
    pub fn face(&mut self, normal: &Vector3) {
        self.normal = *normal;
        self.axis_u = Vector3::new(0.0, 1.0, 0.0).cross(*normal).normalized();
        self.axis_v = normal.cross(self.axis_u).normalized();
    }

    fn corner(&self, su: f32, sv: f32, sn: f32) -> Vector3 {
        self.center
            + self.axis_u * (su * self.half_u)
            + self.axis_v * (sv * self.half_v)
            + self.normal * (sn * self.half_n)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw3D) {
        if !self.visible {
            return;
        }

        // The two large faces. Each quad is drawn with both windings so the
        // fill reads from either side of the slab.
        for sn in [-1.0, 1.0] {
            let a = self.corner(-1.0, -1.0, sn);
            let b = self.corner(1.0, -1.0, sn);
            let c = self.corner(1.0, 1.0, sn);
            let e = self.corner(-1.0, 1.0, sn);

            d.draw_triangle3D(a, b, c, self.color);
            d.draw_triangle3D(a, c, e, self.color);
            d.draw_triangle3D(c, b, a, self.color);
            d.draw_triangle3D(e, c, a, self.color);
        }

        // Box outline, slightly more opaque than the fill.
        let outline = Color::new(self.color.r, self.color.g, self.color.b, 120);
        for (sv, sn) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            d.draw_line3D(self.corner(-1.0, sv, sn), self.corner(1.0, sv, sn), outline);
        }
        for (su, sn) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            d.draw_line3D(self.corner(su, -1.0, sn), self.corner(su, 1.0, sn), outline);
        }
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            d.draw_line3D(self.corner(su, sv, -1.0), self.corner(su, sv, 1.0), outline);
        }
    }
}
