// plane.rs
use raylib::prelude::*;

/// A wireframe plane drawn as a grid of line segments, spanned by two
/// orthonormal in-plane axes around a center point.
pub struct GridPlane {
    pub center: Vector3,
    pub axis_u: Vector3,
    pub axis_v: Vector3,
    pub half_extent: f32,
    pub divisions: i32,
    pub color: Color,
    pub visible: bool,
}

impl GridPlane {
    pub fn new(
        axis_u: Vector3,
        axis_v: Vector3,
        half_extent: f32,
        divisions: i32,
        color: Color,
    ) -> Self {
        GridPlane {
            center: Vector3::zero(),
            axis_u,
            axis_v,
            half_extent,
            divisions,
            color,
            visible: true,
        }
    }

    /// Reorients the plane to face `normal`, keeping world up as the grid's
    /// vertical axis. `normal` must not be vertical.
    pub fn face(&mut self, normal: &Vector3) {
        self.axis_u = Vector3::new(0.0, 1.0, 0.0).cross(*normal).normalized();
        self.axis_v = normal.cross(self.axis_u).normalized();
    }

    pub fn draw(&self, d: &mut impl RaylibDraw3D) {
        if !self.visible {
            return;
        }

        let step = 2.0 * self.half_extent / self.divisions as f32;
        for i in 0..=self.divisions {
            let offset = -self.half_extent + i as f32 * step;

            let u_line = self.center + self.axis_u * offset;
            d.draw_line3D(
                u_line - self.axis_v * self.half_extent,
                u_line + self.axis_v * self.half_extent,
                self.color,
            );

            let v_line = self.center + self.axis_v * offset;
            d.draw_line3D(
                v_line - self.axis_u * self.half_extent,
                v_line + self.axis_u * self.half_extent,
                self.color,
            );
        }
    }
}
