// camera.rs
use raylib::prelude::*;

/// Per-frame interpolation factor pulling the camera toward its target
/// position. Fixed per tick, so the smoothing speed follows the frame rate.
const EASE_FACTOR: f32 = 0.5;

/// Free-flight camera. Input moves `target_position`; the actual position
/// trails behind it through `ease`. Yaw is not eased.
pub struct FlyCamera {
    pub position: Vector3,
    pub target_position: Vector3,
    pub yaw: f32,
    pub fovy: f32,
}

impl FlyCamera {
    pub fn new(position: Vector3, fovy: f32) -> Self {
        FlyCamera {
            position,
            target_position: position,
            yaw: 0.0,
            fovy,
        }
    }

    /// Horizontal look direction. Yaw zero faces -Z.
    pub fn forward(&self) -> Vector3 {
        Vector3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    pub fn right(&self) -> Vector3 {
        Vector3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Translates the target position in the horizontal plane, decomposed
    /// along the current forward and right directions.
    pub fn pan(&mut self, forward_amount: f32, right_amount: f32) {
        self.target_position += self.forward() * forward_amount + self.right() * right_amount;
    }

    pub fn elevate(&mut self, amount: f32) {
        self.target_position.y += amount;
    }

    pub fn rotate(&mut self, delta_yaw: f32) {
        self.yaw += delta_yaw;
    }

    /// One smoothing step per frame.
    pub fn ease(&mut self) {
        self.position += (self.target_position - self.position) * EASE_FACTOR;
    }

    pub fn to_raylib(&self) -> Camera3D {
        Camera3D::perspective(
            self.position,
            self.position + self.forward(),
            Vector3::new(0.0, 1.0, 0.0),
            self.fovy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn easing_halves_the_remaining_distance() {
        let mut camera = FlyCamera::new(Vector3::new(0.0, 1.0, 16.0), 75.0);
        camera.elevate(8.0);

        let before = (camera.target_position - camera.position).length();
        camera.ease();
        let after = (camera.target_position - camera.position).length();
        assert_relative_eq!(after, before * 0.5, epsilon = 1e-6);

        for _ in 0..30 {
            camera.ease();
        }
        assert!((camera.target_position - camera.position).length() < 1e-4);
    }

    #[test]
    fn pan_follows_the_initial_heading() {
        let mut camera = FlyCamera::new(Vector3::zero(), 75.0);
        camera.pan(1.0, 0.0);
        assert_relative_eq!(camera.target_position.z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.target_position.x, 0.0, epsilon = 1e-6);

        camera.pan(0.0, 2.0);
        assert_relative_eq!(camera.target_position.x, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn pan_composes_with_yaw() {
        let mut camera = FlyCamera::new(Vector3::zero(), 75.0);
        camera.rotate(FRAC_PI_2);
        camera.pan(1.0, 0.0);
        // After a quarter turn to the left, forward points along -X.
        assert_relative_eq!(camera.target_position.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.target_position.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn elevation_is_purely_vertical() {
        let mut camera = FlyCamera::new(Vector3::new(3.0, 1.0, 5.0), 75.0);
        camera.elevate(2.5);
        assert_relative_eq!(camera.target_position.y, 3.5, epsilon = 1e-6);
        assert_relative_eq!(camera.target_position.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(camera.target_position.z, 5.0, epsilon = 1e-6);
    }
}
