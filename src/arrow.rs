// arrow.rs
use raylib::prelude::*;

const HEAD_LENGTH_FRACTION: f32 = 0.2;
const HEAD_RADIUS_FRACTION: f32 = 0.03;
const HEAD_SIDES: i32 = 12;

/// A vector drawn as a line shaft with a cone head: tail at `position`,
/// pointing along `direction` for `length` units.
pub struct Arrow {
    pub position: Vector3,
    pub direction: Vector3,
    pub length: f32,
    pub color: Color,
}

impl Arrow {
    pub fn new(direction: Vector3, position: Vector3, length: f32, color: Color) -> Self {
        Arrow {
            position,
            direction,
            length,
            color,
        }
    }

    pub fn set_direction(&mut self, direction: Vector3) {
        self.direction = direction;
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn draw(&self, d: &mut impl RaylibDraw3D) {
        let tip = self.position + self.direction * self.length;
        let head_base = tip - self.direction * (self.length * HEAD_LENGTH_FRACTION);

        d.draw_line3D(self.position, head_base, self.color);
        d.draw_cylinder_ex(
            head_base,
            tip,
            self.length * HEAD_RADIUS_FRACTION,
            0.0,
            HEAD_SIDES,
            self.color,
        );
    }
}
