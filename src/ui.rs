// ui.rs
use raylib::prelude::*;
use std::f32::consts::PI;

const LABEL_SIZE: i32 = 16;
const KNOB_RADIUS: f32 = 7.0;

/// Horizontal slider dragged with the mouse. The raw value range is
/// arbitrary; callers map it to whatever unit they need.
pub struct Slider {
    pub bounds: Rectangle,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub value: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(bounds: Rectangle, label: &'static str, min: f32, max: f32, value: f32) -> Self {
        Slider {
            bounds,
            label,
            min,
            max,
            value,
            dragging: false,
        }
    }

    pub fn fraction(&self) -> f32 {
        (self.value - self.min) / (self.max - self.min)
    }

    /// Polls the mouse. Returns true when the value changed this frame.
    pub fn update(&mut self, rl: &RaylibHandle) -> bool {
        let mouse = rl.get_mouse_position();

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
            && self.bounds.check_collision_point_rec(mouse)
        {
            self.dragging = true;
        }
        if !rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let t = ((mouse.x - self.bounds.x) / self.bounds.width).clamp(0.0, 1.0);
        let new_value = self.min + t * (self.max - self.min);
        if new_value != self.value {
            self.value = new_value;
            true
        } else {
            false
        }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        d.draw_text(
            self.label,
            self.bounds.x as i32,
            self.bounds.y as i32 - LABEL_SIZE - 2,
            LABEL_SIZE,
            Color::LIGHTGRAY,
        );

        let track_y = self.bounds.y + self.bounds.height * 0.5;
        d.draw_rectangle_rec(
            Rectangle::new(self.bounds.x, track_y - 2.0, self.bounds.width, 4.0),
            Color::new(90, 90, 90, 255),
        );

        let knob_x = self.bounds.x + self.fraction().clamp(0.0, 1.0) * self.bounds.width;
        d.draw_circle_v(Vector2::new(knob_x, track_y), KNOB_RADIUS, Color::LIGHTGRAY);

        d.draw_text(
            &format!("{:.2}", self.value),
            (self.bounds.x + self.bounds.width + 10.0) as i32,
            track_y as i32 - LABEL_SIZE / 2,
            LABEL_SIZE,
            Color::LIGHTGRAY,
        );
    }
}

/// Click-to-toggle checkbox.
pub struct Checkbox {
    pub bounds: Rectangle,
    pub label: &'static str,
    pub checked: bool,
}

impl Checkbox {
    pub fn new(bounds: Rectangle, label: &'static str, checked: bool) -> Self {
        Checkbox {
            bounds,
            label,
            checked,
        }
    }

    /// Returns true when the box was toggled this frame.
    pub fn update(&mut self, rl: &RaylibHandle) -> bool {
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
            && self.bounds.check_collision_point_rec(rl.get_mouse_position())
        {
            self.checked = !self.checked;
            return true;
        }
        false
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        d.draw_rectangle_lines(
            self.bounds.x as i32,
            self.bounds.y as i32,
            self.bounds.width as i32,
            self.bounds.height as i32,
            Color::LIGHTGRAY,
        );
        if self.checked {
            d.draw_rectangle(
                self.bounds.x as i32 + 3,
                self.bounds.y as i32 + 3,
                self.bounds.width as i32 - 6,
                self.bounds.height as i32 - 6,
                Color::LIGHTGRAY,
            );
        }
        d.draw_text(
            self.label,
            (self.bounds.x + self.bounds.width + 8.0) as i32,
            self.bounds.y as i32 + 1,
            LABEL_SIZE,
            Color::LIGHTGRAY,
        );
    }
}

/// Which groups of controls changed during a frame. Each group feeds one
/// scene setter.
pub struct PanelChanges {
    pub angles: bool,
    pub indices: bool,
    pub visibility: bool,
}

/// Control column on the right fifth of the window, mirroring a page with
/// the rendering surface on the left 80% and the inputs beside it.
pub struct ControlPanel {
    pub bounds: Rectangle,
    pub polar: Slider,
    pub azimuth: Slider,
    pub eta_entry: Slider,
    pub eta_exit: Slider,
    pub collision_plane: Checkbox,
    pub media: Checkbox,
}

impl ControlPanel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        window_width: i32,
        window_height: i32,
        polar_raw: f32,
        azimuth_raw: f32,
        eta_entry: f32,
        eta_exit: f32,
        show_collision_plane: bool,
        show_media: bool,
    ) -> Self {
        let panel_width = window_width as f32 * 0.2;
        let x = window_width as f32 - panel_width;
        let slider_x = x + 12.0;
        let slider_width = panel_width - 70.0;

        let row = |i: f32| 64.0 + i * 56.0;

        ControlPanel {
            bounds: Rectangle::new(x, 0.0, panel_width, window_height as f32),
            polar: Slider::new(
                Rectangle::new(slider_x, row(0.0), slider_width, 16.0),
                "entry angle (polar)",
                0.0,
                100.0,
                polar_raw,
            ),
            azimuth: Slider::new(
                Rectangle::new(slider_x, row(1.0), slider_width, 16.0),
                "entry angle (azimuth)",
                0.0,
                100.0,
                azimuth_raw,
            ),
            eta_entry: Slider::new(
                Rectangle::new(slider_x, row(2.0), slider_width, 16.0),
                "index of entry medium",
                0.0,
                4.0,
                eta_entry,
            ),
            eta_exit: Slider::new(
                Rectangle::new(slider_x, row(3.0), slider_width, 16.0),
                "index of exit medium",
                0.0,
                4.0,
                eta_exit,
            ),
            collision_plane: Checkbox::new(
                Rectangle::new(slider_x, row(4.0), 18.0, 18.0),
                "collision plane",
                show_collision_plane,
            ),
            media: Checkbox::new(
                Rectangle::new(slider_x, row(4.0) + 30.0, 18.0, 18.0),
                "media",
                show_media,
            ),
        }
    }

    /// Polar angle in radians from the raw 0-100 slider value.
    pub fn polar_angle(&self) -> f32 {
        self.polar.value / 100.0 * PI / 2.0
    }

    /// Azimuthal angle in radians from the raw 0-100 slider value.
    pub fn azimuth_angle(&self) -> f32 {
        self.azimuth.value / 100.0 * PI * 2.0
    }

    pub fn update(&mut self, rl: &RaylibHandle) -> PanelChanges {
        // Every widget is polled each frame so drag state stays current.
        let polar = self.polar.update(rl);
        let azimuth = self.azimuth.update(rl);
        let eta_entry = self.eta_entry.update(rl);
        let eta_exit = self.eta_exit.update(rl);
        let collision_plane = self.collision_plane.update(rl);
        let media = self.media.update(rl);

        PanelChanges {
            angles: polar || azimuth,
            indices: eta_entry || eta_exit,
            visibility: collision_plane || media,
        }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        d.draw_rectangle_rec(self.bounds, Color::new(40, 40, 40, 230));
        d.draw_text(
            "Snell's Law",
            (self.bounds.x + 12.0) as i32,
            14,
            20,
            Color::WHITE,
        );

        self.polar.draw(d);
        self.azimuth.draw(d);
        self.eta_entry.draw(d);
        self.eta_exit.draw(d);
        self.collision_plane.draw(d);
        self.media.draw(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn panel() -> ControlPanel {
        ControlPanel::new(1300, 900, 0.0, 0.0, 1.0, 1.0, true, true)
    }

    #[test]
    fn angle_sliders_map_the_raw_range() {
        let mut p = panel();
        assert_relative_eq!(p.polar_angle(), 0.0, epsilon = 1e-6);

        p.polar.value = 50.0;
        assert_relative_eq!(p.polar_angle(), FRAC_PI_4, epsilon = 1e-6);
        p.polar.value = 100.0;
        assert_relative_eq!(p.polar_angle(), FRAC_PI_2, epsilon = 1e-6);

        p.azimuth.value = 100.0;
        assert_relative_eq!(p.azimuth_angle(), 2.0 * PI, epsilon = 1e-5);
    }

    #[test]
    fn slider_fraction_spans_its_range() {
        let s = Slider::new(Rectangle::new(0.0, 0.0, 100.0, 16.0), "s", 0.0, 4.0, 1.0);
        assert_relative_eq!(s.fraction(), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn index_sliders_carry_the_value_directly() {
        let p = panel();
        assert_relative_eq!(p.eta_entry.value, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.eta_exit.max, 4.0, epsilon = 1e-6);
        // Zero stays reachable; a zero exit index is deliberately not
        // guarded anywhere downstream.
        assert_relative_eq!(p.eta_exit.min, 0.0, epsilon = 1e-6);
    }
}
