// scene.rs
use raylib::prelude::*;

use crate::arrow::Arrow;
use crate::plane::GridPlane;
use crate::refraction::{self, IncidenceFrame, Refraction};
use crate::slab::MediumSlab;

const ARROW_LENGTH: f32 = 10.0;
const PLANE_HALF_EXTENT: f32 = 50.0;
const PLANE_DIVISIONS: i32 = 100;
const SLAB_HALF_WIDTH: f32 = 50.0;
const SLAB_HALF_HEIGHT: f32 = 25.0;
const SLAB_HALF_DEPTH: f32 = 0.5;

/// All mutable session state: the physics parameters, the vectors derived
/// from them, and the visual proxies that mirror both. Setters recompute
/// exactly the derived state they affect and push it into the proxies,
/// which are updated in place and never recreated.
pub struct SceneState {
    pub entry_polar: f32,
    pub entry_azimuth: f32,
    pub eta_entry: f32,
    pub eta_exit: f32,

    /// Interface normal, pointing into the entry medium. Fixed for the
    /// whole session.
    pub normal: Vector3,

    pub entry_dir: Vector3,
    pub frame: IncidenceFrame,
    pub exit: Refraction,

    pub normal_arrow: Arrow,
    pub entry_arrow: Arrow,
    pub cross_arrow: Arrow,
    pub side_arrow: Arrow,
    pub exit_arrow: Arrow,
    pub surface_plane: GridPlane,
    pub collision_plane: GridPlane,
    pub entry_medium: MediumSlab,
    pub exit_medium: MediumSlab,
}

impl SceneState {
    pub fn new(polar: f32, azimuth: f32, eta_entry: f32, eta_exit: f32) -> Self {
        let normal = Vector3::new(0.0, 1.0, 0.0);
        let entry_dir = refraction::direction_from_angles(polar, azimuth);
        let frame = IncidenceFrame::new(&entry_dir, &normal);
        let exit = refraction::refract_in_frame(&entry_dir, &normal, &frame, eta_entry / eta_exit);

        let mut scene = SceneState {
            entry_polar: polar,
            entry_azimuth: azimuth,
            eta_entry,
            eta_exit,
            normal,
            entry_dir,
            frame,
            exit,
            normal_arrow: Arrow::new(
                normal,
                Vector3::zero(),
                ARROW_LENGTH,
                Color::new(34, 34, 34, 255),
            ),
            entry_arrow: Arrow::new(
                entry_dir,
                entry_dir * -ARROW_LENGTH,
                ARROW_LENGTH,
                Color::new(0, 255, 0, 255),
            ),
            cross_arrow: Arrow::new(
                frame.cross_dir,
                Vector3::zero(),
                ARROW_LENGTH,
                Color::new(34, 34, 153, 255),
            ),
            side_arrow: Arrow::new(
                frame.side_dir,
                Vector3::zero(),
                ARROW_LENGTH,
                Color::new(153, 34, 153, 255),
            ),
            exit_arrow: Arrow::new(
                exit.direction,
                Vector3::zero(),
                ARROW_LENGTH,
                Color::new(255, 255, 0, 255),
            ),
            surface_plane: GridPlane::new(
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
                PLANE_HALF_EXTENT,
                PLANE_DIVISIONS,
                Color::new(170, 170, 170, 255),
            ),
            collision_plane: GridPlane::new(
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                PLANE_HALF_EXTENT,
                PLANE_DIVISIONS,
                Color::new(255, 51, 51, 255),
            ),
            entry_medium: MediumSlab::new(
                Vector3::new(0.0, SLAB_HALF_HEIGHT, 0.0),
                SLAB_HALF_WIDTH,
                SLAB_HALF_HEIGHT,
                SLAB_HALF_DEPTH,
                Color::new(0, 0, 255, 26),
            ),
            exit_medium: MediumSlab::new(
                Vector3::new(0.0, -SLAB_HALF_HEIGHT, 0.0),
                SLAB_HALF_WIDTH,
                SLAB_HALF_HEIGHT,
                SLAB_HALF_DEPTH,
                Color::new(0, 255, 0, 26),
            ),
        };

        scene.collision_plane.face(&scene.frame.cross_dir);
        scene.entry_medium.face(&scene.frame.cross_dir);
        scene.exit_medium.face(&scene.frame.cross_dir);
        scene
    }

    /// Recomputes the incident direction from the two entry angles, then
    /// the incidence frame and the exit ray, and moves every dependent
    /// visual. Inputs arrive already clamped by the sliders.
    pub fn set_entry_angles(&mut self, polar: f32, azimuth: f32) {
        self.entry_polar = polar;
        self.entry_azimuth = azimuth;
        self.entry_dir = refraction::direction_from_angles(polar, azimuth);
        self.frame = IncidenceFrame::new(&self.entry_dir, &self.normal);

        self.entry_arrow.set_direction(self.entry_dir);
        self.entry_arrow.set_position(self.entry_dir * -ARROW_LENGTH);
        self.cross_arrow.set_direction(self.frame.cross_dir);
        self.side_arrow.set_direction(self.frame.side_dir);
        self.collision_plane.face(&self.frame.cross_dir);
        self.entry_medium.face(&self.frame.cross_dir);
        self.exit_medium.face(&self.frame.cross_dir);

        self.recompute_exit();
    }

    /// Stores the new indices and recomputes the exit ray alone; the entry
    /// direction and the incidence frame do not depend on the indices.
    pub fn set_refractive_indices(&mut self, eta_entry: f32, eta_exit: f32) {
        self.eta_entry = eta_entry;
        self.eta_exit = eta_exit;
        self.recompute_exit();
    }

    /// Display flags only; nothing is recomputed.
    pub fn set_visibility(&mut self, show_collision_plane: bool, show_media: bool) {
        self.collision_plane.visible = show_collision_plane;
        self.entry_medium.visible = show_media;
        self.exit_medium.visible = show_media;
    }

    fn recompute_exit(&mut self) {
        self.exit = refraction::refract_in_frame(
            &self.entry_dir,
            &self.normal,
            &self.frame,
            self.eta_entry / self.eta_exit,
        );
        self.exit_arrow.set_direction(self.exit.direction);
    }

    pub fn draw(&self, d: &mut impl RaylibDraw3D) {
        self.surface_plane.draw(d);
        self.collision_plane.draw(d);
        self.normal_arrow.draw(d);
        self.entry_arrow.draw(d);
        self.cross_arrow.draw(d);
        self.side_arrow.draw(d);
        self.exit_arrow.draw(d);

        // Translucent slabs last so they blend over the wireframes.
        self.entry_medium.draw(d);
        self.exit_medium.draw(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bits(v: Vector3) -> (u32, u32, u32) {
        (v.x.to_bits(), v.y.to_bits(), v.z.to_bits())
    }

    #[test]
    fn initial_state_points_along_x() {
        let scene = SceneState::new(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(scene.entry_dir.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(scene.entry_dir.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(scene.entry_dir.z, 0.0, epsilon = 1e-6);
        assert!(!scene.exit.total_internal);
    }

    #[test]
    fn setting_identical_angles_is_idempotent() {
        let mut scene = SceneState::new(0.0, 0.0, 1.0, 1.33);
        scene.set_entry_angles(0.7, 2.1);
        let entry = bits(scene.entry_dir);
        let cross = bits(scene.frame.cross_dir);
        let side = bits(scene.frame.side_dir);
        let exit = bits(scene.exit.direction);
        let arrow_pos = bits(scene.entry_arrow.position);

        scene.set_entry_angles(0.7, 2.1);
        assert_eq!(bits(scene.entry_dir), entry);
        assert_eq!(bits(scene.frame.cross_dir), cross);
        assert_eq!(bits(scene.frame.side_dir), side);
        assert_eq!(bits(scene.exit.direction), exit);
        assert_eq!(bits(scene.entry_arrow.position), arrow_pos);
    }

    #[test]
    fn index_change_leaves_entry_and_frame_untouched() {
        let mut scene = SceneState::new(0.4, 1.0, 1.0, 1.0);
        let entry = bits(scene.entry_dir);
        let cross = bits(scene.frame.cross_dir);
        let exit_before = bits(scene.exit.direction);

        scene.set_refractive_indices(1.5, 1.0);
        assert_eq!(bits(scene.entry_dir), entry);
        assert_eq!(bits(scene.frame.cross_dir), cross);
        assert_ne!(bits(scene.exit.direction), exit_before);
        assert_eq!(bits(scene.exit_arrow.direction), bits(scene.exit.direction));
    }

    #[test]
    fn dense_entry_medium_can_reflect() {
        let mut scene = SceneState::new(0.0, 0.0, 1.0, 1.0);
        // Shallow ray from a dense medium into a thin one.
        scene.set_entry_angles(0.3, 0.0);
        scene.set_refractive_indices(2.0, 1.0);
        assert!(scene.exit.total_internal);
        // The reflected ray leaves upward, back into the entry medium.
        assert!(scene.exit.direction.y > 0.0);
    }

    #[test]
    fn visibility_flags_only_touch_proxies() {
        let mut scene = SceneState::new(0.5, 0.5, 1.0, 1.5);
        let exit = bits(scene.exit.direction);

        scene.set_visibility(false, false);
        assert!(!scene.collision_plane.visible);
        assert!(!scene.entry_medium.visible);
        assert!(!scene.exit_medium.visible);
        assert!(scene.surface_plane.visible);
        assert_eq!(bits(scene.exit.direction), exit);

        scene.set_visibility(true, true);
        assert!(scene.collision_plane.visible);
        assert!(scene.entry_medium.visible);
        assert!(scene.exit_medium.visible);
    }

    #[test]
    fn entry_arrow_tail_sits_behind_the_origin() {
        let mut scene = SceneState::new(0.0, 0.0, 1.0, 1.0);
        scene.set_entry_angles(0.9, 3.0);
        let expected = scene.entry_dir * -10.0;
        assert_relative_eq!(scene.entry_arrow.position.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(scene.entry_arrow.position.y, expected.y, epsilon = 1e-6);
        assert_relative_eq!(scene.entry_arrow.position.z, expected.z, epsilon = 1e-6);
    }
}
