use raylib::prelude::*;

/* Snell's Law: eta * sin(theta) = eta' * sin(theta')
    eta    - refractive index of the medium the ray comes from
    eta'   - refractive index of the medium the ray enters
    theta  - angle between the incident ray and the normal
    theta' - angle between the exit ray and the normal
*/

/// Below this cross-product length the incident ray is treated as parallel
/// to the normal and the incidence plane is no longer well defined.
const DEGENERATE_EPS: f32 = 1e-6;

/// Exit ray produced by the calculator. `total_internal` marks the case
/// where no real exit angle exists and the ray reflected instead.
#[derive(Debug, Clone, Copy)]
pub struct Refraction {
    pub direction: Vector3,
    pub total_internal: bool,
}

/// Orthonormal frame of the incidence plane.
///
/// `cross_dir` is the normal of the plane containing the incident ray and
/// the surface normal. `side_dir` lies in that plane, perpendicular to the
/// surface normal, pointing the way the incident ray travels.
#[derive(Debug, Clone, Copy)]
pub struct IncidenceFrame {
    pub cross_dir: Vector3,
    pub side_dir: Vector3,
}

impl IncidenceFrame {
    pub fn new(incident: &Vector3, normal: &Vector3) -> Self {
        let cross = (-*incident).cross(*normal);

        // At normal incidence the cross product collapses toward zero and
        // normalizing it would produce NaN. Fall back to an arbitrary but
        // deterministic direction orthogonal to the normal; the exit ray has
        // no sideways component in that case, so only the frame visuals
        // depend on the choice.
        let cross_dir = if cross.length() < DEGENERATE_EPS {
            orthogonal_to(normal)
        } else {
            cross.normalized()
        };

        let side_dir = cross_dir.cross(*normal).normalized();

        IncidenceFrame {
            cross_dir,
            side_dir,
        }
    }
}

/// Unit vector orthogonal to `v`, built by crossing against the world axis
/// least aligned with it so the product cannot vanish.
fn orthogonal_to(v: &Vector3) -> Vector3 {
    let axis = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector3::new(1.0, 0.0, 0.0)
    } else if v.y.abs() <= v.z.abs() {
        Vector3::new(0.0, 1.0, 0.0)
    } else {
        Vector3::new(0.0, 0.0, 1.0)
    };

    v.cross(axis).normalized()
}

pub fn reflect(incident: &Vector3, normal: &Vector3) -> Vector3 {
    *incident - *normal * 2.0 * incident.dot(*normal)
}

/// Computes the exit direction for a ray hitting the interface.
///
/// `incident` points toward the surface, `normal` points into the entry
/// medium, and both are unit vectors. `ratio` is eta_entry / eta_exit. The
/// caller supplies the incidence frame so that a change of indices does not
/// have to rebuild it.
///
/// Non-positive indices are not guarded: a zero exit index sends the ratio
/// to infinity and the ray into the reflection branch, and a NaN ratio
/// propagates NaN into the exit direction.
pub fn refract_in_frame(
    incident: &Vector3,
    normal: &Vector3,
    frame: &IncidenceFrame,
    ratio: f32,
) -> Refraction {
    // Cosine of the angle of incidence through the dot product. Both
    // operands are unit vectors, so this is the cosine up to floating-point
    // drift.
    let cos_in = normal.dot(-*incident);

    // Sine of the exit angle by Snell's law and the Pythagorean identity.
    let sin_out = ratio * (1.0 - cos_in * cos_in).max(0.0).sqrt();

    if sin_out > 1.0 {
        // Total internal reflection: the required sine is out of range, so
        // the ray mirrors about the normal instead of transmitting. A sine
        // of exactly 1 still refracts, grazing along the interface.
        Refraction {
            direction: reflect(incident, normal),
            total_internal: true,
        }
    } else {
        let cos_out = (1.0 - sin_out * sin_out).sqrt();

        // Decompose the exit ray into a part along the inverse normal and a
        // part along the in-plane side direction.
        let parallel = -*normal * cos_out;
        let perpendicular = frame.side_dir * sin_out;

        Refraction {
            direction: parallel + perpendicular,
            total_internal: false,
        }
    }
}

/// Convenience form building the incidence frame itself.
pub fn refract(incident: &Vector3, normal: &Vector3, ratio: f32) -> Refraction {
    let frame = IncidenceFrame::new(incident, normal);
    refract_in_frame(incident, normal, &frame, ratio)
}

/// Incident direction from the two entry angles. The polar angle tilts the
/// ray below the horizon, the azimuthal angle spins it around the normal.
pub fn direction_from_angles(polar: f32, azimuth: f32) -> Vector3 {
    Vector3::new(
        azimuth.cos() * polar.cos(),
        -polar.sin(),
        azimuth.sin() * polar.cos(),
    )
}
