//! Vector and orientation helpers.
//!
//! Positions are `glam::Vec3` in a left-handed, Y-up world: drones fly in
//! the XZ plane at a fixed height, `+Z` is an unrotated drone's forward
//! axis.  Orientation is a unit `Quat`.

pub use glam::{Mat3, Quat, Vec3};

/// The world up axis.
pub const UP: Vec3 = Vec3::Y;

/// Unit vector from `from` toward `to`, or zero when the points coincide.
#[inline]
pub fn direction_to(from: Vec3, to: Vec3) -> Vec3 {
    (to - from).normalize_or_zero()
}

/// Rotation whose forward (`+Z`) axis points along `forward`, keeping `+Y`
/// as close to [`UP`] as possible.
///
/// A zero `forward` yields the identity.  When `forward` is (anti)parallel
/// to `UP` there is no unique roll, so the shortest arc from `+Z` is used.
pub fn look_rotation(forward: Vec3) -> Quat {
    let f = forward.normalize_or_zero();
    if f == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let right = UP.cross(f);
    if right.length_squared() < 1e-12 {
        return Quat::from_rotation_arc(Vec3::Z, f);
    }
    let right = right.normalize();
    let up = f.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, f)).normalize()
}

/// Spherically interpolate `current` toward facing `desired`.
///
/// `t` is clamped to `[0, 1]`, so a large frame delta snaps instead of
/// overshooting.
#[inline]
pub fn turn_towards(current: Quat, desired: Vec3, t: f32) -> Quat {
    current.slerp(look_rotation(desired), t.clamp(0.0, 1.0))
}

/// The forward axis of `orientation`.
#[inline]
pub fn forward(orientation: Quat) -> Vec3 {
    orientation * Vec3::Z
}
