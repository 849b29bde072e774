use nalgebra::{Matrix3, Vector3};
use rayon::prelude::*;

use crate::error::{MotionError, Result};

type T = f64;

/// Single rotation about one axis that is equivalent to a composed gimbal rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationResult {
    /// Total rotation angle in radians, always within `[0, pi]` for finite input.
    pub angle: T,
    /// Unit rotation axis, or [`IDENTITY_AXIS`] when there is no net rotation.
    pub axis: Vector3<T>,
}

/// Axis reported for the identity rotation, where the axis is undefined.
/// This is a convention, not a computed result.
pub const IDENTITY_AXIS: [T; 3] = [1.0, 0.0, 0.0];

pub fn rotation_x(theta: T) -> Matrix3<T> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

pub fn rotation_y(theta: T) -> Matrix3<T> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

pub fn rotation_z(theta: T) -> Matrix3<T> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Three-axis gimbal rotation `Rz * Ry * Rx`.
///
/// The X rotation is applied first, then Y, then Z. Matrix products do not commute,
/// so swapping this order describes a different rotation for the same angles.
pub fn compose_rotation(theta_x: T, theta_y: T, theta_z: T) -> Matrix3<T> {
    rotation_z(theta_z) * rotation_y(theta_y) * rotation_x(theta_x)
}

/// Recover the angle and axis of a rotation matrix directly from its entries.
///
/// The skew-symmetric part of `R` gives `2 sin(theta) * axis` and the trace gives
/// `1 + 2 cos(theta)`, so `atan2` of the two stays well conditioned near `0` and `pi`
/// where `acos`/`asin` of either term alone would not.
///
/// When the skew part vanishes the axis is undefined and [`IDENTITY_AXIS`] is returned.
pub fn angle_axis(rotation: &Matrix3<T>) -> RotationResult {
    let r = rotation;
    let u = Vector3::new(
        r[(2, 1)] - r[(1, 2)],
        r[(0, 2)] - r[(2, 0)],
        r[(1, 0)] - r[(0, 1)],
    );

    // both terms carry the same factor of 2
    let s = u.norm();
    let c = r.trace() - 1.0;

    let axis = if s > 0.0 {
        u / s
    } else {
        Vector3::from(IDENTITY_AXIS)
    };

    RotationResult {
        angle: s.atan2(c),
        axis,
    }
}

/// Reduce per-frame Euler angles (radians) to a total rotation angle and axis per frame.
///
/// Angles are taken as-is, with no wrapping into `(-pi, pi]`. NaN or infinite input
/// propagates through the arithmetic rather than being rejected.
pub fn total_rotation(theta_x: &[T], theta_y: &[T], theta_z: &[T]) -> Result<Vec<RotationResult>> {
    check_lengths(theta_x, theta_y, theta_z)?;

    Ok(theta_x
        .iter()
        .zip(theta_y)
        .zip(theta_z)
        .map(|((&tx, &ty), &tz)| angle_axis(&compose_rotation(tx, ty, tz)))
        .collect())
}

/// Same as [`total_rotation`], with frames spread across the rayon thread pool.
/// Output order matches input order.
pub fn total_rotation_par(
    theta_x: &[T],
    theta_y: &[T],
    theta_z: &[T],
) -> Result<Vec<RotationResult>> {
    check_lengths(theta_x, theta_y, theta_z)?;

    Ok((0..theta_x.len())
        .into_par_iter()
        .map(|i| angle_axis(&compose_rotation(theta_x[i], theta_y[i], theta_z[i])))
        .collect())
}

fn check_lengths(theta_x: &[T], theta_y: &[T], theta_z: &[T]) -> Result<()> {
    if theta_x.len() != theta_y.len() || theta_x.len() != theta_z.len() {
        return Err(MotionError::invalid_input(format!(
            "rotation angle sequences differ in length: x={}, y={}, z={}",
            theta_x.len(),
            theta_y.len(),
            theta_z.len()
        )));
    }
    Ok(())
}
