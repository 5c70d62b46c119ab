//! Homogeneous transformation primitives.
//!
//! Poses travel through the facade as 4x4 homogeneous matrices so that
//! compositions and inversions can be chained the way the control code
//! writes them on paper. The inverse exploits the rigid structure of the
//! matrix (transposed rotation block, rotated and negated translation);
//! callers must only pass matrices whose rotation block is orthonormal.

use nalgebra::{Matrix3, Matrix4, Rotation3, Translation3, UnitQuaternion, Vector3};

use crate::kinematic_traits::Pose;

/// Homogeneous form of a pose. Bottom row is (0, 0, 0, 1).
pub fn to_matrix(pose: &Pose) -> Matrix4<f64> {
    pose.to_homogeneous()
}

/// Recovers the pose from its homogeneous form. The rotation block must be
/// orthonormal; the translation is read from the fourth column.
pub fn to_pose(matrix: &Matrix4<f64>) -> Pose {
    let rotation: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    let translation = Translation3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);
    Pose::from_parts(
        translation,
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation)),
    )
}

/// Rigid inverse: transpose of the rotation block and the negated, rotated
/// translation. Not a general matrix inversion.
pub fn invert_rigid(matrix: &Matrix4<f64>) -> Matrix4<f64> {
    let rotation: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    let translation = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);
    let transposed = rotation.transpose();
    let back = -transposed * translation;

    let mut inverse = Matrix4::identity();
    inverse.fixed_view_mut::<3, 3>(0, 0).copy_from(&transposed);
    inverse[(0, 3)] = back.x;
    inverse[(1, 3)] = back.y;
    inverse[(2, 3)] = back.z;
    inverse
}

/// Matrix product; `compose(a, b)` applies `b` first, then `a`.
pub fn compose(a: &Matrix4<f64>, b: &Matrix4<f64>) -> Matrix4<f64> {
    a * b
}

/// Pose composition, same operand order as [`compose`].
pub fn compose_poses(a: &Pose, b: &Pose) -> Pose {
    a * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Translation3, UnitQuaternion};

    fn sample_pose() -> Pose {
        Pose::from_parts(
            Translation3::new(12.0, -3.5, 40.0),
            UnitQuaternion::from_euler_angles(0.2, -0.4, 1.1),
        )
    }

    #[test]
    fn rigid_inverse_cancels() {
        let matrix = to_matrix(&sample_pose());
        let product = compose(&invert_rigid(&matrix), &matrix);
        assert_relative_eq!(product, Matrix4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn pose_round_trip() {
        let pose = sample_pose();
        let recovered = to_pose(&to_matrix(&pose));
        assert_relative_eq!(
            recovered.translation.vector,
            pose.translation.vector,
            epsilon = 1e-12
        );
        assert!(recovered.rotation.angle_to(&pose.rotation) < 1e-12);
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let lift = Pose::from_parts(Translation3::new(0.0, 0.0, 10.0), UnitQuaternion::identity());
        let yaw = Pose::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_euler_angles(0.0, 0.0, std::f64::consts::FRAC_PI_2),
        );
        // Lift first, then yaw: the lifted point stays on the Z axis and yaws around it.
        let combined = to_pose(&compose(&to_matrix(&yaw), &to_matrix(&lift)));
        let moved = combined.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved, Point3::new(0.0, 1.0, 10.0), epsilon = 1e-12);
    }

    #[test]
    fn pose_composition_matches_the_matrix_path() {
        let a = sample_pose();
        let b = Pose::from_parts(
            Translation3::new(-4.0, 2.0, 1.0),
            UnitQuaternion::from_euler_angles(-0.3, 0.1, 0.7),
        );
        let direct = compose_poses(&a, &b);
        let through_matrices = to_pose(&compose(&to_matrix(&a), &to_matrix(&b)));
        assert_relative_eq!(
            direct.translation.vector,
            through_matrices.translation.vector,
            epsilon = 1e-12
        );
        assert!(direct.rotation.angle_to(&through_matrices.rotation) < 1e-12);
    }
}
