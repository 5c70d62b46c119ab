//! Helper functions

use crate::kinematic_traits::{LEG_COUNT, Pose, ServoAngles};
use std::f64::consts::PI;

/// Wraps an angle to [-PI, PI).
pub fn normalize_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

/// Convert array of f32's in degrees to ServoAngles
/// that are array of f64's in radians
pub fn angles(degrees: &[f32; LEG_COUNT]) -> ServoAngles {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Convert servo angles that are array of f64's in radians to
/// array of f32's in degrees
pub fn to_degrees(angles: &ServoAngles) -> [f32; LEG_COUNT] {
    std::array::from_fn(|i| angles[i].to_degrees() as f32)
}

/// Allows to specify servo angles in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; LEG_COUNT]) -> ServoAngles {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Print servo angles, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_angles(angles: &ServoAngles) {
    let mut row_str = String::new();
    for leg in 0..LEG_COUNT {
        row_str.push_str(&format!("{:5.2} ", angles[leg].to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

pub fn dump_pose(pose: &Pose) {
    let translation = pose.translation.vector;
    let rotation = pose.rotation;
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  quat: {:.5},{:.5},{:.5},{:.5}",
        translation.x, translation.y, translation.z, rotation.i, rotation.j, rotation.k, rotation.w
    );
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", x.to_degrees())
}

pub fn assert_pose_eq(
    ta: &Pose,
    tb: &Pose,
    distance_tolerance: f64,
    angular_tolerance: f64,
) -> bool {
    fn bad(ta: &Pose, tb: &Pose) {
        dump_pose(ta);
        dump_pose(tb);
    }

    let translation_distance = (ta.translation.vector - tb.translation.vector).norm();
    let angular_distance = ta.rotation.angle_to(&tb.rotation);

    if translation_distance.abs() > distance_tolerance {
        bad(ta, tb);
        panic!("Poses have too different translations");
    }

    if angular_distance.abs() > angular_tolerance {
        bad(ta, tb);
        panic!("Poses have too different angles");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_wraps_down() {
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-12);
        assert!((normalize_angle(PI / 4.0) - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle_wraps_up() {
        assert!((normalize_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_degree_round_trip() {
        let degrees = [10.0_f32, -20.0, 30.0, -40.0, 50.0, -60.0];
        let radians = angles(&degrees);
        let back = to_degrees(&radians);
        for i in 0..LEG_COUNT {
            assert!((back[i] - degrees[i]).abs() < 1e-4);
        }
    }
}
