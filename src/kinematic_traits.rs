//! Core types and the solver seam.

use nalgebra::{Isometry3, Point3};

use crate::kinematic_error::KinematicError;

/// Pose of the moving plate relative to the fixed plate. It contains both the Cartesian
/// position (millimetres) and the rotation quaternion.
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(0.0, 0.0, 4.0);
/// // The quaternion should be normalized to represent a valid rotation.
/// let rotation = UnitQuaternion::from_euler_angles(0.0, 0.05, 0.0);
/// let pose = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = Isometry3<f64>;

/// One Stewart platform has six legs.
pub const LEG_COUNT: usize = 6;

/// Servo rotation angles in radians, leg order 0..5 matching the physical layout.
pub type ServoAngles = [f64; LEG_COUNT];

/// One world-space point per leg, millimetres.
pub type JointPoints = [Point3<f64>; LEG_COUNT];

/// The null posture (all servo arms at their rest angle).
pub const ANGLES_AT_ZERO: ServoAngles = [0.0; LEG_COUNT];

/// Complete solver output for one target pose: the six servo angles plus the
/// world-space joint positions a renderer or calibration rig needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSolution {
    /// Servo command angles in radians, already corrected for each leg's mount orientation.
    pub angles: ServoAngles,

    /// World-space position of each top-plate ball joint.
    pub ball_joints: JointPoints,

    /// World-space position of each servo-side ball joint (the servo-arm tip).
    pub servo_ball_joints: JointPoints,
}

/// The pose → angles seam. Stewart platforms are solved strictly in the inverse
/// direction here; recovering a pose from angles is out of scope.
pub trait Kinematics {
    /// Computes the servo angles realizing the given plate pose, or fails with the
    /// first infeasible leg. Never returns a partial solution.
    fn inverse(&self, pose: &Pose) -> Result<PlatformSolution, KinematicError>;

    /// World-space servo-arm rotation centres. Pose independent, computed once
    /// per configuration.
    fn servo_arm_centres(&self) -> &JointPoints;
}
