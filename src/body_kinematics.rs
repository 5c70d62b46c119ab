//! Facade over the whole animatronic body: the Stewart solver for the head
//! platform, the pose-composition helpers the motion controller needs, and the
//! mouth linkage mapping.

use nalgebra::{Point3, Translation3, UnitQuaternion};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::{JointPoints, Kinematics, PlatformSolution, Pose};
use crate::kinematics_impl::StewartKinematics;
use crate::parameter_error::ParameterError;
use crate::parameters::stewart_kinematics::{MouthConfiguration, StewartConfiguration};
use crate::transforms::{compose, invert_rigid, to_matrix, to_pose};

/// Target state of the mouth: yaw of the whole jaw, opening distance and
/// jaw angle. Millimetres and radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouthPose {
    pub yaw_rad: f64,
    pub mouth_open_mm: f64,
    pub mouth_rad: f64,
}

/// Servo targets for the mouth linkage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouthServoAngles {
    pub yaw_rad: f64,
    pub lower_lip_rad: f64,
    pub angle_rad: f64,
}

/// Constant plate geometry the viewer renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformMetrics {
    pub bottom_platform_radius_mm: f64,
    pub top_platform_radius_x_mm: f64,
    pub top_platform_radius_y_mm: f64,
    pub rod_length_mm: f64,
}

/// Constant mouth geometry the viewer renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouthMetrics {
    pub mouth_base_height_mm: f64,
    pub lower_lip_lever_length_mm: f64,
    pub lower_lip_servo_arm_length_mm: f64,
}

/// Owns the concrete platform configurations and the head solver. Construct one
/// explicitly with [`BodyKinematics::new`], or use the process-wide
/// [`BodyKinematics::instance`] built from the stock body geometry.
pub struct BodyKinematics {
    mouth_config: MouthConfiguration,
    head: StewartKinematics,
}

static BODY: Lazy<BodyKinematics> = Lazy::new(|| {
    BodyKinematics::new(StewartConfiguration::body(), MouthConfiguration::body_mouth())
        .expect("stock body geometry must validate")
});

impl BodyKinematics {
    /// Builds the facade from explicit configurations, validating both.
    pub fn new(
        stewart: StewartConfiguration,
        mouth: MouthConfiguration,
    ) -> Result<Self, ParameterError> {
        mouth.validate()?;
        let head = StewartKinematics::new(stewart)?;
        debug!(platform = head.config().name.as_str(), "body kinematics ready");
        Ok(BodyKinematics { mouth_config: mouth, head })
    }

    /// The process-wide instance over the stock body platform. Constructed on
    /// first access; immutable and safe to share between threads afterwards.
    pub fn instance() -> &'static BodyKinematics {
        &BODY
    }

    pub fn stewart_config(&self) -> &StewartConfiguration {
        self.head.config()
    }

    pub fn mouth_config(&self) -> &MouthConfiguration {
        &self.mouth_config
    }

    /// Head solver access for callers that want the raw [`Kinematics`] seam.
    pub fn head(&self) -> &StewartKinematics {
        &self.head
    }

    /// Plate constants for the viewer.
    pub fn platform_metrics(&self) -> PlatformMetrics {
        let config = self.head.config();
        PlatformMetrics {
            bottom_platform_radius_mm: config.bottom_platform_radius_mm,
            top_platform_radius_x_mm: config.top_platform_radius_x_mm,
            top_platform_radius_y_mm: config.top_platform_radius_y_mm,
            rod_length_mm: config.rod_length_mm,
        }
    }

    /// Mouth constants for the viewer.
    pub fn mouth_metrics(&self) -> MouthMetrics {
        MouthMetrics {
            mouth_base_height_mm: self.mouth_config.mouth_base_height_mm,
            lower_lip_lever_length_mm: self.mouth_config.lower_lip_lever_length_mm,
            lower_lip_servo_arm_length_mm: self.mouth_config.lower_lip_servo_arm_length_mm,
        }
    }

    /// Solves the head platform for the given pose.
    pub fn compute_servo_angles(
        &self,
        head_pose: &Pose,
    ) -> Result<PlatformSolution, KinematicError> {
        self.head.inverse(head_pose)
    }

    /// World-space servo-arm centres of the head platform, for rendering.
    pub fn servo_arm_centres(&self) -> &JointPoints {
        self.head.servo_arm_centres()
    }

    /// Computes the head pose relative to the body platform from an absolute
    /// target given above the body's reference point: the target position is
    /// shifted by the body position (its orientation is used as-is), then
    /// re-expressed in the body frame.
    ///
    /// Satisfies `body_pose * result == absolute target` exactly (up to float
    /// tolerance), so a solve of the result puts the head where asked.
    pub fn compute_head_stewart_pose(
        &self,
        body_pose: &Pose,
        rel_pose_above_belly_button: &Pose,
    ) -> Pose {
        let mut above_belly = *rel_pose_above_belly_button;
        above_belly.translation.vector += body_pose.translation.vector;

        let inverse_body = invert_rigid(&to_matrix(body_pose));
        to_pose(&compose(&inverse_body, &to_matrix(&above_belly)))
    }

    /// Re-expresses `body_pose`'s orientation as if the rotation happened about
    /// `pivot` instead of about the body's own position, sweeping the position
    /// along the arc. Exact; built from three composed transforms.
    pub fn translate_orientation(&self, body_pose: &Pose, pivot: &Point3<f64>) -> Pose {
        let centre = to_matrix(&Pose::from_parts(
            Translation3::from(pivot.coords),
            UnitQuaternion::identity(),
        ));
        let rotation = to_matrix(&Pose::from_parts(
            Translation3::identity(),
            body_pose.rotation,
        ));
        let shift = to_matrix(&Pose::from_parts(
            Translation3::from(pivot.coords - body_pose.translation.vector),
            UnitQuaternion::identity(),
        ));

        to_pose(&compose(&compose(&centre, &rotation), &invert_rigid(&shift)))
    }

    /// Maps a mouth pose to the three mouth servos. Yaw and jaw angle pass
    /// through; the lower lip follows the opening distance through its lever.
    /// Monotonic for non-negative opening; the caller clamps its commands.
    pub fn compute_mouth_angles(&self, mouth: &MouthPose) -> MouthServoAngles {
        MouthServoAngles {
            yaw_rad: mouth.yaw_rad,
            lower_lip_rad: (mouth.mouth_open_mm / self.mouth_config.lower_lip_lever_length_mm)
                .atan(),
            angle_rad: mouth.mouth_rad,
        }
    }
}
