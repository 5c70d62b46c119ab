//! Defines the Stewart platform parameter data structures

pub mod stewart_kinematics {
    use crate::parameter_error::ParameterError;
    use crate::utils::deg;
    use tracing::debug;

    /// Which way round a servo is bolted to the base plate. Legs come in mirrored
    /// pairs; the orientation selects the side of the pair a leg occupies and the
    /// rotation sense of its command angle. On the stock platforms even-indexed
    /// legs are `Standard` and odd-indexed legs are `Mirrored`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MountOrientation {
        Standard,
        Mirrored,
    }

    impl MountOrientation {
        /// Sign factor applied to azimuth spreads and to the command angle.
        pub fn sign(&self) -> f64 {
            match self {
                MountOrientation::Standard => 1.0,
                MountOrientation::Mirrored => -1.0,
            }
        }
    }

    /// Geometry of one physical Stewart assembly. Constructed once at startup,
    /// validated, and never mutated. All lengths in millimetres, angles in radians.
    /// See [parameters_platforms.rs](parameters_platforms.rs) for the concrete platforms.
    #[derive(Debug, Clone, PartialEq)]
    pub struct StewartConfiguration {
        /// Name of the physical assembly, used in logs and error context.
        pub name: String,

        /// Radius from the base-plate centre to each servo-arm rotation pivot.
        pub servo_centre_radius_mm: f64,

        /// Half-spread of a mirrored servo pair around its sector azimuth.
        pub servo_centre_angle_rad: f64,

        /// Radius to the rendered servo-arm centre (for visualization only,
        /// the solve does not use it).
        pub servo_arm_centre_radius_mm: f64,

        /// Azimuth half-spread of the rendered servo-arm centre (visualization only).
        pub servo_arm_centre_angle_rad: f64,

        /// Radius from the moving-plate centre to each ball joint.
        pub plate_joint_radius_mm: f64,

        /// Half-spread of a ball-joint pair around its sector azimuth.
        pub plate_joint_angle_rad: f64,

        /// Length of the rigid rod connecting the servo-arm tip to the plate ball joint.
        pub rod_length_mm: f64,

        /// Length of the servo arm, pivot to rod attachment.
        pub servo_arm_length_mm: f64,

        /// Height of the servo-arm pivots above the base plate.
        pub servo_centre_height_mm: f64,

        /// Height of the ball joints relative to the moving plate (negative: below it).
        pub plate_ball_joint_height_mm: f64,

        /// Base plate radius. Viewer metric, not used by the solve.
        pub bottom_platform_radius_mm: f64,

        /// Moving plate radius along X. Viewer metric.
        pub top_platform_radius_x_mm: f64,

        /// Moving plate radius along Y. Viewer metric.
        pub top_platform_radius_y_mm: f64,

        /// Lower bound of the geometric arm angle, arm swung towards the base plate.
        pub bottom_servo_limit_rad: f64,

        /// Upper bound of the geometric arm angle, arm swung towards the moving plate.
        pub top_servo_limit_rad: f64,

        /// Mounting orientation per leg, replacing the historical even/odd
        /// index convention.
        pub mount_orientations: [MountOrientation; 6],
    }

    /// Geometry of the separate single-purpose mouth linkage. Millimetres.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct MouthConfiguration {
        /// Height of the mouth assembly base above the head plate.
        pub mouth_base_height_mm: f64,

        /// Length of the lower-lip lever the mouth-opening distance acts on.
        pub lower_lip_lever_length_mm: f64,

        /// Length of the lower-lip servo arm.
        pub lower_lip_servo_arm_length_mm: f64,
    }

    impl StewartConfiguration {
        /// Rejects non-physical geometry. Called once when a solver is built;
        /// solve-time code can rely on these invariants.
        pub fn validate(&self) -> Result<(), ParameterError> {
            for (field, value) in [
                ("servo_centre_radius_mm", self.servo_centre_radius_mm),
                ("plate_joint_radius_mm", self.plate_joint_radius_mm),
                ("rod_length_mm", self.rod_length_mm),
                ("servo_arm_length_mm", self.servo_arm_length_mm),
                ("bottom_platform_radius_mm", self.bottom_platform_radius_mm),
                ("top_platform_radius_x_mm", self.top_platform_radius_x_mm),
                ("top_platform_radius_y_mm", self.top_platform_radius_y_mm),
            ] {
                if !(value > 0.0) {
                    return Err(ParameterError::InvalidConfiguration(format!(
                        "{}: {} must be positive (got {})",
                        self.name, field, value
                    )));
                }
            }
            for (field, value) in [
                ("servo_centre_angle_rad", self.servo_centre_angle_rad),
                ("servo_arm_centre_radius_mm", self.servo_arm_centre_radius_mm),
                ("servo_arm_centre_angle_rad", self.servo_arm_centre_angle_rad),
                ("plate_joint_angle_rad", self.plate_joint_angle_rad),
                ("servo_centre_height_mm", self.servo_centre_height_mm),
                ("plate_ball_joint_height_mm", self.plate_ball_joint_height_mm),
                ("bottom_servo_limit_rad", self.bottom_servo_limit_rad),
                ("top_servo_limit_rad", self.top_servo_limit_rad),
            ] {
                if !value.is_finite() {
                    return Err(ParameterError::InvalidConfiguration(format!(
                        "{}: {} must be finite (got {})",
                        self.name, field, value
                    )));
                }
            }
            if self.bottom_servo_limit_rad >= self.top_servo_limit_rad {
                return Err(ParameterError::InvalidConfiguration(format!(
                    "{}: servo travel is empty ({} rad .. {} rad)",
                    self.name, self.bottom_servo_limit_rad, self.top_servo_limit_rad
                )));
            }
            debug!(
                platform = self.name.as_str(),
                "stewart configuration validated"
            );
            Ok(())
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "stewart_geometric_parameters:\n  \
              servo_centre_radius_mm: {}\n  \
              servo_centre_angle: {}\n  \
              servo_arm_centre_radius_mm: {}\n  \
              servo_arm_centre_angle: {}\n  \
              plate_joint_radius_mm: {}\n  \
              plate_joint_angle: {}\n  \
              rod_length_mm: {}\n  \
              servo_arm_length_mm: {}\n  \
              servo_centre_height_mm: {}\n  \
              plate_ball_joint_height_mm: {}\n  \
              bottom_platform_radius_mm: {}\n  \
              top_platform_radius_x_mm: {}\n  \
              top_platform_radius_y_mm: {}\n  \
              bottom_servo_limit: {}\n  \
              top_servo_limit: {}\n\
            stewart_mount_orientations: [{}]\n\
            name: {}\n",
                self.servo_centre_radius_mm,
                deg(&self.servo_centre_angle_rad),
                self.servo_arm_centre_radius_mm,
                deg(&self.servo_arm_centre_angle_rad),
                self.plate_joint_radius_mm,
                deg(&self.plate_joint_angle_rad),
                self.rod_length_mm,
                self.servo_arm_length_mm,
                self.servo_centre_height_mm,
                self.plate_ball_joint_height_mm,
                self.bottom_platform_radius_mm,
                self.top_platform_radius_x_mm,
                self.top_platform_radius_y_mm,
                deg(&self.bottom_servo_limit_rad),
                deg(&self.top_servo_limit_rad),
                self.mount_orientations
                    .iter()
                    .map(|m| match m {
                        MountOrientation::Standard => "standard",
                        MountOrientation::Mirrored => "mirrored",
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                self.name,
            )
        }
    }

    impl MouthConfiguration {
        pub fn validate(&self) -> Result<(), ParameterError> {
            for (field, value) in [
                ("mouth_base_height_mm", self.mouth_base_height_mm),
                ("lower_lip_lever_length_mm", self.lower_lip_lever_length_mm),
                ("lower_lip_servo_arm_length_mm", self.lower_lip_servo_arm_length_mm),
            ] {
                if !(value > 0.0) {
                    return Err(ParameterError::InvalidConfiguration(format!(
                        "mouth: {} must be positive (got {})",
                        field, value
                    )));
                }
            }
            Ok(())
        }
    }
}
