//! Closed-form inverse kinematics for one rotary-servo Stewart platform.
//!
//! Six servos on the base plate each swing an arm inside a fixed vertical
//! plane; a rigid rod connects the arm tip to a ball joint under the moving
//! plate. For a target plate pose the solver intersects, per leg, the circle
//! swept by the arm tip with the sphere of rod length around the ball joint
//! and returns the arm angle that realizes the pose, together with the world
//! positions of every joint.

use nalgebra::Point3;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

use crate::kinematic_error::{Infeasibility, KinematicError};
use crate::kinematic_traits::{
    ANGLES_AT_ZERO, JointPoints, Kinematics, LEG_COUNT, PlatformSolution, Pose,
};
use crate::parameter_error::ParameterError;
use crate::parameters::stewart_kinematics::StewartConfiguration;
use crate::utils::normalize_angle;

/// Solver for one platform. Owns the validated configuration and the
/// pose-independent geometry derived from it.
pub struct StewartKinematics {
    config: StewartConfiguration,

    /// Servo-arm rotation pivots, world space.
    servo_pivots: JointPoints,

    /// Rendered servo-arm centres, world space. Exposed for the viewer only.
    servo_arm_centres: JointPoints,

    /// Ball-joint positions in moving-plate coordinates.
    plate_joints_local: JointPoints,

    /// Azimuth of each arm plane: direction the arm points at geometric angle 0.
    arm_azimuths: [f64; LEG_COUNT],

    /// Plate height at which every arm is exactly horizontal. Target poses are
    /// expressed relative to this home pose, so the identity pose solves to the
    /// null posture.
    home_height_mm: f64,
}

impl StewartKinematics {
    /// Validates the configuration and precomputes the fixed leg geometry.
    pub fn new(config: StewartConfiguration) -> Result<Self, ParameterError> {
        config.validate()?;

        let mut servo_pivots = [Point3::origin(); LEG_COUNT];
        let mut servo_arm_centres = [Point3::origin(); LEG_COUNT];
        let mut plate_joints_local = [Point3::origin(); LEG_COUNT];
        let mut arm_azimuths = [0.0; LEG_COUNT];

        for leg in 0..LEG_COUNT {
            let side = config.mount_orientations[leg].sign();

            // Three mirrored pairs: base pairs centred on 120°/240°/360°,
            // plate pairs interleaved on 60°/180°/300°.
            let base_sector = ((leg + (leg % 2)) as f64) * PI / 3.0;
            let plate_sector = ((1 + leg - (leg % 2)) as f64) * PI / 3.0;

            let pivot_azimuth = base_sector + side * config.servo_centre_angle_rad;
            servo_pivots[leg] = Point3::new(
                config.servo_centre_radius_mm * pivot_azimuth.cos(),
                config.servo_centre_radius_mm * pivot_azimuth.sin(),
                config.servo_centre_height_mm,
            );

            let centre_azimuth = base_sector + side * config.servo_arm_centre_angle_rad;
            servo_arm_centres[leg] = Point3::new(
                config.servo_arm_centre_radius_mm * centre_azimuth.cos(),
                config.servo_arm_centre_radius_mm * centre_azimuth.sin(),
                config.servo_centre_height_mm,
            );

            let joint_azimuth = plate_sector - side * config.plate_joint_angle_rad;
            plate_joints_local[leg] = Point3::new(
                config.plate_joint_radius_mm * joint_azimuth.cos(),
                config.plate_joint_radius_mm * joint_azimuth.sin(),
                config.plate_ball_joint_height_mm,
            );

            // Arms lie tangentially, mirrored pairs pointing towards their own
            // plate joint.
            arm_azimuths[leg] = pivot_azimuth + side * FRAC_PI_2;
        }

        // Home height from leg 0 (all legs agree by layout symmetry): with the
        // arm horizontal the rod spans the remaining vertical distance.
        let tip = Point3::new(
            servo_pivots[0].x + config.servo_arm_length_mm * arm_azimuths[0].cos(),
            servo_pivots[0].y + config.servo_arm_length_mm * arm_azimuths[0].sin(),
            servo_pivots[0].z,
        );
        let dx = plate_joints_local[0].x - tip.x;
        let dy = plate_joints_local[0].y - tip.y;
        let horizontal_sq = dx * dx + dy * dy;
        let rod_sq = config.rod_length_mm * config.rod_length_mm;
        if horizontal_sq >= rod_sq {
            return Err(ParameterError::InvalidConfiguration(format!(
                "{}: rod ({} mm) cannot span the {:.3} mm horizontal gap at the home posture",
                config.name,
                config.rod_length_mm,
                horizontal_sq.sqrt()
            )));
        }
        let home_height_mm = config.servo_centre_height_mm - config.plate_ball_joint_height_mm
            + (rod_sq - horizontal_sq).sqrt();

        debug!(
            platform = config.name.as_str(),
            home_height_mm, "stewart solver ready"
        );

        Ok(StewartKinematics {
            config,
            servo_pivots,
            servo_arm_centres,
            plate_joints_local,
            arm_azimuths,
            home_height_mm,
        })
    }

    pub fn config(&self) -> &StewartConfiguration {
        &self.config
    }

    /// Plate height of the home posture above the base origin.
    pub fn home_height_mm(&self) -> f64 {
        self.home_height_mm
    }

    /// World-space servo-arm pivot of one leg. Pose independent.
    pub fn servo_pivot(&self, leg: usize) -> Point3<f64> {
        self.servo_pivots[leg]
    }

    /// Solves one leg: the geometric arm angle placing the tip so that the rod
    /// of configured length reaches `ball_joint` exactly.
    fn leg_angle(&self, leg: usize, ball_joint: &Point3<f64>) -> Result<f64, KinematicError> {
        let infeasible = |reason| KinematicError::InfeasiblePose { leg, reason };

        let config = &self.config;
        let rod = config.rod_length_mm;
        let arm = config.servo_arm_length_mm;

        let offset = ball_joint - self.servo_pivots[leg];
        let distance = offset.norm();
        if distance > rod + arm {
            return Err(infeasible(Infeasibility::BeyondReach {
                distance_mm: distance,
                max_mm: rod + arm,
            }));
        }
        if distance < (rod - arm).abs() {
            return Err(infeasible(Infeasibility::TooClose {
                distance_mm: distance,
                min_mm: (rod - arm).abs(),
            }));
        }

        // In the arm plane with azimuth beta the tip sits at
        // pivot + arm * (cos a cos beta, cos a sin beta, sin a), and the rod
        // condition |ball - tip| = rod reduces to n cos a + m sin a = k.
        let beta = self.arm_azimuths[leg];
        let planar = offset.x * beta.cos() + offset.y * beta.sin();
        let k = distance * distance + arm * arm - rod * rod;
        let m = 2.0 * arm * offset.z;
        let n = 2.0 * arm * planar;
        let magnitude = m.hypot(n);
        if k.abs() > magnitude {
            return Err(infeasible(Infeasibility::NoArmSolution));
        }

        // Two intersections of the arm circle with the rod sphere. The primary
        // branch carries the home posture; the alternate is its reflection.
        let root = (magnitude * magnitude - k * k).sqrt();
        let phase = f64::atan2(n, m);
        let primary = normalize_angle(f64::atan2(k, root) - phase);
        let alternate = normalize_angle(f64::atan2(k, -root) - phase);

        let in_travel =
            |angle: f64| angle >= config.bottom_servo_limit_rad && angle <= config.top_servo_limit_rad;
        if in_travel(primary) {
            Ok(primary)
        } else if in_travel(alternate) {
            Ok(alternate)
        } else {
            Err(infeasible(Infeasibility::OutsideTravel {
                primary_rad: primary,
                alternate_rad: alternate,
            }))
        }
    }
}

impl Kinematics for StewartKinematics {
    fn inverse(&self, pose: &Pose) -> Result<PlatformSolution, KinematicError> {
        let config = &self.config;
        let arm = config.servo_arm_length_mm;

        let mut angles = ANGLES_AT_ZERO;
        let mut ball_joints = [Point3::origin(); LEG_COUNT];
        let mut servo_ball_joints = [Point3::origin(); LEG_COUNT];

        for leg in 0..LEG_COUNT {
            let mut ball_joint = pose.transform_point(&self.plate_joints_local[leg]);
            ball_joint.z += self.home_height_mm;

            let geometric = self.leg_angle(leg, &ball_joint)?;

            let beta = self.arm_azimuths[leg];
            let pivot = self.servo_pivots[leg];
            servo_ball_joints[leg] = Point3::new(
                pivot.x + arm * geometric.cos() * beta.cos(),
                pivot.y + arm * geometric.cos() * beta.sin(),
                pivot.z + arm * geometric.sin(),
            );
            ball_joints[leg] = ball_joint;
            angles[leg] = config.mount_orientations[leg].sign() * geometric;
        }

        Ok(PlatformSolution {
            angles,
            ball_joints,
            servo_ball_joints,
        })
    }

    fn servo_arm_centres(&self) -> &JointPoints {
        &self.servo_arm_centres
    }
}
