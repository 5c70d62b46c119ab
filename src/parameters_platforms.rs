//! Hardcoded geometry for the physical platforms

pub mod stewart_kinematics {
    use crate::parameters::stewart_kinematics::{
        MountOrientation, MouthConfiguration, StewartConfiguration,
    };

    /// The stock even/odd mounting alternation.
    const ALTERNATING: [MountOrientation; 6] = [
        MountOrientation::Standard,
        MountOrientation::Mirrored,
        MountOrientation::Standard,
        MountOrientation::Mirrored,
        MountOrientation::Standard,
        MountOrientation::Mirrored,
    ];

    #[allow(dead_code)]
    impl StewartConfiguration {
        // Provides default values
        pub fn new() -> Self {
            StewartConfiguration {
                name: String::new(),
                servo_centre_radius_mm: 0.0,
                servo_centre_angle_rad: 0.0,
                servo_arm_centre_radius_mm: 0.0,
                servo_arm_centre_angle_rad: 0.0,
                plate_joint_radius_mm: 0.0,
                plate_joint_angle_rad: 0.0,
                rod_length_mm: 0.0,
                servo_arm_length_mm: 0.0,
                servo_centre_height_mm: 0.0,
                plate_ball_joint_height_mm: 0.0,
                bottom_platform_radius_mm: 0.0,
                top_platform_radius_x_mm: 0.0,
                top_platform_radius_y_mm: 0.0,
                bottom_servo_limit_rad: 0.0,
                top_servo_limit_rad: 0.0,
                mount_orientations: ALTERNATING,
            }
        }

        /// The body platform as built: KST servos on a 65 mm base plate carrying
        /// the head on 74 mm rods.
        pub fn body() -> Self {
            StewartConfiguration {
                name: "body".to_string(),
                servo_centre_radius_mm: 27.354,
                servo_centre_angle_rad: 12.83_f64.to_radians(),
                servo_arm_centre_radius_mm: 35.211,
                servo_arm_centre_angle_rad: 9.93_f64.to_radians(),
                plate_joint_radius_mm: 28.036,
                plate_joint_angle_rad: 8.2_f64.to_radians(),
                rod_length_mm: 74.0,
                servo_arm_length_mm: 29.478,
                servo_centre_height_mm: 31.2,
                plate_ball_joint_height_mm: -4.5,
                bottom_platform_radius_mm: 65.0,
                top_platform_radius_x_mm: 50.0,
                top_platform_radius_y_mm: 75.0,
                bottom_servo_limit_rad: -56.0_f64.to_radians(),
                top_servo_limit_rad: 86.0_f64.to_radians(),
                ..Self::new()
            }
        }
    }

    #[allow(dead_code)]
    impl MouthConfiguration {
        /// The mouth linkage mounted on the body platform's head plate.
        pub fn body_mouth() -> Self {
            MouthConfiguration {
                mouth_base_height_mm: 55.0,
                lower_lip_lever_length_mm: 30.0,
                lower_lip_servo_arm_length_mm: 27.0,
            }
        }
    }
}
