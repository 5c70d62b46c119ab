mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Translation3, UnitQuaternion};
    use std::f64::consts::PI;

    use crate::kinematic_error::{Infeasibility, KinematicError};
    use crate::kinematic_traits::{Kinematics, LEG_COUNT, Pose};
    use crate::kinematics_impl::StewartKinematics;
    use crate::parameters::stewart_kinematics::StewartConfiguration;

    fn body_solver() -> StewartKinematics {
        StewartKinematics::new(StewartConfiguration::body()).expect("stock body config")
    }

    fn pose(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Pose {
        Pose::from_parts(
            Translation3::new(x, y, z),
            UnitQuaternion::from_euler_angles(roll, pitch, yaw),
        )
    }

    /// Checks the rigid-link invariants every valid solution must satisfy.
    fn verify_legs(solver: &StewartKinematics, target: &Pose) {
        let config = solver.config().clone();
        let solution = solver.inverse(target).expect("pose should be feasible");
        for leg in 0..LEG_COUNT {
            let ball = solution.ball_joints[leg];
            let tip = solution.servo_ball_joints[leg];
            let pivot = solver.servo_pivot(leg);
            assert_relative_eq!((ball - tip).norm(), config.rod_length_mm, epsilon = 1e-9);
            assert_relative_eq!(
                (tip - pivot).norm(),
                config.servo_arm_length_mm,
                epsilon = 1e-9
            );
            let geometric = config.mount_orientations[leg].sign() * solution.angles[leg];
            assert!(geometric >= config.bottom_servo_limit_rad - 1e-12);
            assert!(geometric <= config.top_servo_limit_rad + 1e-12);
        }
    }

    #[test]
    fn identity_pose_is_the_null_posture() {
        let solver = body_solver();
        let solution = solver.inverse(&Pose::identity()).expect("home is reachable");
        for leg in 0..LEG_COUNT {
            assert_relative_eq!(solution.angles[leg], 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn home_height_matches_the_built_platform() {
        // Regression anchor for the documented body geometry.
        let solver = body_solver();
        assert_relative_eq!(solver.home_height_mm(), 108.53, epsilon = 0.05);
    }

    #[test]
    fn identity_ball_joints_sit_on_the_lifted_plate_circle() {
        let solver = body_solver();
        let config = solver.config().clone();
        let solution = solver.inverse(&Pose::identity()).unwrap();

        // Leg 0 is the standard-mounted leg of the 60° plate pair.
        let azimuth = PI / 3.0 - config.plate_joint_angle_rad;
        let expected = Point3::new(
            config.plate_joint_radius_mm * azimuth.cos(),
            config.plate_joint_radius_mm * azimuth.sin(),
            config.plate_ball_joint_height_mm + solver.home_height_mm(),
        );
        assert_relative_eq!(solution.ball_joints[0], expected, epsilon = 1e-9);

        for leg in 0..LEG_COUNT {
            let joint = solution.ball_joints[leg];
            assert_relative_eq!(
                (joint.x * joint.x + joint.y * joint.y).sqrt(),
                config.plate_joint_radius_mm,
                epsilon = 1e-9
            );
            assert_relative_eq!(joint.z, expected.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn solver_is_deterministic() {
        let solver = body_solver();
        let target = pose(1.5, -2.0, 4.0, 0.04, -0.03, 0.08);
        let first = solver.inverse(&target).unwrap();
        let second = solver.inverse(&target).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn feasible_poses_satisfy_link_lengths() {
        let solver = body_solver();
        verify_legs(&solver, &Pose::identity());
        verify_legs(&solver, &pose(0.0, 0.0, 25.0, 0.0, 0.0, 0.0));
        verify_legs(&solver, &pose(0.0, 0.0, -20.0, 0.0, 0.0, 0.0));
        verify_legs(&solver, &pose(3.0, -4.0, 5.0, 0.05, 0.04, -0.06));
        verify_legs(&solver, &pose(-2.0, 2.0, -5.0, -0.07, 0.02, 0.09));
    }

    #[test]
    fn pure_z_translation_moves_all_legs_alike() {
        let solver = body_solver();
        let config = solver.config().clone();
        let solution = solver
            .inverse(&pose(0.0, 0.0, 6.0, 0.0, 0.0, 0.0))
            .unwrap();

        let reference = config.mount_orientations[0].sign() * solution.angles[0];
        assert!(reference.abs() > 1e-3, "a lifted plate must move the arms");
        for leg in 0..LEG_COUNT {
            let geometric = config.mount_orientations[leg].sign() * solution.angles[leg];
            assert_relative_eq!(geometric, reference, epsilon = 1e-9);
        }
    }

    #[test]
    fn far_pose_is_beyond_reach() {
        let solver = body_solver();
        match solver.inverse(&pose(0.0, 0.0, 60.0, 0.0, 0.0, 0.0)) {
            Err(KinematicError::InfeasiblePose { leg, reason }) => {
                assert!(leg < LEG_COUNT);
                assert!(matches!(reason, Infeasibility::BeyondReach { .. }));
            }
            Ok(_) => panic!("60 mm above home exceeds the rod/arm chain"),
        }
    }

    #[test]
    fn collapsed_pose_is_too_close() {
        let solver = body_solver();
        match solver.inverse(&pose(0.0, 0.0, -35.0, 0.0, 0.0, 0.0)) {
            Err(KinematicError::InfeasiblePose { reason, .. }) => {
                assert!(matches!(reason, Infeasibility::TooClose { .. }));
            }
            Ok(_) => panic!("35 mm below home folds the chain past its minimum"),
        }
    }

    #[test]
    fn low_pose_runs_out_of_servo_travel() {
        // Reachable by the link chain, but both arm solutions exceed the
        // configured travel: the error names both rejected angles.
        let solver = body_solver();
        match solver.inverse(&pose(0.0, 0.0, -30.0, 0.0, 0.0, 0.0)) {
            Err(KinematicError::InfeasiblePose { reason, .. }) => match reason {
                Infeasibility::OutsideTravel { primary_rad, alternate_rad } => {
                    assert!(primary_rad < solver.config().bottom_servo_limit_rad);
                    assert!(alternate_rad < solver.config().bottom_servo_limit_rad);
                }
                other => panic!("expected OutsideTravel, got {:?}", other),
            },
            Ok(_) => panic!("-30 mm should exhaust the servo travel"),
        }
    }

    #[test]
    fn error_carries_readable_context() {
        let solver = body_solver();
        let error = solver
            .inverse(&pose(0.0, 0.0, 60.0, 0.0, 0.0, 0.0))
            .unwrap_err();
        let text = format!("{}", error);
        assert!(text.contains("leg"));
        assert!(text.contains("reach"));
    }

    #[test]
    fn rejects_rod_shorter_than_the_home_gap() {
        let config = StewartConfiguration {
            rod_length_mm: 10.0,
            ..StewartConfiguration::body()
        };
        assert!(StewartKinematics::new(config).is_err());
    }

    #[test]
    fn servo_arm_centres_are_pose_independent_and_on_their_radius() {
        let solver = body_solver();
        let config = solver.config().clone();
        let centres = solver.servo_arm_centres();
        for centre in centres {
            assert_relative_eq!(
                (centre.x * centre.x + centre.y * centre.y).sqrt(),
                config.servo_arm_centre_radius_mm,
                epsilon = 1e-9
            );
            assert_relative_eq!(centre.z, config.servo_centre_height_mm, epsilon = 1e-9);
        }
    }
}
