use anyhow::Context;
use nalgebra::{Point3, Translation3, UnitQuaternion};
use rs_stewart_kinematics::body_kinematics::{BodyKinematics, MouthPose};
use rs_stewart_kinematics::calibration::{CalibrationStore, PlatformId};
use rs_stewart_kinematics::kinematic_traits::Pose;
use rs_stewart_kinematics::utils::{dump_angles, dump_pose};

/// Usage example.
fn main() -> anyhow::Result<()> {
    let body = BodyKinematics::instance();
    println!(
        "Platform '{}', home height {:.3} mm",
        body.stewart_config().name,
        body.head().home_height_mm()
    );

    println!("Neutral pose solves to the null posture:");
    let neutral = Pose::identity();
    let solution = body
        .compute_servo_angles(&neutral)
        .context("neutral pose must be solvable")?;
    dump_angles(&solution.angles);

    println!("Lifted and tilted pose:");
    let tilted = Pose::from_parts(
        Translation3::new(0.0, 2.0, 6.0),
        UnitQuaternion::from_euler_angles(0.05, -0.04, 0.1),
    );
    let solution = body.compute_servo_angles(&tilted)?;
    dump_angles(&solution.angles);
    for leg in 0..6 {
        println!(
            "  leg {}: ball joint ({:7.2} {:7.2} {:7.2}), arm tip ({:7.2} {:7.2} {:7.2})",
            leg,
            solution.ball_joints[leg].x,
            solution.ball_joints[leg].y,
            solution.ball_joints[leg].z,
            solution.servo_ball_joints[leg].x,
            solution.servo_ball_joints[leg].y,
            solution.servo_ball_joints[leg].z,
        );
    }

    println!("Driver commands in calibrated degrees (platform A):");
    let store = CalibrationStore::new();
    let degrees = store.to_servo_degrees(PlatformId::A, &solution.angles)?;
    println!("{:?}", degrees);

    println!("A pose far beyond the rods is rejected, not clamped:");
    let unreachable = Pose::from_parts(Translation3::new(0.0, 0.0, 60.0), UnitQuaternion::identity());
    match body.compute_servo_angles(&unreachable) {
        Ok(_) => println!("unexpectedly solvable"),
        Err(e) => println!("{}", e),
    }

    println!("Head pose relative to a displaced, rolled body:");
    let body_pose = Pose::from_parts(
        Translation3::new(4.0, -3.0, 2.0),
        UnitQuaternion::from_euler_angles(0.1, 0.0, 0.2),
    );
    let above_belly = Pose::from_parts(
        Translation3::new(0.0, 0.0, 5.0),
        UnitQuaternion::from_euler_angles(0.0, 0.05, 0.0),
    );
    let head_pose = body.compute_head_stewart_pose(&body_pose, &above_belly);
    dump_pose(&head_pose);

    println!("Same body orientation re-pivoted about a point on the base:");
    let re_pivoted = body.translate_orientation(&body_pose, &Point3::new(0.0, 0.0, -20.0));
    dump_pose(&re_pivoted);

    println!("Mouth servos for a 10 mm opening:");
    let mouth = body.compute_mouth_angles(&MouthPose {
        yaw_rad: 0.1,
        mouth_open_mm: 10.0,
        mouth_rad: 0.0,
    });
    println!(
        "yaw {:.2}°, lower lip {:.2}°, angle {:.2}°",
        mouth.yaw_rad.to_degrees(),
        mouth.lower_lip_rad.to_degrees(),
        mouth.angle_rad.to_degrees()
    );

    Ok(())
}
