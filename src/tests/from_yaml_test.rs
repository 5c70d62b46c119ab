mod tests {
    use approx::assert_relative_eq;

    use crate::parameter_error::ParameterError;
    use crate::parameters::stewart_kinematics::{MountOrientation, StewartConfiguration};

    const BODY_YAML: &str = "
# body platform
name: body
stewart_geometric_parameters:
  servo_centre_radius_mm: 27.354
  servo_centre_angle: deg(12.83)
  servo_arm_centre_radius_mm: 35.211
  servo_arm_centre_angle: deg(9.93)
  plate_joint_radius_mm: 28.036
  plate_joint_angle: deg(8.2)
  rod_length_mm: 74.0
  servo_arm_length_mm: 29.478
  servo_centre_height_mm: 31.2
  plate_ball_joint_height_mm: -4.5
  bottom_platform_radius_mm: 65.0
  top_platform_radius_x_mm: 50.0
  top_platform_radius_y_mm: 75.0
  bottom_servo_limit: deg(-56.0)
  top_servo_limit: deg(86.0)
stewart_mount_orientations: [standard, mirrored, standard, mirrored, standard, mirrored]
";

    #[test]
    fn parses_the_body_platform() {
        let parsed = StewartConfiguration::from_yaml(BODY_YAML).expect("valid document");
        let body = StewartConfiguration::body();
        assert_eq!(parsed.name, body.name);
        assert_relative_eq!(parsed.servo_centre_radius_mm, body.servo_centre_radius_mm);
        assert_relative_eq!(parsed.servo_centre_angle_rad, body.servo_centre_angle_rad);
        assert_relative_eq!(parsed.plate_joint_angle_rad, body.plate_joint_angle_rad);
        assert_relative_eq!(parsed.rod_length_mm, body.rod_length_mm);
        assert_relative_eq!(parsed.bottom_servo_limit_rad, body.bottom_servo_limit_rad);
        assert_relative_eq!(parsed.top_servo_limit_rad, body.top_servo_limit_rad);
        assert_eq!(parsed.mount_orientations, body.mount_orientations);
    }

    #[test]
    fn radians_are_accepted_without_the_deg_wrapper() {
        let yaml = BODY_YAML.replace("deg(12.83)", "0.2239");
        let parsed = StewartConfiguration::from_yaml(&yaml).expect("plain radians");
        assert_relative_eq!(parsed.servo_centre_angle_rad, 0.2239, epsilon = 1e-12);
    }

    #[test]
    fn missing_mount_orientations_default_to_the_stock_alternation() {
        let yaml = BODY_YAML.replace(
            "stewart_mount_orientations: [standard, mirrored, standard, mirrored, standard, mirrored]",
            "",
        );
        let parsed = StewartConfiguration::from_yaml(&yaml).expect("orientations optional");
        assert_eq!(parsed.mount_orientations[0], MountOrientation::Standard);
        assert_eq!(parsed.mount_orientations[1], MountOrientation::Mirrored);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let yaml = BODY_YAML.replace("  rod_length_mm: 74.0\n", "");
        match StewartConfiguration::from_yaml(&yaml) {
            Err(ParameterError::MissingField(field)) => assert_eq!(field, "rod_length_mm"),
            other => panic!("expected MissingField, got {:?}", other.map(|c| c.name)),
        }
    }

    #[test]
    fn malformed_angle_is_a_parse_error() {
        let yaml = BODY_YAML.replace("deg(8.2)", "about eight degrees");
        assert!(matches!(
            StewartConfiguration::from_yaml(&yaml),
            Err(ParameterError::ParseError(_))
        ));
    }

    #[test]
    fn non_physical_geometry_is_rejected_after_parsing() {
        let yaml = BODY_YAML.replace("rod_length_mm: 74.0", "rod_length_mm: -74.0");
        assert!(matches!(
            StewartConfiguration::from_yaml(&yaml),
            Err(ParameterError::InvalidConfiguration(_))
        ));
    }
}
