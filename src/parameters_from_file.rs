//! Supports extracting Stewart platform parameters from YAML file (optional)

use regex::Regex;
use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::stewart_kinematics::{MountOrientation, StewartConfiguration};

impl StewartConfiguration {
    /// Read the platform configuration from a YAML file. A file like this is supported:
    /// ```yaml
    /// # body platform
    /// name: body
    /// stewart_geometric_parameters:
    ///   servo_centre_radius_mm: 27.354
    ///   servo_centre_angle: deg(12.83)
    ///   servo_arm_centre_radius_mm: 35.211
    ///   servo_arm_centre_angle: deg(9.93)
    ///   plate_joint_radius_mm: 28.036
    ///   plate_joint_angle: deg(8.2)
    ///   rod_length_mm: 74.0
    ///   servo_arm_length_mm: 29.478
    ///   servo_centre_height_mm: 31.2
    ///   plate_ball_joint_height_mm: -4.5
    ///   bottom_platform_radius_mm: 65.0
    ///   top_platform_radius_x_mm: 50.0
    ///   top_platform_radius_y_mm: 75.0
    ///   bottom_servo_limit: deg(-56.0)
    ///   top_servo_limit: deg(86.0)
    /// stewart_mount_orientations: [standard, mirrored, standard, mirrored, standard, mirrored]
    /// ```
    /// Angles are accepted either as plain radians or in the `deg(angle)` form.
    /// Mount orientations are optional and default to the stock alternation.
    /// The returned configuration has already been validated.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Same as [`StewartConfiguration::from_yaml_file`], for an in-memory document.
    pub fn from_yaml(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;

        let geometry = &doc["stewart_geometric_parameters"];
        if geometry.is_badvalue() {
            return Err(ParameterError::MissingField(
                "stewart_geometric_parameters".to_string(),
            ));
        }

        let name = doc["name"].as_str().unwrap_or("unnamed").to_string();

        let config = StewartConfiguration {
            name,
            servo_centre_radius_mm: length(geometry, "servo_centre_radius_mm")?,
            servo_centre_angle_rad: angle(geometry, "servo_centre_angle")?,
            servo_arm_centre_radius_mm: length(geometry, "servo_arm_centre_radius_mm")?,
            servo_arm_centre_angle_rad: angle(geometry, "servo_arm_centre_angle")?,
            plate_joint_radius_mm: length(geometry, "plate_joint_radius_mm")?,
            plate_joint_angle_rad: angle(geometry, "plate_joint_angle")?,
            rod_length_mm: length(geometry, "rod_length_mm")?,
            servo_arm_length_mm: length(geometry, "servo_arm_length_mm")?,
            servo_centre_height_mm: length(geometry, "servo_centre_height_mm")?,
            plate_ball_joint_height_mm: length(geometry, "plate_ball_joint_height_mm")?,
            bottom_platform_radius_mm: length(geometry, "bottom_platform_radius_mm")?,
            top_platform_radius_x_mm: length(geometry, "top_platform_radius_x_mm")?,
            top_platform_radius_y_mm: length(geometry, "top_platform_radius_y_mm")?,
            bottom_servo_limit_rad: angle(geometry, "bottom_servo_limit")?,
            top_servo_limit_rad: angle(geometry, "top_servo_limit")?,
            mount_orientations: mount_orientations(&doc["stewart_mount_orientations"])?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Plain numeric field, integer or real.
fn length(geometry: &Yaml, field: &str) -> Result<f64, ParameterError> {
    let value = &geometry[field];
    value
        .as_f64()
        .or_else(|| value.as_i64().map(|v| v as f64))
        .ok_or_else(|| ParameterError::MissingField(field.to_string()))
}

/// Angle field: a plain number is radians, a `deg(x)` string is degrees.
fn angle(geometry: &Yaml, field: &str) -> Result<f64, ParameterError> {
    let value = &geometry[field];
    if let Some(radians) = value.as_f64().or_else(|| value.as_i64().map(|v| v as f64)) {
        return Ok(radians);
    }
    let text = value
        .as_str()
        .ok_or_else(|| ParameterError::MissingField(field.to_string()))?;

    let re = Regex::new(r"^deg\((-?\d+(\.\d+)?)\)$")
        .map_err(|_| ParameterError::ParseError("Invalid regex pattern".to_string()))?;
    let caps = re.captures(text.trim()).ok_or_else(|| {
        ParameterError::ParseError(format!("{}: bad angle representation '{}'", field, text))
    })?;
    let degrees: f64 = caps
        .get(1)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .parse()
        .map_err(|_| ParameterError::ParseError(format!("{}: '{}'", field, text)))?;
    Ok(degrees.to_radians())
}

/// Optional list of `standard` / `mirrored`; defaults to the stock alternation.
fn mount_orientations(value: &Yaml) -> Result<[MountOrientation; 6], ParameterError> {
    if value.is_badvalue() {
        return Ok(std::array::from_fn(|leg| {
            if leg % 2 == 0 {
                MountOrientation::Standard
            } else {
                MountOrientation::Mirrored
            }
        }));
    }
    let entries = value.as_vec().ok_or_else(|| {
        ParameterError::ParseError("stewart_mount_orientations must be a list".to_string())
    })?;
    if entries.len() != 6 {
        return Err(ParameterError::ParseError(format!(
            "stewart_mount_orientations: expected 6 entries, found {}",
            entries.len()
        )));
    }
    let mut orientations = [MountOrientation::Standard; 6];
    for (leg, entry) in entries.iter().enumerate() {
        orientations[leg] = match entry.as_str() {
            Some("standard") => MountOrientation::Standard,
            Some("mirrored") => MountOrientation::Mirrored,
            _ => {
                return Err(ParameterError::ParseError(format!(
                    "stewart_mount_orientations[{}]: expected 'standard' or 'mirrored'",
                    leg
                )));
            }
        };
    }
    Ok(orientations)
}
