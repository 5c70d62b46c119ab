//! Per-servo calibration bounds and the angle conversion at the driver boundary.
//!
//! The solver works in radians around each leg's null posture; the PWM driver
//! and the calibration rig work in calibrated degrees. Everything crossing that
//! boundary goes through [`CalibrationStore::to_servo_degrees`], where angles
//! are checked against the calibrated range and never silently clamped.

use crate::kinematic_traits::{LEG_COUNT, ServoAngles};

/// Two Stewart assemblies share one servo controller.
pub const SERVO_COUNT: usize = 12;

/// Which of the two assemblies a servo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformId {
    A,
    B,
}

impl PlatformId {
    /// First flat servo index of this platform's block.
    pub fn base_index(&self) -> usize {
        match self {
            PlatformId::A => 0,
            PlatformId::B => LEG_COUNT,
        }
    }
}

/// Calibrated angle bounds of one servo, degrees. The null angle is the
/// command corresponding to the platform's rest posture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServoCalibration {
    pub min_angle_deg: f64,
    pub max_angle_deg: f64,
    pub null_angle_deg: f64,
}

impl Default for ServoCalibration {
    /// Factory triplet of the KST servos as wired on both assemblies.
    fn default() -> Self {
        ServoCalibration {
            min_angle_deg: -85.0,
            max_angle_deg: 60.0,
            null_angle_deg: 0.0,
        }
    }
}

#[derive(Debug)]
pub enum CalibrationError {
    IndexOutOfRange { index: usize, count: usize },
    /// A command left the calibrated range; carried back to the caller instead
    /// of clamping.
    OutsideCalibratedRange { index: usize, angle_deg: f64, min_deg: f64, max_deg: f64 },
}

impl std::fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            CalibrationError::IndexOutOfRange { index, count } => {
                write!(f, "servo index {} outside 0..{}", index, count)
            }
            CalibrationError::OutsideCalibratedRange { index, angle_deg, min_deg, max_deg } => {
                write!(
                    f,
                    "servo {}: {:.2}° outside calibrated range {:.2}°..{:.2}°",
                    index, angle_deg, min_deg, max_deg
                )
            }
        }
    }
}

impl std::error::Error for CalibrationError {}

/// Mutable store of all servo calibrations, addressed either by flat index
/// 0..11 (the controller's view) or by `(PlatformId, leg)`. The store itself is
/// not synchronized; an embedder updating it concurrently with solves must
/// provide its own locking.
#[derive(Debug, Clone)]
pub struct CalibrationStore {
    servos: [ServoCalibration; SERVO_COUNT],
}

impl Default for CalibrationStore {
    fn default() -> Self {
        CalibrationStore {
            servos: [ServoCalibration::default(); SERVO_COUNT],
        }
    }
}

impl CalibrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat index of `(platform, leg)`; the historical `leg + platform * 6`
    /// arithmetic lives only here.
    pub fn servo_index(platform: PlatformId, leg: usize) -> Result<usize, CalibrationError> {
        if leg >= LEG_COUNT {
            return Err(CalibrationError::IndexOutOfRange { index: leg, count: LEG_COUNT });
        }
        Ok(platform.base_index() + leg)
    }

    fn servo(&self, index: usize) -> Result<&ServoCalibration, CalibrationError> {
        self.servos
            .get(index)
            .ok_or(CalibrationError::IndexOutOfRange { index, count: SERVO_COUNT })
    }

    fn servo_mut(&mut self, index: usize) -> Result<&mut ServoCalibration, CalibrationError> {
        self.servos
            .get_mut(index)
            .ok_or(CalibrationError::IndexOutOfRange { index, count: SERVO_COUNT })
    }

    pub fn min_angle(&self, index: usize) -> Result<f64, CalibrationError> {
        Ok(self.servo(index)?.min_angle_deg)
    }

    pub fn max_angle(&self, index: usize) -> Result<f64, CalibrationError> {
        Ok(self.servo(index)?.max_angle_deg)
    }

    pub fn null_angle(&self, index: usize) -> Result<f64, CalibrationError> {
        Ok(self.servo(index)?.null_angle_deg)
    }

    pub fn set_min_angle(&mut self, index: usize, value: f64) -> Result<(), CalibrationError> {
        self.servo_mut(index)?.min_angle_deg = value;
        Ok(())
    }

    pub fn set_max_angle(&mut self, index: usize, value: f64) -> Result<(), CalibrationError> {
        self.servo_mut(index)?.max_angle_deg = value;
        Ok(())
    }

    pub fn set_null_angle(&mut self, index: usize, value: f64) -> Result<(), CalibrationError> {
        self.servo_mut(index)?.null_angle_deg = value;
        Ok(())
    }

    /// Converts one platform's solved angles to calibrated driver degrees:
    /// radians → degrees, null offset applied, range verified.
    pub fn to_servo_degrees(
        &self,
        platform: PlatformId,
        angles: &ServoAngles,
    ) -> Result<[f64; LEG_COUNT], CalibrationError> {
        let mut degrees = [0.0; LEG_COUNT];
        for leg in 0..LEG_COUNT {
            let index = Self::servo_index(platform, leg)?;
            let servo = self.servo(index)?;
            let command = angles[leg].to_degrees() + servo.null_angle_deg;
            if command < servo.min_angle_deg || command > servo.max_angle_deg {
                return Err(CalibrationError::OutsideCalibratedRange {
                    index,
                    angle_deg: command,
                    min_deg: servo.min_angle_deg,
                    max_deg: servo.max_angle_deg,
                });
            }
            degrees[leg] = command;
        }
        Ok(degrees)
    }
}
