//! Rust implementation of closed-form inverse kinematics for rotary-servo
//! Stewart platforms, driving the head and body of an animatronic figure.
//!
//! Six servos on the fixed base plate each swing a short arm; rigid rods with
//! ball joints at both ends connect the arm tips to the moving plate. Given a
//! target pose of the moving plate (position in millimetres plus orientation),
//! the solver returns the six servo angles realizing it together with the
//! world-space joint positions that physical calibration and rendering need.
//! The solve is strictly pose → angles; forward kinematics, trajectory
//! planning and servo control loops are out of scope.
//!
//! # Features
//!
//! - Closed-form per-leg solve (no iteration), using `atan2` forms throughout.
//! - Travel limits are honored with an explicit, deterministic branch policy;
//!   an unreachable pose is a typed error naming the failing leg, never a
//!   clamped or NaN output.
//! - Platform geometry is validated once when a solver is built; solve-time
//!   code relies on those invariants.
//! - A facade composes body and head poses (head pose relative to the body
//!   from an absolute target, orientation re-pivoting) and maps mouth poses
//!   to the separate mouth linkage.
//! - Per-servo calibration bounds with degree conversion at the driver
//!   boundary, addressed by `(platform, leg)` or by flat servo index.
//!
//! # Parameters
//!
//! This library describes one platform with a [`parameters::stewart_kinematics::StewartConfiguration`]:
//! plate and servo layout radii and half-spread angles, rod and arm lengths,
//! height offsets, servo travel limits, and the per-leg mounting orientation.
//! The stock body platform is compiled in; YAML loading is available behind
//! the `allow_filesystem` feature.

pub mod parameters;
pub mod parameters_platforms;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod transforms;

pub mod body_kinematics;

pub mod calibration;

pub mod kinematic_error;
pub mod parameter_error;

#[cfg(test)]
mod tests;
