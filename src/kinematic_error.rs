//! Error reporting for the inverse-kinematics solve.

/// Why a single leg could not be solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Infeasibility {
    /// The ball joint is further from the servo pivot than the fully extended
    /// arm + rod chain can reach.
    BeyondReach { distance_mm: f64, max_mm: f64 },

    /// The ball joint is closer to the servo pivot than the folded
    /// arm + rod chain allows.
    TooClose { distance_mm: f64, min_mm: f64 },

    /// The ball joint is within rod reach of the pivot sphere, but no rotation
    /// of the arm inside its plane places the tip on the rod sphere.
    NoArmSolution,

    /// Both geometric solutions exist but lie outside the configured servo travel.
    /// Carries both candidate angles (radians) for diagnosis.
    OutsideTravel { primary_rad: f64, alternate_rad: f64 },
}

/// Raised synchronously by the solver. The solve is all-or-nothing: either all
/// six legs are solvable or the whole call fails with the first offending leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicError {
    InfeasiblePose { leg: usize, reason: Infeasibility },
}

impl std::fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Infeasibility::BeyondReach { distance_mm, max_mm } => write!(
                f,
                "ball joint {:.3} mm from servo pivot, beyond the {:.3} mm reach",
                distance_mm, max_mm
            ),
            Infeasibility::TooClose { distance_mm, min_mm } => write!(
                f,
                "ball joint {:.3} mm from servo pivot, closer than the {:.3} mm minimum",
                distance_mm, min_mm
            ),
            Infeasibility::NoArmSolution => write!(
                f,
                "no arm rotation places the rod on the ball joint"
            ),
            Infeasibility::OutsideTravel { primary_rad, alternate_rad } => write!(
                f,
                "both solutions outside servo travel ({:.2}° and {:.2}°)",
                primary_rad.to_degrees(),
                alternate_rad.to_degrees()
            ),
        }
    }
}

impl std::fmt::Display for KinematicError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicError::InfeasiblePose { leg, ref reason } => {
                write!(f, "Pose infeasible for leg {}: {}", leg, reason)
            }
        }
    }
}

impl std::error::Error for KinematicError {}
