//! Optimization and root-finding defaults

use crate::error::Result;
use crate::registry::Registry;

pub(crate) fn register(registry: &mut Registry) -> Result<()> {
    // Generic solver settings
    registry.add_as_unsigned_integer("Optimizer-DefaultMaximumIteration", 100)?;
    registry.add_as_unsigned_integer("Optimizer-DefaultMaximumEvaluation", 1000)?;
    registry.add_as_scalar("Optimizer-DefaultAbsoluteError", 1.0e-5)?;
    registry.add_as_scalar("Optimizer-DefaultRelativeError", 1.0e-5)?;
    registry.add_as_scalar("Optimizer-DefaultResidualError", 1.0e-5)?;
    registry.add_as_scalar("Optimizer-DefaultConstraintError", 1.0e-5)?;
    registry.add_as_bool("Optimizer-CheckAnalyticalGradient", true)?;
    registry.add_as_string_enum(
        "Optimizer-DefaultAlgorithm",
        "Cobyla",
        &["Cobyla", "NelderMead", "LBFGS", "SQP"],
    )?;

    // Line search
    registry.add_as_scalar("LineSearch-InitialStep", 1.0)?;
    registry.add_as_scalar("LineSearch-ShrinkFactor", 0.5)?;
    registry.add_as_unsigned_integer("LineSearch-MaximumIteration", 30)?;

    // Scalar root finding
    registry.add_as_scalar("RootSolver-DefaultAbsoluteError", 1.0e-10)?;
    registry.add_as_scalar("RootSolver-DefaultRelativeError", 1.0e-10)?;
    registry.add_as_unsigned_integer("RootSolver-DefaultMaximumIteration", 100)?;
    registry.add_as_string_enum(
        "RootSolver-DefaultAlgorithm",
        "Brent",
        &["Brent", "Bisection", "Secant"],
    )?;

    // Global (multi-start) optimization
    registry.add_as_unsigned_integer("MultiStart-DefaultStartingPointsNumber", 10)?;
    registry.add_as_bool("MultiStart-KeepIntermediateResults", false)?;

    Ok(())
}
