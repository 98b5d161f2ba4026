//! Metamodel (surrogate) defaults

use crate::error::Result;
use crate::registry::Registry;

pub(crate) fn register(registry: &mut Registry) -> Result<()> {
    // Design-of-experiments proxy
    registry.add_as_unsigned_integer("DesignProxy-DefaultCacheSize", 16777216)?;

    // Gaussian-process regression
    registry.add_as_scalar("GaussianProcess-DefaultNoiseLowerBound", 1.0e-12)?;
    registry.add_as_scalar("GaussianProcess-StartingScaling", 1.0)?;
    registry.add_as_unsigned_integer("GaussianProcess-MaximumIteration", 200)?;
    registry.add_as_bool("GaussianProcess-OptimizeParameters", true)?;
    registry.add_as_string_enum(
        "GaussianProcess-LinearAlgebra",
        "Dense",
        &["Dense", "Hierarchical"],
    )?;
    registry.add_as_string_enum(
        "GaussianProcess-DefaultTrend",
        "Constant",
        &["None", "Constant", "Linear", "Quadratic"],
    )?;

    // Polynomial chaos expansion
    registry.add_as_unsigned_integer("PolynomialChaos-DefaultDegree", 3)?;
    registry.add_as_unsigned_integer("PolynomialChaos-MaximumBasisSize", 1000)?;
    registry.add_as_scalar("PolynomialChaos-SmallResidual", 1.0e-15)?;
    registry.add_as_bool("PolynomialChaos-Sparse", false)?;
    registry.add_as_string_enum(
        "PolynomialChaos-FittingAlgorithm",
        "CorrectedLeaveOneOut",
        &["CorrectedLeaveOneOut", "KFold"],
    )?;
    registry.add_as_unsigned_integer("PolynomialChaos-KFoldParameter", 10)?;

    // Cross-validation
    registry.add_as_unsigned_integer("MetaModelValidation-DefaultSplitRatio", 80)?;
    registry.add_as_bool("MetaModelValidation-Shuffle", true)?;

    Ok(())
}
