//! Distribution and sample-statistics defaults

use crate::error::Result;
use crate::registry::Registry;

pub(crate) fn register(registry: &mut Registry) -> Result<()> {
    // Generic distribution settings
    registry.add_as_unsigned_integer("Distribution-DefaultPointNumber", 129)?;
    registry.add_as_scalar("Distribution-DefaultQuantileEpsilon", 1.0e-12)?;
    registry.add_as_scalar("Distribution-DefaultPDFEpsilon", 1.0e-14)?;
    registry.add_as_scalar("Distribution-DefaultCDFEpsilon", 1.0e-14)?;
    registry.add_as_unsigned_integer("Distribution-DefaultIntegrationNodesNumber", 255)?;
    registry.add_as_unsigned_integer("Distribution-CharacteristicFunctionBlockMax", 20)?;
    registry.add_as_bool("Distribution-Parallel", true)?;
    registry.add_as_string_enum(
        "Distribution-EntropySamplingMethod",
        "MonteCarlo",
        &["MonteCarlo", "QuasiMonteCarlo"],
    )?;

    // Random generation
    registry.add_as_unsigned_integer("RandomGenerator-InitialSeed", 0)?;
    registry.add_as_unsigned_integer("RandomMixture-DefaultBlockMax", 16)?;

    // Samples
    registry.add_as_unsigned_integer("Sample-SizeVisibleInStr", 20)?;
    registry.add_as_unsigned_integer("Sample-SmallKendallTau", 23)?;
    registry.add_as_string_enum(
        "Sample-CSVFormat",
        "scientific",
        &["scientific", "fixed", "shortest"],
    )?;
    registry.add_as_string("Sample-CSVSeparator", ";")?;
    registry.add_as_unsigned_integer("Sample-CSVPrecision", 16)?;

    // Parametric estimation
    registry.add_as_unsigned_integer("Estimator-DefaultBootstrapSize", 100)?;
    registry.add_as_scalar("Estimator-DefaultConfidenceLevel", 0.95)?;
    registry.add_as_string_enum(
        "Estimator-NormalizationMethod",
        "MinMax",
        &["CenterReduce", "MinMax", "None"],
    )?;

    // Kernel smoothing
    registry.add_as_unsigned_integer("KernelSmoothing-SmallSize", 250)?;
    registry.add_as_unsigned_integer("KernelSmoothing-BinNumber", 1024)?;
    registry.add_as_scalar("KernelSmoothing-CutOffPlugin", 5.0)?;
    registry.add_as_bool("KernelSmoothing-Boundary", false)?;

    // Fitting tests
    registry.add_as_unsigned_integer("FittingTest-LillieforsMaximumSamplingSize", 100000)?;
    registry.add_as_string_enum(
        "FittingTest-ModelSelectionCriterion",
        "BIC",
        &["BIC", "AIC", "AICC"],
    )?;

    Ok(())
}
