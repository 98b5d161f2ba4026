//! Reliability-simulation defaults

use crate::error::Result;
use crate::registry::Registry;

pub(crate) fn register(registry: &mut Registry) -> Result<()> {
    // Generic simulation algorithm settings
    registry.add_as_unsigned_integer("Simulation-DefaultMaximumOuterSampling", 1000)?;
    registry.add_as_unsigned_integer("Simulation-DefaultBlockSize", 1)?;
    registry.add_as_scalar("Simulation-DefaultMaximumCoefficientOfVariation", 1.0e-1)?;
    registry.add_as_scalar("Simulation-DefaultMaximumStandardDeviation", 0.0)?;
    registry.add_as_scalar("Simulation-DefaultMaximumTimeDuration", -1.0)?;
    registry.add_as_bool("Simulation-KeepSample", false)?;

    // Sobol' sensitivity indices
    registry.add_as_unsigned_integer("Sobol-DefaultSampleSize", 1000)?;
    registry.add_as_string_enum(
        "Sobol-EstimatorMethod",
        "Saltelli",
        &["Saltelli", "Jansen", "MauntzKucherenko", "Martinez"],
    )?;
    registry.add_as_scalar("Sobol-DefaultBootstrapConfidenceLevel", 0.95)?;

    // Directional sampling
    registry.add_as_unsigned_integer("DirectionalSampling-MaximumStratificationDimension", 3)?;
    registry.add_as_string_enum(
        "DirectionalSampling-RootStrategy",
        "SafeAndSlow",
        &["RiskyAndFast", "MediumSafe", "SafeAndSlow"],
    )?;

    // Subset sampling
    registry.add_as_scalar("SubsetSampling-DefaultConditionalProbability", 0.1)?;
    registry.add_as_scalar("SubsetSampling-DefaultProposalRange", 2.0)?;
    registry.add_as_unsigned_integer("SubsetSampling-DefaultMaximumOuterSampling", 10000)?;

    // Importance sampling
    registry.add_as_scalar("ImportanceSampling-DefaultQuantileLevel", 0.25)?;

    // Low-discrepancy sequences
    registry.add_as_string_enum(
        "LowDiscrepancySequence-DefaultKind",
        "Sobol",
        &["Sobol", "Halton", "Faure", "ReverseHalton"],
    )?;
    registry.add_as_bool("LowDiscrepancySequence-Scrambling", true)?;

    Ok(())
}
