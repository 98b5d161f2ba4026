//! Linear-algebra defaults

use crate::error::Result;
use crate::registry::Registry;

pub(crate) fn register(registry: &mut Registry) -> Result<()> {
    // Dense matrices
    registry.add_as_scalar("Matrix-SymmetryThreshold", 1.0e-12)?;
    registry.add_as_unsigned_integer("Matrix-SizeVisibleInStr", 5)?;
    registry.add_as_scalar("Matrix-DefaultSmallPivot", 1.0e-12)?;
    registry.add_as_scalar("Matrix-MaximalScaling", 1.0e-5)?;

    // Dense factorizations
    registry.add_as_string_enum(
        "LeastSquares-DecompositionMethod",
        "QR",
        &["QR", "SVD", "Cholesky"],
    )?;
    registry.add_as_scalar("Cholesky-RegularizationFactor", 1.0e-10)?;
    registry.add_as_unsigned_integer("Cholesky-MaximumRegularizationRetry", 10)?;
    registry.add_as_scalar("SVD-RankThreshold", 1.0e-10)?;

    // Iterative eigen solver
    registry.add_as_unsigned_integer("EigenSolver-MaximumIteration", 1000)?;
    registry.add_as_scalar("EigenSolver-AbsoluteError", 1.0e-10)?;
    registry.add_as_scalar("EigenSolver-RelativeError", 1.0e-10)?;

    // Hierarchical matrices
    registry.add_as_scalar("HMatrix-AssemblyEpsilon", 1.0e-4)?;
    registry.add_as_scalar("HMatrix-RecompressionEpsilon", 1.0e-4)?;
    registry.add_as_unsigned_integer("HMatrix-MaxLeafSize", 250)?;
    registry.add_as_string_enum(
        "HMatrix-CompressionMethod",
        "ACA+",
        &["SVD", "ACA", "ACA+"],
    )?;
    registry.add_as_bool("HMatrix-ForceSequential", false)?;

    // Nearest-neighbour structures
    registry.add_as_unsigned_integer("KDTree-LeafMaxSize", 10)?;
    registry.add_as_string_enum(
        "NearestNeighbour-DefaultAlgorithm",
        "KDTree",
        &["KDTree", "RegularGrid", "Naive"],
    )?;

    Ok(())
}
