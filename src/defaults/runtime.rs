//! Runtime-sizing and platform defaults

use std::env;
use std::thread;

use crate::error::{RegistryError, Result};
use crate::registry::Registry;

/// Environment variable overriding the thread-count hint.
pub const NUM_THREADS_VAR: &str = "TUNABLES_NUM_THREADS";

pub(crate) fn register(registry: &mut Registry) -> Result<()> {
    // Using physical core counts (logical/2) is faster in most situations.
    let logical = thread::available_parallelism().map_or(1, |n| n.get() as u64);
    registry.add_as_unsigned_integer("ThreadPool-ThreadsNumber", (logical / 2).max(1))?;
    if let Some(text) = env::var_os(NUM_THREADS_VAR) {
        let text = text.to_string_lossy();
        let threads = text
            .trim()
            .parse::<u64>()
            .map_err(|_| RegistryError::InvalidEnvironmentValue {
                var: NUM_THREADS_VAR.to_string(),
                value: text.to_string(),
            })?;
        registry.set_as_unsigned_integer("ThreadPool-ThreadsNumber", threads)?;
    }

    registry.add_as_unsigned_integer("Cache-MaxSize", 65536)?;
    registry.add_as_bool("Os-RemoveTemporaryFiles", true)?;
    registry.add_as_unsigned_integer("Collection-SizeVisibleInStr", 10)?;

    // Special-function evaluation
    registry.add_as_scalar("SpecFunc-Precision", 2.0e-16)?;
    registry.add_as_unsigned_integer("SpecFunc-MaximumIteration", 1000)?;

    // Symbolic formula parser
    registry.add_as_string_enum(
        "SymbolicParser-Backend",
        "native",
        &["native", "bytecode"],
    )?;
    registry.add_as_unsigned_integer("SymbolicParser-SmallSize", 100)?;
    registry.add_as_unsigned_integer("SymbolicParser-MaxStackDepth", 400)?;

    Ok(())
}
