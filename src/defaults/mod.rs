//! Registration of the hard-coded default entries, one module per numeric
//! subsystem

pub(crate) mod algebra;
pub(crate) mod metamodel;
pub(crate) mod optimization;
pub(crate) mod runtime;
pub(crate) mod simulation;
pub(crate) mod statistics;

use crate::error::Result;
use crate::registry::Registry;

/// Seed every default entry into a cleared registry.
pub(crate) fn seed_all(registry: &mut Registry) -> Result<()> {
    runtime::register(registry)?;
    algebra::register(registry)?;
    optimization::register(registry)?;
    statistics::register(registry)?;
    simulation::register(registry)?;
    metamodel::register(registry)?;
    log::debug!("seeded {} default entries", registry.size());
    Ok(())
}
