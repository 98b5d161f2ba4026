//! Process-wide typed registry of tunable numerical parameters.
//!
//! Every numeric subsystem of the surrounding system reads its tunables
//! (iteration counts, tolerances, algorithm choices, cache sizes) from this
//! registry through string-literal keys. Entries are typed (string, scalar,
//! unsigned integer, boolean), seeded from a hard-coded catalogue on first
//! access, and optionally overlaid by an external `tunables.conf` XML file
//! discovered on a configurable search path.
//!
//! Access to the process-wide instance goes through [`Registry::acquire`],
//! which returns a guard holding a global exclusive lock for the scope of
//! the call:
//!
//! ```
//! use tunables::Registry;
//!
//! let registry = Registry::acquire();
//! assert!(registry.has_key("Cache-MaxSize"));
//! let cache_size = registry.get_as_unsigned_integer("Cache-MaxSize")?;
//! # let _ = cache_size;
//! # Ok::<(), tunables::RegistryError>(())
//! ```
//!
//! All accessors return owned copies, never references into the store, so
//! guards can be dropped immediately after each call.

mod defaults;
mod error;
mod file;
mod registry;
mod value;

pub use defaults::runtime::NUM_THREADS_VAR;
pub use error::{RegistryError, Result};
pub use file::{CONFIG_PATH_VAR, CONFIGURATION_FILE_NAME};
pub use registry::Registry;
pub use value::{Value, ValueKind};

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

// One-time construction of the process-wide instance. Seeding failures
// (corrupt seed data, malformed environment override, broken override file)
// abort on first acquisition.
static REGISTRY: Lazy<Mutex<Registry>> =
    Lazy::new(|| Mutex::new(Registry::standalone().expect("failed to seed the tunables registry")));

impl Registry {
    /// Locked access to the process-wide instance.
    ///
    /// Constructs and seeds the instance on the first call in the process;
    /// afterwards the fast path is the initialization guard check plus the
    /// lock. The returned guard holds the global exclusive lock until it is
    /// dropped, so keep its scope to one call site.
    pub fn acquire() -> MutexGuard<'static, Registry> {
        REGISTRY.lock().unwrap()
    }
}
