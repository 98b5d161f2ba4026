//! The registry core: one typed map plus the enumeration side-table

use std::collections::HashMap;
use std::fmt;

use crate::defaults;
use crate::error::{RegistryError, Result};
use crate::file;
use crate::value::{
    Value, ValueKind, parse_bool_lenient, parse_scalar_lenient, parse_unsigned_integer_lenient,
};

/// Process-wide store of tunable parameters.
///
/// Entries live in a single map keyed by name, each holding a tagged
/// [`Value`]; a key therefore exists under at most one type at any time.
/// String entries may additionally carry an enumeration of admissible
/// values, checked on every string write.
///
/// The process-wide instance is reached through [`Registry::acquire`],
/// which holds the global lock for the scope of the returned guard.
pub struct Registry {
    map: HashMap<String, Value>,
    string_enums: HashMap<String, Vec<String>>,
}

impl Registry {
    /// Create an empty registry with nothing seeded.
    pub(crate) fn empty() -> Self {
        Self {
            map: HashMap::new(),
            string_enums: HashMap::new(),
        }
    }

    /// Create a standalone seeded instance, independent of the global one.
    ///
    /// Runs the same load pipeline as first acquisition: hard-coded
    /// defaults, then the optional override file. Useful for tests and for
    /// embedders that inject their own context object instead of the
    /// process-wide singleton.
    pub fn standalone() -> Result<Self> {
        let mut registry = Self::empty();
        registry.reload()?;
        Ok(registry)
    }

    // --- Typed queries -----------------------------------------------------

    /// Get any entry's value formatted to its canonical text form.
    pub fn get(&self, key: &str) -> Result<String> {
        self.entry(key).map(Value::to_text)
    }

    /// Get the type tag of an entry.
    pub fn get_type(&self, key: &str) -> Result<ValueKind> {
        self.entry(key).map(Value::kind)
    }

    /// Get a string entry; fails if the key does not hold a string.
    pub fn get_as_string(&self, key: &str) -> Result<String> {
        self.entry_of_kind(key, ValueKind::Str)
            .map(|v| v.as_str().unwrap_or_default().to_string())
    }

    /// Get a scalar entry; fails if the key does not hold a scalar.
    pub fn get_as_scalar(&self, key: &str) -> Result<f64> {
        self.entry_of_kind(key, ValueKind::Scalar)
            .map(|v| v.as_scalar().unwrap_or_default())
    }

    /// Get an unsigned-integer entry; fails if the key does not hold one.
    pub fn get_as_unsigned_integer(&self, key: &str) -> Result<u64> {
        self.entry_of_kind(key, ValueKind::UnsignedInteger)
            .map(|v| v.as_unsigned_integer().unwrap_or_default())
    }

    /// Get a boolean entry; fails if the key does not hold a boolean.
    pub fn get_as_bool(&self, key: &str) -> Result<bool> {
        self.entry_of_kind(key, ValueKind::Bool)
            .map(|v| v.as_bool().unwrap_or_default())
    }

    /// Whether the key exists under any type.
    pub fn has_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Whether the key has a registered enumeration.
    pub fn has_string_enum(&self, key: &str) -> bool {
        self.string_enums.contains_key(key)
    }

    /// The admissible values registered for a string key.
    pub fn get_string_enum(&self, key: &str) -> Result<Vec<String>> {
        self.string_enums
            .get(key)
            .cloned()
            .ok_or_else(|| RegistryError::NoEnum { key: key.to_string() })
    }

    /// All keys, lexicographically sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.map.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// All string-typed keys.
    pub fn string_keys(&self) -> Vec<String> {
        self.keys_of_kind(ValueKind::Str)
    }

    /// All scalar-typed keys.
    pub fn scalar_keys(&self) -> Vec<String> {
        self.keys_of_kind(ValueKind::Scalar)
    }

    /// All unsigned-integer-typed keys.
    pub fn unsigned_integer_keys(&self) -> Vec<String> {
        self.keys_of_kind(ValueKind::UnsignedInteger)
    }

    /// All boolean-typed keys.
    pub fn bool_keys(&self) -> Vec<String> {
        self.keys_of_kind(ValueKind::Bool)
    }

    /// Keys containing the given substring, in sorted order.
    ///
    /// Plain substring match, not a pattern language.
    pub fn find_keys(&self, substring: &str) -> Vec<String> {
        self.keys()
            .into_iter()
            .filter(|key| key.contains(substring))
            .collect()
    }

    /// Total number of entries.
    pub fn size(&self) -> usize {
        self.map.len()
    }

    /// Number of string entries.
    pub fn string_size(&self) -> usize {
        self.size_of_kind(ValueKind::Str)
    }

    /// Number of scalar entries.
    pub fn scalar_size(&self) -> usize {
        self.size_of_kind(ValueKind::Scalar)
    }

    /// Number of unsigned-integer entries.
    pub fn unsigned_integer_size(&self) -> usize {
        self.size_of_kind(ValueKind::UnsignedInteger)
    }

    /// Number of boolean entries.
    pub fn bool_size(&self) -> usize {
        self.size_of_kind(ValueKind::Bool)
    }

    // --- Typed mutations ---------------------------------------------------

    /// Set an existing entry from text, coercing into whatever type the key
    /// already holds.
    ///
    /// Parsing is deliberately permissive, preserved from the legacy
    /// textual-override behavior: malformed scalar text stores the sentinel
    /// `-1.0`, malformed unsigned-integer text stores `0`, and boolean text
    /// accepts `true`/`false` then `1`/`0`, storing `false` otherwise.
    /// Fails with `MissingKey` if the key exists nowhere.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed = match self.get_type(key)? {
            ValueKind::Str => Value::Str(value.to_string()),
            ValueKind::Scalar => Value::Scalar(parse_scalar_lenient(value)),
            ValueKind::UnsignedInteger => {
                Value::UnsignedInteger(parse_unsigned_integer_lenient(value))
            }
            ValueKind::Bool => Value::Bool(parse_bool_lenient(value)),
        };
        log::debug!("set {} = {}", key, parsed.to_text());
        self.map.insert(key.to_string(), parsed);
        Ok(())
    }

    /// Overwrite a string entry, checking its enumeration if one is
    /// registered.
    pub fn set_as_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.entry_of_kind(key, ValueKind::Str)?;
        if let Some(allowed) = self.string_enums.get(key) {
            if !allowed.iter().any(|v| v == value) {
                return Err(RegistryError::ConstraintViolation {
                    key: key.to_string(),
                    value: value.to_string(),
                    allowed: allowed.clone(),
                });
            }
        }
        self.map.insert(key.to_string(), Value::Str(value.to_string()));
        Ok(())
    }

    /// Overwrite a scalar entry.
    pub fn set_as_scalar(&mut self, key: &str, value: f64) -> Result<()> {
        self.entry_of_kind(key, ValueKind::Scalar)?;
        self.map.insert(key.to_string(), Value::Scalar(value));
        Ok(())
    }

    /// Overwrite an unsigned-integer entry.
    pub fn set_as_unsigned_integer(&mut self, key: &str, value: u64) -> Result<()> {
        self.entry_of_kind(key, ValueKind::UnsignedInteger)?;
        self.map
            .insert(key.to_string(), Value::UnsignedInteger(value));
        Ok(())
    }

    /// Overwrite a boolean entry.
    pub fn set_as_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.entry_of_kind(key, ValueKind::Bool)?;
        self.map.insert(key.to_string(), Value::Bool(value));
        Ok(())
    }

    /// Insert a brand-new string entry.
    pub fn add_as_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert_new(key, Value::Str(value.to_string()))
    }

    /// Insert a brand-new string entry constrained to an enumeration.
    ///
    /// The default value must belong to the enumeration; a violation means
    /// corrupt seed data and surfaces as `InvalidDefault`.
    pub fn add_as_string_enum(&mut self, key: &str, value: &str, variants: &[&str]) -> Result<()> {
        if !variants.contains(&value) {
            return Err(RegistryError::InvalidDefault {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        self.insert_new(key, Value::Str(value.to_string()))?;
        self.string_enums.insert(
            key.to_string(),
            variants.iter().map(|v| v.to_string()).collect(),
        );
        Ok(())
    }

    /// Insert a brand-new scalar entry.
    pub fn add_as_scalar(&mut self, key: &str, value: f64) -> Result<()> {
        self.insert_new(key, Value::Scalar(value))
    }

    /// Insert a brand-new unsigned-integer entry.
    pub fn add_as_unsigned_integer(&mut self, key: &str, value: u64) -> Result<()> {
        self.insert_new(key, Value::UnsignedInteger(value))
    }

    /// Insert a brand-new boolean entry.
    pub fn add_as_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.insert_new(key, Value::Bool(value))
    }

    /// Remove an entry of any type, together with its enumeration if one is
    /// registered.
    pub fn remove_key(&mut self, key: &str) -> Result<()> {
        if self.map.remove(key).is_none() {
            return Err(RegistryError::MissingKey {
                key: key.to_string(),
            });
        }
        self.string_enums.remove(key);
        Ok(())
    }

    /// Clear everything, reseed the hard-coded defaults, then overlay the
    /// optional override file.
    ///
    /// Restores every default even after arbitrary prior mutations or
    /// removals. A missing override file is logged and ignored.
    pub fn reload(&mut self) -> Result<()> {
        self.map.clear();
        self.string_enums.clear();
        defaults::seed_all(self)?;
        file::load_override(self)?;
        Ok(())
    }

    // --- Internals ---------------------------------------------------------

    fn entry(&self, key: &str) -> Result<&Value> {
        self.map.get(key).ok_or_else(|| RegistryError::MissingKey {
            key: key.to_string(),
        })
    }

    fn entry_of_kind(&self, key: &str, kind: ValueKind) -> Result<&Value> {
        match self.map.get(key) {
            Some(value) if value.kind() == kind => Ok(value),
            _ => Err(RegistryError::MissingTypedKey {
                key: key.to_string(),
                expected: kind,
            }),
        }
    }

    fn insert_new(&mut self, key: &str, value: Value) -> Result<()> {
        if self.map.contains_key(key) {
            return Err(RegistryError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    /// Insert or overwrite regardless of current type. Overlay-only path:
    /// the override file may introduce keys absent from the defaults.
    pub(crate) fn upsert(&mut self, key: &str, value: Value) {
        self.map.insert(key.to_string(), value);
    }

    fn keys_of_kind(&self, kind: ValueKind) -> Vec<String> {
        let mut keys: Vec<String> = self
            .map
            .iter()
            .filter(|(_, value)| value.kind() == kind)
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn size_of_kind(&self, kind: ValueKind) -> usize {
        self.map.values().filter(|value| value.kind() == kind).count()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.keys() {
            if let Some(value) = self.map.get(&key) {
                writeln!(f, "{} => {}", key, value.to_text())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_query() {
        let mut registry = Registry::empty();
        registry.add_as_string("Solver-Backend", "dense").unwrap();
        registry.add_as_scalar("Solver-Tolerance", 1e-10).unwrap();
        registry
            .add_as_unsigned_integer("Solver-MaximumIteration", 100)
            .unwrap();
        registry.add_as_bool("Solver-Verbose", false).unwrap();

        assert!(registry.has_key("Solver-Backend"));
        assert_eq!(registry.get_type("Solver-Backend").unwrap(), ValueKind::Str);
        assert_eq!(
            registry.get_type("Solver-Tolerance").unwrap(),
            ValueKind::Scalar
        );
        assert_eq!(
            registry.get_type("Solver-MaximumIteration").unwrap(),
            ValueKind::UnsignedInteger
        );
        assert_eq!(registry.get_type("Solver-Verbose").unwrap(), ValueKind::Bool);

        assert_eq!(registry.get_as_scalar("Solver-Tolerance").unwrap(), 1e-10);
        assert_eq!(registry.get("Solver-MaximumIteration").unwrap(), "100");
        assert_eq!(registry.size(), 4);
    }

    #[test]
    fn test_missing_key() {
        let registry = Registry::empty();
        assert!(matches!(
            registry.get("Nothing"),
            Err(RegistryError::MissingKey { .. })
        ));
        assert!(matches!(
            registry.get_type("Nothing"),
            Err(RegistryError::MissingKey { .. })
        ));
        assert!(!registry.has_key("Nothing"));
    }

    #[test]
    fn test_strict_accessor_wrong_kind() {
        let mut registry = Registry::empty();
        registry.add_as_scalar("Epsilon", 1e-8).unwrap();

        let err = registry.get_as_bool("Epsilon").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MissingTypedKey {
                expected: ValueKind::Bool,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut registry = Registry::empty();
        registry.add_as_unsigned_integer("BlockSize", 256).unwrap();
        assert!(matches!(
            registry.add_as_unsigned_integer("BlockSize", 512),
            Err(RegistryError::DuplicateKey { .. })
        ));
        // Cross-kind duplicates are rejected too: one entry per key.
        assert!(matches!(
            registry.add_as_string("BlockSize", "big"),
            Err(RegistryError::DuplicateKey { .. })
        ));
        assert_eq!(registry.get_as_unsigned_integer("BlockSize").unwrap(), 256);
    }

    #[test]
    fn test_set_coerces_into_existing_kind() {
        let mut registry = Registry::empty();
        registry.add_as_unsigned_integer("X", 1).unwrap();
        registry.set("X", "42").unwrap();
        assert_eq!(registry.get_as_unsigned_integer("X").unwrap(), 42);

        registry.add_as_scalar("Y", 0.5).unwrap();
        registry.set("Y", "2.25").unwrap();
        assert_eq!(registry.get_as_scalar("Y").unwrap(), 2.25);

        registry.add_as_bool("Z", false).unwrap();
        registry.set("Z", "true").unwrap();
        assert!(registry.get_as_bool("Z").unwrap());
        registry.set("Z", "0").unwrap();
        assert!(!registry.get_as_bool("Z").unwrap());

        registry.add_as_string("W", "before").unwrap();
        registry.set("W", "after").unwrap();
        assert_eq!(registry.get("W").unwrap(), "after");
    }

    #[test]
    fn test_set_lenient_parsing_sentinels() {
        let mut registry = Registry::empty();
        registry.add_as_scalar("S", 3.0).unwrap();
        registry.set("S", "garbage").unwrap();
        assert_eq!(registry.get_as_scalar("S").unwrap(), -1.0);

        registry.add_as_unsigned_integer("U", 3).unwrap();
        registry.set("U", "garbage").unwrap();
        assert_eq!(registry.get_as_unsigned_integer("U").unwrap(), 0);
    }

    #[test]
    fn test_set_missing_key() {
        let mut registry = Registry::empty();
        assert!(matches!(
            registry.set("Nothing", "1"),
            Err(RegistryError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_string_enum_constraint() {
        let mut registry = Registry::empty();
        registry
            .add_as_string_enum("Mode", "A", &["A", "B"])
            .unwrap();

        assert!(registry.has_string_enum("Mode"));
        assert_eq!(registry.get_string_enum("Mode").unwrap(), vec!["A", "B"]);

        assert!(matches!(
            registry.set_as_string("Mode", "C"),
            Err(RegistryError::ConstraintViolation { .. })
        ));
        registry.set_as_string("Mode", "B").unwrap();
        assert_eq!(registry.get("Mode").unwrap(), "B");
    }

    #[test]
    fn test_invalid_default_rejected() {
        let mut registry = Registry::empty();
        assert!(matches!(
            registry.add_as_string_enum("Mode", "C", &["A", "B"]),
            Err(RegistryError::InvalidDefault { .. })
        ));
        assert!(!registry.has_key("Mode"));
        assert!(!registry.has_string_enum("Mode"));
    }

    #[test]
    fn test_no_enum_introspection() {
        let mut registry = Registry::empty();
        registry.add_as_string("Plain", "x").unwrap();
        assert!(!registry.has_string_enum("Plain"));
        assert!(matches!(
            registry.get_string_enum("Plain"),
            Err(RegistryError::NoEnum { .. })
        ));
    }

    #[test]
    fn test_remove_key() {
        let mut registry = Registry::empty();
        assert!(matches!(
            registry.remove_key("Nothing"),
            Err(RegistryError::MissingKey { .. })
        ));

        registry
            .add_as_string_enum("Mode", "A", &["A", "B"])
            .unwrap();
        registry.remove_key("Mode").unwrap();
        assert!(!registry.has_key("Mode"));
        assert!(!registry.has_string_enum("Mode"));
        assert!(!registry.keys().contains(&"Mode".to_string()));
    }

    #[test]
    fn test_keys_sorted_and_partitioned() {
        let mut registry = Registry::empty();
        registry.add_as_bool("B-Flag", true).unwrap();
        registry.add_as_scalar("A-Tolerance", 0.1).unwrap();
        registry.add_as_string("C-Name", "x").unwrap();
        registry.add_as_unsigned_integer("D-Count", 7).unwrap();

        assert_eq!(
            registry.keys(),
            vec!["A-Tolerance", "B-Flag", "C-Name", "D-Count"]
        );
        assert_eq!(registry.string_keys(), vec!["C-Name"]);
        assert_eq!(registry.scalar_keys(), vec!["A-Tolerance"]);
        assert_eq!(registry.unsigned_integer_keys(), vec!["D-Count"]);
        assert_eq!(registry.bool_keys(), vec!["B-Flag"]);

        assert_eq!(registry.string_size(), 1);
        assert_eq!(registry.scalar_size(), 1);
        assert_eq!(registry.unsigned_integer_size(), 1);
        assert_eq!(registry.bool_size(), 1);
        assert_eq!(registry.size(), 4);
    }

    #[test]
    fn test_find_keys_substring() {
        let mut registry = Registry::empty();
        registry.add_as_unsigned_integer("Cache-MaxSize", 1024).unwrap();
        registry.add_as_unsigned_integer("Proxy-CacheSize", 64).unwrap();
        registry.add_as_scalar("Solver-Tolerance", 1e-6).unwrap();

        assert_eq!(
            registry.find_keys("Cache"),
            vec!["Cache-MaxSize", "Proxy-CacheSize"]
        );
        assert!(registry.find_keys("Nowhere").is_empty());
    }

    #[test]
    fn test_display_lists_sorted_entries() {
        let mut registry = Registry::empty();
        registry.add_as_unsigned_integer("B", 2).unwrap();
        registry.add_as_string("A", "one").unwrap();
        assert_eq!(registry.to_string(), "A => one\nB => 2\n");
    }
}
