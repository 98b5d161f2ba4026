//! Discovery and overlay of the optional override file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RegistryError, Result};
use crate::registry::Registry;
use crate::value::{
    Value, parse_bool_lenient, parse_scalar_lenient, parse_unsigned_integer_lenient,
};

/// Fixed file name searched for in the configuration directories.
pub const CONFIGURATION_FILE_NAME: &str = "tunables.conf";

/// Environment variable holding extra directories to search first, in
/// platform path-list syntax.
pub const CONFIG_PATH_VAR: &str = "TUNABLES_CONFIG_PATH";

const ROOT_ELEMENT_NAME: &str = "tunables-configuration";

// Typed value attributes, checked in this order; first non-empty wins.
const ATTR_STR: &str = "value_str";
const ATTR_FLOAT: &str = "value_float";
const ATTR_INT: &str = "value_int";
const ATTR_BOOL: &str = "value_bool";

/// Directories searched for the override file, in priority order.
fn config_directories() -> Vec<PathBuf> {
    let mut directories = Vec::new();
    if let Some(paths) = env::var_os(CONFIG_PATH_VAR) {
        directories.extend(env::split_paths(&paths));
    }
    if cfg!(target_os = "linux") {
        if let Some(dir) = dirs::config_dir() {
            directories.push(dir.join("tunables"));
        }
    } else if let Some(dir) = dirs::home_dir() {
        directories.push(dir.join(".tunables"));
    }
    directories
}

fn find_configuration_file() -> Option<PathBuf> {
    config_directories()
        .into_iter()
        .map(|dir| dir.join(CONFIGURATION_FILE_NAME))
        .find(|path| path.is_file())
}

/// Overlay the discovered override file onto the registry, if one exists.
///
/// A missing file is not an error: the defaults stand.
pub(crate) fn load_override(registry: &mut Registry) -> Result<()> {
    match find_configuration_file() {
        Some(path) => registry.load_configuration_file(&path),
        None => {
            log::warn!("no override file found, using default parameters");
            Ok(())
        }
    }
}

impl Registry {
    /// Overlay an explicit override file onto the registry.
    ///
    /// The document root must be `tunables-configuration`. Each child
    /// element's tag is a key; the first non-empty of the attributes
    /// `value_str`, `value_float`, `value_int`, `value_bool` carries the
    /// value, parsed with the same lenient parsers as [`Registry::set`].
    /// Entries are upserted directly, so the file may introduce keys absent
    /// from the defaults. Unknown attributes are ignored.
    pub fn load_configuration_file(&mut self, path: &Path) -> Result<()> {
        log::info!("using override file {}", path.display());
        let parse_error = |reason: String| RegistryError::ConfigFileParse {
            path: path.to_path_buf(),
            reason,
        };

        let text = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
        let document = roxmltree::Document::parse(&text).map_err(|e| parse_error(e.to_string()))?;

        let root = document.root_element();
        if root.tag_name().name() != ROOT_ELEMENT_NAME {
            return Err(parse_error(format!(
                "invalid root element '{}', expected '{}'",
                root.tag_name().name(),
                ROOT_ELEMENT_NAME
            )));
        }

        for node in root.children().filter(|node| node.is_element()) {
            let key = node.tag_name().name();
            let value = if let Some(text) = non_empty_attribute(&node, ATTR_STR) {
                Value::Str(text.to_string())
            } else if let Some(text) = non_empty_attribute(&node, ATTR_FLOAT) {
                Value::Scalar(parse_scalar_lenient(text))
            } else if let Some(text) = non_empty_attribute(&node, ATTR_INT) {
                Value::UnsignedInteger(parse_unsigned_integer_lenient(text))
            } else if let Some(text) = non_empty_attribute(&node, ATTR_BOOL) {
                Value::Bool(parse_bool_lenient(text))
            } else {
                continue;
            };
            log::debug!("override {} = {}", key, value.to_text());
            self.upsert(key, value);
        }
        Ok(())
    }
}

fn non_empty_attribute<'a>(node: &roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|value| !value.is_empty())
}
