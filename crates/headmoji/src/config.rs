use crate::prelude::*;
use headmoji_core::{HeadingPrefixer, PrefixTable};
use std::fs;
use std::path::{Path, PathBuf};

/// Location used when no `--config` is given: `<config_dir>/headmoji/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("headmoji").join("config.toml"))
}

/// Load the prefix table for this invocation.
///
/// An explicit path must exist. The default location is only read when the
/// file is there; otherwise the built-in symbols are used.
pub fn load_prefix_table(explicit: Option<&Path>) -> Result<PrefixTable> {
    resolve_prefix_table(explicit, default_config_path().as_deref())
}

pub fn build_prefixer(global: &crate::Global) -> Result<HeadingPrefixer> {
    let table = load_prefix_table(global.config.as_deref())?;
    HeadingPrefixer::new(table).context("Failed to build heading matcher")
}

fn resolve_prefix_table(explicit: Option<&Path>, fallback: Option<&Path>) -> Result<PrefixTable> {
    if let Some(path) = explicit {
        return read_prefix_table(path);
    }

    match fallback {
        Some(path) if path.is_file() => read_prefix_table(path),
        _ => {
            log::debug!("Using built-in prefix table");
            Ok(PrefixTable::default())
        }
    }
}

fn read_prefix_table(path: &Path) -> Result<PrefixTable> {
    log::debug!("Loading prefix table from {}", path.display());

    let source = fs::read_to_string(path)
        .with_context(|| f!("Failed to read config file {}", path.display()))?;

    PrefixTable::from_toml_str(&source)
        .with_context(|| f!("Invalid config file {}", path.display()))
}
