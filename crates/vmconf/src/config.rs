// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The configuration value handed to the runtime.

use tracing::debug;

use crate::flavor::RuntimeFlavor;

/// Flavor and entry point for one runtime instance.
///
/// The flavor is fixed at construction. The entry-point name starts at the
/// flavor's default and may be overwritten any number of times. No check is
/// made that the name is a legal symbol; the runtime reports a missing export
/// when it tries to call it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfiguration {
    flavor: RuntimeFlavor,
    entry_point_name: String,
}

impl RuntimeConfiguration {
    /// Create a configuration for `flavor` with its default entry point.
    pub fn new(flavor: RuntimeFlavor) -> Self {
        let entry_point_name = flavor.default_entry_point().to_string();
        debug!(%flavor, entry_point = %entry_point_name, "runtime configuration created");
        Self {
            flavor,
            entry_point_name,
        }
    }

    /// Replace the entry point, consuming and returning the configuration.
    pub fn with_entry_point_name(mut self, name: impl Into<String>) -> Self {
        self.set_entry_point_name(name);
        self
    }

    /// Flavor fixed at construction.
    pub fn flavor(&self) -> RuntimeFlavor {
        self.flavor
    }

    /// Current entry-point name.
    pub fn entry_point_name(&self) -> &str {
        &self.entry_point_name
    }

    /// Mutable handle to the entry-point name for in-place edits.
    pub fn entry_point_name_mut(&mut self) -> &mut String {
        &mut self.entry_point_name
    }

    /// Overwrite the entry point. Any string is accepted, including "".
    pub fn set_entry_point_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(
            flavor = %self.flavor,
            previous = %self.entry_point_name,
            entry_point = %name,
            "entry point overridden"
        );
        self.entry_point_name = name;
    }

    /// Whether an entry point is set. False for a fresh `Wasm` configuration.
    pub fn has_entry_point(&self) -> bool {
        !self.entry_point_name.is_empty()
    }
}

impl From<RuntimeFlavor> for RuntimeConfiguration {
    fn from(flavor: RuntimeFlavor) -> Self {
        Self::new(flavor)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
