// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime flavor enum selecting the VM's operating mode.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ParseFlavorError;

/// Operating modes supported by the runtime.
///
/// The flavor decides which host bindings the runtime installs and which
/// exported function it calls by default:
/// - `Wasm`: Generic module execution, no default entry point
/// - `EWasm`: Embedded scripting, starts at `main`
/// - `Wasi`: System interface, starts at `_main`
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RuntimeFlavor {
    /// Generic module execution
    #[default]
    Wasm = 0,
    /// Embedded scripting
    #[value(name = "ewasm")]
    EWasm = 1,
    /// System interface
    Wasi = 2,
}

impl RuntimeFlavor {
    /// Every flavor, in discriminant order.
    pub const ALL: [RuntimeFlavor; 3] = [Self::Wasm, Self::EWasm, Self::Wasi];

    /// Entry point assigned when a configuration is built for this flavor.
    ///
    /// `Wasm` has none and yields the empty string, leaving the choice to the
    /// runtime or the caller.
    pub fn default_entry_point(self) -> &'static str {
        match self {
            Self::Wasm => "",
            Self::EWasm => "main",
            Self::Wasi => "_main",
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wasm => "wasm",
            Self::EWasm => "ewasm",
            Self::Wasi => "wasi",
        }
    }

    /// Numeric discriminant for owners that carry the flavor as an integer.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for RuntimeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeFlavor {
    type Err = ParseFlavorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|flavor| flavor.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseFlavorError::Unknown(s.to_string()))
    }
}

impl TryFrom<u32> for RuntimeFlavor {
    type Error = ParseFlavorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Wasm),
            1 => Ok(Self::EWasm),
            2 => Ok(Self::Wasi),
            other => Err(ParseFlavorError::Discriminant(other)),
        }
    }
}

#[cfg(test)]
#[path = "flavor_tests.rs"]
mod tests;
