// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration for a virtual-machine host.
//!
//! A [`RuntimeConfiguration`] pairs a fixed [`RuntimeFlavor`] with the name of
//! the exported function the runtime invokes at program start. Each flavor
//! supplies a default entry point; callers may override it before handing the
//! configuration to the runtime.
//!
//! ```
//! use vmconf::{RuntimeConfiguration, RuntimeFlavor};
//!
//! let mut config = RuntimeConfiguration::new(RuntimeFlavor::Wasi);
//! assert_eq!(config.entry_point_name(), "_main");
//!
//! config.set_entry_point_name("_start");
//! assert_eq!(config.entry_point_name(), "_start");
//! assert_eq!(config.flavor(), RuntimeFlavor::Wasi);
//! ```

pub mod config;
pub mod error;
pub mod flavor;

pub use config::RuntimeConfiguration;
pub use error::ParseFlavorError;
pub use flavor::RuntimeFlavor;
