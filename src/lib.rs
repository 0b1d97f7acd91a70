//! # foo
//!
//! Rust binding for the native `libfoo` library.
//!
//! `libfoo` exports a single C symbol, `int square(int)`. This crate locates
//! the library through the platform dynamic loader, resolves the symbol once,
//! and exposes it as [`square`].
//!
//! ## Features
//!
//! - **Process-wide handle**: loaded on first use, shared immutably afterwards
//! - **Explicit handles**: [`NativeLibrary`] can be opened and closed on demand
//! - **Configuration**: library name, explicit path and search directories via TOML/JSON
//! - **Reference library**: the crate's `cdylib` output is itself a `libfoo`
//!
//! ## The `native` feature
//!
//! `native` is enabled by default and exports an unmangled C symbol named
//! `square` from every artifact that links this crate. A downstream `cdylib`
//! re-exports it and can shadow the real `libfoo` in the dynamic linker's
//! global scope. Crates that only consume the binding should depend on it
//! with `default-features = false`:
//!
//! ```toml
//! [dependencies]
//! foo = { version = "0.1", default-features = false }
//! ```
//!
//! ### Example
//!
//! ```ignore
//! let value = foo::square(-5)?;
//! assert_eq!(value, 25);
//! ```
//!
//! ## Modules
//!
//! - [`bindings`]: Binding layer
//! - [`config`]: Configuration
//! - [`crate::core`]: Errors and logging

/// Errors, logging and shared macros
pub mod core;
/// Binding layer for libfoo
pub mod bindings;
/// Configuration system
pub mod config;
/// Reference implementation exported by the cdylib
#[cfg(feature = "native")]
pub mod native;

pub use bindings::{
    is_loaded, load, load_with, square, state, BindingState, CallDescriptor, FfiType,
    NativeLibrary, SQUARE,
};
pub use config::{BindingConfig, ConfigError, ConfigResult, LibraryConfig, LogLevel, LoggingConfig};
pub use crate::core::{init_logging, BindingError, BindingResult};
