//! This file is the root of the `utilfns` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`bridge`,
//!     `kernels`, etc.) so the Rust compiler knows they exist.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported by the Python orchestration host.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod kernels;

pub mod error;
#[cfg(feature = "extension-module")]
mod ffi;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

/// The `utilfns` Python module, containing all exposed Rust functions.
#[cfg(feature = "extension-module")]
#[pymodule]
fn utilfns(_py: Python, m: &PyModule) -> PyResult<()> {
    // --- The three transform functions ---
    m.add_function(wrap_pyfunction!(ffi::base64gunzip_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::cidrcontains_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::urldecode_py, m)?)?;

    // --- Registry negotiation for the host ---
    m.add_function(wrap_pyfunction!(ffi::definitions_py, m)?)?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on logging for dispatch tracing ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
