// In: src/error.rs

//! This module defines the single, unified error type for the entire utilfns library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Two shapes live here:
//! 1. `UtilfnsError` — the typed enum the kernels return. Each variant knows
//!    which call argument (if any) it is attributable to.
//! 2. `FuncError` / `ErrorList` — the plain-data records handed across the
//!    dispatch boundary. The host resolves `function_argument` against its
//!    own parameter list; nothing framework-specific leaks into the core.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilfnsError {
    // =========================================================================
    // === Kernel Validation Errors (Specific to our library's semantics)
    // =========================================================================
    /// Malformed base64 input to the gunzip kernel.
    #[error("illegal base64 data: {0}")]
    Base64(String),

    /// Malformed or corrupt gzip stream (bad header/trailer, truncated data,
    /// or inflated bytes that are not valid UTF-8).
    #[error("invalid gzip stream: {0}")]
    Gzip(String),

    /// The address argument of cidrcontains is not an IP literal.
    #[error("invalid address format")]
    InvalidAddress,

    /// The prefix argument of cidrcontains is not valid CIDR notation.
    #[error("invalid CIDR format: {0}")]
    InvalidCidr(String),

    /// Address and prefix parsed, but belong to different address families.
    /// The message text is a contract: downstream consumers match on it.
    #[error("address is {address_family}, but CIDR is {cidr_family}")]
    FamilyMismatch {
        address_family: AddressFamily,
        cidr_family: AddressFamily,
    },

    /// Malformed percent-escape, or decoded bytes that are not valid UTF-8.
    #[error("failed to decode URL-encoded string: {0}")]
    UrlDecode(String),

    // =========================================================================
    // === Boundary Errors
    // =========================================================================
    /// An error for Python FFI (Foreign Function Interface) operations.
    #[error("FFI operation failed: {0}")]
    Ffi(String),
}

impl UtilfnsError {
    /// The zero-based index of the call argument this error is attributable
    /// to, or `None` when the error concerns the call as a whole.
    ///
    /// Indices follow the declared signatures in `bridge::definitions()`:
    /// for `cidrcontains(prefix, address)` the prefix is argument 0 and the
    /// address is argument 1. A family mismatch is pinned on the prefix.
    pub fn function_argument(&self) -> Option<usize> {
        match self {
            UtilfnsError::InvalidAddress => Some(1),
            UtilfnsError::InvalidCidr(_) => Some(0),
            UtilfnsError::FamilyMismatch { .. } => Some(0),
            _ => None,
        }
    }
}

/// IPv4 vs IPv6 classification of one side of a cidrcontains call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

//==================================================================================
// Dispatch-Boundary Error Records
//==================================================================================

/// One structured error as delivered to the host: a human-readable message
/// plus an optional argument index for attribution at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuncError {
    pub message: String,
    pub function_argument: Option<usize>,
}

impl FuncError {
    pub fn new(message: impl Into<String>) -> Self {
        FuncError {
            message: message.into(),
            function_argument: None,
        }
    }

    pub fn for_argument(index: usize, message: impl Into<String>) -> Self {
        FuncError {
            message: message.into(),
            function_argument: Some(index),
        }
    }
}

impl From<&UtilfnsError> for FuncError {
    fn from(err: &UtilfnsError) -> Self {
        FuncError {
            message: err.to_string(),
            function_argument: err.function_argument(),
        }
    }
}

/// An ordered accumulation of `FuncError`s for one call.
///
/// A call reports zero or more structured errors atomically. Each kernel in
/// this crate produces at most one, but the type models the general contract
/// so the dispatch layer never has to special-case arity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorList {
    errors: Vec<FuncError>,
}

impl ErrorList {
    pub fn new() -> Self {
        ErrorList { errors: Vec::new() }
    }

    pub fn push(&mut self, error: FuncError) {
        self.errors.push(error);
    }

    /// Appends every error from `other`, preserving order.
    pub fn concat(&mut self, other: ErrorList) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FuncError> {
        self.errors.iter()
    }
}

impl std::fmt::Display for ErrorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", joined)
    }
}

impl From<FuncError> for ErrorList {
    fn from(error: FuncError) -> Self {
        ErrorList {
            errors: vec![error],
        }
    }
}

impl From<UtilfnsError> for ErrorList {
    fn from(err: UtilfnsError) -> Self {
        ErrorList::from(FuncError::from(&err))
    }
}

//==================================================================================
// Manual `From` Implementations (FFI boundary)
//==================================================================================

#[cfg(feature = "extension-module")]
impl From<pyo3::PyErr> for UtilfnsError {
    fn from(err: pyo3::PyErr) -> Self {
        UtilfnsError::Ffi(err.to_string())
    }
}

#[cfg(feature = "extension-module")]
impl From<UtilfnsError> for pyo3::PyErr {
    fn from(err: UtilfnsError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "extension-module")]
impl From<ErrorList> for pyo3::PyErr {
    fn from(errors: ErrorList) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(errors.to_string())
    }
}
