// In: src/config.rs

//! The single source of truth for all utilfns runtime configuration.
//!
//! This module defines the unified `UtilfnsConfig` struct, which is designed
//! to be created once at the application boundary (e.g., from a host settings
//! block or a Python keyword argument) and then passed down read-only. The
//! kernels themselves stay pure; configuration only ever tightens what they
//! will accept.

use serde::{Deserialize, Serialize};

/// Runtime limits for the transform kernels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilfnsConfig {
    /// Upper bound on the number of bytes the gunzip kernel will inflate.
    ///
    /// `None` preserves the historical unbounded behavior. Hosts that feed
    /// untrusted input should set a cap so a small base64 payload cannot
    /// expand into an arbitrarily large allocation.
    pub max_decompressed_bytes: Option<usize>,
}

impl Default for UtilfnsConfig {
    fn default() -> Self {
        UtilfnsConfig {
            max_decompressed_bytes: None,
        }
    }
}
