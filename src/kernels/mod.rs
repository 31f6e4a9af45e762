// In: src/kernels/mod.rs

//! This module contains the pure, stateless transform kernels that carry the
//! library's actual semantics. Each kernel is a single deterministic pass
//! over its immediate arguments: no shared state, no I/O, no dependency on
//! any other kernel. The dispatch layer in `bridge` is the only caller.

pub mod cidr;
pub mod gunzip;
pub mod urldecode;
