// In: src/ffi/mod.rs

//! The Python-facing adapter. Everything in here is marshaling; the
//! semantics live in `kernels` and the registry in `bridge`.

pub mod python;

pub use python::{
    base64gunzip_py, cidrcontains_py, definitions_py, enable_verbose_logging_py, urldecode_py,
};
