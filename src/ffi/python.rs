// In: src/ffi/python.rs

use log::LevelFilter;
use pyo3::prelude::*;
use std::fs::OpenOptions;
use std::sync::Once;

use crate::bridge;
use crate::kernels::{cidr, gunzip, urldecode};

//==================================================================================
// I. Function Wrappers
//==================================================================================

/// Decompresses a base64-encoded gzip string into UTF-8 text.
#[pyfunction]
#[pyo3(name = "base64gunzip")]
pub fn base64gunzip_py(py: Python, data: String) -> PyResult<String> {
    let text = py.allow_threads(move || gunzip::decode(&data))?;
    Ok(text)
}

/// Returns whether `address` falls inside the CIDR `prefix`.
#[pyfunction]
#[pyo3(name = "cidrcontains")]
pub fn cidrcontains_py(py: Python, prefix: String, address: String) -> PyResult<bool> {
    let contained = py.allow_threads(move || cidr::contains(&prefix, &address))?;
    Ok(contained)
}

/// Decodes a URL-query-encoded string.
#[pyfunction]
#[pyo3(name = "urldecode")]
pub fn urldecode_py(py: Python, input: String) -> PyResult<String> {
    let text = py.allow_threads(move || urldecode::decode(&input))?;
    Ok(text)
}

/// Returns the function registry as a JSON string, for hosts that negotiate
/// definitions before dispatching calls.
#[pyfunction]
#[pyo3(name = "definitions")]
pub fn definitions_py() -> PyResult<String> {
    serde_json::to_string(&bridge::definitions())
        .map_err(|e| crate::error::UtilfnsError::Ffi(e.to_string()).into())
}

//==================================================================================
// II. Logging Control
//==================================================================================

static INIT_LOGGER: Once = Once::new();

#[pyfunction]
#[pyo3(name = "enable_verbose_logging")]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    let mut open_error = None;

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(&filename) {
                Ok(file) => builder.target(env_logger::Target::Pipe(Box::new(file))),
                Err(e) => {
                    open_error = Some(format!("could not open log file '{}': {}", filename, e));
                    return;
                }
            };
        }

        let _ = builder.try_init();
    });

    match open_error {
        Some(message) => Err(crate::error::UtilfnsError::Ffi(message).into()),
        None => Ok(()),
    }
}
