// In: src/bridge/dispatch.rs

//! Name-based dispatch from the host boundary into the kernels.
//!
//! Arguments arrive already typed (the host has validated that each value is
//! a string); this layer checks arity, routes to the right kernel, and
//! lowers kernel errors into the `ErrorList` shape the host consumes. It
//! adds no semantics of its own.

use log::{debug, warn};

use crate::bridge::definition::{definitions, ReturnValue};
use crate::error::{ErrorList, FuncError};
use crate::kernels::{cidr, gunzip, urldecode};

/// Invokes one registered function by name.
///
/// `args` is positional and must match the declared parameter list exactly.
/// Every failure path returns an `ErrorList`; unknown names and arity
/// mismatches are call-level errors with no argument attribution.
pub fn invoke(name: &str, args: &[&str]) -> Result<ReturnValue, ErrorList> {
    debug!("dispatching function '{}' with {} argument(s)", name, args.len());

    let result = match name {
        "base64gunzip" => {
            check_arity(name, args, 1)?;
            gunzip::decode(args[0]).map(ReturnValue::Text)
        }
        "cidrcontains" => {
            check_arity(name, args, 2)?;
            cidr::contains(args[0], args[1]).map(ReturnValue::Bool)
        }
        "urldecode" => {
            check_arity(name, args, 1)?;
            urldecode::decode(args[0]).map(ReturnValue::Text)
        }
        _ => {
            warn!("call to unknown function '{}'", name);
            return Err(FuncError::new(format!("unknown function: {}", name)).into());
        }
    };

    result.map_err(|err| {
        warn!("function '{}' failed: {}", name, err);
        ErrorList::from(err)
    })
}

fn check_arity(name: &str, args: &[&str], expected: usize) -> Result<(), ErrorList> {
    if args.len() != expected {
        return Err(FuncError::new(format!(
            "{} expects {} argument(s), got {}",
            name,
            expected,
            args.len()
        ))
        .into());
    }
    debug_assert!(
        definitions()
            .iter()
            .any(|def| def.name == name && def.parameters.len() == expected),
        "dispatch arity out of sync with the registry"
    );
    Ok(())
}
