// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the utilfns library. It provides
// a stable, host-friendly interface that completely encapsulates the pure
// `kernels`. It is the authoritative boundary between the outside world (a
// plugin host invoking functions by name) and the transform logic.
//
// Call Flow:
//
//   1. [Host Adapter (ffi::python, or an embedder using the rlib)]
//         |
//         `-> resolves the target via `definitions()` / by name ->
//
//   2. [Dispatch (invoke)] -> Receives the function name + already-typed
//         |                   string arguments. Checks arity only; semantic
//         |                   validation belongs to the kernels.
//         |
//         `-> calls the matching pure kernel ->
//
//   3. [Kernel (kernels::{gunzip, cidr, urldecode})]
//         |
//         `-> Returns `Result<_, UtilfnsError>`; dispatch lowers any error
//             into an ordered `ErrorList` of plain-data `FuncError` records,
//             argument attribution included.
//
// ====================================================================================
pub(crate) mod definition;
pub(crate) mod dispatch;

// --- Public Registry & Dispatch API ---
pub use definition::{definitions, FunctionDef, ParameterDef, ReturnType, ReturnValue};
pub use dispatch::invoke;
