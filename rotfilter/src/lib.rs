//! Line filter applying a selectable substitution cipher to stdin.
//!
//! Two transforms exist: ROT13 over ASCII letters and ROT47 over the full
//! printable-ASCII range. Exactly one is active per invocation, chosen by
//! the CLI before line processing begins. The architecture keeps the split:
//!
//! - **[`cipher`]**: Pure character transforms. No I/O, total over `char`,
//!   fully testable in isolation.
//! - **[`render`]**: The line loop, generic over reader and writer so tests
//!   run against in-memory buffers instead of a process.

pub mod cipher;
pub mod exit_codes;
pub mod logging;
pub mod render;
