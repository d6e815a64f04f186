//! Stable exit codes for the rotfilter CLI.

/// All input consumed and rendered (help-only runs included).
pub const OK: i32 = 0;
/// I/O failure while filtering.
pub const IO: i32 = 1;
/// Unrecognized argument (clap's usage-error convention).
pub const USAGE: i32 = 2;
