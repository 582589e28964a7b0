//! Exit code constants for the resumake CLI.
//!
//! Each failure class gets its own code so callers can distinguish causes:
//! - 0: Success
//! - 1: User error (bad args, invalid config, closed input stream)
//! - 2: Template load or parse failure
//! - 3: Output file I/O failure
//! - 4: Render/substitution failure
//! - 5: Compiler invocation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or input stream closed.
pub const USER_ERROR: i32 = 1;

/// Template failure: the template file is missing or malformed.
pub const TEMPLATE_FAILURE: i32 = 2;

/// I/O failure: the rendered output could not be written.
pub const IO_FAILURE: i32 = 3;

/// Render failure: a placeholder could not be substituted.
pub const RENDER_FAILURE: i32 = 4;

/// Compiler failure: the external compiler exited non-zero or could not run.
/// The rendered source file is still on disk when this is reported.
pub const COMPILER_FAILURE: i32 = 5;
