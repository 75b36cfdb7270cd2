//! Constants used throughout the stencil application

/// Root key of the parameter tree under which all values live
pub const VALUES_KEY: &str = "Values";

/// Templates whose name starts with this prefix are only rendered through `include`
pub const LIBRARY_PREFIX: &str = "_";

/// Maximum active nesting of `include` calls for a single template name
pub const INCLUDE_RECURSION_LIMIT: usize = 1000;

/// Name of the template function that renders another registered template
pub const INCLUDE_FUNCTION: &str = "include";

/// Separator between key and value in `--set` and `--set-from-file` arguments
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const USAGE: i32 = 2;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

/// Stack reserved for the rendering thread; nested `include` calls recurse
/// through the engine up to `INCLUDE_RECURSION_LIMIT` times.
pub const RENDER_STACK_SIZE: usize = 512 * 1024 * 1024;
