//! Process exit codes. The result contract only ever uses these two.

/// The command succeeded.
pub const SUCCESS: i32 = 0;

/// Any handled failure: usage, credential, schema, unsupported operation,
/// missing client, or an error from the API.
pub const FAILURE: i32 = 1;
