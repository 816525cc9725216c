//! Logger installation over the ABI.

use std::os::raw::c_int;

/// Install the crate's logger (filtered by `RUST_LOG`).
/// Returns 0 on success, 1 if a logger was already installed.
#[no_mangle]
pub extern "C" fn sb_init_logging() -> c_int {
    match crate::logging::init() {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
