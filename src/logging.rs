//! Logger installation for hosts that want to see the binding's log output.
//!
//! The crate only emits through the `log` facade. Hosts that have their own
//! logger can ignore this; everyone else calls [`init`] once (or
//! `sb_init_logging` over the ABI) and filters with `RUST_LOG`.

use crate::error::Result;

/// Install `env_logger` reading `RUST_LOG`, defaulting to `warn`.
/// Fails if any logger is already installed.
pub fn init() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()?;
    Ok(())
}
