//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable, e.g. `RUST_LOG=daycycle=trace`
/// to see per-tick output.
///
/// # Example
/// ```
/// daycycle::core::logging::init();
/// log::info!("Cycle started");
/// ```
pub fn init() {
    // The host may already own a logger; keep it in that case
    if let Err(e) = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .format_timestamp_millis()
    .try_init()
    {
        log::debug!("env_logger not installed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        log::info!("logger still usable");
    }
}
