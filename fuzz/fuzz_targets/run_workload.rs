//! Fuzz harness for the driver
//!
//! Out-of-range records must surface as errors, and both backends must agree
//! on every input they accept.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rangeq_engine::{Backend, Engine};
use rangeq_logging::{LogLevel, Logger, LoggingConfig};

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };
    // Keeps the naive backend's O(n * q) bounded.
    if input.len() > 4096 {
        return;
    }

    let logger = Logger::collecting(LoggingConfig::new().with_level(LogLevel::Error));
    let naive = Engine::new(Backend::Naive, &logger).run_input(input).ok();
    let fenwick = Engine::new(Backend::Fenwick, &logger).run_input(input).ok();
    assert_eq!(naive.map(|r| r.answers), fenwick.map(|r| r.answers));
});
