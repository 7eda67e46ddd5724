//! Fuzz harness for range-minimum reconstruction input

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };
    if input.len() > 4096 {
        return;
    }
    let _ = rangeq_minrecon::solve(input);
});
