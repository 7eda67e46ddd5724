//! Fuzz harness for the range-update workload parser
//!
//! Arbitrary text must either parse or fail with an error, never panic, and
//! anything that parses must survive a render/parse round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rangeq_parse::parse_workload;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    if let Ok(workload) = parse_workload(input) {
        let again = parse_workload(&workload.to_input()).expect("rendered workload must parse");
        assert_eq!(again, workload);
    }
});
