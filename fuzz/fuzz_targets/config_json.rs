#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(args) = thor::fuzzing::apply_config_from_json(input) {
            debug_assert!(args.hammers.get() >= 1);
            debug_assert!(args.throws.get() >= 1);
            if let Some(timeout) = args.connect_timeout {
                debug_assert!(!timeout.is_zero());
            }
        }
    }
});
