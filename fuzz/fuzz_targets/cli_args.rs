#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let tokens: Vec<&str> = input.split_whitespace().take(64).collect();
        if let Ok(args) = thor::fuzzing::parse_cli_input(&tokens) {
            debug_assert!(args.hammers.get() >= 1);
            debug_assert!(args.throws.get() >= 1);
            if let Some(url) = args.target_url() {
                debug_assert!(tokens.contains(&url));
            }
        }
    }
});
