#![no_main]

use libfuzzer_sys::fuzz_target;

fn numeric_string(data: &[u8]) -> String {
    data.iter()
        .take(24)
        .map(|&byte| match byte % 13 {
            0..=9 => char::from(b'0' + (byte % 10)),
            10 => '-',
            11 => ' ',
            _ => '+',
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let input = numeric_string(data);
    if let Ok(value) = thor::fuzzing::parse_positive_usize_input(&input) {
        debug_assert!(value.get() >= 1);
    }
});
