#![no_main]

use libfuzzer_sys::fuzz_target;
use tsuhan::cursor::ByteCursor;

fuzz_target!(|data: &[u8]| {
    // First byte picks a format, the rest is the payload
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let format = match selector % 6 {
        0 => "sfffflll",
        1 => "sl",
        2 => "ss",
        3 => "slfffffffff",
        4 => "sll",
        _ => "ffff",
    };
    let mut cursor = ByteCursor::new(payload);
    while !cursor.is_empty() {
        if cursor.read_format(format).is_err() {
            break;
        }
    }
});
