#![no_main]
use libfuzzer_sys::fuzz_target;
use heure::{Options, normalize_value};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mut v) = serde_json::from_str::<serde_json::Value>(s) {
            let opts = Options::default();
            if normalize_value(&mut v, &opts).is_ok() {
                // A converted document has nothing left to convert.
                assert_eq!(normalize_value(&mut v, &opts).ok(), Some(0));
            }
        }
    }
});
