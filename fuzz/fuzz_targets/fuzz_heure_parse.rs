#![no_main]
use libfuzzer_sys::fuzz_target;
use heure::Heure;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(h) = s.parse::<Heure>() {
            let again: Heure = h.to_string().parse().expect("display output parses");
            assert_eq!(again, h);
        }
    }
});
