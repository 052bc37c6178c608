#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let doc = match appreq::parse(&s) {
        Ok(d) => d,
        Err(_) => return,
    };

    let first = appreq::validate(&doc);
    let second = appreq::validate(&doc);

    if first != second {
        panic!(
            "Non-deterministic validation.\n\
             Input (lossy): {:?}\n\
             First: {:?}\n\
             Second: {:?}",
            s.get(..200).unwrap_or(&s),
            first,
            second,
        );
    }
});
