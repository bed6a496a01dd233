#![no_main]
use deepform::{Options, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let pairs = form_urlencoded::parse(data).into_owned();
    let value = parse(pairs, &Options::default());
    let _ = value.into_json();
});
