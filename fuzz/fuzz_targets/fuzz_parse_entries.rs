#![no_main]
use deepform::{Options, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<(String, String)>, bool)| {
    let (entries, omit_empty_strings) = input;
    let opts = Options { omit_empty_strings };
    let value = parse(entries, &opts);
    let _ = serde_json::to_string(&value.into_json());
});
