#![no_main]
use libfuzzer_sys::fuzz_target;
use mathlex_charcommands::{InvalidPolicy, RuleGenerator};

fuzz_target!(|data: &[u8]| {
    // Arbitrary tables must never panic, whatever the policy.
    let s = String::from_utf8_lossy(data);
    let _ = RuleGenerator::new().generate(&s, InvalidPolicy::Skip);
    let _ = RuleGenerator::new().generate(&s, InvalidPolicy::Abort);
});
