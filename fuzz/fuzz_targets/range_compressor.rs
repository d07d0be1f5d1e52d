#![no_main]
use libfuzzer_sys::fuzz_target;
use mathlex_unicode::{RangeCompressor, SurrogatePair};

fuzz_target!(|data: &[u8]| {
    let mut ranges = RangeCompressor::new();
    let mut accepted = Vec::new();
    for chunk in data.chunks_exact(4) {
        let scalar = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        if ranges.add(scalar).is_ok() {
            accepted.push(scalar as u32);
        }
    }

    // Every accepted scalar is covered exactly once.
    let mut covered = Vec::new();
    for group in ranges.close() {
        for range in &group.ranges {
            assert!(range.start <= range.end);
            for low in range.start..=range.end {
                covered.push(SurrogatePair { high: group.high, low }.decode());
            }
        }
    }
    covered.sort_unstable();
    accepted.sort_unstable();
    assert_eq!(covered, accepted);
});
