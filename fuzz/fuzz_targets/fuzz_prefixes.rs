#![no_main]

use libfuzzer_sys::fuzz_target;
use searchkey::index::SearchPrefixes;

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must re-encode to a buffer that decodes the same way
    if let Ok(set) = SearchPrefixes::decode(data) {
        let bytes = set.to_bytes().unwrap();
        assert_eq!(SearchPrefixes::decode(&bytes).unwrap(), set);
    }
});
