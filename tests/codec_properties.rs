//! Property tests for the record codecs.

use proptest::prelude::*;
use searchkey::index::{tag_field_subkey, SearchPrefixes, TagFieldMetadata, TagPosting};

fn prefix_list() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..24), 0..8)
}

proptest! {
    #[test]
    fn prefixes_roundtrip(prefixes in prefix_list()) {
        let set = SearchPrefixes { prefixes };
        let bytes = set.to_bytes().unwrap();
        prop_assert_eq!(SearchPrefixes::decode(&bytes).unwrap(), set);
    }

    #[test]
    fn prefixes_cut_inside_entry_is_corruption(
        prefixes in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..24), 1..8),
        pick in any::<prop::sample::Index>(),
        cut in any::<prop::sample::Index>(),
    ) {
        let set = SearchPrefixes { prefixes };
        let bytes = set.to_bytes().unwrap();

        // Offset of the chosen entry's payload, then cut somewhere inside it
        let entry = pick.index(set.prefixes.len());
        let start: usize = set.prefixes[..entry].iter().map(|p| 4 + p.len()).sum::<usize>() + 4;
        let end = start + cut.index(set.prefixes[entry].len());

        let err = SearchPrefixes::decode(&bytes[..end]).unwrap_err();
        prop_assert!(err.is_corruption());
    }

    #[test]
    fn prefixes_short_tail_is_tolerated(prefixes in prefix_list(), tail in 1usize..=3) {
        let set = SearchPrefixes { prefixes };
        let mut bytes = set.to_bytes().unwrap();
        bytes.extend(std::iter::repeat_n(0xffu8, tail));
        prop_assert_eq!(SearchPrefixes::decode(&bytes).unwrap(), set);
    }

    #[test]
    fn tag_metadata_roundtrip(separator in any::<u8>(), case_sensitive in any::<bool>()) {
        let meta = TagFieldMetadata::new(separator, case_sensitive);
        prop_assert_eq!(TagFieldMetadata::decode(&meta.to_bytes()).unwrap(), meta);
    }

    #[test]
    fn posting_keys_identify_components(
        a in prop::collection::vec(any::<u8>(), 0..8),
        b in prop::collection::vec(any::<u8>(), 0..8),
        c in prop::collection::vec(any::<u8>(), 0..8),
        d in prop::collection::vec(any::<u8>(), 0..8),
        e in prop::collection::vec(any::<u8>(), 0..8),
        f in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let left = tag_field_subkey(&a, &b, &c).unwrap();
        let right = tag_field_subkey(&d, &e, &f).unwrap();
        prop_assert_eq!(left == right, (&a, &b, &c) == (&d, &e, &f));
        prop_assert_eq!(TagPosting::parse(&left).unwrap(), TagPosting::new(&a, &b, &c));
    }

    #[test]
    fn decoders_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = SearchPrefixes::decode(&bytes);
        let _ = TagFieldMetadata::decode(&bytes);
        let _ = TagPosting::parse(&bytes);
    }
}
