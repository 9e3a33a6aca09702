//! Property tests for path segment encoding.
//!
//! # Invariants
//! - An encoded segment never contains a path or query delimiter
//! - Decoding an encoded segment yields the original identifier

use niord_client::endpoints::url_encoding::encode_path_segment;
use percent_encoding::percent_decode_str;
use proptest::prelude::*;

proptest! {
    #[test]
    fn encoded_segment_has_no_delimiters(segment in "\\PC*") {
        let encoded = encode_path_segment(&segment);
        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains('#'));
        prop_assert!(!encoded.contains(' '));
    }

    #[test]
    fn encoded_segment_decodes_to_original(segment in "\\PC*") {
        let encoded = encode_path_segment(&segment);
        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        prop_assert_eq!(decoded.as_ref(), segment.as_str());
    }
}
