//! Percent-encoding for identifiers interpolated into REST paths and for
//! query values embedded in URLs that are handed out rather than fetched.
//!
//! Chart numbers, domain client ids, batch job names and log file names are
//! all user-controlled. Encoding them keeps `a/b` from becoming a nested path
//! and `a?b` from starting a query string.
//!
//! ```
//! use niord_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("dma/test"), "dma%2Ftest");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_encode};

/// Characters encoded in a single path segment (RFC 3986 section 3.3 plus
/// the delimiters that would otherwise split or terminate the segment).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Unreserved characters are left alone in query values.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Percent-encode a string for use as a query parameter value.
pub fn encode_query_value(value: &str) -> String {
    percent_encode(value.as_bytes(), QUERY_VALUE_ENCODE_SET).to_string()
}
