use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped by [`encode_url`]: everything except ASCII alphanumerics,
/// the unreserved marks `_ . - ~` and the URL delimiters `: / ? & = ,`.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'&')
    .remove(b'=')
    .remove(b',');

/// Percent-encode a whole URL, leaving its structure intact.
pub fn encode_url(url: &str) -> String {
    utf8_percent_encode(url, URL_ESCAPE).to_string()
}
