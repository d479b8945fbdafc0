//! Form-URL encoding with the semantics of the generated `encodeUrl` helper.

/// Encode a path segment value.
///
/// Returns the empty string for empty input; otherwise applies
/// `application/x-www-form-urlencoded` serialization over the UTF-8 bytes:
/// alphanumerics and `*-._` pass through, space becomes `+`, everything else
/// is percent-escaped with uppercase hex digits.
///
/// ```
/// use wayfinder_core::encode_url;
///
/// assert_eq!(encode_url("a b"), "a+b");
/// assert_eq!(encode_url("a/b"), "a%2Fb");
/// assert_eq!(encode_url(""), "");
/// ```
pub fn encode_url(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
