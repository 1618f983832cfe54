//! AUTOSAR reference path resolution.
//!
//! AUTOSAR cross-references are slash-delimited symbolic paths such as
//! `/Components/Composition/Sender` or `/SwcTypes/SenderType/Out`. The last
//! segment is the identity of the referenced element; for port references the
//! segment before it names the owner.
//!
//! Resolution never fails loudly: an empty or too-short reference yields `None`
//! and the caller skips the dependent record.

/// Return the trailing identity segment of a reference.
///
/// Surrounding whitespace is ignored. Returns `None` when the reference is
/// empty or ends with a `/` (no identity to extract).
///
/// ```
/// use arxml::base::last_segment;
///
/// assert_eq!(last_segment("/Pkg/Composition/Sender"), Some("Sender"));
/// assert_eq!(last_segment("Sender"), Some("Sender"));
/// assert_eq!(last_segment(""), None);
/// assert_eq!(last_segment("/Pkg/"), None);
/// ```
pub fn last_segment(reference: &str) -> Option<&str> {
    let segment = reference.trim().rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment)
}

/// Return the last two segments of a reference as `(owner, name)`.
///
/// Used where a reference encodes both the owning component and the port,
/// e.g. `/SwcTypes/Sender/Out` resolves to `("Sender", "Out")`. Returns `None`
/// when fewer than two non-empty trailing segments are present.
///
/// ```
/// use arxml::base::last_two_segments;
///
/// assert_eq!(last_two_segments("/SwcTypes/Sender/Out"), Some(("Sender", "Out")));
/// assert_eq!(last_two_segments("/Out"), None);
/// assert_eq!(last_two_segments("Out"), None);
/// ```
pub fn last_two_segments(reference: &str) -> Option<(&str, &str)> {
    let mut segments = reference.trim().rsplit('/');
    let name = segments.next().filter(|s| !s.is_empty())?;
    let owner = segments.next().filter(|s| !s.is_empty())?;
    Some((owner, name))
}
