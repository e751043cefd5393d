//! Naming convention tying registration keys to message types.
//!
//! Encoder registrations use short keys like `"new_player"`; the catalog
//! stores message types under names like `"NewPlayerMessage"`. The resolver
//! here is the deterministic bridge between the two. It is a pure function
//! with no failure mode of its own; a resolved name that matches nothing in
//! the catalog is surfaced by the caller at registration time.

/// Suffix appended to every resolved message type name.
pub const MESSAGE_SUFFIX: &str = "Message";

/// Resolve a registration key into the message type name it refers to.
///
/// The first letter of the key and of every segment following an underscore
/// is capitalized, the underscores are dropped, and [`MESSAGE_SUFFIX`] is
/// appended: `"new_player"` becomes `"NewPlayerMessage"`.
pub fn message_type_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + MESSAGE_SUFFIX.len());
    for segment in key.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name.push_str(MESSAGE_SUFFIX);
    name
}
