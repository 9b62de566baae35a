//! Tag name derivation for struct fields.
//!
//! Maps an exported field identifier to the lowercase, underscore-delimited
//! name used in its serialization annotation. Every uppercase letter starts
//! a new segment; runs of capitals are not merged, so `URL` becomes `u_r_l`.
//!
//! # Examples
//!
//! ```
//! use structgen_codegen::tag::derive_tag;
//!
//! assert_eq!(derive_tag("UserID"), "user_i_d");
//! assert_eq!(derive_tag("Name"), "name");
//! assert_eq!(derive_tag("count"), "count");
//! ```

/// Returns `true` if the identifier is exported (first character uppercase).
///
/// # Examples
///
/// ```
/// use structgen_codegen::tag::is_exported;
///
/// assert!(is_exported("Name"));
/// assert!(!is_exported("name"));
/// assert!(!is_exported(""));
/// ```
#[must_use]
pub fn is_exported(identifier: &str) -> bool {
    identifier.chars().next().is_some_and(char::is_uppercase)
}

/// Derives the snake_case tag name for a field identifier.
///
/// Identifiers that are not exported are returned unchanged. For exported
/// identifiers each uppercase character is lowercased and, unless it is the
/// first character emitted, preceded by `_`.
///
/// # Examples
///
/// ```
/// use structgen_codegen::tag::derive_tag;
///
/// assert_eq!(derive_tag("CreatedAt"), "created_at");
/// assert_eq!(derive_tag("URL"), "u_r_l");
/// assert_eq!(derive_tag("val"), "val");
/// assert_eq!(derive_tag(""), "");
/// ```
#[must_use]
pub fn derive_tag(identifier: &str) -> String {
    if !is_exported(identifier) {
        return identifier.to_string();
    }

    let mut tag = String::with_capacity(identifier.len() + identifier.len() / 2);
    for c in identifier.chars() {
        if c.is_uppercase() {
            if !tag.is_empty() {
                tag.push('_');
            }
            tag.extend(c.to_lowercase());
        } else {
            tag.push(c);
        }
    }
    tag
}
