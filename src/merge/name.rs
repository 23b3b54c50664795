//! Name blending.
//!
//! All slicing is by `char`, so multi-byte names split cleanly.

/// Blend two ball names.
///
/// The shorter name leads (on a tie, `first` leads). If it has several
/// words, its first word is joined to the longer name with a space;
/// otherwise the longer name's tail past the shorter name's length is
/// appended.
///
/// ```
/// use countryball_battle::merge::blend_names;
///
/// assert_eq!(blend_names("France", "Germany"), "Francey");
/// assert_eq!(blend_names("South Korea", "Japan"), "Japan Korea");
/// assert_eq!(blend_names("Holy See", "Byzantium"), "Holy Byzantium");
/// ```
#[must_use]
pub fn blend_names(first: &str, second: &str) -> String {
    let (short, long) = if first.chars().count() > second.chars().count() {
        (second, first)
    } else {
        (first, second)
    };

    if short.contains(' ') {
        let prefix = short.split_whitespace().next().unwrap_or_default();
        format!("{prefix} {long}")
    } else {
        let tail: String = long.chars().skip(short.chars().count()).collect();
        format!("{short}{tail}")
    }
}

/// Blend two ability names: the first half of `first` followed by the
/// second half of `second`.
///
/// ```
/// use countryball_battle::merge::blend_ability_names;
///
/// assert_eq!(blend_ability_names("Blitzkrieg", "Revolution"), "Blitzution");
/// ```
#[must_use]
pub fn blend_ability_names(first: &str, second: &str) -> String {
    let head = first.chars().count() / 2;
    let tail = second.chars().count() / 2;
    first
        .chars()
        .take(head)
        .chain(second.chars().skip(tail))
        .collect()
}
