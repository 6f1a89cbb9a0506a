//! Name-to-file resolution.
//!
//! A referenced name matches a file when the file's lowercased base name
//! (extension stripped) equals one of two forms of the name:
//!
//! - kebab form: `FooBar` -> `foo-bar`
//! - plain lowercase: `FooBar` -> `foobar`
//!
//! `FooBar` and `foo-bar` both land on `foo-bar.vue`. Only `FooBar` (or
//! `foobar`) lands on `FooBar.vue`.
//!
//! Resolution is first-match-wins over the [`FileSet`] order. When two files
//! share a base name (say `components/Icon.vue` and `legacy/icon.vue`), the
//! one enumerated first is used for every reference. Directory enumeration
//! order differs between platforms and filesystems; pass `--sorted` to the
//! CLI when a stable winner matters.

use std::path::Path;

use super::FileSet;

/// Rewrite a name in kebab form: a hyphen at every lowercase-to-uppercase
/// transition, then lowercase.
///
/// # Examples
///
/// ```rust
/// use vue_component_graph::graph::kebab_case;
///
/// assert_eq!(kebab_case("FooBar"), "foo-bar");
/// assert_eq!(kebab_case("myURLInput"), "my-urlinput");
/// assert_eq!(kebab_case("already-kebab"), "already-kebab");
/// ```
#[must_use]
pub fn kebab_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            result.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        result.push(c);
    }

    result.to_lowercase()
}

/// Find the file a component name refers to.
///
/// Returns `None` when no file matches.
#[must_use]
pub fn resolve_component<'a>(name: &str, files: &'a FileSet) -> Option<&'a Path> {
    let kebab = kebab_case(name);
    let lower = name.to_lowercase();

    files
        .iter()
        .find(|file| files.component_stem(file).is_some_and(|stem| stem == kebab || stem == lower))
}
