//! Component reference extraction from raw source text.
//!
//! Two kinds of references are recognized:
//!
//! - **Named imports**: `import { Foo, Bar as Baz } from './x'` yields `Foo`, `Bar`
//! - **Tag usages**: `<FooBar>` or `<foo-bar>` in markup yields `FooBar`, `foo-bar`
//!
//! This is pattern matching, not parsing. Known limitations:
//!
//! - Tags inside comments and string literals are picked up as usages
//! - Components rendered dynamically (`<component :is>`, render functions,
//!   global registration) are invisible
//! - `import type { ... }` is skipped because the brace must follow `import`
//!   directly; default imports and namespace imports are not recognized
//! - Lowercase single-word tags are treated as native HTML elements, so a
//!   component registered as `<widget>` is missed

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+\{([^}]+)\}\s+from\s+['"][^'"]+['"]"#).expect("import pattern is valid")
});

static ALIAS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s+as\s+.*$").expect("alias pattern is valid"));

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)").expect("tag pattern is valid"));

/// Component names referenced by one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    /// Names from `import { ... } from '...'` statements, in statement order.
    pub imports: Vec<String>,
    /// Custom tag names in first-occurrence order, without repeats.
    pub tags: Vec<String>,
}

impl References {
    /// All names with imports first, the order in which the builder resolves them.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().chain(self.tags.iter()).map(String::as_str)
    }
}

/// Extract both named imports and custom tag usages from `content`.
#[must_use]
pub fn extract_references(content: &str) -> References {
    References {
        imports: extract_imported_names(content),
        tags: extract_used_tags(content),
    }
}

/// Extract the names listed in braced import statements.
///
/// Each comma-separated item is trimmed and stripped of an `as <alias>`
/// suffix; empty items (trailing commas) are dropped. Names repeated across
/// statements are kept, the graph deduplicates resolved paths.
///
/// # Examples
///
/// ```rust
/// use vue_component_graph::graph::extract_imported_names;
///
/// let names = extract_imported_names("import { Header, Footer as Foot, } from './parts'");
/// assert_eq!(names, vec!["Header", "Footer"]);
/// ```
#[must_use]
pub fn extract_imported_names(content: &str) -> Vec<String> {
    let mut names = Vec::new();

    for cap in IMPORT_PATTERN.captures_iter(content) {
        let Some(list) = cap.get(1) else {
            continue;
        };

        for item in list.as_str().split(',') {
            let name = ALIAS_SUFFIX.replace(item.trim(), "");
            let name = name.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    names
}

/// Extract custom element names used as tags.
///
/// A tag counts as a component when it contains a hyphen or starts with an
/// uppercase letter; everything else is assumed to be a native element.
///
/// # Examples
///
/// ```rust
/// use vue_component_graph::graph::extract_used_tags;
///
/// let tags = extract_used_tags("<div><AppHeader /><router-view></router-view><AppHeader /></div>");
/// assert_eq!(tags, vec!["AppHeader", "router-view"]);
/// ```
#[must_use]
pub fn extract_used_tags(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for cap in TAG_PATTERN.captures_iter(content) {
        let Some(tag) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };

        if is_component_tag(tag) && seen.insert(tag) {
            tags.push(tag.to_string());
        }
    }

    tags
}

fn is_component_tag(tag: &str) -> bool {
    tag.contains('-') || tag.starts_with(|c: char| c.is_ascii_uppercase())
}
