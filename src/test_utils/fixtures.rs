//! Canned component sources for tests.

/// Source text of a single-file component.
#[derive(Clone, Debug)]
pub struct ComponentFixture {
    pub content: String,
}

impl ComponentFixture {
    /// A component with no component references.
    pub fn leaf() -> Self {
        Self {
            content: "<template>\n  <div class=\"leaf\"><span>leaf</span></div>\n</template>\n"
                .to_string(),
        }
    }

    /// A component whose template uses each of `tags`, in order.
    pub fn using(tags: &[&str]) -> Self {
        let body: String = tags.iter().map(|tag| format!("    <{tag} />\n")).collect();
        Self {
            content: format!("<template>\n  <div>\n{body}  </div>\n</template>\n"),
        }
    }
}
