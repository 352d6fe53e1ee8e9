use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

// Site-wide style bundling
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background: linear-gradient(to bottom, var(--ink-deep), var(--ink-mid), var(--ink-deep));
  background-attachment: fixed;
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Sticky site header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  backdrop-filter: blur(8px);
  background-color: var(--ink-raised);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.brand-link {
  font-weight: 600;
  letter-spacing: 0.02em;
  color: var(--text-primary);
}

.nav-links {
  display: none;
  gap: var(--space-6);
}

.nav-link {
  color: var(--text-secondary);
}

.nav-link:hover {
  color: var(--text-primary);
  text-decoration: none;
}

@media (min-width: 768px) {
  .nav-links {
    display: flex;
  }
}
"#
);

/// Joins the present class fragments with single spaces, preserving input
/// order. `None` and empty entries are dropped; an input with nothing
/// present yields an empty string.
pub fn join_classes(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_classes_keeps_present_entries_in_order() {
        assert_eq!(
            join_classes(&[Some("a"), None, Some("b"), None, Some("c")]),
            "a b c"
        );
    }

    #[test]
    fn join_classes_with_nothing_present_is_empty() {
        assert_eq!(join_classes(&[]), "");
        assert_eq!(join_classes(&[None, None]), "");
        assert_eq!(join_classes(&[Some(""), None, Some("")]), "");
    }

    #[test]
    fn style_bundle_carries_tokens_components_and_header() {
        assert!(SITE_STYLES.contains(":root"));
        assert!(SITE_STYLES.contains(".btn-outline"));
        assert!(SITE_STYLES.contains(".site-header"));
    }

    #[test]
    fn home_styles_define_both_entrance_animations() {
        assert!(HOME_STYLES.contains("@keyframes rise-in"));
        assert!(HOME_STYLES.contains("@keyframes settle-in"));
        assert!(HOME_STYLES.contains("var(--entrance-delay)"));
    }
}
