//! Server-side HTML rendering.
//!
//! Pages and HTMX fragments are rendered to `String`s. Fragments carry the
//! same element IDs as the full page so HTMX can swap them in place.
//!
//! # Structure
//!
//! - [`shell`]: the full document
//! - [`nav`]: navbar, theme toggle and mobile menu
//! - [`menu`]: category tabs and the item list
//! - [`sections`]: hero, about, specialities, contact, footer; [`PageSections`]
//! - [`icons`]: inline SVG icons

pub mod icons;
pub mod menu;
pub mod nav;
pub mod sections;
pub mod shell;

pub use menu::render_menu_browser;
pub use nav::{render_navbar, render_theme_toggle};
pub use sections::{PageSections, SECTION_IDS};
pub use shell::{PageContext, render_page};

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Dal & Rice"), "Dal &amp; Rice");
        assert_eq!(
            escape_html(r#"<b onclick="x">'hi'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;&#39;hi&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Rasoi – The Tasty"), "Rasoi – The Tasty");
    }
}
