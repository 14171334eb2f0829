//! Navbar, theme toggle and mobile menu.

use super::escape_html;
use super::icons::Icon;
use crate::view::{Theme, ViewState};

/// Anchor links shown in the navbar and footer, in order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("menu", "Menu"),
    ("about", "About"),
    ("contact", "Contact"),
];

/// Link to a page section. Clicking asks the server to navigate, which
/// closes the mobile menu and scrolls the section into view.
#[must_use]
pub fn nav_link(section: &str, label: &str) -> String {
    let section = escape_html(section);
    format!(
        r##"<a href="#{section}" hx-post="/ui/navigate/{section}" hx-target="#navbar" hx-swap="outerHTML">{}</a>"##,
        escape_html(label)
    )
}

/// Theme toggle button: a sun while dark, a moon while light.
#[must_use]
pub fn render_theme_toggle(theme: Theme) -> String {
    let icon = if theme.is_dark() { Icon::Sun } else { Icon::Moon };
    format!(
        r#"<button id="theme-toggle" class="theme-toggle" type="button" aria-label="Toggle theme" data-theme-current="{theme}" hx-post="/ui/theme" hx-swap="outerHTML">{}</button>"#,
        icon.svg(20, "")
    )
}

/// The whole navbar, swapped as one unit by the menu and navigation
/// endpoints.
#[must_use]
pub fn render_navbar(site_name: &str, view: &ViewState) -> String {
    let open = view.menu().is_open();
    let nav_class = if open { "nav-links nav-open" } else { "nav-links" };
    let hamburger_class = if open { "hamburger active" } else { "hamburger" };

    let links: String = NAV_LINKS
        .iter()
        .map(|(id, label)| nav_link(id, label))
        .collect();

    format!(
        r##"<header id="navbar" class="navbar">
    <div class="navbar-container">
        <div class="logo">
            <h1 class="logo-main">{name}</h1>
        </div>
        <nav class="{nav_class}">{links}</nav>
        <div class="navbar-actions">
            {toggle}
            <button class="mobile-menu-toggle" type="button" aria-label="Toggle menu" aria-expanded="{open}" hx-post="/ui/menu-toggle" hx-target="#navbar" hx-swap="outerHTML">
                <span class="{hamburger_class}"><span></span><span></span><span></span></span>
            </button>
        </div>
    </div>
</header>"##,
        name = escape_html(site_name),
        toggle = render_theme_toggle(view.theme()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::MenuCatalogue;

    fn view(theme: Theme) -> ViewState {
        ViewState::new(&MenuCatalogue::bundled().unwrap(), theme)
    }

    #[test]
    fn test_closed_navbar() {
        let html = render_navbar("Rasoi – The Tasty", &view(Theme::Dark));

        assert!(html.starts_with(r#"<header id="navbar""#));
        assert!(html.contains(r#"<nav class="nav-links">"#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"hx-post="/ui/navigate/contact""#));
        assert!(html.contains("Rasoi – The Tasty"));
    }

    #[test]
    fn test_open_navbar() {
        let mut view = view(Theme::Dark);
        view.toggle_menu();
        let html = render_navbar("Rasoi", &view);

        assert!(html.contains(r#"<nav class="nav-links nav-open">"#));
        assert!(html.contains(r#"<span class="hamburger active">"#));
    }

    #[test]
    fn test_theme_toggle_icon_follows_theme() {
        let dark = render_theme_toggle(Theme::Dark);
        let light = render_theme_toggle(Theme::Light);

        assert!(dark.contains(r#"data-theme-current="dark""#));
        assert!(dark.contains(r#"<circle cx="12" cy="12" r="4"/>"#));
        assert!(light.contains(r#"data-theme-current="light""#));
        assert!(light.contains("M12 3a6 6 0 0 0 9 9"));
    }
}
