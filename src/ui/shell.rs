//! The full HTML document.

use super::escape_html;
use super::menu::render_menu_browser;
use super::nav::render_navbar;
use super::sections::{
    render_about, render_contact, render_footer, render_hero, render_menu_section,
    render_specialities, render_whatsapp_float,
};
use crate::catalogue::MenuCatalogue;
use crate::config::SiteConfig;
use crate::site::ContactLinks;
use crate::view::{Theme, ViewState};

/// Everything needed to render the page for one visitor.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    pub links: &'a ContactLinks,
    pub catalogue: &'a MenuCatalogue,
    pub view: &'a ViewState,
    /// Theme applied to the document root as `data-theme`.
    pub document_theme: Theme,
    /// Year shown in the footer.
    pub year: i32,
}

/// Render the complete document.
#[must_use]
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let title = escape_html(&ctx.site.name);
    let description = escape_html(&ctx.site.tagline);
    let navbar = render_navbar(&ctx.site.name, ctx.view);
    let hero = render_hero(ctx.site, ctx.links);
    let about = render_about();
    let menu = render_menu_section(&render_menu_browser(ctx.catalogue, ctx.view));
    let specialities = render_specialities();
    let contact = render_contact(ctx.site, ctx.links);
    let footer = render_footer(ctx.site, ctx.year);
    let whatsapp = render_whatsapp_float(ctx.links);

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{description}">
    <title>{title}</title>

    <script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js"></script>
    <script defer src="/static/app.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    <div class="app">
        {navbar}
        {hero}
        {about}
        {menu}
        {specialities}
        {contact}
        {footer}
        {whatsapp}
    </div>
</body>
</html>"#,
        theme = ctx.document_theme,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_page_contains_every_part() {
        let site = AppConfig::load_from_args(["rasoi"]).unwrap().site;
        let links = ContactLinks::from_site(&site).unwrap();
        let catalogue = MenuCatalogue::bundled().unwrap();
        let view = ViewState::new(&catalogue, Theme::Light);

        let html = render_page(&PageContext {
            site: &site,
            links: &links,
            catalogue: &catalogue,
            view: &view,
            document_theme: Theme::Light,
            year: 2026,
        });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(html.contains(r#"id="navbar""#));
        assert!(html.contains(r#"id="menu-browser""#));
        assert!(html.contains(r#"class="whatsapp-float""#));
        assert!(html.contains("&copy; 2026"));
        assert!(html.contains("<title>Rasoi – The Tasty</title>"));
    }
}
