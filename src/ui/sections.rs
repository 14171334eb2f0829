//! Static page sections and the section scroller.

use super::escape_html;
use super::icons::Icon;
use super::nav::{NAV_LINKS, nav_link};
use crate::config::SiteConfig;
use crate::site::ContactLinks;
use crate::view::SectionScroller;

/// IDs of every section rendered on the page.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "menu", "specialities", "contact"];

const ABOUT_FEATURES: [(Icon, &str, &str); 4] = [
    (
        Icon::Leaf,
        "100% Vegetarian",
        "Pure vegetarian cuisine with no compromise on taste",
    ),
    (
        Icon::Utensils,
        "Family-Friendly Dining",
        "Welcoming atmosphere for families and friends",
    ),
    (
        Icon::Sparkles,
        "Fresh Ingredients",
        "Daily fresh ingredients for authentic flavors",
    ),
    (
        Icon::ChefHat,
        "Indian, Chinese & Pizza",
        "Diverse menu offering the best of all cuisines",
    ),
];

const SPECIALITIES: [(&str, &str); 5] = [
    (
        "Paneer Special Dishes",
        "Authentic paneer preparations with rich gravies",
    ),
    (
        "Authentic Indian Gravies",
        "Traditional recipes passed down through generations",
    ),
    (
        "Fresh Tandoor Breads",
        "Hot, fresh breads straight from the tandoor",
    ),
    (
        "Hygienic Kitchen",
        "Maintaining the highest standards of cleanliness",
    ),
    (
        "Wide Variety Menu",
        "Something for everyone, from traditional to modern",
    ),
];

/// Resolves the sections of the rendered page.
///
/// The browser performs the actual smooth scroll; this records which
/// section it should be told to scroll to.
#[derive(Debug, Default)]
pub struct PageSections {
    scrolled_to: Option<String>,
}

impl PageSections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Section resolved by the last successful scroll.
    #[must_use]
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }
}

impl SectionScroller for PageSections {
    fn scroll_into_view(&mut self, id: &str) -> bool {
        if SECTION_IDS.contains(&id) {
            self.scrolled_to = Some(id.to_string());
            true
        } else {
            false
        }
    }
}

#[must_use]
pub fn render_hero(site: &SiteConfig, links: &ContactLinks) -> String {
    format!(
        r##"<section id="home" class="hero">
    <div class="hero-overlay"></div>
    <div class="hero-content">
        <h2 class="hero-title">{name}</h2>
        <p class="hero-subtitle">{tagline}</p>
        <div class="hero-buttons">
            <a href="#menu" hx-post="/ui/navigate/menu" hx-target="#navbar" hx-swap="outerHTML" class="btn btn-primary">View Menu</a>
            <a href="{whatsapp}" target="_blank" rel="noopener noreferrer" class="btn btn-secondary">Order on WhatsApp</a>
        </div>
    </div>
</section>"##,
        name = escape_html(&site.name),
        tagline = escape_html(&site.tagline),
        whatsapp = escape_html(&links.whatsapp),
    )
}

#[must_use]
pub fn render_about() -> String {
    let items: String = ABOUT_FEATURES
        .iter()
        .map(|(icon, title, text)| {
            format!(
                r#"<div class="about-item">{}<h3>{}</h3><p>{}</p></div>"#,
                icon.svg(32, "about-icon"),
                escape_html(title),
                escape_html(text),
            )
        })
        .collect();

    format!(
        r#"<section id="about" class="about">
    <div class="container">
        <h2 class="section-title">About the Restaurant</h2>
        <div class="about-content">
            <div class="about-grid">{items}</div>
        </div>
    </div>
</section>"#
    )
}

/// Menu section wrapper; `browser` is the swappable menu browser fragment.
#[must_use]
pub fn render_menu_section(browser: &str) -> String {
    format!(
        r#"<section id="menu" class="menu">
    <div class="container">
        <h2 class="section-title">Our Menu</h2>
        {browser}
    </div>
</section>"#
    )
}

#[must_use]
pub fn render_specialities() -> String {
    let items: String = SPECIALITIES
        .iter()
        .map(|(title, text)| {
            format!(
                r#"<div class="speciality-item"><h3>{}</h3><p>{}</p></div>"#,
                escape_html(title),
                escape_html(text),
            )
        })
        .collect();

    format!(
        r#"<section id="specialities" class="speciality">
    <div class="container">
        <h2 class="section-title">Our Specialities</h2>
        <div class="speciality-grid">{items}</div>
    </div>
</section>"#
    )
}

#[must_use]
pub fn render_contact(site: &SiteConfig, links: &ContactLinks) -> String {
    format!(
        r#"<section id="contact" class="contact">
    <div class="container">
        <h2 class="section-title">Visit Us</h2>
        <div class="contact-content">
            <div class="contact-info">
                <h3 class="contact-name">{name}</h3>
                <div class="contact-details">
                    <div class="contact-item">{phone_icon}<a href="{tel}">{phone}</a></div>
                    <div class="contact-item">{pin_icon}<span>{address}</span></div>
                </div>
                <div class="contact-actions">
                    <a href="{tel}" class="btn btn-primary">{phone_small}Call Now</a>
                    <a href="{directions}" target="_blank" rel="noopener noreferrer" class="btn btn-secondary">{pin_small}Get Directions</a>
                    <a href="{whatsapp}" target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp">{message_small}WhatsApp Order</a>
                </div>
            </div>
            <div class="contact-map">
                <iframe title="Restaurant Location" src="{map}" width="100%" height="100%" style="border: 0" allowfullscreen loading="lazy" referrerpolicy="no-referrer-when-downgrade"></iframe>
            </div>
        </div>
    </div>
</section>"#,
        name = escape_html(&site.name),
        phone = escape_html(&site.phone_display),
        address = escape_html(&site.address),
        tel = escape_html(&links.telephone),
        directions = escape_html(&links.directions),
        whatsapp = escape_html(&links.whatsapp),
        map = escape_html(&links.map_embed),
        phone_icon = Icon::Phone.svg(20, ""),
        pin_icon = Icon::MapPin.svg(20, ""),
        phone_small = Icon::Phone.svg(18, ""),
        pin_small = Icon::MapPin.svg(18, ""),
        message_small = Icon::MessageCircle.svg(18, ""),
    )
}

#[must_use]
pub fn render_footer(site: &SiteConfig, year: i32) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(id, label)| nav_link(id, label))
        .collect();
    let name = escape_html(&site.name);

    format!(
        r#"<footer class="footer">
    <div class="container">
        <div class="footer-content">
            <div class="footer-brand">
                <h3>{name}</h3>
                <p>{tagline}</p>
            </div>
            <div class="footer-links">{links}</div>
            <div class="footer-contact">
                <p>{phone_icon} {phone}</p>
                <p>{pin_icon} {address}</p>
            </div>
        </div>
        <div class="footer-bottom">
            <p>&copy; {year} {name}. All rights reserved.</p>
        </div>
    </div>
</footer>"#,
        tagline = escape_html(&site.tagline),
        phone = escape_html(&site.phone_display),
        address = escape_html(&site.address_short),
        phone_icon = Icon::Phone.svg(16, ""),
        pin_icon = Icon::MapPin.svg(16, ""),
    )
}

/// Floating WhatsApp button pinned to the viewport corner.
#[must_use]
pub fn render_whatsapp_float(links: &ContactLinks) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="whatsapp-float" aria-label="Order on WhatsApp">{}</a>"#,
        escape_html(&links.whatsapp),
        Icon::MessageCircle.svg(24, ""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn site() -> (SiteConfig, ContactLinks) {
        let site = AppConfig::load_from_args(["rasoi"]).unwrap().site;
        let links = ContactLinks::from_site(&site).unwrap();
        (site, links)
    }

    #[test]
    fn test_page_sections_resolve_known_ids() {
        let mut sections = PageSections::new();

        assert!(!sections.scroll_into_view("reservations"));
        assert_eq!(sections.scrolled_to(), None);

        for id in SECTION_IDS {
            assert!(sections.scroll_into_view(id));
            assert_eq!(sections.scrolled_to(), Some(id));
        }
    }

    #[test]
    fn test_rendered_sections_carry_their_ids() {
        let (site, links) = site();
        let html = [
            render_hero(&site, &links),
            render_about(),
            render_menu_section(""),
            render_specialities(),
            render_contact(&site, &links),
        ]
        .concat();

        for id in SECTION_IDS {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
    }

    #[test]
    fn test_contact_links() {
        let (site, links) = site();
        let html = render_contact(&site, &links);

        assert!(html.contains(r#"href="tel:+919876543210""#));
        assert!(html.contains(r#"href="https://wa.me/919876543210""#));
        assert!(html.contains("query=Rasoi+The+Tasty"));
        assert!(html.contains("+91 98765 43210"));
        assert!(html.contains(r#"<iframe title="Restaurant Location""#));
    }

    #[test]
    fn test_footer_year() {
        let (site, _) = site();
        let html = render_footer(&site, 2031);

        assert!(html.contains("&copy; 2031 Rasoi – The Tasty. All rights reserved."));
        assert_eq!(html.matches("hx-post=\"/ui/navigate/").count(), NAV_LINKS.len());
    }

    #[test]
    fn test_specialities_and_about_content() {
        assert_eq!(render_specialities().matches("speciality-item").count(), 5);
        assert!(render_about().contains("Indian, Chinese &amp; Pizza"));
    }
}
