//! Outbound contact links built from the site configuration.

use url::Url;

use crate::config::SiteConfig;

const WHATSAPP_BASE: &str = "https://wa.me/";
const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Deep-links and the map embed for the contact section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    /// Opens a WhatsApp chat with the restaurant.
    pub whatsapp: String,
    /// Dials the restaurant.
    pub telephone: String,
    /// Map search for directions.
    pub directions: String,
    /// Iframe source for the embedded map.
    pub map_embed: String,
}

impl ContactLinks {
    /// Build the links, rejecting a malformed map embed URL.
    pub fn from_site(site: &SiteConfig) -> Result<Self, url::ParseError> {
        let digits: String = site
            .phone_digits
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        let whatsapp = Url::parse(WHATSAPP_BASE)?.join(&digits)?;
        let directions = Url::parse_with_params(
            MAP_SEARCH_BASE,
            &[("api", "1"), ("query", site.map_query.as_str())],
        )?;
        let map_embed = Url::parse(&site.map_embed_url)?;

        Ok(Self {
            whatsapp: whatsapp.into(),
            telephone: format!("tel:+{digits}"),
            directions: directions.into(),
            map_embed: map_embed.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn site() -> SiteConfig {
        AppConfig::load_from_args(["rasoi"]).unwrap().site
    }

    #[test]
    fn test_default_links() {
        let links = ContactLinks::from_site(&site()).unwrap();

        assert_eq!(links.whatsapp, "https://wa.me/919876543210");
        assert_eq!(links.telephone, "tel:+919876543210");
        assert_eq!(
            links.directions,
            "https://www.google.com/maps/search/?api=1&query=Rasoi+The+Tasty"
        );
        assert!(links.map_embed.starts_with("https://www.google.com/maps/embed?pb="));
    }

    #[test]
    fn test_phone_digits_are_sanitised() {
        let mut site = site();
        site.phone_digits = "+91 98765-43210".to_string();

        let links = ContactLinks::from_site(&site).unwrap();
        assert_eq!(links.telephone, "tel:+919876543210");
        assert_eq!(links.whatsapp, "https://wa.me/919876543210");
    }

    #[test]
    fn test_query_is_encoded() {
        let mut site = site();
        site.map_query = "Rasoi & Co".to_string();

        let links = ContactLinks::from_site(&site).unwrap();
        assert!(links.directions.ends_with("query=Rasoi+%26+Co"));
    }

    #[test]
    fn test_bad_embed_url_is_rejected() {
        let mut site = site();
        site.map_embed_url = "not a url".to_string();

        assert!(ContactLinks::from_site(&site).is_err());
    }
}
