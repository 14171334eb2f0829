//! Per-visitor view state.

use serde::Serialize;
use tracing::debug;

use super::navigation::{MenuState, SectionScroller};
use super::theme::Theme;
use crate::catalogue::{MenuCatalogue, MenuItem, format_price};

/// Transient UI state for one visitor.
///
/// `active_category`, when set, always names a category of the catalogue it
/// was created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_category: Option<String>,
    theme: Theme,
    menu: MenuState,
}

/// One row of the rendered item list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleItem<'a> {
    /// Dish name.
    pub name: &'a str,
    /// Raw price.
    pub price: f64,
    /// Price with currency symbol.
    pub formatted_price: String,
}

impl<'a> From<&'a MenuItem> for VisibleItem<'a> {
    fn from(item: &'a MenuItem) -> Self {
        Self {
            name: &item.name,
            price: item.price,
            formatted_price: format_price(item.price),
        }
    }
}

impl ViewState {
    /// Fresh state: first category active, menu closed.
    ///
    /// An empty catalogue leaves no category active.
    #[must_use]
    pub fn new(catalogue: &MenuCatalogue, theme: Theme) -> Self {
        Self {
            active_category: catalogue.first_category().map(str::to_string),
            theme,
            menu: MenuState::Closed,
        }
    }

    /// Name of the active category.
    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Make `name` the active category if the catalogue has it.
    ///
    /// Unknown names are ignored. Returns `true` when the selection changed.
    pub fn select_category(&mut self, catalogue: &MenuCatalogue, name: &str) -> bool {
        if !catalogue.contains(name) {
            debug!(category = %name, "Ignoring selection of unknown category");
            return false;
        }
        if self.active_category.as_deref() == Some(name) {
            return false;
        }

        self.active_category = Some(name.to_string());
        true
    }

    /// Items of the active category, in catalogue order.
    ///
    /// Computed on every call from the catalogue and the active category.
    pub fn visible_items<'a>(
        &self,
        catalogue: &'a MenuCatalogue,
    ) -> impl Iterator<Item = VisibleItem<'a>> + use<'a> {
        self.active_category
            .as_deref()
            .and_then(|name| catalogue.category(name))
            .into_iter()
            .flat_map(|category| category.items.iter().map(VisibleItem::from))
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Record the theme chosen by the theme controller.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Current mobile menu state.
    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Open the mobile menu if closed, close it if open.
    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggle();
        self.menu
    }

    /// Scroll section `id` into view and close the mobile menu.
    ///
    /// When `scroller` cannot resolve `id` nothing changes and `false` is
    /// returned.
    pub fn navigate(&mut self, id: &str, scroller: &mut impl SectionScroller) -> bool {
        if !scroller.scroll_into_view(id) {
            debug!(section = %id, "Navigation target not rendered");
            return false;
        }

        self.menu = MenuState::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::MenuCategory;

    fn scenario() -> MenuCatalogue {
        MenuCatalogue::new(vec![
            MenuCategory::new("Starters", vec![MenuItem::new("Samosa", 40.0)]),
            MenuCategory::new("Mains", vec![MenuItem::new("Paneer Butter Masala", 220.0)]),
        ])
        .unwrap()
    }

    fn names<'a>(items: impl Iterator<Item = VisibleItem<'a>>) -> Vec<&'a str> {
        items.map(|i| i.name).collect()
    }

    /// Resolves only the ids it was built with.
    struct FakeScroller {
        known: Vec<&'static str>,
        scrolled: Vec<String>,
    }

    impl FakeScroller {
        fn new(known: &[&'static str]) -> Self {
            Self {
                known: known.to_vec(),
                scrolled: Vec::new(),
            }
        }
    }

    impl SectionScroller for FakeScroller {
        fn scroll_into_view(&mut self, id: &str) -> bool {
            if self.known.contains(&id) {
                self.scrolled.push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_scenario_starters_then_mains() {
        let catalogue = scenario();
        let mut state = ViewState::new(&catalogue, Theme::Dark);

        assert_eq!(state.active_category(), Some("Starters"));
        let items: Vec<_> = state.visible_items(&catalogue).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Samosa");
        assert_eq!(items[0].formatted_price, "₹40");

        assert!(state.select_category(&catalogue, "Mains"));
        let items: Vec<_> = state.visible_items(&catalogue).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Paneer Butter Masala");
        assert!((items[0].price - 220.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_every_category_renders_its_items_in_order() {
        let catalogue = MenuCatalogue::bundled().unwrap();
        let mut state = ViewState::new(&catalogue, Theme::Dark);

        for category in catalogue.categories() {
            state.select_category(&catalogue, &category.name);
            let rendered: Vec<_> = state.visible_items(&catalogue).collect();
            let expected: Vec<_> = category.items.iter().map(VisibleItem::from).collect();
            assert_eq!(rendered, expected, "category {}", category.name);
        }
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let catalogue = scenario();
        let mut state = ViewState::new(&catalogue, Theme::Dark);
        state.select_category(&catalogue, "Mains");

        assert!(!state.select_category(&catalogue, "Desserts"));
        assert_eq!(state.active_category(), Some("Mains"));
        assert_eq!(names(state.visible_items(&catalogue)), vec!["Paneer Butter Masala"]);
    }

    #[test]
    fn test_reselecting_reports_no_change() {
        let catalogue = scenario();
        let mut state = ViewState::new(&catalogue, Theme::Dark);

        assert!(!state.select_category(&catalogue, "Starters"));
        assert_eq!(state.active_category(), Some("Starters"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let catalogue = scenario();
        let state = ViewState::new(&catalogue, Theme::Dark);

        let first: Vec<_> = state.visible_items(&catalogue).collect();
        let second: Vec<_> = state.visible_items(&catalogue).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalogue_renders_nothing() {
        let catalogue = MenuCatalogue::new(Vec::new()).unwrap();
        let mut state = ViewState::new(&catalogue, Theme::Dark);

        assert_eq!(state.active_category(), None);
        assert_eq!(state.visible_items(&catalogue).count(), 0);
        assert!(!state.select_category(&catalogue, "Starters"));
        assert_eq!(state.active_category(), None);
    }

    #[test]
    fn test_duplicate_items_keep_position() {
        let catalogue = MenuCatalogue::new(vec![MenuCategory::new(
            "Breads",
            vec![
                MenuItem::new("Naan", 40.0),
                MenuItem::new("Roti", 20.0),
                MenuItem::new("Naan", 45.0),
            ],
        )])
        .unwrap();
        let state = ViewState::new(&catalogue, Theme::Dark);

        let prices: Vec<_> = state
            .visible_items(&catalogue)
            .map(|i| i.formatted_price)
            .collect();
        assert_eq!(prices, vec!["₹40", "₹20", "₹45"]);
    }

    #[test]
    fn test_menu_opens_and_navigation_closes_it() {
        let catalogue = scenario();
        let mut state = ViewState::new(&catalogue, Theme::Dark);
        let mut scroller = FakeScroller::new(&["home", "menu"]);

        assert_eq!(state.menu(), MenuState::Closed);
        assert_eq!(state.toggle_menu(), MenuState::Open);

        assert!(state.navigate("menu", &mut scroller));
        assert_eq!(state.menu(), MenuState::Closed);
        assert_eq!(scroller.scrolled, vec!["menu"]);
    }

    #[test]
    fn test_navigation_to_missing_section_is_a_no_op() {
        let catalogue = scenario();
        let mut state = ViewState::new(&catalogue, Theme::Dark);
        let mut scroller = FakeScroller::new(&["home"]);
        state.toggle_menu();

        assert!(!state.navigate("reservations", &mut scroller));
        assert_eq!(state.menu(), MenuState::Open);
        assert!(scroller.scrolled.is_empty());
    }

    #[test]
    fn test_navigation_with_closed_menu_stays_closed() {
        let catalogue = scenario();
        let mut state = ViewState::new(&catalogue, Theme::Light);
        let mut scroller = FakeScroller::new(&["contact"]);

        assert!(state.navigate("contact", &mut scroller));
        assert_eq!(state.menu(), MenuState::Closed);
        assert_eq!(state.theme(), Theme::Light);
    }
}
