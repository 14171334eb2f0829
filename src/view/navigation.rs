//! Mobile menu state machine and section scrolling.

use serde::Serialize;

/// Mobile navigation menu: closed or open.
///
/// Opened only by [`MenuState::toggle`]; closed by the same toggle or by a
/// successful navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    /// Menu collapsed (initial state).
    #[default]
    Closed,
    /// Menu expanded.
    Open,
}

impl MenuState {
    /// Flip between open and closed.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Whether the menu is expanded.
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Locates a rendered region by identifier and brings it into view.
pub trait SectionScroller {
    /// Scroll the region `id` into view.
    ///
    /// Returns `false` when nothing with that identifier is rendered; the
    /// caller treats that as a no-op.
    fn scroll_into_view(&mut self, id: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle() {
        let menu = MenuState::default();
        assert!(!menu.is_open());

        let menu = menu.toggle();
        assert_eq!(menu, MenuState::Open);
        assert_eq!(menu.toggle(), MenuState::Closed);
    }
}
