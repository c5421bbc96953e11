use crate::models::Page;

/// Which page is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ViewSelector {
    current: Page,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    pub fn select(&mut self, page: Page) {
        self.current = page;
    }

    /// Select by raw key. Unknown keys reset the selector to `Home`.
    pub fn select_key(&mut self, key: &str) -> Page {
        self.current = Page::from_key(key);
        self.current
    }
}

/// Collapsible navbar menu for narrow screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Navigation as the navbar performs it: pick the page and fold the menu.
pub(crate) fn navigate(selector: &mut ViewSelector, menu: &mut NavMenu, page: Page) {
    selector.select(page);
    menu.close();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        assert_eq!(ViewSelector::new().current_page(), Page::Home);
    }

    #[test]
    fn test_select_then_current_page_for_every_page() {
        let mut selector = ViewSelector::new();
        for page in Page::ALL {
            selector.select(page);
            assert_eq!(selector.current_page(), page);
        }
    }

    #[test]
    fn test_select_unknown_key_resets_to_home() {
        let mut selector = ViewSelector::new();
        selector.select(Page::Essentials);
        assert_eq!(selector.select_key("checkout"), Page::Home);
        assert_eq!(selector.current_page(), Page::Home);
    }

    #[test]
    fn test_select_known_key() {
        let mut selector = ViewSelector::new();
        assert_eq!(selector.select_key("planning"), Page::Planning);
        assert_eq!(selector.current_page(), Page::Planning);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut selector = ViewSelector::new();
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());

        navigate(&mut selector, &mut menu, Page::Essentials);
        assert_eq!(selector.current_page(), Page::Essentials);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_toggle_twice_closes() {
        let mut menu = NavMenu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
