use crate::checklist::Checklist;
use crate::links::LinkRegistry;
use crate::models::{ChecklistItem, Page};
use crate::nav::{navigate, NavMenu, ViewSelector};
use crate::util::log;
use leptos::prelude::*;

/// Everything the app remembers while it is open. Nothing here outlives a reload.
#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub view: RwSignal<ViewSelector>,
    pub menu: RwSignal<NavMenu>,

    pub links: RwSignal<LinkRegistry>,
    /// Text in the ticket-link field that has not been uploaded yet.
    pub link_input: RwSignal<String>,

    pub checklist: RwSignal<Checklist>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewSelector::new()),
            menu: RwSignal::new(NavMenu::default()),
            links: RwSignal::new(LinkRegistry::new()),
            link_input: RwSignal::new(String::new()),
            checklist: RwSignal::new(Checklist::new()),
        }
    }

    pub fn current_page(&self) -> Page {
        self.view.with(|v| v.current_page())
    }

    pub fn navigate(&self, page: Page) {
        let mut view = self.view.get_untracked();
        let mut menu = self.menu.get_untracked();
        navigate(&mut view, &mut menu, page);
        self.view.set(view);
        self.menu.set(menu);
        log("Nav", &format!("page={page}"));
    }

    pub fn navigate_key(&self, key: &str) {
        let page = self.view.try_update(|v| v.select_key(key)).unwrap_or_default();
        self.menu.update(|m| m.close());
        log("Nav", &format!("key={key:?} page={page}"));
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|m| m.toggle());
    }

    /// Upload whatever is in the input field.
    pub fn upload_link(&self) {
        let mut input = self.link_input.get_untracked();
        let added = self
            .links
            .try_update(|r| r.add_from_input(&mut input))
            .unwrap_or(false);
        if added {
            self.link_input.set(input);
            log("Links", &format!("added #{}", self.links.with_untracked(|r| r.len())));
        }
    }

    pub fn remove_link(&self, index: usize) {
        let removed = self.links.try_update(|r| r.remove(index)).flatten();
        if removed.is_some() {
            log("Links", &format!("removed index={index}"));
        }
    }

    pub fn select_link(&self, index: usize) {
        let selected = self
            .links
            .try_update(|r| r.select(index).is_some())
            .unwrap_or(false);
        if selected {
            log("Links", &format!("selected index={index}"));
        }
    }

    pub fn selected_link(&self) -> Option<String> {
        self.links.with(|r| r.selected().map(str::to_string))
    }

    pub fn toggle_item(&self, item: ChecklistItem) {
        let now = self.checklist.try_update(|c| c.toggle(item)).unwrap_or(false);
        log("Checklist", &format!("{} checked={now}", item.label()));
    }

    pub fn is_checked(&self, item: ChecklistItem) -> bool {
        self.checklist.with(|c| c.is_checked(item))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_upload_clears_input_and_appends() {
        let state = AppState::new();
        state.link_input.set("http://a".to_string());
        state.upload_link();
        assert!(state.link_input.get_untracked().is_empty());
        assert_eq!(state.links.with_untracked(|r| r.len()), 1);

        // Empty input is ignored.
        state.upload_link();
        assert_eq!(state.links.with_untracked(|r| r.len()), 1);
    }

    #[wasm_bindgen_test]
    fn test_add_add_remove_first() {
        let state = AppState::new();
        for link in ["http://a", "http://b"] {
            state.link_input.set(link.to_string());
            state.upload_link();
        }
        state.remove_link(0);
        let texts: Vec<String> = state
            .links
            .with_untracked(|r| r.entries().iter().map(|e| e.text.clone()).collect());
        assert_eq!(texts, vec!["http://b".to_string()]);
    }

    #[wasm_bindgen_test]
    fn test_select_then_remove_clears_viewer_link() {
        let state = AppState::new();
        state.link_input.set("http://a".to_string());
        state.upload_link();
        state.select_link(0);
        assert_eq!(state.selected_link().as_deref(), Some("http://a"));

        state.remove_link(0);
        assert!(state.selected_link().is_none());
    }

    #[wasm_bindgen_test]
    fn test_navigation_closes_menu_and_unknown_key_goes_home() {
        let state = AppState::new();
        state.toggle_menu();
        state.navigate(Page::Essentials);
        assert_eq!(state.current_page(), Page::Essentials);
        assert!(!state.menu.get_untracked().is_open());

        state.navigate_key("nowhere");
        assert_eq!(state.current_page(), Page::Home);
    }

    #[wasm_bindgen_test]
    fn test_toggle_item_twice() {
        let state = AppState::new();
        state.toggle_item(ChecklistItem::PowerBank);
        assert!(state.is_checked(ChecklistItem::PowerBank));
        state.toggle_item(ChecklistItem::PowerBank);
        assert!(!state.is_checked(ChecklistItem::PowerBank));
    }
}
