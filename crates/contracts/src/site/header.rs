//! Состояние шапки: белый фон выводится из меню, скролла и текущей страницы.

use serde::{Deserialize, Serialize};

use super::pages::HOME_PAGE;

/// Порог прокрутки, после которого шапка считается «прокрученной»
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Правило белого фона шапки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhiteBgPolicy {
    /// Страницы из списка всегда белые, скролл учитывается только на остальных
    #[default]
    PageOverridesScroll,
    /// Скролл делает фон белым на любой странице
    ScrollAlways,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    pub is_menu_open: bool,
    pub is_scrolled: bool,
    pub current_page: String,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            is_menu_open: false,
            is_scrolled: false,
            current_page: HOME_PAGE.to_string(),
        }
    }
}

impl HeaderState {
    pub fn new(current_page: &str) -> Self {
        Self {
            current_page: current_page.to_string(),
            ..Self::default()
        }
    }

    /// Пересчитывает флаг прокрутки, возвращает новое значение
    pub fn on_scroll(&mut self, scroll_top: f64, threshold: f64) -> bool {
        self.is_scrolled = scroll_top > threshold;
        self.is_scrolled
    }

    pub fn white_background(&self, policy: WhiteBgPolicy, white_bg_pages: &[String]) -> bool {
        let is_white_page = white_bg_pages.iter().any(|p| *p == self.current_page);
        let scrolled_white = match policy {
            WhiteBgPolicy::PageOverridesScroll => !is_white_page && self.is_scrolled,
            WhiteBgPolicy::ScrollAlways => self.is_scrolled,
        };
        self.is_menu_open || is_white_page || scrolled_white
    }
}

/// Страница, чья ссылка подсвечивается в навигации (на главной никакая)
pub fn active_nav_page(page: &str) -> Option<&str> {
    if page == HOME_PAGE {
        None
    } else {
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_pages() -> Vec<String> {
        vec!["offices".to_string(), "office".to_string()]
    }

    #[test]
    fn test_home_page_turns_white_on_scroll() {
        let mut state = HeaderState::new("home");
        let policy = WhiteBgPolicy::PageOverridesScroll;
        assert!(!state.white_background(policy, &white_pages()));
        assert!(!state.on_scroll(50.0, SCROLL_THRESHOLD_PX));
        assert!(state.on_scroll(51.0, SCROLL_THRESHOLD_PX));
        assert!(state.white_background(policy, &white_pages()));
    }

    #[test]
    fn test_white_pages_ignore_scroll() {
        let mut state = HeaderState::new("office");
        for policy in [WhiteBgPolicy::PageOverridesScroll, WhiteBgPolicy::ScrollAlways] {
            state.is_scrolled = false;
            assert!(state.white_background(policy, &white_pages()));
            state.is_scrolled = true;
            assert!(state.white_background(policy, &white_pages()));
        }
    }

    #[test]
    fn test_open_menu_forces_white() {
        let mut state = HeaderState::new("home");
        state.is_menu_open = true;
        assert!(state.white_background(WhiteBgPolicy::PageOverridesScroll, &[]));
    }

    #[test]
    fn test_page_change_recomputes() {
        let mut state = HeaderState::new("home");
        assert!(!state.white_background(WhiteBgPolicy::default(), &white_pages()));
        state.current_page = "office".to_string();
        assert!(state.white_background(WhiteBgPolicy::default(), &white_pages()));
    }

    #[test]
    fn test_active_nav_page() {
        assert_eq!(active_nav_page("home"), None);
        assert_eq!(active_nav_page("offices"), Some("offices"));
    }
}
