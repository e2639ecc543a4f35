//! Переключение класса элемента по порогу прокрутки (только на узких экранах).

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollHeaderState {
    pub is_scrolled: bool,
    pub is_active: bool,
}

impl ScrollHeaderState {
    /// Активен ли модуль при данной ширине окна
    pub fn on_resize(&mut self, viewport_width: f64, max_width: f64) -> Option<bool> {
        self.is_active = viewport_width <= max_width;
        if !self.is_active && self.is_scrolled {
            self.is_scrolled = false;
            return Some(false);
        }
        None
    }

    /// Возвращает новое значение флага, если класс нужно переключить
    pub fn on_scroll(&mut self, scroll_top: f64, threshold: f64) -> Option<bool> {
        if !self.is_active {
            return None;
        }
        let should_be_scrolled = scroll_top > threshold;
        if should_be_scrolled != self.is_scrolled {
            self.is_scrolled = should_be_scrolled;
            return Some(should_be_scrolled);
        }
        None
    }

    /// Сброс при уничтожении: `Some(false)`, если класс был установлен
    pub fn reset(&mut self) -> Option<bool> {
        if self.is_scrolled {
            self.is_scrolled = false;
            return Some(false);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_toggles_only_on_change() {
        let mut state = ScrollHeaderState::default();
        state.on_resize(800.0, 1150.0);
        assert_eq!(state.on_scroll(10.0, 30.0), None);
        assert_eq!(state.on_scroll(31.0, 30.0), Some(true));
        assert_eq!(state.on_scroll(200.0, 30.0), None);
        assert_eq!(state.on_scroll(0.0, 30.0), Some(false));
    }

    #[test]
    fn test_inactive_above_max_width() {
        let mut state = ScrollHeaderState::default();
        state.on_resize(1400.0, 1150.0);
        assert_eq!(state.on_scroll(500.0, 30.0), None);
        assert!(!state.is_scrolled);
    }

    #[test]
    fn test_resize_to_desktop_clears_class() {
        let mut state = ScrollHeaderState::default();
        state.on_resize(800.0, 1024.0);
        state.on_scroll(500.0, 100.0);
        assert_eq!(state.on_resize(1200.0, 1024.0), Some(false));
        assert!(!state.is_active);
        assert_eq!(state.reset(), None);
    }
}
