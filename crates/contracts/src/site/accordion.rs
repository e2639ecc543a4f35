//! Аккордеон: состояние раскрытых пунктов без привязки к DOM.
//!
//! Каждая операция возвращает список переходов, которые слой отображения
//! применяет к элементам и передаёт в колбэки.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionOptions {
    pub item_selector: String,
    pub trigger_selector: String,
    pub content_selector: String,
    pub active_class: String,
    pub allow_multiple: bool,
    pub close_others: bool,
    pub animation_duration_ms: u32,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            item_selector: ".accordion__item".to_string(),
            trigger_selector: ".accordion__trigger".to_string(),
            content_selector: ".accordion__content".to_string(),
            active_class: "active".to_string(),
            allow_multiple: false,
            close_others: true,
            animation_duration_ms: 300,
        }
    }
}

impl AccordionOptions {
    /// Настройки FAQ-блока
    pub fn faq() -> Self {
        Self {
            item_selector: ".faq__item".to_string(),
            trigger_selector: ".faq__title-wrapper".to_string(),
            content_selector: ".faq__answer".to_string(),
            ..Self::default()
        }
    }
}

/// Изменение состояния одного пункта
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub index: usize,
    pub open: bool,
}

#[derive(Debug, Clone)]
pub struct AccordionState {
    active: Vec<bool>,
    allow_multiple: bool,
    close_others: bool,
}

impl AccordionState {
    pub fn new(item_count: usize, options: &AccordionOptions) -> Self {
        Self {
            active: vec![false; item_count],
            allow_multiple: options.allow_multiple,
            close_others: options.close_others,
        }
    }

    /// Состояние, восстановленное по уже отмеченным в разметке пунктам
    pub fn with_active(active: Vec<bool>, options: &AccordionOptions) -> Self {
        Self {
            active,
            allow_multiple: options.allow_multiple,
            close_others: options.close_others,
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) -> Vec<Transition> {
        if index >= self.active.len() {
            return Vec::new();
        }
        if self.active[index] {
            self.close(index)
        } else {
            self.open(index)
        }
    }

    pub fn open(&mut self, index: usize) -> Vec<Transition> {
        if index >= self.active.len() {
            return Vec::new();
        }
        let mut transitions = if self.close_others {
            self.close_all()
        } else {
            Vec::new()
        };
        self.active[index] = true;
        transitions.push(Transition { index, open: true });
        transitions
    }

    pub fn close(&mut self, index: usize) -> Vec<Transition> {
        match self.active.get_mut(index) {
            Some(active) => {
                *active = false;
                vec![Transition { index, open: false }]
            }
            None => Vec::new(),
        }
    }

    pub fn close_all(&mut self) -> Vec<Transition> {
        let open: Vec<usize> = self.active_indices();
        open.into_iter().flat_map(|i| self.close(i)).collect()
    }

    /// Открывает все пункты; без `allow_multiple` ничего не делает
    pub fn open_all(&mut self) -> Vec<Transition> {
        if !self.allow_multiple {
            return Vec::new();
        }
        (0..self.active.len())
            .filter(|&i| !self.active[i])
            .collect::<Vec<_>>()
            .into_iter()
            .flat_map(|i| self.open(i))
            .collect()
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|a| *a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open_invariant() {
        let mut state = AccordionState::new(4, &AccordionOptions::faq());
        state.open(1);
        let transitions = state.open(3);
        assert_eq!(
            transitions,
            vec![
                Transition { index: 1, open: false },
                Transition { index: 3, open: true }
            ]
        );
        assert_eq!(state.active_indices(), vec![3]);
    }

    #[test]
    fn test_toggle_closes_active_item() {
        let mut state = AccordionState::new(3, &AccordionOptions::default());
        state.toggle(0);
        assert_eq!(state.active_index(), Some(0));
        let transitions = state.toggle(0);
        assert_eq!(transitions, vec![Transition { index: 0, open: false }]);
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut state = AccordionState::new(2, &AccordionOptions::default());
        assert!(state.toggle(5).is_empty());
        assert!(state.open(2).is_empty());
        assert!(state.close(9).is_empty());
    }

    #[test]
    fn test_open_all_requires_allow_multiple() {
        let mut state = AccordionState::new(3, &AccordionOptions::default());
        assert!(state.open_all().is_empty());
        assert!(state.active_indices().is_empty());

        let options = AccordionOptions {
            allow_multiple: true,
            close_others: false,
            ..AccordionOptions::default()
        };
        let mut state = AccordionState::new(3, &options);
        state.open(1);
        let transitions = state.open_all();
        assert_eq!(transitions.len(), 2);
        assert_eq!(state.active_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_open_without_close_others_keeps_previous() {
        let options = AccordionOptions {
            allow_multiple: true,
            close_others: false,
            ..AccordionOptions::default()
        };
        let mut state = AccordionState::new(3, &options);
        state.open(0);
        state.open(2);
        assert_eq!(state.active_indices(), vec![0, 2]);
        assert_eq!(state.close_all().len(), 2);
    }

    #[test]
    fn test_with_active_restores_markup_state() {
        let state = AccordionState::with_active(vec![false, true], &AccordionOptions::faq());
        assert!(state.is_active(1));
        assert_eq!(state.len(), 2);
    }
}
