//! Данные карточек для фильтруемых списков, читаются из DOM.

use contracts::site::cards::{CardCollection, CardRecord, CardView};
use contracts::site::labels::{count_for_button, replace_count_suffix};
use std::collections::BTreeMap;
use web_sys::Element;

use crate::shared::dom;

/// Элемент карточки; скрытие ставит `display: none`
#[derive(Clone)]
pub struct DomCard(pub Element);

impl CardView for DomCard {
    fn set_visible(&self, visible: bool) {
        dom::set_displayed(&self.0, visible);
    }
}

pub type DomCardRecord = CardRecord<DomCard>;

#[derive(Default)]
pub struct DataManager {
    cards: CardCollection<DomCard>,
}

impl DataManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Один проход по `card_selector`, все записи строятся заново
    pub fn init(&mut self, card_selector: &str, type_attribute: &str, default_type: &str) {
        let cards = dom::query_all(card_selector).into_iter().map(|el| {
            let card_type = el.get_attribute(type_attribute);
            (DomCard(el), card_type)
        });
        self.cards.load(cards, default_type);
    }

    pub fn refresh(&mut self, card_selector: &str, type_attribute: &str, default_type: &str) {
        self.init(card_selector, type_attribute, default_type);
    }

    pub fn filter_by_type(&mut self, filter_type: &str) -> bool {
        self.cards.filter_by_type(filter_type)
    }

    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.cards.counts()
    }

    /// Переписывает суффикс `(<n>)` у подходящих кнопок фильтра
    pub fn update_counts(&self, button_selector: &str, type_mapping: &[(String, String)]) {
        let counts = self.counts();
        for button in dom::query_all(button_selector) {
            let text = dom::text_of(&button);
            if let Some(count) =
                count_for_button(&text, &counts, self.cards.available_types(), type_mapping)
            {
                button.set_text_content(Some(&replace_count_suffix(&text, count)));
            }
        }
    }

    pub fn current_filter(&self) -> &str {
        self.cards.current_filter()
    }

    pub fn filtered_count(&self) -> usize {
        self.cards.filtered_count()
    }

    pub fn all_data(&self) -> &[DomCardRecord] {
        self.cards.all_data()
    }

    pub fn filtered_data(&self) -> Vec<&DomCardRecord> {
        self.cards.filtered_data()
    }

    pub fn available_types(&self) -> &[String] {
        self.cards.available_types()
    }

    pub fn has_type(&self, card_type: &str) -> bool {
        self.cards.has_type(card_type)
    }
}
