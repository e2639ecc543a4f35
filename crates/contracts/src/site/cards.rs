//! Коллекция карточек с фильтрацией по типу.
//!
//! Записи строятся заново при каждом `load`; элемент карточки скрыт за
//! трейтом [`CardView`], чтобы логика не зависела от DOM.

use std::collections::BTreeMap;

/// Тип-джокер, совпадающий с любой карточкой
pub const ALL_TYPE: &str = "all";

/// Представление карточки, которым управляет фильтр
pub trait CardView {
    fn set_visible(&self, visible: bool);
}

#[derive(Debug, Clone)]
pub struct CardRecord<E> {
    pub id: usize,
    pub card_type: String,
    pub visible: bool,
    pub element: E,
}

#[derive(Debug, Clone)]
pub struct CardCollection<E> {
    data: Vec<CardRecord<E>>,
    filtered: Vec<usize>,
    current_filter: String,
    // Порядок вставки важен: по нему идёт сопоставление подписей кнопок
    available_types: Vec<String>,
}

impl<E> Default for CardCollection<E> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            filtered: Vec::new(),
            current_filter: ALL_TYPE.to_string(),
            available_types: vec![ALL_TYPE.to_string()],
        }
    }
}

impl<E: CardView> CardCollection<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Строит записи из пар (элемент, значение атрибута типа).
    /// Пустой или отсутствующий тип заменяется на `default_type`.
    pub fn load<I>(&mut self, cards: I, default_type: &str)
    where
        I: IntoIterator<Item = (E, Option<String>)>,
    {
        self.data = cards
            .into_iter()
            .enumerate()
            .map(|(id, (element, raw_type))| {
                let card_type = raw_type
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| default_type.to_string());
                CardRecord {
                    id,
                    card_type,
                    visible: true,
                    element,
                }
            })
            .collect();

        self.update_available_types();
        self.filtered = (0..self.data.len()).collect();
    }

    /// Повторная загрузка после замены DOM
    pub fn refresh<I>(&mut self, cards: I, default_type: &str)
    where
        I: IntoIterator<Item = (E, Option<String>)>,
    {
        self.load(cards, default_type);
    }

    fn update_available_types(&mut self) {
        self.available_types.clear();
        self.available_types.push(ALL_TYPE.to_string());
        for record in &self.data {
            if !self.available_types.contains(&record.card_type) {
                self.available_types.push(record.card_type.clone());
            }
        }
    }

    /// Применяет фильтр. Неизвестный тип игнорируется, возвращается `false`.
    pub fn filter_by_type(&mut self, filter_type: &str) -> bool {
        if !self.has_type(filter_type) {
            return false;
        }

        self.current_filter = filter_type.to_string();

        for record in self.data.iter_mut() {
            let visible = filter_type == ALL_TYPE || record.card_type == filter_type;
            record.visible = visible;
            record.element.set_visible(visible);
        }

        self.filtered = self
            .data
            .iter()
            .filter(|r| r.visible)
            .map(|r| r.id)
            .collect();
        true
    }

    /// Количество карточек по типам; `all` всегда равно общему числу
    pub fn counts(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = self
            .available_types
            .iter()
            .filter(|t| t.as_str() != ALL_TYPE)
            .map(|t| (t.clone(), 0))
            .collect();

        for record in &self.data {
            if let Some(count) = counts.get_mut(&record.card_type) {
                *count += 1;
            }
        }

        counts.insert(ALL_TYPE.to_string(), self.data.len());
        counts
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    pub fn all_data(&self) -> &[CardRecord<E>] {
        &self.data
    }

    pub fn filtered_data(&self) -> Vec<&CardRecord<E>> {
        self.filtered.iter().map(|&i| &self.data[i]).collect()
    }

    /// Типы в порядке появления, `all` первым
    pub fn available_types(&self) -> &[String] {
        &self.available_types
    }

    pub fn has_type(&self, card_type: &str) -> bool {
        self.available_types.iter().any(|t| t == card_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeCard(Rc<Cell<bool>>);

    impl FakeCard {
        fn shown() -> Self {
            Self(Rc::new(Cell::new(true)))
        }
    }

    impl CardView for FakeCard {
        fn set_visible(&self, visible: bool) {
            self.0.set(visible);
        }
    }

    fn collection(types: &[Option<&str>]) -> CardCollection<FakeCard> {
        let mut c = CardCollection::new();
        c.load(
            types
                .iter()
                .map(|t| (FakeCard::shown(), t.map(str::to_string))),
            "default",
        );
        c
    }

    fn twenty_three_cards() -> CardCollection<FakeCard> {
        let mut types = vec![Some("A"); 10];
        types.extend(vec![Some("B"); 13]);
        collection(&types)
    }

    #[test]
    fn test_load_builds_records_and_types() {
        let c = collection(&[Some("coworking"), None, Some(""), Some("coworking")]);
        assert_eq!(c.all_data().len(), 4);
        assert_eq!(c.all_data()[1].card_type, "default");
        assert_eq!(c.all_data()[2].card_type, "default");
        assert_eq!(c.all_data()[3].id, 3);
        assert_eq!(c.available_types(), &["all", "coworking", "default"]);
        assert_eq!(c.filtered_count(), 4);
        assert_eq!(c.current_filter(), "all");
    }

    #[test]
    fn test_filter_scenario_23_cards() {
        let mut c = twenty_three_cards();
        assert!(c.filter_by_type("A"));
        let filtered = c.filtered_data();
        assert_eq!(filtered.len(), 10);
        assert!(filtered.iter().all(|r| r.card_type == "A"));
        assert!(c.all_data()[10..].iter().all(|r| !r.element.0.get()));
    }

    #[test]
    fn test_unknown_type_is_noop() {
        let mut c = twenty_three_cards();
        c.filter_by_type("B");
        assert!(!c.filter_by_type("C"));
        assert_eq!(c.current_filter(), "B");
        assert_eq!(c.filtered_count(), 13);
        assert!(!c.all_data()[0].visible);
    }

    #[test]
    fn test_filter_all_restores_everything() {
        let mut c = twenty_three_cards();
        c.filter_by_type("A");
        c.filter_by_type("all");
        assert_eq!(c.filtered_count(), 23);
        assert!(c.all_data().iter().all(|r| r.visible && r.element.0.get()));
    }

    #[test]
    fn test_counts_all_ignores_current_filter() {
        let mut c = twenty_three_cards();
        c.filter_by_type("B");
        let counts = c.counts();
        assert_eq!(counts["all"], 23);
        assert_eq!(counts["A"], 10);
        assert_eq!(counts["B"], 13);
    }

    #[test]
    fn test_refresh_replaces_records() {
        let mut c = twenty_three_cards();
        c.filter_by_type("A");
        c.refresh(vec![(FakeCard::shown(), Some("C".to_string()))], "default");
        assert_eq!(c.available_types(), &["all", "C"]);
        assert_eq!(c.filtered_count(), 1);
        assert!(!c.has_type("A"));
    }
}
