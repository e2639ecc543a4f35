//! Кнопки фильтра, привязанные к набору карточек.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::config::{FilterConfig, AUTO_CARD_SELECTORS, AUTO_FILTER_SELECTORS};
use contracts::site::labels::{label_selects_type, resolve_filter_type};
use leptos::logging::log;
use web_sys::Element;

use super::data_manager::{DataManager, DomCardRecord};
use crate::shared::dom::{self, EventListener};

/// Получает применённый тип и оставшиеся видимыми записи
pub type FilterCallback = Box<dyn FnMut(&str, &[&DomCardRecord])>;

pub struct FilterManager {
    config: FilterConfig,
    buttons: Vec<Element>,
    data: DataManager,
    on_filter_change: Option<FilterCallback>,
    listeners: Vec<EventListener>,
}

impl FilterManager {
    pub fn new(config: FilterConfig) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            config,
            buttons: Vec::new(),
            data: DataManager::new(),
            on_filter_change: None,
            listeners: Vec::new(),
        }))
    }

    /// Без кнопок фильтра на странице ничего не делает
    pub fn init(this: &Rc<RefCell<Self>>) {
        {
            let mut me = this.borrow_mut();
            me.buttons = dom::query_all(&me.config.filter_selector);
            if me.buttons.is_empty() {
                return;
            }
            me.reload_data();
        }
        Self::bind_events(this);
        this.borrow().update_button_counts();
    }

    /// Повторный поиск кнопок и карточек после замены DOM
    pub fn update(this: &Rc<RefCell<Self>>) {
        {
            let mut me = this.borrow_mut();
            me.buttons = dom::query_all(&me.config.filter_selector);
            me.reload_data();
        }
        Self::bind_events(this);
        this.borrow().update_button_counts();
    }

    fn reload_data(&mut self) {
        let FilterConfig {
            card_selector,
            type_attribute,
            default_type,
            ..
        } = &self.config;
        self.data.refresh(card_selector, type_attribute, default_type);
    }

    fn bind_events(this: &Rc<RefCell<Self>>) {
        let weak = Rc::downgrade(this);
        let listeners = this
            .borrow()
            .buttons
            .iter()
            .enumerate()
            .map(|(index, button)| {
                let weak = weak.clone();
                EventListener::new(button, "click", move |e| {
                    e.prevent_default();
                    if let Some(me) = weak.upgrade() {
                        me.borrow_mut().handle_filter_click(index);
                    }
                })
            })
            .collect();
        this.borrow_mut().listeners = listeners;
    }

    fn handle_filter_click(&mut self, index: usize) {
        let Some(clicked) = self.buttons.get(index).cloned() else { return };

        for button in &self.buttons {
            dom::toggle_class(button, &self.config.active_class, false);
        }
        dom::toggle_class(&clicked, &self.config.active_class, true);

        let filter_type = resolve_filter_type(
            &dom::text_of(&clicked),
            &self.config.filter_types,
            self.data.available_types(),
        );
        self.data.filter_by_type(&filter_type);

        if let Some(callback) = self.on_filter_change.as_mut() {
            let filtered = self.data.filtered_data();
            callback(&filter_type, &filtered);
        }
    }

    pub fn update_button_counts(&self) {
        self.data
            .update_counts(&self.config.filter_selector, &self.config.type_mapping);
    }

    pub fn set_filter_change_callback(&mut self, callback: FilterCallback) {
        self.on_filter_change = Some(callback);
    }

    pub fn data_manager(&self) -> &DataManager {
        &self.data
    }

    /// Применяет фильтр так же, как клик по его кнопке
    pub fn apply_filter(&mut self, filter_type: &str) {
        if !self.data.has_type(filter_type) {
            return;
        }
        let index = self.buttons.iter().position(|button| {
            label_selects_type(&dom::text_of(button), &self.config.filter_types, filter_type)
        });
        if let Some(index) = index {
            self.handle_filter_click(index);
        }
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.buttons.clear();
    }
}

/// Подбирает универсальный конфиг по найденным кнопкам и карточкам
pub fn detect_filter_config() -> Option<FilterConfig> {
    let filter_selector = AUTO_FILTER_SELECTORS
        .iter()
        .find(|s| dom::query(s).is_some())?;
    let card_selector = AUTO_CARD_SELECTORS
        .iter()
        .find(|s| dom::query(s).is_some())?;
    log!("Filter config detected: {} / {}", filter_selector, card_selector);
    Some(FilterConfig::universal(filter_selector, card_selector))
}
