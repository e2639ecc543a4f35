//! Scroll-spy страницы офиса: подсвечивает пункт боковой навигации секции,
//! ближайшей к опорной линии. Работает только на десктопе.
//!
//! Сужение окна ниже брейкпоинта отключает модуль до следующей загрузки
//! страницы; обратное расширение его не перезапускает.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use contracts::config::ScrollSpyConfig;
use contracts::site::scroll_spy::{
    is_desktop, nav_index_for_section, nearest_to_offset, pick_section, scroll_target, ActiveSection, SectionBounds,
};
use gloo_timers::callback::Timeout;
use leptos::logging::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::shared::dom::{self, EventListener};

const TARGET_ATTRIBUTE: &str = "data-target";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct OfficeScrollSpy {
    config: ScrollSpyConfig,
    root: Option<Element>,
    nav_items: Vec<Element>,
    nav_targets: Vec<Option<String>>,
    sections: Vec<Element>,
    observer: Option<IntersectionObserver>,
    observer_callback: Option<ObserverCallback>,
    pending: Option<Timeout>,
    active: ActiveSection,
    listeners: Vec<EventListener>,
}

impl OfficeScrollSpy {
    pub fn new(config: ScrollSpyConfig) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            config,
            root: None,
            nav_items: Vec::new(),
            nav_targets: Vec::new(),
            sections: Vec::new(),
            observer: None,
            observer_callback: None,
            pending: None,
            active: ActiveSection::default(),
            listeners: Vec::new(),
        }))
    }

    fn is_desktop(&self) -> bool {
        is_desktop(dom::viewport_width(), self.config.desktop_min_width)
    }

    pub fn init(this: &Rc<RefCell<Self>>) {
        if !this.borrow().is_desktop() {
            return;
        }
        if !this.borrow_mut().collect_targets() {
            return;
        }
        if let Err(err) = Self::observe_sections(this) {
            warn!("Scroll-spy disabled, IntersectionObserver failed: {:?}", err);
            return;
        }
        Self::bind_events(this);
        this.borrow_mut().force_update_active_on_init();
    }

    /// Пункты навигации и секции, на которые они ссылаются через `data-target`
    fn collect_targets(&mut self) -> bool {
        self.root = dom::query(&self.config.root_selector);
        self.nav_items = dom::query(&self.config.nav_list_selector)
            .map(|list| dom::query_all_in(&list, &self.config.nav_item_selector))
            .unwrap_or_default();

        self.nav_targets = self
            .nav_items
            .iter()
            .map(|item| item.get_attribute(TARGET_ATTRIBUTE).filter(|id| !id.is_empty()))
            .collect();
        let target_ids: HashSet<&str> = self.nav_targets.iter().flatten().map(String::as_str).collect();

        self.sections = dom::query_all(&self.config.sections_selector)
            .into_iter()
            .filter(|section| {
                let id = section.id();
                !id.is_empty() && target_ids.contains(id.as_str())
            })
            .collect();

        self.root.is_some() && !self.sections.is_empty() && !self.nav_items.is_empty()
    }

    fn observe_sections(this: &Rc<RefCell<Self>>) -> Result<(), JsValue> {
        let weak = Rc::downgrade(this);
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                if let Some(me) = weak.upgrade() {
                    Self::handle_entries(&me, entries);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&this.borrow().config.root_margin());
        options.set_threshold(&js_sys::Array::of1(&JsValue::from(0)));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let mut me = this.borrow_mut();
        for section in &me.sections {
            observer.observe(section);
        }
        me.observer = Some(observer);
        me.observer_callback = Some(callback);
        Ok(())
    }

    fn handle_entries(this: &Rc<RefCell<Self>>, entries: js_sys::Array) {
        let best = {
            let me = this.borrow();
            let candidates = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(|entry| entry.is_intersecting())
                .filter_map(|entry| {
                    let target = entry.target();
                    let index = me.sections.iter().position(|s| *s == target)?;
                    let rect = target.get_bounding_client_rect();
                    Some((index, SectionBounds::new(rect.top(), rect.bottom())))
                });
            pick_section(candidates, me.config.reference_line_px)
                .and_then(|section| nav_index_for_section(&me.nav_targets, &me.sections[section].id()))
        };

        let Some(index) = best else { return };

        let weak = Rc::downgrade(this);
        let mut me = this.borrow_mut();
        // Замена ожидающего таймера отменяет его
        me.pending = Some(Timeout::new(me.config.debounce_ms, move || {
            if let Some(me) = weak.upgrade() {
                me.borrow_mut().set_active(index);
            }
        }));
    }

    fn bind_events(this: &Rc<RefCell<Self>>) {
        let mut listeners: Vec<EventListener> = this
            .borrow()
            .nav_items
            .iter()
            .map(|item| {
                let item_ref = item.clone();
                let top_offset = this.borrow().config.top_offset_px;
                EventListener::new(item, "click", move |e| {
                    e.prevent_default();
                    scroll_to_target(&item_ref, top_offset);
                })
            })
            .collect();

        if let Some(window) = dom::window() {
            let weak = Rc::downgrade(this);
            listeners.push(EventListener::new(&window, "resize", move |_| {
                if let Some(me) = weak.upgrade() {
                    me.borrow_mut().handle_resize();
                }
            }));
        }

        this.borrow_mut().listeners = listeners;
    }

    fn handle_resize(&mut self) {
        if self.is_desktop() {
            return;
        }
        self.destroy();
    }

    fn set_active(&mut self, index: usize) {
        if !self.active.set(index) {
            return;
        }
        for (i, item) in self.nav_items.iter().enumerate() {
            dom::toggle_class(item, &self.config.active_class, i == index);
        }
    }

    fn force_update_active_on_init(&mut self) {
        let tops = self.nav_items.iter().enumerate().filter_map(|(i, item)| {
            let id = item.get_attribute(TARGET_ATTRIBUTE)?;
            let section = dom::by_id(&id)?;
            Some((i, section.get_bounding_client_rect().top()))
        });
        if let Some(index) = nearest_to_offset(tops, self.config.top_offset_px) {
            self.set_active(index);
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.get()
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.pending = None;
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observer_callback = None;
        self.sections.clear();
        self.nav_items.clear();
        self.nav_targets.clear();
        self.root = None;
        self.active.reset();
    }
}

fn scroll_to_target(item: &Element, top_offset: f64) {
    let Some(target_id) = item.get_attribute(TARGET_ATTRIBUTE) else { return };
    let Some(section) = dom::by_id(&target_id) else { return };
    let Some(window) = dom::window() else { return };

    let absolute_top = dom::scroll_top() + section.get_bounding_client_rect().top();
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(absolute_top, top_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
