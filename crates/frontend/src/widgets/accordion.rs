//! Раскрывающийся список поверх `AccordionState`.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::site::accordion::{AccordionOptions, AccordionState, Transition};
use web_sys::Element;

use crate::shared::dom::{self, EventListener};

/// Необязательные колбэки; `on_toggle` получает новое состояние
#[derive(Default)]
pub struct AccordionCallbacks {
    pub on_open: Option<Box<dyn Fn(&Element, usize)>>,
    pub on_close: Option<Box<dyn Fn(&Element, usize)>>,
    pub on_toggle: Option<Box<dyn Fn(&Element, usize, bool)>>,
}

pub struct Accordion {
    container: Element,
    options: AccordionOptions,
    callbacks: AccordionCallbacks,
    items: Vec<Element>,
    state: AccordionState,
    listeners: Vec<EventListener>,
}

impl Accordion {
    pub fn new(
        container: Element,
        options: AccordionOptions,
        callbacks: AccordionCallbacks,
    ) -> Rc<RefCell<Self>> {
        let state = AccordionState::new(0, &options);
        let this = Rc::new(RefCell::new(Self {
            container,
            options,
            callbacks,
            items: Vec::new(),
            state,
            listeners: Vec::new(),
        }));
        Self::refresh(&this);
        this
    }

    /// Перечитывает пункты контейнера и заново вешает обработчики
    pub fn refresh(this: &Rc<RefCell<Self>>) {
        {
            let mut me = this.borrow_mut();
            me.items = dom::query_all_in(&me.container, &me.options.item_selector);
            let active = me
                .items
                .iter()
                .map(|item| dom::has_class(item, &me.options.active_class))
                .collect();
            me.state = AccordionState::with_active(active, &me.options);
            me.listeners.clear();
            if me.items.is_empty() {
                return;
            }
        }
        Self::bind_events(this);
    }

    fn bind_events(this: &Rc<RefCell<Self>>) {
        let weak = Rc::downgrade(this);
        let listeners = {
            let me = this.borrow();
            me.items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    let trigger = dom::query_in(item, &me.options.trigger_selector)?;
                    let weak = weak.clone();
                    Some(EventListener::new(&trigger, "click", move |e| {
                        e.prevent_default();
                        if let Some(me) = weak.upgrade() {
                            me.borrow_mut().toggle_item(index);
                        }
                    }))
                })
                .collect()
        };
        this.borrow_mut().listeners = listeners;
    }

    pub fn toggle_item(&mut self, index: usize) {
        let transitions = self.state.toggle(index);
        self.apply(&transitions);
    }

    pub fn open_item(&mut self, index: usize) {
        let transitions = self.state.open(index);
        self.apply(&transitions);
    }

    pub fn close_item(&mut self, index: usize) {
        let transitions = self.state.close(index);
        self.apply(&transitions);
    }

    pub fn close_all(&mut self) {
        let transitions = self.state.close_all();
        self.apply(&transitions);
    }

    /// Работает только при `allow_multiple`
    pub fn open_all(&mut self) {
        let transitions = self.state.open_all();
        self.apply(&transitions);
    }

    fn apply(&self, transitions: &[Transition]) {
        for &Transition { index, open } in transitions {
            let Some(item) = self.items.get(index) else { continue };
            dom::toggle_class(item, &self.options.active_class, open);

            let hook = if open {
                &self.callbacks.on_open
            } else {
                &self.callbacks.on_close
            };
            if let Some(hook) = hook {
                hook(item, index);
            }
            if let Some(on_toggle) = &self.callbacks.on_toggle {
                on_toggle(item, index, open);
            }
        }
    }

    pub fn get_active_items(&self) -> Vec<Element> {
        self.state
            .active_indices()
            .into_iter()
            .filter_map(|i| self.items.get(i).cloned())
            .collect()
    }

    pub fn get_active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.items.clear();
        self.state = AccordionState::new(0, &self.options);
    }
}
