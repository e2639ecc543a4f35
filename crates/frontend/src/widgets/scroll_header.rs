//! Класс на элементе после прокрутки за порог.
//! Работает только до `max_width`, на широких экранах элемент не трогается.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::config::ScrollHeaderConfig;
use contracts::site::scroll_header::ScrollHeaderState;
use web_sys::Element;

use crate::shared::dom::{self, EventListener};

pub type ScrollCallback = Box<dyn Fn(bool, &Element)>;

pub struct ScrollHeader {
    config: ScrollHeaderConfig,
    element: Option<Element>,
    state: ScrollHeaderState,
    on_scroll: Option<ScrollCallback>,
    listeners: Vec<EventListener>,
}

impl ScrollHeader {
    pub fn new(config: ScrollHeaderConfig) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            config,
            element: None,
            state: ScrollHeaderState::default(),
            on_scroll: None,
            listeners: Vec::new(),
        }))
    }

    pub fn init(this: &Rc<RefCell<Self>>) {
        {
            let mut me = this.borrow_mut();
            if !me.config.enabled {
                return;
            }
            me.element = dom::query(&me.config.selector);
            if me.element.is_none() {
                return;
            }
            let max_width = me.config.max_width;
            me.state.on_resize(dom::viewport_width(), max_width);
        }

        let Some(window) = dom::window() else { return };
        let on_scroll = Rc::downgrade(this);
        let on_resize = Rc::downgrade(this);
        let listeners = vec![
            EventListener::passive(&window, "scroll", move |_| {
                if let Some(me) = on_scroll.upgrade() {
                    me.borrow_mut().handle_scroll();
                }
            }),
            EventListener::passive(&window, "resize", move |_| {
                if let Some(me) = on_resize.upgrade() {
                    me.borrow_mut().handle_resize();
                }
            }),
        ];

        let mut me = this.borrow_mut();
        me.listeners = listeners;
        me.handle_scroll();
    }

    pub fn set_scroll_callback(&mut self, callback: ScrollCallback) {
        self.on_scroll = Some(callback);
    }

    fn handle_scroll(&mut self) {
        if self.element.is_none() {
            return;
        }
        let threshold = self.config.scroll_threshold;
        if let Some(scrolled) = self.state.on_scroll(dom::scroll_top(), threshold) {
            self.apply(scrolled);
        }
    }

    fn handle_resize(&mut self) {
        let max_width = self.config.max_width;
        if let Some(scrolled) = self.state.on_resize(dom::viewport_width(), max_width) {
            self.apply(scrolled);
        }
    }

    fn apply(&self, scrolled: bool) {
        let Some(element) = &self.element else { return };
        dom::toggle_class(element, &self.config.scroll_class, scrolled);
        if let Some(callback) = &self.on_scroll {
            callback(scrolled, element);
        }
    }

    /// Переинициализация при смене элемента или брейкпоинта
    pub fn update_config(this: &Rc<RefCell<Self>>, config: ScrollHeaderConfig) {
        let restart = {
            let mut me = this.borrow_mut();
            let restart = me.config.selector != config.selector || me.config.max_width != config.max_width;
            me.config = config;
            if restart {
                me.destroy();
            }
            restart
        };
        if restart {
            Self::init(this);
        }
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        if let Some(scrolled) = self.state.reset() {
            self.apply(scrolled);
        }
    }

    pub fn state(&self) -> ScrollHeaderState {
        self.state
    }
}
