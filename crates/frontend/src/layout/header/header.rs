use std::cell::RefCell;
use std::rc::Rc;

use contracts::config::HeaderConfig;
use contracts::site::header::{active_nav_page, HeaderState};
use contracts::site::pages::{page_from_path, PAGE_ATTRIBUTE};
use leptos::logging::log;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::shared::dom::{self, EventListener};

/// Шапка сайта: мобильное меню, белый фон, подсветка ссылки текущей страницы.
///
/// Живёт всё время работы сайта; при смене страницы получает `on_page_change`,
/// а не создаётся заново.
pub struct Header {
    config: HeaderConfig,
    state: HeaderState,
    header: Option<Element>,
    burger: Option<Element>,
    mobile_menu: Option<Element>,
    logo: Option<Element>,
    nav_links: Vec<Element>,
    listeners: Vec<EventListener>,
    scroll_listener: Option<EventListener>,
}

impl Header {
    pub fn new(config: HeaderConfig) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            config,
            state: HeaderState::default(),
            header: None,
            burger: None,
            mobile_menu: None,
            logo: None,
            nav_links: Vec::new(),
            listeners: Vec::new(),
            scroll_listener: None,
        }))
    }

    pub fn init(this: &Rc<RefCell<Self>>) {
        {
            let mut me = this.borrow_mut();
            me.scan();
            me.state = HeaderState::new(&page_from_path(&dom::location_path()));
            log!("Header init, current page: {}", me.state.current_page);
        }

        Self::bind_events(this);
        Self::init_scroll_handler(this);

        let me = this.borrow();
        me.update_header_state();
        me.set_active_link(&me.state.current_page);
    }

    fn scan(&mut self) {
        self.header = dom::query(&self.config.header_selector);
        self.burger = dom::by_id(&self.config.burger_id);
        self.mobile_menu = dom::by_id(&self.config.mobile_menu_id);
        self.logo = dom::query(&self.config.logo_selector);
        self.nav_links = dom::query_all(&self.config.nav_link_selector);
    }

    /// Все элементы, клик по которым закрывает меню
    fn closing_targets(&self) -> Vec<Element> {
        let overlay = self
            .mobile_menu
            .as_ref()
            .and_then(|menu| dom::query_in(menu, &self.config.overlay_selector));

        overlay
            .into_iter()
            .chain(self.logo.clone())
            .chain(self.nav_links.iter().cloned())
            .collect()
    }

    fn bind_events(this: &Rc<RefCell<Self>>) {
        let mut listeners = Vec::new();

        if let Some(burger) = this.borrow().burger.clone() {
            let weak = Rc::downgrade(this);
            listeners.push(EventListener::new(&burger, "click", move |_| {
                if let Some(me) = weak.upgrade() {
                    me.borrow_mut().toggle_mobile_menu();
                }
            }));
        }

        let targets = this.borrow().closing_targets();
        let mobile_links = this.borrow().setup_mobile_menu();
        for target in targets.iter().chain(mobile_links.iter()) {
            let weak = Rc::downgrade(this);
            listeners.push(EventListener::new(target, "click", move |_| {
                if let Some(me) = weak.upgrade() {
                    me.borrow_mut().close_mobile_menu();
                }
            }));
        }

        this.borrow_mut().listeners = listeners;
    }

    /// Заполняет мобильное меню копиями ссылок шапки, возвращает копии
    fn setup_mobile_menu(&self) -> Vec<Element> {
        let Some(mobile_nav) = self
            .mobile_menu
            .as_ref()
            .and_then(|menu| dom::query_in(menu, &self.config.mobile_nav_selector))
        else {
            return Vec::new();
        };
        if self.nav_links.is_empty() {
            return Vec::new();
        }

        mobile_nav.set_inner_html("");

        self.nav_links
            .iter()
            .filter_map(|link| link.clone_node_with_deep(true).ok())
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|cloned| {
                dom::toggle_class(&cloned, &self.config.nav_link_class, false);
                dom::toggle_class(&cloned, &self.config.mobile_link_class, true);
                mobile_nav.append_child(&cloned).ok()?;
                Some(cloned)
            })
            .collect()
    }

    pub fn toggle_mobile_menu(&mut self) {
        if self.state.is_menu_open {
            self.close_mobile_menu();
        } else {
            self.open_mobile_menu();
        }
    }

    pub fn open_mobile_menu(&mut self) {
        self.set_menu_open(true);
    }

    pub fn close_mobile_menu(&mut self) {
        self.set_menu_open(false);
    }

    fn set_menu_open(&mut self, open: bool) {
        let (Some(menu), Some(burger)) = (&self.mobile_menu, &self.burger) else {
            return;
        };
        dom::toggle_class(menu, &self.config.active_class, open);
        dom::toggle_class(burger, &self.config.active_class, open);
        dom::set_body_overflow(if open { "hidden" } else { "" });
        self.state.is_menu_open = open;
        self.update_header_state();
    }

    /// Пассивный слушатель скролла, переживает `update()`
    fn init_scroll_handler(this: &Rc<RefCell<Self>>) {
        let Some(window) = dom::window() else { return };
        let weak = Rc::downgrade(this);
        let listener = EventListener::passive(&window, "scroll", move |_| {
            if let Some(me) = weak.upgrade() {
                let mut me = me.borrow_mut();
                let threshold = me.config.scroll_threshold_px;
                me.state.on_scroll(dom::scroll_top(), threshold);
                me.update_header_state();
            }
        });
        this.borrow_mut().scroll_listener = Some(listener);
    }

    fn update_header_state(&self) {
        let Some(header) = &self.header else { return };
        let white = self
            .state
            .white_background(self.config.policy, &self.config.white_bg_pages);
        dom::toggle_class(header, &self.config.white_bg_class, white);
    }

    pub fn on_page_change(&mut self, page: &str) {
        self.state.current_page = page.to_string();
        self.update_header_state();
        self.set_active_link(page);
    }

    fn set_active_link(&self, page: &str) {
        for link in &self.nav_links {
            dom::toggle_class(link, &self.config.active_class, false);
        }

        let Some(page) = active_nav_page(page) else { return };
        let active = self
            .nav_links
            .iter()
            .find(|link| link.get_attribute(PAGE_ATTRIBUTE).as_deref() == Some(page));
        if let Some(link) = active {
            dom::toggle_class(link, &self.config.active_class, true);
        }
    }

    /// Повторный поиск ссылок и копий мобильного меню после подмены контента
    pub fn update(this: &Rc<RefCell<Self>>) {
        {
            let mut me = this.borrow_mut();
            me.close_mobile_menu();
            me.scan();
        }
        Self::bind_events(this);

        let me = this.borrow();
        me.update_header_state();
        me.set_active_link(&me.state.current_page);
    }

    pub fn is_white_background(&self) -> bool {
        self.state
            .white_background(self.config.policy, &self.config.white_bg_pages)
    }

    pub fn state(&self) -> &HeaderState {
        &self.state
    }
}
