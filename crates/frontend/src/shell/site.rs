use std::cell::RefCell;
use std::rc::Rc;

use contracts::config::PageConfigs;
use contracts::site::navigation::{resolve_load, LoadOutcome, NavigationTokens};
use contracts::site::pages::{page_from_path, ERROR_FRAGMENT, HOME_PAGE, PAGE_ATTRIBUTE};
use leptos::logging::{error, log, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::fragment::fetch_fragment;
use super::history;
use super::page_components::PageComponents;
use crate::layout::header::Header;
use crate::shared::dom::{self, EventListener};
use crate::widgets::sliders::{SliderRegistry, SwiperLibrary};
use crate::widgets::smooth_scroll::SmoothScroll;

/// Оркестратор сайта.
///
/// Держит текущую страницу, подменяет содержимое контейнера загруженным
/// фрагментом и заново инициализирует виджеты. Шапка переживает смену
/// страниц и получает уведомление `on_page_change`.
pub struct Site {
    container: Element,
    configs: PageConfigs,
    current_page: RefCell<String>,
    tokens: RefCell<NavigationTokens>,
    header: RefCell<Option<Rc<RefCell<Header>>>>,
    components: RefCell<Option<PageComponents>>,
    sliders: RefCell<SliderRegistry<SwiperLibrary>>,
    smooth_scroll: SmoothScroll,
    listeners: RefCell<Vec<EventListener>>,
}

impl Site {
    pub fn new(container: Element, configs: PageConfigs) -> Rc<Self> {
        let smooth_scroll = SmoothScroll::new(configs.smooth_scroll.clone());
        Rc::new(Self {
            container,
            configs,
            current_page: RefCell::new(HOME_PAGE.to_string()),
            tokens: RefCell::new(NavigationTokens::default()),
            header: RefCell::new(None),
            components: RefCell::new(None),
            sliders: RefCell::new(SliderRegistry::new(SwiperLibrary)),
            smooth_scroll,
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Привязывает события и загружает страницу из текущего адреса
    pub fn init(self: &Rc<Self>) {
        self.bind_events();

        let page = page_from_path(&dom::location_path());
        if let Err(e) = history::replace_page(&page) {
            warn!("Failed to set initial history state: {}", e);
        }
        log!("🚀 Site init, initial page: {}", page);
        self.load_page_without_history(&page);
    }

    pub fn current_page(&self) -> String {
        self.current_page.borrow().clone()
    }

    pub fn load_page(self: &Rc<Self>, page: &str) {
        self.spawn_load(page, true);
    }

    /// Загрузка для back/forward: запись истории не добавляется
    pub fn load_page_without_history(self: &Rc<Self>, page: &str) {
        self.spawn_load(page, false);
    }

    fn spawn_load(self: &Rc<Self>, page: &str, push_history: bool) {
        let site = Rc::clone(self);
        let page = page.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            site.load(page, push_history).await;
        });
    }

    async fn load(&self, page: String, push_history: bool) {
        let token = self.tokens.borrow_mut().issue();
        let result = fetch_fragment(&page).await;
        let outcome = resolve_load(&self.tokens.borrow(), token, &page, push_history, result);
        match outcome {
            LoadOutcome::Apply {
                page,
                html,
                history_url,
            } => {
                if let Err(e) = self.apply_page(&page, &html, history_url.as_deref()) {
                    error!("Failed to show page {}: {}", page, e);
                    self.show_error_page();
                }
            }
            LoadOutcome::ShowError { reason, .. } => {
                error!("Failed to load page {}: {}", page, reason);
                self.show_error_page();
            }
            LoadOutcome::Stale => log::debug!("Dropped stale response for page {}", page),
        }
    }

    fn apply_page(&self, page: &str, html: &str, history_url: Option<&str>) -> Result<(), String> {
        self.teardown_page();

        self.container.set_inner_html(html);
        *self.current_page.borrow_mut() = page.to_string();

        if let Some(url) = history_url {
            history::push_page(page, url)?;
        }

        self.init_header();
        if let Some(header) = self.header.borrow().as_ref() {
            header.borrow_mut().on_page_change(page);
        }

        *self.components.borrow_mut() = Some(PageComponents::init(page, &self.configs));
        let sliders = self.sliders.borrow_mut().init_page(self.configs.sliders(page));
        if sliders > 0 {
            log!("Page {}: {} slider(s) started", page, sliders);
        }

        self.smooth_scroll.update_header_height();
        dom::scroll_to_top();
        log!("✅ Page {} loaded", page);
        Ok(())
    }

    /// Создаёт шапку при первом появлении, дальше только обновляет её
    fn init_header(&self) {
        if dom::query(&self.configs.header.header_selector).is_none() {
            return;
        }
        let existing = self.header.borrow().clone();
        match existing {
            Some(header) => Header::update(&header),
            None => {
                let header = Header::new(self.configs.header.clone());
                Header::init(&header);
                *self.header.borrow_mut() = Some(header);
            }
        }
    }

    fn teardown_page(&self) {
        if let Some(mut components) = self.components.borrow_mut().take() {
            components.destroy();
        }
        self.sliders.borrow_mut().destroy_all();
    }

    fn show_error_page(&self) {
        self.teardown_page();
        self.container.set_inner_html(ERROR_FRAGMENT);
    }

    fn bind_events(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        if let Some(document) = dom::document() {
            let weak = Rc::downgrade(self);
            listeners.push(EventListener::new(&document, "click", move |e| {
                if let Some(site) = weak.upgrade() {
                    site.handle_click(&e);
                }
            }));
        }

        if let Some(window) = dom::window() {
            let weak = Rc::downgrade(self);
            listeners.push(EventListener::passive(&window, "resize", move |_| {
                if let Some(site) = weak.upgrade() {
                    site.smooth_scroll.update_header_height();
                }
            }));

            let weak = Rc::downgrade(self);
            listeners.push(EventListener::new(&window, "popstate", move |e| {
                if let Some(site) = weak.upgrade() {
                    let page = history::page_from_popstate(&e);
                    site.load_page_without_history(&page);
                }
            }));
        }

        *self.listeners.borrow_mut() = listeners;
    }

    /// Клик по потомку ссылки тоже считается кликом по ссылке
    fn handle_click(self: &Rc<Self>, e: &Event) {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        let page_selector = format!("[{}]", PAGE_ATTRIBUTE);
        if let Ok(Some(link)) = target.closest(&page_selector) {
            e.prevent_default();
            let page = link
                .get_attribute(PAGE_ATTRIBUTE)
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| HOME_PAGE.to_string());
            self.load_page(&page);
            return;
        }

        let trigger = &self.smooth_scroll.config().trigger_selector;
        if let Ok(Some(_)) = target.closest(trigger) {
            e.prevent_default();
            let target_id = self.smooth_scroll.config().target_id.clone();
            self.smooth_scroll.scroll_to_section(&target_id);
        }
    }
}
