use std::cell::RefCell;
use std::rc::Rc;

use contracts::config::PageConfigs;
use leptos::logging::log;

use crate::widgets::faq_accordion::FaqAccordion;
use crate::widgets::filter_manager::{detect_filter_config, FilterManager};
use crate::widgets::gallery::Gallery;
use crate::widgets::grid_manager::GridManager;
use crate::widgets::scroll_header::ScrollHeader;
use crate::widgets::scroll_spy::OfficeScrollSpy;

const FAQ_SELECTOR: &str = ".faq";

/// Виджеты одной загруженной страницы. Пересоздаются при каждой навигации.
pub struct PageComponents {
    faq: FaqAccordion,
    filters: Option<Rc<RefCell<FilterManager>>>,
    grids: Vec<Rc<RefCell<GridManager>>>,
    scroll_header: Option<Rc<RefCell<ScrollHeader>>>,
    scroll_spy: Option<Rc<RefCell<OfficeScrollSpy>>>,
    gallery: Option<Gallery>,
}

impl PageComponents {
    pub fn init(page: &str, configs: &PageConfigs) -> Self {
        let faq = FaqAccordion::new(FAQ_SELECTOR);

        let grids: Vec<_> = configs
            .all_grids()
            .filter_map(|config| {
                let mut grid = GridManager::new(config.clone());
                grid.init();
                grid.is_present().then(|| Rc::new(RefCell::new(grid)))
            })
            .collect();

        let filters = configs
            .filter(page)
            .cloned()
            .or_else(detect_filter_config)
            .map(|config| {
                let manager = FilterManager::new(config);
                FilterManager::init(&manager);
                // Раскладка зависит от видимых карточек
                let grids = grids.clone();
                manager
                    .borrow_mut()
                    .set_filter_change_callback(Box::new(move |_, _| {
                        for grid in &grids {
                            grid.borrow_mut().update();
                        }
                    }));
                manager
            });

        let scroll_header = configs.scroll_header(page).cloned().map(|config| {
            let header = ScrollHeader::new(config);
            ScrollHeader::init(&header);
            header
        });

        let scroll_spy = configs.scroll_spy(page).cloned().map(|config| {
            let spy = OfficeScrollSpy::new(config);
            OfficeScrollSpy::init(&spy);
            spy
        });

        let gallery = Gallery::init(&configs.gallery);

        log!(
            "Page {} components: faq={}, grids={}, filters={}, scroll_header={}, scroll_spy={}, gallery={}",
            page,
            faq.is_present(),
            grids.len(),
            filters.is_some(),
            scroll_header.is_some(),
            scroll_spy.is_some(),
            gallery.is_some()
        );

        Self {
            faq,
            filters,
            grids,
            scroll_header,
            scroll_spy,
            gallery,
        }
    }

    pub fn filters(&self) -> Option<&Rc<RefCell<FilterManager>>> {
        self.filters.as_ref()
    }

    pub fn destroy(&mut self) {
        self.faq.destroy();
        if let Some(filters) = self.filters.take() {
            filters.borrow_mut().destroy();
        }
        if let Some(header) = self.scroll_header.take() {
            header.borrow_mut().destroy();
        }
        if let Some(spy) = self.scroll_spy.take() {
            spy.borrow_mut().destroy();
        }
        self.gallery = None;
        self.grids.clear();
    }
}
