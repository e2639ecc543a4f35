use std::cell::RefCell;
use std::rc::Rc;

use contracts::site::accordion::AccordionOptions;
use web_sys::Element;

use super::accordion::{Accordion, AccordionCallbacks};
use crate::shared::dom;

/// Блок FAQ: аккордеон по `.faq__item`, открыт один пункт
#[derive(Default)]
pub struct FaqAccordion {
    accordion: Option<Rc<RefCell<Accordion>>>,
}

impl FaqAccordion {
    pub fn new(container_selector: &str) -> Self {
        let accordion = dom::query(container_selector).map(|container| {
            Accordion::new(container, AccordionOptions::faq(), AccordionCallbacks::default())
        });
        Self { accordion }
    }

    pub fn is_present(&self) -> bool {
        self.accordion.is_some()
    }

    pub fn open_item(&self, index: usize) {
        if let Some(accordion) = &self.accordion {
            accordion.borrow_mut().open_item(index);
        }
    }

    pub fn close_all(&self) {
        if let Some(accordion) = &self.accordion {
            accordion.borrow_mut().close_all();
        }
    }

    pub fn get_active_item(&self) -> Option<Element> {
        let accordion = self.accordion.as_ref()?;
        let active = accordion.borrow().get_active_items();
        active.into_iter().next()
    }

    pub fn refresh(&self) {
        if let Some(accordion) = &self.accordion {
            Accordion::refresh(accordion);
        }
    }

    pub fn destroy(&mut self) {
        if let Some(accordion) = self.accordion.take() {
            accordion.borrow_mut().destroy();
        }
    }
}
