use std::rc::Rc;

use contracts::config::GalleryConfig;
use web_sys::Element;

use crate::shared::dom::{self, EventListener};

/// Миниатюры, переключающие главное изображение
pub struct Gallery {
    listeners: Vec<EventListener>,
}

impl Gallery {
    /// `None`, если разметка галереи неполная
    pub fn init(config: &GalleryConfig) -> Option<Self> {
        let container = dom::query(&config.container_selector)?;
        let thumbs = dom::query_in(&container, &config.thumbs_selector)?;
        let main = dom::query_in(&container, &config.main_selector)?;
        let main_img = dom::query_in(&main, "img")?;

        let buttons: Rc<Vec<Element>> = Rc::new(dom::query_all_in(&thumbs, &config.thumb_selector));
        let listeners = buttons
            .iter()
            .enumerate()
            .map(|(index, button)| {
                let buttons = buttons.clone();
                let main_img = main_img.clone();
                let active_class = config.active_class.clone();
                EventListener::new(button, "click", move |e| {
                    e.prevent_default();
                    for (i, b) in buttons.iter().enumerate() {
                        dom::toggle_class(b, &active_class, i == index);
                    }
                    let src = dom::query_in(&buttons[index], "img").and_then(|img| img.get_attribute("src"));
                    if let Some(src) = src {
                        let _ = main_img.set_attribute("src", &src);
                    }
                })
            })
            .collect();

        Some(Self { listeners })
    }

    pub fn thumb_count(&self) -> usize {
        self.listeners.len()
    }
}
