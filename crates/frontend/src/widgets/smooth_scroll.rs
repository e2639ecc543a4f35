//! Плавная прокрутка к секции с поправкой на высоту шапки.

use std::cell::Cell;

use contracts::config::SmoothScrollConfig;
use contracts::site::easing::ScrollAnimation;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::shared::dom;

pub struct SmoothScroll {
    config: SmoothScrollConfig,
    header_height: Cell<f64>,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig) -> Self {
        let header_height = Cell::new(dom::offset_height(&config.header_selector));
        Self {
            config,
            header_height,
        }
    }

    pub fn config(&self) -> &SmoothScrollConfig {
        &self.config
    }

    pub fn update_header_height(&self) {
        self.header_height
            .set(dom::offset_height(&self.config.header_selector));
    }

    pub fn scroll_to_section(&self, section_id: &str) {
        let Some(section) = dom::by_id(section_id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        self.update_header_height();
        let mut animation = ScrollAnimation::towards(
            dom::scroll_top(),
            section.offset_top() as f64,
            self.header_height.get(),
        );
        animation.duration_ms = self.config.duration_ms;

        let start = js_sys::Date::now();
        dom::animation_loop(move |_| {
            let (position, done) = animation.frame(js_sys::Date::now() - start);
            if let Some(window) = dom::window() {
                window.scroll_to_with_x_and_y(0.0, position);
            }
            !done
        });
    }
}
