//! Карусели текущей страницы.
//!
//! Сама библиотека каруселей внешняя, доступ к ней идёт через контракт
//! init/destroy [`CarouselLibrary`]. Реестром владеет оркестратор сайта,
//! при каждой навигации он очищается.

use contracts::config::{SliderConfig, SliderOptions};
use leptos::logging::{log, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::shared::dom;

pub trait CarouselLibrary {
    type Instance;

    fn init(&self, selector: &str, options: &SliderOptions) -> Option<Self::Instance>;

    fn destroy(&self, instance: Self::Instance);

    fn is_destroyed(&self, _instance: &Self::Instance) -> bool {
        false
    }
}

pub struct SliderRegistry<L: CarouselLibrary> {
    library: L,
    instances: Vec<(String, L::Instance)>,
}

impl<L: CarouselLibrary> SliderRegistry<L> {
    pub fn new(library: L) -> Self {
        Self {
            library,
            instances: Vec::new(),
        }
    }

    /// Запускает карусель на `selector`; живой экземпляр возвращается как есть
    pub fn init(&mut self, selector: &str, options: &SliderOptions) -> Option<&L::Instance> {
        if let Some(pos) = self.position(selector) {
            if !self.library.is_destroyed(&self.instances[pos].1) {
                return Some(&self.instances[pos].1);
            }
            let (_, stale) = self.instances.remove(pos);
            self.library.destroy(stale);
        }

        let options = options.clone().merged_with_defaults();
        let instance = self.library.init(selector, &options)?;
        self.instances.push((selector.to_string(), instance));
        self.instances.last().map(|(_, instance)| instance)
    }

    /// Запускает все карусели страницы, возвращает число живых
    pub fn init_page(&mut self, sliders: &[SliderConfig]) -> usize {
        sliders
            .iter()
            .filter(|slider| self.init(&slider.selector, &slider.options).is_some())
            .count()
    }

    pub fn get(&self, selector: &str) -> Option<&L::Instance> {
        self.position(selector).map(|pos| &self.instances[pos].1)
    }

    pub fn destroy(&mut self, selector: &str) {
        if let Some(pos) = self.position(selector) {
            let (_, instance) = self.instances.remove(pos);
            self.library.destroy(instance);
        }
    }

    pub fn destroy_all(&mut self) {
        for (_, instance) in self.instances.drain(..) {
            self.library.destroy(instance);
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn position(&self, selector: &str) -> Option<usize> {
        self.instances.iter().position(|(s, _)| s == selector)
    }
}

#[wasm_bindgen]
extern "C" {
    /// Глобальный конструктор `Swiper` из бандла
    pub type Swiper;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Swiper, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Swiper, delete_instance: bool, clean_styles: bool);

    #[wasm_bindgen(method, getter)]
    fn destroyed(this: &Swiper) -> bool;
}

/// Swiper через `window.Swiper`
#[derive(Default)]
pub struct SwiperLibrary;

impl CarouselLibrary for SwiperLibrary {
    type Instance = Swiper;

    fn init(&self, selector: &str, options: &SliderOptions) -> Option<Swiper> {
        dom::query(selector)?;

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let options = match options.serialize(&serializer) {
            Ok(value) => value,
            Err(err) => {
                warn!("Slider {}: invalid options: {}", selector, err);
                return None;
            }
        };

        match Swiper::new(selector, &options) {
            Ok(swiper) => {
                log!("Slider {} initialised", selector);
                Some(swiper)
            }
            Err(err) => {
                warn!("Slider {}: carousel library failed: {:?}", selector, err);
                None
            }
        }
    }

    fn destroy(&self, instance: Swiper) {
        instance.destroy(true, true);
    }

    fn is_destroyed(&self, instance: &Swiper) -> bool {
        instance.destroyed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::config::SliderNavigation;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeSlider {
        id: usize,
        options: SliderOptions,
    }

    #[derive(Default, Clone)]
    struct FakeLibrary {
        created: Rc<RefCell<usize>>,
        destroyed: Rc<RefCell<Vec<usize>>>,
        dead: Rc<RefCell<Vec<usize>>>,
        missing: Vec<String>,
    }

    impl CarouselLibrary for FakeLibrary {
        type Instance = FakeSlider;

        fn init(&self, selector: &str, options: &SliderOptions) -> Option<FakeSlider> {
            if self.missing.iter().any(|m| m == selector) {
                return None;
            }
            let mut created = self.created.borrow_mut();
            *created += 1;
            Some(FakeSlider {
                id: *created,
                options: options.clone(),
            })
        }

        fn destroy(&self, instance: FakeSlider) {
            self.destroyed.borrow_mut().push(instance.id);
        }

        fn is_destroyed(&self, instance: &FakeSlider) -> bool {
            self.dead.borrow().contains(&instance.id)
        }
    }

    #[test]
    fn test_init_merges_library_defaults() {
        let mut registry = SliderRegistry::new(FakeLibrary::default());
        let options = SliderOptions {
            centered_slides: Some(false),
            ..SliderOptions::default()
        };
        let slider = registry.init(".news__swiper", &options).unwrap();
        assert_eq!(slider.options.centered_slides, Some(false));
        assert_eq!(slider.options.loop_slides, Some(true));
        assert_eq!(
            slider.options.navigation,
            Some(SliderNavigation::new(".swiper-button-next", ".swiper-button-prev"))
        );
    }

    #[test]
    fn test_reinit_returns_live_instance() {
        let library = FakeLibrary::default();
        let mut registry = SliderRegistry::new(library.clone());
        let first = registry.init(".offices__swiper", &SliderOptions::default()).unwrap().id;
        let second = registry.init(".offices__swiper", &SliderOptions::default()).unwrap().id;
        assert_eq!(first, second);
        assert_eq!(*library.created.borrow(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reinit_replaces_destroyed_instance() {
        let library = FakeLibrary::default();
        let mut registry = SliderRegistry::new(library.clone());
        registry.init(".offices__swiper", &SliderOptions::default());
        library.dead.borrow_mut().push(1);
        let fresh = registry.init(".offices__swiper", &SliderOptions::default()).unwrap().id;
        assert_eq!(fresh, 2);
        assert_eq!(*library.destroyed.borrow(), vec![1]);
    }

    #[test]
    fn test_init_page_skips_missing_elements() {
        let library = FakeLibrary {
            missing: vec![".news__swiper".to_string()],
            ..FakeLibrary::default()
        };
        let mut registry = SliderRegistry::new(library);
        assert_eq!(registry.init_page(&SliderConfig::home()), 1);
        assert!(registry.get(".offices__swiper").is_some());
        assert!(registry.get(".news__swiper").is_none());
    }

    #[test]
    fn test_destroy_all_empties_registry() {
        let library = FakeLibrary::default();
        let mut registry = SliderRegistry::new(library.clone());
        registry.init_page(&SliderConfig::home());
        registry.destroy(".news__swiper");
        assert_eq!(registry.len(), 1);
        registry.destroy_all();
        assert!(registry.is_empty());
        assert_eq!(*library.destroyed.borrow(), vec![2, 1]);
    }
}
