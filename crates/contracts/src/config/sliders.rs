//! Настройки слайдеров. Опции сериализуются в camelCase и передаются
//! библиотеке карусели как есть.

use serde::{Deserialize, Serialize};

use super::{require, ConfigError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlidesPerView {
    Count(f64),
    Named(String),
}

impl SlidesPerView {
    pub fn auto() -> Self {
        SlidesPerView::Named("auto".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderNavigation {
    pub next_el: String,
    pub prev_el: String,
}

impl SliderNavigation {
    pub fn new(next_el: &str, prev_el: &str) -> Self {
        Self {
            next_el: next_el.to_string(),
            prev_el: prev_el.to_string(),
        }
    }
}

/// Опции экземпляра карусели; незаданные поля берутся из `library_defaults`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_per_view: Option<SlidesPerView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centered_slides: Option<bool>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_slides: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_slide: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_between: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_offset_before: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_offset_after: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_slides_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_slides_visibility: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<SliderNavigation>,
}

impl SliderOptions {
    pub fn library_defaults() -> Self {
        Self {
            loop_slides: Some(true),
            centered_slides: Some(true),
            navigation: Some(SliderNavigation::new(".swiper-button-next", ".swiper-button-prev")),
            ..Self::default()
        }
    }

    /// Поверх значений по умолчанию накладываются заданные поля
    pub fn merged_with_defaults(self) -> Self {
        let defaults = Self::library_defaults();
        Self {
            slides_per_view: self.slides_per_view.or(defaults.slides_per_view),
            centered_slides: self.centered_slides.or(defaults.centered_slides),
            loop_slides: self.loop_slides.or(defaults.loop_slides),
            initial_slide: self.initial_slide.or(defaults.initial_slide),
            space_between: self.space_between.or(defaults.space_between),
            slides_offset_before: self.slides_offset_before.or(defaults.slides_offset_before),
            slides_offset_after: self.slides_offset_after.or(defaults.slides_offset_after),
            watch_slides_progress: self.watch_slides_progress.or(defaults.watch_slides_progress),
            watch_slides_visibility: self
                .watch_slides_visibility
                .or(defaults.watch_slides_visibility),
            navigation: self.navigation.or(defaults.navigation),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub selector: String,
    pub options: SliderOptions,
}

impl SliderConfig {
    pub fn new(selector: &str, options: SliderOptions) -> Self {
        Self {
            selector: selector.to_string(),
            options,
        }
    }

    /// Ленты офисов и новостей на главной
    pub fn home() -> Vec<Self> {
        // 392px ширина слайда + 32px отступ
        let strip = |next: &str, prev: &str| SliderOptions {
            slides_per_view: Some(SlidesPerView::auto()),
            centered_slides: Some(false),
            loop_slides: Some(true),
            initial_slide: Some(0),
            space_between: Some(32.0),
            slides_offset_before: Some(424.0),
            slides_offset_after: Some(0.0),
            watch_slides_progress: Some(true),
            watch_slides_visibility: Some(true),
            navigation: Some(SliderNavigation::new(next, prev)),
        };
        vec![
            Self::new(
                ".offices__swiper",
                strip(".swiper__button-next", ".swiper__button-prev"),
            ),
            Self::new(
                ".news__swiper",
                strip(".news__swiper-next", ".news__swiper-prev"),
            ),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require("slider", "selector", &self.selector)
    }
}

pub(crate) fn validate_page(page: &str, sliders: &[SliderConfig]) -> Result<(), ConfigError> {
    for (i, slider) in sliders.iter().enumerate() {
        slider.validate()?;
        if sliders[..i].iter().any(|s| s.selector == slider.selector) {
            return Err(ConfigError::DuplicateSelector {
                page: page.to_string(),
                selector: slider.selector.clone(),
            });
        }
    }
    Ok(())
}
