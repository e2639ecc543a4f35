use serde::{Deserialize, Serialize};

use super::{require, ConfigError};
use crate::site::header::{WhiteBgPolicy, SCROLL_THRESHOLD_PX};

/// Селекторы кнопок фильтров для автоопределения, в порядке приоритета
pub const AUTO_FILTER_SELECTORS: [&str; 4] = [
    ".offices-page__filter-button",
    ".filter-button",
    ".btn-filter",
    "[data-filter]",
];

/// Селекторы карточек для автоопределения, в порядке приоритета
pub const AUTO_CARD_SELECTORS: [&str; 4] = [".office-card", ".card", ".grid-card", "[data-type]"];

/// Кнопки фильтров и карточки, которыми они управляют
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub filter_selector: String,
    pub active_class: String,
    pub card_selector: String,
    pub type_attribute: String,
    pub default_type: String,
    /// Подпись кнопки → тип. Пустой список: типы берутся из карточек.
    pub filter_types: Vec<(String, String)>,
    /// Тип → подпись для обновления счётчиков на кнопках
    pub type_mapping: Vec<(String, String)>,
}

impl FilterConfig {
    pub fn offices() -> Self {
        Self {
            filter_selector: ".offices-page__filter-button".to_string(),
            active_class: "active".to_string(),
            card_selector: ".office-card".to_string(),
            type_attribute: "data-type".to_string(),
            default_type: "business-center".to_string(),
            filter_types: pairs(&[
                ("all", "all"),
                ("business centers", "business-center"),
                ("coworkings", "coworking"),
            ]),
            type_mapping: pairs(&[
                ("business-center", "business center"),
                ("coworking", "coworking"),
            ]),
        }
    }

    /// Конфигурация с автоматическим определением типов
    pub fn universal(filter_selector: &str, card_selector: &str) -> Self {
        Self {
            filter_selector: filter_selector.to_string(),
            active_class: "active".to_string(),
            card_selector: card_selector.to_string(),
            type_attribute: "data-type".to_string(),
            default_type: "default".to_string(),
            filter_types: Vec::new(),
            type_mapping: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require("filter", "filter_selector", &self.filter_selector)?;
        require("filter", "active_class", &self.active_class)?;
        require("filter", "card_selector", &self.card_selector)?;
        require("filter", "type_attribute", &self.type_attribute)?;
        require("filter", "default_type", &self.default_type)?;
        if self.filter_types.iter().any(|(label, _)| label.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                component: "filter",
                field: "filter_types",
                reason: "empty label matches every button".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::universal(".filter-button", ".card")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub grid_selector: String,
    pub card_selector: String,
    pub wide_class: String,
    pub tall_class: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_selector: ".grid-list".to_string(),
            card_selector: ".grid-card".to_string(),
            wide_class: "wide".to_string(),
            tall_class: "tall".to_string(),
        }
    }
}

impl GridConfig {
    pub fn offices() -> Self {
        Self {
            grid_selector: ".offices-page__list".to_string(),
            card_selector: ".office-card".to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require("grid", "grid_selector", &self.grid_selector)?;
        require("grid", "card_selector", &self.card_selector)?;
        require("grid", "wide_class", &self.wide_class)?;
        require("grid", "tall_class", &self.tall_class)?;
        if self.wide_class == self.tall_class {
            return Err(ConfigError::InvalidValue {
                component: "grid",
                field: "tall_class",
                reason: "must differ from wide_class".to_string(),
            });
        }
        Ok(())
    }
}

/// Переключение класса по порогу прокрутки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollHeaderConfig {
    pub selector: String,
    pub scroll_class: String,
    pub scroll_threshold: f64,
    /// Выше этой ширины окна модуль не работает
    pub max_width: f64,
    pub enabled: bool,
}

impl Default for ScrollHeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".scroll-header".to_string(),
            scroll_class: "scroll".to_string(),
            scroll_threshold: 100.0,
            max_width: 1024.0,
            enabled: true,
        }
    }
}

impl ScrollHeaderConfig {
    pub fn office() -> Self {
        Self {
            selector: ".office-page__header".to_string(),
            scroll_threshold: 30.0,
            max_width: 1150.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require("scroll_header", "selector", &self.selector)?;
        require("scroll_header", "scroll_class", &self.scroll_class)?;
        non_negative("scroll_header", "scroll_threshold", self.scroll_threshold)?;
        positive("scroll_header", "max_width", self.max_width)
    }
}

/// Подсветка секции страницы офиса в боковой навигации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollSpyConfig {
    pub root_selector: String,
    pub nav_list_selector: String,
    pub nav_item_selector: String,
    pub sections_selector: String,
    pub active_class: String,
    /// Отступ при прокрутке к секции по клику
    pub top_offset_px: f64,
    /// Линия вьюпорта, к которой привязывается активная секция
    pub reference_line_px: f64,
    pub debounce_ms: u32,
    pub desktop_min_width: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self::office()
    }
}

impl ScrollSpyConfig {
    pub fn office() -> Self {
        Self {
            root_selector: ".office-page".to_string(),
            nav_list_selector: ".office-page__nav".to_string(),
            nav_item_selector: ".office-page__nav-item".to_string(),
            sections_selector: ".office-page__section".to_string(),
            active_class: "active".to_string(),
            top_offset_px: 120.0,
            reference_line_px: 130.0,
            debounce_ms: 50,
            desktop_min_width: 1150.0,
        }
    }

    /// `rootMargin` наблюдателя: отсекаем всё выше линии и ниже верха окна
    pub fn root_margin(&self) -> String {
        format!("-{}px 0px -100% 0px", self.reference_line_px)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require("scroll_spy", "root_selector", &self.root_selector)?;
        require("scroll_spy", "nav_list_selector", &self.nav_list_selector)?;
        require("scroll_spy", "nav_item_selector", &self.nav_item_selector)?;
        require("scroll_spy", "sections_selector", &self.sections_selector)?;
        require("scroll_spy", "active_class", &self.active_class)?;
        non_negative("scroll_spy", "top_offset_px", self.top_offset_px)?;
        non_negative("scroll_spy", "reference_line_px", self.reference_line_px)?;
        positive("scroll_spy", "desktop_min_width", self.desktop_min_width)
    }
}

/// Шапка сайта и мобильное меню
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderConfig {
    pub header_selector: String,
    pub burger_id: String,
    pub mobile_menu_id: String,
    pub nav_link_selector: String,
    pub nav_link_class: String,
    pub logo_selector: String,
    pub overlay_selector: String,
    pub mobile_nav_selector: String,
    pub mobile_link_class: String,
    pub white_bg_class: String,
    pub active_class: String,
    pub white_bg_pages: Vec<String>,
    pub policy: WhiteBgPolicy,
    pub scroll_threshold_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            header_selector: ".header".to_string(),
            burger_id: "burger-btn".to_string(),
            mobile_menu_id: "mobile-menu".to_string(),
            nav_link_selector: ".header__nav-link".to_string(),
            nav_link_class: "header__nav-link".to_string(),
            logo_selector: ".header__logo".to_string(),
            overlay_selector: ".mobile-menu__overlay".to_string(),
            mobile_nav_selector: ".mobile-menu__nav".to_string(),
            mobile_link_class: "mobile-menu__link".to_string(),
            white_bg_class: "header--white-bg".to_string(),
            active_class: "active".to_string(),
            white_bg_pages: vec!["offices".to_string(), "office".to_string()],
            policy: WhiteBgPolicy::PageOverridesScroll,
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
        }
    }
}

impl HeaderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require("header", "header_selector", &self.header_selector)?;
        require("header", "burger_id", &self.burger_id)?;
        require("header", "mobile_menu_id", &self.mobile_menu_id)?;
        require("header", "nav_link_selector", &self.nav_link_selector)?;
        require("header", "mobile_link_class", &self.mobile_link_class)?;
        require("header", "white_bg_class", &self.white_bg_class)?;
        non_negative("header", "scroll_threshold_px", self.scroll_threshold_px)
    }
}

/// Прокрутка к секции по стрелке в hero-блоке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothScrollConfig {
    pub header_selector: String,
    pub trigger_selector: String,
    pub target_id: String,
    pub duration_ms: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            header_selector: ".header".to_string(),
            trigger_selector: ".hero__arrow".to_string(),
            target_id: "about-section".to_string(),
            duration_ms: crate::site::easing::SCROLL_DURATION_MS,
        }
    }
}

impl SmoothScrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require("smooth_scroll", "trigger_selector", &self.trigger_selector)?;
        require("smooth_scroll", "target_id", &self.target_id)?;
        positive("smooth_scroll", "duration_ms", self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub container_selector: String,
    pub thumbs_selector: String,
    pub main_selector: String,
    pub thumb_selector: String,
    pub active_class: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            container_selector: ".gallery".to_string(),
            thumbs_selector: ".gallery__thumbs".to_string(),
            main_selector: ".gallery__main".to_string(),
            thumb_selector: ".gallery__thumb".to_string(),
            active_class: "is-active".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require("gallery", "container_selector", &self.container_selector)?;
        require("gallery", "thumbs_selector", &self.thumbs_selector)?;
        require("gallery", "main_selector", &self.main_selector)?;
        require("gallery", "thumb_selector", &self.thumb_selector)
    }
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

fn non_negative(component: &'static str, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidValue {
            component,
            field,
            reason: format!("expected a non-negative number, got {}", value),
        });
    }
    Ok(())
}

fn positive(component: &'static str, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidValue {
            component,
            field,
            reason: format!("expected a positive number, got {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_filter_has_no_labels() {
        let config = FilterConfig::universal(".btn-filter", ".grid-card");
        assert!(config.filter_types.is_empty());
        assert_eq!(config.default_type, "default");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_filter_rejects_empty_label() {
        let mut config = FilterConfig::offices();
        config.filter_types.push((" ".to_string(), "coworking".to_string()));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "filter_types", .. })
        ));
    }

    #[test]
    fn test_grid_classes_must_differ() {
        let config = GridConfig {
            tall_class: "wide".to_string(),
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scroll_spy_root_margin() {
        assert_eq!(ScrollSpyConfig::office().root_margin(), "-130px 0px -100% 0px");
    }

    #[test]
    fn test_numeric_validation() {
        let config = ScrollHeaderConfig {
            max_width: 0.0,
            ..ScrollHeaderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SmoothScrollConfig {
            duration_ms: f64::NAN,
            ..SmoothScrollConfig::default()
        };
        assert!(config.validate().is_err());

        let config = HeaderConfig {
            scroll_threshold_px: -1.0,
            ..HeaderConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "header: invalid `scroll_threshold_px`: expected a non-negative number, got -1"
        );
    }
}
