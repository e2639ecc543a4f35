//! Конфигурация компонентов по страницам.
//!
//! Вместо словарей опций каждый компонент получает свою структуру.
//! Все встроенные конфигурации проходят `validate()`.

pub mod components;
pub mod error;
pub mod sliders;

pub use components::{
    FilterConfig, GalleryConfig, GridConfig, HeaderConfig, ScrollHeaderConfig, ScrollSpyConfig,
    SmoothScrollConfig, AUTO_CARD_SELECTORS, AUTO_FILTER_SELECTORS,
};
pub use error::ConfigError;
pub use sliders::{SliderConfig, SliderNavigation, SliderOptions, SlidesPerView};

/// Конфигурации, привязанные к имени страницы
#[derive(Debug, Clone)]
pub struct PageConfigs {
    pub header: HeaderConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub gallery: GalleryConfig,
    filters: Vec<(String, FilterConfig)>,
    grids: Vec<(String, GridConfig)>,
    scroll_headers: Vec<(String, ScrollHeaderConfig)>,
    scroll_spies: Vec<(String, ScrollSpyConfig)>,
    sliders: Vec<(String, Vec<SliderConfig>)>,
}

impl PageConfigs {
    /// Конфигурация сайта: каталог офисов, страница офиса и главная со слайдерами
    pub fn builtin() -> Self {
        Self {
            header: HeaderConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            gallery: GalleryConfig::default(),
            filters: vec![("offices".to_string(), FilterConfig::offices())],
            grids: vec![("offices".to_string(), GridConfig::offices())],
            scroll_headers: vec![("office".to_string(), ScrollHeaderConfig::office())],
            scroll_spies: vec![("office".to_string(), ScrollSpyConfig::office())],
            sliders: vec![("home".to_string(), SliderConfig::home())],
        }
    }

    pub fn filter(&self, page: &str) -> Option<&FilterConfig> {
        lookup(&self.filters, page)
    }

    pub fn grid(&self, page: &str) -> Option<&GridConfig> {
        lookup(&self.grids, page)
    }

    pub fn scroll_header(&self, page: &str) -> Option<&ScrollHeaderConfig> {
        lookup(&self.scroll_headers, page).filter(|c| c.enabled)
    }

    pub fn scroll_spy(&self, page: &str) -> Option<&ScrollSpyConfig> {
        lookup(&self.scroll_spies, page)
    }

    pub fn sliders(&self, page: &str) -> &[SliderConfig] {
        lookup(&self.sliders, page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Все конфигурации сеток; страница может содержать сетку другой страницы
    pub fn all_grids(&self) -> impl Iterator<Item = &GridConfig> {
        self.grids.iter().map(|(_, c)| c)
    }

    pub fn with_filter(mut self, page: &str, config: FilterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        upsert(&mut self.filters, page, config);
        Ok(self)
    }

    pub fn with_grid(mut self, page: &str, config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        upsert(&mut self.grids, page, config);
        Ok(self)
    }

    pub fn with_sliders(mut self, page: &str, sliders: Vec<SliderConfig>) -> Result<Self, ConfigError> {
        sliders::validate_page(page, &sliders)?;
        upsert(&mut self.sliders, page, sliders);
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.header.validate()?;
        self.smooth_scroll.validate()?;
        self.gallery.validate()?;
        for (_, c) in &self.filters {
            c.validate()?;
        }
        for (_, c) in &self.grids {
            c.validate()?;
        }
        for (_, c) in &self.scroll_headers {
            c.validate()?;
        }
        for (_, c) in &self.scroll_spies {
            c.validate()?;
        }
        for (page, sliders) in &self.sliders {
            sliders::validate_page(page, sliders)?;
        }
        Ok(())
    }
}

impl Default for PageConfigs {
    fn default() -> Self {
        Self::builtin()
    }
}

fn lookup<'a, T>(items: &'a [(String, T)], page: &str) -> Option<&'a T> {
    items.iter().find(|(p, _)| p == page).map(|(_, c)| c)
}

fn upsert<T>(items: &mut Vec<(String, T)>, page: &str, value: T) {
    match items.iter_mut().find(|(p, _)| p == page) {
        Some(entry) => entry.1 = value,
        None => items.push((page.to_string(), value)),
    }
}

pub(crate) fn require(component: &'static str, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField { component, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_configs_are_valid() {
        let configs = PageConfigs::builtin();
        assert!(configs.validate().is_ok());
    }

    #[test]
    fn test_lookup_by_page() {
        let configs = PageConfigs::builtin();
        assert_eq!(configs.filter("offices").unwrap().card_selector, ".office-card");
        assert!(configs.filter("home").is_none());
        assert_eq!(configs.grid("offices").unwrap().grid_selector, ".offices-page__list");
        assert_eq!(configs.scroll_header("office").unwrap().scroll_threshold, 30.0);
        assert!(configs.scroll_spy("office").is_some());
        assert_eq!(configs.sliders("home").len(), 2);
        assert!(configs.sliders("about").is_empty());
    }

    #[test]
    fn test_with_filter_rejects_invalid_config() {
        let invalid = FilterConfig {
            card_selector: String::new(),
            ..FilterConfig::universal(".filter-button", ".card")
        };
        let err = PageConfigs::builtin().with_filter("catalog", invalid).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyField {
                component: "filter",
                field: "card_selector"
            }
        );
    }

    #[test]
    fn test_with_grid_replaces_existing_page() {
        let grid = GridConfig {
            grid_selector: ".catalog".to_string(),
            ..GridConfig::default()
        };
        let configs = PageConfigs::builtin().with_grid("offices", grid).unwrap();
        assert_eq!(configs.grid("offices").unwrap().grid_selector, ".catalog");
        assert_eq!(configs.all_grids().count(), 1);
    }

    #[test]
    fn test_disabled_scroll_header_is_hidden() {
        let mut configs = PageConfigs::builtin();
        configs.scroll_headers[0].1.enabled = false;
        assert!(configs.scroll_header("office").is_none());
    }
}
