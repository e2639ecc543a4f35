//! Повторяющийся узор tall/wide для видимых карточек сетки.

use contracts::config::GridConfig;
use contracts::site::grid::{self, LayoutVariant, PatternInfo};
use web_sys::Element;

use crate::shared::dom;

pub struct GridManager {
    config: GridConfig,
    container: Option<Element>,
    cards: Vec<Element>,
}

impl GridManager {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            container: None,
            cards: Vec::new(),
        }
    }

    pub fn init(&mut self) {
        self.container = dom::query(&self.config.grid_selector);
        self.cards = match &self.container {
            Some(container) => dom::query_all_in(container, &self.config.card_selector),
            None => Vec::new(),
        };
        self.arrange_grid();
    }

    /// Вызывать после каждой смены фильтра: позиции зависят от видимых карточек
    pub fn update(&mut self) {
        self.init();
    }

    pub fn is_present(&self) -> bool {
        self.container.is_some()
    }

    fn arrange_grid(&self) {
        let layout = grid::arrange(self.cards.iter().map(dom::is_displayed));
        for (card, variant) in self.cards.iter().zip(layout) {
            dom::toggle_class(card, &self.config.wide_class, variant == Some(LayoutVariant::Wide));
            dom::toggle_class(card, &self.config.tall_class, variant == Some(LayoutVariant::Tall));
        }
    }

    pub fn pattern_info(&self) -> PatternInfo {
        grid::pattern_info()
    }
}
