pub mod accordion;
pub mod cards;
pub mod easing;
pub mod grid;
pub mod header;
pub mod labels;
pub mod navigation;
pub mod pages;
pub mod scroll_header;
pub mod scroll_spy;
