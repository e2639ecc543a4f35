//! Виджеты страниц. Каждый необязателен: если нужного элемента нет,
//! инициализация ничего не делает.

pub mod accordion;
pub mod data_manager;
pub mod faq_accordion;
pub mod filter_manager;
pub mod gallery;
pub mod grid_manager;
pub mod scroll_header;
pub mod scroll_spy;
pub mod sliders;
pub mod smooth_scroll;
