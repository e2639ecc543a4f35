//! Навигация по страницам: загрузка фрагментов, история, инициализация виджетов.

pub mod fragment;
pub mod history;
pub mod page_components;
pub mod site;

pub use site::Site;
