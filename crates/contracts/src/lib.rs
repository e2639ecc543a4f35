//! Общие типы и логика сайта без зависимости от DOM.
//!
//! Всё, что можно проверить без браузера, живёт здесь: карточки и фильтры,
//! паттерн сетки, состояние шапки, аккордеон, scroll-spy, анимация прокрутки,
//! навигация и конфигурация компонентов по страницам.

pub mod config;
pub mod site;
