//! Общие помощники для работы с DOM.
//!
//! Поиск элементов возвращает `Option` или пустой список, а не ошибку:
//! виджеты на странице необязательны, отсутствие элемента значит "делать нечего".

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Текущая вертикальная прокрутка страницы
pub fn scroll_top() -> f64 {
    let Some(window) = window() else { return 0.0 };
    match window.scroll_y() {
        Ok(y) => y,
        Err(_) => document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_top() as f64)
            .unwrap_or(0.0),
    }
}

pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Блокирует (`hidden`) или возвращает (`""`) прокрутку страницы
pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Показ и скрытие через inline-стиль `display`
pub fn set_displayed(el: &Element, visible: bool) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else { return };
    let style = html.style();
    let _ = if visible {
        style.set_property("display", "")
    } else {
        style.set_property("display", "none")
    };
}

/// Видим, если inline `display` не `none` и нет атрибута `hidden`
pub fn is_displayed(el: &Element) -> bool {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => {
            let display = html.style().get_property_value("display").unwrap_or_default();
            display != "none" && !html.hidden()
        }
        None => !el.has_attribute("hidden"),
    }
}

pub fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn offset_height(selector: &str) -> f64 {
    query(selector)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Обработчик события, который снимается с элемента при drop.
///
/// Виджеты хранят их в `Vec`: уничтожение виджета или повторная привязка
/// после подмены контента отцепляет всё, что он навесил.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    /// То же, что `new`, но с `{ passive: true }` для scroll/resize
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        );
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Вызывает `step(timestamp)` на каждом кадре, пока тот возвращает `true`
pub fn animation_loop<F>(mut step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(window) = window() else { return };

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = frame.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !step(timestamp) {
            // Без замыкания цикл останавливается
            let _ = frame.borrow_mut().take();
            return;
        }
        if let (Some(window), Some(callback)) = (self::window(), frame.borrow().as_ref()) {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    let first = handle.borrow();
    if let Some(callback) = first.as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
