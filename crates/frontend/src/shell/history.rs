use contracts::site::pages::{page_for_popstate, HistoryState};
use wasm_bindgen::JsCast;
use web_sys::{Event, History, PopStateEvent};

use crate::shared::dom;

fn history() -> Result<History, String> {
    dom::window()
        .ok_or_else(|| "no window".to_string())?
        .history()
        .map_err(|e| format!("{e:?}"))
}

fn state_value(page: &str) -> Result<wasm_bindgen::JsValue, String> {
    serde_wasm_bindgen::to_value(&HistoryState::new(page)).map_err(|e| e.to_string())
}

/// Новая запись истории для страницы `page` с адресом `url`
pub fn push_page(page: &str, url: &str) -> Result<(), String> {
    history()?
        .push_state_with_url(&state_value(page)?, "", Some(url))
        .map_err(|e| format!("{e:?}"))
}

/// Подменяет состояние текущей записи, адрес не меняется
pub fn replace_page(page: &str) -> Result<(), String> {
    history()?
        .replace_state(&state_value(page)?, "")
        .map_err(|e| format!("{e:?}"))
}

/// Страница, на которую ведёт событие popstate
pub fn page_from_popstate(event: &Event) -> String {
    let state = event
        .dyn_ref::<PopStateEvent>()
        .map(|e| e.state())
        .filter(|value| !value.is_null() && !value.is_undefined())
        .and_then(|value| serde_wasm_bindgen::from_value::<HistoryState>(value).ok());
    page_for_popstate(state.as_ref(), &dom::location_path())
}
