use serde::{Deserialize, Serialize};

/// Страница, с которой стартует сайт и на которую ведёт страница ошибки
pub const HOME_PAGE: &str = "home";

/// Атрибут ссылок навигации, содержащий имя страницы
pub const PAGE_ATTRIBUTE: &str = "data-page";

/// Каталог фрагментов страниц на сервере
pub const PAGES_PREFIX: &str = "/src/pages";

/// Путь фрагмента страницы: `/src/pages/<name>.html`
pub fn fragment_path(page: &str) -> String {
    format!("{}/{}.html", PAGES_PREFIX, page)
}

/// URL записи истории: `/` для главной, `/<name>` для остальных
pub fn history_url(page: &str) -> String {
    if page == HOME_PAGE {
        "/".to_string()
    } else {
        format!("/{}", page)
    }
}

/// Имя страницы из пути URL: последний сегмент без `.html`, пустой → главная
pub fn page_from_path(path: &str) -> String {
    let last = path.rsplit('/').next().unwrap_or_default();
    if last.is_empty() {
        return HOME_PAGE.to_string();
    }
    last.replacen(".html", "", 1)
}

/// Допустимое имя страницы: непустое, только `[a-z0-9_-]`
pub fn is_valid_page_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

/// Имя страницы из имени файла фрагмента (`office.html` → `office`)
pub fn page_from_fragment_file(file: &str) -> Option<&str> {
    file.strip_suffix(".html").filter(|name| is_valid_page_name(name))
}

/// Состояние, которое кладётся в `history.pushState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub page: String,
}

impl HistoryState {
    pub fn new(page: &str) -> Self {
        Self {
            page: page.to_string(),
        }
    }
}

/// Страница для события popstate: из состояния истории, иначе из пути
pub fn page_for_popstate(state: Option<&HistoryState>, path: &str) -> String {
    match state {
        Some(state) if !state.page.is_empty() => state.page.clone(),
        _ => page_from_path(path),
    }
}

/// Разметка страницы ошибки загрузки (статическая, ведёт на главную)
pub const ERROR_FRAGMENT: &str = r#"
  <div class="page">
    <div class="main-container">
      <h1>Something went wrong</h1>
      <p>The page could not be loaded. Check the browser console for details.</p>
      <a href="/" data-page="home">Back to home</a>
    </div>
  </div>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_path() {
        assert_eq!(fragment_path("office"), "/src/pages/office.html");
        assert_eq!(fragment_path("home"), "/src/pages/home.html");
    }

    #[test]
    fn test_history_url() {
        assert_eq!(history_url("home"), "/");
        assert_eq!(history_url("office"), "/office");
        assert_eq!(history_url("offices"), "/offices");
    }

    #[test]
    fn test_page_from_path() {
        assert_eq!(page_from_path("/"), "home");
        assert_eq!(page_from_path(""), "home");
        assert_eq!(page_from_path("/office"), "office");
        assert_eq!(page_from_path("/site/offices.html"), "offices");
        assert_eq!(page_from_path("/office/"), "home");
        assert_eq!(page_from_path("/a.html.html"), "a.html");
    }

    #[test]
    fn test_page_name_validation() {
        assert!(is_valid_page_name("office"));
        assert!(is_valid_page_name("news_2-b"));
        assert!(!is_valid_page_name(""));
        assert!(!is_valid_page_name("Office"));
        assert!(!is_valid_page_name("../secret"));
        assert!(!is_valid_page_name("a.b"));
    }

    #[test]
    fn test_page_from_fragment_file() {
        assert_eq!(page_from_fragment_file("office.html"), Some("office"));
        assert_eq!(page_from_fragment_file("office"), None);
        assert_eq!(page_from_fragment_file("..%2Fx.html"), None);
        assert_eq!(page_from_fragment_file(".html"), None);
    }

    #[test]
    fn test_page_for_popstate_prefers_state() {
        let state = HistoryState::new("offices");
        assert_eq!(page_for_popstate(Some(&state), "/office"), "offices");
        assert_eq!(page_for_popstate(None, "/office"), "office");
        assert_eq!(page_for_popstate(Some(&HistoryState::new("")), "/about"), "about");
    }

    #[test]
    fn test_history_state_json_shape() {
        let json = serde_json::to_string(&HistoryState::new("office")).unwrap();
        assert_eq!(json, r#"{"page":"office"}"#);
    }

    #[test]
    fn test_error_fragment_links_home() {
        assert!(ERROR_FRAGMENT.contains(r#"data-page="home""#));
    }
}
