//! Навигация между страницами: токены запросов и исход загрузки.
//!
//! Каждой загрузке выдаётся монотонно растущий токен; ответ применяется,
//! только если его токен последний, иначе он отбрасывается.

use super::pages::{history_url, ERROR_FRAGMENT};

#[derive(Debug, Clone, Default)]
pub struct NavigationTokens {
    latest: u64,
}

impl NavigationTokens {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// Что сделать с контейнером после завершения загрузки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Вставить фрагмент, сменить страницу, при необходимости записать историю
    Apply {
        page: String,
        html: String,
        history_url: Option<String>,
    },
    /// Показать страницу ошибки, `reason` пишется в лог
    ShowError { html: &'static str, reason: String },
    /// Ответ устарел: пришла более новая навигация
    Stale,
}

/// Решает судьбу ответа на загрузку страницы
pub fn resolve_load(
    tokens: &NavigationTokens,
    token: u64,
    page: &str,
    push_history: bool,
    result: Result<String, String>,
) -> LoadOutcome {
    if !tokens.is_current(token) {
        return LoadOutcome::Stale;
    }
    match result {
        Ok(html) => LoadOutcome::Apply {
            page: page.to_string(),
            html,
            history_url: push_history.then(|| history_url(page)),
        },
        Err(reason) => LoadOutcome::ShowError {
            html: ERROR_FRAGMENT,
            reason,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::header::{HeaderState, WhiteBgPolicy};

    #[test]
    fn test_tokens_are_monotonic() {
        let mut tokens = NavigationTokens::default();
        let first = tokens.issue();
        let second = tokens.issue();
        assert!(second > first);
        assert!(!tokens.is_current(first));
        assert!(tokens.is_current(second));
    }

    #[test]
    fn test_navigate_home_to_office() {
        let mut tokens = NavigationTokens::default();
        let token = tokens.issue();
        let outcome = resolve_load(&tokens, token, "office", true, Ok("<main>office</main>".into()));
        assert_eq!(
            outcome,
            LoadOutcome::Apply {
                page: "office".into(),
                html: "<main>office</main>".into(),
                history_url: Some("/office".into()),
            }
        );

        let mut header = HeaderState::new("home");
        header.current_page = "office".into();
        let white = vec!["offices".to_string(), "office".to_string()];
        assert!(header.white_background(WhiteBgPolicy::PageOverridesScroll, &white));
    }

    #[test]
    fn test_popstate_load_skips_history() {
        let mut tokens = NavigationTokens::default();
        let token = tokens.issue();
        match resolve_load(&tokens, token, "home", false, Ok(String::new())) {
            LoadOutcome::Apply { history_url, .. } => assert_eq!(history_url, None),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_failed_fetch_shows_error_fragment() {
        let mut tokens = NavigationTokens::default();
        let token = tokens.issue();
        let outcome = resolve_load(&tokens, token, "office", true, Err("network".into()));
        assert_eq!(
            outcome,
            LoadOutcome::ShowError {
                html: ERROR_FRAGMENT,
                reason: "network".into(),
            }
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut tokens = NavigationTokens::default();
        let slow = tokens.issue();
        let fast = tokens.issue();
        assert_eq!(
            resolve_load(&tokens, slow, "offices", true, Ok("old".into())),
            LoadOutcome::Stale
        );
        assert!(matches!(
            resolve_load(&tokens, fast, "office", true, Ok("new".into())),
            LoadOutcome::Apply { .. }
        ));
    }

    #[test]
    fn test_stale_failure_is_not_reported() {
        let mut tokens = NavigationTokens::default();
        let slow = tokens.issue();
        tokens.issue();
        assert_eq!(
            resolve_load(&tokens, slow, "offices", true, Err("timeout".into())),
            LoadOutcome::Stale
        );
    }
}
