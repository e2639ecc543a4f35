use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use contracts::site::pages::page_from_fragment_file;
use std::path::PathBuf;
use std::sync::Arc;

/// Каталог, из которого отдаются фрагменты страниц
#[derive(Clone)]
pub struct PagesState {
    pages_dir: Arc<PathBuf>,
}

impl PagesState {
    pub fn new(pages_dir: PathBuf) -> Self {
        Self {
            pages_dir: Arc::new(pages_dir),
        }
    }

    /// Путь к файлу фрагмента; имя проверяется до обращения к диску
    pub fn fragment_file(&self, file: &str) -> Result<(String, PathBuf), PageError> {
        let page = page_from_fragment_file(file)
            .ok_or_else(|| PageError::InvalidName(file.to_string()))?;
        Ok((page.to_string(), self.pages_dir.join(format!("{}.html", page))))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid page name: {0}")]
    InvalidName(String),
    #[error("page not found: {0}")]
    NotFound(String),
    #[error("failed to read page {page}: {source}")]
    Io {
        page: String,
        #[source]
        source: std::io::Error,
    },
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::InvalidName(_) => StatusCode::BAD_REQUEST,
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            PageError::Io { .. } => tracing::error!("{}", self),
            _ => tracing::warn!("{}", self),
        }
        (self.status(), self.to_string()).into_response()
    }
}

/// GET /src/pages/:file
pub async fn get_page(
    State(state): State<PagesState>,
    Path(file): Path<String>,
) -> Result<Html<String>, PageError> {
    let (page, path) = state.fragment_file(&file)?;
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => {
            tracing::debug!("Serving page fragment {} ({} bytes)", page, html.len());
            Ok(Html(html))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PageError::NotFound(page)),
        Err(source) => Err(PageError::Io { page, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("site-pages-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_fragment_file_resolves_inside_pages_dir() {
        let state = PagesState::new(PathBuf::from("src/pages"));
        let (page, path) = state.fragment_file("office.html").unwrap();
        assert_eq!(page, "office");
        assert_eq!(path, PathBuf::from("src/pages").join("office.html"));
    }

    #[test]
    fn test_traversal_rejected() {
        let state = PagesState::new(PathBuf::from("src/pages"));
        let err = state.fragment_file("..%2F..%2Fconfig.html").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(state.fragment_file("office").is_err());
    }

    #[tokio::test]
    async fn test_get_page_serves_fragment() {
        let dir = pages_dir("serve");
        std::fs::write(dir.join("home.html"), "<div data-page=\"home\"></div>").unwrap();

        let Html(body) = get_page(State(PagesState::new(dir.clone())), Path("home.html".to_string()))
            .await
            .unwrap();
        assert!(body.contains("data-page"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let dir = pages_dir("missing");
        let err = get_page(State(PagesState::new(dir.clone())), Path("nope.html".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
