use contracts::site::pages::fragment_path;
use gloo_net::http::Request;

/// Загружает HTML-фрагмент страницы. Ответ не 2xx считается ошибкой.
pub async fn fetch_fragment(page: &str) -> Result<String, String> {
    let url = fragment_path(page);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", url, e))?;

    if !response.ok() {
        return Err(format!("HTTP {} for {}", response.status(), url));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read {}: {}", url, e))
}
