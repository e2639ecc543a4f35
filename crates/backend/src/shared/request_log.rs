//! Одна строка в консоль на каждый запрос: время, длительность, размер тела,
//! статус, метод, путь.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use super::format::format_number;

/// Голубой для успешных ответов, коричневый для остальных
fn color_code(status: StatusCode) -> &'static str {
    if status.is_success() {
        "36"
    } else {
        "33"
    }
}

pub fn format_line(
    status: StatusCode,
    millis: u128,
    size: Option<usize>,
    method: &Method,
    path: &str,
) -> String {
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code(status),
        Local::now().format("%H:%M:%S"),
        millis,
        size,
        status.as_u16(),
        method,
        path
    )
}

pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Тело читается целиком, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let elapsed = start.elapsed().as_millis();
            println!(
                "{}",
                format_line(parts.status, elapsed, Some(bytes.len()), &method, uri.path())
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Failed to read response body for {}: {}", uri.path(), e);
            let elapsed = start.elapsed().as_millis();
            println!("{}", format_line(parts.status, elapsed, None, &method, uri.path()));
            Response::from_parts(parts, Body::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_contains_size_and_status() {
        let line = format_line(StatusCode::OK, 12, Some(15320), &Method::GET, "/src/pages/home.html");
        assert!(line.contains("15.320"));
        assert!(line.contains("200"));
        assert!(line.contains("/src/pages/home.html"));
        assert!(line.starts_with("\x1b[36m"));
    }

    #[test]
    fn test_failed_body_marked_as_error() {
        let line = format_line(StatusCode::NOT_FOUND, 1, None, &Method::GET, "/x");
        assert!(line.contains("error"));
        assert!(line.starts_with("\x1b[33m"));
    }
}
