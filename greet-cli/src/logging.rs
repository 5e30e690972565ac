use std::io::IsTerminal;
use std::time::Instant;

use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use chrono::Local;
use colored::{Color, Colorize};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides `verbose`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn new() -> Self {
        Self {
            enabled: std::io::stderr().is_terminal(),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_owned()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_owned()
        }
    }

    fn status(&self, status: StatusCode) -> String {
        let code = status.as_u16();
        let color = if (200..300).contains(&code) {
            Color::BrightGreen
        } else if (300..400).contains(&code) {
            Color::BrightYellow
        } else {
            Color::BrightRed
        };
        self.paint(&code.to_string(), color)
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S,%3f").to_string()
}

fn log_body(palette: &Palette, label: &str, bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    let (title, text) = match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(json) => (
            format!("{label}:"),
            serde_json::to_string_pretty(&json).unwrap_or_default(),
        ),
        Err(_) => (
            format!("{label} (raw):"),
            String::from_utf8_lossy(bytes).into_owned(),
        ),
    };
    eprintln!(
        "{} - DEBUG - {}\n{}",
        timestamp(),
        palette.dim(&title),
        palette.paint(&text, Color::BrightBlack)
    );
}

/// Per-request access log. Level 1 logs one summary line per request,
/// level 2 also logs request and response bodies.
#[derive(Clone)]
pub struct LoggingMiddleware {
    pub verbose: u8,
}

impl LoggingMiddleware {
    #[must_use]
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    pub async fn handle(&self, request: Request, next: Next) -> Response {
        if self.verbose == 0 {
            return next.run(request).await;
        }

        let palette = Palette::new();
        let method = request.method().clone();
        let path = request.uri().path().to_owned();
        let start = Instant::now();

        let response = if self.verbose >= 2 {
            let (parts, body) = request.into_parts();
            let bytes = axum::body::to_bytes(body, usize::MAX)
                .await
                .unwrap_or_default();
            log_body(&palette, "Request body", &bytes);
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        } else {
            next.run(request).await
        };

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        let status = response.status();

        // eprintln! rather than tracing: tracing escapes the ANSI codes.
        eprintln!(
            "{} - INFO - {} {} -> {} in {}",
            timestamp(),
            palette.paint(method.as_str(), Color::BrightCyan),
            palette.paint(&path, Color::BrightBlue),
            palette.status(status),
            palette.paint(&format!("{duration_ms:.1}ms"), Color::BrightMagenta),
        );

        if self.verbose < 2 {
            return response;
        }

        let (parts, body) = response.into_parts();
        match axum::body::to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                log_body(&palette, "Response body", &bytes);
                Response::from_parts(parts, Body::from(bytes))
            }
            Err(_) => Response::from_parts(parts, Body::empty()),
        }
    }
}
