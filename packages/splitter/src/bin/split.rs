//! CLI binary for splitting text via stdin.
//!
//! Usage:
//!   echo '{"pattern": "'"'"'", "subject": "out1 '"'"'str1'"'"' out2"}' \
//!     | cargo run --bin split
//!
//! Input (JSON on stdin):
//!   - pattern: String — the separator text
//!   - subject: String — the text to split
//!   - max_split: Optional<usize> — bound on applied split points (default 0 = unlimited)
//!   - remove_empty_matches: Optional<bool> — drop empty segments (default false)
//!   - use_regex: Optional<bool> — interpret pattern as a regex (default false)
//!
//! Output (JSON on stdout):
//!   - segments: Optional<Vec<String>> — the ordered segments
//!   - error: Optional<String> — error message if splitting failed

use parsekit_splitter::split;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(serde::Deserialize)]
struct SplitRequest {
    pattern: String,
    subject: String,
    #[serde(default)]
    max_split: usize,
    #[serde(default)]
    remove_empty_matches: bool,
    #[serde(default)]
    use_regex: bool,
}

#[derive(serde::Serialize)]
struct SplitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    segments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn error_response(msg: String) -> SplitResponse {
    SplitResponse {
        segments: None,
        error: Some(msg),
    }
}

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        let resp = error_response(format!("Failed to read stdin: {e}"));
        println!("{}", serde_json::to_string(&resp).unwrap_or_default());
        std::process::exit(1);
    }

    let request: SplitRequest = match serde_json::from_str(&input) {
        Ok(r) => r,
        Err(e) => {
            let resp = error_response(format!("Failed to parse request JSON: {e}"));
            println!("{}", serde_json::to_string(&resp).unwrap_or_default());
            std::process::exit(1);
        }
    };

    let resp = match split(
        &request.pattern,
        &request.subject,
        request.max_split,
        request.remove_empty_matches,
        request.use_regex,
    ) {
        Ok(segments) => SplitResponse {
            segments: Some(segments),
            error: None,
        },
        Err(e) => error_response(e.to_string()),
    };

    println!("{}", serde_json::to_string(&resp).unwrap_or_default());
}
