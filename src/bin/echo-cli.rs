use clap::{Parser, Subcommand};
use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde_json::json;

#[derive(Parser)]
#[command(name = "echo-cli")]
#[command(about = "Send request bodies to a running body-echo server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post raw text to /request-body-string-v{version}
    String {
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
        version: u8,
        body: String,
    },
    /// Post a person record to /request-body-json-v{version}
    Json {
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
        version: u8,
        #[arg(long, default_value = "hello")]
        username: String,
        #[arg(long, default_value_t = 20)]
        age: i32,
    },
    /// Hit /log-test
    LogTest,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::String { version, body } => {
            client
                .post(format!("{}/request-body-string-v{}", cli.url, version))
                .header(CONTENT_TYPE, "text/plain")
                .body(body)
                .send()
                .await?
        }
        Commands::Json {
            version,
            username,
            age,
        } => {
            client
                .post(format!("{}/request-body-json-v{}", cli.url, version))
                .json(&json!({ "username": username, "age": age }))
                .send()
                .await?
        }
        Commands::LogTest => client.get(format!("{}/log-test", cli.url)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let text = res.text().await?;

    println!("{}", render(status, &request_id, &text)?);
    Ok(())
}

/// Format a reply for the terminal. Non-2xx statuses become errors so the
/// process exits non-zero.
fn render(status: StatusCode, request_id: &str, text: &str) -> Result<String, String> {
    if !status.is_success() {
        return Err(format!(
            "server returned status {} (request {}): {}",
            status, request_id, text
        ));
    }

    let body = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) if json.is_object() => {
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| text.to_string())
        }
        _ if text.is_empty() => "<empty body>".to_string(),
        _ => text.to_string(),
    };
    Ok(format!("{} (request {})\n{}", status, request_id, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_is_an_error() {
        let err = render(StatusCode::BAD_REQUEST, "id-1", "Failed to decode JSON body").unwrap_err();
        assert!(err.contains("400 Bad Request"));
        assert!(err.contains("id-1"));
        assert!(err.contains("Failed to decode JSON body"));
    }

    #[test]
    fn test_success_bodies() {
        let out = render(StatusCode::OK, "id-2", "OK").unwrap();
        assert_eq!(out, "200 OK (request id-2)\nOK");

        let out = render(StatusCode::OK, "id-3", "").unwrap();
        assert!(out.ends_with("<empty body>"));

        let out = render(StatusCode::OK, "id-4", r#"{"username":"hello","age":20}"#).unwrap();
        assert!(out.contains("\"username\": \"hello\""));
    }
}
