use clap::Args;
use colored::Colorize;
use reqwest::Request;

use graphme_core::GraphClient;

use super::Locations;

#[derive(Args)]
pub struct RequestArgs {
    /// Show raw JSON output
    #[arg(long)]
    json: bool,
}

pub fn execute(args: RequestArgs, locations: &Locations<'_>) -> anyhow::Result<()> {
    let (path, token) = super::load_token(locations)?;
    let client = GraphClient::new(token);
    let request = client.prepare_me_request()?;

    tracing::info!(
        source = %path.display(),
        token_chars = client.access_token().char_count(),
        "Request prepared, not sent"
    );

    if args.json {
        println!("{}", render_json(&request)?);
        return Ok(());
    }

    println!("{} {}", request.method().as_str().green().bold(), request.url());
    println!("{}", "Prepared only; the request was not sent.".dimmed());

    Ok(())
}

fn render_json(request: &Request) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "method": request.method().as_str(),
        "url": request.url().as_str(),
        "sent": false,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphme_core::{AccessToken, GRAPH_ME_URL};
    use tempfile::TempDir;

    #[test]
    fn test_json_output_omits_token() {
        let client = GraphClient::new(AccessToken::new("abc123secret\n"));
        let request = client.prepare_me_request().unwrap();

        let output = render_json(&request).unwrap();
        assert!(!output.contains("abc123secret"));

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["method"], "GET");
        assert_eq!(parsed["url"], GRAPH_ME_URL);
        assert_eq!(parsed["sent"], false);
    }

    #[test]
    fn test_execute_prepares_without_network() {
        let dir = TempDir::new().unwrap();
        let token_file = dir.path().join("token");
        std::fs::write(&token_file, "abc123\n").unwrap();
        let config_file = dir.path().join("config.toml");

        let locations = Locations {
            token_file: Some(token_file.as_path()),
            config_file: &config_file,
        };
        execute(RequestArgs { json: true }, &locations).unwrap();
    }

    #[test]
    fn test_execute_fails_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let token_file = dir.path().join("missing");
        let config_file = dir.path().join("config.toml");

        let locations = Locations {
            token_file: Some(token_file.as_path()),
            config_file: &config_file,
        };
        assert!(execute(RequestArgs { json: false }, &locations).is_err());
    }
}
