// Entry point for the gitfolio generator.
// Loads configuration, fetches GitHub data, and writes the portfolio page.

mod config;
mod error;
mod github;
mod render;

use std::env;
use std::fs;
use std::process::ExitCode;

use log::{info, warn};

use config::PortfolioConfig;
use error::Result;
use github::GitHubClient;

const DEFAULT_CONFIG_PATH: &str = "portfolio.json";
const DEFAULT_OUTPUT_PATH: &str = "index.html";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map_or(DEFAULT_CONFIG_PATH, String::as_str);
    let output_path = args.get(2).map_or(DEFAULT_OUTPUT_PATH, String::as_str);

    match run(config_path, output_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config_path: &str, output_path: &str) -> Result<()> {
    let config = PortfolioConfig::from_file(config_path)?;
    info!("generating portfolio for {}", config.username);

    let client = GitHubClient::new(config)?;

    // A missing profile only degrades the hero; the sections carry their own
    // error states.
    let user = match client.get_user_data().await {
        Ok(user) => Some(user),
        Err(err) => {
            warn!("failed to fetch user profile: {err}");
            None
        }
    };

    // Sequential on purpose: the second section's repository list is then a
    // cache hit.
    let projects = render::sections::load_projects_section(&client).await;
    let open_source = render::sections::load_open_source_section(&client).await;

    let html = render::page::render_page(user.as_ref(), &projects, &open_source, client.config());
    fs::write(output_path, html)?;
    info!("wrote {output_path}");

    Ok(())
}
