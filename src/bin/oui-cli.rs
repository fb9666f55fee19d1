use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "oui-cli")]
#[command(about = "Query client for the OUI registry service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Admin API key (only needed for `status`)
    #[arg(short, long, default_value = "")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all registrations
    List,
    /// Fetch one registration by prefix
    Get { oui: String },
    /// Resolve a full hardware address to its vendor name
    Resolve { address: String },
    /// Check service status (admin)
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let res = client.get(format!("{}/oui", cli.url)).send().await?;
            print_json_response(res).await?;
        }
        Commands::Get { oui } => {
            let res = client.get(format!("{}/oui/{}", cli.url, oui)).send().await?;
            print_json_response(res).await?;
        }
        Commands::Resolve { address } => {
            let res = client.get(format!("{}/mac/{}", cli.url, address)).send().await?;
            let status = res.status();
            let body = res.text().await?;
            if status.is_success() {
                println!("{}", body);
            } else {
                eprintln!("Error: service returned status {}", status);
                eprintln!("Response: {}", body);
            }
        }
        Commands::Status => {
            let mut headers = HeaderMap::new();
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", cli.key))?,
            );
            let res = client
                .get(format!("{}/admin/status", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_json_response(res).await?;
        }
    }

    Ok(())
}

async fn print_json_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
