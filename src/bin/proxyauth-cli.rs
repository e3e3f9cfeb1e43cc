use clap::{Parser, Subcommand};
use serde_json::Value;

use proxyauth::PasswordHash;

#[derive(Parser)]
#[command(name = "proxyauth-cli")]
#[command(about = "Credential helper for the proxyauth service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pre-hashed form of a plaintext password
    Hash {
        password: String,
    },
    /// Hash a password locally and ask the service for a decision
    Check {
        #[arg(short, long, default_value = "http://localhost:80")]
        url: String,

        domain: String,
        username: String,
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { password } => {
            println!("{}", PasswordHash::digest(&password));
        }
        Commands::Check {
            url,
            domain,
            username,
            password,
        } => {
            let hashed = PasswordHash::digest(&password);
            let form = [("username", username.as_str()), ("password", hashed.as_str())];

            let res = reqwest::Client::new()
                .post(format!(
                    "{}/api/2/domains/{}/proxyauth",
                    url.trim_end_matches('/'),
                    domain
                ))
                .form(&form)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("Status: {}", status);
    if !status.is_success() {
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
