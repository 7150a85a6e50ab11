//! Posts user records from a JSON file to a running backend.
//!
//! The file holds either one `{"username", "email"}` object or an array of them.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{bail, Context};
use clap::Parser;
use reqwest::Client;
use serde_json::Value as JsonValue;
use users_backend::dto::user_dto::CreateUserPayload;

#[derive(Debug, Parser)]
#[command(name = "seed-users", about = "Add users to the backend from a JSON file")]
struct Args {
    /// Create-user endpoint of the backend.
    #[arg(long, default_value = "http://localhost:3000/api/add-users")]
    api_url: String,

    /// JSON file with one user object or an array of them.
    #[arg(default_value = "test_data.json")]
    file: PathBuf,
}

fn parse_records(raw: &str) -> anyhow::Result<Vec<CreateUserPayload>> {
    let value: JsonValue = serde_json::from_str(raw).context("test data is not valid JSON")?;
    let records = match value {
        JsonValue::Array(items) => items,
        JsonValue::Object(_) => vec![value],
        other => bail!("expected a user object or an array of them, got {}", other),
    };
    records
        .into_iter()
        .map(|record| serde_json::from_value(record).context("invalid user record"))
        .collect()
}

async fn add_user(client: &Client, url: &str, user: &CreateUserPayload) -> anyhow::Result<bool> {
    let response = client
        .post(url)
        .json(user)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    let status = response.status();
    if status.is_success() {
        println!("User added successfully!");
        return Ok(true);
    }
    let body = response.text().await.unwrap_or_default();
    println!("Error adding user: {} - {}", status.as_u16(), body);
    Ok(false)
}

async fn run(args: Args) -> anyhow::Result<bool> {
    let raw = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("could not read {}", args.file.display()))?;
    let records = parse_records(&raw)?;

    let client = Client::new();
    let mut all_ok = true;
    for user in &records {
        all_ok &= add_user(&client, &args.api_url, user).await?;
    }
    Ok(all_ok)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    match run(Args::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
