//! List the organizations of the caller and the projects of the first one.
//!
//! Run:
//! `CONSOLE_ACCESS_TOKEN=<token> CONSOLE_API_KEY=<key> cargo run --example list_projects`
//!
//! Optional env vars:
//! - `CONSOLE_ENV` (`prod` or `stage`, defaults to `prod`)
//! - `RUST_LOG` (for example `console_client=debug` to log every exchange)

use console_client::{ClientConfig, ConsoleClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ConsoleClient::init_with_config(ClientConfig::from_env())?;

    let organizations = client.get_organizations().await?;
    println!("{}", serde_json::to_string_pretty(&organizations.body)?);

    let Some(org_id) = organizations
        .body
        .get(0)
        .and_then(|org| org.get("id"))
        .and_then(serde_json::Value::as_str)
    else {
        eprintln!("No organization found for this access token.");
        return Ok(());
    };

    let projects = client.get_projects_for_org(org_id).await?;
    println!("{}", serde_json::to_string_pretty(&projects.body)?);
    Ok(())
}
