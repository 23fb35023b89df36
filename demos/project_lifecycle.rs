//! Create, edit, read and delete a project.
//!
//! Run:
//! `CONSOLE_ACCESS_TOKEN=<token> CONSOLE_API_KEY=<key> CONSOLE_ORG_ID=<org> cargo run --example project_lifecycle`
//!
//! Optional env vars:
//! - `CONSOLE_ENV` (`prod` or `stage`, defaults to `prod`)
//! - `CONSOLE_PROJECT_NAME` (defaults to `rustdemoproject`)

use console_client::models::{ProjectDetails, WorkspaceDetails};
use console_client::{ClientConfig, ConsoleClient, ConsoleError, ErrorCode};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Ok(org_id) = std::env::var("CONSOLE_ORG_ID") else {
        eprintln!("Set CONSOLE_ORG_ID before running this example.");
        std::process::exit(2);
    };
    let name =
        std::env::var("CONSOLE_PROJECT_NAME").unwrap_or_else(|_| "rustdemoproject".to_owned());

    let client = ConsoleClient::init_with_config(ClientConfig::from_env())?;

    let details = ProjectDetails::new(&name, "Rust demo project")
        .with_description("created by the project_lifecycle demo");
    let created = client.create_firefly_project(&org_id, &details).await?;
    let Some(project_id) = created.body.get("projectId").and_then(serde_json::Value::as_str) else {
        return Err(format!("unexpected create response: {}", created.text).into());
    };
    println!("created project {project_id}");

    client
        .edit_project(&org_id, project_id, &json!({ "title": "Rust demo project (edited)" }))
        .await?;

    let workspace = WorkspaceDetails::new("Demo", "demo workspace");
    match client.create_workspace(&org_id, project_id, &workspace).await {
        Ok(response) => println!("workspace: {}", response.text),
        Err(error) if error.code() == ErrorCode::CreateWorkspace => report(&error),
        Err(error) => return Err(error.into()),
    }

    let project = client.get_project(&org_id, project_id).await?;
    println!("{}", serde_json::to_string_pretty(&project.body)?);

    client.delete_project(&org_id, project_id).await?;
    println!("deleted project {project_id}");
    Ok(())
}

fn report(error: &ConsoleError) {
    eprintln!("{error}");
    if let Ok(details) = serde_json::to_string_pretty(error.sdk_details()) {
        eprintln!("{details}");
    }
}
