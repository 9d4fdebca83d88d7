#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use food_dashboard::utils::validation::Validate;
use food_dashboard::{CliConfig, CommandRunner, Dashboard, HttpFoodApi, OutputFormat};
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn seed(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/api/foods");
        then.status(200).json_body(json!([
            {"id": 1, "name": "Ao molho", "description": "Macarrão ao molho branco",
             "price": "19.90", "image": "food1.png", "available": true},
            {"id": 2, "name": "Veggie", "description": "Salada", "price": 21.9,
             "image": "food2.png", "available": false}
        ]));
    });
}

#[tokio::test]
async fn test_cli_with_config_file_runs_toggle() -> Result<()> {
    let server = MockServer::start();
    seed(&server);
    let toggle = server.mock(|when, then| {
        when.method(PUT).path("/api/foods/2");
        then.status(200).json_body(json!({
            "id": 2, "name": "Veggie", "description": "Salada", "price": "21.9",
            "image": "food2.png", "available": true
        }));
    });

    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        "[api]\nurl = \"{}\"\ntimeout_seconds = 5\n\n[display]\ncurrency_symbol = \"US$\"\n",
        server.url("/api")
    )?;

    let config_path = config_file.path().to_string_lossy().to_string();
    let cli = CliConfig::parse_from(["food-dashboard", "--config", &config_path, "toggle", "2"]);
    let file = cli.load_file()?;
    let resolved = cli.resolve(file.as_ref());
    resolved.settings.validate()?;

    let mut dashboard = Dashboard::new(HttpFoodApi::from_config(&resolved.settings)?);
    let runner = CommandRunner::new(resolved.format, &resolved.settings.currency_symbol);
    let output = runner.run(&mut dashboard, resolved.command).await?;

    toggle.assert();
    assert!(output.starts_with("Toggled dish:"));
    assert!(output.contains("US$ 21.9"));
    assert!(!output.contains("[Unavailable]"));
    Ok(())
}

#[tokio::test]
async fn test_cli_add_with_json_output() -> Result<()> {
    let server = MockServer::start();
    seed(&server);
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/foods")
            .json_body_partial(r#"{"name": "Moqueca", "available": true}"#);
        then.status(201).json_body(json!({
            "id": 3, "name": "Moqueca", "description": "Peixe", "price": "32.00",
            "image": "food3.png", "available": true
        }));
    });

    let api_url = server.url("/api");
    let cli = CliConfig::parse_from([
        "food-dashboard",
        "--api-url",
        &api_url,
        "--json",
        "add",
        "--name",
        "Moqueca",
        "--description",
        "Peixe",
        "--price",
        "32.00",
        "--image",
        "food3.png",
    ]);
    let resolved = cli.resolve(None);
    assert_eq!(resolved.format, OutputFormat::Json);

    let mut dashboard = Dashboard::new(HttpFoodApi::from_config(&resolved.settings)?);
    let runner = CommandRunner::new(resolved.format, &resolved.settings.currency_symbol);
    let output = runner.run(&mut dashboard, resolved.command).await?;

    create.assert();
    assert!(!dashboard.is_modal_open());
    let foods: Vec<serde_json::Value> = serde_json::from_str(&output)?;
    assert_eq!(foods.len(), 3);
    assert_eq!(foods[2]["name"], "Moqueca");
    // 數字價格在輸出時會轉成字串
    assert_eq!(foods[1]["price"], "21.9");
    Ok(())
}

#[test]
fn test_cli_missing_config_file() {
    let cli = CliConfig::parse_from([
        "food-dashboard",
        "--config",
        "/definitely/not/here/food-dashboard.toml",
    ]);
    assert!(cli.load_file().is_err());
}
