use crate::app::commands::{Command, OutputFormat};
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::{FoodForm, FoodPatch};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "food-dashboard")]
#[command(about = "Manage a food catalog through its REST API")]
pub struct CliConfig {
    /// Base URL of the food API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Currency symbol shown before prices
    #[arg(long)]
    pub currency: Option<String>,

    /// Print the food list as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// List all dishes
    List,
    /// Add a new dish (always created as available)
    Add(AddArgs),
    /// Edit an existing dish; omitted fields keep their current value
    Edit(EditArgs),
    /// Delete a dish
    Delete { id: u64 },
    /// Toggle whether a dish is available
    Toggle { id: u64 },
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub price: String,
    #[arg(long)]
    pub image: String,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::List => Command::List,
            CliCommand::Add(args) => Command::Add(FoodForm {
                name: args.name,
                description: args.description,
                price: args.price,
                image: args.image,
            }),
            CliCommand::Edit(args) => Command::Edit {
                id: args.id,
                patch: FoodPatch {
                    name: args.name,
                    description: args.description,
                    price: args.price,
                    image: args.image,
                    available: None,
                },
            },
            CliCommand::Delete { id } => Command::Delete { id },
            CliCommand::Toggle { id } => Command::Toggle { id },
        }
    }
}

/// 命令列與設定檔合併後的結果
#[derive(Debug, Clone)]
pub struct ResolvedCli {
    pub settings: Settings,
    pub command: Command,
    pub format: OutputFormat,
    pub verbose: bool,
    pub log_json: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// 設定檔的值先套用，命令列參數再覆蓋
    pub fn resolve(self, file: Option<&TomlConfig>) -> ResolvedCli {
        let mut settings = Settings::default();
        if let Some(file) = file {
            file.apply_to(&mut settings);
        }

        if let Some(url) = self.api_url {
            settings.api_url = url;
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = Some(timeout);
        }
        if let Some(currency) = self.currency {
            settings.currency_symbol = currency;
        }

        let json = self.json || file.is_some_and(TomlConfig::json_output);
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        ResolvedCli {
            settings,
            command: self.command.map(Command::from).unwrap_or(Command::List),
            format,
            verbose: self.verbose || file.is_some_and(TomlConfig::verbose),
            log_json: self.log_json || file.is_some_and(TomlConfig::json_logs),
        }
    }
}
