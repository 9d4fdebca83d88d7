use clap::Parser;
use food_dashboard::core::ConfigProvider;
use food_dashboard::utils::error::{DashboardError, ErrorSeverity};
use food_dashboard::utils::{logger, validation::Validate};
use food_dashboard::{CliConfig, CommandRunner, Dashboard, HttpFoodApi};

fn exit_with(e: &DashboardError) -> ! {
    // handler 已經記錄過錯誤，這裡只留除錯細節
    tracing::debug!(
        "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            exit_with(&e);
        }
    };
    let resolved = cli.resolve(file.as_ref());

    // 初始化日誌
    if resolved.log_json {
        logger::init_json_logger(resolved.verbose);
    } else {
        logger::init_cli_logger(resolved.verbose);
    }

    tracing::debug!("Resolved settings: {:?}", resolved.settings);

    // 驗證配置
    if let Err(e) = resolved.settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let api = match HttpFoodApi::from_config(&resolved.settings) {
        Ok(api) => api,
        Err(e) => exit_with(&e),
    };
    tracing::info!("Using food API at {}", api.base_url());

    let mut dashboard = Dashboard::new(api);
    let runner = CommandRunner::new(resolved.format, resolved.settings.currency_symbol());

    match runner.run(&mut dashboard, resolved.command).await {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}
