use chrono::Utc;
use clap::Parser;
use event_portal::utils::{logger, validation::Validate};
use event_portal::{
    CliConfig, Event, EventInventory, HttpGateway, ListFormat, PortalCommand, PortalConfig,
    PortalEngine, Signup,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting event-portal CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入活動配置
    let mut config = if std::path::Path::new(&cli.events_file).exists() {
        match PortalConfig::from_file(&cli.events_file) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load events file '{}': {}", cli.events_file, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    } else {
        tracing::warn!(
            "No events file at '{}', using built-in sample events",
            cli.events_file
        );
        PortalConfig::sample()
    };

    // 應用命令列覆蓋設定
    if let Some(endpoint) = cli.endpoint.clone() {
        config.set_endpoint(endpoint);
        tracing::info!("🔧 Registration endpoint overridden");
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立庫存、報名閘道與引擎
    let result = async {
        let inventory = EventInventory::seed(config.seed_events()?)?;
        tracing::info!(
            "📋 {} v{} - {} events loaded",
            config.portal.name,
            config.portal.version,
            inventory.len()
        );

        let gateway = HttpGateway::new(config.clone())?;
        let mut engine = PortalEngine::new_with_monitoring(inventory, gateway, cli.monitor);

        let now = Utc::now();
        match &cli.command {
            PortalCommand::List { format } => {
                let rows = engine.list(now);
                display_events(&rows, *format)?;
            }
            PortalCommand::Register { event } => {
                let updated = engine.register(event, now)?;
                println!(
                    "✅ Registered for {}! ({} seats left)",
                    updated.name, updated.seats
                );
            }
            PortalCommand::Signup {
                username,
                email,
                event,
            } => {
                println!("Submitting...");
                let signup = Signup::new(username.clone(), email.clone(), event.clone());
                let receipt = engine.signup(&signup).await?;
                println!("✅ Registration successful!");
                if let Some(id) = receipt.id {
                    tracing::info!("Registration service confirmed with id {}", id);
                }
            }
        }
        Ok::<(), event_portal::PortalError>(())
    }
    .await;

    if let Err(e) = result {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Portal command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            event_portal::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
            event_portal::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
            event_portal::utils::error::ErrorSeverity::High => 1, // 處理錯誤
            event_portal::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn display_events(events: &[Event], format: ListFormat) -> event_portal::Result<()> {
    match format {
        ListFormat::Text => {
            if events.is_empty() {
                println!("No events are currently open for registration.");
                return Ok(());
            }

            println!("📋 Upcoming events:");
            for event in events {
                println!(
                    "  {} - {} ({} seats left)",
                    event.name,
                    event.date.format("%Y-%m-%d"),
                    event.seats
                );
            }
        }
        ListFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["name", "date", "seats", "category"])?;
            for event in events {
                writer.write_record([
                    event.name.as_str(),
                    &event.date.format("%Y-%m-%d").to_string(),
                    &event.seats.to_string(),
                    event.category.as_str(),
                ])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
