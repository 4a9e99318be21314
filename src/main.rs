use clap::Parser;
use vet_finder_skill::core::ConfigProvider;
use vet_finder_skill::utils::error::{ErrorSeverity, SkillError};
use vet_finder_skill::utils::monitor::InvocationMonitor;
use vet_finder_skill::utils::{logger, validation::Validate};
use vet_finder_skill::{CliConfig, SkillEngine, TomlConfig};

fn exit_with(e: &SkillError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn load_settings(cli: &CliConfig) -> Result<Box<dyn ConfigProvider>, SkillError> {
    let settings: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            if let Some(name) = toml.skill_name() {
                tracing::info!("Skill: {}", name);
            }
            Box::new(toml)
        }
        None => {
            cli.validate()?;
            Box::new(cli.clone())
        }
    };
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse().resolve_api_key();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting vet-finder CLI");

    let mut monitor = InvocationMonitor::new(cli.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let settings = load_settings(&cli).unwrap_or_else(|e| exit_with(&e));
    tracing::debug!(
        "Geosearch: {} (query '{}', radius {}m)",
        settings.geosearch_base_url(),
        settings.search_query(),
        settings.search_radius_meters()
    );

    let engine = SkillEngine::from_config(settings.as_ref()).unwrap_or_else(|e| exit_with(&e));

    let raw = std::fs::read_to_string(&cli.event)
        .map_err(SkillError::from)
        .unwrap_or_else(|e| exit_with(&e));
    let payload: serde_json::Value = serde_json::from_str(&raw)
        .map_err(SkillError::from)
        .unwrap_or_else(|e| exit_with(&e));

    monitor.log_stats("Before invocation");
    let response = engine.handle_envelope(payload).await;
    monitor.log_stats("After invocation");

    if let Some(text) = response.speech_text() {
        tracing::info!("🗣️ {}", text);
    }
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
