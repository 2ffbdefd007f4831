use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use imgpaste::application::{AppContext, AppPorts};
use imgpaste::domain::ports::ClipboardPort;
use imgpaste::infrastructure::config::ClipboardBackend;
use imgpaste::infrastructure::{
    AppConfig, CliArgs, DesktopNotificationService, ImgurClient, KeyringTokenStorage,
    NativeClipboard, ScriptClipboard, StorageManager,
};
use imgpaste::presentation::{BrowserPinPrompt, ConsoleNotifier, TerminalStatusLine, commands};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn build_ports(config: &AppConfig) -> Result<AppPorts> {
    let imgur = Arc::new(ImgurClient::with_base_url(config.api_base_url.clone())?);
    let status_line = Arc::new(TerminalStatusLine::new());

    let clipboard: Arc<dyn ClipboardPort> = match config.clipboard_backend {
        ClipboardBackend::Script => {
            Arc::new(ScriptClipboard::new().with_scripts_dir(config.scripts_dir.clone()))
        }
        ClipboardBackend::Native => Arc::new(NativeClipboard::new()),
    };

    let notifications = ConsoleNotifier::new(Arc::clone(&status_line))
        .with_desktop(DesktopNotificationService::new(config.desktop_notifications));

    Ok(AppPorts {
        clipboard,
        image_host: imgur.clone(),
        oauth: imgur,
        token_storage: Arc::new(KeyringTokenStorage::new()),
        prompt: Arc::new(BrowserPinPrompt::new(Arc::clone(&status_line))),
        notifications: Arc::new(notifications),
        status_display: status_line,
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    // Before parsing so IMGUR_CLIENT_ID and IMGUR_CLIENT_SECRET can come from .env.
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(&args);

    init_logging(&config)?;

    info!(
        version = imgpaste::VERSION,
        backend = ?config.clipboard_backend,
        prefer_user_upload = config.prefer_user_upload,
        "Starting imgpaste"
    );

    let config_path = storage.config_path(args.config.as_deref());

    let context = AppContext::activate(build_ports(&config)?, config.upload_settings());
    let code = commands::execute(args.command, &context, &config_path).await;
    context.deactivate().await;

    Ok(code)
}
