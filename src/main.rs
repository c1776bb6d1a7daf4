use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;
use url::Url;

use roost::api::ApiClient;
use roost::app::{App, AppEvent};
use roost::config::Config;
use roost::sidebar::FeedListState;
use roost::theme::ThemeVariant;
use roost::ui;

/// Get the config directory path (~/.config/roost/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("roost"))
}

#[derive(Parser, Debug)]
#[command(name = "roost", about = "Terminal sidebar client for a feed-reading service")]
struct Args {
    /// Base URL of the subscriptions service (overrides config)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Initial view index: 0 = All, 1 = Starred (overrides config)
    #[arg(long)]
    view: Option<usize>,

    /// Theme variant: dark or light (overrides config)
    #[arg(long)]
    theme: Option<String>,

    /// Hide the sidebar header line
    #[arg(long)]
    hide_title: bool,

    /// Display-only mode: selections are never emitted
    #[arg(long)]
    read_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
    }

    // Restrict the config directory to the owning user (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    let config = Config::load(&config_dir.join("config.toml"))?;

    let base_url = args.base_url.unwrap_or_else(|| config.base_url.clone());
    let base = Url::parse(&base_url)
        .with_context(|| format!("Invalid base URL: {}", base_url))?;
    let api = ApiClient::new(base).context("Failed to build API client")?;

    let theme_name = args.theme.unwrap_or_else(|| config.theme.clone());
    let theme_variant = ThemeVariant::from_str_name(&theme_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown theme: {} (expected dark or light)", theme_name))?;

    let view = args.view.unwrap_or(config.view);
    if view > 1 {
        anyhow::bail!("Unknown view index: {} (expected 0 or 1)", view);
    }

    // Create event channel for background tasks and the selection callback
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    let mut feed_list = FeedListState::new(Some(view), args.hide_title || config.hide_title);
    if !args.read_only {
        let tx = event_tx.clone();
        feed_list.set_on_select(Box::new(move |selection| {
            if tx
                .try_send(AppEvent::SelectionChanged(selection))
                .is_err()
            {
                tracing::warn!("Dropped selection event (channel full or closed)");
            }
        }));
    }

    let mut app = App::new(api, feed_list, theme_variant);
    app.spawn_subscriptions_load(&event_tx);

    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
