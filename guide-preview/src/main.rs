//! guide-preview — render the guest guide for one apartment
//!
//! Loads the same catalogs the site uses and prints every page view model as
//! pretty JSON on stdout:
//!
//! ```text
//! guide-preview --apartment sol-101 --lang en --category eat
//! ```

mod config;
mod logger;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use guide_client::{DoorButton, GuideSession, Notification};
use guide_core::pages::{
    DevicesPage, EssentialsPage, IndexPage, LanguageOption, NavLink, RecommendationsPage,
};
use guide_core::{CategoryFilter, DEFAULT_APARTMENT_ID, Language};
use serde::Serialize;

use config::Config;

#[derive(Parser)]
#[command(name = "guide-preview")]
#[command(about = "Render the apartment guide pages as JSON")]
struct Cli {
    /// Apartment id; unknown ids fall back to the default apartment
    #[arg(long, default_value = DEFAULT_APARTMENT_ID)]
    apartment: String,
    /// Language code (es, en, fr, de)
    #[arg(long, default_value = "es")]
    lang: String,
    /// Recommendation category, or `all`
    #[arg(long, default_value = CategoryFilter::ALL_KEY)]
    category: String,
    /// Root path navigation links are relative to
    #[arg(long, default_value = "")]
    root: String,
    /// Query the door-lock API for the door buttons
    #[arg(long, default_value_t = false)]
    doors: bool,
}

#[derive(Serialize)]
struct Preview {
    apartment: String,
    language: Language,
    navigation: Vec<NavLink>,
    languages: Vec<LanguageOption>,
    home: IndexPage,
    essentials: EssentialsPage,
    devices: DevicesPage,
    recommendations: RecommendationsPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    doors: Option<DoorsPreview>,
}

#[derive(Serialize)]
struct DoorsPreview {
    notice: Option<Notification>,
    buttons: Vec<DoorButton>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    let language = Language::parse_or_default(&cli.lang);
    let client_config = config.client_config();
    let session = GuideSession::from_config(&client_config, &cli.apartment, language)
        .await
        .context("Failed to initialize guide session")?;

    let filter = CategoryFilter::parse(&cli.category);
    let recommendations = session.recommendations(&filter).await;

    let doors = if cli.doors {
        match client_config.build_door_client() {
            Ok(client) => {
                let (panel, notice) = session.door_panel(Arc::new(client), &client_config).await;
                Some(DoorsPreview {
                    notice,
                    buttons: panel.buttons().await,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Door control unavailable");
                None
            }
        }
    } else {
        None
    };

    let preview = Preview {
        apartment: session.apartment().id.clone(),
        language,
        navigation: session.navigation(&cli.root),
        languages: session.language_options(&cli.root),
        home: session.home(&cli.root),
        essentials: session.essentials(),
        devices: session.devices(),
        recommendations,
        doors,
    };

    println!("{}", serde_json::to_string_pretty(&preview)?);
    tracing::info!(apartment = %preview.apartment, lang = %language, "Preview rendered");
    Ok(())
}
