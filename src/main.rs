mod app;
mod config;
mod demo;
mod event;
mod scheduler;
mod sections;
mod theme;

use anyhow::{anyhow, Context, Result};
use app::LandingApp;
use config::Config;
use demo::conversation::Conversation;
use demo::matcher::ResponseMatcher;
use eframe::egui;
use scheduler::ReplyScheduler;
use std::sync::mpsc;
use theme::Theme;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "searchai_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config_path = config::config_path_from_args(std::env::args());
    let config = Config::load_or_default(&config_path)?;
    info!(
        config = %config_path.display(),
        reply_delay_ms = config.demo.reply_delay_ms,
        pending_policy = ?config.demo.pending_policy,
        "starting searchai demo"
    );

    let (tx, rx) = mpsc::channel();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .thread_name("searchai-timer")
        .build()
        .context("failed to build tokio runtime")?;

    let scheduler = ReplyScheduler::new(runtime.handle().clone(), tx, config.demo.reply_delay());
    let conversation = Conversation::new(
        ResponseMatcher::new(config.demo.fallback_seed),
        config.demo.pending_policy,
    );
    let theme = Theme::default();
    let app = LandingApp::new(rx, scheduler, conversation, theme.clone());
    let _runtime = runtime;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SearchAI")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SearchAI",
        native_options,
        Box::new(move |creation_context| {
            theme.apply_visuals(&creation_context.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("failed to run window: {err}"))?;

    info!("searchai demo exited");
    Ok(())
}
