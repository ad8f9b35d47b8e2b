use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use gallery_social::cli::{Cli, Command};
use gallery_social::config::Config;
use gallery_social::logging;
use gallery_social::notify::TracingNotifier;
use gallery_social::photo::Photo;
use gallery_social::platform::{
    ArboardClipboard, HttpImageFetcher, PrintOpener, StaticLocation, UnsupportedNativeShare,
    CLIPBOARD_OUTLIVES_PROCESS,
};
use gallery_social::reaction::{
    ReactionCache, ReactionCoordinator, ReactionSymbol, TransientVisualState,
};
use gallery_social::remote::HttpRemoteClient;
use gallery_social::share::{ShareComposer, ShareEnvironment};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    match cli.command {
        Command::Targets => {
            for target in config.share_targets().iter() {
                println!("{:<12} {}", target.id, target.label);
            }
        }
        Command::Reactions { photo_id } => {
            let coordinator = reaction_coordinator(&config)?;
            let counts = coordinator.counts(&photo_id).await?;
            for symbol in ReactionSymbol::ALL {
                println!("{symbol} {}", counts.count(symbol));
            }
        }
        Command::React { photo_id, symbol } => {
            let symbol: ReactionSymbol = symbol.parse()?;
            let coordinator = reaction_coordinator(&config)?;
            if let Err(e) = coordinator.counts(&photo_id).await {
                tracing::warn!(error = %e, "Could not load current counts");
            }
            match coordinator.submit(&photo_id, symbol).await? {
                Some(count) => println!("{symbol} {count}"),
                None => println!("{symbol}"),
            }
        }
        Command::Link { photo_id } => {
            let url = composer(&config, &photo_id)?.copy_page_link().await?;
            warn_transient_clipboard();
            println!("{url}");
        }
        Command::Social {
            target,
            photo_id,
            title,
        } => {
            let targets = config.share_targets();
            let target = targets
                .get(&target)
                .with_context(|| format!("Unknown share target '{target}'"))?;
            let photo = cli_photo(&config, photo_id, title, 0, 0);
            composer(&config, &photo.id)?.compose_social_link(target, &photo)?;
        }
        Command::Embed {
            photo_id,
            width,
            height,
        } => {
            let photo = cli_photo(&config, photo_id, None, width, height);
            let snippet = composer(&config, &photo.id)?
                .compose_embed_snippet(&photo, &config.site.url)
                .await?;
            warn_transient_clipboard();
            println!("{snippet}");
        }
    }

    Ok(())
}

fn reaction_coordinator(config: &Config) -> Result<ReactionCoordinator> {
    let remote = HttpRemoteClient::new(&config.api).context("Failed to build API client")?;
    Ok(ReactionCoordinator::new(
        Arc::new(remote),
        ReactionCache::new(),
        Arc::new(TracingNotifier),
        TransientVisualState::new(Duration::from_millis(config.reaction.animation_linger_ms)),
        config.messages.reaction_success.clone(),
    ))
}

fn composer(config: &Config, photo_id: &str) -> Result<ShareComposer> {
    let timeout = Duration::from_secs(u64::from(config.api.timeout_seconds));
    let fetcher = HttpImageFetcher::new(timeout).context("Failed to build image client")?;
    let env = ShareEnvironment {
        native: Arc::new(UnsupportedNativeShare),
        fetcher: Arc::new(fetcher),
        clipboard: Arc::new(ArboardClipboard::new()),
        opener: Arc::new(PrintOpener),
        location: Arc::new(StaticLocation::photo_page(&config.site.url, photo_id)),
        notifier: Arc::new(TracingNotifier),
    };
    Ok(ShareComposer::from_config(env, config))
}

/// The process exits right after copying; say so where that loses the copy.
fn warn_transient_clipboard() {
    if !CLIPBOARD_OUTLIVES_PROCESS {
        tracing::warn!(
            "Clipboard contents are kept only if a clipboard manager is running; \
             the text is also printed below"
        );
    }
}

fn cli_photo(config: &Config, id: String, title: Option<String>, width: u32, height: u32) -> Photo {
    let original_url = format!("{}/{}", config.site.url.trim_end_matches('/'), id);
    Photo {
        id,
        title,
        width,
        height,
        original_url,
        preview_url: None,
    }
}
