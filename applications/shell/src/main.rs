/// Chorus Shell - headless composition root
use chorus_aggregator::{update_channel, LocalCallback, ProviderAggregator};
use chorus_core::MusicProvider;
use chorus_playback::{PlaybackCallback, PlaybackProxy};
use chorus_shell::{
    config::ShellConfig,
    playback::LoggingPlaybackService,
    providers::MemoryProvider,
    rows::{LibraryRow, RowAction},
    screen::{LibraryScreen, ScreenUpdate},
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chorus-shell")]
#[command(about = "Chorus headless shell and demo loop", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the demo search query
    #[arg(short, long)]
    query: Option<String>,
}

/// Logs playback events as they arrive
struct PlaybackLogger;

impl PlaybackCallback for PlaybackLogger {
    fn on_song_started(&self, buffering: bool, song: &chorus_core::Song) {
        info!(title = %song.title, buffering, "song started");
    }

    fn on_paused(&self) {
        info!("playback paused");
    }

    fn on_queue_changed(&self) {
        info!("queue changed");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chorus_shell=info,chorus_aggregator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = ShellConfig::load(cli.config.as_deref())?;
    if let Some(query) = cli.query {
        config.demo.query = query;
    }

    // Composition root: everything constructed here, nothing global
    let aggregator = Arc::new(ProviderAggregator::new());
    let provider = Arc::new(
        MemoryProvider::new(&config.provider.name)
            .with_song("song:1", "First Light")
            .with_song("song:2", "Night Drive")
            .with_song("song:3", "Light Years Away")
            .with_artist("artist:1", "The Lighthouse Band")
            .with_album("album:1", "Northern Lights")
            .with_playlist("playlist:1", "Light Mix", &["song:1", "song:3"]),
    );
    let provider_id = provider.id();

    let service = Arc::new(LoggingPlaybackService::new());
    let proxy = PlaybackProxy::new(service, aggregator.clone());
    let playback_logger: Arc<dyn PlaybackCallback> = Arc::new(PlaybackLogger);
    let _playback_registration = proxy.scoped_callback(&playback_logger);

    // Updates cross from aggregator threads to this loop over a channel
    let (dispatcher, mut updates) = update_channel();
    let observer: Arc<dyn LocalCallback> = dispatcher;
    let _registration = aggregator.scoped_callback(&observer);

    let mut screen = LibraryScreen::new(aggregator.clone());

    // Search issued before any provider is ready gets deferred
    if let Some(query) = screen.begin_search(config.demo.query.clone()) {
        aggregator.search(&query).await;
    }

    aggregator.register_provider(provider.clone()).await;
    aggregator.connect_provider(&provider_id).await?;

    // Drain updates until quiescent, reissuing deferred searches as
    // providers come up
    loop {
        let events = updates.try_drain();
        if events.is_empty() {
            break;
        }
        for event in &events {
            match screen.apply(event) {
                ScreenUpdate::ReissueSearch(query) => {
                    info!(query, "provider ready, issuing deferred search");
                    aggregator.search(&query).await;
                }
                ScreenUpdate::Redraw => {
                    info!(rows = screen.rows().len(), "redraw");
                }
                ScreenUpdate::None => {}
            }
        }
    }

    let hits = screen.search();
    info!(
        query = screen.search().query().unwrap_or(""),
        songs = hits.songs().len(),
        artists = hits.artists().len(),
        albums = hits.albums().len(),
        playlists = hits.playlists().len(),
        "search settled"
    );

    // Activate the first song hit the way a click on its row would
    if let Some(reference) = hits.songs().first() {
        if let Some(song) = aggregator.retrieve_song(reference) {
            let row = LibraryRow::Song(song);
            match row.activate() {
                RowAction::Play(song) => proxy.play_song(song).await?,
                action => info!(?action, "row activation"),
            }
        }
    }

    proxy.pause().await?;

    for entry in proxy.history() {
        info!(reference = %entry.reference, kind = ?entry.kind, at = %entry.at, "listened");
    }

    Ok(())
}
