//! Clinic game client binary.
//!
//! Loads content from the data directory, starts a run with headless
//! collaborators and autoplays it.
//!
//! ```bash
//! CLINIC_SEED=42 CLINIC_WEEKS=30 cargo run -p clinic-client
//! ```

use anyhow::{Context, Result};
use clinic_client::{ClientConfig, HeadlessFactory, autoplay, log_views, logging};
use clinic_content::ContentFactory;
use clinic_core::TurnOrchestrator;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(config.session_id.as_deref(), config.log_dir.clone())?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Starting clinic client");
    tracing::info!("Data dir: {}", config.data_dir.display());
    tracing::info!("Seed: {}", seed);

    // 3. Load content
    let content = ContentFactory::new(&config.data_dir);
    let game_config = content.load_config().context("loading game config")?;
    let prompts = content.load_prompts().context("loading prompt pool")?;

    // 4. Build orchestrator
    let mut game = TurnOrchestrator::builder()
        .factory(HeadlessFactory::new())
        .views(log_views())
        .seed(seed)
        .build()?;

    // 5. Play
    game.start(prompts, game_config)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let summary = autoplay(&mut game, config.weeks, &mut rng)?;

    if let Some(player) = &summary.player {
        tracing::info!(
            "Session over after week {}: level {}, {} left",
            game.week(),
            player.level,
            player.currency
        );
    }

    Ok(())
}
