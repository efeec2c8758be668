use anyhow::Result;
use boggle::{
    config::{Config, OutputMode},
    dictionary::Lexicon,
    game::{BoggleGame, DiceSet},
    surface,
};
use rand::{rngs::StdRng, SeedableRng};
use tokio::io::{self, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout belongs to the game surface
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Boggle...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load lexicon
    let lexicon = match Lexicon::load(&config.game.lexicon_path).await {
        Ok(lexicon) => lexicon,
        Err(e) => {
            tracing::warn!("Failed to load lexicon: {:#}. Using empty lexicon.", e);
            tracing::warn!(
                "Put a word list at {} (or set BOGGLE_LEXICON_PATH) to score words",
                config.game.lexicon_path
            );
            Lexicon::empty()
        }
    };

    let rng = match config.game.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut game = BoggleGame::new(DiceSet::standard(), lexicon, rng)
        .with_shuffle_on_reset(config.game.shuffle_on_reset);
    if config.game.shuffle_on_start {
        game.shuffle();
    }
    tracing::info!("Board ready:\n{}", game.board());

    if config.output == OutputMode::Text {
        eprintln!("Enter ROW COL to select a die (click the last die again to submit),");
        eprintln!("'reset' for a new game, 'exit' to quit.");
    }

    let mut stdout = io::stdout();
    surface::run(&mut game, config.output, BufReader::new(io::stdin()), &mut stdout).await?;

    tracing::info!(
        "Game over: {} word(s) found",
        game.found_words().len()
    );

    Ok(())
}
