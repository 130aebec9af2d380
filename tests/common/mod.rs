//! Shared helpers for integration tests.

use cardbattle::{Card, Game, Rank, Suit};
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Installs a test subscriber once per test binary.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Makes every computer draw return `card`.
pub fn stack_deck(game: &Game, card: Card) {
    game.stack_deck(vec![card]);
}
