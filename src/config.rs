//! Match configuration.

/// Fewest players a match can be started with.
pub const MIN_PLAYERS: usize = 2;
/// Most players a match can be started with.
pub const MAX_PLAYERS: usize = 4;
/// Cards per hand and per open pile in standard Schwimmen.
pub const DEFAULT_HAND_SIZE: usize = 3;

/// Settings fixed for the lifetime of one match.
///
/// ```
/// use schwimmen::config::GameConfig;
///
/// let cfg = GameConfig::default().with_seed(7);
/// assert_eq!(cfg.hand_size, 3);
/// assert_eq!(cfg.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// Slots per hand; the open pile has the same number of slots.
    pub hand_size: usize,
    /// Seed for the default shuffler. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set a deterministic shuffle seed for reproducible deals.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { hand_size: DEFAULT_HAND_SIZE, seed: None }
    }
}
