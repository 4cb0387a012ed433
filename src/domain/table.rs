use serde::{Deserialize, Serialize};

use crate::domain::blinds::Blinds;
use crate::engine::errors::ConfigError;

/// Индекс места за столом (0..max_players-1). Порядок мест задаёт
/// очерёдность ходов и роли: дилер — последнее место.
pub type SeatIndex = usize;

/// Карт на руках по умолчанию (холдем).
pub const DEFAULT_HAND_SIZE: usize = 2;
/// Мест за столом по умолчанию.
pub const DEFAULT_MAX_PLAYERS: usize = 8;
/// Жёсткий потолок: при 24 и более местах 52 карт может не хватить.
pub const MAX_PLAYERS_CEILING: usize = 24;

/// Конфиг игры: блайнды, сколько карт раздавать, сколько мест.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub blinds: Blinds,
    pub hand_size: usize,
    pub max_players: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            blinds: Blinds::default(),
            hand_size: DEFAULT_HAND_SIZE,
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }
}

impl TableConfig {
    /// Конфиг из JSON. Отсутствующие поля берутся по умолчанию,
    /// отрицательные суммы отвергаются (Chips беззнаковый).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }

    pub fn with_blinds(mut self, blinds: Blinds) -> Self {
        self.blinds = blinds;
        self
    }

    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Структурные проверки для заданного числа игроков.
    pub fn validate(&self, player_count: usize) -> Result<(), ConfigError> {
        if self.max_players < 2 {
            return Err(ConfigError::MaxPlayersTooSmall(self.max_players));
        }
        if self.max_players >= MAX_PLAYERS_CEILING {
            return Err(ConfigError::MaxPlayersTooLarge(self.max_players));
        }
        if player_count < 2 {
            return Err(ConfigError::TooFewPlayers(player_count));
        }
        if player_count > self.max_players {
            return Err(ConfigError::TooManyPlayers {
                max: self.max_players,
            });
        }
        self.cards_needed(player_count)?;
        Ok(())
    }

    /// Сколько карт уходит на руки за одну раздачу.
    pub fn cards_needed(&self, player_count: usize) -> Result<usize, ConfigError> {
        self.hand_size.checked_mul(player_count).ok_or_else(|| {
            ConfigError::InvalidConfig(format!(
                "hand_size {} × {} игроков не помещается в usize",
                self.hand_size, player_count
            ))
        })
    }
}
