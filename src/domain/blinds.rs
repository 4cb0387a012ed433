// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Обязательные ставки раздачи.
/// Пример: SB = 25, BB = 50, ante = 10 → total = 85.
///
/// Поля приватные: после создания значение не меняется,
/// между раздачами игра может только подменить его целиком.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Blinds {
    small_blind: Chips,
    big_blind: Chips,
    ante: Chips,
}

impl Blinds {
    pub const NONE: Blinds = Blinds {
        small_blind: Chips::ZERO,
        big_blind: Chips::ZERO,
        ante: Chips::ZERO,
    };

    pub fn new(small_blind: Chips, big_blind: Chips, ante: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            ante,
        }
    }

    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }

    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    pub fn ante(&self) -> Chips {
        self.ante
    }

    /// SB + BB + ante.
    pub fn total(&self) -> Chips {
        self.small_blind + self.big_blind + self.ante
    }
}
