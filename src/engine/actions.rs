use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerActionKind {
    /// Поставить `amount` фишек (не меньше, чем нужно для уравнивания).
    Bet,
    /// То же самое, что Bet: отдельного примитива рейза нет.
    Raise,
    Call,
    Check,
    Fold,
}

/// Действие, которое принимает `Game::act`. Сумма имеет смысл только
/// для Bet/Raise; отсутствующая сумма считается нулём.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub kind: PlayerActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Chips>,
}

impl PlayerAction {
    pub fn new(kind: PlayerActionKind, amount: Option<Chips>) -> Self {
        Self { kind, amount }
    }

    pub fn bet(amount: u64) -> Self {
        Self::new(PlayerActionKind::Bet, Some(Chips(amount)))
    }

    pub fn raise(amount: u64) -> Self {
        Self::new(PlayerActionKind::Raise, Some(Chips(amount)))
    }

    pub fn call() -> Self {
        Self::new(PlayerActionKind::Call, None)
    }

    pub fn check() -> Self {
        Self::new(PlayerActionKind::Check, None)
    }

    pub fn fold() -> Self {
        Self::new(PlayerActionKind::Fold, None)
    }

    pub fn amount_or_zero(&self) -> Chips {
        self.amount.unwrap_or(Chips::ZERO)
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlayerActionKind::Bet => write!(f, "bet {}", self.amount_or_zero()),
            PlayerActionKind::Raise => write!(f, "raise {}", self.amount_or_zero()),
            PlayerActionKind::Call => write!(f, "call"),
            PlayerActionKind::Check => write!(f, "check"),
            PlayerActionKind::Fold => write!(f, "fold"),
        }
    }
}
