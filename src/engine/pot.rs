use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::errors::StateError;

/// Общий банк раздачи. Внутри раздачи только растёт:
/// выплат движок не делает, банк забирает вызывающий код через `take`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Chips {
        self.total
    }

    /// Положить фишки в банк. При переполнении банк не меняется.
    pub fn add(&mut self, amount: Chips) -> Result<(), StateError> {
        self.total = self
            .total
            .checked_add(amount)
            .ok_or(StateError::ChipOverflow)?;
        Ok(())
    }

    /// Опустошить банк и вернуть его содержимое.
    pub fn take(&mut self) -> Chips {
        std::mem::take(&mut self.total)
    }
}
