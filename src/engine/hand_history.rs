use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerAction;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { hand_number: u64 },

    /// Обязательные ставки собраны.
    ForcedBetsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
        ante: Vec<(SeatIndex, Chips)>,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: PlayerAction,
        paid: Chips,
        stack_after: Chips,
        pot_after: Chips,
    },

    /// Раунд ставок завершён.
    RoundOver { pot: Chips },

    /// Открыты общие карты на борде.
    BoardDealt { cards: Vec<Card> },

    /// Начат новый раунд ставок в той же раздаче.
    RoundStarted { first_to_act: Option<SeatIndex> },

    /// Раздача сброшена, банк отдан вызывающему коду.
    HandReset { pot_returned: Chips },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
