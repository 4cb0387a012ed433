use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::table::SeatIndex;

/// Игрок. Имя уникально в пределах игры и служит идентификатором.
///
/// Ссылки на игру у игрока нет: при посадке игра записывает ему `seat`,
/// а общий контекст раунда (банк, наибольшая ставка) передаётся
/// в ставочные операции параметром, см. `engine::betting`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Карманные карты (0 или hand_size).
    pub hole_cards: Vec<Card>,
    /// Текущий стек.
    pub stack: Chips,
    /// Сколько игрок внёс в текущем раунде ставок (анте не считается).
    pub current_bet: Chips,
    pub folded: bool,
    /// Действовал ли игрок после последнего повышения наибольшей ставки.
    pub has_acted: bool,
    /// Место за столом; None — игрок ещё никуда не посажен.
    pub(crate) seat: Option<SeatIndex>,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            hole_cards: Vec::new(),
            stack,
            current_bet: Chips::ZERO,
            folded: false,
            has_acted: false,
            seat: None,
        }
    }

    /// Игрок с заранее выданными картами.
    pub fn with_cards(name: impl Into<String>, hole_cards: Vec<Card>, stack: Chips) -> Self {
        Self {
            hole_cards,
            ..Self::new(name, stack)
        }
    }

    pub fn seat(&self) -> Option<SeatIndex> {
        self.seat
    }

    pub fn is_seated(&self) -> bool {
        self.seat.is_some()
    }

    /// Не сфолдил и сидит за столом.
    pub fn is_active(&self) -> bool {
        !self.folded && self.is_seated()
    }

    /// Активен, но фишек больше нет.
    pub fn is_all_in(&self) -> bool {
        self.is_active() && self.stack.is_zero()
    }

    /// Может ли ещё что-то делать в раунде.
    pub fn can_act(&self) -> bool {
        self.is_active() && !self.stack.is_zero()
    }

    /// Сброс состояния раунда ставок (новая улица).
    pub(crate) fn reset_round(&mut self) {
        self.current_bet = Chips::ZERO;
        self.has_acted = false;
    }
}
