//! Общий контекст раунда ставок и ставочные операции игрока.
//!
//! Игрок не хранит ссылку на игру: всё, что ему нужно от стола
//! (наибольшая ставка и банк), приходит параметром `&mut BettingState`.
//! Все денежные действия сходятся в `bet` → `collect_chips`, поэтому
//! правило all-in и учёт банка живут ровно в одном месте.

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::errors::{ActionError, GameError, StateError};
use crate::engine::pot::Pot;

/// Состояние ставок, общее для всех игроков за столом.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Наибольшая ставка текущего раунда среди активных игроков.
    pub largest_bet: Chips,
    pub pot: Pot,
}

impl BettingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сколько игроку нужно доплатить, чтобы остаться в раунде.
    pub fn to_call(&self, player: &Player) -> Chips {
        self.largest_bet.saturating_sub(player.current_bet)
    }

    /// Поднять наибольшую ставку, если чья-то ставка её превысила.
    pub fn raise_to(&mut self, bet: Chips) {
        if bet > self.largest_bet {
            self.largest_bet = bet;
        }
    }
}

impl Player {
    /// Переложить `min(amount, stack)` фишек из стека в банк.
    /// Единственный путь, которым фишки уходят от игрока.
    pub fn collect_chips(
        &mut self,
        amount: Chips,
        betting: &mut BettingState,
    ) -> Result<Chips, GameError> {
        if !self.is_seated() {
            return Err(StateError::PlayerNotSeated(self.name.clone()).into());
        }

        let paid = amount.min(self.stack);
        betting.pot.add(paid)?;
        self.stack -= paid;
        Ok(paid)
    }

    /// Ставка (она же рейз). Если `amount` не меньше стека — all-in
    /// на весь стек, минимальная ставка при этом не проверяется.
    /// Возвращает сколько фишек реально ушло в банк.
    pub fn bet(&mut self, amount: Chips, betting: &mut BettingState) -> Result<Chips, GameError> {
        self.ensure_active()?;

        let wager = if amount >= self.stack {
            self.stack
        } else {
            let min = betting.to_call(self);
            if amount < min {
                return Err(ActionError::BetTooSmall { min }.into());
            }
            amount
        };

        let new_bet = self
            .current_bet
            .checked_add(wager)
            .ok_or(StateError::ChipOverflow)?;
        let paid = self.collect_chips(wager, betting)?;
        self.current_bet = new_bet;
        betting.raise_to(self.current_bet);
        Ok(paid)
    }

    /// Уравнять наибольшую ставку. Если уже уравнено — ничего не делает.
    pub fn call(&mut self, betting: &mut BettingState) -> Result<Chips, GameError> {
        self.ensure_active()?;

        let to_call = betting.to_call(self);
        if to_call.is_zero() {
            return Ok(Chips::ZERO);
        }
        self.bet(to_call, betting)
    }

    /// Check допустим, только если доплачивать нечего.
    pub fn check(&self, betting: &BettingState) -> Result<(), GameError> {
        self.ensure_active()?;

        let to_call = betting.to_call(self);
        if !to_call.is_zero() {
            return Err(ActionError::CannotCheck { to_call }.into());
        }
        Ok(())
    }

    /// Сбросить карты. Возвращает сброшенные карты, чтобы игра
    /// могла вернуть их в колоду в конце раздачи.
    pub fn fold(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_active()?;

        self.folded = true;
        Ok(std::mem::take(&mut self.hole_cards))
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(ActionError::PlayerNotActive(self.name.clone()).into())
        }
    }
}
