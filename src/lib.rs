//! Движок раунда ставок техасского холдема для одного процесса.
//!
//! - `domain` — карты, фишки, колода, блайнды, игроки, конфиг стола;
//! - `engine` — `Game`: обязательные ставки, раздача, очередь хода,
//!   проверка легальности действий, жизненный цикл раздачи;
//! - `infra` — реализации RNG.
//!
//! Определение силы руки и выплаты банка здесь не делаются.

pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Blinds, Card, Chips, Deck, Player, SeatIndex, TableConfig};
pub use engine::{
    ActionError, ConfigError, Game, GameError, HandPhase, PlayerAction, PlayerActionKind,
    StateError,
};
