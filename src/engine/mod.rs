//! Движок раунда ставок: рассадка, обязательные ставки, очередь хода.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `start` – собрать блайнды/анте, раздать карты, поставить курсор
//!   - `act` – применить действие игрока, который держит ход
//!   - `round_over` – завершён ли текущий раунд ставок
//!   - `deal_board` / `start_next_round` / `reset_hand` – жизненный цикл раздачи

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;

pub use actions::{PlayerAction, PlayerActionKind};
pub use betting::BettingState;
pub use errors::{ActionError, ConfigError, GameError, StateError};
pub use game_loop::{Game, HandPhase, MAX_BOARD_CARDS};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;

/// RNG интерфейс для колоды.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайный индекс из [0, upper].
    fn index_up_to(&mut self, upper: usize) -> usize;
}
