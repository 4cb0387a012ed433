use crate::domain::Chips;

use thiserror::Error;

/// Нарушены структурные инварианты при создании игры.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Нужно минимум 2 игрока, передано {0}")]
    TooFewPlayers(usize),

    #[error("Слишком много игроков. Максимум {max}")]
    TooManyPlayers { max: usize },

    #[error("max_players должен быть не меньше 2, передано {0}")]
    MaxPlayersTooSmall(usize),

    #[error("max_players должен быть меньше 24, передано {0}")]
    MaxPlayersTooLarge(usize),

    #[error("Имя игрока {0:?} уже занято")]
    DuplicatePlayerName(String),

    #[error("В колоде {available} карт, а для раздачи нужно {needed}")]
    DeckTooSmall { needed: usize, available: usize },

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(String),

    #[error("Сумма стеков игроков не помещается в u64")]
    ChipTotalOverflow,
}

/// Действие нарушает правила при текущем состоянии раздачи.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Игрок {0} не активен (сфолдил или не сидит за столом)")]
    PlayerNotActive(String),

    #[error("Ставка слишком мала. Минимальная ставка для игрока {min}")]
    BetTooSmall { min: Chips },

    #[error("Невозможно выполнить check – нужно доплатить {to_call}")]
    CannotCheck { to_call: Chips },
}

/// Операция бессмысленна в текущем состоянии игры (ошибка вызывающего кода).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("Сейчас ни один игрок не держит ход")]
    NoPlayerInAction,

    #[error("Игрок {0} не сидит ни за одним столом")]
    PlayerNotSeated(String),

    #[error("Раздача уже идёт")]
    HandAlreadyStarted,

    #[error("Раздача не начата")]
    HandNotStarted,

    #[error("Раунд ставок ещё идёт")]
    RoundInProgress,

    #[error("Раунд ставок уже завершён")]
    RoundIsOver,

    #[error("На борде не может быть больше 5 карт")]
    BoardFull,

    #[error("В колоде не хватает карт: нужно {needed}, осталось {available}")]
    DeckExhausted { needed: usize, available: usize },

    #[error("Переполнение счётчика фишек")]
    ChipOverflow,
}

/// Общая ошибка движка.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Ошибка конфигурации: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Недопустимое действие: {0}")]
    IllegalAction(#[from] ActionError),

    #[error("Ошибка состояния игры: {0}")]
    GameState(#[from] StateError),
}
