use std::collections::HashSet;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::blinds::Blinds;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::table::{SeatIndex, TableConfig};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::BettingState;
use crate::engine::errors::{ConfigError, GameError, StateError};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{
    big_blind_seat, dealer_seat, first_to_act_seat, next_seat_where, small_blind_seat,
};
use crate::engine::RandomSource;
use crate::infra::rng::SystemRng;

/// Максимум карт на борде.
pub const MAX_BOARD_CARDS: usize = 5;

/// Фаза раздачи поверх одного раунда ставок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandPhase {
    /// Раздача не начата (или сброшена).
    Waiting,
    /// Идёт раунд ставок, ход у `current_actor`.
    Betting,
    /// Раунд ставок завершён; можно открыть борд, начать следующий раунд
    /// или сбросить раздачу.
    RoundOver,
}

/// Игра за одним столом: рассадка, колода, борд, банк и курсор хода.
///
/// Все мутации синхронные; если игру делят между потоками,
/// вызовы нужно сериализовать снаружи (например, `Mutex<Game>`).
///
/// Снапшот только на запись: `Game` собирается через `new`/`with_deck`,
/// где проверяется конфиг, поэтому `Deserialize` у него нет.
#[derive(Clone, Debug, Serialize)]
pub struct Game {
    players: Vec<Player>,
    config: TableConfig,
    deck: Deck,
    board: Vec<Card>,
    /// Сброшенные карты, вернутся в колоду при `reset_hand`.
    muck: Vec<Card>,
    betting: BettingState,
    /// Чей сейчас ход (seat).
    current_actor: Option<SeatIndex>,
    phase: HandPhase,
    hands_started: u64,
    history: HandHistory,
}

impl Game {
    /// Игра со свежей перемешанной 52-карточной колодой.
    pub fn new(players: Vec<Player>, config: TableConfig) -> Result<Self, GameError> {
        let mut deck = Deck::standard_52();
        deck.shuffle();
        Self::with_deck(players, config, deck)
    }

    /// Игра с колодой, переданной снаружи.
    pub fn with_deck(
        mut players: Vec<Player>,
        config: TableConfig,
        deck: Deck,
    ) -> Result<Self, GameError> {
        config.validate(players.len())?;

        let mut names = HashSet::with_capacity(players.len());
        for p in &players {
            if !names.insert(p.name.as_str()) {
                return Err(ConfigError::DuplicatePlayerName(p.name.clone()).into());
            }
        }

        players
            .iter()
            .try_fold(Chips::ZERO, |acc, p| acc.checked_add(p.stack))
            .ok_or(ConfigError::ChipTotalOverflow)?;

        let needed = config.cards_needed(players.len())?;
        if deck.len() < needed {
            return Err(ConfigError::DeckTooSmall {
                needed,
                available: deck.len(),
            }
            .into());
        }

        for (seat, p) in players.iter_mut().enumerate() {
            p.seat = Some(seat);
        }

        Ok(Self {
            players,
            config,
            deck,
            board: Vec::new(),
            muck: Vec::new(),
            betting: BettingState::new(),
            current_actor: None,
            phase: HandPhase::Waiting,
            hands_started: 0,
            history: HandHistory::new(),
        })
    }

    // ---------------------------------------------------------------------
    // Чтение состояния
    // ---------------------------------------------------------------------

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn blinds(&self) -> Blinds {
        self.config.blinds
    }

    pub fn hand_size(&self) -> usize {
        self.config.hand_size
    }

    pub fn max_players(&self) -> usize {
        self.config.max_players
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn pot(&self) -> Chips {
        self.betting.pot.total()
    }

    pub fn largest_bet(&self) -> Chips {
        self.betting.largest_bet
    }

    pub fn phase(&self) -> HandPhase {
        self.phase
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    pub fn current_actor(&self) -> Option<SeatIndex> {
        self.current_actor
    }

    /// Игрок, который сейчас держит ход.
    pub fn player_in_action(&self) -> Option<&Player> {
        self.current_actor.and_then(|seat| self.players.get(seat))
    }

    pub fn dealer_seat(&self) -> SeatIndex {
        dealer_seat(self.players.len())
    }

    pub fn small_blind_seat(&self) -> SeatIndex {
        small_blind_seat(self.players.len())
    }

    pub fn big_blind_seat(&self) -> SeatIndex {
        big_blind_seat(self.players.len())
    }

    pub fn dealer(&self) -> &Player {
        &self.players[self.dealer_seat()]
    }

    pub fn small_blind_player(&self) -> &Player {
        &self.players[self.small_blind_seat()]
    }

    pub fn big_blind_player(&self) -> &Player {
        &self.players[self.big_blind_seat()]
    }

    /// Сколько игроку на месте `seat` нужно доплатить, чтобы продолжить.
    pub fn min_to_continue(&self, seat: SeatIndex) -> Option<Chips> {
        self.players.get(seat).map(|p| self.betting.to_call(p))
    }

    /// Банк плюс все стеки. Любая последовательность действий его не меняет.
    pub fn total_chips(&self) -> Chips {
        self.pot() + self.players.iter().map(|p| p.stack).sum::<Chips>()
    }

    /// Раунд ставок завершён, если:
    /// - остался один активный игрок;
    /// - все активные игроки в all-in;
    /// - ходить может не больше одного игрока, и он ничего не должен;
    /// - каждый, кто ещё может ходить, уже ходил после последнего
    ///   повышения и ничего не должен.
    pub fn round_over(&self) -> bool {
        let active: Vec<&Player> = self.players.iter().filter(|p| p.is_active()).collect();

        if active.len() <= 1 {
            return true;
        }
        if active.iter().all(|p| p.is_all_in()) {
            return true;
        }

        let can_act: Vec<&Player> = active.iter().copied().filter(|p| p.can_act()).collect();
        // Одному против all-in ставить некому: если он уравнял, раунд закрыт.
        if can_act.len() <= 1 {
            return can_act.iter().all(|p| self.betting.to_call(p).is_zero());
        }
        can_act
            .iter()
            .all(|p| p.has_acted && self.betting.to_call(p).is_zero())
    }

    // ---------------------------------------------------------------------
    // Старт раздачи
    // ---------------------------------------------------------------------

    /// Старт раздачи с системным RNG.
    pub fn start(&mut self) -> Result<HandPhase, GameError> {
        self.start_with(&mut SystemRng)
    }

    /// Старт раздачи:
    /// - собирает блайнды и анте;
    /// - перемешивает колоду и раздаёт карманные карты;
    /// - ставит курсор на первого ходящего.
    pub fn start_with<R: RandomSource>(&mut self, rng: &mut R) -> Result<HandPhase, GameError> {
        if self.phase != HandPhase::Waiting {
            return Err(StateError::HandAlreadyStarted.into());
        }

        let needed = self.config.cards_needed(self.players.len())?;
        if self.deck.len() < needed {
            return Err(StateError::DeckExhausted {
                needed,
                available: self.deck.len(),
            }
            .into());
        }

        self.hands_started += 1;
        self.history.clear();
        self.history.push(HandEventKind::HandStarted {
            hand_number: self.hands_started,
        });

        for p in self.players.iter_mut() {
            p.reset_round();
        }

        self.post_forced_bets()?;

        self.deck.shuffle_with(rng);
        self.deal_hole_cards();

        self.phase = HandPhase::Betting;

        let first = first_to_act_seat(self.players.len());
        let first = if self.players[first].can_act() {
            first
        } else {
            self.next_actor_after(first)
        };
        self.current_actor = Some(first);

        info!(
            "hand #{} started: {} players, pot {}, largest bet {}, first to act seat {}",
            self.hands_started,
            self.players.len(),
            self.pot(),
            self.largest_bet(),
            first
        );

        if self.round_over() {
            self.finish_round();
        }

        Ok(self.phase)
    }

    /// Блайнды идут через `collect_chips`, а не через `bet`: минимальная
    /// ставка для них не проверяется. Анте — мёртвые деньги, в
    /// `current_bet` они не попадают и на колл не влияют.
    fn post_forced_bets(&mut self) -> Result<(), GameError> {
        let blinds = self.config.blinds;
        let bb_seat = self.big_blind_seat();
        let sb_seat = self.small_blind_seat();

        let bb_paid = {
            let p = &mut self.players[bb_seat];
            let paid = p.collect_chips(blinds.big_blind(), &mut self.betting)?;
            p.current_bet = paid;
            paid
        };

        let sb_paid = {
            let p = &mut self.players[sb_seat];
            let paid = p.collect_chips(blinds.small_blind(), &mut self.betting)?;
            p.current_bet = paid;
            paid
        };

        let mut ante = Vec::with_capacity(self.players.len());
        if !blinds.ante().is_zero() {
            for (seat, p) in self.players.iter_mut().enumerate() {
                let paid = p.collect_chips(blinds.ante(), &mut self.betting)?;
                ante.push((seat, paid));
            }
        }

        self.betting.largest_bet = self
            .players
            .iter()
            .map(|p| p.current_bet)
            .max()
            .unwrap_or(Chips::ZERO);

        debug!(
            "forced bets: sb seat {} paid {}, bb seat {} paid {}, ante {}",
            sb_seat,
            sb_paid,
            bb_seat,
            bb_paid,
            blinds.ante()
        );

        self.history.push(HandEventKind::ForcedBetsPosted {
            small_blind: (sb_seat, sb_paid),
            big_blind: (bb_seat, bb_paid),
            ante,
        });

        Ok(())
    }

    /// Каждому игроку по `hand_size` карт.
    fn deal_hole_cards(&mut self) {
        let hand_size = self.config.hand_size;
        for (seat, p) in self.players.iter_mut().enumerate() {
            p.hole_cards = self.deck.draw_n(hand_size);
            self.history.push(HandEventKind::HoleCardsDealt {
                seat,
                cards: p.hole_cards.clone(),
            });
        }
    }

    // ---------------------------------------------------------------------
    // Раунд ставок
    // ---------------------------------------------------------------------

    /// Применить действие игрока, который держит ход, и передвинуть курсор.
    /// При ошибке состояние игры не меняется.
    pub fn act(&mut self, action: PlayerAction) -> Result<HandPhase, GameError> {
        match self.phase {
            HandPhase::Waiting => return Err(StateError::HandNotStarted.into()),
            HandPhase::RoundOver => return Err(StateError::RoundIsOver.into()),
            HandPhase::Betting => {}
        }

        let seat = self.current_actor.ok_or(StateError::NoPlayerInAction)?;
        let largest_before = self.betting.largest_bet;

        let paid = {
            let player = self
                .players
                .get_mut(seat)
                .ok_or(StateError::NoPlayerInAction)?;

            match action.kind {
                PlayerActionKind::Bet | PlayerActionKind::Raise => {
                    player.bet(action.amount_or_zero(), &mut self.betting)?
                }
                PlayerActionKind::Call => player.call(&mut self.betting)?,
                PlayerActionKind::Check => {
                    player.check(&self.betting)?;
                    Chips::ZERO
                }
                PlayerActionKind::Fold => {
                    let mucked = player.fold()?;
                    self.muck.extend(mucked);
                    Chips::ZERO
                }
            }
        };

        if action.kind == PlayerActionKind::Fold {
            self.recompute_largest_bet();
        }

        // Повышение заново открывает действие для всех остальных.
        if self.betting.largest_bet > largest_before {
            for (idx, p) in self.players.iter_mut().enumerate() {
                if idx != seat {
                    p.has_acted = false;
                }
            }
        }

        let (stack_after, name) = {
            let p = &mut self.players[seat];
            p.has_acted = true;
            (p.stack, p.name.clone())
        };

        debug!(
            "seat {} ({}) {}: paid {}, stack {}, pot {}",
            seat,
            name,
            action,
            paid,
            stack_after,
            self.pot()
        );

        self.history.push(HandEventKind::PlayerActed {
            seat,
            action,
            paid,
            stack_after,
            pot_after: self.pot(),
        });

        if self.round_over() {
            self.finish_round();
        } else {
            let next = self.next_actor_after(seat);
            debug!("action moves from seat {} to seat {}", seat, next);
            self.current_actor = Some(next);
        }

        Ok(self.phase)
    }

    fn finish_round(&mut self) {
        self.phase = HandPhase::RoundOver;
        info!(
            "betting round over: pot {}, active players {}",
            self.pot(),
            self.players.iter().filter(|p| p.is_active()).count()
        );
        self.history.push(HandEventKind::RoundOver { pot: self.pot() });
    }

    /// Следующий после `seat` игрок, который активен и не в all-in.
    fn next_actor_after(&self, seat: SeatIndex) -> SeatIndex {
        next_seat_where(&self.players, seat, Player::can_act).unwrap_or_else(|| {
            warn!("no player can act after seat {}, falling back to seat 0", seat);
            0
        })
    }

    /// Наибольшая ставка — максимум по активным игрокам.
    fn recompute_largest_bet(&mut self) {
        self.betting.largest_bet = self
            .players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.current_bet)
            .max()
            .unwrap_or(Chips::ZERO);
    }

    // ---------------------------------------------------------------------
    // Жизненный цикл раздачи
    // ---------------------------------------------------------------------

    fn ensure_round_over(&self) -> Result<(), GameError> {
        match self.phase {
            HandPhase::RoundOver => Ok(()),
            HandPhase::Waiting => Err(StateError::HandNotStarted.into()),
            HandPhase::Betting => Err(StateError::RoundInProgress.into()),
        }
    }

    /// Открыть `count` карт на борд (между раундами ставок).
    pub fn deal_board(&mut self, count: usize) -> Result<&[Card], GameError> {
        self.ensure_round_over()?;

        if self.board.len() + count > MAX_BOARD_CARDS {
            return Err(StateError::BoardFull.into());
        }
        if self.deck.len() < count {
            return Err(StateError::DeckExhausted {
                needed: count,
                available: self.deck.len(),
            }
            .into());
        }

        let cards = self.deck.draw_n(count);
        info!("board dealt: {} card(s)", cards.len());
        self.history.push(HandEventKind::BoardDealt {
            cards: cards.clone(),
        });
        self.board.extend(cards);
        Ok(&self.board)
    }

    /// Новый раунд ставок в той же раздаче: ставки раунда обнуляются,
    /// первым ходит первый после дилера, кто ещё может ходить.
    pub fn start_next_round(&mut self) -> Result<HandPhase, GameError> {
        self.ensure_round_over()?;

        for p in self.players.iter_mut() {
            p.reset_round();
        }
        self.betting.largest_bet = Chips::ZERO;

        let first = next_seat_where(&self.players, self.dealer_seat(), Player::can_act);
        self.history.push(HandEventKind::RoundStarted {
            first_to_act: first,
        });

        match first {
            Some(seat) if !self.round_over() => {
                self.current_actor = Some(seat);
                self.phase = HandPhase::Betting;
                info!("new betting round, first to act seat {}", seat);
            }
            _ => {
                info!("new betting round has nobody left to act");
            }
        }

        Ok(self.phase)
    }

    /// Сбросить раздачу: карты возвращаются под низ колоды, флаги игроков
    /// и борд очищаются. Банк опустошается и возвращается вызывающему:
    /// выплат движок не делает. Рассадка не меняется.
    pub fn reset_hand(&mut self) -> Result<Chips, GameError> {
        if self.phase == HandPhase::Betting {
            return Err(StateError::RoundInProgress.into());
        }

        for p in self.players.iter_mut() {
            for card in p.hole_cards.drain(..) {
                self.deck.add_to_bottom(card);
            }
            p.folded = false;
            p.reset_round();
        }
        for card in self.board.drain(..).chain(self.muck.drain(..)) {
            self.deck.add_to_bottom(card);
        }

        let pot = self.betting.pot.take();
        self.betting.largest_bet = Chips::ZERO;
        self.current_actor = None;
        self.phase = HandPhase::Waiting;

        info!("hand reset, pot {} returned to caller", pot);
        self.history.push(HandEventKind::HandReset { pot_returned: pot });

        Ok(pot)
    }

    /// Подменить блайнды между раздачами.
    pub fn set_blinds(&mut self, blinds: Blinds) -> Result<(), GameError> {
        if self.phase != HandPhase::Waiting {
            return Err(StateError::HandAlreadyStarted.into());
        }
        self.config.blinds = blinds;
        Ok(())
    }
}
