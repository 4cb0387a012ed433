// tests/engine_round_tests.rs
//
// Тесты завершения раунда ставок и жизненного цикла раздачи:
//  1) round_over(): один активный / все в all-in / все уравняли и походили
//  2) после завершения раунда курсор больше не двигается
//  3) deal_board / start_next_round / reset_hand / set_blinds

use holdem_engine::domain::{Blinds, Chips, Player, TableConfig};
use holdem_engine::engine::{
    Game, GameError, HandEventKind, HandPhase, PlayerAction, StateError, MAX_BOARD_CARDS,
};
use holdem_engine::infra::DeterministicRng;

// ---------------------------------------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// ---------------------------------------------------------

fn new_game(n: usize, blinds: Blinds) -> Game {
    let players = (1..=n)
        .map(|i| Player::new(format!("Player {i}"), Chips(1000)))
        .collect();
    Game::new(players, TableConfig::default().with_blinds(blinds)).expect("валидная игра")
}

fn started(n: usize, blinds: Blinds) -> Game {
    let mut game = new_game(n, blinds);
    game.start_with(&mut DeterministicRng::from_u64(7))
        .expect("start должен пройти");
    game
}

fn ante_only(ante: u64) -> Blinds {
    Blinds::new(Chips::ZERO, Chips::ZERO, Chips(ante))
}

/// Трое без блайндов, все чекают → раунд закончен.
fn checked_around() -> Game {
    let mut game = started(3, Blinds::NONE);
    for _ in 0..3 {
        game.act(PlayerAction::check()).unwrap();
    }
    assert_eq!(game.phase(), HandPhase::RoundOver);
    game
}

// ---------------------------------------------------------
// ROUND OVER
// ---------------------------------------------------------

#[test]
fn round_not_over_before_anyone_acted() {
    let game = started(4, Blinds::NONE);
    assert!(!game.round_over());

    let game = started(4, ante_only(25));
    assert!(!game.round_over());
}

#[test]
fn round_not_over_after_raise() {
    let mut game = started(4, Blinds::NONE);

    game.act(PlayerAction::bet(100)).unwrap();
    game.act(PlayerAction::bet(100)).unwrap();
    game.act(PlayerAction::bet(100)).unwrap();
    game.act(PlayerAction::bet(200)).unwrap();

    assert!(!game.round_over());
    assert_eq!(game.current_actor(), Some(0));
}

#[test]
fn round_over_when_all_bet_equally() {
    let mut game = started(3, ante_only(25));
    assert_eq!(game.pot(), Chips(75));

    game.act(PlayerAction::bet(100)).unwrap();
    assert!(!game.round_over());
    game.act(PlayerAction::bet(100)).unwrap();
    assert!(!game.round_over());
    game.act(PlayerAction::bet(100)).unwrap();

    assert!(game.round_over());
    assert_eq!(game.phase(), HandPhase::RoundOver);
    for p in game.players() {
        assert_eq!(p.stack, Chips(875));
    }
    assert_eq!(game.pot(), Chips(375));
}

#[test]
fn round_over_when_four_bet_equally() {
    let mut game = started(4, ante_only(25));

    for _ in 0..3 {
        game.act(PlayerAction::bet(100)).unwrap();
    }
    assert!(!game.round_over());

    game.act(PlayerAction::bet(100)).unwrap();
    assert!(game.round_over());
}

#[test]
fn round_over_when_all_active_are_all_in() {
    let mut game = started(4, ante_only(25));

    game.act(PlayerAction::bet(975)).unwrap();
    game.act(PlayerAction::fold()).unwrap();
    game.act(PlayerAction::fold()).unwrap();
    assert!(!game.round_over());

    game.act(PlayerAction::bet(975)).unwrap();
    assert!(game.round_over());
    assert!(game.players()[0].is_all_in());
    assert!(game.players()[3].is_all_in());
}

#[test]
fn round_over_when_one_player_left() {
    let mut game = started(4, Blinds::NONE);

    game.act(PlayerAction::bet(100)).unwrap();
    game.act(PlayerAction::fold()).unwrap();
    game.act(PlayerAction::fold()).unwrap();
    assert!(!game.round_over());
    game.act(PlayerAction::fold()).unwrap();

    assert!(game.round_over());
    let active: Vec<_> = game.players().iter().filter(|p| p.is_active()).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Player 1");
}

#[test]
fn big_blind_gets_to_act_after_limpers() {
    let mut game = started(4, Blinds::new(Chips(25), Chips(50), Chips::ZERO));

    game.act(PlayerAction::call()).unwrap(); // P1
    game.act(PlayerAction::check()).unwrap(); // P2 (BB)
    game.act(PlayerAction::call()).unwrap(); // P3 (SB)
    assert!(!game.round_over());
    game.act(PlayerAction::call()).unwrap(); // P4

    assert!(game.round_over());
    assert_eq!(game.pot(), Chips(200));
}

#[test]
fn raise_reopens_action() {
    let mut game = started(3, Blinds::NONE);

    game.act(PlayerAction::check()).unwrap(); // P3
    game.act(PlayerAction::check()).unwrap(); // P1
    game.act(PlayerAction::bet(100)).unwrap(); // P2
    assert!(!game.round_over());

    game.act(PlayerAction::call()).unwrap(); // P3
    assert!(!game.round_over());
    game.act(PlayerAction::call()).unwrap(); // P1
    assert!(game.round_over());
}

#[test]
fn cursor_does_not_move_after_round_over() {
    let mut game = checked_around();
    let actor = game.current_actor();
    let pot = game.pot();

    let err = game.act(PlayerAction::check()).unwrap_err();
    assert_eq!(err, GameError::GameState(StateError::RoundIsOver));
    assert_eq!(game.current_actor(), actor);
    assert_eq!(game.pot(), pot);
    assert!(game.round_over());

    let last = game.history().events.last().expect("история не пуста");
    assert_eq!(last.kind, HandEventKind::RoundOver { pot });
}

#[test]
fn act_before_start_is_state_error() {
    let mut game = new_game(3, Blinds::NONE);

    let err = game.act(PlayerAction::check()).unwrap_err();
    assert_eq!(err, GameError::GameState(StateError::HandNotStarted));
}

// ---------------------------------------------------------
// ЖИЗНЕННЫЙ ЦИКЛ РАЗДАЧИ
// ---------------------------------------------------------

#[test]
fn deal_board_only_between_rounds() {
    let mut fresh = new_game(3, Blinds::NONE);
    assert_eq!(
        fresh.deal_board(3).unwrap_err(),
        GameError::GameState(StateError::HandNotStarted)
    );

    let mut betting = started(3, Blinds::NONE);
    assert_eq!(
        betting.deal_board(3).unwrap_err(),
        GameError::GameState(StateError::RoundInProgress)
    );
    assert!(betting.board().is_empty());
}

#[test]
fn deal_board_caps_at_five_cards() {
    let mut game = checked_around();
    let deck_before = game.deck().len();

    assert_eq!(game.deal_board(3).unwrap().len(), 3);
    assert_eq!(
        game.deal_board(3).unwrap_err(),
        GameError::GameState(StateError::BoardFull)
    );
    assert_eq!(game.board().len(), 3);

    game.deal_board(1).unwrap();
    game.deal_board(1).unwrap();
    assert_eq!(game.board().len(), MAX_BOARD_CARDS);
    assert_eq!(game.deck().len(), deck_before - MAX_BOARD_CARDS);

    // борд не пересекается с картами игроков
    for p in game.players() {
        for c in &p.hole_cards {
            assert!(!game.board().contains(c));
        }
    }
}

#[test]
fn next_round_resets_round_bets() {
    let mut game = started(3, Blinds::NONE);
    game.act(PlayerAction::bet(100)).unwrap(); // P3
    game.act(PlayerAction::call()).unwrap(); // P1
    game.act(PlayerAction::call()).unwrap(); // P2
    assert_eq!(game.phase(), HandPhase::RoundOver);

    game.deal_board(3).unwrap();
    let phase = game.start_next_round().unwrap();

    assert_eq!(phase, HandPhase::Betting);
    assert_eq!(game.largest_bet(), Chips::ZERO);
    assert_eq!(game.pot(), Chips(300));
    for p in game.players() {
        assert_eq!(p.current_bet, Chips::ZERO);
    }
    // первым ходит первый после дилера
    assert_eq!(game.current_actor(), Some(0));
    assert!(!game.round_over());

    for _ in 0..3 {
        game.act(PlayerAction::check()).unwrap();
    }
    assert_eq!(game.phase(), HandPhase::RoundOver);
}

#[test]
fn next_round_requires_finished_round() {
    let mut game = started(3, Blinds::NONE);
    assert_eq!(
        game.start_next_round().unwrap_err(),
        GameError::GameState(StateError::RoundInProgress)
    );
}

#[test]
fn next_round_with_single_player_stays_over() {
    let mut game = started(3, Blinds::NONE);
    game.act(PlayerAction::bet(50)).unwrap();
    game.act(PlayerAction::fold()).unwrap();
    game.act(PlayerAction::fold()).unwrap();
    assert_eq!(game.phase(), HandPhase::RoundOver);

    assert_eq!(game.start_next_round().unwrap(), HandPhase::RoundOver);
}

#[test]
fn reset_hand_returns_pot_and_cards() {
    let mut game = started(4, Blinds::new(Chips(25), Chips(50), Chips(10)));
    let chips_at_start = game.total_chips();

    game.act(PlayerAction::fold()).unwrap(); // P1
    game.act(PlayerAction::check()).unwrap(); // P2 (BB)
    game.act(PlayerAction::call()).unwrap(); // P3 (SB)
    game.act(PlayerAction::call()).unwrap(); // P4
    assert_eq!(game.phase(), HandPhase::RoundOver);
    game.deal_board(3).unwrap();

    let pot = game.reset_hand().expect("раунд закончен, сброс разрешён");

    assert_eq!(pot, Chips(190));
    assert_eq!(game.pot(), Chips::ZERO);
    assert_eq!(game.total_chips() + pot, chips_at_start);
    assert_eq!(game.deck().len(), 52);
    assert!(game.board().is_empty());
    assert_eq!(game.phase(), HandPhase::Waiting);
    assert_eq!(game.current_actor(), None);
    for p in game.players() {
        assert!(!p.folded);
        assert!(p.hole_cards.is_empty());
        assert_eq!(p.current_bet, Chips::ZERO);
    }
}

#[test]
fn reset_hand_during_betting_is_rejected() {
    let mut game = started(3, Blinds::NONE);
    assert_eq!(
        game.reset_hand().unwrap_err(),
        GameError::GameState(StateError::RoundInProgress)
    );
}

#[test]
fn reset_before_start_returns_empty_pot() {
    let mut game = new_game(2, Blinds::NONE);
    assert_eq!(game.reset_hand(), Ok(Chips::ZERO));
    assert_eq!(game.phase(), HandPhase::Waiting);
}

#[test]
fn new_hand_after_reset_uses_new_blinds() {
    let mut game = checked_around();

    assert_eq!(
        game.set_blinds(Blinds::new(Chips(10), Chips(20), Chips::ZERO))
            .unwrap_err(),
        GameError::GameState(StateError::HandAlreadyStarted)
    );

    game.reset_hand().unwrap();
    game.set_blinds(Blinds::new(Chips(10), Chips(20), Chips::ZERO))
        .unwrap();
    game.start_with(&mut DeterministicRng::from_u64(8)).unwrap();

    assert_eq!(game.pot(), Chips(30));
    assert_eq!(game.largest_bet(), Chips(20));
    assert_eq!(
        game.history().events[0].kind,
        HandEventKind::HandStarted { hand_number: 2 }
    );
    for p in game.players() {
        assert_eq!(p.hole_cards.len(), 2);
    }
}

// ---------------------------------------------------------
// ОДИН ХОДЯЩИЙ ПРОТИВ ALL-IN
// ---------------------------------------------------------

#[test]
fn heads_up_short_small_blind_closes_round_at_start() {
    let players = vec![Player::new("Big", Chips(1000)), Player::new("Short", Chips(10))];
    let mut game = Game::new(
        players,
        TableConfig::default().with_blinds(Blinds::new(Chips(25), Chips(50), Chips::ZERO)),
    )
    .expect("валидная игра");

    let phase = game.start_with(&mut DeterministicRng::from_u64(3)).unwrap();

    // SB ушёл в all-in на 10, BB ничего не должен: отвечать на ставку некому
    assert!(game.players()[1].is_all_in());
    assert_eq!(game.min_to_continue(0), Some(Chips::ZERO));
    assert_eq!(phase, HandPhase::RoundOver);
    assert!(game.round_over());
    assert_eq!(game.pot(), Chips(60));
    assert_eq!(
        game.act(PlayerAction::bet(100)).unwrap_err(),
        GameError::GameState(StateError::RoundIsOver)
    );
}

#[test]
fn heads_up_short_big_blind_still_lets_small_blind_call() {
    let players = vec![Player::new("Short", Chips(30)), Player::new("Big", Chips(1000))];
    let mut game = Game::new(
        players,
        TableConfig::default().with_blinds(Blinds::new(Chips(25), Chips(50), Chips::ZERO)),
    )
    .expect("валидная игра");

    game.start_with(&mut DeterministicRng::from_u64(3)).unwrap();

    // BB в all-in на 30, SB должен 5 и обязан ответить
    assert_eq!(game.phase(), HandPhase::Betting);
    assert_eq!(game.current_actor(), Some(1));
    assert_eq!(game.min_to_continue(1), Some(Chips(5)));

    assert_eq!(game.act(PlayerAction::call()).unwrap(), HandPhase::RoundOver);
    assert_eq!(game.pot(), Chips(60));
}

#[test]
fn next_round_after_two_all_ins_has_nobody_to_act() {
    let players = vec![
        Player::new("Short 1", Chips(100)),
        Player::new("Deep", Chips(1000)),
        Player::new("Short 2", Chips(100)),
    ];
    let mut game = Game::new(players, TableConfig::default()).expect("валидная игра");
    game.start_with(&mut DeterministicRng::from_u64(9)).unwrap();

    game.act(PlayerAction::bet(100)).unwrap(); // Short 2: all-in
    game.act(PlayerAction::call()).unwrap(); // Short 1: all-in
    game.act(PlayerAction::call()).unwrap(); // Deep: 900 в стеке
    assert_eq!(game.phase(), HandPhase::RoundOver);

    game.deal_board(3).unwrap();
    let phase = game.start_next_round().unwrap();

    assert_eq!(phase, HandPhase::RoundOver);
    assert!(game.round_over());
    assert_eq!(game.players()[1].stack, Chips(900));
    assert_eq!(game.pot(), Chips(300));
    assert_eq!(
        game.act(PlayerAction::bet(500)).unwrap_err(),
        GameError::GameState(StateError::RoundIsOver)
    );
}
