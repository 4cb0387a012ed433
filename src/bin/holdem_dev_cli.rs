// src/bin/holdem_dev_cli.rs
//
// Dev-CLI: играет один заскриптованный раунд ставок и печатает состояние.
//
//   holdem_dev_cli [config.json] [actions.json]
//
// config.json  – TableConfig, например {"blinds":{"small_blind":25,"big_blind":50,"ante":10}}
// actions.json – массив действий, например [{"kind":"bet","amount":100},{"kind":"call"}]
//
// Логи движка включаются через RUST_LOG=debug.

use std::env;
use std::fs;
use std::process::ExitCode;

use holdem_engine::domain::{Chips, Player, TableConfig};
use holdem_engine::engine::{Game, GameError, HandPhase, PlayerAction};
use holdem_engine::infra::SystemRng;

fn main() -> ExitCode {
    env_logger::init();

    println!("holdem_dev_cli: стартуем dev-CLI…");

    let args: Vec<String> = env::args().skip(1).collect();

    let config = match args.first() {
        Some(path) => match load_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Не удалось прочитать конфиг {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => TableConfig::default(),
    };

    let script = match args.get(1) {
        Some(path) => match load_actions(path) {
            Ok(actions) => actions,
            Err(e) => {
                eprintln!("Не удалось прочитать сценарий {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => default_script(),
    };

    match run(config, script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Ошибка движка: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &str) -> Result<TableConfig, String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    TableConfig::from_json(&raw).map_err(|e| e.to_string())
}

fn load_actions(path: &str) -> Result<Vec<PlayerAction>, String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

/// Все уравнивают, BB чекает.
fn default_script() -> Vec<PlayerAction> {
    vec![
        PlayerAction::call(),
        PlayerAction::call(),
        PlayerAction::call(),
        PlayerAction::check(),
    ]
}

fn run(config: TableConfig, script: Vec<PlayerAction>) -> Result<(), GameError> {
    let players = (1..=4)
        .map(|i| Player::new(format!("Player {i}"), Chips::new(1_000)))
        .collect();

    let mut game = Game::new(players, config)?;
    let chips_before = game.total_chips();

    game.start_with(&mut SystemRng)?;

    println!();
    println!("================ HAND START =================");
    print_state(&game);

    for action in script {
        if game.phase() != HandPhase::Betting {
            break;
        }

        let actor = game
            .player_in_action()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "<никто>".to_string());

        match game.act(action) {
            Ok(_) => println!("  {actor}: {action}"),
            Err(e) => println!("  {actor}: {action} → отклонено: {e}"),
        }
    }

    println!();
    println!("================ AFTER SCRIPT =================");
    print_state(&game);
    println!("round over: {}", game.round_over());

    if game.phase() == HandPhase::RoundOver {
        game.deal_board(3)?;
        let board: Vec<String> = game.board().iter().map(|c| c.to_string()).collect();
        println!("board: {}", board.join(" "));
    }

    let pot = game.reset_hand();
    match pot {
        Ok(pot) => {
            let total = game.total_chips() + pot;
            println!("pot returned: {pot}; chips conserved: {}", total == chips_before);
        }
        Err(e) => println!("раздачу нельзя сбросить: {e}"),
    }

    Ok(())
}

fn print_state(game: &Game) {
    println!(
        "pot={} largest_bet={} phase={:?} in_action={}",
        game.pot(),
        game.largest_bet(),
        game.phase(),
        game.player_in_action()
            .map(|p| p.name.as_str())
            .unwrap_or("-")
    );

    for (seat, p) in game.players().iter().enumerate() {
        let cards: Vec<String> = p.hole_cards.iter().map(|c| c.to_string()).collect();
        let mut roles = Vec::new();
        if seat == game.dealer_seat() {
            roles.push("D");
        }
        if seat == game.small_blind_seat() {
            roles.push("SB");
        }
        if seat == game.big_blind_seat() {
            roles.push("BB");
        }
        println!(
            "  seat {seat} {:<9} [{:<5}] stack={:<5} bet={:<4} folded={} cards={}",
            p.name,
            roles.join("/"),
            p.stack.0,
            p.current_bet.0,
            p.folded,
            cards.join(" ")
        );
    }
}
