//! Роли мест и обход стола по кругу.
//!
//! Роли не хранятся, а вычисляются из числа игроков:
//! - дилер — последнее место;
//! - при 3+ игроках SB — предпоследнее, BB — третье с конца;
//! - при 2 игроках дилер сам ставит SB, а BB — другое место.

use crate::domain::player::Player;
use crate::domain::SeatIndex;

pub fn dealer_seat(player_count: usize) -> SeatIndex {
    player_count.saturating_sub(1)
}

pub fn small_blind_seat(player_count: usize) -> SeatIndex {
    if player_count == 2 {
        dealer_seat(player_count)
    } else {
        player_count.saturating_sub(2)
    }
}

pub fn big_blind_seat(player_count: usize) -> SeatIndex {
    if player_count == 2 {
        0
    } else {
        player_count.saturating_sub(3)
    }
}

/// Кто ходит первым после блайндов: место непосредственно перед BB.
/// В хедз-апе это дилер (он же SB).
pub fn first_to_act_seat(player_count: usize) -> SeatIndex {
    if player_count == 0 {
        return 0;
    }
    (big_blind_seat(player_count) + player_count - 1) % player_count
}

/// Найти следующее место после `start` (по кругу, сам `start` проверяется
/// последним), игрок на котором удовлетворяет `pred`.
pub fn next_seat_where<F>(players: &[Player], start: SeatIndex, pred: F) -> Option<SeatIndex>
where
    F: Fn(&Player) -> bool,
{
    let n = players.len();
    if n == 0 {
        return None;
    }

    (1..=n)
        .map(|offset| (start + offset) % n)
        .find(|&idx| pred(&players[idx]))
}
