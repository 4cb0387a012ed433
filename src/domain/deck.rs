use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;
use crate::infra::rng::SystemRng;

/// Колода: упорядоченный список карт. Верх колоды — конец вектора,
/// поэтому `draw_one` — это `pop` за O(1).
///
/// Тип карты непрозрачен: колода ничего не знает об игре.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck<C = Card> {
    cards: Vec<C>,
}

impl Deck<Card> {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }
}

impl<C> Deck<C> {
    pub fn new(cards: Vec<C>) -> Self {
        Deck { cards }
    }

    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешивание Фишера–Йетса: i идёт от последнего индекса вниз до 1,
    /// j равномерно выбирается из [0, i].
    pub fn shuffle_with<R: RandomSource>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.index_up_to(i);
            self.cards.swap(i, j);
        }
    }

    /// Перемешать системным RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut SystemRng);
    }

    /// Взять одну карту сверху колоды. Пустая колода → None, не ошибка.
    pub fn draw_one(&mut self) -> Option<C> {
        self.cards.pop()
    }

    /// Вынуть случайную карту из любого места колоды. Порядок остальных
    /// карт сохраняется. Пустая колода → None.
    pub fn pick_with<R: RandomSource>(&mut self, rng: &mut R) -> Option<C> {
        let last = self.cards.len().checked_sub(1)?;
        let idx = rng.index_up_to(last);
        Some(self.cards.remove(idx))
    }

    /// `pick_with` с системным RNG.
    pub fn pick(&mut self) -> Option<C> {
        self.pick_with(&mut SystemRng)
    }

    /// Взять до n карт сверху. Если колода кончилась, вернётся меньше n —
    /// вызывающий обязан проверить длину.
    pub fn draw_n(&mut self, n: usize) -> Vec<C> {
        let mut taken = Vec::with_capacity(n.min(self.cards.len()));
        for _ in 0..n {
            match self.draw_one() {
                Some(card) => taken.push(card),
                None => break,
            }
        }
        taken
    }

    /// Положить карту под низ колоды (противоположный от `draw_one` конец).
    pub fn add_to_bottom(&mut self, card: C) {
        self.cards.insert(0, card);
    }
}

impl Default for Deck<Card> {
    fn default() -> Self {
        Deck::standard_52()
    }
}
