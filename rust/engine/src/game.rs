use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Phase of the current hand. Transitions only move forward; a new hand
/// starts again from `PreDeal`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Between hands, before the cards are dealt
    PreDeal,
    /// Hole cards dealt, blinds posted
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands compared and pots awarded
    Showdown,
}

impl Phase {
    /// The phase after this one, with the number of community cards it deals.
    pub fn next_street(self) -> Option<(Phase, usize)> {
        match self {
            Phase::PreFlop => Some((Phase::Flop, 3)),
            Phase::Flop => Some((Phase::Turn, 1)),
            Phase::Turn => Some((Phase::River, 1)),
            Phase::PreDeal | Phase::River | Phase::Showdown => None,
        }
    }

    pub fn is_betting(self) -> bool {
        matches!(
            self,
            Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::PreDeal => "Pre-deal",
            Phase::PreFlop => "Pre-flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}

/// Seats that post the blinds and the first seat to act pre-flop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BlindSeats {
    pub small_blind: usize,
    pub big_blind: usize,
    pub first_to_act: usize,
}

/// Dealer button position. Only seats with chips can hold the button.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Button {
    index: usize,
}

impl Button {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves the button to the next seat that still has chips.
    pub fn rotate(&mut self, players: &[Player]) {
        if let Some(i) = next_seat(players, self.index, |p| p.stack() > 0) {
            self.index = i;
        }
    }

    /// Keeps the button where it is if that seat has chips, otherwise moves it on.
    pub fn settle(&mut self, players: &[Player]) {
        let funded = players.get(self.index).is_some_and(|p| p.stack() > 0);
        if !funded {
            self.rotate(players);
        }
    }

    /// Blind seats among the players dealt into the hand. Heads-up the dealer
    /// posts the small blind and acts first pre-flop; otherwise the blinds
    /// are the two seats left of the dealer and action starts left of the
    /// big blind.
    pub fn blind_seats(&self, players: &[Player]) -> Option<BlindSeats> {
        let dealt = players.iter().filter(|p| p.in_hand()).count();
        if dealt < 2 {
            return None;
        }
        let live = |p: &Player| p.in_hand();
        if dealt == 2 {
            let big_blind = next_seat(players, self.index, live)?;
            return Some(BlindSeats {
                small_blind: self.index,
                big_blind,
                first_to_act: self.index,
            });
        }
        let small_blind = next_seat(players, self.index, live)?;
        let big_blind = next_seat(players, small_blind, live)?;
        let first_to_act = next_seat(players, big_blind, live)?;
        Some(BlindSeats {
            small_blind,
            big_blind,
            first_to_act,
        })
    }

    /// First seat left of the dealer that can still act, used after the flop.
    pub fn first_to_act_postflop(&self, players: &[Player]) -> Option<usize> {
        next_seat(players, self.index, Player::can_act)
    }
}

/// The first seat strictly after `from` (wrapping, `from` itself last) that
/// satisfies `pred`.
pub fn next_seat(players: &[Player], from: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
    let n = players.len();
    (1..=n)
        .map(|step| (from + step) % n)
        .find(|&i| pred(&players[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(stacks: &[u32]) -> Vec<Player> {
        stacks
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let mut p = Player::new(i, format!("P{}", i), i == 0, s);
                p.reset_for_hand();
                p
            })
            .collect()
    }

    #[test]
    fn heads_up_dealer_posts_small_blind_and_acts_first() {
        let players = table(&[1000, 1000]);
        let seats = Button::new(1).blind_seats(&players).unwrap();
        assert_eq!(
            seats,
            BlindSeats {
                small_blind: 1,
                big_blind: 0,
                first_to_act: 1
            }
        );
    }

    #[test]
    fn three_handed_action_starts_left_of_big_blind() {
        let players = table(&[1000, 1000, 1000]);
        let seats = Button::new(0).blind_seats(&players).unwrap();
        assert_eq!(seats.small_blind, 1);
        assert_eq!(seats.big_blind, 2);
        assert_eq!(seats.first_to_act, 0);
    }

    #[test]
    fn button_skips_busted_seats() {
        let players = table(&[1000, 0, 1000]);
        let mut button = Button::new(0);
        button.rotate(&players);
        assert_eq!(button.index(), 2);
        button.rotate(&players);
        assert_eq!(button.index(), 0);

        let mut stale = Button::new(1);
        stale.settle(&players);
        assert_eq!(stale.index(), 2);
    }

    #[test]
    fn busted_seats_are_skipped_for_blinds() {
        let players = table(&[1000, 0, 1000, 1000]);
        let seats = Button::new(0).blind_seats(&players).unwrap();
        assert_eq!(seats.small_blind, 2);
        assert_eq!(seats.big_blind, 3);
        assert_eq!(seats.first_to_act, 0);
    }

    #[test]
    fn street_sequence() {
        assert_eq!(Phase::PreFlop.next_street(), Some((Phase::Flop, 3)));
        assert_eq!(Phase::Turn.next_street(), Some((Phase::River, 1)));
        assert_eq!(Phase::River.next_street(), None);
    }
}
