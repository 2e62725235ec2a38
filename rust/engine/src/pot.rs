//! Main pot and side pots.
//!
//! Pots are derived from what each player has put in over the whole hand.
//! Every distinct all-in amount starts a new level. A level is eligible to
//! live players who reached it, plus live players who are not all-in and can
//! still match it. Folded players' chips stay in the pots they fed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    pub eligible: BTreeSet<usize>,
}

impl Pot {
    pub fn is_eligible(&self, player_id: usize) -> bool {
        self.eligible.contains(&player_id)
    }
}

/// Splits the hand's contributions into a main pot followed by side pots,
/// lowest level first. The amounts always sum to the total contributed.
pub fn build_pots(players: &[Player]) -> Vec<Pot> {
    let mut levels: Vec<u32> = players
        .iter()
        .filter(|p| p.is_all_in() && p.total_bet() > 0)
        .map(|p| p.total_bet())
        .collect();
    let top = players.iter().map(|p| p.total_bet()).max().unwrap_or(0);
    levels.push(top);
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<Pot> = Vec::new();
    let mut floor = 0u32;
    for level in levels {
        if level == floor {
            continue;
        }
        let amount: u32 = players
            .iter()
            .map(|p| p.total_bet().min(level).saturating_sub(floor))
            .sum();
        let eligible: BTreeSet<usize> = players
            .iter()
            .filter(|p| p.in_hand() && (p.total_bet() >= level || !p.is_all_in()))
            .map(|p| p.id())
            .collect();
        floor = level;

        match pots.last_mut() {
            // Same contenders as the level below, or nobody left to win it
            Some(prev) if prev.eligible == eligible || eligible.is_empty() => {
                prev.amount += amount
            }
            _ => pots.push(Pot { amount, eligible }),
        }
    }

    if pots.is_empty() {
        pots.push(Pot {
            amount: 0,
            eligible: players
                .iter()
                .filter(|p| p.in_hand())
                .map(|p| p.id())
                .collect(),
        });
    }
    pots
}

pub fn pot_total(pots: &[Pot]) -> u32 {
    pots.iter().map(|p| p.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(id: usize, stack: u32, bet: u32) -> Player {
        let mut p = Player::new(id, format!("P{}", id), false, stack);
        p.reset_for_hand();
        p.commit(bet);
        p
    }

    #[test]
    fn equal_contributions_make_one_pot() {
        let players = vec![seat(0, 1000, 20), seat(1, 1000, 20)];
        let pots = build_pots(&players);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amount, 40);
        assert_eq!(pots[0].eligible, BTreeSet::from([0, 1]));
    }

    #[test]
    fn short_all_in_creates_side_pot_without_them() {
        // P0 all-in for 50, P1 and P2 put in 200
        let players = vec![seat(0, 50, 50), seat(1, 1000, 200), seat(2, 1000, 200)];
        let pots = build_pots(&players);
        assert_eq!(pots.len(), 2);
        assert_eq!(pots[0].amount, 150);
        assert_eq!(pots[0].eligible, BTreeSet::from([0, 1, 2]));
        assert_eq!(pots[1].amount, 300);
        assert_eq!(pots[1].eligible, BTreeSet::from([1, 2]));
        assert_eq!(pot_total(&pots), 450);
    }

    #[test]
    fn folded_chips_stay_but_lose_eligibility() {
        let mut players = vec![seat(0, 1000, 100), seat(1, 1000, 100), seat(2, 1000, 40)];
        players[2].fold();
        let pots = build_pots(&players);
        assert_eq!(pot_total(&pots), 240);
        assert!(pots.iter().all(|p| !p.is_eligible(2)));
    }

    #[test]
    fn pending_players_stay_eligible_before_acting() {
        // Blinds posted, first player has not acted yet
        let players = vec![seat(0, 1000, 0), seat(1, 1000, 10), seat(2, 1000, 20)];
        let pots = build_pots(&players);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amount, 30);
        assert_eq!(pots[0].eligible, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn two_all_ins_at_different_levels() {
        let players = vec![seat(0, 30, 30), seat(1, 80, 80), seat(2, 500, 120)];
        let pots = build_pots(&players);
        let amounts: Vec<u32> = pots.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![90, 100, 40]);
        assert_eq!(pots[2].eligible, BTreeSet::from([2]));
    }
}
