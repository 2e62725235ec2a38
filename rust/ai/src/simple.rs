//! Loose, randomised opponent.
//!
//! Reads its made hand once the flop is out and otherwise plays on coin
//! flips: calls most cheap bets, folds to big ones, and throws in the odd
//! small bet. Randomness comes from a seeded RNG so sessions replay.

use holdem_engine::cards::Card;
use holdem_engine::engine::{ActionRequest, TableSnapshot};
use holdem_engine::hand::{evaluate_hand, Category};
use holdem_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{aggressive, AIOpponent};

#[derive(Debug, Clone)]
pub struct SimpleAI {
    rng: ChaCha8Rng,
}

impl SimpleAI {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn made_hand(hole: &[Card], board: &[Card]) -> Option<Category> {
        if board.is_empty() {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        evaluate_hand(&cards).ok().map(|h| h.category)
    }

    fn decide(&mut self, made: Option<Category>, req: &ActionRequest, pot: u32) -> PlayerAction {
        let roll: f64 = self.rng.random();
        if req.to_call > 0 {
            match made {
                Some(c) if c >= Category::Straight => {
                    return if roll > 0.3 {
                        aggressive(req, req.to_call * 2)
                    } else {
                        PlayerAction::Call
                    };
                }
                Some(c) if c >= Category::OnePair && req.to_call < req.stack / 5 && roll > 0.5 => {
                    return PlayerAction::Call;
                }
                _ => {}
            }
            if req.to_call > req.stack / 3 {
                return PlayerAction::Fold;
            }
            return if self.rng.random::<f64>() < 0.6 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            };
        }

        if made.is_some_and(|c| c >= Category::TwoPair) && roll > 0.5 {
            return aggressive(req, pot / 2);
        }
        if self.rng.random::<f64>() > 0.8 {
            aggressive(req, req.min_raise)
        } else {
            PlayerAction::Check
        }
    }
}

impl AIOpponent for SimpleAI {
    fn get_action(&mut self, view: &TableSnapshot, req: &ActionRequest) -> PlayerAction {
        if req.stack == 0 {
            return PlayerAction::Check;
        }
        let hole = view
            .players
            .get(req.player_id)
            .and_then(|p| p.hole_cards.clone())
            .unwrap_or_default();
        let made = Self::made_hand(&hole, &view.community);
        self.decide(made, req, view.pot_total)
    }

    fn name(&self) -> &str {
        "SimpleAI"
    }
}
