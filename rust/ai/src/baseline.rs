//! Deterministic rule-based opponent.
//!
//! Pre-flop it rates the two hole cards from a fixed chart; after the flop it
//! evaluates hole cards plus board and weighs the price of a call against the
//! pot. The same table state always yields the same action.

use holdem_engine::cards::Card;
use holdem_engine::engine::{ActionRequest, TableSnapshot};
use holdem_engine::hand::{evaluate_hand, Category};
use holdem_engine::player::PlayerAction;

use crate::{aggressive, AIOpponent};

/// Rule-based policy.
///
/// # Strategy
///
/// **Preflop:**
/// - Strong hands (high pairs, AK, AQ): raise or call
/// - Medium hands (suited connectors, Ax, small pairs): call if cheap
/// - Weak hands: fold to bets, check when free
///
/// **Postflop:**
/// - Two pair or better: bet or call
/// - One pair: check, call small bets
/// - Weak hands: fold unless the price is small relative to the pot
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

/// Strength rating on a 0-10 scale.
type Strength = u8;

fn by_suit(suited: bool, yes: Strength, no: Strength) -> Strength {
    if suited {
        yes
    } else {
        no
    }
}

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Rates two hole cards:
    /// - 9-10: premium (AA-JJ, AKs)
    /// - 7-8: strong (TT-99, AK, AQ, KQs)
    /// - 5-6: medium (88-77, AJ, suited broadways)
    /// - 3-4: marginal (small pairs, Ax, suited connectors)
    /// - 0-2: weak
    pub(crate) fn preflop_strength(hole: [Card; 2]) -> Strength {
        let (r1, r2) = (hole[0].rank.value(), hole[1].rank.value());
        let (high, low) = (r1.max(r2), r1.min(r2));
        let suited = hole[0].suit == hole[1].suit;

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => by_suit(suited, 10, 8),
            (14, 12) => by_suit(suited, 8, 7),
            (14, 11) => by_suit(suited, 7, 6),
            (14, 10) => by_suit(suited, 6, 5),
            (14, _) => by_suit(suited, 5, 4),
            (13, 12) => by_suit(suited, 7, 6),
            (13, 11) | (12, 11) => by_suit(suited, 6, 5),
            (13, 10) | (12, 10) => by_suit(suited, 5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Rates hole cards plus a board of 3 to 5 cards; `None` before the flop.
    pub(crate) fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<Strength> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let hand = evaluate_hand(&cards).ok()?;

        let base = match hand.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        let kicker_boost = u8::from(hand.kickers.first().is_some_and(|&k| k >= 12));
        Some((base + kicker_boost).min(10))
    }

    /// Share of the final pot this call would buy: pot / (pot + call).
    pub(crate) fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    fn facing_bet(strength: Strength, req: &ActionRequest, pot: u32) -> PlayerAction {
        let to_call = req.to_call;
        if to_call >= req.stack {
            return if strength >= 7 {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
        }
        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => {
                if req.stack > to_call + req.min_raise {
                    aggressive(req, (pot / 2).min(req.stack - to_call))
                } else {
                    PlayerAction::Call
                }
            }
            7..=8 => PlayerAction::Call,
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => PlayerAction::Call,
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }

    fn unopened(strength: Strength, req: &ActionRequest, pot: u32) -> PlayerAction {
        if req.stack < req.min_raise {
            return PlayerAction::Check;
        }
        match strength {
            9..=10 => aggressive(req, (pot * 2 / 3).min(req.stack)),
            7..=8 => aggressive(req, (pot / 2).min(req.stack)),
            _ => PlayerAction::Check,
        }
    }
}

impl AIOpponent for BaselineAI {
    fn get_action(&mut self, view: &TableSnapshot, req: &ActionRequest) -> PlayerAction {
        let hole = view
            .players
            .get(req.player_id)
            .and_then(|p| p.hole_cards.as_deref())
            .and_then(|cards| <[Card; 2]>::try_from(cards).ok());
        let Some(hole) = hole else {
            return if req.to_call == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };
        };

        let strength = Self::postflop_strength(hole, &view.community)
            .unwrap_or_else(|| Self::preflop_strength(hole));
        let pot = view.pot_total;
        if req.to_call == 0 {
            Self::unopened(strength, req, pot)
        } else {
            Self::facing_bet(strength, req, pot)
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;
    use holdem_engine::engine::{Engine, HandProgress, TableConfig};

    fn two(s: &str) -> [Card; 2] {
        let cards = parse_cards(s).unwrap();
        [cards[0], cards[1]]
    }

    #[test]
    fn premium_pairs_rate_highest() {
        assert_eq!(BaselineAI::preflop_strength(two("Ah As")), 10);
        assert_eq!(BaselineAI::preflop_strength(two("Kh Ks")), 10);
        assert_eq!(BaselineAI::preflop_strength(two("3h 3s")), 4);
    }

    #[test]
    fn ace_king_depends_on_suits() {
        assert_eq!(BaselineAI::preflop_strength(two("Ah Kh")), 10);
        assert_eq!(BaselineAI::preflop_strength(two("Ah Ks")), 8);
    }

    #[test]
    fn weak_and_connected_hands() {
        assert!(BaselineAI::preflop_strength(two("7h 2s")) <= 3);
        assert!((4..=6).contains(&BaselineAI::preflop_strength(two("9h 8h"))));
    }

    #[test]
    fn pot_odds() {
        assert!((BaselineAI::pot_odds(100, 50) - 0.667).abs() < 0.01);
        assert_eq!(BaselineAI::pot_odds(100, 0), 1.0);
    }

    #[test]
    fn postflop_uses_only_real_cards() {
        let board = parse_cards("Ad Kc Qh").unwrap();
        let s = BaselineAI::postflop_strength(two("Ah As"), &board).unwrap();
        assert!(s >= 6);
        assert_eq!(BaselineAI::postflop_strength(two("Ah As"), &board[..2]), None);
    }

    #[test]
    fn strong_hand_bets_when_unopened() {
        let req = ActionRequest {
            player_id: 0,
            to_call: 0,
            raise_allowed: true,
            current_bet_level: 0,
            min_raise: 20,
            stack: 1000,
        };
        assert_eq!(BaselineAI::unopened(10, &req, 90), PlayerAction::Bet(60));
        assert_eq!(BaselineAI::unopened(3, &req, 90), PlayerAction::Check);
    }

    #[test]
    fn actions_are_accepted_by_the_engine() {
        let mut engine = Engine::new(TableConfig::with_players(4, 1000).with_seed(42)).unwrap();
        let mut ai = BaselineAI::new();
        for _ in 0..10 {
            if engine.is_game_over() {
                break;
            }
            let mut progress = engine.start_hand().unwrap();
            while let HandProgress::AwaitingAction(req) = progress {
                let view = engine.view_for(req.player_id);
                let action = ai.get_action(&view, &req);
                progress = engine
                    .apply_action(req.player_id, action)
                    .unwrap_or_else(|e| panic!("{:?} rejected: {}", action, e));
            }
        }
        assert_eq!(engine.players().iter().map(|p| p.stack()).sum::<u32>(), 4000);
    }
}
