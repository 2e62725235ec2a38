use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{next_seat, BlindSeats, Button, Phase};
use crate::hand::{compare_hands, evaluate_hand, HandStrength};
use crate::logger::{Blind, EventLog, GameEvent, HandSummary, PotAward};
use crate::player::{Player, PlayerAction, STARTING_STACK};
use crate::pot::{build_pots, pot_total, Pot};
use crate::rules::{validate_action, BetContext, ValidatedAction};

/// Largest table the deck can serve: 22 × 2 hole cards + 5 board + 3 burns = 52.
pub const MAX_SEATS: usize = 22;

/// Consecutive illegal actions tolerated from one provider before
/// [`Engine::play_hand`] folds that seat.
pub const MAX_REJECTED_ACTIONS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub is_human: bool,
    pub stack: u32,
}

/// Table setup: blinds, seats in clockwise order and the shuffle seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    pub seats: Vec<SeatConfig>,
    /// Deck seed; `None` picks a random one
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::with_players(2, STARTING_STACK)
    }
}

impl TableConfig {
    /// Seat 0 is the human ("You"), the others are AI seats named `AI-n`.
    pub fn with_players(players: usize, stack: u32) -> Self {
        let seats = (0..players)
            .map(|i| SeatConfig {
                name: if i == 0 {
                    "You".to_string()
                } else {
                    format!("AI-{}", i)
                },
                is_human: i == 0,
                stack,
            })
            .collect();
        Self {
            small_blind: 10,
            big_blind: 20,
            seats,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_blinds(mut self, small_blind: u32, big_blind: u32) -> Self {
        self.small_blind = small_blind;
        self.big_blind = big_blind;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.seats.len() < 2 || self.seats.len() > MAX_SEATS {
            return Err(GameError::InvalidConfig(format!(
                "table needs 2..={} seats, got {}",
                MAX_SEATS,
                self.seats.len()
            )));
        }
        if self.small_blind == 0 || self.big_blind < self.small_blind {
            return Err(GameError::InvalidConfig(format!(
                "blinds must satisfy 0 < small ({}) <= big ({})",
                self.small_blind, self.big_blind
            )));
        }
        Ok(())
    }
}

/// The single pending decision: who acts and what they face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub player_id: usize,
    /// Chips needed to match the current bet level. May exceed `stack`; such a
    /// call is an all-in call
    pub to_call: u32,
    pub raise_allowed: bool,
    /// Bet level to match this round (0 when nobody has bet)
    pub current_bet_level: u32,
    /// Smallest legal bet or raise increment
    pub min_raise: u32,
    pub stack: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: usize,
    pub name: String,
    pub is_human: bool,
    pub stack: u32,
    pub current_bet: u32,
    pub total_bet: u32,
    pub in_hand: bool,
    pub all_in: bool,
    /// `None` when hidden from the viewer
    pub hole_cards: Option<Vec<Card>>,
}

/// Immutable picture of the table for rendering and for action providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub hand_number: u64,
    pub phase: Phase,
    pub community: Vec<Card>,
    pub players: Vec<PlayerView>,
    pub pots: Vec<Pot>,
    pub pot_total: u32,
    pub dealer: usize,
    pub current_player: Option<usize>,
    pub last_bet: u32,
    pub min_raise: u32,
}

/// Source of decisions for one seat: a human input surface or an AI policy.
pub trait ActionProvider {
    fn decide(&mut self, view: &TableSnapshot, request: &ActionRequest) -> PlayerAction;
}

impl<F> ActionProvider for F
where
    F: FnMut(&TableSnapshot, &ActionRequest) -> PlayerAction,
{
    fn decide(&mut self, view: &TableSnapshot, request: &ActionRequest) -> PlayerAction {
        self(view, request)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandProgress {
    AwaitingAction(ActionRequest),
    Complete(HandSummary),
}

/// Betting engine for one table. Owns the deck, the players and the pots,
/// and runs one hand at a time.
///
/// The engine never blocks: [`Engine::pending_action`] tells the caller whose
/// decision is awaited and [`Engine::apply_action`] feeds it back.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::{Engine, HandProgress, TableConfig};
/// use holdem_engine::player::PlayerAction;
///
/// let mut engine = Engine::new(TableConfig::default().with_seed(7)).unwrap();
/// let mut progress = engine.start_hand().unwrap();
/// while let HandProgress::AwaitingAction(req) = progress {
///     let action = if req.to_call > 0 { PlayerAction::Call } else { PlayerAction::Check };
///     progress = engine.apply_action(req.player_id, action).unwrap();
/// }
/// assert_eq!(engine.community().len(), 5);
/// assert_eq!(engine.players().iter().map(|p| p.stack()).sum::<u32>(), 2000);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    seed: u64,
    players: Vec<Player>,
    small_blind: u32,
    big_blind: u32,
    button: Button,
    phase: Phase,
    community: Vec<Card>,
    pots: Vec<Pot>,
    /// Seat whose decision is pending
    current: Option<usize>,
    /// Seats that still have to respond to the latest bet this round
    owes: Vec<bool>,
    last_bet: u32,
    min_raise: u32,
    hand_number: u64,
    events: EventLog,
    last_summary: Option<HandSummary>,
}

impl Engine {
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let players: Vec<Player> = config
            .seats
            .iter()
            .enumerate()
            .map(|(i, s)| Player::new(i, s.name.clone(), s.is_human, s.stack))
            .collect();
        let seats = players.len();
        Ok(Self {
            deck: Deck::new_with_seed(seed),
            seed,
            players,
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            button: Button::new(0),
            phase: Phase::PreDeal,
            community: Vec::with_capacity(5),
            pots: Vec::new(),
            current: None,
            owes: vec![false; seats],
            last_bet: 0,
            min_raise: config.big_blind,
            hand_number: 0,
            events: EventLog::default(),
            last_summary: None,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: usize) -> Result<&Player, GameError> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn pot_total(&self) -> u32 {
        pot_total(&self.pots)
    }

    pub fn dealer(&self) -> usize {
        self.button.index()
    }

    pub fn current_player(&self) -> Option<usize> {
        self.current
    }

    pub fn blinds(&self) -> (u32, u32) {
        (self.small_blind, self.big_blind)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    pub fn last_bet(&self) -> u32 {
        self.last_bet
    }

    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn last_summary(&self) -> Option<&HandSummary> {
        self.last_summary.as_ref()
    }

    /// Fewer than two players have chips; no further hand can start.
    pub fn is_game_over(&self) -> bool {
        self.players.iter().filter(|p| p.stack() > 0).count() < 2
    }

    /// Stacks plus every chip in the pots. Constant during a hand.
    pub fn total_chips(&self) -> u32 {
        self.players.iter().map(|p| p.stack()).sum::<u32>() + self.pot_total()
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Starts the next hand: reshuffle, reset per-hand state, deal, post the
    /// blinds and open pre-flop betting.
    pub fn start_hand(&mut self) -> Result<HandProgress, GameError> {
        if self.phase.is_betting() {
            return Err(GameError::HandInProgress);
        }
        if self.is_game_over() {
            return Err(GameError::NotEnoughPlayers);
        }

        self.phase = Phase::PreDeal;
        self.community.clear();
        self.deck.shuffle();
        for p in &mut self.players {
            p.reset_for_hand();
        }
        self.button.settle(&self.players);
        self.hand_number += 1;
        self.current = None;
        self.owes.iter_mut().for_each(|o| *o = false);
        self.last_bet = 0;
        self.min_raise = self.big_blind;
        self.last_summary = None;
        self.pots = build_pots(&self.players);

        let dealer = self.players[self.button.index()].name().to_string();
        self.events.push(GameEvent::HandStarted {
            hand: self.hand_number,
            dealer,
        });

        self.deal_hole_cards()?;
        let seats = self
            .button
            .blind_seats(&self.players)
            .ok_or(GameError::NotEnoughPlayers)?;
        self.post_blinds(seats);

        self.phase = Phase::PreFlop;
        tracing::debug!(hand = self.hand_number, dealer = self.button.index(), "pre-flop betting opens");
        self.open_round(seats.first_to_act);
        if self.current.is_none() {
            self.close_rounds()?;
        }
        Ok(self.progress())
    }

    /// The decision the engine is waiting for, if any.
    pub fn pending_action(&self) -> Option<ActionRequest> {
        let id = self.current?;
        let ctx = self.bet_context(id);
        Some(ActionRequest {
            player_id: id,
            to_call: ctx.to_call(),
            raise_allowed: ctx.raise_allowed,
            current_bet_level: ctx.last_bet,
            min_raise: ctx.min_raise,
            stack: ctx.stack,
        })
    }

    /// Applies one decision from the seat whose turn it is.
    ///
    /// An illegal action is rejected with an error and leaves every stack,
    /// pot and obligation untouched.
    pub fn apply_action(
        &mut self,
        player_id: usize,
        action: PlayerAction,
    ) -> Result<HandProgress, GameError> {
        if !self.phase.is_betting() {
            return Err(GameError::NoHandInProgress);
        }
        let expected = self.current.ok_or(GameError::NoHandInProgress)?;
        if player_id >= self.players.len() {
            return Err(GameError::UnknownPlayer(player_id));
        }
        if player_id != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: player_id,
            });
        }

        let ctx = self.bet_context(player_id);
        let validated = match validate_action(&ctx, action) {
            Ok(v) => v,
            Err(e) => {
                self.events.push(GameEvent::ActionRejected {
                    player: self.players[player_id].name().to_string(),
                    action,
                    reason: e.to_string(),
                });
                return Err(e);
            }
        };

        self.execute(player_id, validated);
        self.advance(player_id)?;
        Ok(self.progress())
    }

    /// Plays one full hand, prompting `providers[seat]` for every decision.
    /// Rejected actions are asked for again; after [`MAX_REJECTED_ACTIONS`]
    /// rejections in a row the seat is folded.
    pub fn play_hand(
        &mut self,
        providers: &mut [Box<dyn ActionProvider + '_>],
    ) -> Result<HandSummary, GameError> {
        if providers.len() != self.players.len() {
            return Err(GameError::InvalidConfig(format!(
                "expected {} action providers, got {}",
                self.players.len(),
                providers.len()
            )));
        }
        let mut progress = self.start_hand()?;
        let mut rejected = 0u32;
        loop {
            let req = match progress {
                HandProgress::Complete(summary) => return Ok(summary),
                HandProgress::AwaitingAction(req) => req,
            };
            let view = self.view_for(req.player_id);
            let action = providers[req.player_id].decide(&view, &req);
            progress = match self.apply_action(req.player_id, action) {
                Ok(p) => {
                    rejected = 0;
                    p
                }
                Err(e) => {
                    rejected += 1;
                    tracing::debug!(player = req.player_id, error = %e, rejected, "action rejected");
                    if rejected < MAX_REJECTED_ACTIONS {
                        self.progress()
                    } else {
                        rejected = 0;
                        self.events.push(GameEvent::ForcedFold {
                            player: self.players[req.player_id].name().to_string(),
                        });
                        self.apply_action(req.player_id, PlayerAction::Fold)?
                    }
                }
            };
        }
    }

    /// Full snapshot with every hole card visible.
    pub fn snapshot(&self) -> TableSnapshot {
        self.build_snapshot(|_| true)
    }

    /// Snapshot as seen from one seat: other players' hole cards stay hidden
    /// unless they were shown down.
    pub fn view_for(&self, viewer: usize) -> TableSnapshot {
        let shown: Vec<usize> = self
            .last_summary
            .as_ref()
            .map(|s| s.showdown.iter().map(|(id, _)| *id).collect())
            .unwrap_or_default();
        self.build_snapshot(|id| id == viewer || shown.contains(&id))
    }

    fn build_snapshot(&self, reveal: impl Fn(usize) -> bool) -> TableSnapshot {
        let players = self
            .players
            .iter()
            .map(|p| PlayerView {
                id: p.id(),
                name: p.name().to_string(),
                is_human: p.is_human(),
                stack: p.stack(),
                current_bet: p.current_bet(),
                total_bet: p.total_bet(),
                in_hand: p.in_hand(),
                all_in: p.is_all_in(),
                hole_cards: reveal(p.id()).then(|| p.hole_cards().to_vec()),
            })
            .collect();
        TableSnapshot {
            hand_number: self.hand_number,
            phase: self.phase,
            community: self.community.clone(),
            players,
            pots: self.pots.clone(),
            pot_total: self.pot_total(),
            dealer: self.button.index(),
            current_player: self.current,
            last_bet: self.last_bet,
            min_raise: self.min_raise,
        }
    }

    fn progress(&self) -> HandProgress {
        match self.pending_action() {
            Some(req) => HandProgress::AwaitingAction(req),
            None => HandProgress::Complete(self.last_summary.clone().unwrap_or_else(|| {
                HandSummary {
                    hand_number: self.hand_number,
                    board: self.community.clone(),
                    awards: Vec::new(),
                    showdown: Vec::new(),
                }
            })),
        }
    }

    fn bet_context(&self, id: usize) -> BetContext {
        let p = &self.players[id];
        BetContext {
            stack: p.stack(),
            current_bet: p.current_bet(),
            last_bet: self.last_bet,
            min_raise: self.min_raise,
            raise_allowed: self
                .players
                .iter()
                .any(|q| q.id() != id && q.can_act()),
        }
    }

    fn live_count(&self) -> usize {
        self.players.iter().filter(|p| p.in_hand()).count()
    }

    /// One card per player per pass, starting left of the dealer.
    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        let n = self.players.len();
        let dealer = self.button.index();
        for _ in 0..2 {
            for step in 1..=n {
                let seat = (dealer + step) % n;
                if self.players[seat].in_hand() {
                    let c = self.deck.draw()?;
                    self.players[seat].give_card(c)?;
                }
            }
        }
        Ok(())
    }

    /// Forced bets of `min(stack, blind)`. The level to match is the full big
    /// blind even when the big blind is short.
    fn post_blinds(&mut self, seats: BlindSeats) {
        for (seat, blind, amount) in [
            (seats.small_blind, Blind::Small, self.small_blind),
            (seats.big_blind, Blind::Big, self.big_blind),
        ] {
            let p = &mut self.players[seat];
            let paid = p.commit(amount);
            let event = GameEvent::BlindPosted {
                player: p.name().to_string(),
                blind,
                amount: paid,
                all_in: p.is_all_in(),
            };
            self.events.push(event);
        }
        self.last_bet = self.big_blind;
        self.min_raise = self.big_blind;
        self.pots = build_pots(&self.players);
    }

    /// Marks who owes a decision this round and picks the first of them at
    /// or after `start`. Nobody owes anything when fewer than two players
    /// can still bet and the remaining one has matched.
    fn open_round(&mut self, start: usize) {
        let able = self.players.iter().filter(|p| p.can_act()).count();
        let last_bet = self.last_bet;
        for (owes, p) in self.owes.iter_mut().zip(&self.players) {
            *owes = p.can_act() && (able >= 2 || p.current_bet() < last_bet);
        }
        let n = self.players.len();
        let owes = &self.owes;
        self.current = next_seat(&self.players, (start + n - 1) % n, |p| owes[p.id()]);
    }

    fn execute(&mut self, id: usize, action: ValidatedAction) {
        let p = &mut self.players[id];
        match action {
            ValidatedAction::Fold => p.fold(),
            ValidatedAction::Check => {}
            _ => {
                p.commit(action.chips());
            }
        }
        let new_bet = p.current_bet();
        let event = GameEvent::ActionTaken {
            player: p.name().to_string(),
            action,
            all_in: p.is_all_in(),
        };

        self.owes[id] = false;
        if new_bet > self.last_bet {
            // Only a full raise moves the minimum; a short all-in still reopens action
            let increment = new_bet - self.last_bet;
            if increment >= self.min_raise {
                self.min_raise = increment;
            }
            self.last_bet = new_bet;
            for (i, (owes, q)) in self.owes.iter_mut().zip(&self.players).enumerate() {
                if i != id && q.can_act() {
                    *owes = true;
                }
            }
        }
        self.pots = build_pots(&self.players);
        self.events.push(event);
    }

    /// Moves the turn on from `after`, closing finished rounds.
    fn advance(&mut self, after: usize) -> Result<(), GameError> {
        if self.live_count() <= 1 {
            return self.resolve_showdown();
        }
        let owes = &self.owes;
        self.current = next_seat(&self.players, after, |p| owes[p.id()]);
        if self.current.is_none() {
            self.close_rounds()?;
        }
        Ok(())
    }

    /// Ends the current betting round and keeps dealing streets until someone
    /// owes a decision or the hand reaches showdown.
    fn close_rounds(&mut self) -> Result<(), GameError> {
        while self.current.is_none() && self.phase != Phase::Showdown {
            self.end_betting_round()?;
        }
        Ok(())
    }

    fn end_betting_round(&mut self) -> Result<(), GameError> {
        for p in &mut self.players {
            p.reset_round();
        }
        self.last_bet = 0;
        self.min_raise = self.big_blind;

        if self.live_count() <= 1 {
            return self.resolve_showdown();
        }
        let Some((phase, count)) = self.phase.next_street() else {
            return self.resolve_showdown();
        };

        self.deck.burn()?;
        let cards = self.deck.draw_n(count)?;
        self.community.extend(cards);
        self.phase = phase;
        self.events.push(GameEvent::PhaseChanged {
            phase,
            board: self.community.clone(),
        });

        let start = self
            .button
            .first_to_act_postflop(&self.players)
            .unwrap_or(self.button.index());
        self.open_round(start);
        Ok(())
    }

    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        self.phase = Phase::Showdown;
        self.current = None;
        self.owes.iter_mut().for_each(|o| *o = false);
        self.events.push(GameEvent::PhaseChanged {
            phase: Phase::Showdown,
            board: self.community.clone(),
        });

        let live: Vec<usize> = self
            .players
            .iter()
            .filter(|p| p.in_hand())
            .map(|p| p.id())
            .collect();
        let pots = build_pots(&self.players);
        let mut awards = Vec::new();
        let mut showdown = Vec::new();

        match live.as_slice() {
            [] => {
                let msg = format!(
                    "showdown with nobody in the hand; {} chips not awarded",
                    pot_total(&pots)
                );
                self.events.push(GameEvent::Warning(msg));
                self.pots = pots;
            }
            [winner] => {
                let amount = pot_total(&pots);
                self.credit(*winner, amount, 0, true, &mut awards);
                self.pots.clear();
            }
            _ => {
                for &id in &live {
                    let mut cards = self.players[id].hole_cards().to_vec();
                    cards.extend_from_slice(&self.community);
                    let strength = evaluate_hand(&cards)?;
                    self.events.push(GameEvent::ShowdownHand {
                        player: self.players[id].name().to_string(),
                        strength: strength.clone(),
                    });
                    showdown.push((id, strength));
                }
                for (index, pot) in pots.iter().enumerate() {
                    let winners = self.pot_winners(pot, &showdown);
                    self.split(pot.amount, index, &winners, &mut awards);
                }
                self.pots.clear();
            }
        }

        for p in &mut self.players {
            p.reset_round();
        }
        self.button.rotate(&self.players);
        self.last_summary = Some(HandSummary {
            hand_number: self.hand_number,
            board: self.community.clone(),
            awards,
            showdown,
        });
        Ok(())
    }

    /// Best hands among the pot's eligible players, in payout order (first
    /// seat left of the dealer first). A pot nobody is eligible for goes to
    /// the best live hand.
    fn pot_winners(&self, pot: &Pot, showdown: &[(usize, HandStrength)]) -> Vec<usize> {
        let mut contenders: Vec<&(usize, HandStrength)> = showdown
            .iter()
            .filter(|(id, _)| pot.is_eligible(*id))
            .collect();
        if contenders.is_empty() {
            contenders = showdown.iter().collect();
        }
        let Some(best) = contenders
            .iter()
            .map(|(_, s)| s)
            .max_by(|a, b| compare_hands(a, b))
        else {
            return Vec::new();
        };
        let mut winners: Vec<usize> = contenders
            .iter()
            .filter(|(_, s)| compare_hands(s, best).is_eq())
            .map(|(id, _)| *id)
            .collect();
        let n = self.players.len();
        let dealer = self.button.index();
        winners.sort_by_key(|&id| (id + n - dealer - 1) % n);
        winners
    }

    /// Even split; odd chips go one each to the winners in payout order.
    fn split(&mut self, amount: u32, pot: usize, winners: &[usize], awards: &mut Vec<PotAward>) {
        if winners.is_empty() {
            return;
        }
        let count = winners.len() as u32;
        let share = amount / count;
        let mut odd = amount % count;
        for &id in winners {
            let extra = if odd > 0 {
                odd -= 1;
                1
            } else {
                0
            };
            self.credit(id, share + extra, pot, false, awards);
        }
    }

    fn credit(
        &mut self,
        id: usize,
        amount: u32,
        pot: usize,
        uncontested: bool,
        awards: &mut Vec<PotAward>,
    ) {
        if amount == 0 {
            return;
        }
        let p = &mut self.players[id];
        p.add_chips(amount);
        self.events.push(GameEvent::PotAwarded {
            player: p.name().to_string(),
            amount,
            pot,
            uncontested,
        });
        awards.push(PotAward {
            player_id: id,
            amount,
            pot,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::cards::parse_cards;

    fn engine(stacks: &[u32]) -> Engine {
        let mut cfg = TableConfig::with_players(stacks.len(), STARTING_STACK).with_seed(42);
        for (seat, &stack) in cfg.seats.iter_mut().zip(stacks) {
            seat.stack = stack;
        }
        Engine::new(cfg).unwrap()
    }

    #[test]
    fn config_rejects_bad_tables() {
        assert!(TableConfig::with_players(1, 100).validate().is_err());
        assert!(TableConfig::with_players(23, 100).validate().is_err());
        assert!(TableConfig::default().with_blinds(20, 10).validate().is_err());
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn rejected_action_leaves_state_untouched() {
        let mut eng = engine(&[1000, 1000]);
        eng.start_hand().unwrap();
        let before = eng.snapshot();
        let req = eng.pending_action().unwrap();
        let err = eng.apply_action(req.player_id, PlayerAction::Check).unwrap_err();
        assert_eq!(err, GameError::CannotCheck { to_call: 10 });
        assert_eq!(eng.snapshot(), before);
    }

    #[test]
    fn acting_out_of_turn_is_rejected() {
        let mut eng = engine(&[1000, 1000, 1000]);
        eng.start_hand().unwrap();
        let req = eng.pending_action().unwrap();
        let other = (req.player_id + 1) % 3;
        assert_eq!(
            eng.apply_action(other, PlayerAction::Fold),
            Err(GameError::NotPlayersTurn {
                expected: req.player_id,
                actual: other
            })
        );
    }

    #[test]
    fn odd_chip_goes_left_of_dealer() {
        let mut eng = engine(&[1000, 1000, 1000]);
        assert_eq!(eng.dealer(), 0);
        // Both seats play the board
        let board = parse_cards("Ah Kd Qs Jc Th 2c 3d").unwrap();
        let strength = evaluate_hand(&board).unwrap();
        let showdown = vec![(0, strength.clone()), (2, strength)];
        let pot = Pot {
            amount: 31,
            eligible: BTreeSet::from([0, 2]),
        };

        let winners = eng.pot_winners(&pot, &showdown);
        assert_eq!(winners, vec![2, 0]);

        let mut awards = Vec::new();
        eng.split(pot.amount, 0, &winners, &mut awards);
        assert_eq!(awards[0], PotAward { player_id: 2, amount: 16, pot: 0 });
        assert_eq!(awards[1], PotAward { player_id: 0, amount: 15, pot: 0 });
    }

    #[test]
    fn pot_winners_skip_ineligible_better_hands() {
        let eng = engine(&[1000, 1000, 1000]);
        let nuts = evaluate_hand(&parse_cards("Ah Ad Ac As Kh").unwrap()).unwrap();
        let pair = evaluate_hand(&parse_cards("2h 2d 9c 7s 4h").unwrap()).unwrap();
        let showdown = vec![(0, nuts), (1, pair)];
        let side = Pot {
            amount: 200,
            eligible: BTreeSet::from([1, 2]),
        };
        assert_eq!(eng.pot_winners(&side, &showdown), vec![1]);
    }

    #[test]
    fn view_hides_opponent_cards() {
        let mut eng = engine(&[1000, 1000]);
        eng.start_hand().unwrap();
        let view = eng.view_for(0);
        assert_eq!(view.players[0].hole_cards.as_ref().map(Vec::len), Some(2));
        assert!(view.players[1].hole_cards.is_none());
        assert!(eng.snapshot().players[1].hole_cards.is_some());
    }
}
