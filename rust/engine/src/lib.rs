//! # holdem-engine: Texas Hold'em Rules Engine
//!
//! Hand evaluation and a betting state machine for No-Limit Texas Hold'em
//! with 2 to 22 seats: blinds, betting rounds, side pots and showdown.
//! Shuffles come from a seeded RNG so every hand can be replayed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - Table state machine: dealing, betting rounds, showdown
//! - [`game`] - Phases, dealer button and seat order
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`player`] - Player state and actions
//! - [`pot`] - Main pot and side pot construction
//! - [`rules`] - Betting action validation
//! - [`logger`] - Game events and hand summaries
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate_hand(&cards).unwrap();
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.draw_n(5).unwrap(), b.draw_n(5).unwrap());
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use holdem_engine::engine::{ActionProvider, ActionRequest, Engine, TableConfig, TableSnapshot};
//! use holdem_engine::player::PlayerAction;
//!
//! fn always_call(_: &TableSnapshot, _: &ActionRequest) -> PlayerAction {
//!     PlayerAction::Call
//! }
//!
//! let mut engine = Engine::new(TableConfig::with_players(3, 1000).with_seed(1)).unwrap();
//! let mut providers: Vec<Box<dyn ActionProvider>> = (0..3)
//!     .map(|_| Box::new(always_call) as Box<dyn ActionProvider>)
//!     .collect();
//! let summary = engine.play_hand(&mut providers).unwrap();
//! assert_eq!(summary.awards.iter().map(|a| a.amount).sum::<u32>(), 60);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
