//! Best-five-of-seven hand evaluation.
//!
//! [`evaluate_hand`] takes 5 to 7 cards and returns the category of the best
//! five-card hand, the tie-break ranks used to order hands of the same
//! category, and the five physical cards that make the hand. Cards of equal
//! rank are picked in suit order so the result is a pure function of the
//! input multiset.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // tie-break ranks, ordered high -> low; a wheel straight has top rank 5
    pub kickers: Vec<u8>,
    pub best_five: Vec<Card>,
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, c) in self.best_five.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str(")")
    }
}

/// Ranks the best five-card hand that can be made from `cards`.
///
/// # Errors
///
/// [`GameError::NotEnoughCards`] when fewer than 5 cards are given.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate_hand, Category};
///
/// let wheel = parse_cards("Ah 2d 3s 4c 5h").unwrap();
/// let hs = evaluate_hand(&wheel).unwrap();
/// assert_eq!(hs.category, Category::Straight);
/// assert_eq!(hs.kickers, vec![5]);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength, GameError> {
    if cards.len() < 5 {
        return Err(GameError::NotEnoughCards { got: cards.len() });
    }

    // Rank descending, then suit order, so same-rank picks are stable
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(a.suit.cmp(&b.suit)));

    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut by_suit: [Vec<Card>; 4] = [vec![], vec![], vec![], vec![]];
    for &c in &sorted {
        rank_counts[c.rank.value() as usize] += 1;
        by_suit[suit_index(c.suit)].push(c);
    }

    let flush = by_suit.iter().find(|s| s.len() >= 5);

    // Straight flush / royal flush
    if let Some(suited) = flush {
        if let Some(high) = straight_high_from_mask(rank_mask(suited)) {
            let category = if high == 14 {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            };
            return Ok(HandStrength {
                category,
                kickers: vec![high],
                best_five: straight_cards(suited, high),
            });
        }
    }

    // Rank groups, highest rank first
    let quads = ranks_with_count(&rank_counts, |n| n == 4);
    let trips = ranks_with_count(&rank_counts, |n| n == 3);
    let pairs = ranks_with_count(&rank_counts, |n| n == 2);

    // Four of a kind
    if let Some(&quad) = quads.first() {
        let mut best = take_rank(&sorted, quad, 4);
        best.extend(highest_excluding(&sorted, &[quad], 1));
        return Ok(finish(Category::FourOfAKind, best, &[quad], 1));
    }

    // Full house: the second trips (if any) competes with the pairs
    if let Some(&trip) = trips.first() {
        let pair = trips
            .iter()
            .skip(1)
            .chain(pairs.iter())
            .copied()
            .max();
        if let Some(pair) = pair {
            let mut best = take_rank(&sorted, trip, 3);
            best.extend(take_rank(&sorted, pair, 2));
            return Ok(HandStrength {
                category: Category::FullHouse,
                kickers: vec![trip, pair],
                best_five: best,
            });
        }
    }

    // Flush
    if let Some(suited) = flush {
        let best: Vec<Card> = suited.iter().take(5).copied().collect();
        return Ok(HandStrength {
            category: Category::Flush,
            kickers: best.iter().map(|c| c.rank.value()).collect(),
            best_five: best,
        });
    }

    // Straight
    if let Some(high) = straight_high_from_mask(rank_mask(&sorted)) {
        return Ok(HandStrength {
            category: Category::Straight,
            kickers: vec![high],
            best_five: straight_cards(&sorted, high),
        });
    }

    // Three of a kind
    if let Some(&trip) = trips.first() {
        let mut best = take_rank(&sorted, trip, 3);
        best.extend(highest_excluding(&sorted, &[trip], 2));
        return Ok(finish(Category::ThreeOfAKind, best, &[trip], 2));
    }

    // Two pair
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut best = take_rank(&sorted, high, 2);
        best.extend(take_rank(&sorted, low, 2));
        best.extend(highest_excluding(&sorted, &[high, low], 1));
        return Ok(finish(Category::TwoPair, best, &[high, low], 1));
    }

    // One pair
    if let Some(&pair) = pairs.first() {
        let mut best = take_rank(&sorted, pair, 2);
        best.extend(highest_excluding(&sorted, &[pair], 3));
        return Ok(finish(Category::OnePair, best, &[pair], 3));
    }

    // High card: top 5 ranks
    let best: Vec<Card> = sorted.iter().take(5).copied().collect();
    Ok(HandStrength {
        category: Category::HighCard,
        kickers: best.iter().map(|c| c.rank.value()).collect(),
        best_five: best,
    })
}

/// Orders two evaluated hands: category first, then tie-break ranks left to
/// right with a missing entry counting as 0. `Equal` is a split pot.
pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => {
            let len = a.kickers.len().max(b.kickers.len());
            (0..len)
                .map(|i| {
                    let x = a.kickers.get(i).copied().unwrap_or(0);
                    let y = b.kickers.get(i).copied().unwrap_or(0);
                    x.cmp(&y)
                })
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        }
        ord => ord,
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Builds the tie-break vector from the grouped ranks plus the trailing
/// `kicker_count` cards of `best`.
fn finish(category: Category, best: Vec<Card>, groups: &[u8], kicker_count: usize) -> HandStrength {
    let mut kickers = groups.to_vec();
    kickers.extend(
        best.iter()
            .rev()
            .take(kicker_count)
            .rev()
            .map(|c| c.rank.value()),
    );
    HandStrength {
        category,
        kickers,
        best_five: best,
    }
}

fn ranks_with_count(rank_counts: &[u8; 15], pred: impl Fn(u8) -> bool) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| pred(rank_counts[r as usize]))
        .collect()
}

fn take_rank(sorted: &[Card], rank: u8, n: usize) -> Vec<Card> {
    sorted
        .iter()
        .filter(|c| c.rank.value() == rank)
        .take(n)
        .copied()
        .collect()
}

fn highest_excluding(sorted: &[Card], excluded: &[u8], n: usize) -> Vec<Card> {
    sorted
        .iter()
        .filter(|c| !excluded.contains(&c.rank.value()))
        .take(n)
        .copied()
        .collect()
}

fn rank_mask(cards: &[Card]) -> u16 {
    cards
        .iter()
        .fold(0u16, |m, c| m | (1u16 << c.rank.value()))
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    // Ace also plays low
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    for high in (5..=14u8).rev() {
        let window = 0b11111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}

/// One card per rank from `high` down to `high - 4`; rank 1 is the Ace.
fn straight_cards(sorted: &[Card], high: u8) -> Vec<Card> {
    ((high - 4)..=high)
        .rev()
        .filter_map(|v| {
            let rank = Rank::from_u8(v)?;
            sorted.iter().find(|c| c.rank == rank).copied()
        })
        .collect()
}
