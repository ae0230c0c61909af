use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Represents the rank of a playing card from Ace (low) through King.
/// Discriminants give the run order used by meld validation: A=1 < 2 < ... < K=13.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1), always low
    #[serde(rename = "A")]
    Ace = 1,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    /// Jack (11)
    #[serde(rename = "J")]
    Jack,
    /// Queen (12)
    #[serde(rename = "Q")]
    Queen,
    /// King (13)
    #[serde(rename = "K")]
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        let rank = match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return None,
        };
        Some(rank)
    }

    /// Position in run order, Ace = 1 through King = 13.
    pub fn order(self) -> u8 {
        self as u8
    }

    /// Point value of the rank: A=1, 2-10 face value, J/Q/K=10.
    pub fn points(self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other as u32,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn parse(label: &str) -> Option<Rank> {
        all_ranks()
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label))
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards have no identity beyond their value; a standard deck holds each value once.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Long form used in the action log, e.g. `7 of hearts`.
    pub fn describe(&self) -> String {
        format!("{} of {}", self.rank.label(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Parses short codes such as `As`, `10h`, `Qd`, `7c` (suit letter last).
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(suit_char) = s.chars().last() else {
            return Err("empty card code".to_string());
        };
        let suit = match suit_char.to_ascii_lowercase() {
            'h' | '♥' => Suit::Hearts,
            'd' | '♦' => Suit::Diamonds,
            'c' | '♣' => Suit::Clubs,
            's' | '♠' => Suit::Spades,
            _ => return Err(format!("unknown suit in '{}'", s)),
        };
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let rank = Rank::parse(rank_part).ok_or_else(|| format!("unknown rank in '{}'", s))?;
        Ok(Card::new(rank, suit))
    }
}

/// Point value of a card: A=1, 2-10 face value, J/Q/K=10.
pub fn point_value(card: &Card) -> u32 {
    card.rank.points()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_values_follow_face_rules() {
        assert_eq!(point_value(&Card::new(Rank::Ace, Suit::Spades)), 1);
        assert_eq!(point_value(&Card::new(Rank::Seven, Suit::Hearts)), 7);
        assert_eq!(point_value(&Card::new(Rank::Ten, Suit::Clubs)), 10);
        assert_eq!(point_value(&Card::new(Rank::Jack, Suit::Clubs)), 10);
        assert_eq!(point_value(&Card::new(Rank::King, Suit::Diamonds)), 10);
    }

    #[test]
    fn rank_order_is_ace_low() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert_eq!(Rank::King.order(), 13);
        assert_eq!(Rank::from_u8(11), Some(Rank::Jack));
        assert_eq!(Rank::from_u8(14), None);
    }

    #[test]
    fn card_serializes_with_short_labels() {
        let c = Card::new(Rank::Queen, Suit::Spades);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"suit":"spades","rank":"Q"}"#);
        assert_eq!(c.describe(), "Q of spades");
        assert_eq!(Rank::parse("q"), Some(Rank::Queen));
    }

    #[test]
    fn parses_short_codes() {
        assert_eq!("10h".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("As".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("K♦".parse::<Card>(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert!("1x".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }
}
