use crate::board::Tile;
use crate::path::core::Path;

/// Binary operators available on operator tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Rem,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '%' => Some(Operator::Rem),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Rem => '%',
        }
    }

    /// `lhs OP rhs`. A zero divisor makes `%` yield 0; overflow wraps.
    pub fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs.wrapping_add(rhs),
            Operator::Sub => lhs.wrapping_sub(rhs),
            Operator::Mul => lhs.wrapping_mul(rhs),
            Operator::Rem => {
                if rhs == 0 {
                    0
                } else {
                    lhs.wrapping_rem(rhs)
                }
            }
        }
    }
}

/// Evaluate tiles strictly left to right with no operator precedence.
///
/// The first number seeds the accumulator; every later number is combined
/// with it using the most recent operator. An empty sequence is 0.
pub fn evaluate<'a, I>(tiles: I) -> i64
where
    I: IntoIterator<Item = &'a Tile>,
{
    let mut accumulator: Option<i64> = None;
    let mut pending: Option<Operator> = None;

    for tile in tiles {
        if let Some(number) = tile.digit() {
            accumulator = Some(match (accumulator, pending) {
                (None, _) => number,
                (Some(acc), Some(op)) => op.apply(acc, number),
                (Some(acc), None) => acc,
            });
        } else if let Some(op) = Operator::from_symbol(tile.symbol()) {
            pending = Some(op);
        }
    }

    accumulator.unwrap_or(0)
}

impl Path {
    pub fn evaluate(&self) -> i64 {
        evaluate(self.tiles())
    }
}
