use std::fmt;

use crate::path::core::Path;

impl fmt::Display for Path {
    /// Left-associated form: `*` and `%` bracket everything before them
    /// unless that is a single digit, so `2+3*4` reads `(2+3)*4`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut expression = String::with_capacity(self.len() * 2);

        for tile in self.tiles() {
            let symbol = tile.symbol();
            if matches!(symbol, '*' | '%') && expression.chars().count() != 1 {
                expression.insert(0, '(');
                expression.push(')');
            }
            expression.push(symbol);
        }

        write!(f, "{}", expression)
    }
}
