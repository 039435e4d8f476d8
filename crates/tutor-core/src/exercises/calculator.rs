//! Four-function calculator over two doubles

use core::fmt;

use super::format::display_double;

pub const VALUE_PROMPT: &str = "Enter a double value: ";
pub const OPERATOR_PROMPT: &str = "Enter +, -, *, or /: ";

/// Arithmetic operator accepted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse an operator symbol. Anything other than `+ - * /` is `None`.
    pub fn parse(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator. Division by zero yields an IEEE infinity or NaN.
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Add => x + y,
            Self::Subtract => x - y,
            Self::Multiply => x * y,
            Self::Divide => x / y,
        }
    }

    /// `x op y is result`
    pub fn describe(self, x: f64, y: f64) -> String {
        format!(
            "{} {} {} is {}",
            display_double(x),
            self,
            display_double(y),
            display_double(self.apply(x, y))
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_symbols() {
        for symbol in ['+', '-', '*', '/'] {
            let op = Operator::parse(symbol).unwrap();
            assert_eq!(op.symbol(), symbol);
        }
        assert_eq!(Operator::parse('%'), None);
        assert_eq!(Operator::parse('x'), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(4.0, 2.5), 6.5);
        assert_eq!(Operator::Subtract.apply(4.0, 2.5), 1.5);
        assert_eq!(Operator::Multiply.apply(4.0, 2.5), 10.0);
        assert_eq!(Operator::Divide.apply(5.0, 2.0), 2.5);
        assert!(Operator::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_describe() {
        assert_eq!(Operator::Add.describe(4.0, 5.0), "4 + 5 is 9");
        assert_eq!(Operator::Divide.describe(1.0, 3.0), "1 / 3 is 0.333333");
        assert_eq!(Operator::Multiply.describe(1.5, -2.0), "1.5 * -2 is -3");
        assert_eq!(Operator::Divide.describe(7.0, 0.0), "7 / 0 is inf");
    }
}
