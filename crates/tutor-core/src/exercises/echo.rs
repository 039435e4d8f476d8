//! Echo three numbers

pub const PROMPT: &str = "Enter three numbers: ";

/// `You entered 4, 5, and 6.`
pub fn entered_message(values: [i64; 3]) -> String {
    let [x, y, z] = values;
    format!("You entered {}, {}, and {}.", x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entered_message() {
        assert_eq!(entered_message([4, 5, 6]), "You entered 4, 5, and 6.");
        assert_eq!(entered_message([-1, 0, 1]), "You entered -1, 0, and 1.");
    }
}
