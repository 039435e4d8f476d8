//! Which of two people is older

pub fn name_prompt(index: u32) -> String {
    format!("Enter the name of person #{}: ", index)
}

pub fn age_prompt(name: &str) -> String {
    format!("Enter the age of {}: ", name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// `older (age a) is older than younger (age b).`
///
/// The first person is only named older when strictly older; a tie names
/// the second.
pub fn older_message(first: &Person, second: &Person) -> String {
    let (older, younger) = if first.age > second.age {
        (first, second)
    } else {
        (second, first)
    };
    format!(
        "{} (age {}) is older than {} (age {}).",
        older.name, older.age, younger.name, younger.age
    )
}
