use serde::{Deserialize, Serialize};
use std::fmt;

/// Number class tracked by the service. Each one owns exactly one window
/// and is bound to exactly one upstream source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Prime,
        Category::Fibonacci,
        Category::Even,
        Category::Random,
    ];

    /// Short identifier used in request paths
    pub fn code(&self) -> &'static str {
        match self {
            Category::Prime => "p",
            Category::Fibonacci => "f",
            Category::Even => "e",
            Category::Random => "r",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Prime => "prime",
            Category::Fibonacci => "fibonacci",
            Category::Even => "even",
            Category::Random => "random",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Category {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "p" => Ok(Category::Prime),
            "f" => Ok(Category::Fibonacci),
            "e" => Ok(Category::Even),
            "r" => Ok(Category::Random),
            _ => Err("Invalid number type. Must be one of: p, f, e, r"),
        }
    }
}
