use std::fmt::Display;

#[derive(Debug, PartialEq, Clone)]
pub enum Comment {
    Single(String),
    Delimited(String),
}

impl Comment {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Single(note) => note.as_ref(),
            Self::Delimited(note) => note.as_ref(),
        }
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(c) => write!(f, "--{}", c),
            Self::Delimited(c) => write!(f, "/*{}*/", c),
        }
    }
}
