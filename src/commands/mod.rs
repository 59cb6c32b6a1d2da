pub mod completions;
pub mod dump;
pub mod inspect;
