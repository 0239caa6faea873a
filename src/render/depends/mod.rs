pub mod dates;
pub mod styles;
