pub mod number;
pub mod style;
pub mod text;
