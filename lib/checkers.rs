mod board;
mod color;
mod r#move;
mod outcome;
mod piece;
mod player;
mod rules;
mod square;

pub use board::*;
pub use color::*;
pub use outcome::*;
pub use piece::*;
pub use player::*;
pub use r#move::*;
pub use rules::*;
pub use square::*;
