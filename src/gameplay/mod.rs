pub mod action;
pub use action::*;

pub mod game;
pub use game::*;

pub mod hand;
pub use hand::*;

pub mod seat;
pub use seat::*;
