pub mod card;
pub use card::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod suit;
pub use suit::*;
