pub mod account;
pub mod pda;
pub mod token;

pub use account::*;
pub use pda::*;
pub use token::*;
