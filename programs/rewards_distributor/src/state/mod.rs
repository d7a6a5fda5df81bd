pub mod rewards_state;
pub mod epoch_state;
pub mod claim_state;

pub use rewards_state::*;
pub use epoch_state::*;
pub use claim_state::*;
