pub mod initialize;
pub mod propose_manager;
pub mod accept_manager;
pub mod change_agent;
pub mod pause;
pub mod add_epoch;
pub mod correct_epoch;
pub mod approve_epoch;
pub mod claim;

pub use initialize::*;
pub use propose_manager::*;
pub use accept_manager::*;
pub use change_agent::*;
pub use pause::*;
pub use add_epoch::*;
pub use correct_epoch::*;
pub use approve_epoch::*;
pub use claim::*;
