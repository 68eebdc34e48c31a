pub use config::*;
pub use correlator::*;
pub use ledger::*;
pub use raffle::*;
pub use treasury::*;

pub mod config;
pub mod correlator;
pub mod ledger;
pub mod raffle;
pub mod treasury;
