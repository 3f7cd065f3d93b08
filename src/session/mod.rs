pub mod flow;
pub mod state;
pub mod wallet;

pub use state::{Session, SessionState, UserProfile};
pub use wallet::WalletState;
