pub mod card;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod ring;
pub mod spring;
pub mod state;

pub use card::*;
pub use constants::*;
pub use error::*;
pub use gesture::*;
pub use ring::*;
pub use spring::*;
pub use state::*;
