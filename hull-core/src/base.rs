//! Core functionalities.
mod env;
mod info;
mod step;
pub use env::Env;
pub use info::{Info, InfoValue};
pub use step::Step;
