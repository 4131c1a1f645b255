pub mod card;
pub mod config;
pub mod observability;
mod roulette;

pub use config::Config;
pub use roulette::Roulette;
