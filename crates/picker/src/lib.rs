mod error;
mod picker;
mod settings;
mod state;

pub use error::*;
pub use picker::*;
pub use settings::*;
pub use state::*;
