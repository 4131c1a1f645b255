mod error;
mod source;
mod store;
mod supabase;

pub use error::*;
pub use source::*;
pub use store::*;
pub use supabase::*;
