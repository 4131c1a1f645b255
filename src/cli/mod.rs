mod catalog;
mod check;
mod pick;

pub use catalog::{categories, list};
pub use check::check;
pub use pick::pick;

use roulette::Config;
use roulette_catalog::SupabaseSource;

fn connect(config: &Config) -> anyhow::Result<SupabaseSource> {
    let supabase = &config.supabase;

    Ok(SupabaseSource::new(
        &supabase.url,
        supabase.anon_key.as_str(),
        supabase.table.as_str(),
        supabase.timeout(),
    )?)
}
