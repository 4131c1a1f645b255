use roulette::Config;

pub async fn check(config: Config) -> anyhow::Result<()> {
    let source = super::connect(&config)?;

    tracing::info!(url = %config.supabase.url, table = source.table(), "checking connection");

    match source.check().await? {
        Some(count) => println!("Connected to '{}': {count} rows", source.table()),
        None => println!("Connected to '{}'", source.table()),
    }

    Ok(())
}
