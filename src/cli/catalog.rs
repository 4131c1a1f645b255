use std::io::Write;

use roulette::card::Card;
use roulette::{Config, Roulette};
use roulette_catalog::CatalogSource;

pub async fn list(config: Config, category: Option<String>) -> anyhow::Result<()> {
    let mut roulette = Roulette::new(super::connect(&config)?, config.shuffle_settings());
    roulette.load().await?;
    roulette.set_category(category);

    write_list(&roulette, &mut std::io::stdout().lock())
}

pub async fn categories(config: Config) -> anyhow::Result<()> {
    let mut roulette = Roulette::new(super::connect(&config)?, config.shuffle_settings());
    roulette.load().await?;

    write_categories(&roulette, &mut std::io::stdout().lock())
}

fn write_list<S: CatalogSource>(
    roulette: &Roulette<S>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let foods = roulette.filtered();
    if foods.is_empty() {
        writeln!(out, "No foods in {}", roulette.selection())?;
        return Ok(());
    }

    for food in foods.iter() {
        writeln!(out, "{}\n", Card(food))?;
    }

    Ok(())
}

fn write_categories<S: CatalogSource>(
    roulette: &Roulette<S>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for category in roulette.categories() {
        if category.is_empty() {
            writeln!(out, "(uncategorized)")?;
        } else {
            writeln!(out, "{category}")?;
        }
    }

    Ok(())
}
