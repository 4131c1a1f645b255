use std::future::Future;
use std::io::Write;

use roulette::card::{self, Card};
use roulette::{Config, Roulette};
use roulette_catalog::CatalogSource;
use roulette_shared::FoodItem;

pub async fn pick(config: Config, category: Option<String>) -> anyhow::Result<()> {
    let mut roulette = Roulette::new(super::connect(&config)?, config.shuffle_settings());
    roulette.load().await?;
    roulette.set_category(category);

    let cancel = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(err = %err, "unable to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    spin(&roulette, &mut std::io::stdout(), cancel).await?;

    Ok(())
}

/// Runs one recommendation, printing frames as they are published.
///
/// Resolves to the final pick, or `None` when there was nothing to pick from
/// or `cancel` completed first.
async fn spin<S, W, C>(
    roulette: &Roulette<S>,
    out: &mut W,
    cancel: C,
) -> anyhow::Result<Option<FoodItem>>
where
    S: CatalogSource,
    W: Write,
    C: Future<Output = ()>,
{
    let mut frames = roulette.subscribe();

    let Some(spin) = roulette.recommend()? else {
        writeln!(out, "Nothing to pick from in {}", roulette.selection())?;
        let categories = roulette.categories();
        if !categories.is_empty() {
            writeln!(out, "Available categories: {}", categories.join(", "))?;
        }
        return Ok(None);
    };

    let steps = roulette.settings().steps;
    tokio::pin!(cancel);

    loop {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }

                let state = frames.borrow_and_update().clone();
                if state.spin != spin.id() || !state.in_progress {
                    break;
                }
                if let (Some(step), Some(food)) = (state.step, &state.displayed) {
                    writeln!(out, "{}", card::frame(step, steps, food))?;
                    out.flush()?;
                }
            }
            _ = &mut cancel => {
                roulette.cancel();
                writeln!(out, "Cancelled")?;
                return Ok(None);
            }
        }
    }

    let choice = spin.settled().await;
    match &choice {
        Some(food) => writeln!(out, "\n{}", Card(food))?,
        None => writeln!(out, "Cancelled")?,
    }

    Ok(choice)
}
