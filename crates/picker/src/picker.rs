use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roulette_shared::FoodItem;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::{PickerError, RecommendationState, ShuffleSettings};

type SharedRng = Arc<Mutex<StdRng>>;

/// Slot-machine style recommender.
///
/// A spin shows `steps` random transient picks, one every `step_delay`,
/// then settles on one more independent random pick. Draws are uniform and
/// with replacement, so repeats are expected.
///
/// Only one spin runs at a time; the in-progress flag lives in the
/// published [`RecommendationState`] and is flipped inside the channel's
/// write lock, so two triggers can never both start. Every write a spin
/// makes is fenced on its spin number, which keeps a cancelled spin from
/// publishing anything afterwards.
///
/// Spins run on the tokio runtime; [`Picker::recommend`] must be called from
/// within one.
pub struct Picker {
    settings: ShuffleSettings,
    state: Arc<watch::Sender<RecommendationState>>,
    rng: SharedRng,
    running: Mutex<Option<AbortHandle>>,
}

/// Handle on a triggered spin.
///
/// Dropping it does not stop the spin.
#[derive(Debug)]
pub struct Spin {
    id: u64,
    task: JoinHandle<Option<FoodItem>>,
}

impl Spin {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Waits for the final pick; `None` when the spin was cancelled.
    pub async fn settled(self) -> Option<FoodItem> {
        self.task.await.ok().flatten()
    }
}

impl Picker {
    pub fn new(settings: ShuffleSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (state, _) = watch::channel(RecommendationState::default());

        Self {
            settings,
            state: Arc::new(state),
            rng: Arc::new(Mutex::new(rng)),
            running: Mutex::new(None),
        }
    }

    pub fn settings(&self) -> &ShuffleSettings {
        &self.settings
    }

    pub fn state(&self) -> RecommendationState {
        self.state.borrow().clone()
    }

    pub fn is_in_progress(&self) -> bool {
        self.state.borrow().in_progress
    }

    /// Every transient and final state, as it is published.
    pub fn subscribe(&self) -> watch::Receiver<RecommendationState> {
        self.state.subscribe()
    }

    /// Starts a spin over `candidates`.
    ///
    /// The list is captured as given: later changes to whatever it was
    /// derived from do not reach a running spin. Returns `Ok(None)` without
    /// touching the state when there is nothing to pick from, and
    /// [`PickerError::AlreadyInProgress`] while another spin is running.
    pub fn recommend(&self, candidates: Arc<[FoodItem]>) -> Result<Option<Spin>, PickerError> {
        if candidates.is_empty() {
            tracing::debug!("no candidates, nothing to recommend");
            return Ok(None);
        }

        let mut spin = 0;
        let started = self.state.send_if_modified(|state| {
            if state.in_progress {
                return false;
            }

            state.in_progress = true;
            state.displayed = None;
            state.step = None;
            state.spin += 1;
            spin = state.spin;
            true
        });

        if !started {
            tracing::debug!("recommendation already in progress");
            return Err(PickerError::AlreadyInProgress);
        }

        tracing::info!(spin, candidates = candidates.len(), "recommendation started");

        let task = tokio::spawn(shuffle(
            spin,
            candidates,
            self.settings.clone(),
            self.state.clone(),
            self.rng.clone(),
        ));

        *self.lock_running() = Some(task.abort_handle());

        Ok(Some(Spin { id: spin, task }))
    }

    /// Stops the running spin without a final pick and clears the display.
    ///
    /// Returns `false` when nothing was running.
    pub fn cancel(&self) -> bool {
        let mut spin = 0;
        let cancelled = self.state.send_if_modified(|state| {
            if !state.in_progress {
                return false;
            }

            state.in_progress = false;
            state.displayed = None;
            state.step = None;
            spin = state.spin;
            true
        });

        if let Some(handle) = self.lock_running().take() {
            handle.abort();
        }

        if cancelled {
            tracing::info!(spin, "recommendation cancelled");
        }

        cancelled
    }

    fn lock_running(&self) -> std::sync::MutexGuard<'_, Option<AbortHandle>> {
        self.running.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(ShuffleSettings::default())
    }
}

impl Drop for Picker {
    fn drop(&mut self) {
        let running = self
            .running
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(handle) = running.take() {
            handle.abort();
        }
    }
}

async fn shuffle(
    spin: u64,
    candidates: Arc<[FoodItem]>,
    settings: ShuffleSettings,
    state: Arc<watch::Sender<RecommendationState>>,
    rng: SharedRng,
) -> Option<FoodItem> {
    for step in 0..settings.steps {
        tokio::time::sleep(settings.step_delay).await;

        let pick = draw(&rng, &candidates);
        tracing::debug!(spin, step, food = %pick.name, "shuffle");

        let published = state.send_if_modified(|state| {
            if !state.is_running(spin) {
                return false;
            }

            state.displayed = Some(pick);
            state.step = Some(step);
            true
        });

        if !published {
            return None;
        }
    }

    let choice = draw(&rng, &candidates);
    let settled = state.send_if_modified(|state| {
        if !state.is_running(spin) {
            return false;
        }

        state.displayed = Some(choice.clone());
        state.in_progress = false;
        state.step = None;
        true
    });

    if !settled {
        return None;
    }

    tracing::info!(
        spin,
        food.id = %choice.id,
        food.name = %choice.name,
        "recommendation settled"
    );

    Some(choice)
}

fn draw(rng: &SharedRng, candidates: &[FoodItem]) -> FoodItem {
    let index = rng
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .random_range(0..candidates.len());

    candidates[index].clone()
}
