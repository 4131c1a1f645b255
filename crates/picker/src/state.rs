use roulette_shared::FoodItem;

/// What the presentation layer should show right now.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationState {
    /// Current pick; transient while `in_progress`, final once it clears.
    pub displayed: Option<FoodItem>,
    pub in_progress: bool,
    /// Index of the latest shuffle step, only set while shuffling.
    pub step: Option<usize>,
    /// Sequence number of the latest triggered spin, 0 before the first.
    pub spin: u64,
}

impl RecommendationState {
    pub fn is_settled(&self) -> bool {
        !self.in_progress && self.displayed.is_some()
    }

    pub(crate) fn is_running(&self, spin: u64) -> bool {
        self.in_progress && self.spin == spin
    }
}
