use std::fmt;

use roulette_shared::FoodItem;

/// Terminal rendering of a food card.
///
/// ```text
/// Fried Chicken [chicken] ★ 4.5
///   #crispy #spicy
///   image: No Image
/// ```
pub struct Card<'a>(pub &'a FoodItem);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let food = self.0;

        write!(f, "{}", food.name)?;
        if !food.category.is_empty() {
            write!(f, " [{}]", food.category)?;
        }
        writeln!(f, " ★ {}", food.rating)?;

        if !food.tags.is_empty() {
            let tags: Vec<String> = food.tags.iter().map(|tag| format!("#{tag}")).collect();
            writeln!(f, "  {}", tags.join(" "))?;
        }

        write!(f, "  image: {}", food.image_or_placeholder())
    }
}

/// One shuffle frame: `[3/11] Fried Chicken`.
pub fn frame(step: usize, steps: usize, food: &FoodItem) -> String {
    format!("[{}/{}] {}", step + 1, steps, food.name)
}
