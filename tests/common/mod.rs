use roulette::Roulette;
use roulette_catalog::StaticSource;
use roulette_picker::ShuffleSettings;
use roulette_shared::FoodItem;

pub fn menu() -> Vec<FoodItem> {
    vec![
        FoodItem::new("1", "Fried Chicken", "chicken")
            .with_tags(["crispy", "spicy"])
            .with_rating(4.5),
        FoodItem::new("2", "Margherita", "pizza").with_rating(4.2),
        FoodItem::new("3", "Yangnyeom Chicken", "chicken").with_tags(["sweet"]),
        FoodItem::new("4", "Jjajangmyeon", "chinese")
            .with_image_url("https://cdn.example.com/jjajang.png"),
        FoodItem::new("5", "Pepperoni", "pizza"),
    ]
}

pub async fn session(foods: Vec<FoodItem>) -> Roulette<StaticSource> {
    session_with(foods, ShuffleSettings::default()).await
}

pub async fn session_with(
    foods: Vec<FoodItem>,
    settings: ShuffleSettings,
) -> Roulette<StaticSource> {
    let mut roulette = Roulette::new(StaticSource::new(foods), settings);
    roulette.load().await.expect("static source never fails");
    roulette
}
