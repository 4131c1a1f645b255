use serde::{Deserialize, Deserializer, Serialize};

/// Shown in place of an image when a dish has none.
pub const NO_IMAGE: &str = "No Image";

/// One orderable dish, as stored in the `foods` table.
///
/// Rows coming back from the data service are not always tidy: ids may be
/// numeric, and `category`, `tags` or `rating` may be `null`. Decoding
/// normalises those cases instead of rejecting the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub name: String,
    /// Empty when the row has no category; that is its own filter bucket.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, alias = "imageUrl", deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            image_url: None,
            tags: Vec::new(),
            rating: 0.0,
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into()).filter(|url| !url.trim().is_empty());
        self
    }

    /// Image reference, or [`NO_IMAGE`] when the dish has none.
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(NO_IMAGE)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|url| !url.trim().is_empty()))
}
