//! Food Entity
//!
//! A dish in the restaurant catalog, plus the form, draft and patch shapes
//! that travel between the dashboard and the `foods` collection.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{Entity, Resource};

/// A catalog record (dish)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique identifier (server-assigned, provisional before the first round-trip)
    pub id: i64,
    pub name: String,
    /// Image URL
    pub image: String,
    /// Decimal price, kept as entered (e.g. "19.90")
    #[serde(deserialize_with = "price_from_json")]
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl Entity for FoodItem {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for FoodItem {
    type Draft = FoodDraft;
    type Patch = FoodPatch;

    fn draft_id(draft: &FoodDraft) -> i64 {
        draft.id
    }

    fn from_draft(id: i64, draft: &FoodDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            image: draft.image.clone(),
            price: draft.price.clone(),
            description: draft.description.clone(),
            available: draft.available,
        }
    }

    fn apply_patch(&mut self, patch: &FoodPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(price) = &patch.price {
            self.price = price.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }
}

/// Servers seeded by hand often store the price as a JSON number.
fn price_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
    })
}

// ========================
// Form Input
// ========================

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodField {
    Image,
    Name,
    Price,
    Description,
}

impl FoodField {
    pub const ALL: [FoodField; 4] = [
        FoodField::Image,
        FoodField::Name,
        FoodField::Price,
        FoodField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodField::Image => "image",
            FoodField::Name => "name",
            FoodField::Price => "price",
            FoodField::Description => "description",
        }
    }

    /// Input placeholder shown in the add/edit modal
    pub fn placeholder(&self) -> &'static str {
        match self {
            FoodField::Image => "Cole o link aqui",
            FoodField::Name => "Ex: Moda Italiana",
            FoodField::Price => "Ex: 19.90",
            FoodField::Description => "Descrição",
        }
    }
}

impl std::fmt::Display for FoodField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values typed into the add/edit modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodForm {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl FoodForm {
    pub fn get(&self, field: FoodField) -> &str {
        match field {
            FoodField::Image => &self.image,
            FoodField::Name => &self.name,
            FoodField::Price => &self.price,
            FoodField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FoodField, value: String) {
        match field {
            FoodField::Image => self.image = value,
            FoodField::Name => self.name = value,
            FoodField::Price => self.price = value,
            FoodField::Description => self.description = value,
        }
    }
}

/// Edit sessions start from the stored values
impl From<&FoodItem> for FoodForm {
    fn from(food: &FoodItem) -> Self {
        Self {
            name: food.name.clone(),
            image: food.image.clone(),
            price: food.price.clone(),
            description: food.description.clone(),
        }
    }
}

/// A form that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

// ========================
// Wire Payloads
// ========================

/// `POST /foods` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub id: i64,
    pub available: bool,
}

impl FoodDraft {
    /// New dishes start available, under a provisional id
    pub fn new(food: NewFood, id: i64) -> Self {
        Self {
            name: food.name,
            image: food.image,
            price: food.price,
            description: food.description,
            id,
            available: true,
        }
    }

    /// Provisional id: wall clock in epoch milliseconds
    pub fn provisional_id() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Partial food record sent inside `PUT /foods/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoodPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl FoodPatch {
    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Default::default()
        }
    }
}

impl From<NewFood> for FoodPatch {
    fn from(food: NewFood) -> Self {
        Self {
            name: Some(food.name),
            image: Some(food.image),
            price: Some(food.price),
            description: Some(food.description),
            available: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_accepts_number_or_string() {
        let text: FoodItem = serde_json::from_value(json!({
            "id": 1, "name": "Ao molho", "image": "img", "price": "19.90",
            "description": "d", "available": true
        }))
        .unwrap();
        let number: FoodItem = serde_json::from_value(json!({
            "id": 2, "name": "Veggie", "image": "img", "price": 21.9,
            "description": "d", "available": false
        }))
        .unwrap();

        assert_eq!(text.price, "19.90");
        assert_eq!(number.price, "21.9");
    }

    #[test]
    fn test_draft_wire_shape() {
        let draft = FoodDraft::new(
            NewFood {
                name: "Pizza".into(),
                image: "url".into(),
                price: "10".into(),
                description: "desc".into(),
            },
            1_700_000_000_000,
        );

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "name": "Pizza", "image": "url", "price": "10",
                "description": "desc", "id": 1_700_000_000_000i64, "available": true
            })
        );
    }

    #[test]
    fn test_patch_omits_absent_fields() {
        let patch = FoodPatch::availability(false);
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "available": false }));
    }

    #[test]
    fn test_apply_patch_keeps_untouched_fields() {
        let mut food = FoodItem {
            id: 3,
            name: "Old".into(),
            image: "img".into(),
            price: "5".into(),
            description: "d".into(),
            available: true,
        };
        food.apply_patch(&FoodPatch {
            name: Some("New".into()),
            ..Default::default()
        });

        assert_eq!(food.name, "New");
        assert_eq!(food.price, "5");
        assert!(food.available);
    }
}
