use serde::{Deserialize, Serialize};

/// A single menu item as stored by the `/foods` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
    /// Decimal price kept as text, exactly as the API sends it.
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// The user-editable part of a food plate (everything but `id` and `available`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl FoodDraft {
    /// Build a brand new record. New plates always start out available.
    pub fn into_food(self, id: u64) -> Food {
        Food {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: true,
        }
    }

    /// Merge the draft onto an existing record, keeping its id and availability.
    pub fn merge_into(self, target: &Food) -> Food {
        Food {
            id: target.id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: target.available,
        }
    }
}

impl From<&Food> for FoodDraft {
    fn from(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            image: food.image.clone(),
            price: food.price.clone(),
            description: food.description.clone(),
        }
    }
}

/// Format a textual price for display, falling back to the raw text.
pub fn format_price(price: &str) -> String {
    match price.trim().parse::<f64>() {
        Ok(value) => format!("$ {:.2}", value),
        Err(_) => price.to_string(),
    }
}
