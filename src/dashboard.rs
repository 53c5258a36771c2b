use crate::api::{ClientError, FOODS_PATH, HttpClient, food_path};
use crate::food::{Food, FoodDraft};
use crate::form::FoodForm;
use serde::de::IgnoredAny;
use thiserror::Error;

/// Errors surfaced by dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ClientError),

    #[error("No food plate selected for editing")]
    NoSelection,
}

impl DashboardError {
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Api(e) => e.user_message(),
            DashboardError::NoSelection => self.to_string(),
        }
    }
}

/// Which modal is open. The edit target only exists while the edit modal does.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    Add(FoodForm),
    Edit { target: Food, form: FoodForm },
}

impl Modal {
    pub fn form_mut(&mut self) -> Option<&mut FoodForm> {
        match self {
            Modal::Closed => None,
            Modal::Add(form) | Modal::Edit { form, .. } => Some(form),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }
}

/// Owns the local mirror of the `/foods` collection and keeps it in step
/// with the server. Local state only changes after the server accepted a write.
pub struct Dashboard<C> {
    client: C,
    foods: Vec<Food>,
    modal: Modal,
    next_id: u64,
}

impl<C: HttpClient> Dashboard<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            foods: Vec::new(),
            modal: Modal::Closed,
            next_id: 1,
        }
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    /// The plate currently targeted by the edit modal.
    pub fn editing(&self) -> Option<&Food> {
        match &self.modal {
            Modal::Edit { target, .. } => Some(target),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Id proposed for the next created plate. Never reuses an id seen so far,
    /// even after deletions.
    #[cfg(test)]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    fn observe_id(&mut self, id: u64) {
        self.next_id = self.next_id.max(id.saturating_add(1));
    }

    /// Replace the local collection with the server's, in server order.
    pub async fn load(&mut self) -> Result<usize, DashboardError> {
        let foods: Vec<Food> = self.client.get(FOODS_PATH).await?;
        if let Some(max) = foods.iter().map(|f| f.id).max() {
            self.observe_id(max);
        }
        self.foods = foods;
        tracing::info!(count = self.foods.len(), next_id = self.next_id, "food plates loaded");
        Ok(self.foods.len())
    }

    /// Create a plate from the draft and append it once the server accepts it.
    pub async fn create(&mut self, draft: FoodDraft) -> Result<Food, DashboardError> {
        let proposed = draft.into_food(self.next_id);
        let response: serde_json::Value = self.client.post(FOODS_PATH, &proposed).await?;

        // The server's copy wins when it sends one back (it may assign its own id)
        let food = match serde_json::from_value::<Food>(response) {
            Ok(stored) => {
                if stored.id != proposed.id {
                    tracing::info!(proposed = proposed.id, assigned = stored.id, "server reassigned plate id");
                }
                stored
            }
            Err(_) => proposed,
        };

        self.observe_id(food.id);
        if self.foods.iter().any(|f| f.id == food.id) {
            // Our mirror is stale; take the server's list instead of holding a duplicate id
            tracing::warn!(id = food.id, "server assigned an id already in the local list, reloading");
            if let Err(e) = self.load().await {
                tracing::warn!(error = %e, "reload after id collision failed");
                self.foods.push(food.clone());
            }
        } else {
            self.foods.push(food.clone());
        }
        if matches!(self.modal, Modal::Add(_)) {
            self.modal = Modal::Closed;
        }
        tracing::info!(id = food.id, name = %food.name, "food plate created");
        Ok(food)
    }

    /// Apply the draft to the plate being edited.
    pub async fn update(&mut self, draft: FoodDraft) -> Result<Food, DashboardError> {
        let target = self.editing().ok_or(DashboardError::NoSelection)?;
        let updated = draft.merge_into(target);

        let _: IgnoredAny = self.client.put(&food_path(updated.id), &updated).await?;

        match self.foods.iter_mut().find(|f| f.id == updated.id) {
            Some(slot) => *slot = updated.clone(),
            None => tracing::warn!(id = updated.id, "updated plate is not in the local list"),
        }
        self.modal = Modal::Closed;
        tracing::info!(id = updated.id, name = %updated.name, "food plate updated");
        Ok(updated)
    }

    /// Delete a plate on the server, then drop it locally.
    pub async fn delete(&mut self, id: u64) -> Result<(), DashboardError> {
        let _: IgnoredAny = self.client.delete(&food_path(id)).await?;
        self.foods.retain(|f| f.id != id);
        tracing::info!(id, "food plate deleted");
        Ok(())
    }

    /// Open or close the add modal. Ignored while editing.
    pub fn toggle_add_modal(&mut self) {
        self.modal = match std::mem::take(&mut self.modal) {
            Modal::Closed => Modal::Add(FoodForm::new()),
            Modal::Add(_) => Modal::Closed,
            edit @ Modal::Edit { .. } => edit,
        };
    }

    /// Close the edit modal (dropping the selection). There is nothing to
    /// open without a selection, see [`Dashboard::select_for_edit`].
    pub fn toggle_edit_modal(&mut self) {
        if matches!(self.modal, Modal::Edit { .. }) {
            self.modal = Modal::Closed;
        }
    }

    /// Target a plate for editing and open the edit modal.
    pub fn select_for_edit(&mut self, food: Food) {
        let form = FoodForm::from_food(&food);
        self.modal = Modal::Edit { target: food, form };
    }
}
