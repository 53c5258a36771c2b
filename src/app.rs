use crate::api::HttpClient;
use crate::dashboard::{Dashboard, DashboardError, Modal};
use crate::food::{Food, FoodDraft};
use crate::form::FormOutcome;
use crossterm::event::KeyEvent;

/// Message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Info(text) | Status::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

/// Main application state.
pub struct App<C> {
    pub dashboard: Dashboard<C>,
    pub should_quit: bool,
    pub show_help: bool,

    // List view state
    pub list_selected: usize,

    pub status: Status,
}

impl<C: HttpClient> App<C> {
    pub fn new(dashboard: Dashboard<C>) -> Self {
        Self {
            dashboard,
            should_quit: false,
            show_help: false,
            list_selected: 0,
            status: Status::Info("Loading menu...".to_string()),
        }
    }

    /// Initial data load. A failure is shown, not fatal.
    pub async fn init(&mut self) {
        self.reload().await;
    }

    pub async fn reload(&mut self) {
        match self.dashboard.load().await {
            Ok(count) => {
                self.clamp_selection();
                self.status = Status::Info(format!("{} plates loaded", count));
            }
            Err(e) => self.report("load menu", &e),
        }
    }

    fn report(&mut self, action: &str, error: &DashboardError) {
        tracing::error!(action, error = %error, "operation failed");
        self.status = Status::Error(format!("Could not {}: {}", action, error.user_message()));
    }

    fn clamp_selection(&mut self) {
        let len = self.dashboard.foods().len();
        self.list_selected = self.list_selected.min(len.saturating_sub(1));
    }

    pub fn selected_food(&self) -> Option<&Food> {
        self.dashboard.foods().get(self.list_selected)
    }

    /// Move selection down in the list.
    pub fn list_next(&mut self) {
        if self.list_selected + 1 < self.dashboard.foods().len() {
            self.list_selected += 1;
        }
    }

    /// Move selection up in the list.
    pub fn list_prev(&mut self) {
        self.list_selected = self.list_selected.saturating_sub(1);
    }

    pub fn list_first(&mut self) {
        self.list_selected = 0;
    }

    pub fn list_last(&mut self) {
        self.list_selected = self.dashboard.foods().len().saturating_sub(1);
    }

    /// Header trigger: open (or close) the new plate modal.
    pub fn open_add(&mut self) {
        self.dashboard.toggle_add_modal();
    }

    pub fn edit_selected(&mut self) {
        if let Some(food) = self.selected_food().cloned() {
            self.dashboard.select_for_edit(food);
        }
    }

    pub async fn delete_selected(&mut self) {
        let Some(food) = self.selected_food().cloned() else {
            return;
        };
        match self.dashboard.delete(food.id).await {
            Ok(()) => {
                self.clamp_selection();
                self.status = Status::Info(format!("Deleted '{}'", food.name));
            }
            Err(e) => self.report(&format!("delete '{}'", food.name), &e),
        }
    }

    /// Route a key to the open modal's form and act on the outcome.
    pub async fn handle_modal_key(&mut self, key: KeyEvent) {
        let outcome = match self.dashboard.modal_mut().form_mut() {
            Some(form) => form.handle_key(key),
            None => return,
        };
        match outcome {
            Some(FormOutcome::Submit(draft)) => self.submit(draft).await,
            Some(FormOutcome::Cancel) => {
                if matches!(self.dashboard.modal(), Modal::Add(_)) {
                    self.dashboard.toggle_add_modal();
                } else {
                    self.dashboard.toggle_edit_modal();
                }
            }
            None => {}
        }
    }

    /// Save the draft through whichever modal is open. On failure the modal
    /// stays open with the user's input and the error.
    pub async fn submit(&mut self, draft: FoodDraft) {
        let adding = match self.dashboard.modal() {
            Modal::Add(_) => true,
            Modal::Edit { .. } => false,
            Modal::Closed => return,
        };

        let result = if adding {
            self.dashboard.create(draft).await.map(|food| {
                self.list_selected = self.dashboard.foods().len().saturating_sub(1);
                format!("Added '{}'", food.name)
            })
        } else {
            self.dashboard
                .update(draft)
                .await
                .map(|food| format!("Updated '{}'", food.name))
        };

        match result {
            Ok(message) => self.status = Status::Info(message),
            Err(e) => {
                if let Some(form) = self.dashboard.modal_mut().form_mut() {
                    form.set_error(e.user_message());
                }
                self.report(if adding { "add plate" } else { "save plate" }, &e);
            }
        }
    }
}
