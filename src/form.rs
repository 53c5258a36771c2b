use crate::food::{Food, FoodDraft};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which input of the plate form has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Image,
    Price,
    Description,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Image,
            Self::Image => Self::Price,
            Self::Price => Self::Description,
            Self::Description => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Image => Self::Name,
            Self::Price => Self::Image,
            Self::Description => Self::Price,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Image => "Image URL",
            Self::Price => "Price",
            Self::Description => "Description",
        }
    }

    pub const ALL: [Field; 4] = [Self::Name, Self::Image, Self::Price, Self::Description];
}

/// Result of a key press inside the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Fields passed validation
    Submit(FoodDraft),
    /// User backed out
    Cancel,
}

/// Input state of the add/edit plate modals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodForm {
    draft: FoodDraft,
    focus: Field,
    error: Option<String>,
}

impl FoodForm {
    /// Empty form for a new plate
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-populated from an existing plate
    pub fn from_food(food: &Food) -> Self {
        Self {
            draft: FoodDraft::from(food),
            focus: Field::Name,
            error: None,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Image => &self.draft.image,
            Field::Price => &self.draft.price,
            Field::Description => &self.draft.description,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.draft.name,
            Field::Image => &mut self.draft.image,
            Field::Price => &mut self.draft.price,
            Field::Description => &mut self.draft.description,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show a failure from outside the form (e.g. the server rejected the save).
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormOutcome> {
        let focus = self.focus();
        match key.code {
            KeyCode::Esc => Some(FormOutcome::Cancel),
            KeyCode::Enter => match self.validate() {
                Ok(draft) => {
                    self.error = None;
                    Some(FormOutcome::Submit(draft))
                }
                Err(message) => {
                    self.error = Some(message);
                    None
                }
            },
            KeyCode::Tab | KeyCode::Down => {
                self.focus = focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = focus.prev();
                None
            }
            KeyCode::Backspace => {
                self.value_mut(focus).pop();
                None
            }
            // Control chords are shortcuts, not text
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value_mut(focus).push(c);
                None
            }
            _ => None,
        }
    }

    /// Check the fields and produce a trimmed draft.
    pub fn validate(&self) -> Result<FoodDraft, String> {
        let name = self.draft.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }

        let price = self.draft.price.trim().replace(',', ".");
        if !is_plain_decimal(&price) {
            return Err(format!("Invalid price: '{}'", self.draft.price.trim()));
        }

        Ok(FoodDraft {
            name: name.to_string(),
            image: self.draft.image.trim().to_string(),
            price,
            description: self.draft.description.trim().to_string(),
        })
    }
}

/// Digits with at most one `.` followed by more digits ("12", "12.90").
fn is_plain_decimal(text: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut FoodForm, text: &str) {
        for c in text.chars() {
            assert!(form.handle_key(key(KeyCode::Char(c))).is_none());
        }
    }

    #[test]
    fn test_new_form_focuses_name() {
        let form = FoodForm::new();
        assert_eq!(form.focus(), Field::Name);
        assert!(form.error().is_none());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = FoodForm::new();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus(), Field::Description);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus(), Field::Name);
        form.handle_key(key(KeyCode::Down));
        assert_eq!(form.focus(), Field::Image);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = FoodForm::new();
        type_str(&mut form, "Moda");
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "12,5");
        form.handle_key(key(KeyCode::Backspace));

        assert_eq!(form.value(Field::Name), "Moda");
        assert_eq!(form.value(Field::Price), "12,");
    }

    #[test]
    fn test_submit_trims_and_normalizes_price() {
        let mut form = FoodForm::new();
        type_str(&mut form, "  Moda italiana ");
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "https://example.com/moda.png");
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "24,90");

        match form.handle_key(key(KeyCode::Enter)) {
            Some(FormOutcome::Submit(draft)) => {
                assert_eq!(draft.name, "Moda italiana");
                assert_eq!(draft.price, "24.90");
                assert_eq!(draft.description, "");
            }
            other => panic!("Expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_blocks_submit() {
        let mut form = FoodForm::new();
        type_str(&mut form, "   ");
        assert!(form.handle_key(key(KeyCode::Enter)).is_none());
        assert_eq!(form.error(), Some("Name is required"));
    }

    #[test]
    fn test_bad_price_blocks_submit() {
        let mut form = FoodForm::new();
        type_str(&mut form, "Veggie");
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "-3");
        assert!(form.handle_key(key(KeyCode::Enter)).is_none());
        assert!(form.error().unwrap().contains("Invalid price"));

        form.handle_key(key(KeyCode::Backspace));
        form.handle_key(key(KeyCode::Backspace));
        type_str(&mut form, "abc");
        assert!(form.handle_key(key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_price_must_be_plain_decimal() {
        let validate_price = |price: &str| {
            let mut form = FoodForm::new();
            type_str(&mut form, "Veggie");
            form.handle_key(key(KeyCode::Tab));
            form.handle_key(key(KeyCode::Tab));
            type_str(&mut form, price);
            form.validate().map(|draft| draft.price)
        };

        for rejected in ["1e3", "+5", "1_0", "12.", ".5", "1.2.3", "inf", "NaN"] {
            assert!(validate_price(rejected).is_err(), "{} should be rejected", rejected);
        }
        assert_eq!(validate_price("12").unwrap(), "12");
        assert_eq!(validate_price("0,50").unwrap(), "0.50");
        assert_eq!(validate_price(" 7.5 ").unwrap(), "7.5");
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut form = FoodForm::new();
        type_str(&mut form, "Moda");
        assert!(form
            .handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
            .is_none());
        assert_eq!(form.value(Field::Name), "Moda");

        form.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(form.value(Field::Name), "ModaA");
    }

    #[test]
    fn test_escape_cancels_without_clearing() {
        let mut form = FoodForm::new();
        type_str(&mut form, "Veggie");
        assert_eq!(form.handle_key(key(KeyCode::Esc)), Some(FormOutcome::Cancel));
        assert_eq!(form.value(Field::Name), "Veggie");
    }

    #[test]
    fn test_from_food_prepopulates() {
        let food = Food {
            id: 4,
            name: "A la Camarón".to_string(),
            image: "https://example.com/camarao.png".to_string(),
            price: "69.90".to_string(),
            description: "Camarão ao molho".to_string(),
            available: false,
        };
        let form = FoodForm::from_food(&food);
        assert_eq!(form.value(Field::Name), "A la Camarón");
        assert_eq!(form.value(Field::Price), "69.90");
        assert_eq!(form.validate().unwrap(), FoodDraft::from(&food));
    }
}
