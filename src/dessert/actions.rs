//! Actions a click target or key press can trigger.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DessertAction {
    /// Sell the dessert on display.
    Sell,
    /// Share the sales summary.
    Share,
}

impl DessertAction {
    /// Map a key press to an action.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'c' | ' ' => Some(DessertAction::Sell),
            's' => Some(DessertAction::Share),
            _ => None,
        }
    }
}
