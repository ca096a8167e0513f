//! Dessert Clicker state definitions.

use super::catalog::{Catalog, Dessert};

/// Snapshot of the game published by the store.
///
/// A new value is built on every sale; earlier snapshots never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DessertUiState {
    /// Total revenue earned, in dollars.
    pub revenue: u64,
    pub desserts_sold: u64,
    /// Dessert currently on display (and charged for on the next click).
    pub current_dessert: Dessert,
}

impl DessertUiState {
    /// Session start: nothing sold, showing the first dessert.
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            revenue: 0,
            desserts_sold: 0,
            current_dessert: catalog.first().clone(),
        }
    }
}

/// Log entry for the unlock history panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesLogEntry {
    pub text: String,
    pub is_important: bool,
}

/// History of dessert unlocks, fed by a store observer.
pub struct SalesLog {
    pub entries: Vec<SalesLogEntry>,
    /// Dessert shown in the last recorded snapshot.
    last_dessert: Dessert,
}

impl SalesLog {
    pub const MAX_ENTRIES: usize = 50;

    pub fn new(initial: &DessertUiState) -> Self {
        Self {
            entries: vec![SalesLogEntry {
                text: format!("Now baking: {}", initial.current_dessert.name),
                is_important: false,
            }],
            last_dessert: initial.current_dessert.clone(),
        }
    }

    /// Record a snapshot. Returns true if it showed a new dessert.
    pub fn record(&mut self, state: &DessertUiState) -> bool {
        if state.current_dessert == self.last_dessert {
            return false;
        }
        self.last_dessert = state.current_dessert.clone();
        self.push(
            format!(
                "New dessert unlocked: {} (${} each, {} sold)",
                state.current_dessert.name, state.current_dessert.price, state.desserts_sold
            ),
            true,
        );
        true
    }

    pub fn push(&mut self, text: String, is_important: bool) {
        self.entries.push(SalesLogEntry { text, is_important });
        if self.entries.len() > Self::MAX_ENTRIES {
            self.entries.remove(0);
        }
    }
}
