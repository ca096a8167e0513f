//! State holder for the dessert game.
//!
//! Owns the only live [`DessertUiState`] and replaces it wholesale on every
//! sale. Observers are called synchronously, in registration order, right
//! after each replacement.

use super::catalog::Catalog;
use super::state::DessertUiState;

/// Callback invoked with every newly published state.
pub type Observer = Box<dyn Fn(&DessertUiState)>;

/// Handle returned by [`DessertStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct DessertStore {
    catalog: Catalog,
    state: DessertUiState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl DessertStore {
    pub fn new(catalog: Catalog) -> Self {
        let state = DessertUiState::initial(&catalog);
        Self {
            catalog,
            state,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Borrow the current state (for rendering).
    pub fn state(&self) -> &DessertUiState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> DessertUiState {
        self.state.clone()
    }

    pub fn subscribe(&mut self, observer: impl Fn(&DessertUiState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(i, _)| *i != id);
        self.observers.len() != before
    }

    /// Sell one unit of the dessert on display.
    ///
    /// The sale is charged at the price of the dessert shown before the
    /// click; the displayed dessert is then re-selected from the new count.
    pub fn on_dessert_clicked(&mut self) -> &DessertUiState {
        let current = &self.state;
        let desserts_sold = current.desserts_sold.saturating_add(1);
        let next = DessertUiState {
            revenue: current.revenue.saturating_add(current.current_dessert.price),
            desserts_sold,
            current_dessert: self.catalog.select(desserts_sold).clone(),
        };
        self.publish(next);
        &self.state
    }

    fn publish(&mut self, next: DessertUiState) {
        self.state = next;
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }
}
