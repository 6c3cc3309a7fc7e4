use todo_store::TodoStore;

/// Shared per-request context. Holds the store handle only; handlers keep
/// no state of their own between requests.
#[derive(Clone)]
pub(crate) struct AppState {
    store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }
}
