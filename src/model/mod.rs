//! Domain models persisted by the store.

mod todo;

pub use todo::Todo;
