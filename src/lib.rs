//! # Stowage - a tiny flat-file persistence helper
//!
//! Stowage keeps an ordered, in-memory collection of identifiable domain
//! objects and serializes it to a single file in one of two
//! interchangeable formats: a JSON array document or delimited text with
//! a header line (CSV-style, configurable separator).
//!
//! ## Quick Start
//!
//! ```no_run
//! use stowage::model::Todo;
//! use stowage::store::{ObjectStore, PersistOptions};
//!
//! let mut store = ObjectStore::new();
//! store.add(Some(Todo::new(1, "water the plants")));
//! store.add(Some(Todo::new(2, "take out the trash")));
//!
//! // Writes <documents-dir>/todos.json
//! store.save(None, &PersistOptions::default());
//!
//! // Replaces the in-memory sequence with the file's content
//! let todos = store.load(&PersistOptions::default())?;
//! assert_eq!(todos.len(), 2);
//! # Ok::<(), stowage::error::StowageError>(())
//! ```
//!
//! Any type can be stored by implementing the [`record::Record`] trait;
//! [`model::Todo`] is the bundled reference implementation.
//!
//! Saving never returns an error: failures are reported through
//! `tracing` only. Loading propagates every failure, but records that
//! fail to parse individually are skipped, not surfaced.

/// Error types and result aliases.
///
/// Defines the `StowageError` enum and `Result<T>` type alias.
pub mod error;

/// Tracing setup for host applications.
pub mod logging;

/// Domain models persisted by the store.
pub mod model;

/// The `Record` capability trait every stored type implements.
pub mod record;

/// File-based codecs and path resolution.
///
/// JSON and delimited-text codecs plus documents-directory lookup.
pub mod storage;

/// The `ObjectStore` container and its persistence options.
pub mod store;
