use crate::error::Result;
use crate::record::Record;
use crate::storage::{self, Format};
use std::path::PathBuf;

/// Destination and format for one save/load call.
///
/// Defaults match the historical call signature: file name `"todos"`,
/// JSON format, `';'` separator.
#[derive(Debug, Clone)]
pub struct PersistOptions {
    pub file_name: String,
    pub format: Format,
    pub separator: char,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            file_name: "todos".to_string(),
            format: Format::Json,
            separator: ';',
        }
    }
}

impl PersistOptions {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

/// An ordered, in-memory collection of records with flat-file persistence.
///
/// Insertion order is preserved and `id`s are unique: an `add` with an
/// already-present `id` is silently ignored. The sequence is only mutated
/// through [`add`](ObjectStore::add) / [`delete`](ObjectStore::delete);
/// [`load`](ObjectStore::load) replaces it wholesale.
///
/// The store is single-writer: it holds no lock, and callers that share
/// it across threads must serialize access themselves.
#[derive(Debug)]
pub struct ObjectStore<T> {
    objects: Vec<T>,
    base_dir: Option<PathBuf>,
}

impl<T: Record + Clone> Default for ObjectStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + Clone> ObjectStore<T> {
    /// An empty store persisting to the per-user documents directory.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            base_dir: None,
        }
    }

    /// An empty store persisting under an explicit base directory instead
    /// of the per-user documents directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            objects: Vec::new(),
            base_dir: Some(base_dir.into()),
        }
    }

    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Append an object to the end of the sequence.
    ///
    /// `None` and objects whose `id` is already present are ignored;
    /// neither case is an error.
    pub fn add(&mut self, object: Option<T>) {
        let Some(object) = object else { return };

        if self.objects.iter().any(|o| o.id() == object.id()) {
            tracing::debug!("Ignoring object with an id already in the store");
            return;
        }

        self.objects.push(object);
    }

    /// Remove every object whose `id` matches (at most one, ids being
    /// unique). No match is a no-op, not an error.
    pub fn delete(&mut self, id: &T::Id) {
        self.objects.retain(|o| o.id() != *id);
    }

    /// Persist `objects` (or, when `None`, the store's own sequence) to
    /// the file named by `options`.
    ///
    /// Failures are not returned: they are logged on the error channel
    /// and the call completes normally. Callers that need to detect a
    /// failed save must load the file back and compare.
    pub fn save(&self, objects: Option<&[T]>, options: &PersistOptions) {
        let objects = objects.unwrap_or(&self.objects);

        if let Err(e) = self.save_inner(objects, options) {
            tracing::error!(file = %options.file_name, error = %e, "Failed to save objects");
        }
    }

    fn save_inner(&self, objects: &[T], options: &PersistOptions) -> Result<()> {
        let path = self.resolve_path(options)?;
        match options.format {
            Format::Json => storage::json::encode_to_file(objects, &path),
            Format::Delimited => {
                storage::delimited::encode_to_file(objects, &path, options.separator)
            }
        }
    }

    /// Load the file named by `options`, replace the in-memory sequence
    /// with its content and return a copy of it.
    ///
    /// Unlike [`save`](ObjectStore::save), every failure propagates; the
    /// in-memory sequence is left untouched on error.
    pub fn load(&mut self, options: &PersistOptions) -> Result<Vec<T>> {
        let path = self.resolve_path(options)?;
        let objects = match options.format {
            Format::Json => storage::json::decode_from_file(&path)?,
            Format::Delimited => storage::delimited::decode_from_file(&path, options.separator)?,
        };

        self.objects = objects;
        Ok(self.objects.clone())
    }

    fn resolve_path(&self, options: &PersistOptions) -> Result<PathBuf> {
        let base = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => storage::paths::documents_dir()?,
        };
        Ok(storage::paths::resolve(
            &base,
            &options.file_name,
            options.format,
        ))
    }
}
