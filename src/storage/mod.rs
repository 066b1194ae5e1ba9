mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// Synchronous key-value storage for game progress and preferences.
///
/// Reads return `None` for absent keys; callers fall back to defaults and
/// validate the stored payload themselves. Writes may fail (full disk,
/// permissions) and callers treat that as best-effort.
pub trait PersistenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}
