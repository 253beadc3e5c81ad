//! # Storage Layer
//!
//! The book is small and always handled as a whole: it is loaded once when a
//! session opens and written back wholesale after every mutation. The
//! [`DataStore`] trait captures exactly that, so the command layer can be
//! tested without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single pretty-printed JSON
//!   object keyed by contact name. Writes go to a temp file that is renamed
//!   over the target, so a crash mid-write never leaves a truncated book.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the last saved snapshot
//!   - Counts saves so tests can assert read-only operations never write
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "Alice": {
//!     "phone": "5551234567",
//!     "email": "a@b.com",
//!     "group": "Friends",
//!     "created_at": "2024-03-01T09:30:00+00:00"
//!   }
//! }
//! ```

use crate::error::Result;
use crate::model::ContactMap;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the whole contact book.
pub trait DataStore {
    /// Load the persisted book. A store that was never written is empty.
    fn load(&self) -> Result<ContactMap>;

    /// Replace the persisted book with `contacts`.
    fn save(&mut self, contacts: &ContactMap) -> Result<()>;
}
