//! Persistent credential storage.

mod credentials;
mod file;
mod memory;
mod traits;

pub use credentials::{CredentialStore, StoredProfile, TOKEN_KEY, USER_INFO_KEY};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{KeyValueStorage, KeyValueStorageExt};
