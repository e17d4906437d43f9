mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, PageWalkError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{CharacterQuery, Query};
