//! Query builders for the list endpoint.

use url::Url;

mod character;
pub use self::character::CharacterQuery;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
