//! The upstream capability the handlers depend on.

use async_trait::async_trait;
use rickandmorty_api::types::Character;
use rickandmorty_api::Client;

/// Any upstream failure. Its `Display` text is what callers see in a 500 body.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Read-only access to characters.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// A single character by id.
    async fn get_one(&self, id: &str) -> Result<Character, SourceError>;

    /// A comma-separated batch of ids, passed through unvalidated.
    async fn get_many(&self, ids: &str) -> Result<Vec<Character>, SourceError>;

    /// Every character whose name matches `name`.
    async fn search(&self, name: &str) -> Result<Vec<Character>, SourceError>;

    /// Every character.
    async fn list_all(&self) -> Result<Vec<Character>, SourceError>;
}

#[async_trait]
impl CharacterSource for Client {
    async fn get_one(&self, id: &str) -> Result<Character, SourceError> {
        Ok(self.get_character(id).await?)
    }

    async fn get_many(&self, ids: &str) -> Result<Vec<Character>, SourceError> {
        Ok(self.get_characters(ids).await?)
    }

    async fn search(&self, name: &str) -> Result<Vec<Character>, SourceError> {
        Ok(self.search_characters(name).await?)
    }

    async fn list_all(&self) -> Result<Vec<Character>, SourceError> {
        Ok(self.list_characters().await?)
    }
}
