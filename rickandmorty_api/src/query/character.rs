use url::Url;

use crate::types::{CharacterGender, CharacterStatus};

use super::Query;

/// Filters accepted by `GET /character`. Unset fields are left off the URL.
#[derive(Default, Debug, Clone)]
pub struct CharacterQuery {
    pub page: Option<i64>,
    pub name: Option<String>,
    pub status: Option<CharacterStatus>,
    pub species: Option<String>,
    pub kind: Option<String>,
    pub gender: Option<CharacterGender>,
}

impl Query for CharacterQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(page) = self.page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        if let Some(name) = &self.name {
            url.query_pairs_mut().append_pair("name", name.as_str());
        }
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", status.to_string().as_str());
        }
        if let Some(species) = &self.species {
            url.query_pairs_mut().append_pair("species", species.as_str());
        }
        if let Some(kind) = &self.kind {
            url.query_pairs_mut().append_pair("type", kind.as_str());
        }
        if let Some(gender) = self.gender {
            url.query_pairs_mut()
                .append_pair("gender", gender.to_string().as_str());
        }
        url
    }
}

impl CharacterQuery {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Filters by (partial, case-insensitive) name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_status(mut self, status: CharacterStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_species(mut self, species: &str) -> Self {
        self.species = Some(species.to_string());
        self
    }

    pub fn with_type(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn with_gender(mut self, gender: CharacterGender) -> Self {
        self.gender = Some(gender);
        self
    }
}
