use super::search_response::Item;
use serde::Serialize;

pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Display-relevant fields of one repository from a search response.
///
/// Only the decoder creates records, and they are never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    title: String,
    language: String,
    stars_count: u64,
    watchers_count: u64,
    forks_count: u64,
    open_issues_count: u64,
    avatar_url: String,
}

impl RepositoryRecord {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn stars_count(&self) -> u64 {
        self.stars_count
    }

    pub fn watchers_count(&self) -> u64 {
        self.watchers_count
    }

    pub fn forks_count(&self) -> u64 {
        self.forks_count
    }

    pub fn open_issues_count(&self) -> u64 {
        self.open_issues_count
    }

    /// Owner avatar URL, empty when the response had none.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}

impl From<Item> for RepositoryRecord {
    fn from(item: Item) -> Self {
        Self {
            title: item.full_name.unwrap_or_default(),
            language: item
                .language
                .unwrap_or_else(|| String::from(UNKNOWN_LANGUAGE)),
            stars_count: item.stargazers_count.unwrap_or_default(),
            watchers_count: item.watchers_count.unwrap_or_default(),
            forks_count: item.forks_count.unwrap_or_default(),
            open_issues_count: item.open_issues.unwrap_or_default(),
            avatar_url: item
                .owner
                .and_then(|owner| owner.avatar_url)
                .unwrap_or_default(),
        }
    }
}
