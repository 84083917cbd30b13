use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDetails {
    pub title_name: String,
    pub author: String,
}

impl TitleDetails {
    /// A title page that rendered without a title or without an author is
    /// what the catalog serves for an unknown bid.
    pub fn is_complete(&self) -> bool {
        !self.title_name.is_empty() && !self.author.is_empty()
    }
}
