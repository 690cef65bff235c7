use serde::{Deserialize, Serialize};

/// Pagination and filtering options for list endpoints.
///
/// A `size` of 0 and an empty `offset` leave the choice to the server.
/// Tags are OR-ed unless `match_all_tags` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOpt {
    pub size: usize,
    pub offset: String,
    pub tags: Vec<String>,
    pub match_all_tags: bool,
}

impl ListOpt {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I, match_all_tags: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.match_all_tags = match_all_tags;
        self
    }

    /// Query parameters for this page request.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if self.size > 0 {
            query.push(("size", self.size.to_string()));
        }
        if !self.offset.is_empty() {
            query.push(("offset", self.offset.clone()));
        }
        if !self.tags.is_empty() {
            let sep = if self.match_all_tags { "," } else { "/" };
            query.push(("tags", self.tags.join(sep)));
        }
        query
    }

    /// Options for the page after this one.
    pub fn next_page(&self, offset: String) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }
}
