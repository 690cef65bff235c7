use kong_types::list::ListOpt;
use serde::{de::DeserializeOwned, Deserialize};

use super::error::Error;

/// One page of a list endpoint. Items are kept raw until the caller picks
/// the type to decode them into.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

impl RawPage {
    /// Decodes `data`. Kong renders an empty list as `{}`, so an empty object
    /// or a missing field decode to no items.
    pub fn items<T: DeserializeOwned>(&self) -> Result<Vec<T>, Error> {
        match &self.data {
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| T::deserialize(item).map_err(Error::from))
                .collect(),
            serde_json::Value::Null => Ok(vec![]),
            serde_json::Value::Object(map) if map.is_empty() => Ok(vec![]),
            _ => Err(Error::InvalidResponse),
        }
    }

    /// Options for the following page, or `None` on the last page. A page
    /// that announces a successor without an offset cannot be followed.
    pub fn next_opt(&self, opt: Option<&ListOpt>) -> Result<Option<ListOpt>, Error> {
        match self.next.as_deref() {
            Some(next) if !next.is_empty() => match self.offset.as_deref() {
                Some(offset) if !offset.is_empty() => Ok(Some(
                    opt.cloned().unwrap_or_default().next_page(offset.to_string()),
                )),
                _ => Err(Error::InvalidResponse),
            },
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
