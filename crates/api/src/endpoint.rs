use std::fmt::{Display, Formatter};

/// Admin API paths, relative to the (workspace-scoped) base URL.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    ConsumerGroups,
    ConsumerGroup(String),
    ConsumerGroupConsumers(String),
    ConsumerGroupConsumer(String, String),
}

impl Endpoint {
    pub fn url(&self, base_url: &str, workspace: Option<&str>) -> String {
        let base_url = base_url.trim_end_matches('/');
        match workspace {
            Some(workspace) if !workspace.is_empty() => {
                format!("{}/{}{}", base_url, workspace, self)
            }
            _ => format!("{}{}", base_url, self),
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConsumerGroups => write!(f, "/consumer_groups"),
            Self::ConsumerGroup(group) => write!(f, "/consumer_groups/{}", group),
            Self::ConsumerGroupConsumers(group) => {
                write!(f, "/consumer_groups/{}/consumers", group)
            }
            Self::ConsumerGroupConsumer(group, consumer) => {
                write!(f, "/consumer_groups/{}/consumers/{}", group, consumer)
            }
        }
    }
}
