use futures::{Stream, TryStreamExt};
use kong_types::{
    consumer_group::{ConsumerGroup, ConsumerGroupObject},
    list::ListOpt,
};
use reqwest::Method;

use super::{client::Client, endpoint::Endpoint, error::Error};

/// Handles consumer groups in Kong.
#[derive(Debug, Clone, Copy)]
pub struct ConsumerGroupService<'a> {
    client: &'a Client,
}

impl<'a> ConsumerGroupService<'a> {
    /// Page size used when walking every page.
    pub const PAGE_SIZE: usize = 1000;

    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a consumer group. A group with an `id` is created under that
    /// id (PUT), otherwise Kong generates one (POST).
    pub async fn create(&self, group: &ConsumerGroup) -> Result<ConsumerGroup, Error> {
        let request = match group.id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => self
                .client
                .new_request(Method::PUT, &Endpoint::ConsumerGroup(id.to_string())),
            None => self
                .client
                .new_request(Method::POST, &Endpoint::ConsumerGroups),
        };
        self.client.execute(request.json(group)).await
    }

    pub async fn get(&self, name_or_id: &str) -> Result<ConsumerGroup, Error> {
        self.get_with_details(name_or_id)
            .await?
            .consumer_group
            .ok_or(Error::InvalidResponse)
    }

    /// Fetches a group together with its consumers and scoped plugins.
    pub async fn get_with_details(&self, name_or_id: &str) -> Result<ConsumerGroupObject, Error> {
        if name_or_id.is_empty() {
            return Err(Error::missing("name_or_id", "get"));
        }
        let endpoint = Endpoint::ConsumerGroup(name_or_id.to_string());
        self.client
            .execute(self.client.new_request(Method::GET, &endpoint))
            .await
    }

    pub async fn update(&self, group: &ConsumerGroup) -> Result<ConsumerGroup, Error> {
        let id = match group.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(Error::missing("id", "update")),
        };
        let endpoint = Endpoint::ConsumerGroup(id.to_string());
        self.client
            .execute(self.client.new_request(Method::PATCH, &endpoint).json(group))
            .await
    }

    pub async fn delete(&self, name_or_id: &str) -> Result<(), Error> {
        if name_or_id.is_empty() {
            return Err(Error::missing("name_or_id", "delete"));
        }
        let endpoint = Endpoint::ConsumerGroup(name_or_id.to_string());
        self.client
            .execute_empty(self.client.new_request(Method::DELETE, &endpoint))
            .await
    }

    /// Fetches one page of consumer groups; see [`Client::list`].
    pub async fn list(
        &self,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<ConsumerGroup>, Option<ListOpt>), Error> {
        self.client.list(&Endpoint::ConsumerGroups, opt).await
    }

    /// Lazily walks the pages starting at `opt` (default: first page of
    /// `PAGE_SIZE`). The stream ends after the last page or the first error.
    pub fn pages(
        &self,
        opt: Option<ListOpt>,
    ) -> impl Stream<Item = Result<Vec<ConsumerGroup>, Error>> + 'a {
        let service = *self;
        let start = opt.unwrap_or_else(|| ListOpt::with_size(Self::PAGE_SIZE));
        futures::stream::try_unfold(Some(start), move |opt| async move {
            match opt {
                None => Ok::<_, Error>(None),
                Some(opt) => {
                    let (groups, next) = service.list(Some(&opt)).await?;
                    Ok(Some((groups, next)))
                }
            }
        })
    }

    /// Fetches every consumer group. This can take a while with a lot of
    /// groups present.
    pub async fn list_all(&self) -> Result<Vec<ConsumerGroup>, Error> {
        self.pages(None).try_concat().await
    }
}
