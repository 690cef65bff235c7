use kong_types::{consumer::Consumer, consumer_group::ConsumerGroupObject};
use reqwest::Method;
use serde::Serialize;

use super::{client::Client, endpoint::Endpoint, error::Error};

#[derive(Debug, Serialize)]
struct AddConsumer<'a> {
    consumer: &'a str,
}

/// Manages which consumers belong to a consumer group.
#[derive(Debug, Clone, Copy)]
pub struct ConsumerGroupConsumerService<'a> {
    client: &'a Client,
}

impl<'a> ConsumerGroupConsumerService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Adds a consumer to a group and returns the group with its members.
    pub async fn create(
        &self,
        group_name_or_id: &str,
        consumer_name_or_id: &str,
    ) -> Result<ConsumerGroupObject, Error> {
        if group_name_or_id.is_empty() {
            return Err(Error::missing("group_name_or_id", "create"));
        }
        if consumer_name_or_id.is_empty() {
            return Err(Error::missing("consumer_name_or_id", "create"));
        }
        let endpoint = Endpoint::ConsumerGroupConsumers(group_name_or_id.to_string());
        let body = AddConsumer {
            consumer: consumer_name_or_id,
        };
        self.client
            .execute(self.client.new_request(Method::POST, &endpoint).json(&body))
            .await
    }

    pub async fn list_all(&self, group_name_or_id: &str) -> Result<Vec<Consumer>, Error> {
        if group_name_or_id.is_empty() {
            return Err(Error::missing("group_name_or_id", "list"));
        }
        let endpoint = Endpoint::ConsumerGroupConsumers(group_name_or_id.to_string());
        let object: ConsumerGroupObject = self
            .client
            .execute(self.client.new_request(Method::GET, &endpoint))
            .await?;
        Ok(object.consumers)
    }

    pub async fn delete(
        &self,
        group_name_or_id: &str,
        consumer_name_or_id: &str,
    ) -> Result<(), Error> {
        if group_name_or_id.is_empty() {
            return Err(Error::missing("group_name_or_id", "delete"));
        }
        if consumer_name_or_id.is_empty() {
            return Err(Error::missing("consumer_name_or_id", "delete"));
        }
        let endpoint = Endpoint::ConsumerGroupConsumer(
            group_name_or_id.to_string(),
            consumer_name_or_id.to_string(),
        );
        self.client
            .execute_empty(self.client.new_request(Method::DELETE, &endpoint))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Config;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client(server: &Server) -> Client {
        Client::new(Some(Config::new(Some(server.url()), None, None))).unwrap()
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_add_consumer() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/consumer_groups/gold/consumers")
            .match_body(Matcher::Json(json!({ "consumer": "alice" })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "consumer_group": { "id": "cg-1", "name": "gold" },
                    "consumers": [{ "id": "c-1", "username": "alice" }],
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client(&server);
        let object = client
            .consumer_group_consumers()
            .create("gold", "alice")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(object.consumer_group.unwrap().id.as_deref(), Some("cg-1"));
        assert_eq!(object.consumers[0].username.as_deref(), Some("alice"));
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_list_members() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/consumer_groups/gold/consumers")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "consumers": [
                        { "id": "c-1", "username": "alice" },
                        { "id": "c-2", "username": "bob" },
                    ],
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client(&server);
        let consumers = client
            .consumer_group_consumers()
            .list_all("gold")
            .await
            .unwrap();

        let names: Vec<_> = consumers.iter().filter_map(|c| c.username.as_deref()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_list_members_of_empty_group() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/consumer_groups/gold/consumers")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let client = client(&server);
        let consumers = client
            .consumer_group_consumers()
            .list_all("gold")
            .await
            .unwrap();
        assert!(consumers.is_empty());
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_remove_consumer() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/consumer_groups/gold/consumers/alice")
            .with_status(204)
            .create_async()
            .await;

        let client = client(&server);
        client
            .consumer_group_consumers()
            .delete("gold", "alice")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tracing_test::traced_test]
    #[tokio::test]
    async fn test_empty_arguments_rejected() {
        let client = Client::new(None).unwrap();
        let members = client.consumer_group_consumers();

        assert!(matches!(members.create("", "alice").await, Err(Error::MissingArgument(_))));
        assert!(matches!(members.create("gold", "").await, Err(Error::MissingArgument(_))));
        assert!(matches!(members.list_all("").await, Err(Error::MissingArgument(_))));
        assert!(matches!(members.delete("gold", "").await, Err(Error::MissingArgument(_))));
    }
}
