//! Client wrappers for the user management endpoints. Endpoint paths live here;
//! the backend owns the user schema and authorization.

use serde::Serialize;

use crate::{
    api::{ApiClient, ApiError, ResponseBody},
    features::users::types::{PageRequest, User, UserId},
};

const USERS_PAGES_PATH: &str = "/users_pages";
const USERS_GET_PATH: &str = "/users";
const USERS_CREATE_PATH: &str = "/users_create";
const USERS_UPDATE_PATH: &str = "/users_update";
const USERS_DELETE_PATH: &str = "/users_delete";

#[derive(Serialize)]
struct UserIdBody<'a> {
    id: &'a UserId,
}

#[derive(Serialize)]
struct UserIdQuery<'a> {
    user_id: &'a UserId,
}

#[derive(Clone, Debug)]
pub struct UsersClient {
    api: ApiClient,
}

impl UsersClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetches one page of users.
    ///
    /// # Errors
    /// Returns the HTTP client's error if the request fails or the server answers non-2xx.
    pub async fn list_users(&self, page: &PageRequest) -> Result<ResponseBody, ApiError> {
        self.api.get_json(USERS_PAGES_PATH, page).await
    }

    /// Shorthand for [`UsersClient::list_users`] without filters.
    ///
    /// # Errors
    /// Same as [`UsersClient::list_users`].
    pub async fn list_users_page(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<ResponseBody, ApiError> {
        self.list_users(&PageRequest::new(page_index, page_size))
            .await
    }

    /// Fetches a single user by id.
    ///
    /// # Errors
    /// Returns [`ApiError::MissingUserId`] without sending anything if `id` is zero or empty,
    /// otherwise the HTTP client's error.
    pub async fn get_user(&self, id: impl Into<UserId>) -> Result<ResponseBody, ApiError> {
        let id = require_id(id.into())?;
        self.api
            .get_json(USERS_GET_PATH, &UserIdQuery { user_id: &id })
            .await
    }

    /// Creates a user from the full payload. No field is checked locally.
    ///
    /// # Errors
    /// Returns the HTTP client's error if the request fails or the server answers non-2xx.
    pub async fn create_user(&self, user: &User) -> Result<ResponseBody, ApiError> {
        self.api.post_json(USERS_CREATE_PATH, user).await
    }

    /// Sends the full payload as an update.
    ///
    /// # Errors
    /// Returns [`ApiError::MissingUserId`] without sending anything if the user has no usable id,
    /// otherwise the HTTP client's error.
    pub async fn update_user(&self, user: &User) -> Result<ResponseBody, ApiError> {
        if !user.has_id() {
            return Err(ApiError::MissingUserId);
        }
        self.api.put_json(USERS_UPDATE_PATH, user).await
    }

    /// Deletes a user. The id travels in the JSON body, not in the path.
    ///
    /// # Errors
    /// Returns [`ApiError::MissingUserId`] without sending anything if `id` is zero or empty,
    /// otherwise the HTTP client's error.
    pub async fn delete_user(&self, id: impl Into<UserId>) -> Result<ResponseBody, ApiError> {
        let id = require_id(id.into())?;
        self.api
            .delete_json(USERS_DELETE_PATH, &UserIdBody { id: &id })
            .await
    }
}

fn require_id(id: UserId) -> Result<UserId, ApiError> {
    if id.is_truthy() {
        Ok(id)
    } else {
        Err(ApiError::MissingUserId)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{UserIdBody, UserIdQuery, UsersClient};
    use crate::api::{ApiClient, ApiConfig, ApiError};
    use crate::features::users::types::{PageRequest, User, UserId};
    use anyhow::Result;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{any, body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn users_client(server: &MockServer) -> UsersClient {
        let config = ApiConfig::new(&format!("{}/api", server.uri())).unwrap();
        UsersClient::new(ApiClient::new(config).unwrap())
    }

    // Fails the test on drop if any request reaches the server.
    async fn forbid_requests(server: &MockServer) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }

    #[test]
    fn id_payloads_serialize_to_wire_shape() {
        let id = UserId::Number(5);
        assert_eq!(
            serde_json::to_value(UserIdBody { id: &id }).unwrap(),
            json!({"id": 5})
        );
        let id = UserId::from("u-1");
        assert_eq!(
            serde_json::to_value(UserIdQuery { user_id: &id }).unwrap(),
            json!({"user_id": "u-1"})
        );
    }

    #[tokio::test]
    async fn list_users_sends_default_page() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users_pages"))
            .and(query_param("pageindex", "0"))
            .and(query_param("pagesize", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .expect(1)
            .mount(&server)
            .await;

        let body = users_client(&server)
            .list_users(&PageRequest::default())
            .await?;
        assert_eq!(body, json!([{"id": 1}]));
        Ok(())
    }

    #[tokio::test]
    async fn list_users_page_sends_given_values() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users_pages"))
            .and(query_param("pageindex", "3"))
            .and(query_param("pagesize", "500"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let body = users_client(&server).list_users_page(3, 500).await?;
        assert_eq!(body, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn list_users_sends_filters() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users_pages"))
            .and(query_param("pageindex", "1"))
            .and(query_param("pagesize", "20"))
            .and(query_param("status", "A"))
            .and(query_param("sortby", "name"))
            .and(query_param("descending", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let page = PageRequest::new(1, 20)
            .with_status("A")
            .sorted_by("name", true);
        users_client(&server).list_users(&page).await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_user_sends_id_as_query() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(query_param("user_id", "7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "g"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let body = users_client(&server).get_user(7_i64).await?;
        assert_eq!(body, json!({"id": 7, "name": "g"}));
        Ok(())
    }

    #[tokio::test]
    async fn update_user_puts_full_payload() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users_update"))
            .and(body_json(json!({"id": 4, "name": "d", "age": 40})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4, "name": "d"})))
            .expect(1)
            .mount(&server)
            .await;

        let user = User::new()
            .with_id(4_i64)
            .with_field("name", "d")
            .with_field("age", 40);
        let body = users_client(&server).update_user(&user).await?;
        assert_eq!(body, json!({"id": 4, "name": "d"}));
        Ok(())
    }

    #[tokio::test]
    async fn update_user_without_id_sends_nothing() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        forbid_requests(&server).await;
        let client = users_client(&server);

        let result = client.update_user(&User::new().with_field("name", "x")).await;
        assert!(matches!(result, Err(ApiError::MissingUserId)));

        let result = client.update_user(&User::new().with_id(0_i64)).await;
        assert!(matches!(result, Err(ApiError::MissingUserId)));

        let result = client.update_user(&User::new().with_id("")).await;
        assert!(matches!(result, Err(ApiError::MissingUserId)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_and_get_without_id_send_nothing() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        forbid_requests(&server).await;
        let client = users_client(&server);

        let result = client.delete_user(0_i64).await;
        assert!(matches!(result, Err(ApiError::MissingUserId)));
        let result = client.delete_user("").await;
        assert!(matches!(result, Err(ApiError::MissingUserId)));
        let result = client.get_user(0_i64).await;
        assert!(matches!(result, Err(ApiError::MissingUserId)));
        Ok(())
    }

    #[tokio::test]
    async fn server_error_passes_through() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users_create"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let result = users_client(&server)
            .create_user(&User::new().with_field("name", "a"))
            .await;
        let err = result.unwrap_err();
        assert_eq!(err.status().map(|status| status.as_u16()), Some(500));
        assert!(matches!(err, ApiError::Http(ref inner) if inner.is_status()));
        Ok(())
    }
}
