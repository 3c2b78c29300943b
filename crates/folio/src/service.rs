//! Typed operations over the portfolio backend.
//!
//! Every operation is a straight pass-through to the [`ApiClient`]: failures
//! are logged with the operation name and handed back to the caller untouched.

use crate::api::{ApiClient, ApiResult, Query};
use crate::data::{
    Category, ContactMessage, ExperienceEntry, HealthStatus, NewContactMessage, PersonalInfo,
    Portfolio, Project,
};
use crate::log::error;

/// Page size used when listing contact messages without an explicit limit.
pub const DEFAULT_CONTACT_LIMIT: u32 = 50;

pub struct PortfolioService<C> {
    client: C,
}

impl<C: ApiClient> PortfolioService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Personal info, projects and experience in one payload.
    pub async fn get_portfolio(&self) -> ApiResult<Portfolio> {
        logged(
            "get_portfolio",
            self.client.get("/portfolio", &Query::new()).await,
        )
    }

    pub async fn get_personal_info(&self) -> ApiResult<PersonalInfo> {
        logged(
            "get_personal_info",
            self.client.get("/portfolio/personal", &Query::new()).await,
        )
    }

    /// Projects, optionally narrowed to one category. [`Category::All`] sends
    /// no `category` parameter at all.
    pub async fn get_projects(&self, category: &Category) -> ApiResult<Vec<Project>> {
        let query = match category.filter() {
            Some(filter) => Query::new().with("category", filter),
            None => Query::new(),
        };

        logged(
            "get_projects",
            self.client.get("/portfolio/projects", &query).await,
        )
    }

    pub async fn get_experience(&self) -> ApiResult<Vec<ExperienceEntry>> {
        logged(
            "get_experience",
            self.client.get("/portfolio/experience", &Query::new()).await,
        )
    }

    /// Backend validation errors come back verbatim as [`crate::api::ApiError::Http`].
    pub async fn submit_contact_message(
        &self,
        message: &NewContactMessage,
    ) -> ApiResult<ContactMessage> {
        logged(
            "submit_contact_message",
            self.client.post("/portfolio/contact", message).await,
        )
    }

    /// Most recent contact messages. Access control is the backend's job.
    pub async fn get_contact_messages(&self, limit: u32) -> ApiResult<Vec<ContactMessage>> {
        let query = Query::new().with("limit", limit);
        logged(
            "get_contact_messages",
            self.client.get("/portfolio/contact", &query).await,
        )
    }

    pub async fn health_check(&self) -> ApiResult<HealthStatus> {
        logged("health_check", self.client.get("/health", &Query::new()).await)
    }
}

fn logged<T>(operation: &'static str, result: ApiResult<T>) -> ApiResult<T> {
    if let Err(err) = &result {
        error!(operation, status = ?err.status(), "Portfolio request failed: {err}");
    }
    result
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};

    use super::*;
    use crate::api::{ApiError, HttpMethod};

    #[derive(Debug, Clone, PartialEq)]
    struct Recorded {
        method: HttpMethod,
        endpoint: String,
        query: Query,
        body: Option<Value>,
    }

    /// Answers from a table keyed by endpoint and records every call.
    #[derive(Default)]
    struct MockClient {
        replies: HashMap<&'static str, ApiResult<Value>>,
        calls: RefCell<Vec<Recorded>>,
    }

    impl MockClient {
        fn reply(mut self, endpoint: &'static str, reply: ApiResult<Value>) -> Self {
            self.replies.insert(endpoint, reply);
            self
        }

        fn answer<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
            let value = self
                .replies
                .get(endpoint)
                .cloned()
                .unwrap_or_else(|| Err(ApiError::Network(format!("no reply for {endpoint}"))))?;
            serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
        }

        fn calls(&self) -> Vec<Recorded> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ApiClient for MockClient {
        async fn get<T>(&self, endpoint: &str, query: &Query) -> ApiResult<T>
        where
            T: DeserializeOwned,
        {
            self.calls.borrow_mut().push(Recorded {
                method: HttpMethod::Get,
                endpoint: endpoint.to_string(),
                query: query.clone(),
                body: None,
            });
            self.answer(endpoint)
        }

        async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
        where
            T: DeserializeOwned,
            B: Serialize + ?Sized,
        {
            let body = serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
            self.calls.borrow_mut().push(Recorded {
                method: HttpMethod::Post,
                endpoint: endpoint.to_string(),
                query: Query::new(),
                body: Some(body),
            });
            self.answer(endpoint)
        }
    }

    fn project_json(id: u32, category: &str) -> Value {
        json!({
            "id": id,
            "title": "A",
            "description": "d",
            "category": category,
            "technologies": ["TensorFlow"],
            "image": "https://img",
            "github": "https://github.com/a"
        })
    }

    #[tokio::test]
    async fn test_named_category_is_sent_as_filter() {
        let client = MockClient::default().reply(
            "/portfolio/projects",
            Ok(json!([project_json(1, "Machine Learning")])),
        );
        let service = PortfolioService::new(client);

        let projects = service
            .get_projects(&Category::new("Machine Learning"))
            .await
            .unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].category, "Machine Learning");

        let calls = service.client().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].endpoint, "/portfolio/projects");
        assert_eq!(
            calls[0].query,
            Query::new().with("category", "Machine Learning")
        );
    }

    #[tokio::test]
    async fn test_all_category_sends_no_filter() {
        let client = MockClient::default().reply("/portfolio/projects", Ok(json!([])));
        let service = PortfolioService::new(client);

        service.get_projects(&Category::All).await.unwrap();
        service.get_projects(&Category::new("All")).await.unwrap();

        for call in service.client().calls() {
            assert!(call.query.is_empty());
            assert_eq!(call.query.get("category"), None);
        }
    }

    #[tokio::test]
    async fn test_empty_experience_is_success() {
        let client = MockClient::default().reply("/portfolio/experience", Ok(json!([])));
        let service = PortfolioService::new(client);

        let experience = service.get_experience().await.unwrap();
        assert!(experience.is_empty());
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let backend_error = ApiError::Http {
            status: 500,
            message: "Internal server error".into(),
        };
        let client = MockClient::default()
            .reply("/portfolio/personal", Err(backend_error.clone()))
            .reply("/portfolio", Err(ApiError::Timeout(crate::api::DEFAULT_TIMEOUT)));
        let service = PortfolioService::new(client);

        assert_eq!(service.get_personal_info().await, Err(backend_error));
        assert_eq!(
            service.get_portfolio().await,
            Err(ApiError::Timeout(crate::api::DEFAULT_TIMEOUT))
        );
    }

    #[tokio::test]
    async fn test_contact_submission_posts_json_body() {
        let client = MockClient::default().reply(
            "/portfolio/contact",
            Ok(json!({
                "id": "c0ffee",
                "name": "Bob",
                "email": "bob@example.com",
                "message": "Hello",
                "created_at": "2025-07-26T10:00:00",
                "read": false
            })),
        );
        let service = PortfolioService::new(client);
        let draft = NewContactMessage {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            message: "Hello".into(),
        };

        let stored = service.submit_contact_message(&draft).await.unwrap();
        assert_eq!(stored.id, "c0ffee");

        let calls = service.client().calls();
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(
            calls[0].body,
            Some(json!({"name": "Bob", "email": "bob@example.com", "message": "Hello"}))
        );
    }

    #[tokio::test]
    async fn test_contact_listing_sends_limit() {
        let client = MockClient::default().reply("/portfolio/contact", Ok(json!([])));
        let service = PortfolioService::new(client);

        service
            .get_contact_messages(DEFAULT_CONTACT_LIMIT)
            .await
            .unwrap();
        service.get_contact_messages(5).await.unwrap();

        let calls = service.client().calls();
        assert_eq!(calls[0].query.get("limit"), Some("50"));
        assert_eq!(calls[1].query.get("limit"), Some("5"));
    }

    #[tokio::test]
    async fn test_portfolio_and_health() {
        let client = MockClient::default()
            .reply(
                "/portfolio",
                Ok(json!({
                    "personal": {
                        "name": "Ada", "title": "t", "subtitle": "s", "email": "e",
                        "phone": "p", "location": "l", "linkedin": "li", "github": "gh"
                    },
                    "projects": [project_json(1, "Data Analytics")],
                    "experience": []
                })),
            )
            .reply("/health", Ok(json!({"status": "healthy"})));
        let service = PortfolioService::new(client);

        let portfolio = service.get_portfolio().await.unwrap();
        assert_eq!(portfolio.projects.len(), 1);

        let health = service.health_check().await.unwrap();
        assert_eq!(health["status"], "healthy");
    }

    #[tokio::test]
    async fn test_malformed_payload_is_parse_error() {
        let client =
            MockClient::default().reply("/portfolio/personal", Ok(json!({"name": "only"})));
        let service = PortfolioService::new(client);

        assert!(matches!(
            service.get_personal_info().await,
            Err(ApiError::Parse(_))
        ));
    }
}
