use crate::error::{retry_after_seconds, ApiError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use session::Session;

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// One shared HTTP connection: base URL, client and the session the bearer
/// token is read from on every request.
#[derive(Clone)]
pub struct Connection {
    base_url: String,
    client: reqwest::Client,
    session: Session,
}

impl Connection {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into();
        Connection {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.client.get(self.url(path)));
        handle(request.send().await?).await
    }

    pub(crate) async fn get_query<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        handle(request.send().await?).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        handle(request.send().await?).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        handle(request.send().await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.authorize(self.client.delete(self.url(path)));
        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(error_from(response).await)
    }
}

async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        return Ok(response.json().await?);
    }
    Err(error_from(response).await)
}

async fn error_from(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    match status.as_u16() {
        401 | 403 => ApiError::Unauthorized,
        429 => ApiError::RateLimited {
            retry_after: retry_after_seconds(&message),
        },
        _ => ApiError::Backend(message),
    }
}
