use crate::error::ApiError;
use log::info;
use uuid::Uuid;

/// CDN object storage: authenticated PUT of raw bytes to a generated unique
/// path, public URL returned for use as the image reference.
#[derive(Clone)]
pub struct Cdn {
    upload_url: String,
    public_url: String,
    token: String,
    client: reqwest::Client,
}

impl Cdn {
    pub fn new(
        upload_url: impl Into<String>,
        public_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Cdn {
            upload_url: upload_url.into().trim_end_matches('/').to_owned(),
            public_url: public_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn upload(&self, bytes: Vec<u8>, extension: &str) -> Result<String, ApiError> {
        let path = format!("images/{}.{}", Uuid::new_v4(), extension);
        let response = self
            .client
            .put(format!("{}/{}", self.upload_url, path))
            .bearer_auth(&self.token)
            .body(bytes)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upload(format!("{status}: {body}")));
        }
        let url = format!("{}/{}", self.public_url, path);
        info!("uploaded image to {url}");
        Ok(url)
    }
}
