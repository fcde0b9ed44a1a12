use crate::domain::model::{
    deserialize_amenity_ids, Amenity, LoginResponse, Place, Review, ReviewDraft, User,
};
use crate::domain::ports::PlacesApi;
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api/v1";

/// reqwest 實作的 API 客戶端。每個呼叫只發一次請求，不重試、不設逾時
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: Url,
    client: Client,
}

/// 錯誤回應的內容，後端使用 `message` 或 `error`
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// `GET /places/{id}` 有時會包一層 `place`
#[derive(Deserialize)]
#[serde(untagged)]
enum PlaceEnvelope {
    Wrapped {
        place: Place,
        #[serde(default, deserialize_with = "deserialize_amenity_ids")]
        associated_amenities: Vec<String>,
    },
    Bare(Place),
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ClientError::InvalidConfigValueError {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfigValueError {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// 以 path segment 組出端點，id 會被正確編碼
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();

        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| reason_phrase(status));

        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        token: Option<&str>,
    ) -> Result<T> {
        let url = self.endpoint(segments);
        tracing::debug!("GET {}", url);
        let request = Self::authorize(self.client.get(url), token);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// 後端以 404 表示集合為空
    async fn get_collection<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        token: Option<&str>,
    ) -> Result<Vec<T>> {
        match self.get_json(segments, token).await {
            Err(ClientError::Api { status: 404, message }) => {
                tracing::debug!("Collection {:?} is empty: {}", segments, message);
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()))
}

#[async_trait]
impl PlacesApi for HttpApiClient {
    async fn list_places(&self, token: Option<&str>) -> Result<Vec<Place>> {
        self.get_collection(&["places", ""], token).await
    }

    async fn get_place(&self, id: &str, token: Option<&str>) -> Result<Place> {
        let envelope: PlaceEnvelope = self.get_json(&["places", id], token).await?;
        Ok(match envelope {
            PlaceEnvelope::Wrapped {
                mut place,
                associated_amenities,
            } => {
                if place.amenities.is_empty() {
                    place.amenities = associated_amenities;
                }
                place
            }
            PlaceEnvelope::Bare(place) => place,
        })
    }

    async fn list_reviews(&self, place_id: &str, token: Option<&str>) -> Result<Vec<Review>> {
        self.get_collection(&["places", place_id, "reviews"], token)
            .await
    }

    async fn get_user_name(&self, user_id: &str, token: Option<&str>) -> Result<String> {
        let user: User = self.get_json(&["users", user_id], token).await?;
        Ok(user.display_name())
    }

    async fn get_amenity_name(&self, id: &str, token: Option<&str>) -> Result<String> {
        let amenity: Amenity = self.get_json(&["amenities", id], token).await?;
        amenity.name.ok_or_else(|| ClientError::ValidationError {
            message: format!("Amenity {} has no name", id),
        })
    }

    async fn login(&self, email: &str, password: &str) -> Result<String> {
        let url = self.endpoint(&["auth", "login"]);
        tracing::debug!("POST {}", url);
        let request = self.client.post(url).json(&serde_json::json!({
            "email": email,
            "password": password,
        }));

        let response = self.send(request).await?;
        let body: LoginResponse = response.json().await?;
        body.token()
            .map(str::to_string)
            .ok_or_else(|| ClientError::InvalidResponse {
                message: "Login response carries no token".to_string(),
            })
    }

    async fn submit_review(
        &self,
        token: &str,
        place_id: &str,
        draft: &ReviewDraft,
    ) -> Result<Review> {
        let url = self.endpoint(&["places", place_id, "reviews"]);
        tracing::debug!("POST {}", url);
        let request = Self::authorize(self.client.post(url), Some(token)).json(&serde_json::json!({
            "text": draft.text,
            "rating": draft.rating,
            "place_id": place_id,
        }));

        let response = self.send(request).await?;
        Ok(response.json().await?)
    }
}
