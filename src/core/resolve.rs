use crate::core::render::{join_amenity_names, ANONYMOUS, UNKNOWN_HOST};
use crate::domain::model::Review;
use crate::domain::ports::PlacesApi;
use futures_util::future::join_all;

/// 同時查詢所有設施名稱，等全部完成後以逗號連接。
///
/// 單一查詢失敗只會被略過，不會讓整個結果失敗。
pub async fn resolve_amenity_names<A>(api: &A, ids: &[String], token: Option<&str>) -> String
where
    A: PlacesApi + ?Sized,
{
    if ids.is_empty() {
        return join_amenity_names(&[]);
    }

    let lookups = ids.iter().map(|id| async move {
        match api.get_amenity_name(id, token).await {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!("Amenity lookup for {} failed: {}", id, e);
                None
            }
        }
    });

    let names: Vec<String> = join_all(lookups).await.into_iter().flatten().collect();
    tracing::debug!("Resolved {}/{} amenity names", names.len(), ids.len());
    join_amenity_names(&names)
}

/// 評論作者：優先使用評論內的名稱，其次查詢使用者，最後回退為 "Anonymous"
pub async fn resolve_author_name<A>(api: &A, review: &Review, token: Option<&str>) -> String
where
    A: PlacesApi + ?Sized,
{
    if let Some(author) = review.author.as_deref().map(str::trim) {
        if !author.is_empty() {
            return author.to_string();
        }
    }

    match review.user_id.as_deref() {
        Some(user_id) => lookup_user_name(api, user_id, token)
            .await
            .unwrap_or_else(|| ANONYMOUS.to_string()),
        None => ANONYMOUS.to_string(),
    }
}

pub async fn resolve_host_name<A>(api: &A, owner_id: Option<&str>, token: Option<&str>) -> String
where
    A: PlacesApi + ?Sized,
{
    match owner_id {
        Some(owner_id) => lookup_user_name(api, owner_id, token)
            .await
            .unwrap_or_else(|| UNKNOWN_HOST.to_string()),
        None => UNKNOWN_HOST.to_string(),
    }
}

async fn lookup_user_name<A>(api: &A, user_id: &str, token: Option<&str>) -> Option<String>
where
    A: PlacesApi + ?Sized,
{
    match api.get_user_name(user_id, token).await {
        Ok(name) if !name.trim().is_empty() => Some(name.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("User lookup for {} failed: {}", user_id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::NO_AMENITIES;
    use crate::domain::model::{Place, ReviewDraft};
    use crate::utils::error::{ClientError, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 只實作名稱查詢的假 API，並記錄收到的 token
    #[derive(Default)]
    struct LookupApi {
        amenities: HashMap<String, String>,
        users: HashMap<String, String>,
        seen_tokens: Mutex<Vec<Option<String>>>,
    }

    impl LookupApi {
        fn with_amenity(mut self, id: &str, name: &str) -> Self {
            self.amenities.insert(id.to_string(), name.to_string());
            self
        }

        fn with_user(mut self, id: &str, name: &str) -> Self {
            self.users.insert(id.to_string(), name.to_string());
            self
        }

        fn not_found() -> ClientError {
            ClientError::Api {
                status: 404,
                message: "Not found".to_string(),
            }
        }
    }

    #[async_trait]
    impl PlacesApi for LookupApi {
        async fn list_places(&self, _token: Option<&str>) -> Result<Vec<Place>> {
            unimplemented!()
        }

        async fn get_place(&self, _id: &str, _token: Option<&str>) -> Result<Place> {
            unimplemented!()
        }

        async fn list_reviews(&self, _place_id: &str, _token: Option<&str>) -> Result<Vec<Review>> {
            unimplemented!()
        }

        async fn get_user_name(&self, user_id: &str, _token: Option<&str>) -> Result<String> {
            self.users.get(user_id).cloned().ok_or_else(Self::not_found)
        }

        async fn get_amenity_name(&self, id: &str, token: Option<&str>) -> Result<String> {
            self.seen_tokens
                .lock()
                .unwrap()
                .push(token.map(str::to_string));
            self.amenities.get(id).cloned().ok_or_else(Self::not_found)
        }

        async fn login(&self, _email: &str, _password: &str) -> Result<String> {
            unimplemented!()
        }

        async fn submit_review(
            &self,
            _token: &str,
            _place_id: &str,
            _draft: &ReviewDraft,
        ) -> Result<Review> {
            unimplemented!()
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn review(author: Option<&str>, user_id: Option<&str>) -> Review {
        Review {
            id: None,
            author: author.map(str::to_string),
            user_id: user_id.map(str::to_string),
            text: "Nice".to_string(),
            rating: 5,
            place_id: None,
        }
    }

    #[test]
    fn test_empty_amenity_list_yields_fixed_string() {
        let api = LookupApi::default();
        let joined = tokio_test::block_on(resolve_amenity_names(&api, &[], None));

        assert_eq!(joined, NO_AMENITIES);
        assert!(api.seen_tokens.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failed_lookup_is_dropped_from_join() {
        let api = LookupApi::default()
            .with_amenity("a1", "Wifi")
            .with_amenity("a3", "Pool");

        let joined = tokio_test::block_on(resolve_amenity_names(
            &api,
            &ids(&["a1", "a2", "a3"]),
            Some("tok"),
        ));

        assert_eq!(joined, "Wifi, Pool");
        let seen = api.seen_tokens.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|t| t.as_deref() == Some("tok")));
    }

    #[test]
    fn test_all_lookups_failing_yields_fixed_string() {
        let api = LookupApi::default();
        let joined =
            tokio_test::block_on(resolve_amenity_names(&api, &ids(&["x", "y"]), None));

        assert_eq!(joined, NO_AMENITIES);
    }

    #[tokio::test]
    async fn test_author_name_resolution() {
        let api = LookupApi::default().with_user("u1", "Ada Lovelace");

        assert_eq!(
            resolve_author_name(&api, &review(Some("Grace"), Some("u1")), None).await,
            "Grace"
        );
        assert_eq!(
            resolve_author_name(&api, &review(None, Some("u1")), None).await,
            "Ada Lovelace"
        );
        assert_eq!(
            resolve_author_name(&api, &review(Some(" "), Some("missing")), None).await,
            ANONYMOUS
        );
        assert_eq!(resolve_author_name(&api, &review(None, None), None).await, ANONYMOUS);
    }

    #[tokio::test]
    async fn test_host_name_falls_back_to_unknown() {
        let api = LookupApi::default().with_user("owner", "Sam Host");

        assert_eq!(resolve_host_name(&api, Some("owner"), None).await, "Sam Host");
        assert_eq!(resolve_host_name(&api, Some("nobody"), None).await, UNKNOWN_HOST);
        assert_eq!(resolve_host_name(&api, None, None).await, UNKNOWN_HOST);
    }
}
