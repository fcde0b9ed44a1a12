use crate::app::navigator::{NavigationContext, Page};
use crate::core::render::PLACE_NOT_FOUND;
use crate::domain::model::ReviewDraft;
use crate::domain::ports::{PlacesApi, RenderSurface, SessionStore};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range};

pub const LOGIN_REQUIRED: &str = "You must be logged in to submit a review.";

#[derive(Debug, Clone)]
pub struct ReviewForm {
    pub text: String,
    pub rating: u8,
}

impl ReviewForm {
    fn to_draft(&self) -> Result<ReviewDraft> {
        validate_non_empty_string("Review text", &self.text)?;
        validate_range("Rating", self.rating, 0, 5)?;
        Ok(ReviewDraft {
            text: self.text.trim().to_string(),
            rating: self.rating,
        })
    }
}

pub struct AddReviewPage<'a, A: ?Sized, S: ?Sized, R: ?Sized> {
    api: &'a A,
    session: &'a S,
    surface: &'a mut R,
}

impl<'a, A, S, R> AddReviewPage<'a, A, S, R>
where
    A: PlacesApi + ?Sized,
    S: SessionStore + ?Sized,
    R: RenderSurface + ?Sized,
{
    pub fn new(api: &'a A, session: &'a S, surface: &'a mut R) -> Self {
        Self {
            api,
            session,
            surface,
        }
    }

    /// 送出評論。未登入或缺少房源 id 時直接中止，不會發出任何請求
    pub async fn submit(&mut self, context: &NavigationContext, form: &ReviewForm) -> Option<Page> {
        let Some(token) = self.session.get_token() else {
            tracing::warn!("{}", ClientError::AuthRequired);
            self.surface.notify(LOGIN_REQUIRED);
            return None;
        };

        let Some(place_id) = context.place_id() else {
            tracing::warn!(
                "{}",
                ClientError::NotFoundInContext {
                    param: "id".to_string()
                }
            );
            self.surface.notify(PLACE_NOT_FOUND);
            return None;
        };

        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.surface.notify(&e.user_friendly_message());
                return None;
            }
        };

        match self.api.submit_review(&token, place_id, &draft).await {
            Ok(review) => {
                tracing::info!(
                    "✅ Review {} submitted for place {}",
                    review.id.as_deref().unwrap_or("(new)"),
                    place_id
                );
                self.surface.notify("Review submitted successfully!");
                Some(Page::Detail {
                    place_id: place_id.to_string(),
                })
            }
            Err(e @ ClientError::Api { .. }) => {
                tracing::warn!("Review rejected: {}", e);
                self.surface.notify(&format!(
                    "Failed to submit review: {}",
                    e.user_friendly_message()
                ));
                None
            }
            Err(e) => {
                tracing::error!("Error submitting review: {}", e);
                self.surface
                    .notify("Something went wrong while submitting your review.");
                None
            }
        }
    }
}
