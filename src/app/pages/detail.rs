use crate::app::navigator::NavigationContext;
use crate::core::render::{
    render_place_detail, render_reviews, review_card, ReviewsRegion, PLACE_NOT_FOUND,
};
use crate::core::resolve::{resolve_amenity_names, resolve_author_name, resolve_host_name};
use crate::domain::ports::{PlacesApi, RenderSurface, SessionStore};
use crate::utils::error::{ClientError, Result};

/// 單一房源的詳細頁：房源資料、設施與評論
pub struct DetailPage<'a, A: ?Sized, S: ?Sized, R: ?Sized> {
    api: &'a A,
    session: &'a S,
    surface: &'a mut R,
}

impl<'a, A, S, R> DetailPage<'a, A, S, R>
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

    pub async fn load(&mut self, context: &NavigationContext) -> Result<()> {
        let Some(place_id) = context.place_id() else {
            let err = ClientError::NotFoundInContext {
                param: "id".to_string(),
            };
            tracing::warn!("{}", err);
            self.surface.render_place_error(PLACE_NOT_FOUND);
            self.surface.set_review_form_enabled(false);
            return Ok(());
        };

        let token = self.session.get_token();
        let token = token.as_deref();

        // 房源與評論同時取得
        let (place, reviews) = tokio::join!(
            self.api.get_place(place_id, token),
            self.api.list_reviews(place_id, token)
        );

        let place_loaded = match place {
            Ok(place) => {
                let (host, amenities) = tokio::join!(
                    resolve_host_name(self.api, place.owner_id.as_deref(), token),
                    resolve_amenity_names(self.api, &place.amenities, token)
                );
                self.surface
                    .render_place(&render_place_detail(&place, host, amenities));
                true
            }
            Err(ClientError::Api { status: 404, .. }) => {
                tracing::warn!("Place {} does not exist", place_id);
                self.surface.render_place_error(PLACE_NOT_FOUND);
                false
            }
            Err(e) => {
                tracing::error!("Error fetching place {}: {}", place_id, e);
                self.surface
                    .render_place_error("Failed to load place details.");
                false
            }
        };

        let region = match reviews {
            Ok(reviews) => {
                let mut cards = Vec::with_capacity(reviews.len());
                for review in &reviews {
                    let author = resolve_author_name(self.api, review, token).await;
                    cards.push(review_card(review, author));
                }
                render_reviews(cards)
            }
            Err(e) => {
                tracing::error!("Error fetching reviews for {}: {}", place_id, e);
                ReviewsRegion::Error("Failed to load reviews.".to_string())
            }
        };
        self.surface.render_reviews(&region);

        // 房源載入失敗時不提供評論表單
        self.surface
            .set_review_form_enabled(place_loaded && token.is_some());
        Ok(())
    }
}
