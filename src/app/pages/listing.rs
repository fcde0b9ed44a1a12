use crate::core::render::{render_listing, render_listing_error};
use crate::core::view_model::PlaceListView;
use crate::domain::model::PriceFilter;
use crate::domain::ports::{PlacesApi, RenderSurface, SessionStore};
use crate::utils::error::Result;

/// 房源列表頁
pub struct ListingPage<'a, A: ?Sized, S: ?Sized, R: ?Sized> {
    api: &'a A,
    session: &'a S,
    surface: &'a mut R,
    view: PlaceListView,
}

impl<'a, A, S, R> ListingPage<'a, A, S, R>
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
            view: PlaceListView::new(),
        }
    }

    pub fn view(&self) -> &PlaceListView {
        &self.view
    }

    /// 載入：依登入狀態取得公開或會員列表並繪製。
    ///
    /// 取得失敗時清空列表並顯示錯誤，不保留舊內容。只有 session 寫入失敗才回傳錯誤。
    pub async fn load(&mut self) -> Result<()> {
        let token = self.session.get_token();
        self.surface.set_login_link_visible(token.is_none());

        if token.is_some() {
            tracing::info!("Fetching places (authenticated view)");
        } else {
            tracing::info!("Fetching places (public view)");
        }

        match self.api.list_places(token.as_deref()).await {
            Ok(places) => {
                tracing::info!("Fetched {} places", places.len());
                self.view.set_places(places);
                self.render();
            }
            Err(e) => {
                tracing::error!("Error fetching places: {}", e);
                self.view.clear();
                self.surface
                    .render_listing(&render_listing_error(&e.user_friendly_message()));

                if token.is_some() && e.is_unauthorized() {
                    tracing::warn!("Session rejected by the server, clearing stored token");
                    self.session.clear_token()?;
                    self.surface.set_login_link_visible(true);
                }
            }
        }

        Ok(())
    }

    /// 價格篩選變更後重新繪製
    pub fn apply_filter(&mut self, filter: PriceFilter) {
        tracing::debug!("Price filter changed to {:?}", filter);
        self.view.set_max_price(filter);
        self.render();
    }

    fn render(&mut self) {
        let visible = self.view.visible_places();
        let region = render_listing(&visible, self.view.places().len());
        self.surface.render_listing(&region);
    }
}
