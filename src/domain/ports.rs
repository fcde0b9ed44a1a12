use crate::core::render::{ListingRegion, PlaceDetail, ReviewsRegion};
use crate::domain::model::{Place, Review, ReviewDraft};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 登入 token 的存取介面
pub trait SessionStore: Send + Sync {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<()>;
    fn clear_token(&self) -> Result<()>;
}

/// 後端 REST API。`token` 存在時一律帶上 Authorization header
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn list_places(&self, token: Option<&str>) -> Result<Vec<Place>>;
    async fn get_place(&self, id: &str, token: Option<&str>) -> Result<Place>;
    async fn list_reviews(&self, place_id: &str, token: Option<&str>) -> Result<Vec<Review>>;
    async fn get_user_name(&self, user_id: &str, token: Option<&str>) -> Result<String>;
    async fn get_amenity_name(&self, id: &str, token: Option<&str>) -> Result<String>;
    async fn login(&self, email: &str, password: &str) -> Result<String>;
    async fn submit_review(
        &self,
        token: &str,
        place_id: &str,
        draft: &ReviewDraft,
    ) -> Result<Review>;
}

/// 畫面輸出。頁面控制器透過建構時注入的實作更新畫面
pub trait RenderSurface {
    fn set_login_link_visible(&mut self, visible: bool);
    fn render_listing(&mut self, region: &ListingRegion);
    fn render_place(&mut self, detail: &PlaceDetail);
    fn render_place_error(&mut self, message: &str);
    fn render_reviews(&mut self, region: &ReviewsRegion);
    fn set_review_form_enabled(&mut self, enabled: bool);
    /// 阻斷式提示（相當於 alert）
    fn notify(&mut self, message: &str);
}
