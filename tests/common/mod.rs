#![allow(dead_code)]

use hbnb_client::core::render::{ListingRegion, PlaceDetail, ReviewsRegion};
use hbnb_client::core::RenderSurface;
use hbnb_client::HttpApiClient;
use httpmock::MockServer;

/// 記錄每次繪製內容的假畫面，方便斷言
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub login_link_visible: Option<bool>,
    pub listings: Vec<ListingRegion>,
    pub places: Vec<PlaceDetail>,
    pub place_errors: Vec<String>,
    pub reviews: Vec<ReviewsRegion>,
    pub review_form_enabled: Option<bool>,
    pub notifications: Vec<String>,
}

impl RecordingSurface {
    pub fn last_listing(&self) -> &ListingRegion {
        self.listings.last().expect("listing was never rendered")
    }

    pub fn last_titles(&self) -> Vec<String> {
        match self.last_listing() {
            ListingRegion::Cards(cards) => cards.iter().map(|c| c.display_title.clone()).collect(),
            other => panic!("expected cards, got {:?}", other),
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn set_login_link_visible(&mut self, visible: bool) {
        self.login_link_visible = Some(visible);
    }

    fn render_listing(&mut self, region: &ListingRegion) {
        self.listings.push(region.clone());
    }

    fn render_place(&mut self, detail: &PlaceDetail) {
        self.places.push(detail.clone());
    }

    fn render_place_error(&mut self, message: &str) {
        self.place_errors.push(message.to_string());
    }

    fn render_reviews(&mut self, region: &ReviewsRegion) {
        self.reviews.push(region.clone());
    }

    fn set_review_form_enabled(&mut self, enabled: bool) {
        self.review_form_enabled = Some(enabled);
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

pub fn api_for(server: &MockServer) -> HttpApiClient {
    HttpApiClient::new(&server.url("/api/v1")).unwrap()
}
