use crate::domain::model::{Place, PriceFilter};

/// 列表頁狀態：最近一次取得的房源與目前的價格上限。
///
/// 可見集合每次由 `visible_places` 計算，不另外儲存。
#[derive(Debug, Clone, Default)]
pub struct PlaceListView {
    places: Vec<Place>,
    filter: PriceFilter,
}

impl PlaceListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整批取代，不與舊資料合併
    pub fn set_places(&mut self, places: Vec<Place>) {
        tracing::debug!("View model now holds {} places", places.len());
        self.places = places;
    }

    pub fn clear(&mut self) {
        self.places.clear();
    }

    pub fn set_max_price(&mut self, filter: PriceFilter) {
        self.filter = filter;
    }

    pub fn max_price(&self) -> PriceFilter {
        self.filter
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn visible_places(&self) -> Vec<&Place> {
        self.places
            .iter()
            .filter(|place| self.filter.admits(place.price()))
            .collect()
    }
}
