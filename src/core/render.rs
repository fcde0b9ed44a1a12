//! 將 view model 狀態投影成可直接顯示的資料。這裡的函式都是純函式。

use crate::app::navigator::Page;
use crate::domain::model::{Place, Review};
use serde::Serialize;

pub const UNNAMED_PLACE: &str = "Unnamed Place";
pub const UNKNOWN_HOST: &str = "Unknown";
pub const ANONYMOUS: &str = "Anonymous";
pub const NO_AMENITIES: &str = "No amenities available";
pub const NO_PLACES: &str = "No places available at the moment.";
pub const NO_REVIEWS: &str = "No reviews yet.";
pub const PLACE_NOT_FOUND: &str = "Place not found.";

const MAX_RATING: u8 = 5;

/// 列表中的一張房源卡片
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceCard {
    pub id: String,
    pub display_title: String,
    pub display_price: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ListingRegion {
    Cards(Vec<PlaceCard>),
    Empty(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetail {
    pub id: String,
    pub display_title: String,
    pub host: String,
    pub display_price: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub amenities: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewCard {
    pub author: String,
    pub rating: u8,
    pub stars: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReviewsRegion {
    Reviews(Vec<ReviewCard>),
    Empty(String),
    Error(String),
}

pub fn display_title(place: &Place) -> String {
    place
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(UNNAMED_PLACE)
        .to_string()
}

/// 整數價格不帶小數，其餘固定兩位
pub fn format_price(price: f64) -> String {
    let price = if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    };
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}

pub fn location_line(place: &Place) -> Option<String> {
    let city = non_blank(place.city.as_deref())?;
    Some(match non_blank(place.country.as_deref()) {
        Some(country) => format!("Location: {}, {}", city, country),
        None => format!("Location: {}", city),
    })
}

pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

pub fn place_card(place: &Place) -> PlaceCard {
    PlaceCard {
        id: place.id.clone(),
        display_title: display_title(place),
        display_price: format_price(place.price()),
        description: non_blank(place.description.as_deref()).map(str::to_string),
        location: location_line(place),
        href: Page::Detail {
            place_id: place.id.clone(),
        }
        .href(),
    }
}

/// `total` 為目前持有的房源數；為 0 時顯示空狀態而非空白卡片區
pub fn render_listing(visible: &[&Place], total: usize) -> ListingRegion {
    if total == 0 {
        return ListingRegion::Empty(NO_PLACES.to_string());
    }
    ListingRegion::Cards(visible.iter().map(|place| place_card(place)).collect())
}

pub fn render_listing_error(reason: &str) -> ListingRegion {
    ListingRegion::Error(format!("Failed to load places. {}", reason))
}

pub fn render_place_detail(place: &Place, host: String, amenities: String) -> PlaceDetail {
    PlaceDetail {
        id: place.id.clone(),
        display_title: display_title(place),
        host,
        display_price: format_price(place.price()),
        description: non_blank(place.description.as_deref()).map(str::to_string),
        location: location_line(place),
        amenities,
    }
}

/// `author` 為已解析的顯示名稱
pub fn review_card(review: &Review, author: String) -> ReviewCard {
    ReviewCard {
        author,
        rating: review.rating.min(MAX_RATING),
        stars: rating_stars(review.rating),
        text: review.text.clone(),
    }
}

pub fn render_reviews(cards: Vec<ReviewCard>) -> ReviewsRegion {
    if cards.is_empty() {
        ReviewsRegion::Empty(NO_REVIEWS.to_string())
    } else {
        ReviewsRegion::Reviews(cards)
    }
}

/// 設施名稱以逗號連接；沒有任何名稱時回傳固定字串
pub fn join_amenity_names(names: &[String]) -> String {
    let names: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();
    if names.is_empty() {
        NO_AMENITIES.to_string()
    } else {
        names.join(", ")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
