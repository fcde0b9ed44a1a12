use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// 房源（列表與詳細頁共用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlace")]
pub struct Place {
    pub id: String,
    pub title: Option<String>,
    pub price_per_night: Option<f64>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub amenities: Vec<String>,
    pub owner_id: Option<String>,
}

impl Place {
    /// 缺少價格時視為 0
    pub fn price(&self) -> f64 {
        self.price_per_night.unwrap_or(0.0)
    }
}

/// 後端各版本的欄位名稱不一，同一筆資料可能同時帶新舊兩個鍵
#[derive(Deserialize)]
struct RawPlace {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    price_per_night: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_price")]
    price: Option<f64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amenity_ids")]
    amenities: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_amenity_ids")]
    associated_amenities: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_amenity_ids")]
    amenity_ids: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    owner_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    user_id: Option<String>,
}

impl From<RawPlace> for Place {
    fn from(raw: RawPlace) -> Self {
        let amenities = [raw.amenities, raw.associated_amenities, raw.amenity_ids]
            .into_iter()
            .find(|ids| !ids.is_empty())
            .unwrap_or_default();

        Self {
            id: raw.id,
            title: raw.title,
            price_per_night: raw.price_per_night.filter(|p| *p != 0.0).or(raw.price),
            description: raw.description,
            city: raw.city,
            country: raw.country,
            amenities,
            owner_id: raw.owner_id.or(raw.user_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default, alias = "author_name")]
    pub author: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub place_id: Option<String>,
}

/// 新增評論時送出的內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub text: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Amenity {
    #[serde(default)]
    pub name: Option<String>,
}

/// 登入回應：不同後端版本使用 `token` 或 `access_token`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// 空字串不算取得 token
    pub fn token(&self) -> Option<&str> {
        [self.token.as_deref(), self.access_token.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|t| !t.is_empty())
    }
}

/// 持久化的登入狀態
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            saved_at: Some(Utc::now()),
        }
    }

    /// 任何非空字串都視為已登入
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// 距離保存時間多久；舊格式沒有時間戳記時為 None
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.saved_at.map(|saved_at| now - saved_at)
    }
}

/// 列表頁的價格上限
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceFilter {
    #[default]
    Unbounded,
    Max(f64),
}

impl PriceFilter {
    pub fn admits(&self, price: f64) -> bool {
        match self {
            PriceFilter::Unbounded => true,
            PriceFilter::Max(max) => price <= *max,
        }
    }

    /// 解析下拉選單的值："all" 或數字
    pub fn parse(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        if selection.eq_ignore_ascii_case("all") {
            return Some(PriceFilter::Unbounded);
        }
        selection
            .parse::<f64>()
            .ok()
            .filter(|max| max.is_finite() && *max >= 0.0)
            .map(PriceFilter::Max)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

/// 價格可能是數字或數字字串；無法解析的值視為缺少
fn deserialize_price<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match Option::<RawPrice>::deserialize(deserializer)? {
        Some(RawPrice::Number(n)) => Some(n),
        Some(RawPrice::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(price.filter(|p| p.is_finite()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmenityRef {
    Id(RawId),
    Object { id: RawId },
}

/// 設施清單可能是 id 陣列，也可能是帶 id 的物件陣列
pub(crate) fn deserialize_amenity_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs = Option::<Vec<AmenityRef>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(refs
        .into_iter()
        .map(|r| match r {
            AmenityRef::Id(id) | AmenityRef::Object { id } => String::from(id),
        })
        .collect())
}
