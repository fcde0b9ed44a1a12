pub mod render;
pub mod resolve;
pub mod view_model;

pub use crate::domain::model::{Place, PriceFilter, Review, ReviewDraft};
pub use crate::domain::ports::{PlacesApi, RenderSurface, SessionStore};
pub use crate::utils::error::Result;
pub use view_model::PlaceListView;
