use crate::core::render::{ListingRegion, PlaceDetail, ReviewsRegion};
use crate::domain::ports::RenderSurface;
use std::io::Write;

/// 把頁面輸出到終端機（或任何 `Write`）
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn set_login_link_visible(&mut self, visible: bool) {
        if visible {
            self.emit("[Login] Run `hbnb-client login` to see member listings.");
        }
    }

    fn render_listing(&mut self, region: &ListingRegion) {
        match region {
            ListingRegion::Cards(cards) => {
                if cards.is_empty() {
                    self.emit("No places match the selected price.");
                }
                for card in cards {
                    self.emit(&format!("== {} ==", card.display_title));
                    self.emit(&format!("Price per night: {}", card.display_price));
                    if let Some(description) = &card.description {
                        self.emit(description);
                    }
                    if let Some(location) = &card.location {
                        self.emit(location);
                    }
                    self.emit(&format!("View Details: {}", card.href));
                    self.emit("");
                }
            }
            ListingRegion::Empty(message) | ListingRegion::Error(message) => self.emit(message),
        }
    }

    fn render_place(&mut self, detail: &PlaceDetail) {
        self.emit(&format!("# {}", detail.display_title));
        self.emit(&format!("Host: {}", detail.host));
        self.emit(&format!("Price per night: {}", detail.display_price));
        if let Some(description) = &detail.description {
            self.emit(&format!("Description: {}", description));
        }
        if let Some(location) = &detail.location {
            self.emit(location);
        }
        self.emit(&format!("Amenities: {}", detail.amenities));
    }

    fn render_place_error(&mut self, message: &str) {
        self.emit(message);
    }

    fn render_reviews(&mut self, region: &ReviewsRegion) {
        self.emit("");
        self.emit("Reviews");
        match region {
            ReviewsRegion::Reviews(cards) => {
                for card in cards {
                    self.emit(&format!("{}  {}", card.author, card.stars));
                    self.emit(&format!("  {}", card.text));
                }
            }
            ReviewsRegion::Empty(message) | ReviewsRegion::Error(message) => self.emit(message),
        }
    }

    fn set_review_form_enabled(&mut self, enabled: bool) {
        if enabled {
            self.emit("");
            self.emit("Add a review with `hbnb-client review --place-id <ID> --text <TEXT> --rating <0-5>`.");
        }
    }

    fn notify(&mut self, message: &str) {
        self.emit(&format!("! {}", message));
    }
}
