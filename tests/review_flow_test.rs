mod common;

use common::{api_for, RecordingSurface};
use hbnb_client::app::pages::add_review::{AddReviewPage, ReviewForm, LOGIN_REQUIRED};
use hbnb_client::core::render::{ReviewsRegion, PLACE_NOT_FOUND};
use hbnb_client::{App, MemorySessionStore, NavigationContext, Page};
use httpmock::prelude::*;

fn form(text: &str, rating: u8) -> ReviewForm {
    ReviewForm {
        text: text.to_string(),
        rating,
    }
}

#[tokio::test]
async fn test_unauthenticated_submit_aborts_before_network() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.any_request();
        then.status(201);
    });

    let api = api_for(&server);
    let session = MemorySessionStore::new();
    let mut surface = RecordingSurface::default();

    let next = AddReviewPage::new(&api, &session, &mut surface)
        .submit(
            &NavigationContext::from_href("add_review.html?id=p1"),
            &form("Nice", 4),
        )
        .await;

    any_request.assert_hits(0);
    assert_eq!(next, None);
    assert_eq!(surface.notifications, vec![LOGIN_REQUIRED.to_string()]);
}

#[tokio::test]
async fn test_missing_place_id_aborts() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.any_request();
        then.status(201);
    });

    let api = api_for(&server);
    let session = MemorySessionStore::with_token("tok");
    let mut surface = RecordingSurface::default();

    let next = AddReviewPage::new(&api, &session, &mut surface)
        .submit(&NavigationContext::default(), &form("Nice", 4))
        .await;

    any_request.assert_hits(0);
    assert_eq!(next, None);
    assert_eq!(surface.notifications, vec![PLACE_NOT_FOUND.to_string()]);
}

#[tokio::test]
async fn test_out_of_range_rating_is_rejected() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.any_request();
        then.status(201);
    });

    let api = api_for(&server);
    let session = MemorySessionStore::with_token("tok");
    let mut surface = RecordingSurface::default();

    let next = AddReviewPage::new(&api, &session, &mut surface)
        .submit(&NavigationContext::new(Some("p1".to_string())), &form("Nice", 6))
        .await;

    any_request.assert_hits(0);
    assert_eq!(next, None);
    assert_eq!(
        surface.notifications,
        vec!["Rating must be between 0 and 5".to_string()]
    );
}

#[tokio::test]
async fn test_rejected_review_shows_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/places/p1/reviews");
        then.status(400)
            .json_body(serde_json::json!({"error": "You have already reviewed this place"}));
    });

    let api = api_for(&server);
    let session = MemorySessionStore::with_token("tok");
    let mut surface = RecordingSurface::default();

    let next = AddReviewPage::new(&api, &session, &mut surface)
        .submit(&NavigationContext::new(Some("p1".to_string())), &form("Again", 3))
        .await;

    assert_eq!(next, None);
    assert_eq!(
        surface.notifications,
        vec!["Failed to submit review: You have already reviewed this place".to_string()]
    );
}

#[tokio::test]
async fn test_successful_review_returns_to_detail_page() {
    let server = MockServer::start();
    let submit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/places/p1/reviews")
            .header("authorization", "Bearer tok")
            .json_body(serde_json::json!({"text": "Great host", "rating": 5, "place_id": "p1"}));
        then.status(201).json_body(serde_json::json!({
            "id": "r9", "text": "Great host", "rating": 5, "user_id": "u1", "place_id": "p1"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/places/p1");
        then.status(200)
            .json_body(serde_json::json!({"id": "p1", "title": "Loft", "price": 70}));
    });
    let reviews_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/places/p1/reviews");
        then.status(200).json_body(serde_json::json!([
            {"id": "r9", "text": "Great host", "rating": 5, "author": "Me", "place_id": "p1"}
        ]));
    });

    let mut app = App::new(
        api_for(&server),
        MemorySessionStore::with_token("tok"),
        RecordingSurface::default(),
    );
    let next = app
        .submit_review(
            &NavigationContext::from_href("add_review.html?id=p1"),
            &form("  Great host  ", 5),
        )
        .await
        .unwrap();

    submit_mock.assert();
    reviews_mock.assert();
    assert_eq!(
        next,
        Some(Page::Detail {
            place_id: "p1".to_string()
        })
    );

    let surface = app.into_surface();
    assert_eq!(
        surface.notifications,
        vec!["Review submitted successfully!".to_string()]
    );
    assert_eq!(surface.places[0].display_title, "Loft");
    match surface.reviews.last().unwrap() {
        ReviewsRegion::Reviews(cards) => assert_eq!(cards[0].author, "Me"),
        other => panic!("unexpected region: {:?}", other),
    }
    assert_eq!(surface.review_form_enabled, Some(true));
}
