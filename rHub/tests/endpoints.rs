//! Request shapes of the resource endpoints.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rhub::models::*;
use rhub::storage::{MemoryStorage, TOKEN_KEY};
use rhub::{HubClient, Session};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, HubClient) {
    let server = MockServer::start().await;
    let storage = Arc::new(MemoryStorage::with_entries([(TOKEN_KEY, "abc123")]));
    let session = Arc::new(Session::initialize(storage));
    let client = HubClient::builder()
        .base_url(server.uri())
        .session(session)
        .build()
        .unwrap();
    (server, client)
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "msg": "ok", "data": null }))
}

#[tokio::test]
async fn favorite_cancel_sends_query() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/favorite"))
        .and(query_param("postId", "9"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/favorite"))
        .and(body_json(json!({ "postId": 9 })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.favorites().add(&FavoriteDto::post(9)).await.unwrap();
    let response = client.favorites().cancel(&FavoriteDto::post(9)).await.unwrap();
    assert_eq!(response.code(), Some(0));
    assert_eq!(response.msg(), Some("ok"));
}

#[tokio::test]
async fn follow_and_thumb_cancel_send_json_bodies() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/follow"))
        .and(body_json(json!({ "type": 1, "targetId": 4 })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/thumb"))
        .and(body_json(json!({ "type": 0, "targetId": 12 })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let follow = FollowDto {
        kind: Some(1),
        target_id: Some(4),
        ..Default::default()
    };
    client.follows().cancel(&follow).await.unwrap();

    let thumb = ThumbDto {
        kind: Some(0),
        target_id: Some(12),
        content: None,
    };
    client.thumbs().cancel(&thumb).await.unwrap();
}

#[tokio::test]
async fn coupon_endpoints() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/coupon"))
        .and(query_param("shopId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "shopId": 3, "name": "Lunch", "stock": 5, "type": 1, "discountRate": 0.8 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/coupon/stock"))
        .and(query_param("couponId", "1"))
        .and(query_param("stockChange", "-2"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/coupon/secKill"))
        .and(query_param("couponId", "1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let coupons = client.coupons().by_shop(3).await.unwrap().into_data();
    assert_eq!(coupons.len(), 1);
    assert_eq!(coupons[0].shop_id, ShopId::new(3));
    assert_eq!(coupons[0].kind, 1);

    client.coupons().update_stock(1, -2).await.unwrap();
    client.coupons().sec_kill(1).await.unwrap();
}

#[tokio::test]
async fn shop_and_comment_pages() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/shop/page"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "5"))
        .and(query_param("name", "tea"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 11,
            "records": [{
                "id": "6",
                "name": "Tea House",
                "beginTime": { "hour": 9, "minute": 30, "second": 0, "nano": 0 },
                "endTime": { "hour": 22, "minute": 0, "second": 0, "nano": 0 }
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/comment/page"))
        .and(query_param("type", "1"))
        .and(query_param("targetId", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "records": [] })))
        .mount(&server)
        .await;

    let query = ShopPageQuery {
        page: Some(2),
        page_size: Some(5),
        name: Some("tea".to_owned()),
        ..Default::default()
    };
    let page = client.shops().page(&query).await.unwrap().into_data();
    assert_eq!(page.total, 11);
    assert_eq!(page.total_pages(5), 3);
    assert_eq!(page.records[0].id, ShopId::new(6));
    assert_eq!(page.records[0].begin_time.to_string(), "09:30");

    let query = CommentPageQuery {
        kind: Some(1),
        target_id: Some(6),
        ..Default::default()
    };
    let comments = client.comments().page(&query).await.unwrap().into_data();
    assert!(comments.records.is_empty());
}

#[tokio::test]
async fn upload_is_multipart() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header_exists("content-type"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("cat.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("http://cdn/cat.png")))
        .expect(1)
        .mount(&server)
        .await;

    let file = UploadFile::new("cat.png", b"fake-png-bytes".to_vec()).mime("image/png");
    let response = client.posts().upload(file).await.unwrap();

    assert_eq!(response.data(), &json!("http://cdn/cat.png"));
}

#[tokio::test]
async fn register_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/user"))
        .and(body_json(json!({ "username": "bob", "password": "pw" })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/shop"))
        .and(query_param("id", "6"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/comment"))
        .and(query_param("id", "31"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let form = RegisterForm {
        username: "bob".to_owned(),
        password: "pw".to_owned(),
    };
    client.users().register(&form).await.unwrap();
    client.shops().delete(6).await.unwrap();
    client.comments().delete(31).await.unwrap();
}
