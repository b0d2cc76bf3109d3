
use reqwest::StatusCode;
use test_utils::*;

#[actix_rt::test]
async fn blog_index_filters_category_newest_first() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    let response = app.get("/blog?category=ai").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = response.text().await.expect("HTML body");
    assert_eq!(card_order(&html, "/blog/", &["a", "b", "c"]), vec!["b", "a"]);
    assert!(html.contains("animation-delay: 0ms"));
    assert!(html.contains("animation-delay: 150ms"));
}

#[actix_rt::test]
async fn blog_index_all_shows_every_post() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    for path in ["/blog", "/blog?category=all", "/blog?category="] {
        let html = app.get(path).await.text().await.expect("HTML body");
        assert_eq!(card_order(&html, "/blog/", &["a", "b", "c"]), vec!["c", "b", "a"], "{path}");
    }
}

#[actix_rt::test]
async fn blog_index_reports_empty_category() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    let response = app.get("/blog?category=mobile").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.expect("HTML body");
    assert!(html.contains("No posts in this category yet."));
}

#[actix_rt::test]
async fn unknown_slug_renders_not_found_page() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    let response = app.get("/blog/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = response.text().await.expect("HTML body");
    assert!(html.contains("Blog post not found"));

    let (status, body) = app.get_json("/api/v1/blog/posts/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap_or_default().contains("Blog post not found"));
}

#[actix_rt::test]
async fn detail_page_renders_content_and_related_posts() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    let response = app.get("/blog/b").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = response.text().await.expect("HTML body");
    assert!(html.contains("Post B"));
    assert!(html.contains("1 February 2024"));
    assert!(html.contains(r#"<strong class="font-semibold">bold</strong>"#));
    assert_eq!(card_order(&html, "/blog/", &["a", "c"]), vec!["a"]);
}

#[actix_rt::test]
async fn store_requests_carry_both_auth_headers() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    app.get("/blog/b").await;

    let requests = store.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.apikey.as_deref(), Some(TEST_API_KEY));
        assert_eq!(request.authorization.as_deref(), Some("Bearer test-anon-key"));
    }
    assert!(requests[0].query.contains("slug=eq.b"));
    assert!(requests[1].query.contains("category=eq.ai"));
    assert!(requests[1].query.contains("slug=neq.b"));
}

#[actix_rt::test]
async fn api_listing_is_staged_and_filtered() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    let (status, body) = app.get_json("/api/v1/blog/posts?category=ai").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "items");
    assert_eq!(body["category"], "ai");

    let items = body["items"].as_array().expect("items array");
    let slugs: Vec<&str> = items.iter().filter_map(|i| i["slug"].as_str()).collect();
    let delays: Vec<u64> = items.iter().filter_map(|i| i["delay_ms"].as_u64()).collect();
    assert_eq!(slugs, vec!["b", "a"]);
    assert_eq!(delays, vec![0, 150]);
}

#[actix_rt::test]
async fn api_limit_is_forwarded_to_store() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    let (_, body) = app.get_json("/api/v1/blog/posts?limit=1").await;
    let items = body["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "c");

    let (status, body) = app.get_json("/api/v1/blog/posts?limit=many").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn failing_store_degrades_listing_and_fails_detail() {
    let store = FakeStore::spawn(sample_posts()).await;
    store.set_failing(true);
    let app = TestApp::with_store(&store).await;

    let response = app.get("/blog").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.expect("HTML body");
    assert!(html.contains("Posts could not be loaded right now."));

    let response = app.get("/blog/b").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = app.get_json("/api/v1/blog/posts/b").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_rt::test]
async fn unconfigured_store_shows_unavailable_state() {
    let app = TestApp::without_store().await;

    let response = app.get("/blog").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.expect("HTML body");
    assert!(html.contains("Posts could not be loaded right now."));

    let (_, health) = app.get_json("/api/v1/health").await;
    assert_eq!(health["content_store"], "disabled");
    assert_eq!(health["status"], "healthy");
}

#[actix_rt::test]
async fn home_page_shows_latest_posts_and_featured_projects() {
    let store = FakeStore::spawn(sample_posts()).await;
    let app = TestApp::with_store(&store).await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.expect("HTML body");

    assert_eq!(card_order(&html, "/blog/", &["a", "b", "c"]), vec!["c", "b", "a"]);
    assert!(html.contains(r#"href="/projects/assistyl""#));

    let requests = store.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].query.contains("limit=3"));
}

#[actix_rt::test]
async fn rows_with_null_columns_still_render() {
    let sparse = serde_json::json!({
        "id": 99,
        "title": "Post SPARSE",
        "slug": "sparse",
        "summary": null,
        "thumbnail": null,
        "content": null,
        "category": null,
        "created_at": "2024-04-01T10:00:00+00:00",
        "read_time": null
    });
    let mut posts = sample_posts();
    posts.push(sparse);

    let store = FakeStore::spawn(posts).await;
    let app = TestApp::with_store(&store).await;

    let html = app.get("/blog").await.text().await.expect("HTML body");
    assert_eq!(
        card_order(&html, "/blog/", &["a", "b", "c", "sparse"]),
        vec!["sparse", "c", "b", "a"]
    );

    let response = app.get("/blog/sparse").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.expect("HTML body");
    assert!(html.contains("Post SPARSE"));
    assert!(html.contains("3 min read"));
}

#[actix_rt::test]
async fn published_date_uses_the_stored_offset() {
    let store = FakeStore::spawn(vec![blog_row("early", "ai", "2024-01-01T01:00:00+03:00")]).await;
    let app = TestApp::with_store(&store).await;

    let html = app.get("/blog/early").await.text().await.expect("HTML body");
    assert!(html.contains("1 January 2024"));
    assert!(!html.contains("31 December 2023"));
}

#[actix_rt::test]
async fn related_posts_are_staged() {
    let mut posts = sample_posts();
    posts.push(blog_row("d", "ai", "2024-04-01T10:00:00+00:00"));

    let store = FakeStore::spawn(posts).await;
    let app = TestApp::with_store(&store).await;

    let (status, body) = app.get_json("/api/v1/blog/posts/b").await;
    assert_eq!(status, StatusCode::OK);

    let related = body["related"].as_array().expect("related array");
    let slugs: Vec<&str> = related.iter().filter_map(|r| r["slug"].as_str()).collect();
    let delays: Vec<u64> = related.iter().filter_map(|r| r["delay_ms"].as_u64()).collect();
    assert_eq!(slugs, vec!["d", "a"]);
    assert_eq!(delays, vec![0, 150]);

    let html = app.get("/blog/b").await.text().await.expect("HTML body");
    assert!(html.contains("animation-delay: 150ms"));
}
