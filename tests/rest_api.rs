use inkwell_backend::cache;
use inkwell_backend::config::{InkwellConfig, InkwellPaths};
use inkwell_backend::database::repositories::GroupRepository;
use inkwell_backend::database::Database;
use inkwell_backend::{api, posting::CreatePostInput};
use tokio::time::{sleep, Duration};

fn next_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind ephemeral port")
        .local_addr()
        .unwrap()
        .port()
}

async fn wait_for_health(client: &reqwest::Client, base_url: &str) {
    for _ in 0..50 {
        if let Ok(resp) = client.get(format!("{base_url}/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        sleep(Duration::from_millis(100)).await;
    }
    panic!("server did not become healthy in time");
}

async fn create_post(
    client: &reqwest::Client,
    base_url: &str,
    author: &str,
    text: &str,
) -> serde_json::Value {
    let resp = client
        .post(format!("{base_url}/posts"))
        .json(&CreatePostInput {
            author_id: author.to_string(),
            text: text.to_string(),
            group_id: None,
            image: None,
        })
        .send()
        .await
        .expect("create post response");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    resp.json().await.expect("post json")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rest_roundtrip_over_feeds_follows_and_comments() {
    let temp = tempfile::tempdir().expect("tempdir");
    let port = next_port();
    let config = InkwellConfig::new(port, 10, InkwellPaths::from_base_dir(temp.path()));

    let database = Database::connect(&config.paths).expect("open database");
    database.ensure_migrations().expect("migrations");
    database
        .with_repositories(|repos| repos.groups().create("books", "Books", "Reading notes"))
        .expect("seed group");

    let server_config = config.clone();
    let server_database = database.clone();
    let server = tokio::spawn(async move {
        let _ = api::serve_http(server_config, server_database, cache::log_only()).await;
    });

    let base_url = format!("http://127.0.0.1:{port}");
    let client = reqwest::Client::new();
    wait_for_health(&client, &base_url).await;

    // Post lifecycle: create, read back, forbidden edit, author edit.
    let post = create_post(&client, &base_url, "ursula", "first entry").await;
    let post_id = post.get("id").and_then(|id| id.as_i64()).expect("post id");
    let created_at = post
        .get("created_at")
        .and_then(|v| v.as_str())
        .expect("created_at")
        .to_string();

    let resp = client
        .get(format!("{base_url}/posts/{post_id}"))
        .send()
        .await
        .expect("get post");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let resp = client
        .put(format!("{base_url}/posts/{post_id}"))
        .json(&serde_json::json!({"editor_id": "mallory", "text": "hijacked"}))
        .send()
        .await
        .expect("forbidden edit");
    assert_eq!(resp.status(), reqwest::StatusCode::FORBIDDEN);

    let resp = client
        .put(format!("{base_url}/posts/{post_id}"))
        .json(&serde_json::json!({"editor_id": "ursula", "text": "revised entry"}))
        .send()
        .await
        .expect("author edit");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let edited: serde_json::Value = resp.json().await.expect("edited json");
    assert_eq!(
        edited.get("created_at").and_then(|v| v.as_str()),
        Some(created_at.as_str())
    );
    assert_eq!(
        edited.get("text").and_then(|v| v.as_str()),
        Some("revised entry")
    );

    // Comments: empty text rejected, then a real one lands newest-first.
    let resp = client
        .post(format!("{base_url}/posts/{post_id}/comments"))
        .json(&serde_json::json!({"author_id": "bob", "text": "   "}))
        .send()
        .await
        .expect("empty comment");
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let resp = client
        .post(format!("{base_url}/posts/{post_id}/comments"))
        .json(&serde_json::json!({"author_id": "bob", "text": "nice entry"}))
        .send()
        .await
        .expect("comment");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let comments: serde_json::Value = client
        .get(format!("{base_url}/posts/{post_id}/comments"))
        .send()
        .await
        .expect("list comments")
        .json()
        .await
        .expect("comments json");
    assert_eq!(comments.as_array().map(|a| a.len()), Some(1));

    // Follow graph: self-follow rejected, follow idempotent, feed filtered.
    let resp = client
        .post(format!("{base_url}/users/ursula/follow"))
        .json(&serde_json::json!({"follower_id": "ursula"}))
        .send()
        .await
        .expect("self follow");
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    for _ in 0..2 {
        let resp = client
            .post(format!("{base_url}/users/ursula/follow"))
            .json(&serde_json::json!({"follower_id": "viewer"}))
            .send()
            .await
            .expect("follow");
        assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);
    }

    let status: serde_json::Value = client
        .get(format!("{base_url}/users/ursula/following?follower=viewer"))
        .send()
        .await
        .expect("following status")
        .json()
        .await
        .expect("status json");
    assert_eq!(status.get("following").and_then(|v| v.as_bool()), Some(true));

    create_post(&client, &base_url, "ursula", "second entry").await;
    create_post(&client, &base_url, "stranger", "noise").await;

    let feed: serde_json::Value = client
        .get(format!("{base_url}/feed/following?viewer=viewer"))
        .send()
        .await
        .expect("following feed")
        .json()
        .await
        .expect("feed json");
    let items = feed
        .get("items")
        .and_then(|v| v.as_array())
        .expect("feed items");
    assert_eq!(items.len(), 2);
    assert!(items
        .iter()
        .all(|item| item.get("author_id").and_then(|v| v.as_str()) == Some("ursula")));

    let resp = client
        .post(format!("{base_url}/users/ursula/unfollow"))
        .json(&serde_json::json!({"follower_id": "viewer"}))
        .send()
        .await
        .expect("unfollow");
    assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);

    let status: serde_json::Value = client
        .get(format!("{base_url}/users/ursula/following?follower=viewer"))
        .send()
        .await
        .expect("following status")
        .json()
        .await
        .expect("status json");
    assert_eq!(
        status.get("following").and_then(|v| v.as_bool()),
        Some(false)
    );

    // Group feeds: seeded but empty group pages cleanly, unknown slug 404s.
    let group_feed: serde_json::Value = client
        .get(format!("{base_url}/groups/books/posts"))
        .send()
        .await
        .expect("group feed")
        .json()
        .await
        .expect("group feed json");
    assert_eq!(
        group_feed
            .get("items")
            .and_then(|v| v.as_array())
            .map(|a| a.len()),
        Some(0)
    );
    assert_eq!(
        group_feed.get("total_pages").and_then(|v| v.as_u64()),
        Some(1)
    );

    let resp = client
        .get(format!("{base_url}/groups/missing/posts"))
        .send()
        .await
        .expect("unknown group");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    // Author feed pagination: 25 posts at page size 10 span three pages.
    for n in 1..=25 {
        create_post(&client, &base_url, "alice", &format!("entry {n}")).await;
    }
    for (page, expected_len, expected_has_next) in [(1, 10, true), (3, 5, false), (4, 0, false)] {
        let feed: serde_json::Value = client
            .get(format!("{base_url}/users/alice/posts?page={page}"))
            .send()
            .await
            .expect("author feed")
            .json()
            .await
            .expect("author feed json");
        assert_eq!(
            feed.get("items").and_then(|v| v.as_array()).map(|a| a.len()),
            Some(expected_len),
            "page {page}"
        );
        assert_eq!(
            feed.get("has_next").and_then(|v| v.as_bool()),
            Some(expected_has_next),
            "page {page}"
        );
    }

    server.abort();
    let _ = server.await;
}
