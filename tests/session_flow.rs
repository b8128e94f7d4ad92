mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext, TEST_ADMIN_KEY};
use uuid::Uuid;

#[tokio::test]
async fn test_create_session_generates_60_char_token() {
    println!("\n\n[+] Running test: test_create_session_generates_60_char_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user_id, token) = client.create_test_user("gandalf", "supersecret").await;

    println!("[>] Creating session with a title and no description");
    let req = test::TestRequest::post()
        .uri("/sessions")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"title": "Dragon's Lair"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Session created successfully!");
    assert_eq!(body["session"]["title"], "Dragon's Lair");
    assert!(body["session"]["description"].is_null());
    assert_eq!(body["session"]["game_master_id"], serde_json::json!(user_id));

    let join_token = body["session"]["token"].as_str().unwrap();
    assert_eq!(join_token.len(), 60);
    assert!(join_token.chars().all(|c| c.is_ascii_alphanumeric()));
    println!("[/] Test passed: session created with a 60-char token.");
}

#[tokio::test]
async fn test_create_session_requires_title() {
    println!("\n\n[+] Running test: test_create_session_requires_title");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user("radagast", "supersecret").await;

    let req = test::TestRequest::post()
        .uri("/sessions")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"description": "no title here"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["title"][0], "The title field is required.");
    println!("[/] Test passed: missing title rejected.");
}

#[tokio::test]
async fn test_show_session_by_token_includes_members() {
    println!("\n\n[+] Running test: test_show_session_by_token_includes_members");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (gm_id, _gm_token) = client.create_test_user("elrond", "supersecret").await;
    let (player_id, player_token) = client.create_test_user("bilbo", "supersecret").await;
    let session = client.create_session_for(gm_id, "Council of Elrond").await;

    let invite = client.create_invitation_for(session.id).await;
    let req = test::TestRequest::post()
        .uri("/sessions/join")
        .insert_header(("Authorization", format!("Bearer {}", player_token)))
        .set_json(serde_json::json!({"session_token": invite}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    println!("[>] Fetching the session by its join token");
    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{}", session.token.clone().unwrap()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Council of Elrond");
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], serde_json::json!(player_id));
    assert!(users[0].get("password_hash").is_none());
    println!("[/] Test passed: roster included, password hash not serialized.");
}

#[tokio::test]
async fn test_show_unknown_token_is_404() {
    println!("\n\n[+] Running test: test_show_unknown_token_is_404");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/sessions/definitely-not-a-real-join-token")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Session not found");
    println!("[/] Test passed: unknown token 404s with a message body.");
}

#[tokio::test]
async fn test_update_nonexistent_session_is_404_with_message() {
    println!("\n\n[+] Running test: test_update_nonexistent_session_is_404_with_message");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, token) = client.create_test_user("saruman", "supersecret").await;

    let req = test::TestRequest::put()
        .uri(&format!("/sessions/{}", Uuid::new_v4()))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"title": "Renamed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({"message": "Session not found"}));
    println!("[/] Test passed: update of unknown id 404s with exact body.");
}

#[tokio::test]
async fn test_update_applies_partial_fields() {
    println!("\n\n[+] Running test: test_update_applies_partial_fields");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (gm_id, token) = client.create_test_user("thorin", "supersecret").await;
    let session = client.create_session_for(gm_id, "Lonely Mountain").await;
    let original_join_token = session.token.clone();

    println!("[>] Patching title and is_active only");
    let req = test::TestRequest::patch()
        .uri(&format!("/sessions/{}", session.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"title": "Erebor", "is_active": false}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Erebor");
    assert_eq!(body["is_active"], false);
    // Untouched fields survive, the join token never changes.
    assert_eq!(body["token"], serde_json::json!(original_join_token));
    assert_eq!(body["game_master_id"], serde_json::json!(gm_id));
    println!("[/] Test passed: partial update left other fields alone.");
}

#[tokio::test]
async fn test_update_explicit_null_clears_description() {
    println!("\n\n[+] Running test: test_update_explicit_null_clears_description");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (gm_id, token) = client.create_test_user("frodo", "supersecret").await;
    let session = client.create_session_for(gm_id, "Weathertop").await;

    println!("[>] Setting a description");
    let req = test::TestRequest::patch()
        .uri(&format!("/sessions/{}", session.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"description": "campfire at dusk"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["description"], "campfire at dusk");

    println!("[>] A patch that omits description must leave it alone");
    let req = test::TestRequest::patch()
        .uri(&format!("/sessions/{}", session.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"title": "Amon Sul"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "Amon Sul");
    assert_eq!(body["description"], "campfire at dusk");

    println!("[>] An explicit null must clear it");
    let req = test::TestRequest::patch()
        .uri(&format!("/sessions/{}", session.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"description": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["description"].is_null());

    let stored = ctx.db.get_session(session.id).await.unwrap();
    assert_eq!(stored.description, None);
    println!("[/] Test passed: null clears the description, absence keeps it.");
}

#[tokio::test]
async fn test_update_with_unknown_game_master_is_400() {
    println!("\n\n[+] Running test: test_update_with_unknown_game_master_is_400");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (gm_id, token) = client.create_test_user("balin", "supersecret").await;
    let session = client.create_session_for(gm_id, "Moria").await;

    let req = test::TestRequest::put()
        .uri(&format!("/sessions/{}", session.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({"game_master_id": Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["game_master_id"][0],
        "The selected game_master_id is invalid."
    );
    println!("[/] Test passed: dangling game_master_id rejected with 400.");
}

#[tokio::test]
async fn test_delete_session_and_404_on_missing() {
    println!("\n\n[+] Running test: test_delete_session_and_404_on_missing");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (gm_id, token) = client.create_test_user("dwalin", "supersecret").await;
    let session = client.create_session_for(gm_id, "Doomed Session").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/sessions/{}", session.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Session deleted");

    println!("[>] Deleting it again must 404");
    let req = test::TestRequest::delete()
        .uri(&format!("/sessions/{}", session.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Session not found");
    println!("[/] Test passed: delete flow and repeat-404 behave.");
}

#[tokio::test]
async fn test_list_sessions_is_admin_only() {
    println!("\n\n[+] Running test: test_list_sessions_is_admin_only");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (gm_id, user_token) = client.create_test_user("denethor", "supersecret").await;
    client.create_session_for(gm_id, "Siege of Gondor").await;

    println!("[>] A regular user token must be rejected");
    let req = test::TestRequest::get()
        .uri("/sessions")
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    println!("[>] The admin key lists everything");
    let req = test::TestRequest::get()
        .uri("/sessions")
        .insert_header(("Authorization", format!("Bearer {}", TEST_ADMIN_KEY)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    println!("[/] Test passed: listing gated on the admin key.");
}

#[tokio::test]
async fn test_created_and_invited_listings_are_disjoint() {
    println!("\n\n[+] Running test: test_created_and_invited_listings_are_disjoint");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (gm_id, gm_token) = client.create_test_user("faramir", "supersecret").await;
    let (_player_id, player_token) = client.create_test_user("eowyn", "supersecret").await;

    let session = client.create_session_for(gm_id, "Ithilien Patrol").await;
    let invite = client.create_invitation_for(session.id).await;

    let req = test::TestRequest::post()
        .uri("/sessions/join")
        .insert_header(("Authorization", format!("Bearer {}", player_token)))
        .set_json(serde_json::json!({"session_token": invite}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    println!("[>] Game master sees the session under /sessions/mine only");
    let req = test::TestRequest::get()
        .uri("/sessions/mine")
        .insert_header(("Authorization", format!("Bearer {}", gm_token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let mine = body.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["title"], "Ithilien Patrol");
    assert_eq!(
        mine[0]["token"],
        serde_json::json!(session.token.clone().unwrap())
    );

    let req = test::TestRequest::get()
        .uri("/sessions/invited")
        .insert_header(("Authorization", format!("Bearer {}", gm_token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().unwrap().is_empty());

    println!("[>] The player sees it under /sessions/invited only");
    let req = test::TestRequest::get()
        .uri("/sessions/mine")
        .insert_header(("Authorization", format!("Bearer {}", player_token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/sessions/invited")
        .insert_header(("Authorization", format!("Bearer {}", player_token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let invited = body.as_array().unwrap();
    assert_eq!(invited.len(), 1);
    assert_eq!(invited[0]["title"], "Ithilien Patrol");
    println!("[/] Test passed: mine/invited listings never overlap.");
}
