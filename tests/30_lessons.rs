mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::TEACHER_TOKEN;

async fn create_lesson(app: &axum::Router, title: &str, course_id: &str, order_index: i64) -> String {
    let (status, body) = common::send(
        app,
        common::request(
            Method::POST,
            "/lessons",
            Some(TEACHER_TOKEN),
            Some(&json!({"title": title, "course_id": course_id, "order_index": order_index})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "lesson create failed: {}", body);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_requires_teacher_credential() -> Result<()> {
    let app = common::test_app();
    let (status, _) = common::send(
        &app,
        common::request(
            Method::POST,
            "/lessons",
            Some("user123"),
            Some(&json!({"title": "Intro", "course_id": "c1"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn course_lessons_are_filtered_and_ordered() -> Result<()> {
    let app = common::test_app();
    create_lesson(&app, "Chapter 2", "c1", 2).await;
    create_lesson(&app, "Chapter 1", "c1", 1).await;
    create_lesson(&app, "Other course", "c2", 0).await;

    let (status, body) = common::send(
        &app,
        common::request(Method::GET, "/courses/c1/lessons", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|lesson| lesson["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Chapter 1", "Chapter 2"]);
    Ok(())
}

#[tokio::test]
async fn hidden_lesson_disappears_from_course_listing_only() -> Result<()> {
    let app = common::test_app();
    let keep = create_lesson(&app, "Kept", "c1", 0).await;
    let hide = create_lesson(&app, "Hidden", "c1", 1).await;

    let (status, body) = common::send(
        &app,
        common::request(Method::DELETE, &format!("/lessons/{}", hide), Some(TEACHER_TOKEN), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["lesson"]["is_hidden"], json!(true));

    let (_, list) = common::send(
        &app,
        common::request(Method::GET, "/courses/c1/lessons", None, None),
    )
    .await;
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|lesson| lesson["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![keep.as_str()]);

    let (status, lesson) = common::send(
        &app,
        common::request(Method::GET, &format!("/lessons/{}", hide), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lesson["is_hidden"], json!(true));
    Ok(())
}

#[tokio::test]
async fn put_applies_partial_update() -> Result<()> {
    let app = common::test_app();
    let id = create_lesson(&app, "Draft", "c1", 4).await;

    let (status, body) = common::send(
        &app,
        common::request(
            Method::PUT,
            &format!("/lessons/{}", id),
            Some(TEACHER_TOKEN),
            Some(&json!({"title": "Final"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], json!("Final"));
    assert_eq!(body["order_index"], json!(4));
    assert_eq!(body["course_id"], json!("c1"));
    Ok(())
}

#[tokio::test]
async fn update_unknown_lesson_is_404() -> Result<()> {
    let app = common::test_app();
    let (status, body) = common::send(
        &app,
        common::request(
            Method::PUT,
            "/lessons/no-such-id",
            Some(TEACHER_TOKEN),
            Some(&json!({"title": "Ghost"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], Value::String("Lesson not found or not updated".to_string()));
    Ok(())
}
