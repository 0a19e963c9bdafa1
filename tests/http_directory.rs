//! Integration tests for the HTTP directory against a local responder.
//!
//! The responder answers each connection with the next canned response
//! and records what the client sent.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use userdesk::coordinator::{Coordinator, Outcome};
use userdesk::directory::{DirectoryError, HttpDirectory, UserDirectory};
use userdesk::models::{FetchStatus, User, UserDraft};

/// A request as seen by the responder.
#[derive(Debug)]
struct Recorded {
    method: String,
    path: String,
    body: String,
}

const USERS: &str = r#"[
    {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz",
     "phone": "1-770-736-8031 x56442", "website": "hildegard.org",
     "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough",
                 "zipcode": "92998-3874", "geo": {"lat": "-37.3159", "lng": "81.1496"}},
     "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered", "bs": "harness"}},
    {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "phone": "010-692-6593 x09125"}
]"#;

/// Serve `responses` in order, one connection each.
async fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut recorded = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            let header_end = loop {
                let n = stream.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers were complete");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            while buf.len() < header_end + content_length {
                let n = stream.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body was complete");
                buf.extend_from_slice(&chunk[..n]);
            }

            let mut request_line = head.lines().next().unwrap().split_whitespace();
            recorded.push(Recorded {
                method: request_line.next().unwrap().to_string(),
                path: request_line.next().unwrap().to_string(),
                body: String::from_utf8_lossy(&buf[header_end..header_end + content_length])
                    .to_string(),
            });

            let reason = match status {
                200 => "OK",
                201 => "Created",
                404 => "Not Found",
                _ => "Internal Server Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json; charset=utf-8\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        }
        recorded
    });

    (base_url, handle)
}

fn client(base_url: &str) -> HttpDirectory {
    HttpDirectory::new(base_url, Some(Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn list_users_keeps_response_order() {
    let (base_url, server) = serve(vec![(200, USERS.to_string())]).await;

    let users = client(&base_url).list_users().await.unwrap();
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Leanne Graham", "Ervin Howell"]);
    assert_eq!(users[0].company.as_ref().unwrap().name, "Romaguera-Crona");

    let recorded = server.await.unwrap();
    assert_eq!(recorded[0].method, "GET");
    assert_eq!(recorded[0].path, "/users");
}

#[tokio::test]
async fn get_user_requests_id_path() {
    let body = r#"{"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "phone": "010"}"#;
    let (base_url, server) = serve(vec![(200, body.to_string())]).await;

    let user = client(&base_url).get_user(2).await.unwrap();
    assert_eq!(user, User::new(2, "Ervin Howell", "Shanna@melissa.tv", "010"));

    let recorded = server.await.unwrap();
    assert_eq!(recorded[0].method, "GET");
    assert_eq!(recorded[0].path, "/users/2");
}

#[tokio::test]
async fn create_user_posts_draft_only() {
    let body = r#"{"id": 11, "name": "Carol", "email": "carol@example.com", "phone": "555"}"#;
    let (base_url, server) = serve(vec![(201, body.to_string())]).await;

    let draft = UserDraft::new("Carol", "carol@example.com", "555");
    let created = client(&base_url).create_user(&draft).await.unwrap();
    assert_eq!(created.id, 11);

    let recorded = server.await.unwrap();
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].path, "/users");
    let sent: serde_json::Value = serde_json::from_str(&recorded[0].body).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({"name": "Carol", "email": "carol@example.com", "phone": "555"})
    );
}

#[tokio::test]
async fn update_user_puts_full_record() {
    let users: Vec<User> = serde_json::from_str(USERS).unwrap();
    let mut leanne = users[0].clone();
    leanne.phone = "555-0000".to_string();
    let echoed = serde_json::to_string(&leanne).unwrap();
    let (base_url, server) = serve(vec![(200, echoed)]).await;

    let updated = client(&base_url).update_user(&leanne).await.unwrap();
    assert_eq!(updated, leanne);

    let recorded = server.await.unwrap();
    assert_eq!(recorded[0].method, "PUT");
    assert_eq!(recorded[0].path, "/users/1");
    let sent: serde_json::Value = serde_json::from_str(&recorded[0].body).unwrap();
    assert_eq!(sent["phone"], "555-0000");
    assert_eq!(sent["website"], "hildegard.org");
    assert_eq!(sent["address"]["geo"]["lng"], "81.1496");
}

#[tokio::test]
async fn delete_user_sends_delete() {
    let (base_url, server) = serve(vec![(200, "{}".to_string())]).await;

    client(&base_url).delete_user(3).await.unwrap();

    let recorded = server.await.unwrap();
    assert_eq!(recorded[0].method, "DELETE");
    assert_eq!(recorded[0].path, "/users/3");
}

#[tokio::test]
async fn error_status_maps_to_status_error() {
    let (base_url, server) = serve(vec![(404, "{}".to_string())]).await;

    let err = client(&base_url).get_user(99).await.unwrap_err();
    match err {
        DirectoryError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/users/99"), "got: {url}");
        }
        other => panic!("expected status error, got: {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let (base_url, server) = serve(vec![(200, "not json".to_string())]).await;

    let err = client(&base_url).list_users().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Decode(_)), "got: {err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn coordinator_over_http_reports_failed_delete() {
    let (base_url, server) = serve(vec![(200, USERS.to_string()), (500, "{}".to_string())]).await;
    let screen = Coordinator::new(Arc::new(client(&base_url)));

    assert!(screen.initialize().await.is_applied());
    assert!(matches!(screen.delete_user(1).await, Outcome::Failed(_)));
    assert_eq!(screen.status(), FetchStatus::Error("Failed to delete user".into()));
    assert_eq!(screen.users().len(), 2);

    let recorded = server.await.unwrap();
    assert_eq!(recorded[1].method, "DELETE");
    assert_eq!(recorded[1].path, "/users/1");
}
