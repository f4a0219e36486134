//! Full CRUD lifecycle test against the live server.
//!
//! # Design
//! Starts the todo server on a random port, then exercises every client
//! operation over real HTTP using ureq. Validates that the client's request
//! building and response parsing work end-to-end with the actual server,
//! including the replace-discards versus patch-preserves distinction.

use todo_client::{ApiError, HttpMethod, HttpResponse, TodoClient, TodoIn, TodoPatch};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation.
fn execute(req: todo_client::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => agent
            .patch(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start the server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 2: root greeting.
    let req = client.build_root();
    let greeting = client.parse_root(execute(req)).unwrap();
    assert!(!greeting.message.is_empty());

    // Step 3: list — should be empty.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 4: create two todos; ids count up from 1.
    let req = client
        .build_create_todo(&TodoIn {
            title: "Buy milk".to_string(),
            done: false,
            notes: None,
        })
        .unwrap();
    let first = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.title, "Buy milk");
    assert!(!first.done);
    assert!(first.notes.is_none());

    let req = client
        .build_create_todo(&TodoIn {
            title: "Walk dog".to_string(),
            done: true,
            notes: Some("bring leash".to_string()),
        })
        .unwrap();
    let second = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(second.id, 2);

    // Step 5: get the first todo back.
    let req = client.build_get_todo(first.id);
    let fetched = client.parse_get_todo(execute(req)).unwrap();
    assert_eq!(fetched, first);

    // Step 6: patch the second — done flips, notes survive.
    let req = client
        .build_patch_todo(
            second.id,
            &TodoPatch {
                done: Some(false),
                ..TodoPatch::default()
            },
        )
        .unwrap();
    let patched = client.parse_patch_todo(execute(req)).unwrap();
    assert!(!patched.done);
    assert_eq!(patched.notes.as_deref(), Some("bring leash"));

    // Step 7: replace the second — omitted fields reset, notes become null.
    let req = client
        .build_replace_todo(
            second.id,
            &TodoIn {
                title: "Walk cat".to_string(),
                done: false,
                notes: None,
            },
        )
        .unwrap();
    let replaced = client.parse_replace_todo(execute(req)).unwrap();
    assert_eq!(replaced.id, second.id);
    assert_eq!(replaced.title, "Walk cat");
    assert!(replaced.notes.is_none());

    // Step 8: patch the first with an explicit null — notes clear, not keep.
    let req = client
        .build_patch_todo(
            first.id,
            &TodoPatch {
                notes: Some(Some("soon".to_string())),
                ..TodoPatch::default()
            },
        )
        .unwrap();
    let noted = client.parse_patch_todo(execute(req)).unwrap();
    assert_eq!(noted.notes.as_deref(), Some("soon"));

    let req = client
        .build_patch_todo(
            first.id,
            &TodoPatch {
                notes: Some(None),
                ..TodoPatch::default()
            },
        )
        .unwrap();
    let cleared = client.parse_patch_todo(execute(req)).unwrap();
    assert!(cleared.notes.is_none());
    assert_eq!(cleared.title, "Buy milk");

    // Step 9: list — both todos, in insertion order.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[1].id, 2);

    // Step 10: delete the second.
    let req = client.build_delete_todo(second.id);
    client.parse_delete_todo(execute(req)).unwrap();

    // Step 11: get after delete — NotFound with the id in the detail.
    let req = client.build_get_todo(second.id);
    let err = client.parse_get_todo(execute(req)).unwrap_err();
    match err {
        ApiError::NotFound { detail } => assert!(detail.contains("2")),
        other => panic!("expected NotFound, got {other:?}"),
    }

    // Step 12: delete again — still NotFound.
    let req = client.build_delete_todo(second.id);
    let err = client.parse_delete_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));

    // Step 13: a new todo never reuses the deleted id.
    let req = client
        .build_create_todo(&TodoIn {
            title: "Water plants".to_string(),
            done: false,
            notes: None,
        })
        .unwrap();
    let third = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(third.id, 3);
}
