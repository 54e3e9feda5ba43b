// crates/monocut-api/tests/client.rs
//
// ApiClient against a one-shot HTTP responder on 127.0.0.1:0.
// Each stub accepts a single connection, records the request, replies with a
// canned status + body and closes.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;
use monocut_api::{ApiClient, ApiConfig, ApiError, ApiResult, ApiWorker};
use monocut_core::state::AppState;

struct Recorded {
    request_line: String,
    body:         String,
}

fn stub(status: &'static str, body: &'static str) -> (String, JoinHandle<Recorded>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut received = vec![0u8; content_length];
        reader.read_exact(&mut received).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        )
        .unwrap();
        stream.flush().unwrap();

        Recorded {
            request_line: request_line.trim_end().to_string(),
            body:         String::from_utf8(received).unwrap(),
        }
    });

    (base_url, handle)
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ApiConfig::new(base_url).with_timeout(Duration::from_secs(5)))
}

const ASSET_JSON: &str = r#"{"id":"a1","file_name":"clip.mp4","file_path":"/v/clip.mp4","duration":95.0,"resolution":{"width":1280,"height":720},"frame_rate":30.0,"file_size":1536,"has_audio":true,"thumbnails":[],"create_time":"2024-05-01T10:00:00"}"#;

#[test]
fn health_check_decodes() {
    let (url, server) = stub("200 OK", r#"{"status":"ok","message":"Backend is running"}"#);
    let resp = client(&url).health_check().unwrap();
    assert_eq!(resp.status, "ok");
    assert_eq!(resp.message, "Backend is running");

    let req = server.join().unwrap();
    assert_eq!(req.request_line, "GET /api/health HTTP/1.1");
}

#[test]
fn import_posts_file_paths() {
    let body = Box::leak(
        format!(r#"{{"success":true,"assets":[{ASSET_JSON}],"message":"部分文件导入失败: b.txt: 不支持的格式 .txt"}}"#)
            .into_boxed_str(),
    );
    let (url, server) = stub("200 OK", body);

    let resp = client(&url)
        .import_videos(&["/v/clip.mp4".to_string(), "/v/b.txt".to_string()])
        .unwrap();
    assert!(resp.success);
    assert_eq!(resp.assets.len(), 1);
    assert_eq!(resp.assets[0].file_size, 1536);
    assert!(resp.message.unwrap().starts_with("部分文件导入失败"));

    let req = server.join().unwrap();
    assert_eq!(req.request_line, "POST /api/media/import HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(sent, serde_json::json!({ "file_paths": ["/v/clip.mp4", "/v/b.txt"] }));
}

#[test]
fn error_detail_is_preferred() {
    let (url, server) = stub("400 Bad Request", r#"{"detail":"所有文件导入失败: a.mp4: 文件不存在"}"#);
    let err = client(&url).import_videos(&["a.mp4".to_string()]).unwrap_err();
    server.join().unwrap();

    assert_eq!(
        err,
        ApiError::Status { status: 400, detail: Some("所有文件导入失败: a.mp4: 文件不存在".into()) },
    );
    assert_eq!(err.user_message(), "所有文件导入失败: a.mp4: 文件不存在");
}

#[test]
fn error_without_detail_uses_status_text() {
    let (url, server) = stub("500 Internal Server Error", "Internal Server Error");
    let err = client(&url).list_media_assets().unwrap_err();
    server.join().unwrap();
    assert_eq!(err.user_message(), "Request failed with status code 500");
}

#[test]
fn get_single_asset() {
    let (url, server) = stub("200 OK", ASSET_JSON);
    let asset = client(&url).get_media_asset("a1").unwrap();
    assert_eq!(asset.id, "a1");
    let req = server.join().unwrap();
    assert_eq!(req.request_line, "GET /api/media/a1 HTTP/1.1");
}

#[test]
fn malformed_body_is_a_decode_error() {
    let (url, server) = stub("200 OK", r#"{"unexpected":true}"#);
    let err = client(&url).list_media_assets().unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(!err.user_message().is_empty());
}

#[test]
fn offline_backend_reports_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let c = client(&format!("http://127.0.0.1:{port}"));

    let err = c.health_check().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!c.is_backend_online());
}

#[test]
fn worker_delivers_list_into_state() {
    let body = Box::leak(format!("[{ASSET_JSON}]").into_boxed_str());
    let (url, server) = stub("200 OK", body);

    let woke = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = Arc::clone(&woke);
    let worker = ApiWorker::new(
        client(&url),
        Arc::new(move || {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }),
    );

    let mut state = AppState::default();
    worker.list_media_assets(state.begin_list());
    let result = worker.rx.recv_timeout(Duration::from_secs(5)).unwrap();
    server.join().unwrap();

    match result {
        ApiResult::Listed { epoch, outcome } => state.finish_list(epoch, outcome),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(state.registry.len(), 1);
    assert!(!state.library_loading);
    assert_eq!(woke.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn failed_import_releases_in_flight_flag() {
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let worker = ApiWorker::new(client(&format!("http://127.0.0.1:{port}")), Arc::new(|| {}));

    let mut state = AppState::default();
    let ticket = state.begin_import(vec!["/v/clip.mp4".into()]).unwrap();
    worker.import_videos(ticket);

    match worker.rx.recv_timeout(Duration::from_secs(10)).unwrap() {
        ApiResult::Imported { job_id, outcome } => {
            assert!(outcome.is_err());
            assert!(state.finish_import(job_id, outcome));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!state.import_in_flight());
    assert!(state.notice.unwrap().text.starts_with("导入失败："));
}

#[test]
fn shutdown_drops_late_results() {
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let worker = ApiWorker::new(client(&format!("http://127.0.0.1:{port}")), Arc::new(|| {}));
    worker.shutdown();
    worker.health_check();
    assert_eq!(
        worker.rx.recv_timeout(Duration::from_millis(300)).unwrap_err(),
        RecvTimeoutError::Timeout,
    );
}
