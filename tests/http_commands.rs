use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;

use virb_rs::{
    client::{transport::Http, Client, Connection},
    network::Endpoint,
    product::Virb,
    proto::Response,
    util::MaybeInt,
    Error,
};

fn endpoint(server: &Server) -> Endpoint {
    server.host_with_port().parse().expect("mock endpoint")
}

#[test]
fn status_round_trips_json() {
    let mut server = Server::new();
    let body = json!({"batteryLevel": "84", "recordingTime": 0, "mode": "video", "gps": [1.5, null]});
    let mock = server
        .mock("POST", "/virb")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"command": "status"})))
        .with_status(200)
        .with_body(body.to_string())
        .create();

    let camera = Virb::connect(endpoint(&server)).unwrap();
    let status = camera.status().unwrap();

    mock.assert();
    assert_eq!(status, Response::Json(body));
    assert_eq!(camera.requests(), 1);
}

#[test]
fn non_json_body_is_returned_verbatim() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/virb")
        .with_status(500)
        .with_body("  Internal Error: camera busy\n")
        .create();

    let http = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let conn = Connection::with_transport(endpoint(&server), Http::from(http));
    let resp = conn
        .post("snapPicture", serde_json::Map::new())
        .unwrap();

    mock.assert();
    assert_eq!(resp.as_text(), Some("  Internal Error: camera busy\n"));
    assert_eq!(resp.as_json(), None);
    assert_eq!(conn.requests(), 1);
}

#[test]
fn features_and_update() {
    let mut server = Server::new();
    let features = server
        .mock("POST", "/virb")
        .match_body(Matcher::Json(json!({"command": "features"})))
        .with_body(
            json!({"features": [
                {"feature": "a", "enabled": true, "value": "3"},
                {"feature": "b", "enabled": false, "value": "x"},
            ]})
            .to_string(),
        )
        .create();
    let update = server
        .mock("POST", "/virb")
        .match_body(Matcher::Json(
            json!({"command": "updateFeature", "feature": "b", "value": 7}),
        ))
        .with_body(
            json!({"result": 1, "features": [{"feature": "b", "enabled": true, "value": "7"}]})
                .to_string(),
        )
        .create();

    let camera = Virb::connect(endpoint(&server)).unwrap();

    let set = camera.get_features().unwrap();
    assert_eq!(set.enabled.get("a"), Some(&MaybeInt::Int(3)));
    assert_eq!(set.disabled.get("b"), Some(&MaybeInt::Text("x".to_owned())));

    let list = camera.set_feature("b", 7).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["enabled"], json!(true));

    features.assert();
    update.assert();
    assert_eq!(camera.requests(), 2);
}

#[test]
fn sensors_empty_and_present() {
    let mut server = Server::new();
    let empty = server
        .mock("POST", "/virb")
        .match_body(Matcher::Json(json!({"command": "sensors"})))
        .with_body("[]")
        .create();

    let camera = Virb::connect(endpoint(&server)).unwrap();
    assert!(matches!(camera.sensors(), Err(Error::NoSensors)));
    empty.assert();

    let mut server = Server::new();
    let present = server
        .mock("POST", "/virb")
        .match_body(Matcher::Json(json!({"command": "sensors"})))
        .with_body(r#"[{"type":"tempe","data":"21.5"}]"#)
        .create();

    let camera = Virb::connect(endpoint(&server)).unwrap();
    assert!(camera.sensors().is_ok());
    present.assert();
}

#[test]
fn recording_flags() {
    let mut server = Server::new();
    let start = server
        .mock("POST", "/virb")
        .match_body(Matcher::Json(json!({"command": "startRecording"})))
        .with_body(r#"{"result":"1"}"#)
        .create();
    let stop = server
        .mock("POST", "/virb")
        .match_body(Matcher::Json(json!({"command": "stopRecording"})))
        .with_body(r#"{"result":"0"}"#)
        .create();

    let camera = Virb::connect(endpoint(&server)).unwrap();
    assert!(camera.start_recording().unwrap());
    assert!(!camera.stop_recording().unwrap());

    start.assert();
    stop.assert();
}

#[test]
fn connection_refused_propagates() {
    // grab a free port and release it so nothing is listening there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let camera = Virb::connect(Endpoint::new("127.0.0.1", port)).unwrap();
    assert!(matches!(camera.status(), Err(Error::Http(_))));
    assert_eq!(camera.requests(), 0);
}
