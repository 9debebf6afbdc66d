use crate::integration::{init_tracing, spawn_relay};
use crate::utils::TestClient;
use beacon_core::{ClientEvent, ServerEvent};

#[tokio::test]
async fn malformed_frames_are_reported_and_connection_survives() {
    init_tracing();
    let (addr, _state) = spawn_relay().await;

    let mut x = TestClient::connect(addr).await.expect("X failed to attach");
    let mut y = TestClient::connect(addr).await.expect("Y failed to attach");

    x.send_raw("this is not json").await.expect("send failed");
    match x.next_event().await.expect("X got no error event") {
        ServerEvent::Error { message } => {
            assert!(message.starts_with("Malformed message"), "got: {message}");
        }
        other => panic!("Expected error event, got {other:?}"),
    }

    // A parseable event with a missing target field is malformed too.
    x.send_raw(r#"{"event":"offer_sdp","sdp":"v=0"}"#)
        .await
        .expect("send failed");
    assert!(matches!(
        x.next_event().await.expect("X got no error event"),
        ServerEvent::Error { .. }
    ));

    // The connection is still open and routable.
    x.send(ClientEvent::OfferSdp {
        target_client_id: y.id.clone(),
        sdp: "<desc>".to_string(),
    })
    .await
    .expect("X failed to send offer");

    assert_eq!(
        y.next_event().await.expect("Y got no offer"),
        ServerEvent::OfferSdp {
            from: x.id.clone(),
            sdp: "<desc>".to_string(),
        }
    );
}
