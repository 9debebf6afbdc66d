use crate::integration::{init_tracing, spawn_relay};
use crate::utils::TestClient;
use beacon_core::{ClientEvent, ServerEvent};

#[tokio::test]
async fn messages_from_one_sender_arrive_in_send_order() {
    init_tracing();
    let (addr, _state) = spawn_relay().await;

    let mut x = TestClient::connect(addr).await.expect("X failed to attach");
    let mut y = TestClient::connect(addr).await.expect("Y failed to attach");

    for i in 0..20 {
        x.send(ClientEvent::SendMessage {
            target_client_id: y.id.clone(),
            message: format!("msg-{i}"),
        })
        .await
        .expect("X failed to send");
    }

    for i in 0..20 {
        match y.next_event().await.expect("Y missed a message") {
            ServerEvent::ReceiveMessage { message, .. } => {
                assert_eq!(message, format!("msg-{i}"));
            }
            other => panic!("Expected receive_message, got {other:?}"),
        }
    }
}
