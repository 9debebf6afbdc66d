use crate::integration::{init_tracing, spawn_relay};
use crate::utils::TestClient;
use beacon_core::{ClientEvent, ServerEvent};

#[tokio::test]
async fn offer_and_answer_are_relayed_with_true_sender() {
    init_tracing();
    let (addr, _state) = spawn_relay().await;

    let mut x = TestClient::connect(addr).await.expect("X failed to attach");
    let mut y = TestClient::connect(addr).await.expect("Y failed to attach");

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

    y.send(ClientEvent::AnswerSdp {
        target_client_id: x.id.clone(),
        sdp: "<answer>".to_string(),
    })
    .await
    .expect("Y failed to send answer");

    assert_eq!(
        x.next_event().await.expect("X got no answer"),
        ServerEvent::AnswerSdp {
            from: y.id.clone(),
            sdp: "<answer>".to_string(),
        }
    );
}
