use crate::integration::{init_tracing, spawn_relay, wait_for_registry_len};
use crate::utils::TestClient;

#[tokio::test]
async fn each_client_gets_one_unique_id() {
    init_tracing();
    let (addr, state) = spawn_relay().await;

    let mut x = TestClient::connect(addr).await.expect("X failed to attach");
    let mut y = TestClient::connect(addr).await.expect("Y failed to attach");

    assert!(!x.id.as_str().is_empty());
    assert!(!y.id.as_str().is_empty());
    assert_ne!(x.id, y.id, "ids must be unique across open connections");

    wait_for_registry_len(&state, 2).await;

    // your_id is emitted exactly once; nothing else arrives unprompted.
    x.expect_silence(200).await.expect("X got an extra event");
    y.expect_silence(200).await.expect("Y got an extra event");
}
