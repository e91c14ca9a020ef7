//! End-to-end runs of the demonstration sequence.

use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use serde_json::json;
use std::sync::atomic::Ordering;
use web3_client::blockchain::types::RpcConfig;
use web3_client::blockchain::{derive_address, parse_address, RpcClient};
use web3_client::{ExampleRunner, KeyManager};

mod common;
use common::MockTransport;

const DEMO_ADDRESS: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

fn mock_client(transport: MockTransport) -> RpcClient<MockTransport> {
    RpcClient::with_transport("http://localhost:8545".parse().unwrap(), transport)
}

fn healthy_node() -> MockTransport {
    MockTransport::new()
        .respond("eth_blockNumber", json!("0x1312d00"))
        .respond("eth_gasPrice", json!("0x3b9aca00"))
        .respond("eth_getBalance", json!("0x1bc16d674ec80000"))
}

struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, _dest: &mut [u8]) {}
    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "entropy pool closed",
        )))
    }
}

impl CryptoRng for FailingRng {}

#[tokio::test]
async fn test_full_run() {
    let transport = healthy_node();
    let calls = transport.calls();
    let released = transport.released();

    let runner = ExampleRunner::new(
        mock_client(transport),
        KeyManager::with_rng(StdRng::seed_from_u64(1)),
        parse_address(DEMO_ADDRESS).unwrap(),
    );

    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(runner.execute(&mut out, &mut err).await);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Latest Block: 20000000\n"));
    assert!(out.contains("Gas Price: 1 gwei\n"));
    assert!(out.contains(&format!("💰 Balance for {}\n", DEMO_ADDRESS)));
    assert!(out.contains("   2 ETH\n"));
    assert!(out.ends_with("✓ Done!\n"));
    assert!(err.is_empty());

    let expected_wallet = KeyManager::with_rng(StdRng::seed_from_u64(1)).generate().unwrap();
    assert!(out.contains(&format!("   Address: {}\n", derive_address(&expected_wallet))));
    assert!(out.contains(&format!(
        "   Private Key: {}\n",
        expected_wallet.expose_private_key_hex().as_str()
    )));

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["eth_blockNumber", "eth_gasPrice", "eth_getBalance"]
    );
    assert!(released.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_failure_skips_remaining_steps() {
    let transport = MockTransport::new()
        .respond("eth_blockNumber", json!("0x10"))
        .fail("eth_gasPrice", "upstream timed out")
        .respond("eth_getBalance", json!("0x0"));
    let calls = transport.calls();
    let released = transport.released();

    let runner = ExampleRunner::new(
        mock_client(transport),
        KeyManager::with_rng(StdRng::seed_from_u64(2)),
        parse_address(DEMO_ADDRESS).unwrap(),
    );

    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(!runner.execute(&mut out, &mut err).await);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Latest Block: 16\n"));
    assert!(!out.contains("Gas Price"));
    assert!(!out.contains("Generated New Wallet"));

    let err = String::from_utf8(err).unwrap();
    assert!(err.starts_with("✗ Error: RPC error: upstream timed out\n"));

    assert_eq!(*calls.lock().unwrap(), vec!["eth_blockNumber", "eth_gasPrice"]);
    assert!(released.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_entropy_failure_is_reported() {
    let transport = healthy_node();
    let released = transport.released();

    let runner = ExampleRunner::new(
        mock_client(transport),
        KeyManager::with_rng(FailingRng),
        parse_address(DEMO_ADDRESS).unwrap(),
    );

    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(!runner.execute(&mut out, &mut err).await);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("   2 ETH\n"));
    assert!(!out.contains("✓ Done!"));

    let err = String::from_utf8(err).unwrap();
    assert!(err.contains("Crypto provider error"));
    assert!(err.contains("entropy pool closed"));
    assert!(released.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_run_over_http() {
    let addr = common::start_rpc_backend(|request| {
        let result = match request["method"].as_str() {
            Some("eth_blockNumber") => json!("0x2a"),
            Some("eth_gasPrice") => json!("0x4a817c800"),
            Some("eth_getBalance") => json!("0x0"),
            _ => return (200, common::rpc_error(&request, -32601, "method not found")),
        };
        (200, common::rpc_result(&request, result))
    })
    .await;

    let client = RpcClient::connect(&RpcConfig {
        url: format!("http://{}", addr),
        timeout_secs: 5,
    })
    .unwrap();
    let mut runner = ExampleRunner::new(
        client,
        KeyManager::with_rng(StdRng::seed_from_u64(3)),
        parse_address(DEMO_ADDRESS).unwrap(),
    );

    let mut out = Vec::new();
    let credentials = runner.run(&mut out).await.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Latest Block: 42\n"));
    assert!(out.contains("Gas Price: 20 gwei\n"));
    assert!(out.contains("   0 ETH\n"));
    assert!(out.contains(&credentials.address().to_string()));
}
