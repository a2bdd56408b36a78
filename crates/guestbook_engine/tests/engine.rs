mod common;

use std::time::Duration;

use common::{tx_hash, FakeBatcher, FakeSession, FakeWriter};
use guestbook_engine::{EngineEvent, EngineHandle, Providers, SubmitRequest, GUESTBOOK_ADDRESS};

const WAIT: Duration = Duration::from_secs(5);

fn handle(writer: std::sync::Arc<FakeWriter>, batcher: std::sync::Arc<FakeBatcher>) -> EngineHandle {
    EngineHandle::with_providers(
        GUESTBOOK_ADDRESS,
        Providers {
            session: FakeSession::new(),
            writer,
            batcher,
        },
    )
}

#[test]
fn engine_reports_direct_submission_lifecycle() {
    engine_logging::initialize_for_tests();
    let writer = FakeWriter::confirming();
    let engine = handle(writer.clone(), FakeBatcher::accepting("0xbatch"));

    engine.write_contract(SubmitRequest {
        submission_id: 3,
        message: "hello".to_string(),
        with_attribution: true,
    });

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::TransactionSent {
            submission_id: 3,
            hash: tx_hash(),
        })
    );
    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::TransactionConfirmed {
            submission_id: 3,
            hash: tx_hash(),
            block_number: Some(7),
        })
    );
    assert_eq!(writer.writes().len(), 1);
}

#[test]
fn engine_reports_batch_acceptance() {
    let batcher = FakeBatcher::accepting("0xbatch");
    let engine = handle(FakeWriter::confirming(), batcher.clone());

    engine.send_calls(SubmitRequest {
        submission_id: 4,
        message: "gm".to_string(),
        with_attribution: false,
    });

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::BatchAccepted {
            submission_id: 4,
            batch_id: "0xbatch".to_string(),
        })
    );
    assert_eq!(batcher.batches().len(), 1);
}

#[test]
fn engine_connects_session() {
    let engine = handle(FakeWriter::confirming(), FakeBatcher::accepting("x"));

    engine.connect();

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::SessionConnected(FakeSession::info()))
    );
    assert_eq!(engine.try_recv(), None);
}
