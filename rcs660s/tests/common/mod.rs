// Shared helpers for integration tests. Each test crate pulls this in with
// `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]


use rcs660s::test_support;
use rcs660s::transport::MockTransport;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// MockTransport primed with a healthy initialization followed by `replies`,
/// each delivered as ACK + frame.
pub fn seeded_mock(replies: &[Vec<u8>]) -> MockTransport {
    let mut m = MockTransport::new();
    test_support::seed_initialize(&mut m);
    for r in replies {
        test_support::seed_exchange(&mut m, r);
    }
    m
}
