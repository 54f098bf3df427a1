use super::{TERMINATION_REQUESTED, take_termination_request};
use std::sync::atomic::Ordering;

#[test]
fn termination_request_is_taken_once() {
    TERMINATION_REQUESTED.store(true, Ordering::SeqCst);
    assert!(take_termination_request());
    assert!(!take_termination_request());
}
