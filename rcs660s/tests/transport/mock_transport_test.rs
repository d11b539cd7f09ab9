use rcs660s::channel::Channel;
use rcs660s::constants::ACK_FRAME;
use rcs660s::protocol::handshake;
use rcs660s::transport::{MockTransport, Transport};
use rcs660s::utils::ms;

#[test]
fn bytes_come_back_in_queue_order() {
    let mut m = MockTransport::new();
    m.push_bytes(&[0x10, 0x20]);
    m.push_ack();
    assert_eq!(m.try_read_byte().unwrap(), Some(0x10));
    assert_eq!(m.try_read_byte().unwrap(), Some(0x20));
    assert_eq!(m.remaining(), ACK_FRAME.len());
}

#[test]
fn silent_reader_times_out_on_the_simulated_clock() {
    let mut ch = Channel::new(MockTransport::new());
    let started = ch.transport().elapsed_ms();
    let err = handshake::await_ack(&mut ch, ms(1000)).unwrap_err();
    assert!(matches!(
        err,
        rcs660s::Error::Timeout {
            expected: 7,
            received: 0
        }
    ));
    assert_eq!(ch.transport().elapsed_ms() - started, 1000);
}

#[test]
fn partial_read_reports_how_much_arrived() {
    let mut m = MockTransport::new();
    m.push_bytes(&ACK_FRAME[..4]);
    let mut ch = Channel::new(m);
    let mut buf = [0xEEu8; 7];
    match ch.read_exact(&mut buf, ms(10)) {
        Err(rcs660s::Error::Timeout { expected, received }) => {
            assert_eq!((expected, received), (7, 4));
            assert_eq!(buf, [0u8; 7]);
        }
        other => panic!("expected Timeout, got: {:?}", other),
    }
}
