use rcs660s::Error;
use rcs660s::channel::Channel;
use rcs660s::protocol::escape;
use rcs660s::transport::{MockTransport, Transport};
use rcs660s::utils::ms;

#[test]
fn write_failure_propagates_from_escape_send() {
    let mut m = MockTransport::new();
    m.set_write_failures(1);
    let mut ch = Channel::new(m);
    let r = escape::send_apdu(&mut ch, 1, &[0xFF, 0xC2, 0x00, 0x00, 0x02, 0x82, 0x00], ms(10));
    assert!(matches!(r, Err(Error::Io(_))));
    assert!(ch.transport().sent.is_empty());
}

#[test]
fn boxed_transport_is_usable_through_the_trait() {
    let mut m = MockTransport::new();
    m.push_ack();
    let boxed: Box<dyn Transport> = Box::new(m);
    let mut ch = Channel::new(boxed);
    let ack = ch.read_vec(7, ms(10)).unwrap();
    assert_eq!(ack, rcs660s::constants::ACK_FRAME.to_vec());
}
