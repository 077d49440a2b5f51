use super::*;
use crossbeam::channel::TryRecvError;

fn user(text: &str) -> Token<'_, u8> {
    Token::User { kind: 0, text }
}

// === Local ===

#[test]
fn local_is_fifo() {
    let mut delivery = Delivery::local();
    assert_eq!(delivery.send(user("a")), Ok(()));
    assert_eq!(delivery.send(user("b")), Ok(()));
    assert_eq!(delivery.pop(), Some(user("a")));
    assert_eq!(delivery.pop(), Some(user("b")));
    assert_eq!(delivery.pop(), None);
}

#[test]
fn local_keeps_queue_after_close() {
    let mut delivery = Delivery::local();
    assert_eq!(delivery.send(Token::EndOfStream), Ok(()));
    delivery.close();
    assert!(delivery.is_closed());
    assert_eq!(delivery.send(user("late")), Err(DeliveryError::Closed));
    assert_eq!(delivery.pop(), Some(Token::EndOfStream));
    assert_eq!(delivery.pop(), None);
}

#[test]
fn local_never_blocks() {
    let mut delivery = Delivery::local();
    for _ in 0..1_000 {
        assert_eq!(delivery.send(user("x")), Ok(()));
    }
}

// === Channel ===

#[test]
fn channel_delivers_to_receiver() {
    let (mut delivery, receiver) = Delivery::channel(4);
    assert_eq!(delivery.send(user("a")), Ok(()));
    assert_eq!(delivery.pop(), None);
    assert_eq!(receiver.try_recv(), Ok(user("a")));
}

#[test]
fn channel_close_disconnects_receiver() {
    let (mut delivery, receiver) = Delivery::<u8>::channel(4);
    assert_eq!(delivery.send(Token::EndOfStream), Ok(()));
    delivery.close();
    assert!(delivery.is_closed());
    assert_eq!(receiver.try_recv(), Ok(Token::EndOfStream));
    assert_eq!(receiver.try_recv(), Err(TryRecvError::Disconnected));
}

#[test]
fn channel_send_after_close_fails() {
    let (mut delivery, _receiver) = Delivery::<u8>::channel(4);
    delivery.close();
    assert_eq!(delivery.send(Token::EndOfStream), Err(DeliveryError::Closed));
}

#[test]
fn channel_send_to_dropped_receiver_fails() {
    let (mut delivery, receiver) = Delivery::channel(4);
    drop(receiver);
    assert_eq!(delivery.send(user("x")), Err(DeliveryError::Disconnected));
}
