//! Trace records emitted for rejected operations. Requires the `log` feature.
#![cfg(feature = "log")]

use std::cell::RefCell;
use std::sync::Once;

use containers::{ContainerError, Outcome, RingBuffer, Stack};
use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String, String)>> = const { RefCell::new(Vec::new()) };
}

/// Collects records per thread so parallel tests do not see each other's output.
struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| {
            records.borrow_mut().push((
                record.level(),
                record.target().to_owned(),
                record.args().to_string(),
            ));
        });
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture;
static INIT: Once = Once::new();

/// Runs `f` and returns the messages it logged on this thread.
fn captured(f: impl FnOnce()) -> Vec<String> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| {
        records
            .borrow_mut()
            .drain(..)
            .map(|(level, target, message)| {
                assert_eq!(level, Level::Trace);
                assert_eq!(target, "containers");
                message
            })
            .collect()
    })
}

#[test]
fn stack_underflow_is_traced() {
    let messages = captured(|| {
        let mut stack = Stack::<u8>::new();
        assert_eq!(stack.pop(), Err(ContainerError::Underflow));
        assert_eq!(stack.top(), Err(ContainerError::Underflow));
        assert_eq!(stack.top_mut(), Err(ContainerError::Underflow));
    });
    assert_eq!(
        messages,
        [
            "Stack::pop: buffer underflow: container is empty",
            "Stack::top: buffer underflow: container is empty",
            "Stack::top_mut: buffer underflow: container is empty",
        ]
    );
}

#[test]
fn ringbuf_rejections_are_traced() {
    let messages = captured(|| {
        let mut buf = RingBuffer::<u8, 1>::new();
        assert_eq!(buf.read(), Err(ContainerError::Underflow));
        assert_eq!(buf.peek(), Err(ContainerError::Underflow));
        buf.write(1).unwrap();
        assert_eq!(buf.write(2), Err(ContainerError::Overflow));
    });
    assert_eq!(
        messages,
        [
            "RingBuffer::read: buffer underflow: container is empty",
            "RingBuffer::peek: buffer underflow: container is empty",
            "RingBuffer::write: buffer overflow: container is full",
        ]
    );
}

#[test]
fn overwrite_is_traced() {
    let messages = captured(|| {
        let mut buf = RingBuffer::<u8, 1>::new();
        assert_eq!(buf.force_write(1), None);
        assert_eq!(buf.force_write(2), Some(1));
    });
    assert_eq!(
        messages,
        ["RingBuffer::force_write: overwriting oldest of 1 slots"]
    );
}

#[test]
fn wrong_variant_access_is_traced() {
    let messages = captured(|| {
        let ok: Outcome<u8, u8> = Outcome::ok(1);
        let err: Outcome<u8, u8> = Outcome::err(2);
        assert!(ok.error().is_err());
        assert!(err.value().is_err());
        assert!(ok.into_error().is_err());
        assert!(err.into_value().is_err());
    });
    let suffix = ContainerError::WrongVariantAccess.message();
    assert_eq!(
        messages,
        [
            format!("Outcome::error: {suffix}"),
            format!("Outcome::value: {suffix}"),
            format!("Outcome::into_error: {suffix}"),
            format!("Outcome::into_value: {suffix}"),
        ]
    );
}

#[test]
fn success_paths_are_silent() {
    let messages = captured(|| {
        let mut stack = Stack::new();
        stack.push(1);
        assert_eq!(stack.top(), Ok(&1));
        assert_eq!(stack.pop(), Ok(1));
        stack.clear();

        let mut buf = RingBuffer::<u8, 2>::new();
        buf.write(1).unwrap();
        assert_eq!(buf.force_write(2), None);
        assert_eq!(buf.peek(), Ok(&1));
        assert_eq!(buf.read(), Ok(1));
        buf.clear();

        let ok: Outcome<u8, u8> = Outcome::ok(3);
        let err: Outcome<u8, u8> = Outcome::err(4);
        assert_eq!(ok.value(), Ok(&3));
        assert_eq!(err.error(), Ok(&4));
    });
    assert!(messages.is_empty(), "unexpected records: {messages:?}");
}
