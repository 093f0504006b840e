//! In-process copy port
//!
//! `LocalPort` is the Rust-side counterpart of an application's outbound
//! port. Messages are delivered synchronously and in FIFO order. A message
//! sent from inside a handler is queued and delivered after the current one
//! has been handled by every subscriber.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::{CopyHandler, CopySource};
use crate::error::BridgeResult;

type SharedHandler = Rc<RefCell<CopyHandler>>;

#[derive(Default)]
struct PortState {
    next_id: u64,
    handlers: Vec<(u64, SharedHandler)>,
    queue: VecDeque<String>,
    dispatching: bool,
}

#[derive(Clone, Default)]
pub struct LocalPort {
    state: Rc<RefCell<PortState>>,
}

impl LocalPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a copy request to every current subscriber
    pub fn send(&self, text: impl Into<String>) {
        {
            let mut state = self.state.borrow_mut();
            state.queue.push_back(text.into());
            if state.dispatching {
                return;
            }
            state.dispatching = true;
        }
        let _dispatch = DispatchGuard(&self.state);

        loop {
            // Release the borrow before calling out so handlers can send or unsubscribe
            let (message, handlers) = {
                let mut state = self.state.borrow_mut();
                match state.queue.pop_front() {
                    Some(message) => {
                        let handlers: Vec<SharedHandler> =
                            state.handlers.iter().map(|(_, h)| h.clone()).collect();
                        (message, handlers)
                    }
                    None => return,
                }
            };

            for handler in handlers {
                (handler.borrow_mut())(message.clone());
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().handlers.len()
    }
}

impl CopySource for LocalPort {
    type Subscription = LocalSubscription;

    fn subscribe(&self, handler: CopyHandler) -> BridgeResult<LocalSubscription> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.handlers.push((id, Rc::new(RefCell::new(handler))));

        Ok(LocalSubscription {
            state: Rc::downgrade(&self.state),
            id,
        })
    }
}

/// Ends a dispatch loop. If a handler panicked, requests queued during that
/// turn are discarded so the port starts clean on the next `send`.
struct DispatchGuard<'a>(&'a RefCell<PortState>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.0.borrow_mut();
        state.dispatching = false;
        if std::thread::panicking() {
            state.queue.clear();
        }
    }
}

/// Registration on a [`LocalPort`]; unsubscribes on drop
pub struct LocalSubscription {
    state: Weak<RefCell<PortState>>,
    id: u64,
}

impl Drop for LocalSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, CopyHandler) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Box::new(move |s| sink.borrow_mut().push(s)))
    }

    #[test]
    fn test_delivers_in_order() {
        let port = LocalPort::new();
        let (seen, handler) = recorder();
        let _sub = port.subscribe(handler).unwrap();

        port.send("s1");
        port.send("s2");

        assert_eq!(*seen.borrow(), vec!["s1".to_string(), "s2".to_string()]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let port = LocalPort::new();
        let (seen, handler) = recorder();
        let sub = port.subscribe(handler).unwrap();
        assert_eq!(port.subscriber_count(), 1);

        drop(sub);
        port.send("ignored");

        assert_eq!(port.subscriber_count(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_send_from_handler_is_queued() {
        let port = LocalPort::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner_port = port.clone();
        let inner_log = log.clone();
        let _sub = port
            .subscribe(Box::new(move |s| {
                inner_log.borrow_mut().push(format!("start {}", s));
                if s == "s1" {
                    inner_port.send("s2");
                }
                inner_log.borrow_mut().push(format!("end {}", s));
            }))
            .unwrap();

        port.send("s1");

        assert_eq!(*log.borrow(), vec!["start s1", "end s1", "start s2", "end s2"]);
    }

    #[test]
    fn test_port_recovers_after_handler_panic() {
        let port = LocalPort::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let inner_port = port.clone();
        let sink = seen.clone();
        let _sub = port
            .subscribe(Box::new(move |s| {
                if s == "boom" {
                    inner_port.send("queued before panic");
                    panic!("handler failed");
                }
                sink.borrow_mut().push(s);
            }))
            .unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| port.send("boom")));
        assert!(result.is_err());

        port.send("after");

        assert_eq!(*seen.borrow(), vec!["after".to_string()]);
    }

    #[test]
    fn test_subscription_outliving_port() {
        let port = LocalPort::new();
        let (_seen, handler) = recorder();
        let sub = port.subscribe(handler).unwrap();

        drop(port);
        drop(sub);
    }
}
