//! Integration tests for courier.
//!
//! These tests exercise the full dispatch path: registration, resolution,
//! invocation, and error propagation through the public API only.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use courier::{
    BoxFuture, CourierError, ErasedHandler, FnHandler, Handler, HandlerKey, HandlerRegistry,
    Request, Result, Sender, ServiceLocator,
};
use tokio_util::sync::CancellationToken;

struct Echo;

impl Request for Echo {
    type Response = String;
}

struct Missing;

impl Request for Missing {
    type Response = String;
}

struct Add {
    lhs: i64,
    rhs: i64,
}

impl Request for Add {
    type Response = i64;
}

#[derive(Debug, thiserror::Error)]
#[error("boom")]
struct Boom;

fn echo_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register_fn(|_: Echo, _| async { Ok("ok".to_string()) });
    registry
}

/// The Echo/Missing scenario: a registered request dispatches, an
/// unregistered one fails with an error naming its type.
#[tokio::test]
async fn test_echo_dispatches_and_missing_does_not() {
    let sender = Sender::new(Arc::new(echo_registry()));

    assert_eq!(sender.send(Echo).await.unwrap(), "ok");

    let err = sender.send(Missing).await.unwrap_err();
    assert!(matches!(err, CourierError::HandlerNotFound(_)));
    assert!(err.to_string().contains("Missing"));
}

/// A struct handler works the same as a closure handler.
#[tokio::test]
async fn test_struct_handler_dispatch() {
    struct AddHandler;

    impl Handler<Add> for AddHandler {
        fn handle(&self, request: Add, _cancel: CancellationToken) -> BoxFuture<'_, Result<i64>> {
            Box::pin(async move { Ok(request.lhs + request.rhs) })
        }
    }

    let mut registry = HandlerRegistry::new();
    registry.register(AddHandler);
    let sender = Sender::new(Arc::new(registry));

    let sum = sender.send(Add { lhs: 40, rhs: 2 }).await.unwrap();
    assert_eq!(sum, 42);
}

/// A domain error raised in the handler reaches the caller with its kind
/// and message intact.
#[tokio::test]
async fn test_domain_error_propagates_with_kind_and_message() {
    let mut registry = HandlerRegistry::new();
    registry.register_fn(|_: Echo, _| async { Err::<String, _>(CourierError::handler(Boom)) });
    let sender = Sender::new(Arc::new(registry));

    let err = sender.send(Echo).await.unwrap_err();
    assert_eq!(err.to_string(), "boom");
    assert!(err
        .handler_error()
        .and_then(|e| e.downcast_ref::<Boom>())
        .is_some());
}

/// Last registration wins at the registry boundary, and dispatch follows
/// whatever the locator resolves.
#[tokio::test]
async fn test_last_registration_wins_through_dispatch() {
    let mut registry = HandlerRegistry::new();
    registry.register_fn(|_: Echo, _| async { Ok("first".to_string()) });
    registry.register_fn(|_: Echo, _| async { Ok("second".to_string()) });
    let sender = Sender::new(Arc::new(registry));

    assert_eq!(sender.send(Echo).await.unwrap(), "second");
}

/// The dispatcher works against any locator implementation, not just the
/// in-crate registry.
#[tokio::test]
async fn test_custom_locator_implementation() {
    struct SingleEntryLocator {
        key: HandlerKey,
        handler: ErasedHandler,
    }

    impl ServiceLocator for SingleEntryLocator {
        fn resolve(&self, key: &HandlerKey) -> Option<ErasedHandler> {
            (*key == self.key).then(|| Arc::clone(&self.handler))
        }
    }

    let handler: Arc<dyn Handler<Echo>> =
        Arc::new(FnHandler::new(|_: Echo, _| async { Ok("custom".to_string()) }));
    let locator = SingleEntryLocator {
        key: HandlerKey::of::<Echo>(),
        handler: courier::erase::<Echo>(handler),
    };
    let sender = Sender::new(Arc::new(locator));

    assert_eq!(sender.send(Echo).await.unwrap(), "custom");
    assert!(matches!(
        sender.send(Missing).await.unwrap_err(),
        CourierError::HandlerNotFound(_)
    ));
}

/// Concurrent sends from parallel tasks complete independently, each
/// invoking the handler exactly once.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sends_are_independent() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_handler = Arc::clone(&calls);

    let mut registry = HandlerRegistry::new();
    registry.register_fn(move |req: Add, _| {
        let calls = Arc::clone(&calls_in_handler);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok(req.lhs + req.rhs)
        }
    });
    let sender = Sender::new(Arc::new(registry));

    let mut tasks = Vec::new();
    for i in 0..32i64 {
        let sender = sender.clone();
        tasks.push(tokio::spawn(async move {
            sender.send(Add { lhs: i, rhs: 1 }).await.unwrap()
        }));
    }

    for (i, task) in tasks.into_iter().enumerate() {
        assert_eq!(task.await.unwrap(), i as i64 + 1);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 32);
}

/// A cancellation observed mid-handler makes the handler's own policy
/// visible to the caller; the dispatcher itself never reacts to the token.
#[tokio::test]
async fn test_cancellation_mid_flight_is_the_handlers_call() {
    struct WaitForCancel;

    impl Request for WaitForCancel {
        type Response = &'static str;
    }

    let mut registry = HandlerRegistry::new();
    registry.register_fn(|_: WaitForCancel, cancel: CancellationToken| async move {
        cancel.cancelled().await;
        Ok("aborted by handler")
    });
    let sender = Sender::new(Arc::new(registry));

    let token = CancellationToken::new();
    let dispatched = {
        let sender = sender.clone();
        let token = token.clone();
        tokio::spawn(async move { sender.send_with_cancellation(WaitForCancel, token).await })
    };

    token.cancel();
    assert_eq!(dispatched.await.unwrap().unwrap(), "aborted by handler");
}

/// Per-call resolution: a locator handing out a fresh handler instance per
/// resolve sees one resolution per send.
#[tokio::test]
async fn test_per_call_resolution_respects_locator_scoping() {
    struct FreshPerCallLocator {
        resolutions: AtomicUsize,
    }

    impl ServiceLocator for FreshPerCallLocator {
        fn resolve(&self, key: &HandlerKey) -> Option<ErasedHandler> {
            if *key != HandlerKey::of::<Echo>() {
                return None;
            }
            let n = self.resolutions.fetch_add(1, Ordering::SeqCst) + 1;
            let handler: Arc<dyn Handler<Echo>> =
                Arc::new(FnHandler::new(move |_: Echo, _| async move {
                    Ok(format!("instance {n}"))
                }));
            Some(courier::erase::<Echo>(handler))
        }
    }

    let locator = Arc::new(FreshPerCallLocator {
        resolutions: AtomicUsize::new(0),
    });
    let sender = Sender::new(Arc::clone(&locator) as Arc<dyn ServiceLocator>);

    assert_eq!(sender.send(Echo).await.unwrap(), "instance 1");
    assert_eq!(sender.send(Echo).await.unwrap(), "instance 2");
    assert_eq!(locator.resolutions.load(Ordering::SeqCst), 2);
}
