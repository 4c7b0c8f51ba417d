use lintel::debounce::Debouncer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
    let count = Arc::new(AtomicUsize::new(0));
    let shared = count.clone();
    let make = move || -> Box<dyn FnOnce() + Send> {
        let shared = shared.clone();
        Box::new(move || {
            shared.fetch_add(1, Ordering::SeqCst);
        })
    };
    (count, make)
}

#[tokio::test(start_paused = true)]
async fn test_runs_once_after_quiet_period() {
    let debouncer = Debouncer::new(Duration::from_millis(100));
    let (count, action) = counter();

    debouncer.call(action());
    sleep(Duration::from_millis(50)).await;
    debouncer.call(action());
    sleep(Duration::from_millis(99)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(debouncer.is_pending());

    sleep(Duration::from_millis(2)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_action() {
    let debouncer = Debouncer::new(Duration::from_millis(100));
    let (count, action) = counter();

    debouncer.call(action());
    assert!(debouncer.cancel());
    assert!(!debouncer.cancel());
    sleep(Duration::from_millis(500)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels() {
    let (count, action) = counter();
    {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        debouncer.call(action());
    }
    sleep(Duration::from_millis(500)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_without_runtime_runs_immediately() {
    let debouncer = Debouncer::new(Duration::from_millis(100));
    let (count, action) = counter();
    debouncer.call(action());
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!debouncer.is_pending());
}
