use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration};

use crate::ui::debounce::Debouncer;

fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    (calls, move |v| sink.lock().unwrap().push(v))
}

#[tokio::test(start_paused = true)]
async fn test_burst_runs_once() {
    let (calls, handler) = recorder();
    let mut debouncer = Debouncer::new(300, handler);
    assert_eq!(debouncer.delay(), Duration::from_millis(300));

    for i in 1..=5 {
        debouncer.trigger(i);
        sleep(Duration::from_millis(100)).await;
    }
    assert!(calls.lock().unwrap().is_empty());

    // last trigger at t=400ms, so the call is due at t=700ms
    sleep(Duration::from_millis(199)).await;
    assert!(calls.lock().unwrap().is_empty());

    sleep(Duration::from_millis(2)).await;
    assert_eq!(*calls.lock().unwrap(), vec![5]);

    sleep(Duration::from_secs(2)).await;
    assert_eq!(*calls.lock().unwrap(), vec![5]);
}

#[tokio::test(start_paused = true)]
async fn test_quiet_period_between_calls() {
    let (calls, handler) = recorder();
    let mut debouncer = Debouncer::new(300, handler);

    debouncer.trigger(1);
    sleep(Duration::from_millis(350)).await;
    debouncer.trigger(2);
    sleep(Duration::from_millis(350)).await;

    assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels() {
    let (calls, handler) = recorder();
    let mut debouncer = Debouncer::new(300, handler);

    debouncer.trigger(7);
    drop(debouncer);
    sleep(Duration::from_secs(1)).await;
    assert!(calls.lock().unwrap().is_empty());
}
