use super::*;

#[test]
fn new_store_holds_initial_value() {
    let store = Store::new(3_u32);
    assert_eq!(store.get(), 3);
}

#[test]
fn set_without_subscribers_still_updates() {
    let store = Store::new(String::from("a"));
    store.set(String::from("b"));
    assert_eq!(store.get(), "b");
}

#[test]
fn update_mutates_in_place() {
    let store = Store::new(vec![1, 2]);
    store.update(|v| v.push(3));
    assert_eq!(store.get(), vec![1, 2, 3]);
}

#[test]
fn clones_share_the_same_value() {
    let store = Store::new(0_i32);
    let other = store.clone();
    other.set(9);
    assert_eq!(store.get(), 9);
}

#[tokio::test]
async fn subscribers_observe_each_write() {
    let store = Store::new(0_u32);
    let mut rx = store.subscribe();

    store.set(1);
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), 1);

    store.update(|v| *v += 10);
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), 11);
}

#[tokio::test]
async fn subscriber_in_task_sees_latest_value() {
    let store = Store::new(false);
    let mut rx = store.subscribe();
    let handle = tokio::spawn(async move {
        rx.changed().await.unwrap();
        *rx.borrow()
    });

    store.set(true);
    assert!(handle.await.unwrap());
}
