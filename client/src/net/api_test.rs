use super::*;

#[test]
fn api_base_has_no_trailing_slash_issue() {
    let url = endpoints::employees::list().url(api_base());
    assert!(url.ends_with("/employees"));
    assert!(!url.contains("//employees"));
}

#[test]
fn optional_lookup_endpoints_resolve_under_base() {
    let url = endpoints::buddies::by_employee(7).url(api_base());
    assert!(url.ends_with("/buddies/employee/7"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on(fetch_employees());
    assert_eq!(result, Err(ApiError::Unavailable));
    assert!(matches!(
        block_on(fetch_buddy_profile_for_employee(7)),
        Err(ApiError::Unavailable)
    ));
    let award = AwardPointsRequest { buddy_id: 7, points: 10, reason: "Welcome lunch".to_owned() };
    assert_eq!(block_on(award_points(&award)), Err(ApiError::Unavailable));
}

/// Minimal executor for futures that resolve without awaiting I/O.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct Noop;
    impl Wake for Noop {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(Noop));
    let mut cx = Context::from_waker(&waker);
    let mut future = pin!(future);
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
