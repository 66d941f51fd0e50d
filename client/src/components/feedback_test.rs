use super::*;

#[test]
fn feedback_request_trims_blank_comment() {
    let request = feedback_request(4, 9, FeedbackType::BuddyToNewcomer, 4, "   ").unwrap();
    assert_eq!(request.comment, None);
    assert_eq!(request.rating, 4);
    assert_eq!(request.feedback_type, FeedbackType::BuddyToNewcomer);
}

#[test]
fn feedback_request_rejects_out_of_range_rating() {
    let errors = feedback_request(4, 9, FeedbackType::NewcomerToBuddy, 0, "ok").unwrap_err();
    assert!(errors.for_field("rating").is_some());
}

#[test]
fn feedback_request_rejects_long_comment() {
    let long = "x".repeat(MAX_COMMENT_CHARS + 1);
    let errors = feedback_request(4, 9, FeedbackType::NewcomerToBuddy, 5, &long).unwrap_err();
    assert!(errors.for_field("comment").is_some());
}

#[test]
fn stars_render_filled_and_empty() {
    assert_eq!(stars(3), "★★★☆☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}

#[test]
fn share_percent_handles_zero_total() {
    assert_eq!(share_percent(3, 0), 0);
    assert_eq!(share_percent(1, 3), 33);
    assert_eq!(share_percent(4, 4), 100);
}
