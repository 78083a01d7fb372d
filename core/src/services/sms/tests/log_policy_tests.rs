use crate::domain::value_objects::MessageType;
use crate::services::sms::{LogPolicy, LogStatus};

#[test]
fn test_default_policy_logs_nothing() {
    let policy = LogPolicy::new();

    assert!(!policy.is_enabled());
    for message_type in MessageType::ALL {
        assert!(!policy.should_log(message_type, true));
        assert!(!policy.should_log(message_type, false));
    }
}

#[test]
fn test_log_true_enables_every_type_and_status() {
    let mut policy = LogPolicy::new();
    policy.log(true);

    for message_type in MessageType::ALL {
        assert!(policy.should_log(message_type, true));
        assert!(policy.should_log(message_type, false));
    }
}

#[test]
fn test_log_false_disables_everything() {
    let mut policy = LogPolicy::new();
    policy.log(true);
    policy.log(false);

    assert!(!policy.is_enabled());
    assert!(!policy.should_log(MessageType::Text, true));
}

#[test]
fn test_single_type_toggle() {
    let mut policy = LogPolicy::new();
    policy.log_type(MessageType::Otp, true);

    assert!(policy.should_log(MessageType::Otp, true));
    assert!(!policy.should_log(MessageType::Text, true));

    policy.log_type(MessageType::Otp, false);
    assert!(!policy.should_log(MessageType::Otp, true));
}

#[test]
fn test_removing_type_from_all() {
    let mut policy = LogPolicy::new();
    policy.log(true);
    policy.log_type(MessageType::Pattern, false);

    assert!(policy.should_log(MessageType::Otp, false));
    assert!(!policy.should_log(MessageType::Pattern, false));
}

#[test]
fn test_log_successful_enables_all_types_when_unset() {
    let mut policy = LogPolicy::new();
    policy.log_successful();

    assert!(policy.should_log(MessageType::Text, true));
    assert!(!policy.should_log(MessageType::Text, false));
    assert_eq!(policy.statuses().len(), 1);
    assert!(policy.statuses().contains(&LogStatus::Successful));
}

#[test]
fn test_log_failed_keeps_selected_types() {
    let mut policy = LogPolicy::new();
    policy.log_type(MessageType::Pattern, true);
    policy.log_failed();

    assert!(policy.should_log(MessageType::Pattern, false));
    assert!(!policy.should_log(MessageType::Pattern, true));
    assert!(!policy.should_log(MessageType::Otp, false));
}

#[test]
fn test_last_status_narrowing_wins() {
    let mut policy = LogPolicy::new();
    policy.log_successful();
    policy.log_failed();

    assert!(policy.should_log(MessageType::Otp, false));
    assert!(!policy.should_log(MessageType::Otp, true));
}

#[test]
fn test_removing_type_from_unset_keeps_the_others() {
    let mut policy = LogPolicy::new();
    policy.log_type(MessageType::Otp, false);

    assert!(policy.should_log(MessageType::Pattern, true));
    assert!(policy.should_log(MessageType::Text, false));
    assert!(!policy.should_log(MessageType::Otp, true));
}

#[test]
fn test_excluded_type_then_successful_only() {
    let mut policy = LogPolicy::new();
    policy.log_type(MessageType::Otp, false);
    policy.log_successful();

    assert!(policy.should_log(MessageType::Pattern, true));
    assert!(policy.should_log(MessageType::Text, true));
    assert!(!policy.should_log(MessageType::Otp, true));
    assert!(!policy.should_log(MessageType::Pattern, false));
}

#[test]
fn test_log_false_then_single_type() {
    let mut policy = LogPolicy::new();
    policy.log(false);
    policy.log_type(MessageType::Text, true);

    assert!(policy.should_log(MessageType::Text, true));
    assert!(!policy.should_log(MessageType::Otp, true));
}
