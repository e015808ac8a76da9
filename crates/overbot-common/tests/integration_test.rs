//! Integration tests for overbot-common crate.

use std::collections::HashMap;
use std::time::Duration;
use overbot_common::{
    format_uptime, truncate_string, ChannelId, MessageId, OverBotError, UserId,
};

#[test]
fn test_snowflake_display_and_debug() {
    let channel_id = ChannelId(123_456_789);
    assert_eq!(format!("{channel_id}"), "123456789");
    assert_eq!(format!("{channel_id:?}"), "ChannelId(123456789)");
    assert_eq!(channel_id.get(), 123_456_789);
}

#[test]
fn test_snowflake_serializes_transparently() {
    let user_id = UserId(987_654_321);
    let serialized = serde_json::to_string(&user_id).unwrap();
    assert_eq!(serialized, "987654321");

    let deserialized: UserId = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, user_id);
}

#[test]
fn test_snowflake_usable_as_map_key() {
    let mut map = HashMap::new();
    map.insert(MessageId(7), "prompt");
    assert_eq!(map.get(&MessageId::from(7)), Some(&"prompt"));
}

#[test]
fn test_config_error_message() {
    let error = OverBotError::config("Discord token cannot be empty");
    assert_eq!(
        error.to_string(),
        "Configuration error: Discord token cannot be empty"
    );
}

#[test]
fn test_formatting_helpers() {
    assert_eq!(truncate_string("abcdef", 5), "ab...");
    assert_eq!(format_uptime(Duration::from_secs(3_661), true), "1h 1m");
}
