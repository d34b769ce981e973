//! Bundled demo conversation used by smoke checks and examples.

use chrono::Utc;
use satsuma_core::{Message, MessageCategory, MessageId, SenderRole};

pub const DEMO_CUSTOMER_ID: &str = "demo-customer";

/// A short order-and-review exchange with one mikan grower.
pub fn demo_history() -> Vec<Message> {
    vec![
        message("1", "青島みかんを5kg注文したいです", MessageCategory::Order, SenderRole::Customer),
        message(
            "2",
            "ありがとうございます。青島みかん5kgですね。梱包について何かご要望はございますか？",
            MessageCategory::Inquiry,
            SenderRole::Farmer,
        ),
        message(
            "3",
            "贈答用の梱包でお願いします。家族みんな楽しみにしています",
            MessageCategory::Request,
            SenderRole::Customer,
        ),
        message(
            "4",
            "とても美味しかった！次回もお願いしたいです",
            MessageCategory::Review,
            SenderRole::Customer,
        ),
    ]
}

fn message(id: &str, content: &str, category: MessageCategory, sender: SenderRole) -> Message {
    Message {
        id: MessageId(id.to_string()),
        content: content.to_string(),
        category,
        timestamp: Utc::now(),
        sender,
    }
}
