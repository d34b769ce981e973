//! Tone-templated reply pools.
//!
//! A two-dimensional (category, tone) lookup over immutable template
//! lists. Feedback replies split further on the message-level sentiment,
//! and complaint replies keep apology framing in every tone. Order
//! templates carry a `{product}` placeholder.

use crate::domain::message::MessageCategory;
use crate::domain::summary::Sentiment;

use super::types::Tone;

pub(super) const PRODUCT_PLACEHOLDER: &str = "{product}";

const ORDER_FRIENDLY: &[&str] = &[
    "ご注文ありがとうございます！{product}ですね。とても美味しく仕上がっておりますよ。",
    "{product}のご注文をいただき、ありがとうございます！心を込めてお送りいたします。",
];
const ORDER_PROFESSIONAL: &[&str] = &[
    "ご注文を承りました。{product}について、詳細をご確認させていただきます。",
    "{product}のご注文ありがとうございます。お客様のご要望に沿って準備いたします。",
];
const ORDER_ENTHUSIASTIC: &[&str] = &[
    "わぁ！{product}のご注文ありがとうございます！今年は特に美味しく育ちました！",
    "{product}のご注文、本当にありがとうございます！自信をもってお届けします！",
];
const ORDER_APOLOGETIC: &[&str] =
    &["ご注文いただき恐縮です。{product}について、最善を尽くして対応いたします。"];

const FEEDBACK_POSITIVE_FRIENDLY: &[&str] = &[
    "お褒めの言葉をいただき、本当に嬉しいです！また美味しいみかんをお届けしますね。",
    "ありがとうございます！お客様に喜んでいただけて、農家冥利に尽きます。",
];
const FEEDBACK_POSITIVE_PROFESSIONAL: &[&str] = &[
    "ご満足いただけましたこと、大変嬉しく思います。今後ともよろしくお願いいたします。",
    "お気に入りいただき、誠にありがとうございます。品質向上に努めてまいります。",
];
const FEEDBACK_POSITIVE_ENTHUSIASTIC: &[&str] = &[
    "わぁ！そんなに喜んでいただけて、本当に嬉しいです！次回も期待してくださいね！",
    "ありがとうございます！お客様の笑顔が私たちの一番の喜びです！",
];
const FEEDBACK_POSITIVE_APOLOGETIC: &[&str] =
    &["お気に入りいただき、恐縮です。これからも精進いたします。"];

const FEEDBACK_OTHER: &[&str] =
    &["ご意見をいただき、ありがとうございます。今後の参考にさせていただきます。"];

// One pool for complaints: the apology framing does not vary with tone.
const COMPLAINT: &[&str] = &[
    "この度は、ご不便をおかけして大変申し訳ございません。すぐに改善に努めます。",
    "申し訳ございません。ご指摘いただき、今後このようなことがないよう気をつけます。",
    "大変申し訳ございません。お客様のご意見を真摯に受け止め、対応いたします。",
];

const GENERAL_FRIENDLY: &[&str] = &[
    "ご連絡ありがとうございます！何かお手伝いできることがあれば、お気軽におっしゃってくださいね。",
    "いつもありがとうございます！どのようなことでしょうか？",
];
const GENERAL_PROFESSIONAL: &[&str] = &[
    "お問い合わせいただき、ありがとうございます。詳細についてご回答いたします。",
    "ご質問をいただき、ありがとうございます。適切に対応させていただきます。",
];
const GENERAL_ENTHUSIASTIC: &[&str] = &[
    "ご連絡ありがとうございます！喜んでお答えします！",
    "いつもありがとうございます！何でもお気軽にお聞かせください！",
];
const GENERAL_APOLOGETIC: &[&str] = &["ご連絡いただき、恐縮です。可能な限り対応いたします。"];

/// Pool lookup for one generated reply. Every pool is non-empty.
pub(super) fn pool(
    category: MessageCategory,
    tone: Tone,
    sentiment: Sentiment,
) -> &'static [&'static str] {
    match category {
        MessageCategory::Order => match tone {
            Tone::Friendly => ORDER_FRIENDLY,
            Tone::Professional => ORDER_PROFESSIONAL,
            Tone::Enthusiastic => ORDER_ENTHUSIASTIC,
            Tone::Apologetic => ORDER_APOLOGETIC,
        },
        MessageCategory::Feedback => {
            if sentiment == Sentiment::Positive {
                match tone {
                    Tone::Friendly => FEEDBACK_POSITIVE_FRIENDLY,
                    Tone::Professional => FEEDBACK_POSITIVE_PROFESSIONAL,
                    Tone::Enthusiastic => FEEDBACK_POSITIVE_ENTHUSIASTIC,
                    Tone::Apologetic => FEEDBACK_POSITIVE_APOLOGETIC,
                }
            } else {
                FEEDBACK_OTHER
            }
        }
        MessageCategory::Complaint => COMPLAINT,
        _ => match tone {
            Tone::Friendly => GENERAL_FRIENDLY,
            Tone::Professional => GENERAL_PROFESSIONAL,
            Tone::Enthusiastic => GENERAL_ENTHUSIASTIC,
            Tone::Apologetic => GENERAL_APOLOGETIC,
        },
    }
}

struct ProductVariety {
    cue: &'static str,
    name: &'static str,
}

// Later entries override earlier ones when several cues appear.
const PRODUCT_VARIETIES: &[ProductVariety] = &[
    ProductVariety { cue: "青島", name: "青島みかん" },
    ProductVariety { cue: "温州", name: "温州みかん" },
];

const DEFAULT_PRODUCT: &str = "みかん";

/// Product name chosen by variety cues in the original message.
pub(super) fn product_for(content: &str) -> &'static str {
    let normalized = content.to_lowercase();

    let mut product = DEFAULT_PRODUCT;
    for variety in PRODUCT_VARIETIES {
        if normalized.contains(variety.cue) {
            product = variety.name;
        }
    }
    product
}

pub(super) fn substitute_product(template: &str, product: &str) -> String {
    template.replace(PRODUCT_PLACEHOLDER, product)
}
