//! "Ask family" message composition

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::settings::Settings;

const HEADER: &str = "我收到一条可疑信息，先不点链接/不转账。请帮我看一下：";
const EMPTY_BODY: &str = "(无内容)";
const TAIL: &str = "\n\n（来自 SafeGuard 原型）";

/// Characters left as-is by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMessage {
    /// Recipient phone, empty when no contact is configured
    pub to: String,
    pub text: String,
}

impl FamilyMessage {
    pub fn sms_uri(&self) -> String {
        sms_uri(&self.to, &self.text)
    }
}

/// Compose a message forwarding `payload` to the first emergency contact.
///
/// The payload is cut to `max_chars` characters.
pub fn build_family_message(payload: &str, settings: &Settings, max_chars: usize) -> FamilyMessage {
    let body: String = payload.chars().take(max_chars).collect();
    let body = if body.is_empty() {
        EMPTY_BODY
    } else {
        body.as_str()
    };

    FamilyMessage {
        to: settings
            .primary_contact()
            .map(|c| c.phone.clone())
            .unwrap_or_default(),
        text: format!("{}\n\n{}{}", HEADER, body, TAIL),
    }
}

/// `sms:` URI that opens the messaging app with `text` prefilled
pub fn sms_uri(to: &str, text: &str) -> String {
    format!(
        "sms:{}?&body={}",
        utf8_percent_encode(to, URI_COMPONENT),
        utf8_percent_encode(text, URI_COMPONENT)
    )
}
