//! Plain-text body extraction from raw RFC822 messages.

use mail_parser::MessageParser;

/// Extracts the plain-text body of a raw message.
///
/// For multipart messages every `text/plain` part is concatenated in
/// order. Returns `None` when the message cannot be parsed or carries no
/// decodable text body.
#[must_use]
pub fn plain_text_body(raw: &[u8]) -> Option<String> {
    let message = MessageParser::default().parse(raw)?;

    let mut body = String::new();
    let mut index = 0;
    while let Some(text) = message.body_text(index) {
        body.push_str(&text);
        index += 1;
    }

    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}
