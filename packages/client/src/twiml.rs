//! Minimal TwiML reader: pulls the text out of `<Message>` elements.

/// Extract and unescape the text of every `<Message>` element
pub fn extract_messages(xml: &str) -> Vec<String> {
    let mut messages = Vec::new();
    let mut rest = xml;
    while let Some(start) = rest.find("<Message") {
        let after_tag = &rest[start..];
        let Some(open_end) = after_tag.find('>') else {
            break;
        };
        // <Message/> has no text
        if after_tag[..open_end].ends_with('/') {
            rest = &after_tag[open_end + 1..];
            continue;
        }
        let content = &after_tag[open_end + 1..];
        let Some(close) = content.find("</Message>") else {
            break;
        };
        messages.push(unescape_xml(&content[..close]));
        rest = &content[close + "</Message>".len()..];
    }
    messages
}

/// Reverse the five predefined XML entities
pub fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
