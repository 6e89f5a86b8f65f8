//! Magic-number content sniffing.

/// Every PDF file starts with these four bytes.
pub const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Number of characters of a rejected body shown to the operator.
pub const PREVIEW_CHARS: usize = 200;

pub fn is_pdf(body: &[u8]) -> bool {
    body.starts_with(PDF_MAGIC)
}

/// First `max_chars` characters of `body` decoded as text (invalid UTF-8 is replaced).
pub fn text_preview(body: &[u8], max_chars: usize) -> String {
    String::from_utf8_lossy(body).chars().take(max_chars).collect()
}
