//! Operator-facing outcome messages.

use pdfetch_core::{DownloadError, Outcome};
use std::io::{self, Write};

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn write_outcome<W: Write>(w: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Success {
            bytes_written,
            path,
        } => {
            writeln!(
                w,
                "✅ Success: Downloaded {} bytes",
                format_thousands(*bytes_written)
            )?;
            writeln!(w, "Saved to: {}", path.display())
        }
        Outcome::Failure(DownloadError::NotPdf { preview, .. }) => {
            writeln!(w, "❌ Error: Response is not a PDF")?;
            writeln!(w, "Response: {}", preview)
        }
        Outcome::Failure(DownloadError::Timeout) => writeln!(w, "❌ Error: Request timeout"),
        Outcome::Failure(e) => writeln!(w, "❌ Error: {}", e),
    }
}
