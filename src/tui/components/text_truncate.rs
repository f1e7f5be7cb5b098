//! Display-width aware text fitting for table cells and frame rows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

enum WidthTruncationDecision {
    Empty,
    Unchanged,
    DotFallback,
    Ellipsis,
}

fn width_truncation_decision(text: &str, max_width: usize) -> WidthTruncationDecision {
    if max_width == 0 {
        WidthTruncationDecision::Empty
    } else if text.width() <= max_width {
        WidthTruncationDecision::Unchanged
    } else if max_width <= 3 {
        WidthTruncationDecision::DotFallback
    } else {
        WidthTruncationDecision::Ellipsis
    }
}

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Width is measured in terminal columns, not Unicode scalar count.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    match width_truncation_decision(text, max_width) {
        WidthTruncationDecision::Empty => String::new(),
        WidthTruncationDecision::Unchanged => text.to_owned(),
        WidthTruncationDecision::DotFallback => ".".repeat(max_width),
        WidthTruncationDecision::Ellipsis => {
            let target_width = max_width.saturating_sub(3);
            let mut truncated = String::new();
            let mut current_width = 0;
            for ch in text.chars() {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + char_width > target_width {
                    break;
                }
                truncated.push(ch);
                current_width += char_width;
            }
            format!("{truncated}...")
        }
    }
}

/// Fits `text` into exactly `width` columns, truncating or padding with
/// spaces as needed.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = truncate_to_display_width_with_ellipsis(text, width);
    let padding = width.saturating_sub(fitted.width());
    fitted.extend(std::iter::repeat_n(' ', padding));
    fitted
}
