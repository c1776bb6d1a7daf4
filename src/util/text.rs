use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended when a string is cut off.
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncates a string to fit within `max_width` terminal columns.
///
/// Width is computed per Unicode rules (CJK and emoji count as two columns,
/// combining marks as zero), so the result never overflows the column budget
/// even for mixed-width titles. When truncation happens, "..." is appended;
/// for budgets of three columns or fewer there is no room for the ellipsis,
/// so the string is simply cut.
///
/// Returns `Cow::Borrowed` when the input already fits.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    if UnicodeWidthStr::width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    // Column budget for the kept prefix.
    let budget = if max_width <= ELLIPSIS_WIDTH {
        max_width
    } else {
        max_width - ELLIPSIS_WIDTH
    };

    let mut kept = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if kept + w > budget {
            break;
        }
        kept += w;
        end = idx + c.len_utf8();
    }

    if max_width <= ELLIPSIS_WIDTH {
        Cow::Owned(s[..end].to_string())
    } else {
        Cow::Owned(format!("{}{}", &s[..end], ELLIPSIS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_is_borrowed() {
        let out = truncate_to_width("Short", 10);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "Short");
    }

    #[test]
    fn long_string_gets_ellipsis() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
    }

    #[test]
    fn cjk_counts_two_columns() {
        assert_eq!(truncate_to_width("你好世界", 7), "你好...");
    }

    #[test]
    fn narrow_widths_cut_without_ellipsis() {
        assert_eq!(truncate_to_width("Test!", 0), "");
        assert_eq!(truncate_to_width("Test!", 1), "T");
        assert_eq!(truncate_to_width("Test!", 3), "Tes");
    }

    #[test]
    fn exact_fit_is_untouched() {
        assert_eq!(truncate_to_width("Test", 4), "Test");
    }

    #[test]
    fn result_never_exceeds_budget() {
        for width in 0..12 {
            let out = truncate_to_width("mixed 世界 text", width);
            assert!(unicode_width::UnicodeWidthStr::width(out.as_ref()) <= width);
        }
    }
}
