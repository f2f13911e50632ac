use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncate to a terminal display width, ending in "..." when cut.
/// Wide characters (CJK, emoji) count as two columns.
pub fn truncate_text_unicode(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let Some(budget) = max_width.checked_sub(ELLIPSIS.width()).filter(|b| *b > 0) else {
        return ELLIPSIS.chars().take(max_width).collect();
    };

    let mut used = 0;
    let mut truncated: String = text
        .chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Human readable byte count
pub fn format_bytes(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KIB {
        format!("{} B", bytes)
    } else if bytes_f < KIB * KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{:.1} MiB", bytes_f / (KIB * KIB))
    }
}
