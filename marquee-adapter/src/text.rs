use alloc::string::String;
use alloc::vec::Vec;

use crate::ScrollBox;

/// Renders what a horizontal marquee over `text` currently shows, one column per `char`.
///
/// Columns that fall into the padding render as spaces, so the result is always exactly as
/// wide as the container.
pub fn visible_line(text: &str, scroll_box: &ScrollBox) -> String {
    let chars: Vec<char> = text.chars().collect();
    let pad = scroll_box.padding().width.max(0);
    let width = scroll_box.container_size().width.max(0);
    let start = scroll_box.scroll_left();

    (start..start + width)
        .map(|col| {
            usize::try_from(col - pad)
                .ok()
                .and_then(|i| chars.get(i).copied())
                .unwrap_or(' ')
        })
        .collect()
}

/// Renders the rows a vertical marquee over `lines` currently shows.
///
/// Rows that fall into the padding render as empty strings.
pub fn visible_rows<'a>(lines: &[&'a str], scroll_box: &ScrollBox) -> Vec<&'a str> {
    let pad = scroll_box.padding().height.max(0);
    let height = scroll_box.container_size().height.max(0);
    let start = scroll_box.scroll_top();

    (start..start + height)
        .map(|row| {
            usize::try_from(row - pad)
                .ok()
                .and_then(|i| lines.get(i).copied())
                .unwrap_or("")
        })
        .collect()
}
