//! Label sanitizer for the diagram notation.

/// Longest label emitted, ellipsis included.
pub const MAX_LABEL_LEN: usize = 120;
const ELLIPSIS: &str = "...";

/// Characters that break node or edge label syntax.
const STRIPPED_CHARS: &[char] = &['"', '\\', '{', '}', '[', ']'];

/// Slot-reference prefix; removed so `dms:Shift` reads as `:Shift`.
const STRIPPED_MARKER: &str = "dms";

/// Make `text` safe to embed in a quoted label.
///
/// Strips syntax-breaking characters and the slot marker, collapses every
/// whitespace run to one space and clips to [`MAX_LABEL_LEN`] characters.
/// Sanitizing twice yields the same string as sanitizing once.
pub fn sanitize_label(text: &str) -> String {
    let mut out: String = text.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    // Removing one occurrence can splice a new one together ("ddmsms").
    while out.contains(STRIPPED_MARKER) {
        out = out.replace(STRIPPED_MARKER, "");
    }

    let collapsed = out.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_LABEL_LEN {
        return collapsed;
    }
    let head: String = collapsed
        .chars()
        .take(MAX_LABEL_LEN - ELLIPSIS.len())
        .collect();
    format!("{}{}", head, ELLIPSIS)
}
