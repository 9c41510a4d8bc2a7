//! Synthetic node identifiers used in the graph and the diagram.
//!
//! Source ids are escaped so that distinct ids never share a node id: `_`
//! becomes `__` and any character outside `[A-Za-z0-9-]` becomes `_x<HEX>_`
//! (its code point in upper-case hex). An escaped fragment therefore never
//! contains `_` followed by anything but `_` or `x`, which keeps the
//! `_logic`, `_start`, `_c<N>` and `_a<N>` suffixes unambiguous too.

pub fn step_node_id(step_id: &str) -> String {
    format!("step_{}", safe_fragment(step_id))
}

pub fn trigger_node_id(trigger_id: &str) -> String {
    format!("trig_{}", safe_fragment(trigger_id))
}

pub fn widget_node_id(widget_id: &str) -> String {
    format!("wid_{}", safe_fragment(widget_id))
}

/// Injective escape of `raw` into `[A-Za-z0-9_-]`.
pub fn safe_fragment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '_' => out.push_str("__"),
            c if c.is_ascii_alphanumeric() || c == '-' => out.push(c),
            c => out.push_str(&format!("_x{:X}_", u32::from(c))),
        }
    }
    out
}
