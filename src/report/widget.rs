//! Widgets grouped by type, with their trigger bindings.

use indexmap::IndexMap;

use crate::lower::index::Index;
use crate::parse::{Trigger, Widget};
use crate::writer::LineWriter;

const NO_ID: &str = "(no id)";

/// Group widgets by type, types in first-seen order.
pub fn group_by_type<'a>(widgets: &[&'a Widget]) -> IndexMap<&'a str, Vec<&'a Widget>> {
    let mut grouped: IndexMap<&str, Vec<&Widget>> = IndexMap::new();
    for &widget in widgets {
        grouped.entry(widget.widget_type.as_str()).or_default().push(widget);
    }
    grouped
}

pub fn write_widgets(w: &mut LineWriter, widgets: &[&Widget], triggers: &Index<Trigger>) {
    w.banner("Widgets with triggers on this step");
    if widgets.is_empty() {
        w.indented(|w| w.line("(no widget-attached triggers on this step)"));
        return;
    }

    for (widget_type, group) in group_by_type(widgets) {
        w.blank();
        w.line(&format!("Widget type: {} (count: {})", widget_type, group.len()));
        w.indented(|w| {
            for widget in group {
                w.line(&widget_line(widget, triggers));
            }
        });
    }
}

/// `- <id>: <name> [BUTTON text: '<text>'] -> triggers: <bindings>`
pub fn widget_line(widget: &Widget, triggers: &Index<Trigger>) -> String {
    let id = widget.id.as_deref().unwrap_or(NO_ID);
    let button = match (widget.is_button(), &widget.button_text) {
        (true, Some(text)) => format!(" [BUTTON text: '{}']", text),
        (true, None) => " [BUTTON]".to_string(),
        (false, _) => String::new(),
    };
    format!(
        "- {}: {}{} -> triggers: {}",
        id,
        widget.display_name(),
        button,
        bindings(widget, triggers)
    )
}

fn bindings(widget: &Widget, triggers: &Index<Trigger>) -> String {
    widget
        .trigger_ids
        .iter()
        .map(|id| match triggers.get(id.as_str()) {
            Some(trigger) => format!("{} ({})", id, trigger.label.as_deref().unwrap_or_default()),
            None => id.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
