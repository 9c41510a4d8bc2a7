//! Bucket triggers into display categories by event type.

use crate::parse::Trigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerCategory {
    StepEnter,
    StepExit,
    Timer,
    Device,
    Other,
}

impl TriggerCategory {
    /// Order in which categories are shown in the report.
    pub const DISPLAY_ORDER: [TriggerCategory; 5] = [
        TriggerCategory::StepEnter,
        TriggerCategory::Timer,
        TriggerCategory::Device,
        TriggerCategory::StepExit,
        TriggerCategory::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TriggerCategory::StepEnter => "On step enter",
            TriggerCategory::StepExit => "On step exit",
            TriggerCategory::Timer => "Timers",
            TriggerCategory::Device => "Machines & devices",
            TriggerCategory::Other => "Other",
        }
    }
}

// Checked top to bottom; keyword sets overlap, so the first match wins.
const RULES: &[(TriggerCategory, &[&str])] = &[
    (TriggerCategory::StepEnter, &["step_open", "step_enter"]),
    (TriggerCategory::StepExit, &["step_closed", "step_close", "step_exit"]),
    (TriggerCategory::Timer, &["interval", "timer"]),
    (TriggerCategory::Device, &["machines_output", "machine", "device"]),
];

pub fn classify_event_type(event_type: &str) -> TriggerCategory {
    let lower = event_type.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(TriggerCategory::Other)
}

pub fn classify(trigger: &Trigger) -> TriggerCategory {
    classify_event_type(&trigger.event_type)
}

/// Triggers of one step, grouped by category in encounter order.
#[derive(Debug, Default)]
pub struct TriggerCategories<'a> {
    pub step_enter: Vec<&'a Trigger>,
    pub step_exit: Vec<&'a Trigger>,
    pub timer: Vec<&'a Trigger>,
    pub device: Vec<&'a Trigger>,
    pub other: Vec<&'a Trigger>,
}

impl<'a> TriggerCategories<'a> {
    pub fn get(&self, category: TriggerCategory) -> &[&'a Trigger] {
        match category {
            TriggerCategory::StepEnter => &self.step_enter,
            TriggerCategory::StepExit => &self.step_exit,
            TriggerCategory::Timer => &self.timer,
            TriggerCategory::Device => &self.device,
            TriggerCategory::Other => &self.other,
        }
    }

    fn bucket(&mut self, category: TriggerCategory) -> &mut Vec<&'a Trigger> {
        match category {
            TriggerCategory::StepEnter => &mut self.step_enter,
            TriggerCategory::StepExit => &mut self.step_exit,
            TriggerCategory::Timer => &mut self.timer,
            TriggerCategory::Device => &mut self.device,
            TriggerCategory::Other => &mut self.other,
        }
    }
}

/// Group triggers by category. Unresolved (`None`) references are skipped.
pub fn categorize<'a>(triggers: &[Option<&'a Trigger>]) -> TriggerCategories<'a> {
    let mut cats = TriggerCategories::default();
    for &trigger in triggers.iter().flatten() {
        cats.bucket(classify(trigger)).push(trigger);
    }
    cats
}
