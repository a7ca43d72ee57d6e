//! Task Helpers
//!
//! Keyword-driven task behavior: countdown durations, the companion's pose
//! for the selected task, the stretch-stage cycle, and the suggested goals.

/// Countdown duration in seconds for tasks that carry a timer.
/// Brushing gets two minutes, stretching ninety seconds.
pub fn timer_duration(title: &str) -> Option<u32> {
    let title = title.to_lowercase();
    if title.contains("brush") || title.contains("teeth") {
        return Some(120);
    }
    if title.contains("stretch") {
        return Some(90);
    }
    None
}

/// Companion pose while a matching task is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPose {
    Run,
    Exercise,
    Brush,
    Laundry,
    Cook,
}

pub fn task_pose(title: &str) -> Option<TaskPose> {
    let title = title.to_lowercase();
    if title.contains("run") {
        return Some(TaskPose::Run);
    }
    if title.contains("stretch") {
        return Some(TaskPose::Exercise);
    }
    if title.contains("brush") || title.contains("teeth") {
        return Some(TaskPose::Brush);
    }
    if title.contains("laundry") {
        return Some(TaskPose::Laundry);
    }
    if title.contains("dinner") || title.contains("meal") || title.contains("cook") {
        return Some(TaskPose::Cook);
    }
    None
}

/// Stretch direction shown while the stretching timer runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StretchStage {
    Left,
    Right,
    Forward,
}

/// Cycle through stretch positions in ten-second intervals.
pub fn stretch_stage(time_left: u32) -> StretchStage {
    match (time_left / 10) % 3 {
        0 => StretchStage::Left,
        1 => StretchStage::Right,
        _ => StretchStage::Forward,
    }
}

/// Starter goal suggestions shown below the task list: (title, icon).
pub const SUGGESTED_GOALS: &[(&str, &str)] = &[
    ("Meal Prep", "🥗"),
    ("Stretching", "🏃"),
    ("Brush Teeth", "🪥"),
    ("Call family or friends", "📞"),
    ("Make Bed", "🛏️"),
    ("Put away laundry", "🧺"),
    ("Go for a walk", "🚶"),
    ("Drink water", "💧"),
    ("Read a book", "📚"),
    ("Meditate", "🧘"),
    ("Take a shower", "🚿"),
    ("Wash dishes", "🧹"),
    ("Clean up", "🧹"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brushing_gets_two_minutes() {
        assert_eq!(timer_duration("Brush Teeth"), Some(120));
        assert_eq!(timer_duration("brush the dog"), Some(120));
    }

    #[test]
    fn stretching_gets_ninety_seconds() {
        assert_eq!(timer_duration("Morning stretch"), Some(90));
        assert_eq!(timer_duration("Stretching"), Some(90));
    }

    #[test]
    fn other_tasks_have_no_timer() {
        assert_eq!(timer_duration("Make bed"), None);
    }

    #[test]
    fn poses_match_title_keywords() {
        assert_eq!(task_pose("Go for a run"), Some(TaskPose::Run));
        assert_eq!(task_pose("Stretching"), Some(TaskPose::Exercise));
        assert_eq!(task_pose("Brush Teeth"), Some(TaskPose::Brush));
        assert_eq!(task_pose("Put away laundry"), Some(TaskPose::Laundry));
        assert_eq!(task_pose("Cook dinner"), Some(TaskPose::Cook));
        assert_eq!(task_pose("Read a book"), None);
    }

    #[test]
    fn stretch_stages_cycle_every_ten_seconds() {
        assert_eq!(stretch_stage(5), StretchStage::Left);
        assert_eq!(stretch_stage(15), StretchStage::Right);
        assert_eq!(stretch_stage(25), StretchStage::Forward);
        assert_eq!(stretch_stage(35), StretchStage::Left);
    }
}
