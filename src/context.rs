//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks and user data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks and user data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Task currently expanded in the overlay - read
    pub selected_task: ReadSignal<Option<String>>,
    /// Task currently expanded in the overlay - write
    set_selected_task: WriteSignal<Option<String>>,
    /// Task in its celebration window, if any - read
    pub celebrating: ReadSignal<Option<String>>,
    /// Task in its celebration window - write
    set_celebrating: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        selected_task: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        celebrating: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            selected_task: selected_task.0,
            set_selected_task: selected_task.1,
            celebrating: celebrating.0,
            set_celebrating: celebrating.1,
        }
    }

    /// Trigger a refetch of tasks and user data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Open or close the expanded-task overlay
    pub fn select_task(&self, task_id: Option<String>) {
        self.set_selected_task.set(task_id);
    }

    /// Start or end a task's celebration window
    pub fn set_celebrating(&self, task_id: Option<String>) {
        self.set_celebrating.set(task_id);
    }
}
