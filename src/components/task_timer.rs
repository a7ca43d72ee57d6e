//! Task Timer Component
//!
//! Countdown for the tasks that carry one. Reaching zero only shows a
//! banner; the task itself stays open until the user marks it done.
//!
//! The countdown itself is a plain struct driven by an async loop. Every
//! start and pause bumps a generation token and each loop carries the
//! generation it was started with, so a loop that was parked in its sleep
//! across a pause/restart wakes up stale and exits instead of doubling
//! the tick rate.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::tasks::{stretch_stage, StretchStage};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Countdown {
    duration: u32,
    time_left: u32,
    running: bool,
    generation: u32,
}

impl Countdown {
    fn new(duration: u32) -> Self {
        Self { duration, time_left: duration, running: false, generation: 0 }
    }

    /// Begin counting. Returns the generation the new loop must carry,
    /// or `None` when already running or expired.
    fn start(&mut self) -> Option<u32> {
        if self.running || self.time_left == 0 {
            return None;
        }
        self.running = true;
        self.generation += 1;
        Some(self.generation)
    }

    fn pause(&mut self) {
        self.running = false;
        self.generation += 1;
    }

    fn reset(&mut self) {
        self.running = false;
        self.generation += 1;
        self.time_left = self.duration;
    }

    /// One second elapsed in the loop carrying `generation`. Decrements
    /// only while that loop is still the live one; the return value says
    /// whether the loop should keep going.
    fn tick(&mut self, generation: u32) -> bool {
        if generation != self.generation || !self.running || self.time_left == 0 {
            return false;
        }
        self.time_left -= 1;
        if self.time_left == 0 {
            self.running = false;
            return false;
        }
        true
    }
}

fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[component]
pub fn TaskTimer(title: String, duration: u32) -> impl IntoView {
    let countdown = RwSignal::new(Countdown::new(duration));

    let show_stretch = title.to_lowercase().contains("stretch");

    let start = move |_| {
        let Some(generation) = countdown.try_update(|c| c.start()).flatten() else {
            return;
        };
        spawn_local(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                let keep_going = countdown.try_update(|c| c.tick(generation)).unwrap_or(false);
                if !keep_going {
                    break;
                }
            }
        });
    };

    let pause = move |_| countdown.update(|c| c.pause());
    let reset = move |_| countdown.update(|c| c.reset());

    view! {
        <div class="task-timer">
            <span class="timer-display">
                {move || format_time(countdown.read().time_left)}
            </span>

            {show_stretch.then(|| view! {
                <span class="stretch-stage">
                    {move || {
                        let current = countdown.read();
                        if !current.running {
                            return "";
                        }
                        match stretch_stage(current.time_left) {
                            StretchStage::Left => "Stretch left",
                            StretchStage::Right => "Stretch right",
                            StretchStage::Forward => "Reach forward",
                        }
                    }}
                </span>
            })}

            {move || (countdown.read().time_left == 0).then(|| view! {
                <p class="timer-done-banner">"Time's up! Great work."</p>
            })}

            <div class="timer-controls">
                {move || {
                    if countdown.read().running {
                        view! { <button type="button" on:click=pause>"Pause"</button> }.into_any()
                    } else {
                        view! { <button type="button" on:click=start>"Start"</button> }.into_any()
                    }
                }}
                <button type="button" on:click=reset>"Reset"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{format_time, Countdown};

    #[test]
    fn time_is_rendered_minutes_seconds() {
        assert_eq!(format_time(120), "2:00");
        assert_eq!(format_time(90), "1:30");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn ticks_count_down_and_stop_at_zero() {
        let mut countdown = Countdown::new(3);
        let generation = countdown.start().unwrap();
        assert!(countdown.tick(generation));
        assert!(countdown.tick(generation));
        assert!(!countdown.tick(generation));
        assert_eq!(countdown.time_left, 0);
        assert!(!countdown.running);
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut countdown = Countdown::new(10);
        countdown.start().unwrap();
        assert_eq!(countdown.start(), None);
    }

    #[test]
    fn stale_loop_dies_across_pause_and_restart() {
        // A loop parked in its sleep across pause + restart must wake up
        // stale and exit without decrementing; only the fresh loop ticks.
        let mut countdown = Countdown::new(10);
        let first = countdown.start().unwrap();
        countdown.pause();
        let second = countdown.start().unwrap();

        assert!(!countdown.tick(first));
        assert_eq!(countdown.time_left, 10);

        assert!(countdown.tick(second));
        assert_eq!(countdown.time_left, 9);
    }

    #[test]
    fn pause_invalidates_the_live_loop() {
        let mut countdown = Countdown::new(10);
        let generation = countdown.start().unwrap();
        assert!(countdown.tick(generation));
        countdown.pause();
        assert!(!countdown.tick(generation));
        assert_eq!(countdown.time_left, 9);
    }

    #[test]
    fn reset_restores_the_full_duration() {
        let mut countdown = Countdown::new(10);
        let generation = countdown.start().unwrap();
        countdown.tick(generation);
        countdown.reset();
        assert_eq!(countdown.time_left, 10);
        assert!(!countdown.running);
        assert!(!countdown.tick(generation));
    }
}
