//! Periodic refresh of the countdown display.
//!
//! A session picks its milestone once, at activation, then recomputes the
//! remaining time on every tick until it is deactivated or dropped.

use anyhow::{Context, Result};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::calculator::select_next_milestone;
use super::clock::Clock;
use super::display::CountdownDisplay;
use super::surface::DisplaySurface;
use crate::models::milestone::Milestone;
use crate::models::schedule::MilestoneSchedule;
use crate::models::settings::{CountdownSettings, MIN_TICK_INTERVAL_MS};

pub struct CountdownDriver {
    settings: CountdownSettings,
}

impl Default for CountdownDriver {
    fn default() -> Self {
        Self::new(CountdownSettings::default())
    }
}

impl CountdownDriver {
    pub fn new(settings: CountdownSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CountdownSettings {
        &self.settings
    }

    /// Starts a countdown session against `surface`.
    ///
    /// The first frame is rendered before this returns. If no milestone lies
    /// ahead, that zeroed frame is the only one and no timer is started.
    /// Must be called from within a Tokio runtime.
    pub fn activate<C, S>(
        &self,
        schedule: MilestoneSchedule,
        clock: C,
        mut surface: S,
    ) -> CountdownSession
    where
        C: Clock,
        S: DisplaySurface,
    {
        let activated_at = clock.now();
        let selected = select_next_milestone(schedule.milestones(), activated_at).cloned();
        let thresholds = self.settings.warning_thresholds.clone();

        let first = CountdownDisplay::build(&schedule, selected.as_ref(), activated_at, &thresholds);
        surface.render(&first);
        let (frames_tx, frames_rx) = watch::channel(first);

        let Some(target) = selected.clone() else {
            log::info!("No upcoming milestone; countdown stays at zero");
            return CountdownSession {
                selected: None,
                frames: frames_rx,
                stop: None,
                task: None,
            };
        };

        log::info!("Counting down to '{}' at {}", target.label, target.at);

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let period = self
            .settings
            .tick_interval()
            .max(std::time::Duration::from_millis(MIN_TICK_INTERVAL_MS));

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The immediate first tick is covered by the activation frame.
            ticker.tick().await;

            let mut reached = false;
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        let frame = CountdownDisplay::build(&schedule, Some(&target), clock.now(), &thresholds);
                        if frame.state.is_zero() && !reached {
                            reached = true;
                            log::info!("Milestone '{}' reached", target.label);
                        }
                        surface.render(&frame);
                        frames_tx.send_replace(frame);
                    }
                }
            }

            log::debug!("Countdown tick for '{}' stopped", target.label);
        });

        CountdownSession {
            selected,
            frames: frames_rx,
            stop: Some(stop_tx),
            task: Some(task),
        }
    }
}

/// Handle to a running countdown. The tick stops when this is deactivated
/// or dropped, whichever happens first.
pub struct CountdownSession {
    selected: Option<Milestone>,
    frames: watch::Receiver<CountdownDisplay>,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl CountdownSession {
    /// Milestone fixed at activation.
    pub fn selected(&self) -> Option<&Milestone> {
        self.selected.as_ref()
    }

    /// Most recently published frame.
    pub fn latest(&self) -> CountdownDisplay {
        self.frames.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CountdownDisplay> {
        self.frames.clone()
    }

    pub fn is_ticking(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops the tick and waits for the task to wind down.
    pub async fn deactivate(mut self) -> Result<()> {
        if let Some(stop) = self.stop.take() {
            // The task may already be gone; nothing to signal then.
            let _ = stop.send(());
        }

        if let Some(task) = self.task.take() {
            task.await.context("countdown tick task failed")?;
        }

        Ok(())
    }
}

impl Drop for CountdownSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
