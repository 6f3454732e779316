//! Progress display of a triggered workflow run
//!
//! The display is time-indexed: it is not connected to the real workflow
//! run. Step 1 is shown on trigger; each offset of the schedule (measured
//! from the trigger instant) advances one step, the last one completes the
//! run and reports the synthesized repository record.

use crate::actions::{Action, CreateMfeAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{CreatedRepositoryRecord, Submission, FIRST_STEP, LAST_STEP};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Offsets (seconds after the trigger) used when none are configured
pub const DEFAULT_OFFSETS_SECS: [u64; 5] = [3, 6, 12, 18, 20];

const STEP_COUNT: usize = (LAST_STEP - FIRST_STEP) as usize;

/// When each step after the first is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSchedule {
    offsets: [Duration; STEP_COUNT],
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self {
            offsets: DEFAULT_OFFSETS_SECS.map(Duration::from_secs),
        }
    }
}

impl ProgressSchedule {
    /// Build a schedule from five strictly increasing, non-zero offsets
    pub fn from_secs(secs: &[u64]) -> Option<Self> {
        let secs: [u64; STEP_COUNT] = secs.try_into().ok()?;
        let increasing = secs.windows(2).all(|pair| pair[0] < pair[1]);
        if secs[0] == 0 || !increasing {
            return None;
        }
        Some(Self {
            offsets: secs.map(Duration::from_secs),
        })
    }

    /// Schedule from configured offsets, falling back to the default
    pub fn from_config(secs: &[u64]) -> Self {
        Self::from_secs(secs).unwrap_or_else(|| {
            log::warn!(
                "Invalid progress_offsets_secs {:?}, expected {} increasing values; using {:?}",
                secs,
                STEP_COUNT,
                DEFAULT_OFFSETS_SECS
            );
            Self::default()
        })
    }

    pub fn offsets(&self) -> &[Duration] {
        &self.offsets
    }

    /// Time from trigger to completion
    pub fn total(&self) -> Duration {
        self.offsets[STEP_COUNT - 1]
    }

    /// Step displayed `elapsed` after the trigger
    pub fn step_at(&self, elapsed: Duration) -> u8 {
        let reached = self.offsets.iter().filter(|o| **o <= elapsed).count();
        FIRST_STEP + reached as u8
    }
}

/// Everything a running progress display needs to finish on its own
#[derive(Debug, Clone)]
pub struct ProgressRun {
    pub run_id: u64,
    pub submission: Submission,
    pub owner: String,
    pub visibility: String,
}

/// Spawn the progress display of one run
///
/// Dispatches `ProgressAdvanced` for steps 2..=5 and `Completed` at the last
/// offset. Aborting the returned handle stops the run; nothing is dispatched
/// after that.
pub fn spawn_progress(
    runtime: &Handle,
    schedule: ProgressSchedule,
    run: ProgressRun,
    dispatcher: Dispatcher,
) -> AbortHandle {
    let task = runtime.spawn(async move {
        let started = tokio::time::Instant::now();

        for offset in schedule.offsets() {
            tokio::time::sleep_until(started + *offset).await;

            let step = schedule.step_at(*offset);
            if step < LAST_STEP {
                log::debug!("Run {}: progress step {}", run.run_id, step);
                dispatcher.dispatch(Action::CreateMfe(CreateMfeAction::ProgressAdvanced {
                    run_id: run.run_id,
                    step,
                }));
            } else {
                let record = CreatedRepositoryRecord::synthesize(
                    &run.owner,
                    &run.submission,
                    &run.visibility,
                    chrono::Utc::now(),
                );
                log::info!("Run {}: completed, repository {}", run.run_id, record.full_name);
                dispatcher.dispatch(Action::CreateMfe(CreateMfeAction::Completed {
                    run_id: run.run_id,
                    record,
                }));
            }
        }
    });

    task.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn run() -> ProgressRun {
        ProgressRun {
            run_id: 7,
            submission: Submission {
                repository_name: "my-app".to_string(),
                product_name: "My App".to_string(),
                template_id: "portal".to_string(),
            },
            owner: "mfepocautomation".to_string(),
            visibility: "private".to_string(),
        }
    }

    #[test]
    fn test_default_schedule() {
        let schedule = ProgressSchedule::default();
        assert_eq!(schedule.total(), Duration::from_secs(20));
        assert_eq!(schedule.step_at(Duration::ZERO), 1);
        assert_eq!(schedule.step_at(Duration::from_millis(2_999)), 1);
        assert_eq!(schedule.step_at(Duration::from_secs(3)), 2);
        assert_eq!(schedule.step_at(Duration::from_secs(12)), 4);
        assert_eq!(schedule.step_at(Duration::from_millis(19_999)), 5);
        assert_eq!(schedule.step_at(Duration::from_secs(20)), 6);
        assert_eq!(schedule.step_at(Duration::from_secs(600)), 6);
    }

    #[test]
    fn test_from_secs_rejects_invalid_lists() {
        assert!(ProgressSchedule::from_secs(&[1, 2, 3, 4, 5]).is_some());
        assert!(ProgressSchedule::from_secs(&[1, 2, 3, 4]).is_none());
        assert!(ProgressSchedule::from_secs(&[1, 2, 3, 4, 5, 6]).is_none());
        assert!(ProgressSchedule::from_secs(&[3, 3, 12, 18, 20]).is_none());
        assert!(ProgressSchedule::from_secs(&[0, 6, 12, 18, 20]).is_none());
        assert!(ProgressSchedule::from_secs(&[20, 18, 12, 6, 3]).is_none());
    }

    #[test]
    fn test_from_config_falls_back_to_default() {
        assert_eq!(ProgressSchedule::from_config(&[5, 4]), ProgressSchedule::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_progress_follows_schedule() {
        let (tx, rx) = mpsc::channel();
        let _handle = spawn_progress(
            &Handle::current(),
            ProgressSchedule::default(),
            run(),
            Dispatcher::new(tx),
        );

        tokio::time::sleep(Duration::from_millis(2_999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(17_000)).await;
        let steps: Vec<u8> = rx
            .try_iter()
            .filter_map(|action| match action {
                Action::CreateMfe(CreateMfeAction::ProgressAdvanced { run_id: 7, step }) => {
                    Some(step)
                }
                _ => None,
            })
            .collect();
        assert_eq!(steps, vec![2, 3, 4, 5]);

        tokio::time::sleep(Duration::from_millis(2)).await;
        match rx.try_recv() {
            Ok(Action::CreateMfe(CreateMfeAction::Completed { run_id, record })) => {
                assert_eq!(run_id, 7);
                assert_eq!(record.html_url, "https://github.com/mfepocautomation/my-app");
            }
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_progress_dispatches_nothing() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_progress(
            &Handle::current(),
            ProgressSchedule::default(),
            run(),
            Dispatcher::new(tx),
        );

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(rx.try_iter().count(), 1);

        handle.abort();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(rx.try_iter().count(), 0);
    }
}
