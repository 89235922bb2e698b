//! Async loop driving tap dances from a key event channel.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Timer;

use crate::config::TapDanceConfig;
use crate::error::TapDanceError;
use crate::event::KeyboardEvent;
use crate::registry::TapDances;
use crate::report::ReportExecutor;
use crate::tracker::TapDanceTracker;

/// Receives key events, tracks tap-dance windows and writes keyboard reports.
///
/// The only await points are the event channel and the next deadline of the
/// tracker, so reports are written as soon as an outcome is known.
pub struct TapDanceRunner<'a, M: RawMutex, const EVENT_N: usize, const REPORT_N: usize, const N: usize> {
    dances: TapDances<N>,
    tracker: TapDanceTracker<N>,
    events: &'a Channel<M, KeyboardEvent, EVENT_N>,
    executor: ReportExecutor<'a, M, REPORT_N>,
}

impl<'a, M: RawMutex, const EVENT_N: usize, const REPORT_N: usize, const N: usize>
    TapDanceRunner<'a, M, EVENT_N, REPORT_N, N>
{
    pub fn new(
        dances: TapDances<N>,
        config: &TapDanceConfig,
        events: &'a Channel<M, KeyboardEvent, EVENT_N>,
        executor: ReportExecutor<'a, M, REPORT_N>,
    ) -> Self {
        Self {
            dances,
            tracker: TapDanceTracker::new(config),
            events,
            executor,
        }
    }

    pub fn dances(&self) -> &TapDances<N> {
        &self.dances
    }

    pub fn tracker(&self) -> &TapDanceTracker<N> {
        &self.tracker
    }

    pub fn executor(&self) -> &ReportExecutor<'a, M, REPORT_N> {
        &self.executor
    }

    pub async fn run(&mut self) -> ! {
        info!("Tap dance runner started with {} instances", self.dances.len());
        loop {
            let event = match self.tracker.next_deadline() {
                Some(deadline) => match select(self.events.receive(), Timer::at(deadline)).await {
                    Either::First(event) => Some(event),
                    Either::Second(()) => None,
                },
                None => Some(self.events.receive().await),
            };
            self.process(event);
        }
    }

    /// Handle one event, or the expiry of a deadline when `event` is `None`
    pub fn process(&mut self, event: Option<KeyboardEvent>) {
        if let Err(e) = self.process_inner(event) {
            error!("Tap dance error: {:?}", e);
        }
    }

    fn process_inner(&mut self, event: Option<KeyboardEvent>) -> Result<(), TapDanceError> {
        match event {
            Some(event) => {
                // Close the windows which expired before this event first
                self.tracker.tick(event.time, &mut self.dances, &mut self.executor)?;
                self.tracker
                    .process_event(event, &mut self.dances, &mut self.executor)
            }
            None => self.tracker.poll(&mut self.dances, &mut self.executor),
        }
    }
}
