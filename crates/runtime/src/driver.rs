//! The tick loop.
use gauntlet_core::{
    ActionContext, ActionKind, ActionSet, Gateway, Observation, Outcome, ProgressLedger,
    RoomVisitLedger, RunState, Scheduler,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RunError};
use crate::handle::RunHandle;
use crate::status::StatusBus;

/// What one tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// The scheduler's choice.
    pub decision: ActionKind,
    /// Last action executed, after following hand-offs.
    pub executed: ActionKind,
    pub outcome: Outcome,
}

/// Drives one run against an environment.
///
/// Each tick:
/// 1. mirrors the handle's `active` flag into the run state and refreshes vitals
/// 2. captures an [`Observation`] and lets the [`Scheduler`] choose
/// 3. publishes the decision's status line
/// 4. executes the action, following [`Outcome::HandOff`] up to the configured bound
///
/// A [`Outcome::Stopped`] ends the run for good; later ticks fail with
/// [`RunError::AlreadyStopped`].
pub struct RunDriver<G> {
    env: G,
    config: RuntimeConfig,
    ledger: ProgressLedger,
    run: RunState,
    rooms: RoomVisitLedger,
    scheduler: Scheduler,
    actions: ActionSet,
    bus: StatusBus,
    handle: RunHandle,
    ticks: u64,
    stopped: bool,
}

impl<G: Gateway> RunDriver<G> {
    pub fn new(env: G, config: RuntimeConfig) -> Self {
        let variant = config.run.variant;
        Self {
            env,
            ledger: ProgressLedger::with_thresholds(variant, config.run.thresholds),
            run: RunState::new(variant),
            rooms: RoomVisitLedger::new(),
            scheduler: Scheduler::new(),
            actions: ActionSet::new(),
            bus: StatusBus::new(config.status_buffer),
            handle: RunHandle::new(),
            ticks: 0,
            stopped: false,
            config,
        }
    }

    pub fn handle(&self) -> RunHandle {
        self.handle.clone()
    }

    pub fn status_bus(&self) -> StatusBus {
        self.bus.clone()
    }

    pub fn env(&self) -> &G {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut G {
        &mut self.env
    }

    pub fn ledger(&self) -> &ProgressLedger {
        &self.ledger
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn rooms(&self) -> &RoomVisitLedger {
        &self.rooms
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn tick(&mut self) -> Result<TickReport> {
        if self.stopped {
            return Err(RunError::AlreadyStopped);
        }

        self.run.active = self.handle.is_active();
        self.run.refresh_vitals(&self.env);

        let obs = Observation::capture(
            &self.run,
            &self.ledger,
            &self.rooms,
            &self.env,
            &self.config.run.safety,
        );
        let decision = self.scheduler.decide(&obs);
        self.ticks += 1;
        tracing::info!("tick {}: {}", self.ticks, decision);

        let mut cx = ActionContext::new(
            &mut self.ledger,
            &mut self.run,
            &mut self.rooms,
            &mut self.env,
            &mut self.bus,
            &self.config.run,
        );
        cx.report(decision.status());

        let mut executed = decision;
        let mut hand_offs = 0;
        let outcome = loop {
            match self.actions.execute(executed, &mut cx)? {
                Outcome::HandOff(next) if hand_offs < self.config.max_hand_offs => {
                    tracing::info!("{} handed off to {}", executed, next);
                    hand_offs += 1;
                    executed = next;
                }
                Outcome::HandOff(next) => return Err(RunError::HandOffLoop(next)),
                outcome => break outcome,
            }
        };

        if let Outcome::Stopped(reason) = &outcome {
            tracing::error!("run stopped after {} ticks: {}", self.ticks, reason);
            self.handle.stop();
            self.run.active = false;
            self.stopped = true;
        }

        Ok(TickReport {
            tick: self.ticks,
            decision,
            executed,
            outcome,
        })
    }

    /// Ticks until the run is stopped, the handle goes inactive, or the
    /// configured tick bound is reached. Returns the number of ticks run.
    pub fn run(&mut self) -> Result<u64> {
        let started = self.ticks;
        while self.handle.is_active() && !self.stopped {
            if self
                .config
                .max_ticks
                .is_some_and(|limit| self.ticks - started >= limit)
            {
                tracing::info!("tick limit reached");
                break;
            }
            let report = self.tick()?;
            if let Outcome::SoftFailure(reason) = &report.outcome {
                tracing::debug!("{} will be retried: {}", report.executed, reason);
            }
            if report.executed != ActionKind::Idle {
                let pause = self.config.run.timings.tick;
                self.env.delay(pause);
            }
        }
        Ok(self.ticks - started)
    }
}
