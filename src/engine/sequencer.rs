//! Tutorial step sequencer.
//!
//! Replays a fixed script of terminal commands with realistic typed-out
//! pacing, narrating progress to the host and allowing immediate, clean
//! cancellation. The sequencer owns its timer queue and virtual clock; a
//! driver advances playback by calling [`Sequencer::advance`].
//!
//! At most one step is ever in flight. Within a step the pipeline is
//! strictly ordered: delay, typing, execution pause, execute, inter-step
//! pause, next step. `stop()` cancels every outstanding timer as one
//! batch, and every timer handler begins with a liveness check so that a
//! timer already due when `stop()` was called can never mutate state.

use crate::config::TimingConfig;
use crate::engine::{PlayClock, PlayTime, TimerEvent, TimerQueue};
use crate::script::{Script, TutorialStep};

/// Host terminal seam.
///
/// The sequencer only pushes values into the host; it never reads host
/// state back. Concurrent external mutation of the host input during a
/// run is undefined behavior the caller must prevent, typically by
/// stopping playback on any user activity.
pub trait TerminalHost {
    /// Character-by-character typing begins for a step.
    fn on_type_start(&mut self);

    /// Typing finished, or the sequencer was stopped.
    fn on_type_complete(&mut self);

    /// The simulated input changed; called with the full string typed so
    /// far, and once per step with an empty string to clear.
    fn on_input_change(&mut self, input: &str);

    /// The typed command should be executed by the host. The host is
    /// expected to consume its input as part of execution.
    fn on_execute_command(&mut self, command: &str);

    /// The current step index changed.
    fn on_step_change(&mut self, index: usize);

    /// The cursor moved past the last step; playback is complete.
    fn on_tutorial_complete(&mut self);
}

/// Sequencer phase.
///
/// `stop()` transitions from any phase directly to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not running; fresh, stopped, or naturally complete.
    #[default]
    Idle,
    /// Waiting out the step's configured delay before typing.
    AwaitingDelay,
    /// Appending one character per tick to the simulated input.
    Typing,
    /// Typing done; waiting out the pre-execution pause.
    AwaitingExecution,
    /// Command executed; waiting out the inter-step pause.
    AwaitingNextStep,
}

/// Tutorial step sequencer.
///
/// One instance corresponds to one tutorial session. `start()` is always
/// safe and restarts from step 0; `stop()` is idempotent; after natural
/// completion the sequencer is inert until `start()` is called again.
#[derive(Debug)]
pub struct Sequencer {
    script: Script,
    timing: TimingConfig,
    clock: PlayClock,
    timers: TimerQueue,
    phase: Phase,
    current_step: usize,
    typed_chars: usize,
    running: bool,
    typing: bool,
}

impl Sequencer {
    /// Create a sequencer for the given script and pacing.
    #[must_use]
    pub fn new(script: Script, timing: TimingConfig) -> Self {
        Self {
            script,
            timing,
            clock: PlayClock::new(),
            timers: TimerQueue::new(),
            phase: Phase::Idle,
            current_step: 0,
            typed_chars: 0,
            running: false,
            typing: false,
        }
    }

    /// Start (or restart) playback from step 0.
    ///
    /// Safe to call mid-run: any outstanding timers are cancelled first
    /// and no state carries over from the prior run. Fires
    /// `on_step_change(0)` synchronously; an empty script completes
    /// immediately.
    pub fn start<H: TerminalHost>(&mut self, host: &mut H) {
        self.timers.cancel_all();
        self.clock.reset();
        self.current_step = 0;
        self.typed_chars = 0;
        self.typing = false;
        self.running = true;
        self.enter_step(host);
    }

    /// Stop playback, cancelling every outstanding timer as one batch.
    ///
    /// Idempotent, and safe before `start()` was ever called. When an
    /// active run is being stopped, fires `on_type_complete()` so the
    /// host can clear any typing visuals; stopping an already-idle
    /// sequencer has no observable effect at all.
    pub fn stop<H: TerminalHost>(&mut self, host: &mut H) {
        let was_active = self.running;
        self.timers.cancel_all();
        self.running = false;
        self.typing = false;
        self.typed_chars = 0;
        self.current_step = 0;
        self.phase = Phase::Idle;
        if was_active {
            host.on_type_complete();
        }
    }

    /// Advance playback by `elapsed_ms` of virtual time.
    ///
    /// Fires every timer that falls due within the window, strictly in
    /// (due, sequence) order, moving the clock to each timer's due time
    /// before dispatching it.
    pub fn advance<H: TerminalHost>(&mut self, host: &mut H, elapsed_ms: u64) {
        let target = self.clock.now().add_millis(elapsed_ms);
        while let Some(timer) = self.timers.pop_due(target) {
            self.clock.advance_to(timer.due);
            self.dispatch(host, timer.event);
        }
        self.clock.advance_to(target);
    }

    /// Current step index.
    #[must_use]
    pub const fn current_step_index(&self) -> usize {
        self.current_step
    }

    /// Whether a run is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a character-typing animation is in progress.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.typing
    }

    /// Total number of steps in the script.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.script.len()
    }

    /// Descriptor of the current step, or `None` once out of range.
    #[must_use]
    pub fn current_step(&self) -> Option<&TutorialStep> {
        self.script.get(self.current_step)
    }

    /// Current phase of the step pipeline.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> PlayTime {
        self.clock.now()
    }

    /// Due time of the next scheduled timer, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<PlayTime> {
        self.timers.next_due()
    }

    /// Every timer handler starts here: a timer that was already due when
    /// `stop()` ran must no-op instead of mutating state.
    ///
    /// With batch cancellation the queue is empty after every `stop()`,
    /// so this check cannot trip through the public API today. It is
    /// load-bearing all the same: the no-op-after-stop guarantee must
    /// survive any future path where a popped timer outlives a stop,
    /// so do not remove it as dead code.
    fn dispatch<H: TerminalHost>(&mut self, host: &mut H, event: TimerEvent) {
        if !self.running {
            return;
        }
        match event {
            TimerEvent::BeginTyping => self.begin_typing(host),
            TimerEvent::TypeTick => self.type_tick(host),
            TimerEvent::Execute => self.execute(host),
            TimerEvent::AdvanceStep => self.enter_step(host),
        }
    }

    /// Enter the step under the cursor, or finish the run if the cursor
    /// is past the last step. The sole terminal state.
    fn enter_step<H: TerminalHost>(&mut self, host: &mut H) {
        let Some(step) = self.script.get(self.current_step) else {
            self.running = false;
            self.typing = false;
            self.phase = Phase::Idle;
            host.on_tutorial_complete();
            return;
        };
        let delay = step.delay_ms;

        self.phase = Phase::AwaitingDelay;
        host.on_step_change(self.current_step);
        self.timers
            .schedule(self.clock.now().add_millis(delay), TimerEvent::BeginTyping);
    }

    fn begin_typing<H: TerminalHost>(&mut self, host: &mut H) {
        self.phase = Phase::Typing;
        self.typing = true;
        self.typed_chars = 0;

        host.on_type_start();
        host.on_input_change("");

        if self.command_char_count() == 0 {
            // Nothing to type; complete the phase immediately.
            self.finish_typing(host);
        } else {
            self.timers.schedule(
                self.clock.now().add_millis(self.timing.type_tick_ms),
                TimerEvent::TypeTick,
            );
        }
    }

    fn type_tick<H: TerminalHost>(&mut self, host: &mut H) {
        self.typed_chars += 1;
        let prefix = self.typed_prefix();
        host.on_input_change(&prefix);

        if self.typed_chars >= self.command_char_count() {
            self.finish_typing(host);
        } else {
            self.timers.schedule(
                self.clock.now().add_millis(self.timing.type_tick_ms),
                TimerEvent::TypeTick,
            );
        }
    }

    fn finish_typing<H: TerminalHost>(&mut self, host: &mut H) {
        self.typing = false;
        self.phase = Phase::AwaitingExecution;
        host.on_type_complete();
        self.timers.schedule(
            self.clock.now().add_millis(self.timing.exec_pause_ms),
            TimerEvent::Execute,
        );
    }

    fn execute<H: TerminalHost>(&mut self, host: &mut H) {
        let command = self
            .script
            .get(self.current_step)
            .map(|s| s.command.clone())
            .unwrap_or_default();
        host.on_execute_command(&command);

        // The host consumes its input on execution; only the internal
        // typing cursor needs resetting here.
        self.typed_chars = 0;
        self.current_step += 1;
        self.phase = Phase::AwaitingNextStep;
        self.timers.schedule(
            self.clock.now().add_millis(self.timing.step_pause_ms),
            TimerEvent::AdvanceStep,
        );
    }

    fn command_char_count(&self) -> usize {
        self.script
            .get(self.current_step)
            .map_or(0, |s| s.command.chars().count())
    }

    fn typed_prefix(&self) -> String {
        self.script.get(self.current_step).map_or_else(String::new, |s| {
            s.command.chars().take(self.typed_chars).collect()
        })
    }
}
