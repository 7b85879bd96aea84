//! End-to-end playback behavior on the virtual clock.
//!
//! These tests drive full tutorial runs through the public API and check
//! the observable callback stream: ordering, counts, timing, and the
//! silence guarantees around `stop()`.

use termtutor::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostEvent {
    TypeStart,
    TypeComplete,
    InputChange(String),
    Execute(String),
    StepChange(usize),
    Complete,
}

#[derive(Debug, Default)]
struct RecordingHost {
    events: Vec<HostEvent>,
}

impl TerminalHost for RecordingHost {
    fn on_type_start(&mut self) {
        self.events.push(HostEvent::TypeStart);
    }
    fn on_type_complete(&mut self) {
        self.events.push(HostEvent::TypeComplete);
    }
    fn on_input_change(&mut self, input: &str) {
        self.events.push(HostEvent::InputChange(input.to_string()));
    }
    fn on_execute_command(&mut self, command: &str) {
        self.events.push(HostEvent::Execute(command.to_string()));
    }
    fn on_step_change(&mut self, index: usize) {
        self.events.push(HostEvent::StepChange(index));
    }
    fn on_tutorial_complete(&mut self) {
        self.events.push(HostEvent::Complete);
    }
}

fn step(command: &str, delay_ms: u64, message: &str, tip: &str) -> TutorialStep {
    TutorialStep {
        command: command.to_string(),
        delay_ms,
        message: message.to_string(),
        tip: tip.to_string(),
    }
}

fn run_to_completion(seq: &mut Sequencer, host: &mut RecordingHost) {
    seq.start(host);
    for _ in 0..10_000 {
        if !seq.is_running() {
            return;
        }
        seq.advance(host, 100);
    }
    panic!("playback did not complete");
}

/// The single-step reference scenario, timed tick by tick.
#[test]
fn single_step_reference_scenario() {
    let script = Script::new("ref", vec![step("help", 100, "m1", "t1")]);
    let mut seq = Sequencer::new(script, TimingConfig::default());
    let mut host = RecordingHost::default();

    seq.start(&mut host);
    assert_eq!(host.events, vec![HostEvent::StepChange(0)]);

    // Typing begins only after the 100ms step delay.
    seq.advance(&mut host, 99);
    assert!(!host.events.contains(&HostEvent::TypeStart));
    seq.advance(&mut host, 1);
    assert!(host.events.contains(&HostEvent::TypeStart));

    // Four characters at the 100ms cadence.
    seq.advance(&mut host, 400);
    let inputs: Vec<_> = host
        .events
        .iter()
        .filter_map(|e| match e {
            HostEvent::InputChange(s) => Some(s.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(inputs, vec!["", "h", "he", "hel", "help"]);
    assert_eq!(host.events.last(), Some(&HostEvent::TypeComplete));

    // The 800ms pre-execution pause, then the exact command.
    seq.advance(&mut host, 800);
    assert_eq!(host.events.last(), Some(&HostEvent::Execute("help".into())));

    // The 1000ms inter-step pause, then completion, nothing further.
    seq.advance(&mut host, 1000);
    assert_eq!(host.events.last(), Some(&HostEvent::Complete));
    assert!(!seq.is_running());

    let total = host.events.len();
    seq.advance(&mut host, 60_000);
    assert_eq!(host.events.len(), total);
}

#[test]
fn empty_script_completes_without_steps() {
    let mut seq = Sequencer::new(Script::new("empty", vec![]), TimingConfig::default());
    let mut host = RecordingHost::default();

    seq.start(&mut host);

    assert_eq!(host.events, vec![HostEvent::Complete]);
    assert!(!seq.is_running());
}

#[test]
fn guided_tour_executes_every_command_in_order() {
    let tour = Script::guided_tour();
    let expected: Vec<String> = tour.iter().map(|s| s.command.clone()).collect();
    let n = tour.len();

    let mut seq = Sequencer::new(tour, TimingConfig::default());
    let mut host = RecordingHost::default();
    run_to_completion(&mut seq, &mut host);

    let changes: Vec<_> = host
        .events
        .iter()
        .filter_map(|e| match e {
            HostEvent::StepChange(i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(changes, (0..n).collect::<Vec<_>>());

    let executed: Vec<_> = host
        .events
        .iter()
        .filter_map(|e| match e {
            HostEvent::Execute(c) => Some(c.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(executed, expected);

    let completes = host
        .events
        .iter()
        .filter(|e| matches!(e, HostEvent::Complete))
        .count();
    assert_eq!(completes, 1);
}

#[test]
fn stop_during_typing_of_first_step_silences_both_steps() {
    let script = Script::new(
        "two",
        vec![
            step("help", 100, "m1", "t1"),
            step("about", 100, "m2", "t2"),
        ],
    );
    let mut seq = Sequencer::new(script, TimingConfig::default());
    let mut host = RecordingHost::default();

    seq.start(&mut host);
    seq.advance(&mut host, 250); // partway into typing "help"
    assert!(seq.is_typing());

    seq.stop(&mut host);

    // The host got the typing-clear notification.
    assert_eq!(host.events.last(), Some(&HostEvent::TypeComplete));

    // Neither step's command ever executes.
    seq.advance(&mut host, 600_000);
    assert!(host
        .events
        .iter()
        .all(|e| !matches!(e, HostEvent::Execute(_))));
    assert!(!host.events.contains(&HostEvent::StepChange(1)));
}

#[test]
fn stop_before_start_matches_fresh_instance() {
    let script = Script::new("one", vec![step("help", 100, "", "")]);
    let mut stopped = Sequencer::new(script.clone(), TimingConfig::default());
    let fresh = Sequencer::new(script, TimingConfig::default());
    let mut host = RecordingHost::default();

    stopped.stop(&mut host);

    assert_eq!(stopped.is_running(), fresh.is_running());
    assert_eq!(stopped.is_typing(), fresh.is_typing());
    assert_eq!(stopped.current_step_index(), fresh.current_step_index());
    assert_eq!(stopped.phase(), fresh.phase());
}

#[test]
fn restart_mid_run_replays_from_step_zero() {
    let script = Script::new(
        "two",
        vec![step("aa", 50, "", ""), step("bb", 50, "", "")],
    );
    let mut seq = Sequencer::new(script, TimingConfig::default());
    let mut host = RecordingHost::default();

    seq.start(&mut host);
    seq.advance(&mut host, 1500); // step 0 executed, step 1 pending
    assert!(seq.current_step_index() > 0);

    let mut second = RecordingHost::default();
    seq.start(&mut second);
    assert_eq!(second.events, vec![HostEvent::StepChange(0)]);

    run_to_completion_from_started(&mut seq, &mut second);
    let executed: Vec<_> = second
        .events
        .iter()
        .filter_map(|e| match e {
            HostEvent::Execute(c) => Some(c.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(executed, vec!["aa", "bb"]);
}

fn run_to_completion_from_started(seq: &mut Sequencer, host: &mut RecordingHost) {
    for _ in 0..10_000 {
        if !seq.is_running() {
            return;
        }
        seq.advance(host, 100);
    }
    panic!("playback did not complete");
}

/// A reusable instance: a second full run behaves exactly like the first.
#[test]
fn sequencer_reusable_after_completion() {
    let script = Script::new("one", vec![step("help", 100, "", "")]);
    let mut seq = Sequencer::new(script, TimingConfig::default());

    let mut first = RecordingHost::default();
    run_to_completion(&mut seq, &mut first);

    let mut second = RecordingHost::default();
    run_to_completion(&mut seq, &mut second);

    assert_eq!(first.events, second.events);
}

/// Custom pacing changes the schedule, never the callback sequence.
#[test]
fn pacing_invariant_callback_stream() {
    let script = Script::new(
        "two",
        vec![step("hi", 10, "", ""), step("yo", 20, "", "")],
    );

    let slow = TimingConfig::default();
    let fast = TimingConfig::builder()
        .type_tick_ms(1)
        .exec_pause_ms(2)
        .step_pause_ms(3)
        .build();

    let mut slow_host = RecordingHost::default();
    let mut slow_seq = Sequencer::new(script.clone(), slow);
    run_to_completion(&mut slow_seq, &mut slow_host);

    let mut fast_host = RecordingHost::default();
    let mut fast_seq = Sequencer::new(script, fast);
    run_to_completion(&mut fast_seq, &mut fast_host);

    assert_eq!(slow_host.events, fast_host.events);
}
