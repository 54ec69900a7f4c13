//! Integration tests for the StationController → ports pipeline.
//!
//! These run on the host (x86_64) and drive the controller tick by tick
//! against [`MockHardware`], checking poll gating, zone decisions, pump
//! deadlines and the diagnostics stream.

use super::mock_hw::{MockHardware, PinWrite, RecordingSink};

use wateringstation::app::events::StationEvent;
use wateringstation::app::ports::NullSink;
use wateringstation::app::service::StationController;
use wateringstation::config::StationConfig;
use wateringstation::drivers::pump::PumpChannel;
use wateringstation::sensors::moisture::SoilMoistureLevel::*;

fn make_station() -> (StationController, RecordingSink) {
    let mut station = StationController::new(StationConfig::default());
    let mut sink = RecordingSink::new();
    station.start(&mut sink);
    (station, sink)
}

// ── Poll gating ───────────────────────────────────────────────

#[test]
fn no_poll_until_interval_strictly_elapsed() {
    let (mut station, mut sink) = make_station();
    let mut hw = MockHardware::with_adc([950; 4]);

    let report = station.tick(5_000, &mut hw, &mut sink);
    assert!(report.poll.is_none(), "gate is strict: 5000 is not > 0 + 5000");
    assert_eq!(hw.total_conversions(), 0);

    let report = station.tick(5_001, &mut hw, &mut sink);
    assert!(report.poll.is_some());
    assert_eq!(hw.conversions, [10, 10, 10, 10], "ten conversions per probe");
}

#[test]
fn next_poll_waits_from_now_plus_interval() {
    let (mut station, mut sink) = make_station();
    let mut hw = MockHardware::new();

    assert!(station.tick(5_001, &mut hw, &mut sink).poll.is_some());
    assert_eq!(station.state().last_poll_time(), 10_001);
    assert!(station.tick(10_001, &mut hw, &mut sink).poll.is_none());
    assert!(station.tick(15_001, &mut hw, &mut sink).poll.is_none());
    assert!(station.tick(15_002, &mut hw, &mut sink).poll.is_some());
}

// ── Zone decisions ────────────────────────────────────────────

#[test]
fn dry_zone_two_runs_only_pump_two() {
    let (mut station, mut sink) = make_station();
    let mut hw = MockHardware::with_adc([200, 200, 950, 300]);

    let report = station.tick(5_001, &mut hw, &mut sink);

    let cycle = report.poll.expect("poll due");
    assert_eq!(cycle.raw, [200, 200, 950, 300]);
    assert_eq!(cycle.panel.levels, [Wet, Wet, Arid, Wet], "300 is below the Humid floor");
    assert_eq!(cycle.triggered, [false, true]);

    assert_eq!(station.state().run_until(PumpChannel::P1), None);
    assert_eq!(station.state().run_until(PumpChannel::P2), Some(5_001 + 3_000));
    assert_eq!(report.outputs, [false, true]);
    assert!(!hw.pump_on(PumpChannel::P1));
    assert!(hw.pump_on(PumpChannel::P2));
}

#[test]
fn humid_and_medium_zone_stays_idle() {
    let (mut station, mut sink) = make_station();
    let mut hw = MockHardware::with_adc([400, 650, 349, 400]);

    let report = station.tick(5_001, &mut hw, &mut sink);

    let cycle = report.poll.expect("poll due");
    assert_eq!(cycle.panel.levels, [Humid, Medium, Wet, Humid]);
    assert_eq!(cycle.triggered, [false, false]);
    assert_eq!(station.state().run_until(PumpChannel::P1), None);
    assert_eq!(station.state().run_until(PumpChannel::P2), None);
    assert_eq!(report.outputs, [false, false]);
}

#[test]
fn running_pump_deadline_untouched_by_other_zone() {
    let config = StationConfig {
        poll_interval_ms: 500,
        ..StationConfig::default()
    };
    let mut station = StationController::new(config);
    let mut hw = MockHardware::with_adc([950, 0, 0, 0]);
    station.tick(501, &mut hw, &mut NullSink);
    assert_eq!(station.state().run_until(PumpChannel::P1), Some(3_501));

    // Zone 1 turns wet, zone 2 turns dry before pump 1 stops.
    hw.adc = [0, 0, 800, 0];
    assert!(station.tick(1_501, &mut hw, &mut NullSink).poll.is_none());
    let report = station.tick(1_502, &mut hw, &mut NullSink);
    assert!(report.poll.is_some());
    assert_eq!(station.state().run_until(PumpChannel::P1), Some(3_501));
    assert_eq!(station.state().run_until(PumpChannel::P2), Some(4_502));
    assert_eq!(report.outputs, [true, true]);
}

#[test]
fn invalid_probe_cannot_start_pump_alone() {
    let (mut station, mut sink) = make_station();
    let mut hw = MockHardware::with_adc([1_024, 100, 1_024, 800]);

    let report = station.tick(5_001, &mut hw, &mut sink);
    let cycle = report.poll.expect("poll due");
    assert_eq!(cycle.panel.levels, [InvalidReading, Wet, InvalidReading, Dry]);
    assert_eq!(cycle.triggered, [false, true], "dry partner still triggers");
    assert_eq!(report.outputs, [false, true]);
}

// ── Actuation ─────────────────────────────────────────────────

#[test]
fn pump_on_through_deadline_then_off() {
    let config = StationConfig {
        pump_run_duration_ms: 2_999,
        ..StationConfig::default()
    };
    let mut station = StationController::new(config);
    let mut hw = MockHardware::with_adc([0, 850, 0, 0]);

    station.tick(5_001, &mut hw, &mut NullSink);
    assert_eq!(station.state().run_until(PumpChannel::P1), Some(8_000));

    for now in [5_002, 6_000, 7_999, 8_000] {
        let report = station.tick(now, &mut hw, &mut NullSink);
        assert!(report.outputs[0], "pump 1 must be on at {now}");
    }
    for now in [8_001, 9_000, 10_001] {
        let report = station.tick(now, &mut hw, &mut NullSink);
        assert!(!report.outputs[0], "pump 1 must be off at {now}");
    }
    assert!(!hw.pump_on(PumpChannel::P1));
}

#[test]
fn actuation_runs_every_tick_without_poll() {
    let (mut station, mut sink) = make_station();
    let mut hw = MockHardware::new();

    for now in [0, 10, 20] {
        station.tick(now, &mut hw, &mut sink);
    }
    assert_eq!(hw.total_conversions(), 0);
    assert_eq!(hw.pin(PumpChannel::P1).writes(), vec![PinWrite::Low; 3]);
    assert_eq!(hw.pin(PumpChannel::P2).writes(), vec![PinWrite::Low; 3]);
}

#[test]
fn repeated_tick_same_instant_is_idempotent() {
    let (mut station, mut sink) = make_station();
    let mut hw = MockHardware::with_adc([0, 0, 0, 900]);

    let first = station.tick(5_001, &mut hw, &mut sink);
    let state_after_first = station.state().clone();
    let events_after_first = sink.events.len();

    let second = station.tick(5_001, &mut hw, &mut sink);
    assert!(second.poll.is_none(), "poll already consumed");
    assert_eq!(first.outputs, second.outputs);
    assert_eq!(station.state(), &state_after_first);
    assert_eq!(sink.events.len(), events_after_first, "no new pump change");
    assert_eq!(hw.pin(PumpChannel::P2).writes(), vec![PinWrite::High; 2]);
}

#[test]
fn deadline_across_counter_wrap() {
    let mut station = StationController::new(StationConfig::default());
    let mut hw = MockHardware::with_adc([900, 0, 0, 0]);

    // Walk the clock up towards the wrap point; every tick polls.
    let mut now: u32 = 0;
    while now < u32::MAX - 2_000_000 {
        now += 1_000_000;
        station.tick(now, &mut hw, &mut NullSink);
    }

    let t = u32::MAX - 1_000;
    assert!(station.tick(t, &mut hw, &mut NullSink).poll.is_some());
    let until = t.wrapping_add(3_000);
    assert_eq!(station.state().run_until(PumpChannel::P1), Some(until));

    assert!(station.tick(t.wrapping_add(1_500), &mut hw, &mut NullSink).outputs[0]);
    assert!(station.tick(until, &mut hw, &mut NullSink).outputs[0]);
    let after = station.tick(until.wrapping_add(1), &mut hw, &mut NullSink);
    assert!(after.poll.is_none());
    assert!(!after.outputs[0]);
}

// ── Diagnostics ───────────────────────────────────────────────

#[test]
fn event_stream_reports_cycle_and_pump_changes() {
    let (mut station, mut sink) = make_station();
    let mut hw = MockHardware::with_adc([700, 0, 0, 0]);

    station.tick(5_001, &mut hw, &mut sink);
    station.tick(8_002, &mut hw, &mut sink);

    assert!(matches!(sink.events[0], StationEvent::Started(_)));
    assert!(matches!(sink.events[1], StationEvent::CycleCompleted(c) if c.triggered == [true, false]));
    assert_eq!(
        sink.events[2],
        StationEvent::PumpChanged { pump: PumpChannel::P1, on: true }
    );
    assert_eq!(
        sink.events[3],
        StationEvent::PumpChanged { pump: PumpChannel::P1, on: false }
    );
    assert_eq!(sink.cycles(), 1);
}

#[test]
fn sink_does_not_affect_control() {
    let times = [0, 5_001, 6_000, 8_001, 10_002, 12_000, 13_003, 20_000];
    let adc = [800, 0, 1_024, 950];

    let mut with_sink = StationController::new(StationConfig::default());
    let mut hw_a = MockHardware::with_adc(adc);
    let mut sink = RecordingSink::new();

    let mut without_sink = StationController::new(StationConfig::default());
    let mut hw_b = MockHardware::with_adc(adc);

    for now in times {
        let a = with_sink.tick(now, &mut hw_a, &mut sink);
        let b = without_sink.tick(now, &mut hw_b, &mut NullSink);
        assert_eq!(a, b, "tick at {now}");
    }
    assert_eq!(with_sink.state(), without_sink.state());
    assert_eq!(
        hw_a.pin(PumpChannel::P2).writes(),
        hw_b.pin(PumpChannel::P2).writes()
    );
}
