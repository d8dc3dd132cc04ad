/*!
 * Simulation Tests
 * End-to-end scheduling scenarios and reference traces
 */

use pretty_assertions::assert_eq;
use prio_sched_sim::{
    parse_job_list, EndReason, Interval, JobSpec, Report, SimConfig, Simulation,
    SimulationOutcome, Tick,
};

fn run(jobs: Vec<JobSpec>, time_slice: Tick, block_duration: Tick) -> SimulationOutcome {
    let config = SimConfig::new(time_slice, block_duration).unwrap();
    Simulation::new(config, jobs).unwrap().run()
}

fn run_text(list: &str, time_slice: Tick, block_duration: Tick) -> String {
    let outcome = run(parse_job_list(list).unwrap(), time_slice, block_duration);
    Report::from_outcome(&outcome).render_text()
}

fn turnarounds(outcome: &SimulationOutcome) -> Vec<(String, Tick)> {
    outcome
        .completions
        .iter()
        .map(|c| (c.job.name().to_string(), c.turnaround))
        .collect()
}

#[test]
fn test_single_job_no_idle() {
    let outcome = run(vec![JobSpec::new("A", 1, 0, 5, 100)], 10, 20);

    assert_eq!(
        outcome.intervals,
        vec![Interval::run(0, 5, "A".into(), EndReason::Terminated)]
    );
    assert_eq!(turnarounds(&outcome), vec![("A".to_string(), 5)]);
    assert_eq!(outcome.final_clock(), 5);
    assert_eq!(outcome.stats.idle_ticks, 0);
}

#[test]
fn test_equal_priority_round_robin() {
    let outcome = run(
        vec![
            JobSpec::new("A", 1, 0, 3, 100),
            JobSpec::new("B", 1, 0, 3, 100),
        ],
        1,
        5,
    );

    let trace: Vec<String> = outcome.intervals.iter().map(|i| i.to_string()).collect();
    assert_eq!(
        trace,
        vec![
            "0\tA\t1\tP",
            "1\tB\t1\tP",
            "2\tA\t1\tP",
            "3\tB\t1\tP",
            "4\tA\t1\tT",
            "5\tB\t1\tT",
        ]
    );
    assert_eq!(
        turnarounds(&outcome),
        vec![("A".to_string(), 5), ("B".to_string(), 6)]
    );
}

#[test]
fn test_block_and_resume() {
    let outcome = run(vec![JobSpec::new("A", 1, 0, 20, 5)], 10, 10);

    assert_eq!(
        outcome.intervals,
        vec![
            Interval::run(0, 5, "A".into(), EndReason::Blocked),
            Interval::idle(5, 10),
            Interval::run(15, 5, "A".into(), EndReason::Blocked),
            Interval::idle(20, 10),
            Interval::run(30, 5, "A".into(), EndReason::Blocked),
            Interval::idle(35, 10),
            Interval::run(45, 5, "A".into(), EndReason::Terminated),
        ]
    );
    let turnaround = outcome.completions[0].turnaround;
    assert_eq!(turnaround, 50);
    assert!(turnaround >= 20 + 10);
    assert_eq!(outcome.stats.blocks, 3);
}

#[test]
fn test_late_arrival_logs_leading_idle() {
    let text = run_text("X 1 3 4 100\n", 10, 20);
    assert_eq!(
        text,
        "timeSlice: 10     blockDuration: 20\n\
         0\tidle\t3\tI\n\
         3\tX\t4\tT\n\
         \n\
         X 4\n\
         Average turnaround time: 4.0\n"
    );
}

#[test]
fn test_higher_priority_value_runs_first() {
    let outcome = run(
        vec![
            JobSpec::new("low", 1, 0, 2, 100),
            JobSpec::new("high", 9, 0, 2, 100),
        ],
        10,
        10,
    );
    assert_eq!(outcome.intervals[0].label(), "high");
    assert_eq!(outcome.intervals[1].label(), "low");
}

#[test]
fn test_running_job_is_not_interrupted_by_arrival() {
    // Urgent job arrives mid-slice and waits for the slice to end
    let outcome = run(
        vec![
            JobSpec::new("bg", 1, 0, 30, 100),
            JobSpec::new("urgent", 9, 3, 2, 100),
        ],
        10,
        10,
    );
    assert_eq!(
        outcome.intervals[..2].to_vec(),
        vec![
            Interval::run(0, 10, "bg".into(), EndReason::Preempted),
            Interval::run(10, 2, "urgent".into(), EndReason::Terminated),
        ]
    );
}

#[test]
fn test_one_unblock_admitted_per_decision() {
    let list = include_str!("fixtures/staggered_unblock.txt");
    let outcome = run(parse_job_list(list).unwrap(), 10, 3);

    // Q (more urgent) has been unblockable since tick 7, but only P, the
    // earliest unblock, is admitted when X's slice ends at 14
    assert_eq!(
        outcome.intervals[3],
        Interval::run(14, 2, "P".into(), EndReason::Terminated)
    );
    assert_eq!(
        outcome.intervals[4],
        Interval::run(16, 2, "Q".into(), EndReason::Terminated)
    );
}

#[test]
fn test_reference_trace_staggered_unblock() {
    let list = include_str!("fixtures/staggered_unblock.txt");
    assert_eq!(
        run_text(list, 10, 3),
        include_str!("fixtures/staggered_unblock_10_3.out")
    );
}

#[test]
fn test_reference_trace_mixed_long_slice() {
    let list = include_str!("fixtures/mixed.txt");
    assert_eq!(run_text(list, 10, 20), include_str!("fixtures/mixed_10_20.out"));
}

#[test]
fn test_reference_trace_mixed_short_slice() {
    let list = include_str!("fixtures/mixed.txt");
    assert_eq!(run_text(list, 4, 7), include_str!("fixtures/mixed_4_7.out"));
}

#[test]
fn test_replay_is_byte_identical() {
    let list = include_str!("fixtures/mixed.txt");
    assert_eq!(run_text(list, 3, 2), run_text(list, 3, 2));
}

#[test]
fn test_stats_account_for_every_tick() {
    let jobs = parse_job_list(include_str!("fixtures/mixed.txt")).unwrap();
    let outcome = run(jobs, 10, 20);
    let stats = outcome.stats;

    assert_eq!(stats.final_clock, 95);
    assert_eq!(stats.busy_ticks + stats.idle_ticks, stats.final_clock);
    assert_eq!(stats.busy_ticks, 25 + 12 + 9 + 6 + 14);
    assert_eq!(stats.terminations, 5);
    let runs = outcome.intervals.iter().filter(|i| !i.is_idle()).count();
    assert_eq!(stats.dispatches as usize, runs);
}

#[test]
fn test_json_report_round_trips_through_serde_json() {
    let outcome = run(vec![JobSpec::new("A", 1, 0, 5, 100)], 10, 20);
    let json = Report::from_outcome(&outcome).render_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["time_slice"], 10);
    assert_eq!(value["completions"][0]["name"], "A");
    assert_eq!(value["completions"][0]["turnaround"], 5);
    assert_eq!(value["intervals"][0]["reason"], "terminated");
    assert_eq!(value["average_turnaround"], 5.0);
}
