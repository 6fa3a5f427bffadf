//! # Statistics Tests
//!
//! Counter bookkeeping and JSON serialization of [`SimStats`].

use pretty_assertions::assert_eq;
use regsim_core::isa::Operation;
use regsim_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::TestContext;

#[test]
fn test_record_counts_mix_and_saturation() {
    let mut stats = SimStats::default();
    stats.record(Operation::Mov, false);
    stats.record(Operation::Add, true);
    stats.record(Operation::Add, false);
    stats.record(Operation::Sub, true);

    assert_eq!(
        stats,
        SimStats {
            instructions_executed: 4,
            inst_mov: 1,
            inst_add: 2,
            inst_sub: 1,
            saturations: 2,
            runs_completed: 0,
            restarts: 0,
        }
    );
}

#[test]
fn test_mix_sums_to_total() {
    let mut ctx = TestContext::new().load_program(&["MOV AL, 1", "ADD BL, AL", "SUB CL, 3"]);
    ctx.step_n(7);
    let s = ctx.sim.stats();
    assert_eq!(s.instructions_executed, 7);
    assert_eq!(s.inst_mov + s.inst_add + s.inst_sub, s.instructions_executed);
    assert_eq!(s.runs_completed, 2);
    assert_eq!(s.restarts, 2);
}

#[test]
fn test_serialized_field_names() {
    let mut stats = SimStats::default();
    stats.record(Operation::Sub, true);
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["instructions_executed"], 1);
    assert_eq!(json["inst_sub"], 1);
    assert_eq!(json["saturations"], 1);
    assert_eq!(json["restarts"], 0);
}

#[test]
fn test_print_does_not_panic_on_empty_stats() {
    let stats = SimStats::default();
    stats.print();
    stats.print_sections(&[STATS_SECTIONS[1].to_string()]);
}
