//! The inspector contract: before each cycle the engine exposes the pointer
//! position, the cell under it and the stack; the pause must not alter
//! engine state.

use crate::common::*;
use befunge93::{CycleView, Inspector};

/// Records every view it is handed.
#[derive(Default)]
struct Recording {
    before: Vec<(usize, usize, u8, Vec<i64>)>,
    after: Vec<Vec<i64>>,
}

impl Inspector for Recording {
    fn before_cycle(&mut self, view: &CycleView<'_>) {
        self.before
            .push((view.x, view.y, view.cell, view.stack.to_vec()));
    }

    fn after_cycle(&mut self, stack: &[i64]) {
        self.after.push(stack.to_vec());
    }
}

#[test]
fn inspector_sees_every_cycle_in_order() {
    let mut engine = engine_for("12+@");
    let mut recording = Recording::default();
    engine.run_with_inspector(&mut recording).unwrap();

    assert_eq!(
        recording.before,
        vec![
            (0, 0, b'1', vec![]),
            (1, 0, b'2', vec![1]),
            (2, 0, b'+', vec![1, 2]),
            (3, 0, b'@', vec![3]),
        ]
    );
    assert_eq!(
        recording.after,
        vec![vec![1], vec![1, 2], vec![3], vec![3]]
    );
}

#[test]
fn inspected_run_matches_uninspected_run() {
    let mut plain = engine_for("25*:*.@");
    plain.run().unwrap();

    let mut inspected = engine_for("25*:*.@");
    inspected
        .run_with_inspector(&mut Recording::default())
        .unwrap();

    assert_eq!(plain.port.output(), inspected.port.output());
    assert_eq!(plain.stack().as_slice(), inspected.stack().as_slice());
    assert_eq!(plain.cycles(), inspected.cycles());
}
