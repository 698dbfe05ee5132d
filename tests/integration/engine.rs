//! Arithmetic, stack manipulation and canonical program tests.

use crate::common::*;
use befunge93::{BefungeError, ExecStatus};

// =============================================================================
// Canonical Programs
// =============================================================================

mod canonical {
    use super::*;

    #[test]
    fn five_four_add_print() {
        assert_eq!(output_of("54+.@"), "9 ");
    }

    #[test]
    fn one_two_sub_print_is_negative() {
        // `-` pops b=2 then a=1 and pushes a-b.
        assert_eq!(output_of("12-.@"), "-1 ");
    }

    #[test]
    fn six_seven_mul_print() {
        assert_eq!(output_of("67*.@"), "42 ");
    }

    #[test]
    fn nine_three_div_print() {
        assert_eq!(output_of("93/.@"), "3 ");
    }

    #[test]
    fn nine_four_mod_print() {
        assert_eq!(output_of("94%.@"), "1 ");
    }

    #[test]
    fn trampoline_skips_exactly_the_next_cell() {
        // `1` is executed, `2` is skipped; `.` pops the 1.
        assert_eq!(output_of("1#2.@"), "1 ");
    }

    #[test]
    fn trampoline_then_pop_of_empty_stack_prints_zero() {
        // `1` is skipped, so `.` pops from an empty stack.
        assert_eq!(output_of("#1.@"), "0 ");
    }
}

// =============================================================================
// Stack Manipulation
// =============================================================================

mod stack_manipulation {
    use super::*;

    #[test]
    fn dup_then_discard_leaves_stack_unchanged() {
        let engine = run_to_halt("5:$.@");
        assert_eq!(engine.port.output(), "5 ");
        assert!(engine.stack().is_empty());
    }

    #[test]
    fn swap_exchanges_top_two() {
        // 1 2 \ -> 2 1, so - computes 2-1.
        assert_eq!(output_of("12\\-.@"), "1 ");
    }

    #[test]
    fn swap_twice_restores_order() {
        assert_eq!(output_of("12\\\\-.@"), "-1 ");
    }

    #[test]
    fn discard_drops_top() {
        assert_eq!(output_of("12$.@"), "1 ");
    }

    #[test]
    fn pop_of_empty_stack_yields_zero_repeatedly() {
        assert_eq!(output_of("...@"), "0 0 0 ");
    }

    #[test]
    fn digits_push_their_values() {
        let engine = run_to_halt("0123456789@");
        assert_eq!(engine.stack().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}

// =============================================================================
// Logic and Comparison
// =============================================================================

mod logic {
    use super::*;

    #[test]
    fn not_of_zero_is_one() {
        assert_eq!(output_of("0!.@"), "1 ");
    }

    #[test]
    fn not_of_nonzero_is_zero() {
        assert_eq!(output_of("5!.@"), "0 ");
    }

    /// Befunge snippet pushing a small signed integer (|n| <= 9).
    fn push_snippet(n: i64) -> String {
        assert!((-9..=9).contains(&n));
        if n >= 0 {
            n.to_string()
        } else {
            format!("0{}-", -n)
        }
    }

    #[test]
    fn greater_than_over_signed_pairs() {
        let pairs: &[(i64, i64)] = &[
            (1, 2),
            (2, 1),
            (5, 5),
            (0, 0),
            (-1, 0),
            (0, -1),
            (-3, -4),
            (-4, -3),
            (9, -9),
        ];
        for &(a, b) in pairs {
            let program = format!("{}{}`.@", push_snippet(a), push_snippet(b));
            let expected = if a > b { "1 " } else { "0 " };
            assert_eq!(output_of(&program), expected, "{} ` {}", a, b);
        }
    }
}

// =============================================================================
// Fatal Arithmetic
// =============================================================================

mod fatal_arithmetic {
    use super::*;

    #[test]
    fn division_by_zero_is_fatal() {
        let err = error_of("10/.@");
        assert_eq!(err, BefungeError::DivisionByZero { dividend: 1, x: 2, y: 0 });
    }

    #[test]
    fn modulo_by_zero_is_fatal() {
        let err = error_of("70%.@");
        assert_eq!(err, BefungeError::ModuloByZero { dividend: 7, x: 2, y: 0 });
    }

    #[test]
    fn failed_engine_is_not_halted() {
        let mut engine = engine_for("10/@");
        assert!(engine.run().is_err());
        assert_eq!(engine.status(), ExecStatus::Running);
    }
}
