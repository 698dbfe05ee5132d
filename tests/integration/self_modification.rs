//! Self-modification: `g`/`p` semantics, bounds policing, and programs that
//! rewrite cells they later execute.

use crate::common::*;
use befunge93::{BefungeError, ExecStatus, GridOperation};

// =============================================================================
// Round Trips
// =============================================================================

mod round_trip {
    use super::*;

    #[test]
    fn put_then_get_returns_the_written_byte() {
        // 7*7*7 = 343 truncates to 343 % 256 = 87 on write.
        assert_eq!(output_of("777**05p05g.@"), "87 ");
    }

    #[test]
    fn get_reads_the_program_text_itself() {
        // (0,0) holds the '0' of this very program.
        assert_eq!(output_of("00g,@"), "0");
    }

    #[test]
    fn put_is_visible_in_the_grid_after_halt() {
        let engine = run_to_halt("88*12p@");
        assert_eq!(engine.grid().read(1, 2), b'@');
    }
}

// =============================================================================
// Executing Rewritten Cells
// =============================================================================

mod rewritten_code {
    use super::*;

    #[test]
    fn a_program_can_write_its_own_halt_instruction() {
        // 8*8 = 64 = '@', written to (10, 0) ahead of the pointer. Without
        // the write the row has no halt and the run would hit the cycle
        // budget instead.
        let engine = run_to_halt("88*55+0p");
        assert_eq!(engine.status(), ExecStatus::Halted);
        assert_eq!(engine.grid().read(10, 0), b'@');
        assert_eq!((engine.ip().x, engine.ip().y), (10, 0));
    }
}

// =============================================================================
// Bounds Policing
// =============================================================================

mod bounds {
    use super::*;

    #[test]
    fn get_past_the_right_edge_is_fatal() {
        // x = 9*9 = 81.
        let err = error_of("99*0g@");
        assert_eq!(
            err,
            BefungeError::OutOfBounds { x: 81, y: 0, operation: GridOperation::Get }
        );
    }

    #[test]
    fn get_with_negative_coordinate_is_fatal() {
        let err = error_of("01-0g@");
        assert_eq!(
            err,
            BefungeError::OutOfBounds { x: -1, y: 0, operation: GridOperation::Get }
        );
    }

    #[test]
    fn put_past_the_bottom_edge_is_fatal() {
        // y = 5*5 = 25, one row past the canvas.
        let err = error_of("0055*p@");
        assert_eq!(
            err,
            BefungeError::OutOfBounds { x: 0, y: 25, operation: GridOperation::Put }
        );
    }

    #[test]
    fn corner_cells_are_in_bounds() {
        // Write to (79, 24) and read it back: 79 = 9*9-2, 24 = 5*5-1.
        let engine = run_to_halt("199*2-55*1-p99*2-55*1-g.@");
        assert_eq!(engine.port.output(), "1 ");
    }
}
