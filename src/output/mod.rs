//! Terminal output formatting
//!
//! Share text, coloured tiles and statistics printers.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_error, print_keyboard, print_outcome, print_stats, print_warning,
};
pub use formatters::{row_to_squares, share_text};
