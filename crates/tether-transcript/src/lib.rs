mod tail;

pub use tail::{read_tail_lines, tail_contains, TranscriptError, TAIL_LINES};
