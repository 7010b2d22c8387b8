//! Dispatch decision logic: operator command parsing and the sequential
//! cursor. Pure state, no I/O, so every property of the loop is testable
//! without a dataset file or a running service.

/// One parsed operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The line parsed as an in-range explicit index.
    Explicit(usize),
    /// Anything else: empty line, non-numeric text, out-of-range or
    /// non-positive number. Falls back to sequential iteration.
    Sequential,
}

impl Command {
    /// Parse one input line against a dataset of `len` questions.
    ///
    /// An explicit index must be strictly greater than 0 and strictly less
    /// than `len`. Index 0 therefore always falls back to sequential
    /// iteration; the lower bound is deliberate (see DESIGN.md).
    pub fn parse(line: &str, len: usize) -> Command {
        match line.trim().parse::<i64>() {
            Ok(i) if i > 0 && (i as usize) < len => Command::Explicit(i as usize),
            _ => Command::Sequential,
        }
    }
}

/// Where one command resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Dispatch the question at this dataset position. `explicit` records
    /// whether the operator named the index; explicit dispatches never move
    /// the cursor.
    Dispatch { index: usize, explicit: bool },
    /// Sequential iteration has consumed the whole dataset.
    Exhausted,
}

/// Loop-owned dispatch state: dataset length plus the sequential cursor.
///
/// The cursor starts at 0, advances by one on every sequential fallback and
/// is never decremented. It is only touched here, inside the synchronous
/// decision step, never from a dispatch completion.
#[derive(Debug)]
pub struct Session {
    len: usize,
    cursor: usize,
}

impl Session {
    pub fn new(len: usize) -> Self {
        Self { len, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Resolve one command to a dispatch target.
    ///
    /// The sequential increment is unconditional: it happens at decision
    /// time and is never rolled back when the dispatch later fails.
    pub fn decide(&mut self, command: Command) -> Target {
        match command {
            Command::Explicit(index) => Target::Dispatch {
                index,
                explicit: true,
            },
            Command::Sequential => {
                if self.cursor >= self.len {
                    Target::Exhausted
                } else {
                    let index = self.cursor;
                    self.cursor += 1;
                    Target::Dispatch {
                        index,
                        explicit: false,
                    }
                }
            }
        }
    }
}
