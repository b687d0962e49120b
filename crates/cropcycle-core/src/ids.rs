//! Identifier generation for plans, phases and tasks.

use jiff::Timestamp;

/// Produces unique string identifiers for entities.
///
/// Each generator owns its counter, so there is no process-wide state. Ids
/// take the form `{prefix}-{n}` with `n` starting at 1. A generator created
/// with [`IdGenerator::new`] derives its prefix from the current instant,
/// which keeps ids from separate sessions apart from each other.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    next: u64,
}

impl IdGenerator {
    /// Creates a generator seeded from the current time.
    pub fn new() -> Self {
        let millis = Timestamp::now().as_millisecond().unsigned_abs();
        Self::with_prefix(to_base36(millis))
    }

    /// Creates a deterministic generator yielding `prefix-1`, `prefix-2`, ...
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Returns an id never returned before by this generator.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Records an id that already exists so it is never handed out again.
    pub fn observe(&mut self, id: &str) {
        let counter = id
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|n| n.parse::<u64>().ok());

        if let Some(n) = counter {
            if n >= self.next {
                self.next = n.saturating_add(1);
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
