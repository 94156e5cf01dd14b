/// Position within a variant's item sequence plus a reveal flag.
///
/// Navigation wraps in both directions and hides the revealed answer. On an
/// empty sequence every transition except `toggle_reveal` is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
    revealed: bool,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            revealed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.revealed = false;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.revealed = false;
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    /// "3 of 10" style position, `None` when empty.
    pub fn position_label(&self) -> Option<String> {
        if self.len == 0 {
            None
        } else {
            Some(format!("{} of {}", self.index + 1, self.len))
        }
    }
}
