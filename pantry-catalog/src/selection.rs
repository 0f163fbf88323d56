/// Which product's quantity overlay is open, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    open: Option<usize>,
}

impl Selection {
    /// Open the overlay for `index`, or close it if `index` is already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }
}
