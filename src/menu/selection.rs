use std::marker::PhantomData;

/// A fixed, ordered set of choices shown on one menu screen
pub trait MenuOption: Copy + PartialEq + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Text shown for this option
    fn label(&self) -> &'static str;
}

/// Selection cursor over a `MenuOption` list. Moving past either end wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu<T: MenuOption> {
    selected: usize,
    _options: PhantomData<T>,
}

impl<T: MenuOption> Menu<T> {
    pub fn new() -> Self {
        Self {
            selected: 0,
            _options: PhantomData,
        }
    }

    pub fn options(&self) -> &'static [T] {
        T::ALL
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> T {
        T::ALL[self.selected]
    }

    pub fn previous(&mut self) {
        let len = T::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % T::ALL.len();
    }

    /// Put the cursor back on the first option
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

impl<T: MenuOption> Default for Menu<T> {
    fn default() -> Self {
        Self::new()
    }
}
