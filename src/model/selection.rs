//! Cursor state for the current top result and the playback queue panel

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_index: usize,
    /// Dense index over the columns that have data
    pub selected_column: usize,
    pub queue_focused: bool,
    pub queue_selected_index: usize,
}

impl SelectionState {
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.selected_column = 0;
    }

    pub fn clamp_index(&mut self, count: usize) {
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    pub fn queue_down(&mut self, queue_len: usize) {
        if queue_len > 0 && self.queue_selected_index < queue_len - 1 {
            self.queue_selected_index += 1;
        }
    }

    pub fn queue_up(&mut self) {
        self.queue_selected_index = self.queue_selected_index.saturating_sub(1);
    }

    pub fn clamp_queue(&mut self, queue_len: usize) {
        if self.queue_selected_index >= queue_len {
            self.queue_selected_index = queue_len.saturating_sub(1);
        }
    }
}
