//! Button input

/// Physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Left / "no"
    Cancel,
    /// Right / "yes"
    Confirm,
    /// Up
    Prev,
    /// Down
    Next,
}

/// Button release edges seen since the previous tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdges {
    pub cancel: bool,
    pub confirm: bool,
    pub prev: bool,
    pub next: bool,
}

impl ButtonEdges {
    /// No edges
    pub const NONE: ButtonEdges = ButtonEdges {
        cancel: false,
        confirm: false,
        prev: false,
        next: false,
    };

    /// Any of the four buttons had an edge
    pub fn any(&self) -> bool {
        self.cancel || self.confirm || self.prev || self.next
    }

    /// Edge on `button`
    pub fn pressed(&self, button: Button) -> bool {
        match button {
            Button::Cancel => self.cancel,
            Button::Confirm => self.confirm,
            Button::Prev => self.prev,
            Button::Next => self.next,
        }
    }

    /// Add an edge on `button`
    pub fn with(mut self, button: Button) -> Self {
        match button {
            Button::Cancel => self.cancel = true,
            Button::Confirm => self.confirm = true,
            Button::Prev => self.prev = true,
            Button::Next => self.next = true,
        }
        self
    }
}

impl From<Button> for ButtonEdges {
    fn from(button: Button) -> Self {
        ButtonEdges::NONE.with(button)
    }
}
