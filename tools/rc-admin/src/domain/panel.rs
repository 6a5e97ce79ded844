//! Management panels of the admin surface.

/// One selectable management surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Classrooms,
    Teachers,
    RingHistory,
    Backend,
}

impl Panel {
    /// All panels in display order.
    pub const ALL: [Panel; 4] = [
        Panel::Classrooms,
        Panel::Teachers,
        Panel::RingHistory,
        Panel::Backend,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Classrooms => "Classrooms",
            Panel::Teachers => "Teachers",
            Panel::RingHistory => "Ring History",
            Panel::Backend => "Backend",
        }
    }

    /// Selection hotkey.
    pub fn hotkey(&self) -> char {
        match self {
            Panel::Classrooms => '1',
            Panel::Teachers => '2',
            Panel::RingHistory => '3',
            Panel::Backend => '4',
        }
    }

    /// Panel for a pressed hotkey.
    pub fn from_hotkey(c: char) -> Option<Panel> {
        Panel::ALL.iter().copied().find(|p| p.hotkey() == c)
    }

    /// Whether rows in this panel can be created and deleted.
    pub fn is_editable(&self) -> bool {
        matches!(self, Panel::Classrooms | Panel::Teachers)
    }
}
