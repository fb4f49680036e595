/// Open/closed state of the navigation menu.
///
/// The page keeps this in the menu's open class; `aria-expanded` on the toggle
/// mirrors it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleState {
    #[default]
    Closed,
    Open,
}

impl ToggleState {
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        match self {
            Self::Open => "true",
            Self::Closed => "false",
        }
    }
}
