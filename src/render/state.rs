// Loading state for page sections.
// Each section moves Loading -> Loaded or Error; terminal states stay put
// until a fresh invocation restarts the sequence.

/// Loading state for one page section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SectionState<T> {
    /// Section not yet requested.
    #[default]
    Idle,
    /// Request in flight; loading indicator visible.
    Loading,
    /// Section markup ready.
    Loaded(T),
    /// Load failed; error block visible.
    Error(String),
}

impl<T> SectionState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SectionState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SectionState::Error(_))
    }

    /// The loaded value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            SectionState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}
