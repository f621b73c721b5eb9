//! The set of user commands the key layer can produce.

/// A user intent, independent of which key produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextPage,
    PrevPage,
    Reset,
    FocusSearch,
    CycleFocus,
    /// Leave the search box without searching
    LeaveInput,
    InputChar(char),
    Backspace,
    SubmitSearch,
    SelectNext,
    SelectPrev,
    /// Toggle favorite of the selected row (or remove it in the favorites panel)
    ToggleSelected,
    OpenImage,
    DismissAlert,
    /// Key had no binding
    None,
}
