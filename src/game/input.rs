/// A discrete input event, already decoded from the platform key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Highlight the previous choice
    CycleUp,
    /// Highlight the next choice
    CycleDown,
    /// Lock in the highlighted choice
    Confirm,
    /// Any other key press
    AnyKey,
    /// Stop the host loop; never consumed by the state machine
    Quit,
}
