/// Events the button reports to its targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// A single finger touched the button.
    TouchDown,
    /// The press ended before recognition, or was rejected.
    TouchCancel,
    /// The minimum duration elapsed; the progress bar starts filling.
    ValueChanged,
    /// The press was held for the full required duration.
    PrimaryActionTriggered,
}
