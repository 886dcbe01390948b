/// An instruction attached to a node, executed by a vehicle passing it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change travel speed to the given value.
    ChangeSpeed(f64),
    /// Switch the vehicle into a named mode.
    SetMode(String),
}
