/// The eight recognized instructions.
///
/// Every other character of a program is a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Increment,   // +
    Decrement,   // -
    ShiftLeft,   // <
    ShiftRight,  // >
    Output,      // .
    Input,       // ,
    LoopStart,   // [
    LoopEnd,     // ]
}

impl Instruction {
    /// Map a program character to its instruction, or `None` for inert characters.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Increment),
            '-' => Some(Self::Decrement),
            '<' => Some(Self::ShiftLeft),
            '>' => Some(Self::ShiftRight),
            '.' => Some(Self::Output),
            ',' => Some(Self::Input),
            '[' => Some(Self::LoopStart),
            ']' => Some(Self::LoopEnd),
            _ => None,
        }
    }
}
