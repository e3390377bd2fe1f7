use super::{Color, ExitStatus, LineIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Nowhere,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn name(self) -> &'static str {
        use Direction::*;
        match self {
            Nowhere => "nowhere",
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        }
    }
}

impl Default for Direction {
    fn default() -> Direction {
        Direction::Nowhere
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Jump target as written in the source, before labels are linked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Goto {
    Line(LineIndex),
    Label(String),
    Exit(ExitStatus),
}

/// Linked jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Jump(LineIndex),
    Exit(ExitStatus),
}

impl Target {
    pub fn is_exit(self) -> bool {
        matches!(self, Target::Exit(_))
    }

    pub fn line(self) -> Option<LineIndex> {
        match self {
            Target::Jump(line) => Some(line),
            Target::Exit(_) => None,
        }
    }

    /// Single integer form: line indices are non-negative and an exit
    /// status `s` is stored as `-s - 1`.
    pub fn to_packed(self) -> i64 {
        match self {
            Target::Jump(line) => line as i64,
            Target::Exit(status) => -(status as i64) - 1,
        }
    }

    /// `None` when the line or status does not fit its type.
    pub fn from_packed(packed: i64) -> Option<Target> {
        if packed >= 0 {
            LineIndex::try_from(packed).ok().map(Target::Jump)
        } else {
            ExitStatus::try_from(-(packed + 1)).ok().map(Target::Exit)
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Target::Jump(line) => write!(f, "goto {}", line + 1),
            Target::Exit(status) => write!(f, "exit {}", status),
        }
    }
}

/// What happens when the cursor is over one class of pixel.
/// `write` of `None` leaves the pixel as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action<T = Target> {
    pub write: Option<Color>,
    pub direction: Direction,
    pub target: T,
}

impl<T> Action<T> {
    pub fn new(target: T) -> Action<T> {
        Action {
            write: None,
            direction: Direction::Nowhere,
            target,
        }
    }

    pub fn is_still(&self) -> bool {
        self.direction == Direction::Nowhere
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(color) = self.write {
            write!(f, "write {} ", color)?;
        }
        if !self.is_still() {
            write!(f, "{} ", self.direction)?;
        }
        write!(f, "{}", self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Only a label or a comment; never executed after collapsing.
    Nothing,
    Unconditional,
    Conditional,
}

/// Which of the two actions of an instruction applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    White,
    Color,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::White, Slot::Color];

    pub fn of(color: Color) -> Slot {
        if color.is_white() {
            Slot::White
        } else {
            Slot::Color
        }
    }

    /// Stand-in pixel for the slot when the real one is not known.
    pub fn color(self) -> Color {
        match self {
            Slot::White => Color::White,
            Slot::Color => Color::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instruction<T = Target> {
    pub white: Action<T>,
    pub color: Action<T>,
    pub kind: Kind,
}

impl<T> Instruction<T> {
    pub fn action(&self, slot: Slot) -> &Action<T> {
        match slot {
            Slot::White => &self.white,
            Slot::Color => &self.color,
        }
    }

    pub fn action_mut(&mut self, slot: Slot) -> &mut Action<T> {
        match slot {
            Slot::White => &mut self.white,
            Slot::Color => &mut self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_targets() {
        assert_eq!(Target::Jump(7).to_packed(), 7);
        assert_eq!(Target::Exit(0).to_packed(), -1);
        assert_eq!(Target::Exit(3).to_packed(), -4);
        assert_eq!(Target::from_packed(-1), Some(Target::Exit(0)));
        assert_eq!(Target::from_packed(-3), Some(Target::Exit(2)));
        assert_eq!(Target::from_packed(0), Some(Target::Jump(0)));
        let largest = Target::Exit(ExitStatus::MAX);
        assert_eq!(Target::from_packed(largest.to_packed()), Some(largest));
        assert_eq!(Target::from_packed(largest.to_packed() - 1), None);
        assert_eq!(Target::from_packed(i64::MIN), None);
    }

    #[test]
    fn test_action_display() {
        let mut action = Action::new(Target::Jump(0));
        assert_eq!(action.to_string(), "goto 1");
        action.write = Some(Color::Black);
        action.direction = Direction::Right;
        assert_eq!(action.to_string(), "write black right goto 1");
        action.target = Target::Exit(2);
        action.write = None;
        assert_eq!(action.to_string(), "right exit 2");
    }

    #[test]
    fn test_slot_of_color() {
        assert_eq!(Slot::of(Color::White), Slot::White);
        assert_eq!(Slot::of(Color::Red), Slot::Color);
        assert_eq!(Slot::of(Slot::Color.color()), Slot::Color);
    }
}
