/// Pixel value. The binary dialect only ever sees `White` and `Black`.
/// Branching looks at one bit: white or not white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::White,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
    ];

    pub fn is_white(self) -> bool {
        self == Color::White
    }

    pub fn name(self) -> &'static str {
        use Color::*;
        match self {
            White => "white",
            Black => "black",
            Red => "red",
            Green => "green",
            Blue => "blue",
            Cyan => "cyan",
            Magenta => "magenta",
            Yellow => "yellow",
        }
    }

    /// Letter used by the text canvas format.
    pub fn to_char(self) -> char {
        use Color::*;
        match self {
            White => '.',
            Black => '#',
            Red => 'r',
            Green => 'g',
            Blue => 'b',
            Cyan => 'c',
            Magenta => 'm',
            Yellow => 'y',
        }
    }

    pub fn from_char(ch: char) -> Option<Color> {
        use Color::*;
        match ch {
            '.' | 'w' => Some(White),
            '#' | 'k' => Some(Black),
            'r' => Some(Red),
            'g' => Some(Green),
            'b' => Some(Blue),
            'c' => Some(Cyan),
            'm' => Some(Magenta),
            'y' => Some(Yellow),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::White
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
