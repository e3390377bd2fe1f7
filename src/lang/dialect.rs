use super::ast::Direction;
use super::Color;

/// Editions of the language. They share the compiler and runtime and
/// differ only in the tables below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Two colors, compass directions after `move`, no blank lines,
    /// non-moving loops rejected at compile time.
    Binary,
    /// Eight colors branching on white or not, `up`/`down`/`left`/`right`,
    /// `while` loops, blank and label-only lines allowed.
    Palette,
}

impl Default for Dialect {
    fn default() -> Dialect {
        Dialect::Palette
    }
}

impl Dialect {
    pub fn vocabulary(self) -> &'static Vocabulary {
        match self {
            Dialect::Binary => &BINARY,
            Dialect::Palette => &PALETTE,
        }
    }
}

/// What the optimizer does with a chain of jumps that never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Leave the chain in place to spin at runtime.
    Permissive,
    /// Fail compilation.
    Strict,
}

#[derive(Debug)]
pub struct Vocabulary {
    dialect: Dialect,
    reserved: &'static [&'static str],
    colors: &'static [(&'static str, Color)],
    conditions: &'static [(&'static str, Color)],
    numbers: &'static [(i32, Color)],
    directions: &'static [(&'static str, Direction)],
    condition_noun: &'static str,
    move_word: Option<&'static str>,
    loops: bool,
    placeholders: bool,
    default_writes: bool,
    strictness: Strictness,
}

static BINARY: Vocabulary = Vocabulary {
    dialect: Dialect::Binary,
    reserved: &[
        ":", "E", "N", "S", "W", "black", "down", "east", "else", "exit", "goto", "if", "left",
        "move", "north", "repeat", "right", "south", "up", "west", "while", "white", "write",
    ],
    colors: &[("white", Color::White), ("black", Color::Black)],
    conditions: &[("white", Color::White), ("black", Color::Black)],
    numbers: &[(0, Color::White), (1, Color::Black)],
    directions: &[
        ("N", Direction::Up),
        ("north", Direction::Up),
        ("E", Direction::Right),
        ("east", Direction::Right),
        ("S", Direction::Down),
        ("south", Direction::Down),
        ("W", Direction::Left),
        ("west", Direction::Left),
    ],
    condition_noun: "color",
    move_word: Some("move"),
    loops: false,
    placeholders: false,
    default_writes: true,
    strictness: Strictness::Strict,
};

static PALETTE: Vocabulary = Vocabulary {
    dialect: Dialect::Palette,
    reserved: &[
        ":", "black", "blue", "color", "cyan", "down", "else", "exit", "goto", "green", "if",
        "left", "magenta", "nowhere", "red", "repeat", "right", "up", "while", "white", "write",
        "yellow",
    ],
    colors: &[
        ("black", Color::Black),
        ("blue", Color::Blue),
        ("cyan", Color::Cyan),
        ("green", Color::Green),
        ("magenta", Color::Magenta),
        ("red", Color::Red),
        ("white", Color::White),
        ("yellow", Color::Yellow),
    ],
    conditions: &[("white", Color::White), ("color", Color::Black)],
    numbers: &[(0, Color::White), (1, Color::Black)],
    directions: &[
        ("up", Direction::Up),
        ("down", Direction::Down),
        ("left", Direction::Left),
        ("right", Direction::Right),
    ],
    condition_noun: "condition",
    move_word: None,
    loops: true,
    placeholders: true,
    default_writes: false,
    strictness: Strictness::Permissive,
};

impl Vocabulary {
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(&word)
    }

    pub fn reserved_words(&self) -> &'static [&'static str] {
        self.reserved
    }

    /// Color after `write`. A number is only looked up as a number.
    pub fn color(&self, word: &str) -> Option<Color> {
        Self::lookup(word, self.numbers, self.colors)
    }

    /// Color after `if` or `while`.
    pub fn condition(&self, word: &str) -> Option<Color> {
        Self::lookup(word, self.numbers, self.conditions)
    }

    pub fn direction(&self, word: &str) -> Option<Direction> {
        self.directions
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, direction)| *direction)
    }

    /// Word naming the operand of `if` and `while` in error messages.
    pub fn condition_noun(&self) -> &'static str {
        self.condition_noun
    }

    /// Keyword that must precede a direction, if any.
    pub fn move_word(&self) -> Option<&'static str> {
        self.move_word
    }

    pub fn has_loops(&self) -> bool {
        self.loops
    }

    /// Whether lines without an instruction become placeholders
    /// rather than errors.
    pub fn allows_placeholders(&self) -> bool {
        self.placeholders
    }

    /// Whether an action without `write` is given the color of its slot.
    pub fn defaults_writes(&self) -> bool {
        self.default_writes
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    fn lookup(
        word: &str,
        numbers: &[(i32, Color)],
        names: &[(&'static str, Color)],
    ) -> Option<Color> {
        match word.parse::<i32>() {
            Ok(n) => numbers.iter().find(|(k, _)| *k == n).map(|(_, c)| *c),
            Err(_) => names.iter().find(|(k, _)| *k == word).map(|(_, c)| *c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_and_conditions() {
        let v = Dialect::Palette.vocabulary();
        assert_eq!(v.color("magenta"), Some(Color::Magenta));
        assert_eq!(v.color("1"), Some(Color::Black));
        assert_eq!(v.color("2"), None);
        assert_eq!(v.color("color"), None);
        assert_eq!(v.condition("color"), Some(Color::Black));
        assert_eq!(v.condition("red"), None);
        assert_eq!(v.direction("left"), Some(Direction::Left));
        assert_eq!(v.direction("nowhere"), None);
        assert!(v.is_reserved("nowhere"));
        assert!(!v.is_reserved("start"));
    }

    #[test]
    fn test_binary_compass() {
        let v = Dialect::Binary.vocabulary();
        assert_eq!(v.direction("N"), Some(Direction::Up));
        assert_eq!(v.direction("west"), Some(Direction::Left));
        assert_eq!(v.direction("up"), None);
        assert_eq!(v.color("red"), None);
        assert_eq!(v.move_word(), Some("move"));
        assert_eq!(v.strictness(), Strictness::Strict);
        assert!(v.is_reserved("up"));
    }

    #[test]
    fn test_reserved_words_are_sorted() {
        for dialect in [Dialect::Binary, Dialect::Palette].iter() {
            let words = dialect.vocabulary().reserved_words();
            assert!(words.windows(2).all(|w| w[0] < w[1]), "{:?}", dialect);
        }
    }
}
