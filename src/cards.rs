/// The set of special symbols that parameterize pattern interpretation.
///
/// A pattern is an ordinary sequence of elements; the matcher gives three of
/// them a special meaning:
///
/// - `asterisk` matches any run of zero or more sequence elements
/// - `question_mark` matches exactly one sequence element
/// - `escape` makes the following pattern element literal
///
/// The symbols are expected to be pairwise distinct. This is not validated:
/// if they coincide, interpretation follows a fixed precedence — escape,
/// then asterisk, then question mark, then literal comparison.
///
/// # Examples
///
/// ```
/// use wildcards::Cards;
///
/// // SQL LIKE style symbols, with `!` as the escape.
/// let cards = Cards::new('%', '_', '!');
/// assert!(wildcards::matches_with("report-2024", "report-%", &cards));
/// assert!(wildcards::matches_with("a*b", "a*b", &cards)); // `*` is literal here
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cards<T> {
    pub asterisk: T,
    pub question_mark: T,
    pub escape: T,
}

impl<T> Cards<T> {
    /// Creates a configuration from the asterisk, question mark and escape
    /// symbols, in that order.
    pub const fn new(asterisk: T, question_mark: T, escape: T) -> Self {
        Self {
            asterisk,
            question_mark,
            escape,
        }
    }
}

// ---

impl Cards<char> {
    /// The conventional `*`, `?` and `\` symbols.
    pub const DEFAULT: Self = Self::new('*', '?', '\\');
}

impl Default for Cards<char> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Cards<u8> {
    /// The conventional `*`, `?` and `\` symbols, as bytes.
    pub const DEFAULT: Self = Self::new(b'*', b'?', b'\\');
}

impl Default for Cards<u8> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Cards<u16> {
    /// The conventional `*`, `?` and `\` symbols, as 16-bit code units.
    pub const DEFAULT: Self = Self::new(b'*' as u16, b'?' as u16, b'\\' as u16);
}

impl Default for Cards<u16> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Cards<u32> {
    /// The conventional `*`, `?` and `\` symbols, as 32-bit code units.
    pub const DEFAULT: Self = Self::new(b'*' as u32, b'?' as u32, b'\\' as u32);
}

impl Default for Cards<u32> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---
