// std imports
use std::collections::HashSet;
use std::fmt;

// local imports
use crate::cards::Cards;
use crate::sequence::Sequence;

// ---

/// Tests whether a sequence is fully matched by a pattern, using the default
/// symbols for the pattern's element type and identity equality.
///
/// The pattern is interpreted with the symbols of
/// [`Cards::default()`](crate::Cards): `*` matches any run of zero or more
/// elements, `?` matches exactly one element, and `\` makes the following
/// pattern element literal.
///
/// # Examples
///
/// ```
/// assert!(wildcards::matches("readme.txt", "*.txt"));
/// assert!(!wildcards::matches("readme.md", "*.txt"));
///
/// assert!(wildcards::matches("test1.log", "test?.log"));
/// assert!(!wildcards::matches("test.log", "test?.log"));
///
/// // Escaped wildcards are literal.
/// assert!(wildcards::matches("file*.txt", r"file\*.txt"));
/// assert!(!wildcards::matches("file123.txt", r"file\*.txt"));
///
/// // Byte sequences match with byte symbols.
/// assert!(wildcards::matches(b"image.png", b"*.png"));
/// ```
pub fn matches<S, P>(sequence: S, pattern: P) -> bool
where
    S: Sequence,
    P: Sequence,
    P::Item: PartialEq,
    S::Item: PartialEq<P::Item>,
    Cards<P::Item>: Default,
{
    matches_with(sequence, pattern, &Cards::default())
}

/// Tests whether a sequence is fully matched by a pattern under explicit
/// wildcard symbols, using identity equality.
///
/// # Examples
///
/// ```
/// use wildcards::Cards;
///
/// let cards = Cards::new('%', '_', '!');
/// assert!(wildcards::matches_with("anything", "%", &cards));
/// assert!(wildcards::matches_with("x?y", "x?y", &cards));
/// assert!(!wildcards::matches_with("xay", "x?y", &cards));
/// ```
pub fn matches_with<S, P>(sequence: S, pattern: P, cards: &Cards<P::Item>) -> bool
where
    S: Sequence,
    P: Sequence,
    P::Item: PartialEq,
    S::Item: PartialEq<P::Item>,
{
    matches_by(sequence, pattern, cards, |lhs, rhs| lhs == rhs)
}

/// Tests whether a sequence is fully matched by a pattern under explicit
/// wildcard symbols and a custom equality predicate.
///
/// The predicate relates sequence elements to pattern elements, which do not
/// have to be of the same type. It is invoked only for literal comparisons,
/// never for wildcard or escape steps, and it must be pure: the same position
/// pair may be compared more than once across backtracking branches.
///
/// # Examples
///
/// ```
/// use wildcards::Cards;
///
/// let eq = |s: &char, p: &char| s.eq_ignore_ascii_case(p);
/// assert!(wildcards::matches_by("README.TXT", "*.txt", &Cards::default(), eq));
/// assert!(!wildcards::matches("README.TXT", "*.txt"));
/// ```
pub fn matches_by<S, P, E>(sequence: S, pattern: P, cards: &Cards<P::Item>, eq: E) -> bool
where
    S: Sequence,
    P: Sequence,
    P::Item: PartialEq,
    E: Fn(&S::Item, &P::Item) -> bool,
{
    matches_iter(sequence.cursor(), pattern.cursor(), cards, eq)
}

/// Tests whether a sequence is fully matched by a pattern, both given as raw
/// cloneable cursors.
///
/// This is the matching engine itself, exposed for sequence shapes not
/// covered by [`Sequence`]: any `Iterator + Clone` works, with cursor cloning
/// serving as the backtracking primitive.
///
/// The evaluation is an explicit-stack search over
/// `(sequence position, pattern position, escaped)` states with revisit
/// pruning, so the cost is bounded by the product of the two lengths even for
/// pathological patterns with many adjacent asterisks.
///
/// # Examples
///
/// ```
/// use wildcards::{Cards, matches_iter};
///
/// let cards = Cards::default();
/// let sequence = "a b c".chars().filter(|c| *c != ' ');
/// assert!(matches_iter(sequence, "a?c".chars(), &cards, |s, p| s == p));
/// ```
pub fn matches_iter<S, P, E>(sequence: S, pattern: P, cards: &Cards<P::Item>, eq: E) -> bool
where
    S: Iterator + Clone,
    P: Iterator + Clone,
    P::Item: PartialEq,
    E: Fn(&S::Item, &P::Item) -> bool,
{
    let mut visited = HashSet::new();
    let mut pending = vec![State {
        s: sequence,
        p: pattern,
        si: 0,
        pi: 0,
        escaped: false,
    }];

    while let Some(State { s, p, si, pi, escaped }) = pending.pop() {
        if !visited.insert((si, pi, escaped)) {
            continue;
        }

        let mut rest = p.clone();
        let Some(card) = rest.next() else {
            // Pattern exhausted: accept iff the sequence is exhausted too.
            if s.clone().next().is_none() {
                return true;
            }
            continue;
        };

        if !escaped && card == cards.escape {
            pending.push(State {
                s,
                p: rest,
                si,
                pi: pi + 1,
                escaped: true,
            });
        } else if !escaped && card == cards.asterisk {
            // Two continuations: consume one more element, or stop consuming.
            // The latter is pushed last so it is explored first.
            let mut advanced = s.clone();
            if advanced.next().is_some() {
                pending.push(State {
                    s: advanced,
                    p,
                    si: si + 1,
                    pi,
                    escaped: false,
                });
            }
            pending.push(State {
                s,
                p: rest,
                si,
                pi: pi + 1,
                escaped: false,
            });
        } else {
            let mut s = s;
            if let Some(elem) = s.next() {
                let one = !escaped && card == cards.question_mark;
                if one || eq(&elem, &card) {
                    pending.push(State {
                        s,
                        p: rest,
                        si: si + 1,
                        pi: pi + 1,
                        escaped: false,
                    });
                }
            }
        }
    }

    false
}

struct State<S, P> {
    s: S,
    p: P,
    si: usize,
    pi: usize,
    escaped: bool,
}

// ---

/// Tests whether a byte sequence is fully matched by a byte pattern, with the
/// default `*`, `?`, `\` symbols.
///
/// Usable in constant evaluation, with verdicts identical to
/// [`matches`](crate::matches) over the same byte slices.
///
/// # Examples
///
/// ```
/// const OK: bool = wildcards::matches_bytes(b"image.png", b"*.png");
/// assert!(OK);
/// ```
pub const fn matches_bytes(sequence: &[u8], pattern: &[u8]) -> bool {
    matches_bytes_with(sequence, pattern, &Cards::<u8>::DEFAULT)
}

/// Tests whether a byte sequence is fully matched by a byte pattern under
/// explicit wildcard symbols.
///
/// Usable in constant evaluation. Unlike the runtime engine, the const
/// evaluation is a plain recursion without revisit pruning, so patterns with
/// many adjacent asterisks against long non-matching sequences can exceed the
/// const evaluation step limit.
///
/// # Examples
///
/// ```
/// use wildcards::Cards;
///
/// const CARDS: Cards<u8> = Cards::new(b'%', b'_', b'!');
/// const OK: bool = wildcards::matches_bytes_with(b"report-2024", b"report-%", &CARDS);
/// assert!(OK);
/// ```
pub const fn matches_bytes_with(sequence: &[u8], pattern: &[u8], cards: &Cards<u8>) -> bool {
    match_bytes_at(sequence, 0, pattern, 0, cards, false)
}

const fn match_bytes_at(s: &[u8], si: usize, p: &[u8], pi: usize, cards: &Cards<u8>, escaped: bool) -> bool {
    if pi == p.len() {
        return si == s.len();
    }

    let card = p[pi];

    if !escaped && card == cards.escape {
        return match_bytes_at(s, si, p, pi + 1, cards, true);
    }

    if !escaped && card == cards.asterisk {
        return match_bytes_at(s, si, p, pi + 1, cards, false)
            || (si < s.len() && match_bytes_at(s, si + 1, p, pi, cards, false));
    }

    si < s.len()
        && ((!escaped && card == cards.question_mark) || s[si] == card)
        && match_bytes_at(s, si + 1, p, pi + 1, cards, false)
}

// ---

/// A pattern bound to its wildcard symbols, reusable across match calls.
///
/// This is plain storage, not a compiled form: every call re-evaluates the
/// pattern from its raw elements, exactly like the free functions.
///
/// # Examples
///
/// ```
/// use wildcards::Matcher;
///
/// let matcher = Matcher::new("*.rs");
/// assert!(matcher.matches("main.rs"));
/// assert!(matcher.matches("lib.rs"));
/// assert!(!matcher.matches("main.txt"));
/// ```
pub struct Matcher<P>
where
    P: Sequence,
{
    pattern: P::Cursor,
    cards: Cards<P::Item>,
}

impl<P> Matcher<P>
where
    P: Sequence,
    P::Item: PartialEq,
{
    /// Creates a matcher with the default symbols for the pattern's element
    /// type.
    pub fn new(pattern: P) -> Self
    where
        Cards<P::Item>: Default,
    {
        Self::with_cards(pattern, Cards::default())
    }

    /// Creates a matcher with explicit wildcard symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcards::{Cards, Matcher};
    ///
    /// let matcher = Matcher::with_cards("h_llo", Cards::new('%', '_', '!'));
    /// assert!(matcher.matches("hello"));
    /// ```
    pub fn with_cards(pattern: P, cards: Cards<P::Item>) -> Self {
        Self {
            pattern: pattern.cursor(),
            cards,
        }
    }

    /// Tests whether the sequence is fully matched by the pattern, using
    /// identity equality.
    pub fn matches<S>(&self, sequence: S) -> bool
    where
        S: Sequence,
        S::Item: PartialEq<P::Item>,
    {
        matches_iter(sequence.cursor(), self.pattern.clone(), &self.cards, |lhs, rhs| {
            lhs == rhs
        })
    }

    /// Tests whether the sequence is fully matched by the pattern, using a
    /// custom equality predicate.
    pub fn matches_by<S, E>(&self, sequence: S, eq: E) -> bool
    where
        S: Sequence,
        E: Fn(&S::Item, &P::Item) -> bool,
    {
        matches_iter(sequence.cursor(), self.pattern.clone(), &self.cards, eq)
    }

    /// Returns the wildcard symbols this matcher interprets.
    pub fn cards(&self) -> &Cards<P::Item> {
        &self.cards
    }
}

impl<P> Clone for Matcher<P>
where
    P: Sequence,
    P::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            cards: self.cards.clone(),
        }
    }
}

impl<P> fmt::Debug for Matcher<P>
where
    P: Sequence,
    P::Cursor: fmt::Debug,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern)
            .field("cards", &self.cards)
            .finish()
    }
}

// ---
