//! A generic wildcard pattern matching library.
//!
//! This crate decides whether a sequence is fully matched by a pattern
//! containing wildcards. It works over any element type and any equality
//! notion, not just strings: a pattern is itself just a sequence whose
//! elements are compared positionally, with three of them given a special
//! meaning.
//!
//! # Pattern Syntax
//!
//! With the default symbols:
//!
//! - `*` - Matches zero or more elements
//! - `?` - Matches exactly one element
//! - `\*`, `\?`, `\\` - Escaped literal symbols
//! - Any other element matches itself
//!
//! All three symbols are configurable through [`Cards`], so the same engine
//! serves glob-like, `LIKE`-like or entirely custom dialects.
//!
//! # Examples
//!
//! ```
//! assert!(wildcards::matches("hello.txt", "*.txt"));
//! assert!(wildcards::matches("test1.log", "test?.log"));
//! assert!(!wildcards::matches("test.log", "test?.log"));
//!
//! // Escaped wildcards
//! assert!(wildcards::matches("file*.txt", r"file\*.txt"));
//! assert!(!wildcards::matches("file123.txt", r"file\*.txt"));
//! ```
//!
//! Matching is not limited to strings; any slice works, as does any cloneable
//! iterator through [`matches_iter`]:
//!
//! ```
//! use wildcards::Cards;
//!
//! assert!(wildcards::matches(b"cafe\xc3\xa9", b"cafe*"));
//!
//! // Any element type works once the symbols are chosen.
//! let cards = Cards::new(0, -1, -2);
//! assert!(wildcards::matches_with(&[1, 2, 3][..], &[1, 0][..], &cards));
//! ```
//!
//! # Custom Symbols and Equality
//!
//! ```
//! use wildcards::Cards;
//!
//! // SQL LIKE dialect: `%` is the run wildcard, `_` matches one element.
//! let like = Cards::new('%', '_', '!');
//! assert!(wildcards::matches_with("wildcards", "wild%", &like));
//!
//! // Case-insensitive comparison through a custom predicate.
//! let eq = |s: &char, p: &char| s.eq_ignore_ascii_case(p);
//! assert!(wildcards::matches_by("README.TXT", "*.txt", &Cards::default(), eq));
//! ```
//!
//! # Const Evaluation
//!
//! The byte-slice entry points are `const fn` with the same semantics as the
//! runtime path, so verdicts can be computed at compile time:
//!
//! ```
//! const IS_IMAGE: bool = wildcards::matches_bytes(b"logo.png", b"*.png");
//! assert!(IS_IMAGE);
//! ```
//!
//! # Semantics
//!
//! A match is always total: the whole sequence must be consumed by the whole
//! pattern. There is no error channel; every call deterministically returns a
//! boolean. An escape symbol at the very end of a pattern has nothing to
//! escape and matches no element, so such a pattern only matches the
//! exhausted sequence.

// public modules
mod cards;
mod matcher;
mod sequence;

// public uses
pub use cards::Cards;
pub use matcher::{Matcher, matches, matches_by, matches_bytes, matches_bytes_with, matches_iter, matches_with};
pub use sequence::Sequence;
