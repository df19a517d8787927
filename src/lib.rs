#![warn(missing_docs, clippy::pedantic)]

//! Generates the surname fixture used to exercise hash table implementations.
//!
//! Every record pairs a sequential index with a surname drawn uniformly from
//! a [`NamePool`], and is written as one `<index> <name>` line.
//!
//! ```
//! use rand::SeedableRng;
//! use hashtable_fixture::{Fixture, NamePool};
//!
//! let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(7);
//!
//! let pool = NamePool::new(["Adamson", "Becker"]).unwrap();
//! let fixture = Fixture::new(pool, 3);
//!
//! let mut out = Vec::new();
//! assert_eq!(fixture.write_to(&mut out, &mut rng).unwrap(), 3);
//!
//! let text = String::from_utf8(out).unwrap();
//! for (i, line) in text.lines().enumerate() {
//!     let (index, name) = line.split_once(' ').unwrap();
//!     assert_eq!(index, i.to_string());
//!     assert!(name == "Adamson" || name == "Becker");
//! }
//! ```

#![allow(clippy::must_use_candidate)]

use rand::distr::{Distribution, Uniform};
use rand::Rng;
use std::collections::HashSet;
use std::error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Number of records in the reference fixture.
pub const DEFAULT_COUNT: u64 = 2_000_000;

/// File name the reference fixture is written to, relative to the current
/// directory.
pub const DEFAULT_OUTPUT: &str = "hash_table_test_data.txt";

/// Surnames of the built-in [`NamePool`], in pool order.
pub const SURNAMES: [&str; 23] = [
    "Adamson", "Becker", "Birch", "Bishop", "Boolman", "Chapman", "Clifford", "Cook", "Daniels",
    "Day", "Derrick", "Goldman", "Hawkins", "Higgins", "Kennedy", "Lawman", "Larkins", "Leman",
    "Lewin", "Little", "Otis", "Sherlock", "Samuels",
];

/// Error returned by [`NamePool::new()`].
///
/// # Examples
///
/// ```
/// use hashtable_fixture::{Error, NamePool};
///
/// let pool = NamePool::new(["Cook", "Day", "Cook"]);
/// assert_eq!(pool.err(), Some(Error::DuplicateName("Cook".to_owned())));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The pool has no names to choose from.
    EmptyPool,

    /// A name is empty or contains something other than ASCII letters.
    ///
    /// Names are restricted so that every written line matches
    /// `^\d+ [A-Za-z]+$`.
    InvalidName(String),

    /// The same name appears more than once.
    DuplicateName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => f.write_str("name pool is empty"),
            Self::InvalidName(name) => write!(f, "invalid name {name:?}: only ASCII letters are allowed"),
            Self::DuplicateName(name) => write!(f, "duplicate name {name:?}"),
        }
    }
}

impl error::Error for Error {}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

/// An ordered, immutable set of distinct names, sampled uniformly.
#[derive(Clone, Debug)]
pub struct NamePool {
    index: Uniform<usize>,
    names: Box<[Box<str>]>,
}

impl NamePool {
    /// Builds a pool from the given names, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no names, if a name is not made of ASCII
    /// letters only, or if a name is repeated.
    pub fn new<I>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names = names
            .into_iter()
            .map(|name| Into::<String>::into(name).into_boxed_str())
            .collect::<Box<[_]>>();
        if names.is_empty() {
            return Err(Error::EmptyPool);
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in names.iter() {
            if !is_valid_name(name) {
                return Err(Error::InvalidName(name.to_string()));
            }
            if !seen.insert(&**name) {
                return Err(Error::DuplicateName(name.to_string()));
            }
        }

        let index = Uniform::new(0, names.len()).map_err(|_| Error::EmptyPool)?;
        Ok(Self { index, names })
    }

    /// The built-in pool of 23 [`SURNAMES`].
    pub fn surnames() -> Self {
        Self::new(SURNAMES).expect("built-in surnames form a valid pool")
    }

    /// Number of names in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false, a pool holds at least one name.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names in pool order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }

    /// Checks whether `name` is a member of the pool.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| &**n == name)
    }

    /// Picks one name uniformly at random.
    ///
    /// Successive picks are independent and made with replacement.
    #[inline]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.names[self.index.sample(rng)]
    }
}

impl Default for NamePool {
    /// Same as [`NamePool::surnames()`].
    fn default() -> Self {
        Self::surnames()
    }
}

/// One fixture line: a sequential index and the name picked for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record<'a> {
    /// Zero-based position of the record in the fixture.
    pub index: u64,
    /// Name drawn from the pool.
    pub name: &'a str,
}

impl fmt::Display for Record<'_> {
    /// Formats the record as `<index> <name>`, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index, self.name)
    }
}

/// Iterator over the records of a [`Fixture`], created by
/// [`Fixture::records()`].
pub struct Records<'a, R: ?Sized> {
    pool: &'a NamePool,
    rng: &'a mut R,
    next: u64,
    count: u64,
}

impl<'a, R: Rng + ?Sized> Iterator for Records<'a, R> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Record<'a>> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let pool = self.pool;
        Some(Record {
            index,
            name: pool.choose(&mut *self.rng),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// A fixture of `count` records drawing names from a pool.
#[derive(Clone, Debug)]
pub struct Fixture {
    pool: NamePool,
    count: u64,
}

impl Default for Fixture {
    /// The reference fixture: [`DEFAULT_COUNT`] records over the built-in
    /// surnames.
    fn default() -> Self {
        Self::new(NamePool::surnames(), DEFAULT_COUNT)
    }
}

impl Fixture {
    /// Creates a fixture of `count` records over `pool`.
    pub fn new(pool: NamePool, count: u64) -> Self {
        Self { pool, count }
    }

    /// The pool names are drawn from.
    pub fn pool(&self) -> &NamePool {
        &self.pool
    }

    /// Number of records the fixture holds.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Lazily generates the records, indexed `0..count` in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use hashtable_fixture::{Fixture, NamePool};
    ///
    /// let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(0);
    /// let fixture = Fixture::new(NamePool::surnames(), 5);
    /// let indices = fixture.records(&mut rng).map(|r| r.index).collect::<Vec<_>>();
    /// assert_eq!(indices, [0, 1, 2, 3, 4]);
    /// ```
    pub fn records<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> Records<'a, R> {
        Records {
            pool: &self.pool,
            rng,
            next: 0,
            count: self.count,
        }
    }

    /// Writes every record as a `<index> <name>\n` line and returns the number
    /// of lines written.
    ///
    /// The writer is not buffered or flushed here.
    ///
    /// # Errors
    ///
    /// The first write error stops the run and is returned as-is.
    pub fn write_to<W: Write, R: Rng + ?Sized>(&self, mut writer: W, rng: &mut R) -> io::Result<u64> {
        let mut written = 0;
        for record in self.records(rng) {
            writeln!(writer, "{record}")?;
            written += 1;
        }
        Ok(written)
    }

    /// Creates (or truncates) the file at `path` and writes the fixture into
    /// it, returning the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the file cannot be created, written or
    /// flushed. A partially written file is left in place.
    pub fn write_file<P: AsRef<Path>, R: Rng + ?Sized>(&self, path: P, rng: &mut R) -> io::Result<u64> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!(path = %path.display(), "opened fixture file");

        let mut writer = BufWriter::new(file);
        let written = self.write_to(&mut writer, rng)?;
        writer.flush()?;
        debug!(path = %path.display(), records = written, "flushed fixture file");
        Ok(written)
    }
}
