//! Turn loosely formatted command-line text into rectangles of barren land.
//!
//! Rectangles are given as groups of four integers, `x1 y1 x2 y2`, naming two
//! opposite corners. The punctuation around them is forgiving: all of these
//! describe the same two rectangles.
//!
//! ```text
//! {"48 192 351 207", "48 392 351 407"}
//! 48 192 351 207 48 392 351 407
//! 48,192,351,207 {48 392 351 407}
//! ```

use failure::Fail;
use itertools::Itertools;
use regex::Regex;

use crate::grid::Rect;

/// The most cells a field may have. Each cell takes two bytes.
pub const MAX_CELLS: usize = 1 << 28;

lazy_static! {
    static ref IGNORED: Regex = Regex::new(r#"[{}"]"#).unwrap();
    static ref ALL_NUMERIC: Regex = Regex::new(r"^[0-9\s]*$").unwrap();
    static ref NUMBER: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// A reason to reject the barren land description.
#[derive(Clone, Debug, Eq, Fail, PartialEq)]
pub enum InputError {
    #[fail(display = "Bad input. Sequence of 4 positive integers needed for each barren area.")]
    NotNumeric,

    #[fail(
        display = "Bad arguments: four integer values needed for each segment of barren land, but {} were given.",
        count
    )]
    NotMultipleOfFour { count: usize },

    #[fail(display = "Bad arguments: {} is too large to be a coordinate.", digits)]
    Overflow { digits: String },

    #[fail(
        display = "Bad arguments: barren land must have x < {} and y < {}, but got {} {} {} {}.",
        width, height, x1, y1, x2, y2
    )]
    OutOfBounds {
        width: usize,
        height: usize,
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    },

    #[fail(
        display = "Bad arguments: a {} by {} field is larger than the limit of {} cells.",
        width, height, limit
    )]
    TooLarge {
        width: usize,
        height: usize,
        limit: usize,
    },

    #[fail(
        display = "Bad arguments: barren land {} {} {} {} must give its lower-left corner first.",
        x1, y1, x2, y2
    )]
    Inverted {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    },
}

/// Join `words` into a single string of digits and whitespace, discarding
/// braces and quotes and treating commas as spaces.
pub fn normalize<S: AsRef<str>>(words: &[S]) -> Result<String, InputError> {
    let joined = words.iter().map(AsRef::as_ref).join(" ");
    let text = IGNORED.replace_all(&joined, "").replace(',', " ");
    if !ALL_NUMERIC.is_match(&text) {
        return Err(InputError::NotNumeric);
    }
    Ok(text)
}

/// Parse `words` as a list of rectangles, in the order given.
///
/// This checks only the form of the input. Use `validate` to check the
/// rectangles against the field they are meant for.
pub fn parse_rects<S: AsRef<str>>(words: &[S]) -> Result<Vec<Rect>, InputError> {
    let text = normalize(words)?;
    let digits: Vec<&str> = NUMBER.find_iter(&text).map(|m| m.as_str()).collect();
    if digits.len() % 4 != 0 {
        return Err(InputError::NotMultipleOfFour {
            count: digits.len(),
        });
    }

    let numbers = digits
        .iter()
        .map(|d| {
            d.parse::<usize>().map_err(|_| InputError::Overflow {
                digits: d.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(numbers
        .chunks(4)
        .map(|c| Rect::new(c[0], c[1], c[2], c[3]))
        .collect())
}

/// Check that a `width` by `height` field is small enough to allocate.
pub fn check_size(width: usize, height: usize) -> Result<(), InputError> {
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(InputError::TooLarge {
            width,
            height,
            limit: MAX_CELLS,
        }),
    }
}

/// Check that every rectangle in `rects` lies within a `width` by `height`
/// field and has its corners in order. Report the first one that doesn't.
pub fn validate(rects: &[Rect], width: usize, height: usize) -> Result<(), InputError> {
    for rect in rects {
        let &Rect { x1, y1, x2, y2 } = rect;
        if x1.max(x2) >= width || y1.max(y2) >= height {
            return Err(InputError::OutOfBounds {
                width,
                height,
                x1,
                y1,
                x2,
                y2,
            });
        }
        if !rect.fits(width, height) {
            return Err(InputError::Inverted { x1, y1, x2, y2 });
        }
    }
    Ok(())
}
