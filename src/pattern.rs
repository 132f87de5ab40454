//! Runtime swizzle patterns.
//!
//! The static accessors cover every selection known when the program is
//! compiled. A [`Pattern`] is the same selection syntax as OpenCL C
//! (`xyzw`, `rgba`, `s0123`, `S7f`) parsed from a string at runtime, for
//! selections which come from configuration, a kernel source or a user.
//!
//! Patterns read and write exactly like the static views: the source is
//! gathered completely before anything is written, and repeated indexes are
//! written in list order.
//!
//! ```
//! use ocl_swizzle::prm::Int4;
//! use ocl_swizzle::Pattern;
//!
//! let pat: Pattern = "wzx".parse().unwrap();
//! let mut v = Int4::new(1, 2, 3, 4);
//! assert_eq!(pat.gather(&v).unwrap(), vec![4, 3, 1]);
//!
//! pat.scatter(&mut v, &[0, 0, 9]).unwrap();
//! assert_eq!(v, Int4::new(9, 2, 0, 0));
//! ```

use std::fmt;
use std::str::FromStr;
use tracing::debug;
use crate::error::{Error, Result};
use crate::{Scalar, Vector};

const POSITIONAL: [char; 4] = ['x', 'y', 'z', 'w'];
const COLOR: [char; 4] = ['r', 'g', 'b', 'a'];
const HEX: [char; 16] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'a', 'b', 'c', 'd', 'e', 'f'];

/// A component naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `x`, `y`, `z`, `w`. Vectors of up to 4 lanes.
    Positional,
    /// `r`, `g`, `b`, `a`. Vectors of up to 4 lanes.
    Color,
    /// `s0` through `sF`. Vectors of any width.
    Hex,
}

impl Family {
    pub fn name(&self) -> &'static str {
        match *self {
            Family::Positional => "xyzw",
            Family::Color => "rgba",
            Family::Hex => "sN",
        }
    }

    /// The widest vector this family can name every lane of.
    pub fn max_width(&self) -> usize {
        match *self {
            Family::Positional | Family::Color => 4,
            Family::Hex => 16,
        }
    }

    fn letter(&self, idx: usize) -> char {
        match *self {
            Family::Positional => POSITIONAL[idx],
            Family::Color => COLOR[idx],
            Family::Hex => HEX[idx],
        }
    }

    fn of_letter(c: char) -> Option<(Family, usize)> {
        if let Some(idx) = POSITIONAL.iter().position(|&l| l == c) {
            Some((Family::Positional, idx))
        } else {
            COLOR.iter().position(|&l| l == c).map(|idx| (Family::Color, idx))
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A swizzle selection parsed at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    family: Family,
    indices: Vec<usize>,
}

impl Pattern {
    /// Parses a component list: a run of `xyzw` letters, a run of `rgba`
    /// letters, or `s`/`S` followed by hex digits.
    pub fn parse(src: &str) -> Result<Pattern> {
        Pattern::parse_inner(src).map_err(|err| {
            debug!(pattern = src, %err, "rejected swizzle pattern");
            err
        })
    }

    fn parse_inner(src: &str) -> Result<Pattern> {
        let mut chars = src.chars();

        let (family, indices) = match chars.clone().next() {
            None => return Err(Error::EmptyPattern),
            Some('s') | Some('S') => {
                chars.next();
                let indices = chars
                    .map(|c| c.to_digit(16).map(|d| d as usize).ok_or(Error::UnknownComponent(c)))
                    .collect::<Result<Vec<_>>>()?;
                if indices.is_empty() {
                    return Err(Error::EmptyPattern);
                }
                (Family::Hex, indices)
            },
            Some(_) => {
                let mut family = None;
                let mut indices = Vec::with_capacity(4);
                for c in chars {
                    let (fam, idx) = Family::of_letter(c).ok_or(Error::UnknownComponent(c))?;
                    match family {
                        None => family = Some(fam),
                        Some(f) if f != fam => return Err(Error::MixedFamilies(src.to_owned())),
                        Some(_) => (),
                    }
                    indices.push(idx);
                }
                match family {
                    Some(family) => (family, indices),
                    None => return Err(Error::EmptyPattern),
                }
            },
        };

        let len = indices.len();
        let valid_len = match family {
            Family::Hex => matches!(len, 1 | 2 | 3 | 4 | 8 | 16),
            Family::Positional | Family::Color => len <= 4,
        };
        if !valid_len {
            return Err(Error::PatternLength(len));
        }

        Ok(Pattern { family, indices })
    }

    /// The selected lane indexes, in order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The number of selected components.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false: an empty pattern does not parse.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Checks that this pattern can be applied to a vector of `width` lanes.
    pub fn check(&self, width: usize) -> Result<()> {
        let res = if width > self.family.max_width() {
            Err(Error::FamilyWidth { family: self.family.name(), width })
        } else {
            match self.indices.iter().find(|&&idx| idx >= width) {
                Some(&index) => Err(Error::OutOfRange { index, width }),
                None => Ok(()),
            }
        };

        if let Err(ref err) = res {
            debug!(pattern = %self, width, %err, "swizzle pattern does not fit vector");
        }
        res
    }

    /// Reads the selected lanes of `vec`.
    pub fn gather<T: Scalar, const N: usize>(&self, vec: &Vector<T, N>) -> Result<Vec<T>> {
        self.check(N)?;
        Ok(self.indices.iter().map(|&idx| vec[idx]).collect())
    }

    /// Writes `values` into the selected lanes of `vec`, in pattern order.
    pub fn scatter<T: Scalar, const N: usize>(&self, vec: &mut Vector<T, N>, values: &[T])
            -> Result<()> {
        self.check(N)?;
        if values.len() != self.indices.len() {
            debug!(pattern = %self, found = values.len(), "swizzle pattern arity mismatch");
            return Err(Error::Arity { expected: self.indices.len(), found: values.len() });
        }
        for (&idx, &val) in self.indices.iter().zip(values.iter()) {
            vec[idx] = val;
        }
        Ok(())
    }

    /// Performs `vec.<self> = vec.<src>`. The source is read completely
    /// before anything is written.
    pub fn assign_from<T: Scalar, const N: usize>(&self, vec: &mut Vector<T, N>, src: &Pattern)
            -> Result<()> {
        let values = src.gather(vec)?;
        self.scatter(vec, &values)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(src: &str) -> Result<Pattern> {
        Pattern::parse(src)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.family == Family::Hex {
            f.write_str("s")?;
        }
        for &idx in self.indices.iter() {
            write!(f, "{}", self.family.letter(idx))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        let pat = Pattern::parse("zyx").unwrap();
        assert_eq!(pat.family(), Family::Positional);
        assert_eq!(pat.indices(), &[2, 1, 0]);
        assert_eq!(Pattern::parse("abgr").unwrap().indices(), &[3, 2, 1, 0]);
    }

    #[test]
    fn hex() {
        let pat = Pattern::parse("S0aF").unwrap();
        assert_eq!(pat.family(), Family::Hex);
        assert_eq!(pat.indices(), &[0, 10, 15]);
        assert_eq!(pat.to_string(), "s0af");
    }

    #[test]
    fn rejected() {
        assert_eq!(Pattern::parse(""), Err(Error::EmptyPattern));
        assert_eq!(Pattern::parse("s"), Err(Error::EmptyPattern));
        assert_eq!(Pattern::parse("xq"), Err(Error::UnknownComponent('q')));
        assert_eq!(Pattern::parse("s1g"), Err(Error::UnknownComponent('g')));
        assert_eq!(Pattern::parse("xg"), Err(Error::MixedFamilies("xg".to_owned())));
        assert_eq!(Pattern::parse("xyzwx"), Err(Error::PatternLength(5)));
        assert_eq!(Pattern::parse("s01234"), Err(Error::PatternLength(5)));
    }

    #[test]
    fn widths() {
        let pat = Pattern::parse("s7").unwrap();
        assert!(pat.check(8).is_ok());
        assert_eq!(pat.check(4), Err(Error::OutOfRange { index: 7, width: 4 }));
        assert_eq!(Pattern::parse("x").unwrap().check(8),
            Err(Error::FamilyWidth { family: "xyzw", width: 8 }));
    }
}
