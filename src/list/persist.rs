//! Whole-list transfer to and from byte streams, files and text.
//!
//! Two formats are supported:
//! - *binary*: the raw bytes of each element, in traversal order, with no
//!   header and no length prefix. The element type must be plain old data
//!   ([`bytemuck::Pod`]), and the reader must use the same element type as the
//!   writer. Enabled by `feature = "binary"`.
//! - *text*: the [`Display`] form of each element, separated by a single
//!   space. Reading splits the input on whitespace and parses each token with
//!   [`FromStr`], stopping silently at the first token that does not parse.
//!
//! Loading always clears the destination list first.

use std::fmt::{self, Display};
use std::io::{Read, Write};
use std::str::FromStr;

use log::trace;

use crate::error::Result;
use crate::list::List;

#[cfg(feature = "binary")]
mod binary {
    use std::fs::File;
    use std::io::{self, BufReader, BufWriter, Read, Write};
    use std::path::Path;

    use bytemuck::{Pod, Zeroable};
    use log::debug;

    use crate::error::{Error, Result};
    use crate::list::List;

    fn open_failure(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
        move |source| Error::IoFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    impl<T: Pod> List<T> {
        /// Writes the raw bytes of every element to `writer`, in traversal
        /// order.
        ///
        /// # Examples
        ///
        /// ```
        /// use dlist::List;
        ///
        /// let list = List::from([1u16, 2]);
        /// let mut bytes = Vec::new();
        /// list.save_binary(&mut bytes).unwrap();
        /// assert_eq!(bytes.len(), 4);
        ///
        /// let mut loaded = List::<u16>::new();
        /// loaded.load_binary(bytes.as_slice()).unwrap();
        /// assert_eq!(loaded, list);
        /// ```
        pub fn save_binary<W: Write>(&self, mut writer: W) -> Result<()> {
            for elt in self {
                writer.write_all(bytemuck::bytes_of(elt))?;
            }
            writer.flush()?;
            Ok(())
        }

        /// Clears the list, then appends one element per fixed-size record
        /// read from `reader` until it is exhausted. Returns the new length.
        ///
        /// A trailing partial record is discarded. A zero-sized element type
        /// reads nothing.
        pub fn load_binary<R: Read>(&mut self, mut reader: R) -> Result<usize> {
            self.clear();
            if std::mem::size_of::<T>() == 0 {
                return Ok(0);
            }
            let mut record: T = Zeroable::zeroed();
            loop {
                match reader.read_exact(bytemuck::bytes_of_mut(&mut record)) {
                    Ok(()) => {
                        self.push_back(record);
                    }
                    Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                    Err(err) => return Err(err.into()),
                }
            }
            Ok(self.len())
        }

        /// Writes the list to the file at `path` in the binary format,
        /// creating or truncating it.
        ///
        /// Fails with [`Error::IoFailure`] if the file cannot be opened.
        pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
            let path = path.as_ref();
            let file = File::create(path).map_err(open_failure(path))?;
            debug!("saving {} elements to {}", self.len(), path.display());
            self.save_binary(BufWriter::new(file))
        }

        /// Replaces the content of the list with the binary records of the
        /// file at `path`. Returns the new length.
        ///
        /// The list is cleared even if the file cannot be opened, in which
        /// case [`Error::IoFailure`] is returned.
        pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
            self.clear();
            let path = path.as_ref();
            let file = File::open(path).map_err(open_failure(path))?;
            let len = self.load_binary(BufReader::new(file))?;
            debug!("loaded {} elements from {}", len, path.display());
            Ok(len)
        }
    }
}

impl<T: Display> Display for List<T> {
    /// Formats the elements separated by a single space, without a trailing
    /// separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for elt in iter {
                write!(f, " {}", elt)?;
            }
        }
        Ok(())
    }
}

impl<T> List<T> {
    /// Writes the elements to `writer` in the text format.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut out = Vec::new();
    /// list.write_text(&mut out).unwrap();
    /// assert_eq!(out, b"1 2 3");
    /// assert_eq!(list.to_string(), "1 2 3");
    /// ```
    pub fn write_text<W: Write>(&self, mut writer: W) -> Result<()>
    where
        T: Display,
    {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }

    /// Clears the list, then reads the whole of `reader` into memory and
    /// appends one element per whitespace-separated token. Returns the new
    /// length.
    ///
    /// Reading stops at the first token that is not UTF-8 or fails to parse,
    /// so the result may be partial. Only a failing `reader` is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([9, 9]);
    /// assert_eq!(list.read_text("4 5\n6".as_bytes()).unwrap(), 3);
    /// assert_eq!(list, List::from([4, 5, 6]));
    /// ```
    pub fn read_text<R: Read>(&mut self, mut reader: R) -> Result<usize>
    where
        T: FromStr,
    {
        self.clear();
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let tokens = bytes
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
            .map(|token| std::str::from_utf8(token).ok());
        self.extend_parsed(tokens);
        Ok(self.len())
    }

    /// Parses a list from whitespace-separated tokens, stopping at the first
    /// token that fails to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// assert_eq!(List::<u8>::parse_from("1 2 3"), List::from([1, 2, 3]));
    /// assert_eq!(List::<u8>::parse_from("1 two 3"), List::from([1]));
    /// ```
    pub fn parse_from(text: &str) -> Self
    where
        T: FromStr,
    {
        let mut list = List::new();
        list.extend_parsed(text.split_whitespace().map(Some));
        list
    }

    /// Appends parsed tokens until one is missing (not UTF-8) or unparsable.
    fn extend_parsed<'t, I>(&mut self, tokens: I)
    where
        T: FromStr,
        I: IntoIterator<Item = Option<&'t str>>,
    {
        for token in tokens {
            match token.map(str::parse) {
                Some(Ok(elt)) => {
                    self.push_back(elt);
                }
                Some(Err(_)) | None => {
                    trace!(
                        "stopped parsing at token {:?} after {} elements",
                        token,
                        self.len()
                    );
                    break;
                }
            }
        }
    }
}
