use core::fmt::{Display, Formatter, Result};
use std::error::Error;

/// Error returned by the selection entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The requested rank does not address an element of the buffer.
    InvalidArgument {
        /// Rank that was asked for. Widened so signed and unsigned callers
        /// are both reported exactly.
        k: i128,
        /// Length of the buffer.
        len: usize,
    },
}

impl SelectError {
    pub(crate) fn out_of_range(k: i128, len: usize) -> Self {
        Self::InvalidArgument { k, len }
    }
}

impl Display for SelectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument { k, len } if *len == 0 => {
                write!(f, "invalid argument: k = {k} but the buffer is empty")
            }
            Self::InvalidArgument { k, len } => write!(
                f,
                "invalid argument: k = {k} is out of range [0, {}]",
                len - 1
            ),
        }
    }
}

impl Error for SelectError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SelectError::out_of_range(5, 5).to_string(),
            "invalid argument: k = 5 is out of range [0, 4]"
        );
        assert_eq!(
            SelectError::out_of_range(-1, 3).to_string(),
            "invalid argument: k = -1 is out of range [0, 2]"
        );
        assert_eq!(
            SelectError::out_of_range(0, 0).to_string(),
            "invalid argument: k = 0 but the buffer is empty"
        );
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn Error> = Box::new(SelectError::out_of_range(9, 1));
        assert!(err.source().is_none());
    }
}
