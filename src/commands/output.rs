//! Dispatch outcome.
//!
//! A command either reaches an executable node, in which case the action's
//! value comes back, or it does not, in which case the NotFound diagnostic does.
//! Neither case is an error; callers match on the outcome.

use crate::grammar::NotFound;

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<R> {
    /// An executable node ran and produced this value.
    Executed(R),
    /// No executable node was reached.
    NotFound(NotFound),
}

impl<R> Dispatch<R> {
    pub fn is_executed(&self) -> bool {
        matches!(self, Self::Executed(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The action's value, if one ran.
    pub fn value(&self) -> Option<&R> {
        match self {
            Self::Executed(value) => Some(value),
            Self::NotFound(_) => None,
        }
    }

    /// The diagnostic, if nothing ran.
    pub fn not_found(&self) -> Option<&NotFound> {
        match self {
            Self::Executed(_) => None,
            Self::NotFound(diag) => Some(diag),
        }
    }

    /// Converts into a `Result`, with the diagnostic as the error side.
    pub fn into_result(self) -> std::result::Result<R, NotFound> {
        match self {
            Self::Executed(value) => Ok(value),
            Self::NotFound(diag) => Err(diag),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Dispatch<U> {
        match self {
            Self::Executed(value) => Dispatch::Executed(f(value)),
            Self::NotFound(diag) => Dispatch::NotFound(diag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executed_accessors() {
        let outcome = Dispatch::Executed("zhao".to_string());
        assert!(outcome.is_executed());
        assert_eq!(outcome.value().map(String::as_str), Some("zhao"));
        assert_eq!(outcome.not_found(), None);
        assert_eq!(outcome.into_result(), Ok("zhao".to_string()));
    }

    #[test]
    fn test_not_found_accessors() {
        let outcome: Dispatch<String> = Dispatch::NotFound(NotFound::for_token("x"));
        assert!(outcome.is_not_found());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.not_found().map(NotFound::token), Some("x"));
        assert_eq!(outcome.into_result(), Err(NotFound::for_token("x")));
    }

    #[test]
    fn test_map() {
        let outcome = Dispatch::Executed(20).map(|age| format!("{age} years"));
        assert_eq!(outcome, Dispatch::Executed("20 years".to_string()));

        let missing: Dispatch<i32> = Dispatch::NotFound(NotFound::for_token("y"));
        assert!(missing.map(|v| v + 1).is_not_found());
    }
}
