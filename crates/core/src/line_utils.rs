//! Command line specific utilities.

/// Drops the first `count` arguments.
///
/// Returns an empty slice when there are not enough arguments to drop.
///
/// # Examples
///
/// ```
/// use rust_args_core::line_utils::shift_args;
///
/// let args = ["1", "2", "3"];
/// assert_eq!(shift_args(&args, 2), ["3"]);
/// assert!(shift_args(&args, 4).is_empty());
/// ```
pub fn shift_args<T>(args: &[T], count: usize) -> &[T] {
    args.get(count..).unwrap_or_default()
}

/// Drops the first argument, or returns an empty slice if there is none.
pub fn shift_arg<T>(args: &[T]) -> &[T] {
    shift_args(args, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_args() {
        let args = ["1", "2", "3"];
        assert_eq!(shift_args(&args, 0), ["1", "2", "3"]);
        assert_eq!(shift_args(&args, 1), ["2", "3"]);
        assert_eq!(shift_args(&args, 2), ["3"]);
        assert!(shift_args(&args, 3).is_empty());
        assert!(shift_args(&args, 4).is_empty());
    }

    #[test]
    fn test_shift_arg() {
        let args = ["1", "2", "3"];
        assert_eq!(shift_arg(&args), ["2", "3"]);
        assert_eq!(shift_arg(&args), shift_args(&args, 1));
        assert!(shift_arg(&args[2..]).is_empty());
        assert!(shift_arg::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_shift_empty() {
        let args: [String; 0] = [];
        assert!(shift_args(&args, 1).is_empty());
    }
}
