//! Message rendering for the three call shapes.

use std::fmt::{self, Display};

/// A message as handed to the logger, not yet rendered
///
/// - `Args`: a format template already bound to its arguments
///   (`format_args!`), substituted as-is
/// - `Values`: values joined by single spaces, no trailing separator
/// - `Line`: values joined by single spaces, followed by `'\n'`
///
/// Rendering happens only after the threshold check passes, so a suppressed
/// message costs no formatting.
#[derive(Clone, Copy)]
pub enum Message<'a>
{
    /// Direct format substitution
    Args(fmt::Arguments<'a>),
    /// Space-joined values
    Values(&'a [&'a dyn Display]),
    /// Space-joined values plus newline
    Line(&'a [&'a dyn Display]),
}

impl Display for Message<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Message::Args(args) => f.write_fmt(*args),
            Message::Values(values) => join(f, values),
            Message::Line(values) => {
                join(f, values)?;
                f.write_str("\n")
            }
        }
    }
}

impl fmt::Debug for Message<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_tuple("Message").field(&self.to_string()).finish()
    }
}

fn join(f: &mut fmt::Formatter<'_>, values: &[&dyn Display]) -> fmt::Result
{
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_args()
    {
        let name = "disk";
        assert_eq!(Message::Args(format_args!("{name} at {}%", 93)).to_string(), "disk at 93%");
    }

    #[test]
    fn test_values_joined_without_trailing_space()
    {
        assert_eq!(Message::Values(&[&"a", &1, &'c']).to_string(), "a 1 c");
        assert_eq!(Message::Values(&[]).to_string(), "");
    }

    #[test]
    fn test_line_adds_newline()
    {
        assert_eq!(Message::Line(&[&"a", &2.5]).to_string(), "a 2.5\n");
        assert_eq!(Message::Line(&[]).to_string(), "\n");
    }
}
