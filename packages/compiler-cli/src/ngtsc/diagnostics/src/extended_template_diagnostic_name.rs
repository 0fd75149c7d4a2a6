use std::fmt;
use std::str::FromStr;

/// Enum holding the name of each extended template diagnostic. The name is used as a user-meaningful
/// value for configuring the diagnostic in the project's options.
///
/// See the corresponding `ErrorCode` for documentation about each specific error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtendedTemplateDiagnosticName {
    InvalidBananaInBox,
    NullishCoalescingNotNullable,
}

impl ExtendedTemplateDiagnosticName {
    pub const ALL: [ExtendedTemplateDiagnosticName; 2] =
        [Self::InvalidBananaInBox, Self::NullishCoalescingNotNullable];

    /// The name as written in `extendedDiagnostics.checks`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBananaInBox => "invalidBananaInBox",
            Self::NullishCoalescingNotNullable => "nullishCoalescingNotNullable",
        }
    }
}

impl fmt::Display for ExtendedTemplateDiagnosticName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string is not the name of any extended template diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDiagnosticName(pub String);

impl fmt::Display for UnknownDiagnosticName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown extended template diagnostic `{}`", self.0)
    }
}

impl std::error::Error for UnknownDiagnosticName {}

impl FromStr for ExtendedTemplateDiagnosticName {
    type Err = UnknownDiagnosticName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownDiagnosticName(s.to_string()))
    }
}
