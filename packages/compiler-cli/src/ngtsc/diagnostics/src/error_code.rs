/// Error codes reported by the compiler.
///
/// Codes are rendered with a `-99` prefix (see `ng_error_code`) so that formatted output
/// can tell them apart from host type checker codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `extendedDiagnostics` is configured while `strictTemplates` is disabled.
    ConfigExtendedDiagnosticsImpliesStrictTemplates = 4003,
    /// A category in `extendedDiagnostics` is not `warning`, `error` or `suppress`.
    ConfigExtendedDiagnosticsUnknownCategoryLabel = 4004,
    /// `extendedDiagnostics.checks` names a check that does not exist.
    ConfigExtendedDiagnosticsUnknownCheck = 4005,

    /// A two way binding in a template has an incorrect syntax,
    /// parentheses outside brackets. For example:
    ///
    /// ```html
    /// <div ([foo])="bar" />
    /// ```
    InvalidBananaInBox = 8101,

    /// The left side of a nullish coalescing operation is not nullable.
    ///
    /// ```html
    /// {{ foo ?? bar }}
    /// ```
    /// When the type of foo doesn't include `null` or `undefined`.
    NullishCoalescingNotNullable = 8102,
}
