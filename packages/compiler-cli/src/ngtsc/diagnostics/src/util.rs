use super::error_code::ErrorCode;
use regex::Regex;
use std::sync::LazyLock;

static ERROR_CODE_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\x1b\[\d+m ?)TS-99(\d+: ?\x1b\[\d+m)").expect("error code pattern is valid")
});

/// During formatting of diagnostics, the numeric code of each diagnostic is prefixed with the
/// hard-coded "TS" prefix. For Angular's own error codes, a prefix of "NG" is desirable. To achieve
/// this, all Angular error codes start with "-99" so that the sequence "TS-99" can be assumed to
/// correspond with an Angular specific error code. This function replaces those occurrences with
/// just "NG".
pub fn replace_ts_with_ng_in_errors(errors: &str) -> String {
    ERROR_CODE_MATCHER
        .replace_all(errors, "${1}NG${2}")
        .into_owned()
}

/// The numeric code reported for `code`: its digits behind a `-99` prefix, so
/// `InvalidBananaInBox` (8101) becomes `-998101`.
pub fn ng_error_code(code: ErrorCode) -> i32 {
    let value = code as i32;
    let mut scale = 1;
    while scale <= value {
        scale *= 10;
    }
    -(99 * scale + value)
}
