
mod test_accounts;

use anchor_lang::prelude::*;

/// Asserts that `result` failed with `expected`, comparing error codes only.
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: impl Into<anchor_lang::error::Error>) {
    let err = result.expect_err("call should have failed");
    let expected: anchor_lang::error::Error = expected.into();
    assert_eq!(err, expected);
}
