//! Password resolution against the users sheet.
//!
//! Passwords in the sheet are plaintext by design: the sheet is the single
//! source of truth maintained by the seller, and handing out one unique
//! password per buyer is the whole access model. Comparison is exact -
//! case-sensitive, no trimming, no hashing.

use crate::types::{Identity, Sheet};

/// Header of the display-name column in the users sheet.
pub const NAME_COLUMN: &str = "Name";
/// Header of the password column in the users sheet.
pub const PASSWORD_COLUMN: &str = "Password";

/// Resolve a submitted password to an identity.
///
/// The master password, when configured, is checked first and wins even if
/// some sheet row carries the same value. Otherwise the users sheet is
/// scanned top to bottom and the first row whose password cell matches
/// exactly resolves to that row's name. Duplicate passwords are tolerated;
/// the earlier row wins silently.
///
/// Returns `None` when nothing matches - including when the sheet is empty
/// or lacks the `Name`/`Password` columns. A malformed users sheet reads as
/// "no such user", never as an error.
#[must_use]
pub fn authenticate(password: &str, master: Option<&str>, users: &Sheet) -> Option<Identity> {
    if let Some(master) = master
        && password == master
    {
        return Some(Identity::Master);
    }

    let name_col = users.column(NAME_COLUMN)?;
    let password_col = users.column(PASSWORD_COLUMN)?;

    users
        .rows()
        .iter()
        .find(|row| row.get(password_col).is_some_and(|cell| cell == password))
        .and_then(|row| row.get(name_col))
        .map(|name| Identity::Buyer(name.clone()))
}
