//! Request argument validation
//!
//! Pure, fail-fast predicate checks shared by every endpoint method. All
//! checks run before a request is built; the first violated check returns
//! `Error::InvalidArgument` and nothing touches the network.

use crate::error::{Error, Result};

/// Maximum number of identifiers accepted by any list-valued parameter
pub(crate) const MAX_COLLECTION_SIZE: usize = 100;

/// Maximum number of objects a single page may request
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// Reject identifier lists longer than 100 entries.
///
/// `name` is the human-readable parameter description used in the error,
/// e.g. `"Game IDs"`.
pub(crate) fn check_id_limit(name: &str, ids: Option<&[String]>) -> Result<()> {
    if let Some(ids) = ids {
        if ids.len() > MAX_COLLECTION_SIZE {
            return Err(Error::invalid_argument(format!(
                "Maximum of 100 {name} can be supplied"
            )));
        }
    }
    Ok(())
}

/// Reject Helix page sizes above 100. Zero is legal and passes through.
pub(crate) fn check_page_size(page_size: u32) -> Result<()> {
    if page_size > MAX_PAGE_SIZE {
        return Err(Error::invalid_argument(
            "Maximum number of objects to return is 100",
        ));
    }
    Ok(())
}

/// Reject v5 limits above 100. Zero is legal and passes through.
pub(crate) fn check_limit(limit: u32) -> Result<()> {
    if limit > MAX_PAGE_SIZE {
        return Err(Error::invalid_argument(
            "Maximum number of objects returned in one request is 100",
        ));
    }
    Ok(())
}

/// Reject values outside a fixed valid set, enumerating the set in the error.
pub(crate) fn check_enum(name: &str, value: &str, valid: &[&str]) -> Result<()> {
    if !valid.contains(&value) {
        return Err(Error::invalid_argument(format!(
            "Invalid value for {name}. Valid values are {valid:?}"
        )));
    }
    Ok(())
}

/// Require at least one of a set of optional parameters to be present.
///
/// Each entry pairs the parameter name with whether the caller supplied it.
pub(crate) fn require_one_of(params: &[(&str, bool)]) -> Result<()> {
    if params.iter().any(|(_, present)| *present) {
        return Ok(());
    }
    let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
    Err(Error::invalid_argument(format!(
        "At least one of the following parameters must be provided [{}]",
        names.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PERIODS;
    use test_case::test_case;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test_case(100 => true; "at the limit")]
    #[test_case(101 => false; "over the limit")]
    #[test_case(0 => true; "empty list")]
    fn id_limit_cases(n: usize) -> bool {
        check_id_limit("Game IDs", Some(&ids(n))).is_ok()
    }

    #[test]
    fn test_id_limit_absent_list_passes() {
        assert!(check_id_limit("Game IDs", None).is_ok());
    }

    #[test]
    fn test_id_limit_message_names_the_parameter() {
        let err = check_id_limit("User login names", Some(&ids(101))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Maximum of 100 User login names can be supplied"
        );
    }

    #[test_case(100 => true; "at the limit")]
    #[test_case(101 => false; "over the limit")]
    #[test_case(0 => true; "zero passes through")]
    fn page_size_cases(page_size: u32) -> bool {
        check_page_size(page_size).is_ok()
    }

    #[test_case(100 => true; "at the limit")]
    #[test_case(101 => false; "over the limit")]
    fn limit_cases(limit: u32) -> bool {
        check_limit(limit).is_ok()
    }

    #[test]
    fn test_enum_rejects_unknown_value() {
        let err = check_enum("period", "decade", &PERIODS).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid value for period."));
        // The error must enumerate the valid set.
        for valid in PERIODS {
            assert!(message.contains(valid), "missing {valid} in: {message}");
        }
    }

    #[test]
    fn test_enum_accepts_member() {
        assert!(check_enum("period", "week", &PERIODS).is_ok());
    }

    #[test]
    fn test_require_one_of() {
        assert!(require_one_of(&[("from_id", true), ("to_id", false)]).is_ok());

        let err = require_one_of(&[
            ("broadcaster_id", false),
            ("clip_ids", false),
            ("game_id", false),
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one of the following parameters must be provided \
             [broadcaster_id, clip_ids, game_id]"
        );
    }
}
