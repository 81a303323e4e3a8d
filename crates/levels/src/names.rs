//! crates/levels/src/names.rs
//! Process-wide table of custom level names.

use std::collections::BTreeMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::level::parse_generic_name;
use crate::{LevelError, Severity};

const NOTSET_NAME: &str = "NOTSET";

fn custom_names() -> &'static RwLock<BTreeMap<u8, String>> {
    static NAMES: OnceLock<RwLock<BTreeMap<u8, String>>> = OnceLock::new();
    NAMES.get_or_init(|| RwLock::new(BTreeMap::new()))
}

fn builtin_name(rank: u8) -> Option<&'static str> {
    if rank == 0 {
        return Some(NOTSET_NAME);
    }
    Severity::from_rank(rank).map(Severity::name)
}

/// Returns the display name for `rank`.
///
/// Built-in names win, then names registered through
/// [`register_level_name`], and finally the generic `Level N` form. The
/// lookup never fails.
///
/// ```
/// assert_eq!(levels::name_of(40), "ERROR");
/// assert_eq!(levels::name_of(3), "Level 3");
/// ```
#[must_use]
pub fn name_of(rank: u8) -> String {
    if let Some(name) = builtin_name(rank) {
        return name.to_owned();
    }

    let names = custom_names().read().unwrap_or_else(PoisonError::into_inner);
    names
        .get(&rank)
        .cloned()
        .unwrap_or_else(|| format!("Level {rank}"))
}

/// Reports whether `rank` has a built-in or registered name.
#[must_use]
pub fn is_known(rank: u8) -> bool {
    builtin_name(rank).is_some()
        || custom_names()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&rank)
}

/// Resolves a level name to its rank, ignoring ASCII case.
#[must_use]
pub fn rank_of(name: &str) -> Option<u8> {
    let name = name.trim();
    if name.eq_ignore_ascii_case(NOTSET_NAME) {
        return Some(0);
    }
    if let Some(severity) = Severity::from_name(name) {
        return Some(severity.rank());
    }

    custom_names()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|(_, registered)| registered.eq_ignore_ascii_case(name))
        .map(|(rank, _)| *rank)
}

/// Assigns a display name to a rank without a built-in name.
///
/// Registering the same rank again replaces the previous name. Built-in ranks
/// (0, 1, 10, 20, 25, 30, 40, 50, 99) are rejected so the conventional levels
/// are never renumbered, as are names already used by another rank and names
/// such as `30` or `Level 5` that parse as a rank.
///
/// ```
/// use levels::{Level, register_level_name};
///
/// register_level_name(15, "VERBOSE")?;
/// assert_eq!(Level::new(15).name(), "VERBOSE");
/// assert_eq!("verbose".parse::<Level>()?, Level::new(15));
/// assert!(register_level_name(20, "CHATTY").is_err());
/// # Ok::<(), levels::LevelError>(())
/// ```
pub fn register_level_name(rank: u8, name: impl Into<String>) -> Result<(), LevelError> {
    let name = name.into().trim().to_owned();
    if name.is_empty() {
        return Err(LevelError::EmptyName);
    }
    if name.parse::<u8>().is_ok() || parse_generic_name(&name).is_some() {
        return Err(LevelError::NumericName(name));
    }

    if let Some(builtin) = builtin_name(rank) {
        return Err(LevelError::Reserved {
            rank,
            name: builtin,
        });
    }

    let mut names = custom_names()
        .write()
        .unwrap_or_else(PoisonError::into_inner);

    let builtin_rank = if name.eq_ignore_ascii_case(NOTSET_NAME) {
        Some(0)
    } else {
        Severity::from_name(&name).map(Severity::rank)
    };
    let taken = builtin_rank.or_else(|| {
        names
            .iter()
            .find(|(other, registered)| **other != rank && registered.eq_ignore_ascii_case(&name))
            .map(|(other, _)| *other)
    });
    if let Some(other) = taken {
        return Err(LevelError::NameTaken { name, rank: other });
    }

    names.insert(rank, name);
    Ok(())
}

/// Returns every registered custom level in ascending rank order.
#[must_use]
pub fn registered_levels() -> Vec<(u8, String)> {
    custom_names()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(|(rank, name)| (*rank, name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_resolve() {
        assert_eq!(name_of(0), "NOTSET");
        assert_eq!(name_of(1), "FILEONLY");
        assert_eq!(name_of(25), "IMPORTANTINFO");
        assert_eq!(name_of(99), "RAISEMSG");
        assert!(is_known(50));
    }

    #[test]
    fn unregistered_ranks_use_generic_name() {
        assert_eq!(name_of(201), "Level 201");
        assert!(!is_known(201));
        assert_eq!(rank_of("Level 201"), None);
    }

    #[test]
    fn registration_assigns_name() {
        register_level_name(202, "AUDIT").expect("rank 202 is free");
        assert_eq!(name_of(202), "AUDIT");
        assert!(is_known(202));
        assert_eq!(rank_of("audit"), Some(202));
        assert!(registered_levels().contains(&(202, "AUDIT".to_owned())));
    }

    #[test]
    fn registration_rejects_builtin_ranks() {
        assert_eq!(
            register_level_name(10, "TRACE"),
            Err(LevelError::Reserved {
                rank: 10,
                name: "DEBUG"
            })
        );
        assert_eq!(name_of(10), "DEBUG");
    }

    #[test]
    fn registration_rejects_taken_names() {
        assert_eq!(
            register_level_name(203, "warning"),
            Err(LevelError::NameTaken {
                name: "warning".to_owned(),
                rank: 30
            })
        );
        register_level_name(204, "SECURITY").expect("rank 204 is free");
        assert!(matches!(
            register_level_name(205, "security"),
            Err(LevelError::NameTaken { rank: 204, .. })
        ));
    }

    #[test]
    fn registration_rejects_blank_names() {
        assert_eq!(register_level_name(206, "   "), Err(LevelError::EmptyName));
    }

    #[test]
    fn registration_rejects_names_that_parse_as_ranks() {
        for name in ["30", "Level 5", "level208"] {
            assert_eq!(
                register_level_name(208, name),
                Err(LevelError::NumericName(name.to_owned()))
            );
        }
        assert!(!is_known(208));
    }

    #[test]
    fn registered_name_parses_back_to_its_rank() {
        register_level_name(209, "LEVELED").expect("rank 209 is free");
        assert_eq!("leveled".parse::<crate::Level>(), Ok(crate::Level::new(209)));
    }

    #[test]
    fn re_registration_replaces_name() {
        register_level_name(207, "FIRST").expect("rank 207 is free");
        register_level_name(207, "SECOND").expect("same rank may be renamed");
        assert_eq!(name_of(207), "SECOND");
        assert_eq!(rank_of("FIRST"), None);
    }
}
