//! Alternate street names for guess matching.
//!
//! A name is split into words and every direction or suffix word is offered in
//! both its full and abbreviated form. "North Pearl Street" yields "north pearl
//! street", "n pearl street", "north pearl st" and "n pearl st".

mod tables;

use std::str::FromStr;
use std::sync::LazyLock;

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

static DIRECTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| tables::DIRECTIONS.iter().copied().collect());

static SUFFIXES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| tables::SUFFIXES.iter().copied().collect());

/// How generous the generated guess set is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameMode {
    /// Abbreviation swaps only
    Hard,
    /// Also accept the name without its leading directions and/or trailing suffix
    #[default]
    Easy,
}

impl FromStr for NameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hard" => Ok(NameMode::Hard),
            "easy" => Ok(NameMode::Easy),
            other => Err(format!("unknown name mode '{}', expected 'easy' or 'hard'", other)),
        }
    }
}

/// Generate lower-cased strings that should be accepted for `name`.
///
/// Easy mode may repeat strings; callers that need a set must deduplicate.
pub fn generate_alternate_names(name: &str, mode: NameMode) -> Vec<String> {
    let lowered = name.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let choices: Vec<Vec<&str>> = words.iter().map(|word| word_choices(word)).collect();

    match mode {
        NameMode::Hard => combine(&choices),
        NameMode::Easy => {
            let leading_directions = words
                .iter()
                .take_while(|word| DIRECTIONS.contains_key(**word))
                .count();
            let has_suffix = words.last().is_some_and(|word| SUFFIXES.contains_key(*word));

            let mut names = Vec::new();
            for dropped in 0..=leading_directions {
                for drop_suffix in [false, true] {
                    if drop_suffix && !has_suffix {
                        continue;
                    }
                    let end = words.len() - usize::from(drop_suffix);
                    if dropped >= end {
                        continue;
                    }
                    names.extend(combine(&choices[dropped..end]));
                }
            }
            names
        }
    }
}

/// The full word, plus its abbreviation if one exists and differs
fn word_choices(word: &str) -> Vec<&str> {
    let mut choices = vec![word];
    let abbreviation = DIRECTIONS
        .get(word)
        .or_else(|| SUFFIXES.get(word))
        .copied();
    if let Some(abbreviation) = abbreviation {
        if abbreviation != word {
            choices.push(abbreviation);
        }
    }
    choices
}

/// Every combination of one choice per word, joined by single spaces
fn combine(choices: &[Vec<&str>]) -> Vec<String> {
    if choices.is_empty() {
        return Vec::new();
    }
    choices
        .iter()
        .map(|c| c.iter().copied())
        .multi_cartesian_product()
        .map(|words| words.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(names: &[String]) -> HashSet<&str> {
        names.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_hard_handles_suffixes() {
        let names = generate_alternate_names("Maple Road", NameMode::Hard);
        assert_eq!(names.len(), 2);
        assert_eq!(as_set(&names), HashSet::from(["maple road", "maple rd"]));
    }

    #[test]
    fn test_hard_handles_directions() {
        let names = generate_alternate_names("North Pearl Street", NameMode::Hard);
        assert_eq!(names.len(), 4);
        assert_eq!(
            as_set(&names),
            HashSet::from(["north pearl street", "n pearl street", "north pearl st", "n pearl st"])
        );
    }

    #[test]
    fn test_hard_handles_many_directions() {
        let names = generate_alternate_names("North Northeast Broadway", NameMode::Hard);
        assert_eq!(names.len(), 4);
        assert_eq!(
            as_set(&names),
            HashSet::from([
                "north northeast broadway",
                "n northeast broadway",
                "north ne broadway",
                "n ne broadway",
            ])
        );
    }

    #[test]
    fn test_easy_drops_suffix() {
        let names = generate_alternate_names("Maple Road", NameMode::Easy);
        assert_eq!(names.len(), 3);
        assert_eq!(as_set(&names), HashSet::from(["maple", "maple road", "maple rd"]));
    }

    #[test]
    fn test_easy_drops_leading_directions() {
        let names = generate_alternate_names("North Pearl Street", NameMode::Easy);
        let set = as_set(&names);
        for expected in [
            "north pearl street",
            "n pearl st",
            "pearl street",
            "pearl st",
            "pearl",
            "north pearl",
            "n pearl",
        ] {
            assert!(set.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_easy_never_yields_empty_strings() {
        let names = generate_alternate_names("North Street", NameMode::Easy);
        assert!(names.iter().all(|n| !n.is_empty()));
        assert!(as_set(&names).contains("street"));

        let names = generate_alternate_names("Mall", NameMode::Easy);
        assert_eq!(names, vec!["mall"]);
    }

    #[test]
    fn test_no_abbreviations() {
        assert_eq!(generate_alternate_names("Broadway", NameMode::Hard), vec!["broadway"]);
        assert_eq!(generate_alternate_names("Broadway", NameMode::Easy), vec!["broadway"]);
    }

    #[test]
    fn test_identity_abbreviation_is_not_repeated() {
        // "way" abbreviates to itself
        assert_eq!(generate_alternate_names("Abbey Way", NameMode::Hard), vec!["abbey way"]);
    }

    #[test]
    fn test_extra_whitespace_is_collapsed() {
        let names = generate_alternate_names("  Maple   Road ", NameMode::Hard);
        assert_eq!(as_set(&names), HashSet::from(["maple road", "maple rd"]));
        assert!(generate_alternate_names("   ", NameMode::Easy).is_empty());
    }

    #[test]
    fn test_name_mode_from_str() {
        assert_eq!("Hard".parse::<NameMode>(), Ok(NameMode::Hard));
        assert_eq!("easy".parse::<NameMode>(), Ok(NameMode::Easy));
        assert!("medium".parse::<NameMode>().is_err());
    }
}
