//! Ability description splicing.
//!
//! Each description is broken into loose components (capitalised names,
//! effect keywords, action phrases, a condition clause) and a new sentence
//! is assembled from a random mix of both.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::rng::RandomSource;

const EFFECTS: [&str; 7] = ["damage", "change", "boost", "reflect", "disable", "shift", "modify"];
const ACTIONS: [&str; 6] = ["can change", "takes", "deals", "modifies", "limits", "affects"];

const DEFAULT_EFFECT: &str = "damage";
const DEFAULT_ACTION: &str = "affects";
const DEFAULT_CONDITION: &str = "under specific conditions";
const DEFAULT_COUNTRY: &str = "its owner";

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+").expect("name pattern is valid")
});

static CONDITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:if|while|when|until)\b.*").expect("condition pattern is valid")
});

/// Loose components of one ability description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityComponents {
    /// Capitalised words, in order of appearance.
    pub countries: Vec<String>,
    /// Effect keywords contained in the text.
    pub effects: Vec<&'static str>,
    /// Action phrases contained in the text.
    pub actions: Vec<&'static str>,
    /// Clause from the first condition keyword to the end, if any.
    pub condition: Option<String>,
}

impl AbilityComponents {
    /// Break a description into components.
    ///
    /// ```
    /// use countryball_battle::merge::AbilityComponents;
    ///
    /// let parts = AbilityComponents::extract("Deals damage to Germany when attacked.");
    /// assert_eq!(parts.countries, vec!["Deals", "Germany"]);
    /// assert_eq!(parts.effects, vec!["damage"]);
    /// assert_eq!(parts.condition.as_deref(), Some("when attacked"));
    /// ```
    #[must_use]
    pub fn extract(description: &str) -> Self {
        let countries = NAME_PATTERN
            .find_iter(description)
            .map(|m| m.as_str().to_string())
            .collect();
        let effects = EFFECTS
            .into_iter()
            .filter(|e| description.contains(e))
            .collect();
        let actions = ACTIONS
            .into_iter()
            .filter(|a| description.contains(a))
            .collect();
        let condition = CONDITION_PATTERN
            .find(description)
            .map(|m| clean_clause(m.as_str()))
            .filter(|c| !c.is_empty());

        Self {
            countries,
            effects,
            actions,
            condition,
        }
    }
}

/// Trim trailing punctuation and lowercase the leading keyword.
fn clean_clause(clause: &str) -> String {
    let trimmed = clause.trim().trim_end_matches(['.', '!', ';', ',']);
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pick<'a, R: RandomSource + ?Sized>(rng: &mut R, options: &[&'a str]) -> Option<&'a str> {
    if options.is_empty() {
        None
    } else {
        Some(options[rng.pick_index(options.len())])
    }
}

/// Splice two ability descriptions into a new one.
///
/// Up to two names are sampled without replacement from both descriptions;
/// one effect and one action are picked from their union (falling back to
/// "damage" and "affects"); the conditions are joined with "and" when both
/// descriptions have one.
pub fn splice_descriptions<R: RandomSource + ?Sized>(
    first: &str,
    second: &str,
    rng: &mut R,
) -> String {
    let a = AbilityComponents::extract(first);
    let b = AbilityComponents::extract(second);

    let pool: Vec<&str> = a
        .countries
        .iter()
        .chain(&b.countries)
        .map(String::as_str)
        .collect();
    let countries: Vec<&str> = rng
        .sample_indices(pool.len(), 2)
        .into_iter()
        .map(|i| pool[i])
        .collect();

    let effects: Vec<&str> = a.effects.iter().chain(&b.effects).copied().collect();
    let effect = pick(rng, &effects).unwrap_or(DEFAULT_EFFECT);

    let actions: Vec<&str> = a.actions.iter().chain(&b.actions).copied().collect();
    let action = pick(rng, &actions).unwrap_or(DEFAULT_ACTION);

    let condition = match (&a.condition, &b.condition) {
        (Some(ca), Some(cb)) => format!("{ca} and {cb}"),
        (Some(c), None) | (None, Some(c)) => c.clone(),
        (None, None) => DEFAULT_CONDITION.to_string(),
    };

    match countries.as_slice() {
        [c0, c1] => format!(
            "If {c0} is in play and {c1} is not, \
             then {action} will {effect} all targets, {condition}."
        ),
        _ => {
            let c0 = countries.first().copied().unwrap_or(DEFAULT_COUNTRY);
            format!("When {c0} is involved, {action} will {effect} the opponent, {condition}.")
        }
    }
}
