use model::StepRole;

/// Ordered substring rules. The first rule with a matching needle wins.
const ROLE_RULES: &[(&[&str], StepRole)] = &[
    (&["entered", "opened"], StepRole::Given),
    (&["clicks"], StepRole::When),
    (&["should"], StepRole::Then),
];

/// Role used when no rule matches.
const FALLBACK_ROLE: StepRole = StepRole::When;

/// Picks the role a step is rendered with.
///
/// An `existing` role (read from already-keyworded input) is returned as is.
/// Otherwise the step text is matched against a short ordered rule table:
///
/// 1. contains `entered` or `opened` → `Given`
/// 2. contains `clicks` → `When`
/// 3. contains `should` → `Then`
/// 4. anything else → `When`
///
/// Matching is plain, case-sensitive substring search. The same text always
/// yields the same role.
///
/// ```rust
/// use model::StepRole;
/// use normalize::classify_role;
///
/// assert_eq!(classify_role("the user has entered a valid username", None), StepRole::Given);
/// assert_eq!(classify_role("the user should see an error message", None), StepRole::Then);
/// assert_eq!(classify_role("the user should see an error message", Some(StepRole::And)), StepRole::And);
/// ```
pub fn classify_role(text: &str, existing: Option<StepRole>) -> StepRole {
    existing.unwrap_or_else(|| infer_role(text))
}

/// Applies the rule table to `text`, ignoring any authored role.
pub fn infer_role(text: &str) -> StepRole {
    ROLE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| text.contains(needle)))
        .map(|(_, role)| *role)
        .unwrap_or(FALLBACK_ROLE)
}
