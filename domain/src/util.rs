//! Shared utility functions.

/// Clamp `value` so that it lies inside `[minimum, maximum]`.
///
/// Works for any partially ordered type, so both raw integer brightness and
/// float percentages go through the same function.
///
/// ```
/// use acpilight_domain::normalize;
///
/// assert_eq!(normalize(-5, 0, 100), 0);
/// assert_eq!(normalize(42.5, 0.0, 100.0), 42.5);
/// ```
pub fn normalize<T: PartialOrd>(value: T, minimum: T, maximum: T) -> T {
    let capped = if value > maximum { maximum } else { value };
    if capped < minimum { minimum } else { capped }
}
