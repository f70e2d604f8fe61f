//! String predicates
//!
//! Lengths count Unicode scalar values, not bytes.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

#[inline]
fn char_count(input: &str) -> usize {
    input.chars().count()
}

/// Passes when the string is not empty.
pub fn not_empty<S>() -> impl Fn(&S) -> bool + Clone + Send + Sync + 'static
where
    S: AsRef<str> + ?Sized,
{
    |input: &S| !input.as_ref().is_empty()
}

/// Passes when the string has at least `min` characters.
pub fn min_length<S>(min: usize) -> impl Fn(&S) -> bool + Clone + Send + Sync + 'static
where
    S: AsRef<str> + ?Sized,
{
    move |input: &S| char_count(input.as_ref()) >= min
}

/// Passes when the string has at most `max` characters.
pub fn max_length<S>(max: usize) -> impl Fn(&S) -> bool + Clone + Send + Sync + 'static
where
    S: AsRef<str> + ?Sized,
{
    move |input: &S| char_count(input.as_ref()) <= max
}

/// Passes when the string has exactly `length` characters.
pub fn exact_length<S>(length: usize) -> impl Fn(&S) -> bool + Clone + Send + Sync + 'static
where
    S: AsRef<str> + ?Sized,
{
    move |input: &S| char_count(input.as_ref()) == length
}

/// Passes when the string starts with `prefix`.
pub fn starts_with<S>(prefix: impl Into<String>) -> impl Fn(&S) -> bool + Clone + Send + Sync + 'static
where
    S: AsRef<str> + ?Sized,
{
    let prefix = prefix.into();
    move |input: &S| input.as_ref().starts_with(prefix.as_str())
}

/// Passes when the string ends with `suffix`.
pub fn ends_with<S>(suffix: impl Into<String>) -> impl Fn(&S) -> bool + Clone + Send + Sync + 'static
where
    S: AsRef<str> + ?Sized,
{
    let suffix = suffix.into();
    move |input: &S| input.as_ref().ends_with(suffix.as_str())
}

/// Passes when the string is non-empty and made of ASCII digits only.
pub fn all_digits<S>() -> impl Fn(&S) -> bool + Clone + Send + Sync + 'static
where
    S: AsRef<str> + ?Sized,
{
    |input: &S| {
        let input = input.as_ref();
        !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Passes when the string looks like an email address.
pub fn email_format<S>() -> impl Fn(&S) -> bool + Clone + Send + Sync + 'static
where
    S: AsRef<str> + ?Sized,
{
    |input: &S| EMAIL_REGEX.is_match(input.as_ref())
}

/// Passes when the string matches `pattern`.
///
/// ```
/// use vouch_validator::Validator;
/// use vouch_validator::checks::matches;
///
/// let phone = matches(r"^\d{3}-\d{4}$").unwrap();
/// assert!(!Validator::new("555-1234").assert(phone.clone(), "must be a phone number").has_failures());
/// assert!(Validator::new("5551234").assert(phone, "must be a phone number").has_failures());
/// ```
pub fn matches<S>(
    pattern: &str,
) -> Result<impl Fn(&S) -> bool + Clone + Send + Sync + 'static, regex::Error>
where
    S: AsRef<str> + ?Sized,
{
    let regex = Regex::new(pattern)?;
    Ok(move |input: &S| regex.is_match(input.as_ref()))
}
