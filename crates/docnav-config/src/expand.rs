//! `${VAR}` references in configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// An unset variable without a default is an error naming `field`.
/// Values without `${` are returned unchanged, so `/$root/` passes through.
/// Once a value contains `${`, bare `$VAR` references in it are expanded too.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| -> Result<Option<String>, Unset> {
        std::env::var(name).map(Some).map_err(|_| Unset(name.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Lookup failure carrying the variable name.
struct Unset(String);
