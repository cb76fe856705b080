use footfall_core::{Capability, FootfallError};

/// Collapse a set of provider errors into a uniform `FootfallError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<FootfallError>,
    not_found_what: Option<String>,
) -> FootfallError {
    if !attempted_any {
        return FootfallError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, FootfallError::ProviderTimeout { .. }))
    {
        return FootfallError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, FootfallError::NotFound { .. }))
    {
        return FootfallError::not_found(what);
    }
    FootfallError::AllProvidersFailed(errors)
}
