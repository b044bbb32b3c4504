/// World time in GPS seconds since 1980-01-06T00:00:00 at the prime meridian
///
/// Concrete models and their callers associate one of these with each
/// captured depth image. Substituting another epoch is possible but may
/// adversely affect interoperability between framework components.
pub type WorldTime = f64;
