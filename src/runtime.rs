use std::sync::OnceLock;

use tracing::debug;

static RUNTIME_BINARY: OnceLock<String> = OnceLock::new();

/// Picks the first candidate found on `PATH`, falling back to the last one.
///
/// A missing interpreter is not an error here. Launching the fallback name
/// fails on its own and that failure is relayed as the exit code.
pub fn resolve_runtime_binary(candidates: &[String]) -> String {
    resolve_with(candidates, |name| which::which(name).is_ok())
}

/// Memoized [`resolve_runtime_binary`]; the first call decides for the whole process.
pub fn runtime_binary(candidates: &[String]) -> &'static str {
    RUNTIME_BINARY.get_or_init(|| resolve_runtime_binary(candidates))
}

fn resolve_with(candidates: &[String], is_available: impl Fn(&str) -> bool) -> String {
    let mut fallback = None;
    for name in candidates.iter().filter(|name| !name.trim().is_empty()) {
        if is_available(name) {
            debug!(interpreter = %name, "found interpreter on PATH");
            return name.clone();
        }
        fallback = Some(name);
    }
    let fallback = fallback.cloned().unwrap_or_default();
    debug!(interpreter = %fallback, "no candidate found on PATH, using fallback");
    fallback
}
