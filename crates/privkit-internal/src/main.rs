//! privkit internal demo.
//!
//! - Config: built-in snapshot, or a YAML file given as the first argument
//! - A few access checks against sample users
//! - Metrics printed in text exposition format on stdout

use privkit_core::error::{PrivkitError, Result};
use privkit_internal::access::{PermissionSet, INTERNAL_ACCESS};
use privkit_internal::{config, obs, state::InternalState};

fn main() -> Result<()> {
    obs::init_tracing();

    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path)?,
        None => config::get_internal_config(),
    };
    let state = InternalState::new(cfg);

    let cfg_json = serde_json::to_string(state.cfg())
        .map_err(|e| PrivkitError::Internal(format!("encode config failed: {e}")))?;
    obs::internal_log(&format!("config {cfg_json}"));

    let granted = PermissionSet::new().with(INTERNAL_ACCESS, true);
    let empty = PermissionSet::new();

    for (user, perms) in [
        ("internal_alice", &granted),
        ("public_bob", &granted),
        ("internal_carol", &empty),
    ] {
        let decision = state.check_access(user, perms);
        let level = if decision.is_granted() { "INFO" } else { "WARNING" };
        obs::internal_log_at(level, &format!("access user={user} decision={}", decision.as_str()));
    }

    print!("{}", state.metrics().render());
    Ok(())
}
