//! Namespaced store keys.
//!
//! Every persisted record is keyed by monitor id under a distinct prefix.
//! All key construction goes through these builders so the namespaces stay
//! in one place.

/// Key for a monitor's configuration record.
pub fn config_key(monitor_id: &str) -> String {
    format!("config:{monitor_id}")
}

/// Key for a monitor's cached status record.
pub fn status_key(monitor_id: &str) -> String {
    format!("status:{monitor_id}")
}

/// Key for a monitor's history ledger record.
pub fn history_key(monitor_id: &str) -> String {
    format!("history:{monitor_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_namespaces_are_distinct() {
        let id = "ab12cd34";
        let keys = [config_key(id), status_key(id), history_key(id)];
        assert_eq!(keys[0], "config:ab12cd34");
        assert_eq!(keys[1], "status:ab12cd34");
        assert_eq!(keys[2], "history:ab12cd34");
        // No two namespaces may collide for the same id.
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
