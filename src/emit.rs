//! Shell-consumable rendering of classified variables.
//!
//! The output is captured via command substitution and `eval`'d by a calling
//! bash script: two header comment lines, then one associative-array
//! assignment per variable, regular entries before secrets.

use crate::classify::ClassifiedStore;

/// Render the store as `eval`-able shell text.
pub fn render(store: &ClassifiedStore) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Parsed {} variables\n", store.len()));
    out.push_str(&format!(
        "# Regular vars: {}, Secrets: {}\n",
        store.regular.len(),
        store.secret.len()
    ));

    for (key, value) in &store.regular {
        out.push_str(&format!("ENV_VARS['{}']='{}'\n", key, shell_escape(value)));
    }
    for (key, value) in &store.secret {
        out.push_str(&format!(
            "SECRET_VARS['{}']='{}'\n",
            key,
            shell_escape(value)
        ));
    }

    out
}

/// Escape embedded single quotes so the value survives single-quoted shell
/// evaluation: each `'` becomes `'\''` (close, escaped quote, reopen).
fn shell_escape(value: &str) -> String {
    value.replace('\'', "'\\''")
}
