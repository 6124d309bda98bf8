use super::keys::ConfigurationKey;


/// Pick the raw value for `key`: an explicitly passed flag wins (even when empty),
/// then a non-empty environment variable. `None` means neither source supplied it.
pub fn select_source<F>(
    key: ConfigurationKey,
    flag_value: Option<String>,
    env_lookup: &F,
) -> Option<String>
where
    F: Fn(&str) -> String,
{
    if flag_value.is_some() {
        return flag_value;
    }

    let env_value = env_lookup(key.env_var());
    if env_value.is_empty() {
        None
    } else {
        Some(env_value)
    }
}
