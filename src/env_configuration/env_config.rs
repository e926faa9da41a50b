use crate::common::*;

#[doc = r#"
    Reads an environment variable and treats its absence as a fatal error.

    All mandatory settings of this application are injected through the
    environment, so a missing variable means the process cannot run at all.

    # Arguments
    * `key` - Environment variable name to look up

    # Returns
    * `String` - The variable's value

    # Panics
    Terminates the application when the variable is not set
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the TOML file holding the whole dashboard configuration
    (storage backend selection, remote object store, chart output, system).

    Supplied through the `DASHBOARD_CONFIG_PATH` environment variable and
    resolved once on first access.

    # Panics
    When `DASHBOARD_CONFIG_PATH` is not set
"#]
pub static DASHBOARD_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("DASHBOARD_CONFIG_PATH"));
