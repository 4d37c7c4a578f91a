//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Twinfield client configuration
# Only override what you want to change -- missing fields use defaults.
# Every credential can also be supplied through the environment
# (TWINFIELD_USERNAME, TWINFIELD_PASSWORD, TWINFIELD_ORGANISATION).

# office = "NL001"

[credentials]
# username = ""
# password = ""
# organisation = ""

[endpoint]
login_url = "https://login.twinfield.com/webservices/session.asmx"
# Pin a cluster instead of using the one assigned at logon.
# cluster = "https://c3.twinfield.com"

[timeouts]
# connect_secs = 10
# request_secs = 120

[logging]
# One of: trace, debug, info, warn, error
# level = "info"
"##
}
