//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` parses as an http(s) URL with a host.
pub(crate) fn validate_http_url(errors: &mut Vec<String>, name: &str, value: &str) {
    let parsed = match url::Url::parse(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            errors.push(format!("{name} = {value:?} is not a valid URL: {e}"));
            return;
        }
    };
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            errors.push(format!(
                "{name} = {value:?} has unsupported scheme {scheme:?}, expected http or https"
            ));
            return;
        }
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        errors.push(format!("{name} = {value:?} has no host"));
    }
}
