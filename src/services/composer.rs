use url::form_urlencoded;
use url::Url;

use crate::errors::{Disposition, ErrorPolicy, LinkError};
use crate::models::LinkRequest;

// Absolute URL that can carry a query string.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, LinkError> {
    let url = Url::parse(endpoint).map_err(|e| LinkError::MalformedEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(LinkError::MalformedEndpoint {
            endpoint: endpoint.to_string(),
            reason: "not a hierarchical URL".to_string(),
        });
    }

    Ok(url)
}

// Admin-supplied endpoints must be http(s) so they are safe as redirect targets.
pub fn validate_endpoint(endpoint: &str) -> Result<Url, LinkError> {
    let url = parse_endpoint(endpoint)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LinkError::MalformedEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme {scheme:?}"),
        }),
    }
}

fn composed_params(request: &LinkRequest) -> Vec<(String, &str)> {
    let mut params = Vec::new();

    if let Some(prefill) = &request.prefill {
        if let Some(name) = prefill.name.as_deref() {
            params.push(("name".to_string(), name));
        }
        if let Some(email) = prefill.email.as_deref() {
            params.push(("email".to_string(), email));
        }
        for (key, answer) in &prefill.custom_answers {
            params.push((format!("custom_answers[{key}]"), answer.as_str()));
        }
    }

    if let Some(utm) = &request.attribution {
        for (key, value) in utm.params() {
            if let Some(value) = value {
                params.push((key.to_string(), value));
            }
        }
    }

    params.retain(|(_, value)| !value.is_empty());
    params
}

/// Builds the scheduling URL for `request`.
///
/// Scheme, host, path and fragment of the endpoint are kept as they are. A
/// composed parameter replaces every parameter of the same name already in
/// the endpoint's query; other existing parameters keep their position ahead
/// of the composed ones.
pub fn compose(request: &LinkRequest) -> Result<String, LinkError> {
    let mut url = parse_endpoint(&request.endpoint)?;
    let params = composed_params(request);

    if params.is_empty() {
        return Ok(url.to_string());
    }

    let mut segments: Vec<String> = url
        .query()
        .unwrap_or("")
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            let existing = form_urlencoded::parse(segment.as_bytes())
                .next()
                .map(|(key, _)| key.into_owned())
                .unwrap_or_default();
            !params.iter().any(|(key, _)| *key == existing)
        })
        .map(str::to_string)
        .collect();

    segments.extend(params.iter().map(|(key, value)| {
        format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
    }));

    url.set_query(Some(&segments.join("&")));
    Ok(url.to_string())
}

/// Composes `request` under `policy`. A malformed endpoint that is swallowed
/// degrades to the raw endpoint string.
pub fn render(request: &LinkRequest, policy: &ErrorPolicy) -> Result<String, LinkError> {
    match compose(request) {
        Ok(url) => Ok(url),
        Err(err) if policy.disposition(err.kind()) == Disposition::Swallow => {
            tracing::warn!(error = %err, "using raw endpoint as navigation target");
            Ok(request.endpoint.clone())
        }
        Err(err) => Err(err),
    }
}
