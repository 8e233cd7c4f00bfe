//! End-to-end behaviour of the request transformer through the public API.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use urltpl_application::{
    ApplicationError, HookChain, RequestHookRegistry, attach, make_template_interceptor,
};
use urltpl_domain::{ExpansionOptions, ExtraFields, RequestConfig, TemplateParams};

fn config(value: serde_json::Value) -> RequestConfig {
    serde_json::from_value(value).unwrap()
}

fn to_json(config: &RequestConfig) -> serde_json::Value {
    serde_json::to_value(config).unwrap()
}

#[test]
fn test_path_variables_are_injected() {
    let interceptor = make_template_interceptor(ExpansionOptions::default());
    let result = interceptor(config(json!({
        "urlTemplate": "https://x.test/test/{id}",
        "urlTemplateParams": {"id": 123}
    })))
    .unwrap();

    assert_eq!(
        to_json(&result),
        json!({
            "url": "https://x.test/test/123",
            "urlTemplate": "https://x.test/test/{id}",
            "urlTemplateParams": {"id": 123}
        })
    );
}

#[test]
fn test_query_variables_are_injected() {
    let interceptor = make_template_interceptor(ExpansionOptions::default());
    let result = interceptor(config(json!({
        "urlTemplate": "https://x.test/test{?foo,bar}",
        "urlTemplateParams": {"foo": "foo", "bar": "bar"}
    })))
    .unwrap();

    assert_eq!(
        to_json(&result),
        json!({
            "url": "https://x.test/test?foo=foo&bar=bar",
            "urlTemplate": "https://x.test/test{?foo,bar}",
            "urlTemplateParams": {"foo": "foo", "bar": "bar"}
        })
    );
}

#[test]
fn test_template_wins_over_literal_url() {
    let interceptor = make_template_interceptor(ExpansionOptions::default());
    let result = interceptor(config(json!({
        "url": "https://x.test/test2/123",
        "urlTemplate": "https://x.test/test/{id}",
        "urlTemplateParams": {"id": 123}
    })))
    .unwrap();

    assert_eq!(result.url.as_deref(), Some("https://x.test/test/123"));
}

#[test]
fn test_literal_url_becomes_its_own_template() {
    let interceptor = make_template_interceptor(ExpansionOptions::new(true));
    let result = interceptor(config(json!({"url": "https://x.test/test/123"}))).unwrap();

    assert_eq!(
        to_json(&result),
        json!({
            "url": "https://x.test/test/123",
            "urlTemplate": "https://x.test/test/123",
            "urlTemplateParams": {}
        })
    );
}

#[test]
fn test_empty_config_is_unchanged() {
    let interceptor = make_template_interceptor(ExpansionOptions::new(true));
    let result = interceptor(config(json!({}))).unwrap();
    assert_eq!(to_json(&result), json!({}));
}

#[test]
fn test_disabled_url_as_template_keeps_url_verbatim() {
    let interceptor = make_template_interceptor(ExpansionOptions::new(false));
    let input = json!({
        "url": "https://x.test/test/{id}",
        "urlTemplateParams": {"id": 1}
    });
    let result = interceptor(config(input.clone())).unwrap();
    assert_eq!(to_json(&result), input);
}

#[test]
fn test_unrelated_fields_pass_through() {
    let interceptor = make_template_interceptor(ExpansionOptions::default());
    let result = interceptor(config(json!({
        "url": "https://x.test/get{?foo}",
        "urlTemplateParams": {"foo": "foo1"},
        "params": {"additional": "not part of route"},
        "headers": {"Accept": "application/json"}
    })))
    .unwrap();

    assert_eq!(result.url.as_deref(), Some("https://x.test/get?foo=foo1"));
    assert_eq!(
        result.transport.get("params"),
        Some(&json!({"additional": "not part of route"}))
    );
    assert_eq!(
        result.transport.get("headers"),
        Some(&json!({"Accept": "application/json"}))
    );
}

#[test]
fn test_hook_chain_runs_interceptor_before_later_hooks() {
    let mut chain: HookChain<ExtraFields> = HookChain::new();
    attach(&mut chain, ExpansionOptions::default());
    chain.add_request_hook(Box::new(|config: RequestConfig| {
        if config.url.as_deref().is_some_and(|url| url.contains('{')) {
            return Err(ApplicationError::Rejected("unexpanded URL".into()));
        }
        Ok(config)
    }));

    let config = RequestConfig::new()
        .url("https://x.test/status/{status}")
        .url_template_params(TemplateParams::new().with("status", 201));
    let result = chain.apply(config).unwrap();

    assert_eq!(result.url.as_deref(), Some("https://x.test/status/201"));
    assert_eq!(result.route(), Some("https://x.test/status/{status}"));
}
