use apib_core::config::{ParameterSpec, ResourceModifierConfig};
use apib_core::diagnostics::{DiagnosticKind, Diagnostics, Severity};
use apib_core::error::TransformError;
use apib_core::ir::{ApiModel, ParameterBinding};
use apib_core::parse;
use apib_core::transform::{self, TransformOptions};

const COUPONS: &str = include_str!("fixtures/coupons.json");

fn transform_coupons(options: &TransformOptions) -> (ApiModel, Diagnostics) {
    let document = parse::from_json(COUPONS).expect("should parse coupons.json");
    let mut diagnostics = Diagnostics::new();
    let model = transform::transform_with_diagnostics(&document, options, &mut diagnostics)
        .expect("should transform");
    (model, diagnostics)
}

/// One line per action: `METHOD uri name(params) -> response [annotations]`.
fn action_summary(model: &ApiModel) -> String {
    let mut lines = Vec::new();
    for group in &model.groups {
        for resource in &group.resources {
            for action in &resource.actions {
                let mut params: Vec<String> = action
                    .parameters
                    .iter()
                    .map(|p| format!("{} {}", p.type_name, p.name.camel_case))
                    .collect();
                if let Some(ref body) = action.request_body {
                    params.push(format!("body {} {}", body.type_name, body.name));
                }
                lines.push(format!(
                    "{} {} {}.{}({}) -> {} {:?}",
                    action.method.as_str(),
                    action.uri_template,
                    group.controller_class_name,
                    action.name.camel_case,
                    params.join(", "),
                    action.response_type,
                    action.extra_annotations
                ));
            }
        }
    }
    lines.join("\n")
}

#[test]
fn transform_coupons_actions() {
    let (model, diagnostics) = transform_coupons(&TransformOptions::default());

    assert_eq!(model.name, "Coupons API");
    assert_eq!(model.description, "Manage discount coupons.");
    assert_eq!(model.metadata.get("FORMAT").map(String::as_str), Some("1A"));
    assert_eq!(model.groups.len(), 1);

    insta::assert_snapshot!(action_summary(&model), @r#"
    GET /coupons/{id} CouponsController.retrieveACoupon(String id) -> Coupon []
    DELETE /coupons/{id} CouponsController.deleteACoupon(String id) -> Object ["@ResponseStatus(org.springframework.http.HttpStatus.NO_CONTENT)"]
    GET /coupons CouponsController.listAllCoupons(Integer limit) -> List<Coupon> []
    POST /coupons CouponsController.createACoupon(body CouponBase couponBase) -> Coupon ["@ResponseStatus(org.springframework.http.HttpStatus.CREATED)"]
    "#);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.count(DiagnosticKind::MissingResponseType), 1);
    assert!(!diagnostics.has_errors());
}

#[test]
fn transform_coupons_parameters() {
    let (model, _) = transform_coupons(&TransformOptions::default());
    let coupons = &model.groups[0].resources[1];
    let list = &coupons.actions[0];

    assert_eq!(coupons.uri_template, "/coupons");
    assert_eq!(list.parameters[0].binding, ParameterBinding::Query);
    assert_eq!(list.parameters[0].default_value, "10");
    assert!(!list.parameters[0].required);
    assert_eq!(list.response_status, Some(200));

    let create = &coupons.actions[1];
    assert!(create.parameters.is_empty());
    let body = create.request_body.as_ref().expect("create should have a body");
    assert!(!body.leading_delimiter);
}

#[test]
fn transform_coupons_models() {
    let (model, _) = transform_coupons(&TransformOptions::default());

    let names: Vec<_> = model.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Coupon Base", "Coupon", "Coupon Page"]);

    let base = &model.models[0];
    assert_eq!(base.class_name, "CouponBase");
    assert_eq!(base.description.as_deref(), Some("Fields shared by every coupon."));
    let base_fields: Vec<_> = base
        .fields
        .iter()
        .map(|f| (f.name.camel_case.as_str(), f.type_name.as_str()))
        .collect();
    assert_eq!(
        base_fields,
        vec![("percentOff", "Integer"), ("redeemBy", "Integer")]
    );

    let coupon = &model.models[1];
    assert_eq!(coupon.parent_class.as_deref(), Some("CouponBase"));
    assert_eq!(coupon.fields.len(), 2);
    assert_eq!(coupon.fields[1].type_name, "List<String>");

    let page = &model.models[2];
    assert_eq!(page.wraps_class(), Some("java.util.ArrayList<Coupon>"));
    assert!(page.fields.is_empty());
}

#[test]
fn transform_coupons_flattened() {
    let options = TransformOptions {
        flatten_parent_classes: true,
        ..TransformOptions::default()
    };
    let (model, _) = transform_coupons(&options);

    let coupon = &model.models[1];
    assert_eq!(coupon.parent_class, None);
    let fields: Vec<_> = coupon
        .fields
        .iter()
        .map(|f| f.name.camel_case.as_str())
        .collect();
    assert_eq!(fields, vec!["percentOff", "redeemBy", "id", "tags"]);
}

#[test]
fn transform_coupons_skip_lists() {
    let options = TransformOptions {
        skip_model_names: ["Coupon Page".to_string()].into_iter().collect(),
        skip_nested_models: false,
        ..TransformOptions::default()
    };
    let (model, _) = transform_coupons(&options);

    let names: Vec<_> = model.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Coupon Base", "Coupon", "Coupon.Summary"]);
    // Member without a value falls back to the placeholder type
    assert_eq!(model.models[2].fields[0].type_name, "Object");
}

#[test]
fn transform_coupons_with_modifiers() {
    let options = TransformOptions {
        resource_modifiers: vec![ResourceModifierConfig {
            pattern: r"^CouponsController\.(create|delete)".to_string(),
            method_annotations: Some(vec!["@PreAuthorize(\"hasRole('ADMIN')\")".to_string()]),
            prepended_parameters: vec![ParameterSpec {
                name: Some("principal".to_string()),
                type_name: Some("Principal".to_string()),
                annotation: None,
            }],
            appended_parameters: vec![ParameterSpec {
                name: Some("locale".to_string()),
                type_name: None,
                annotation: Some("@RequestHeader".to_string()),
            }],
        }],
        ..TransformOptions::default()
    };
    let (model, diagnostics) = transform_coupons(&options);

    insta::assert_snapshot!(action_summary(&model), @r#"
    GET /coupons/{id} CouponsController.retrieveACoupon(String id) -> Coupon []
    DELETE /coupons/{id} CouponsController.deleteACoupon(Principal principal, String id) -> Object ["@PreAuthorize(\"hasRole('ADMIN')\")"]
    GET /coupons CouponsController.listAllCoupons(Integer limit) -> List<Coupon> []
    POST /coupons CouponsController.createACoupon(Principal principal, body CouponBase couponBase) -> Coupon ["@PreAuthorize(\"hasRole('ADMIN')\")"]
    "#);

    let create = &model.groups[0].resources[1].actions[1];
    assert!(create.request_body.as_ref().unwrap().leading_delimiter);

    let invalid: Vec<_> = diagnostics
        .entries()
        .iter()
        .filter(|d| d.kind == DiagnosticKind::InvalidModifierParameter)
        .collect();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].severity, Severity::Error);
}

#[test]
fn transform_rejects_invalid_modifier_pattern() {
    let document = parse::from_json(COUPONS).unwrap();
    let options = TransformOptions {
        resource_modifiers: vec![ResourceModifierConfig {
            pattern: "[unclosed".to_string(),
            ..ResourceModifierConfig::default()
        }],
        ..TransformOptions::default()
    };
    let err = transform::transform(&document, &options).unwrap_err();
    assert!(matches!(err, TransformError::InvalidModifierPattern { .. }));
    assert!(err.to_string().contains("[unclosed"));
}

#[test]
fn transform_is_repeatable() {
    let (first, _) = transform_coupons(&TransformOptions::default());
    let (second, _) = transform_coupons(&TransformOptions::default());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
