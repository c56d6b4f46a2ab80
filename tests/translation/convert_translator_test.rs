use insta::assert_snapshot;
use method_sql::sql::{column, HostType, SqlExpr, SqlExpressionFactory};
use method_sql::translate::catalog;
use method_sql::translate::registry::{convert_type_name, CONVERT_TYPE_NAMES, SUPPORTED_ARGUMENT_TYPES};
use method_sql::translate::{
    ConvertTranslator, DeclaringType, MethodCallTranslator, MethodInfo, MethodSignature,
    Translation,
};

fn translator() -> ConvertTranslator {
    ConvertTranslator::new(SqlExpressionFactory::default())
}

fn convert_method(name: &'static str, param: HostType) -> &'static MethodInfo {
    catalog::find(&MethodSignature::new(DeclaringType::Convert, name, [param]))
        .expect("method should be in the catalog")
}

#[test]
fn test_every_supported_conversion_is_translated() {
    let t = translator();

    for (name, type_name) in CONVERT_TYPE_NAMES {
        for source in SUPPORTED_ARGUMENT_TYPES {
            let method = convert_method(name, source);
            let arg = column("v", source);
            let out = t
                .translate(None, method, std::slice::from_ref(&arg))
                .into_expr()
                .unwrap_or_else(|| panic!("{} should be recognized", method.signature));

            let f = out.as_function().expect("CONVERT function");
            assert_eq!(f.name, "CONVERT");
            assert_eq!(f.arguments.len(), 2);
            assert_eq!(f.arguments[0].as_fragment(), Some(type_name));
            assert_eq!(f.arguments_propagate_nullability, vec![false, true]);
            assert!(f.nullable);
            assert_eq!(f.return_type, method.return_type);

            let wraps_in_text = name == "ToDateTime" && source != HostType::String;
            if wraps_in_text {
                let inner = f.arguments[1].as_convert().expect("text conversion");
                assert_eq!(inner.host_type, HostType::String);
                assert_eq!(
                    inner.type_mapping.as_ref().map(|m| m.store_type.as_ref()),
                    Some("nvarchar(max)")
                );
                assert_eq!(inner.operand.as_ref().host_type(), Some(source));
            } else {
                assert_eq!(f.arguments[1], arg, "{}", method.signature);
            }
        }
    }
}

#[test]
fn test_text_to_int_scenario() {
    let out = translator()
        .translate(
            None,
            convert_method("ToInt32", HostType::String),
            &[column("x", HostType::String)],
        )
        .into_expr()
        .unwrap();
    assert_snapshot!(out.to_sql(), @"CONVERT(int, [x])");
}

#[test]
fn test_numeric_to_datetime_scenario() {
    let out = translator()
        .translate(
            None,
            convert_method("ToDateTime", HostType::Decimal),
            &[column("y", HostType::Decimal)],
        )
        .into_expr()
        .unwrap();
    assert_snapshot!(out.to_sql(), @"CONVERT(datetime2, CONVERT(nvarchar(max), [y]))");
}

#[test]
fn test_text_to_datetime_is_direct() {
    let out = translator()
        .translate(
            None,
            convert_method("ToDateTime", HostType::String),
            &[column("s", HostType::String)],
        )
        .into_expr()
        .unwrap();
    assert_snapshot!(out.to_sql(), @"CONVERT(datetime2, [s])");
}

#[test]
fn test_decimal_and_bool_type_names() {
    let t = translator();
    let dec = t
        .translate(
            None,
            convert_method("ToDecimal", HostType::Float64),
            &[column("price", HostType::Float64)],
        )
        .into_expr()
        .unwrap();
    assert_snapshot!(dec.to_sql(), @"CONVERT(decimal(18, 2), [price])");

    let bit = t
        .translate(
            None,
            convert_method("ToBoolean", HostType::Int32),
            &[column("flag", HostType::Int32)],
        )
        .into_expr()
        .unwrap();
    assert_snapshot!(bit.to_sql(), @"CONVERT(bit, [flag])");
}

#[test]
fn test_catalog_methods_outside_allow_list_are_not_recognized() {
    let t = translator();
    for source in [HostType::Char, HostType::SByte, HostType::UInt16, HostType::UInt32, HostType::UInt64] {
        let method = convert_method("ToInt64", source);
        let result = t.translate(None, method, &[column("v", source)]);
        assert_eq!(result, Translation::NotRecognized, "{}", method.signature);
    }
}

#[test]
fn test_unmapped_operations_are_not_recognized() {
    let t = translator();
    for name in ["ToChar", "ToSingle"] {
        assert_eq!(convert_type_name(name), None);
        let method = convert_method(name, HostType::String);
        let result = t.translate(None, method, &[column("v", HostType::String)]);
        assert_eq!(result, Translation::NotRecognized);
    }
}

#[test]
fn test_provider_overload_is_not_recognized() {
    let method = catalog::find(&MethodSignature::new(
        DeclaringType::Convert,
        "ToInt32",
        [HostType::String, HostType::FormatProvider],
    ))
    .unwrap();
    let result = translator().translate(
        None,
        method,
        &[
            column("s", HostType::String),
            column("p", HostType::FormatProvider),
        ],
    );
    assert_eq!(result, Translation::NotRecognized);
}

#[test]
fn test_method_outside_catalog_is_not_recognized() {
    let method = MethodInfo::new(
        MethodSignature::new(DeclaringType::Convert, "ToGuid", [HostType::String]),
        HostType::String,
        true,
    );
    let result = translator().translate(None, &method, &[column("s", HostType::String)]);
    assert!(!result.is_recognized());
}

#[test]
fn test_translation_is_idempotent() {
    let t = translator();
    let method = convert_method("ToDateTime", HostType::Int64);
    let args: Vec<SqlExpr> = vec![column("epoch", HostType::Int64)];

    let first = t.translate(None, method, &args);
    let second = t.translate(None, method, &args);
    assert!(first.is_recognized());
    assert_eq!(first, second);
}
