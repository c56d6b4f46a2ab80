use insta::assert_snapshot;
use method_sql::sql::{column, HostType, Literal, SqlExpr, SqlExpressionFactory, TypeMapping};
use method_sql::translate::catalog;
use method_sql::translate::{
    DateMethodTranslator, DeclaringType, MethodCallTranslator, MethodInfo, MethodSignature,
    Translation,
};

fn translator() -> DateMethodTranslator {
    DateMethodTranslator::new(SqlExpressionFactory::default())
}

fn date_method(name: &'static str, params: &[HostType]) -> &'static MethodInfo {
    catalog::find(&MethodSignature::new(
        DeclaringType::Date,
        name,
        params.to_vec(),
    ))
    .expect("method should be in the catalog")
}

#[test]
fn test_add_unit_operations() {
    let t = translator();
    let d = column("d", HostType::Date);

    for (name, part) in [("AddYears", "year"), ("AddMonths", "month"), ("AddDays", "day")] {
        let out = t
            .translate(
                Some(&d),
                date_method(name, &[HostType::Int32]),
                &[column("n", HostType::Int32)],
            )
            .into_expr()
            .unwrap();

        let f = out.as_function().unwrap();
        assert_eq!(f.name, "DATEADD");
        assert_eq!(f.arguments[0].as_fragment(), Some(part));
        let amount = f.arguments[1].as_convert().expect("amount is converted");
        assert_eq!(amount.host_type, HostType::Int32);
        assert_eq!(f.arguments_propagate_nullability, vec![false, true, true]);
        assert_eq!(f.return_type, HostType::Date);
        assert_eq!(f.type_mapping, Some(TypeMapping::new(HostType::Date, "date")));
        assert_eq!(f.arguments[2].type_mapping(), f.type_mapping.as_ref());
    }
}

#[test]
fn test_add_months_sql() {
    let out = translator()
        .translate(
            Some(&column("due", HostType::Date)),
            date_method("AddMonths", &[HostType::Int32]),
            &[column("months", HostType::Int32)],
        )
        .into_expr()
        .unwrap();
    assert_snapshot!(out.to_sql(), @"DATEADD(month, CONVERT(int, [months]), [due])");
}

#[test]
fn test_to_date_time_builds_single_call() {
    let factory = SqlExpressionFactory::default();
    let method = date_method("ToDateTime", &[HostType::Time]);
    let out = translator()
        .translate(
            Some(&column("d", HostType::Date)),
            method,
            &[column("t", HostType::Time)],
        )
        .into_expr()
        .unwrap();

    let f = out.as_function().unwrap();
    assert_eq!(f.name, "DATETIME2FROMPARTS");
    assert_eq!(f.arguments.len(), 8);
    assert_eq!(f.arguments_propagate_nullability, vec![true; 8]);
    assert_eq!(f.return_type, HostType::DateTime);

    let zero = factory.constant(Literal::Int(0), HostType::Int32);
    assert_eq!(f.arguments[6], zero);
    assert_eq!(f.arguments[7], zero);

    for (arg, part) in f.arguments[..6]
        .iter()
        .zip(["year", "month", "day", "hour", "minute", "second"])
    {
        let dp = arg.as_function().unwrap();
        assert_eq!(dp.name, "DATEPART");
        assert_eq!(dp.arguments[0].as_fragment(), Some(part));
        assert_eq!(dp.arguments_propagate_nullability, vec![false, true]);
        assert_eq!(dp.return_type, HostType::Int32);
    }

    let default_mapping = factory
        .type_mapping_source()
        .find_mapping(HostType::DateTime);
    assert_eq!(
        f.type_mapping,
        Some(TypeMapping::new(HostType::DateTime, "datetime"))
    );
    assert_ne!(f.type_mapping, default_mapping);
}

#[test]
fn test_to_date_time_needs_receiver() {
    let result = translator().translate(
        None,
        date_method("ToDateTime", &[HostType::Time]),
        &[column("t", HostType::Time)],
    );
    assert_eq!(result, Translation::NotRecognized);
}

#[test]
fn test_from_date_time_is_plain_conversion() {
    let out = translator()
        .translate(
            None,
            date_method("FromDateTime", &[HostType::DateTime]),
            &[column("created_at", HostType::DateTime)],
        )
        .into_expr()
        .unwrap();

    assert!(matches!(out, SqlExpr::Convert(_)));
    assert_eq!(out.host_type(), Some(HostType::Date));
    assert_snapshot!(out.to_sql(), @"CONVERT(date, [created_at])");
}

#[test]
fn test_other_static_date_methods_are_not_recognized() {
    let result = translator().translate(
        None,
        date_method("FromDayNumber", &[HostType::Int32]),
        &[column("n", HostType::Int32)],
    );
    assert_eq!(result, Translation::NotRecognized);
}

#[test]
fn test_wrong_arity_falls_through() {
    let t = translator();
    let d = column("d", HostType::Date);
    let result = t.translate(Some(&d), date_method("AddDays", &[HostType::Int32]), &[]);
    assert_eq!(result, Translation::NotRecognized);
}

#[test]
fn test_conversion_methods_are_not_date_methods() {
    let method = catalog::find(&MethodSignature::new(
        DeclaringType::Convert,
        "ToDateTime",
        [HostType::String],
    ))
    .unwrap();
    let result = translator().translate(None, method, &[column("s", HostType::String)]);
    assert_eq!(result, Translation::NotRecognized);
}

#[test]
fn test_translation_is_idempotent() {
    let t = translator();
    let d = column("d", HostType::Date);
    let args = [column("t", HostType::Time)];
    let method = date_method("ToDateTime", &[HostType::Time]);

    assert_eq!(
        t.translate(Some(&d), method, &args),
        t.translate(Some(&d), method, &args)
    );
}
