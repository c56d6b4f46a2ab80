use std::sync::Arc;
use std::thread;

use method_sql::config::Settings;
use method_sql::sql::{column, HostType, SqlExpr, SqlExpressionFactory};
use method_sql::translate::catalog;
use method_sql::translate::{
    DeclaringType, MethodCallTranslator, MethodCallTranslatorProvider, MethodInfo,
    MethodSignature, Translation,
};

fn find(descriptor: &str) -> &'static MethodInfo {
    let signature: MethodSignature = descriptor.parse().unwrap();
    catalog::find(&signature).unwrap()
}

/// Recognizes everything, to check dispatch order.
#[derive(Debug)]
struct Greedy;

impl MethodCallTranslator for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn translate(
        &self,
        _instance: Option<&SqlExpr>,
        _method: &MethodInfo,
        _arguments: &[SqlExpr],
    ) -> Translation {
        Translation::Recognized(column("greedy", HostType::Object))
    }
}

#[test]
fn test_first_recognizing_translator_wins() {
    let provider = MethodCallTranslatorProvider::sql_server(SqlExpressionFactory::default())
        .with_translator(Greedy);

    let conv = provider
        .translate(
            None,
            find("Convert.ToInt32(string)"),
            &[column("x", HostType::String)],
        )
        .into_expr()
        .unwrap();
    assert_eq!(conv.to_sql(), "CONVERT(int, [x])");

    let date = provider
        .translate(
            Some(&column("d", HostType::Date)),
            find("Date.AddDays(int32)"),
            &[column("n", HostType::Int32)],
        )
        .into_expr()
        .unwrap();
    assert_eq!(date.to_sql(), "DATEADD(day, CONVERT(int, [n]), [d])");

    // Nothing built in handles FromDayNumber, so it reaches the last translator
    let fallback = provider
        .translate(
            None,
            find("Date.FromDayNumber(int32)"),
            &[column("n", HostType::Int32)],
        )
        .into_expr()
        .unwrap();
    assert_eq!(fallback.to_sql(), "[greedy]");
}

#[test]
fn test_unknown_methods_are_not_recognized_by_any_translator() {
    let provider = MethodCallTranslatorProvider::sql_server(SqlExpressionFactory::default());
    let unknown = MethodInfo::new(
        MethodSignature::new(DeclaringType::Date, "AddWeeks", [HostType::Int32]),
        HostType::Date,
        false,
    );

    let receivers = [None, Some(column("d", HostType::Date))];
    let argument_lists = [
        vec![],
        vec![column("n", HostType::Int32)],
        vec![column("n", HostType::Int32), column("m", HostType::Int32)],
    ];
    for receiver in &receivers {
        for args in &argument_lists {
            assert_eq!(
                provider.translate(receiver.as_ref(), &unknown, args),
                Translation::NotRecognized
            );
        }
    }
}

#[test]
fn test_settings_control_order_and_membership() {
    let settings = Settings::from_toml_str("[translators]\nenabled = [\"date\"]\n").unwrap();
    let provider =
        MethodCallTranslatorProvider::from_settings(&settings, SqlExpressionFactory::default())
            .unwrap();
    assert_eq!(provider.translator_names(), vec!["date"]);

    let result = provider.translate(
        None,
        find("Convert.ToInt32(string)"),
        &[column("x", HostType::String)],
    );
    assert_eq!(result, Translation::NotRecognized);
}

#[test]
fn test_concurrent_translation() {
    let provider = Arc::new(MethodCallTranslatorProvider::sql_server(
        SqlExpressionFactory::default(),
    ));
    let method = find("Convert.ToDateTime(int32)");
    let expected = provider
        .translate(None, method, &[column("v", HostType::Int32)])
        .into_expr()
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = Arc::clone(&provider);
            thread::spawn(move || {
                provider
                    .translate(None, method, &[column("v", HostType::Int32)])
                    .into_expr()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(expected.clone()));
    }
}
