//! Date-only methods.
//!
//! | Method                    | SQL Server                                          |
//! |---------------------------|-----------------------------------------------------|
//! | `d.AddYears(n)`           | `DATEADD(year, CONVERT(int, n), d)`                 |
//! | `d.AddMonths(n)`          | `DATEADD(month, CONVERT(int, n), d)`                |
//! | `d.AddDays(n)`            | `DATEADD(day, CONVERT(int, n), d)`                  |
//! | `d.ToDateTime(t)`         | `DATETIME2FROMPARTS(y, m, d, h, mi, s, 0, 0)`       |
//! | `Date.FromDateTime(dt)`   | conversion of `dt` to date                          |

use super::method::{DeclaringType, MethodInfo};
use super::registry::{date_parts, to_date_time_method};
use super::{MethodCallTranslator, Translation};
use crate::sql::{HostType, Literal, SqlExpr, SqlExpressionFactory};

/// Store type the combined date-time is mapped to, instead of the default
/// `datetime2` mapping of the return type.
const COMBINED_DATE_TIME_STORE_TYPE: &str = "datetime";

#[derive(Debug, Clone)]
pub struct DateMethodTranslator {
    factory: SqlExpressionFactory,
}

impl DateMethodTranslator {
    pub fn new(factory: SqlExpressionFactory) -> Self {
        Self { factory }
    }

    /// `DATEADD(part, CONVERT(int, amount), instance)`, typed like `instance`.
    fn add_unit(&self, date_part: &'static str, instance: &SqlExpr, amount: &SqlExpr) -> SqlExpr {
        let instance = self.factory.apply_default_type_mapping(instance.clone());
        // Fragments have no host type; a receiver always does.
        let return_type = instance.host_type().unwrap_or(HostType::Date);
        let type_mapping = instance.type_mapping().cloned();

        self.factory.function(
            "DATEADD",
            vec![
                self.factory.fragment(date_part),
                self.factory.convert(amount.clone(), HostType::Int32),
                instance,
            ],
            true,
            vec![false, true, true],
            return_type,
            type_mapping,
        )
    }

    /// `DATETIME2FROMPARTS` over the date parts of `instance` and the time
    /// parts of `time`.
    fn combine(&self, instance: &SqlExpr, time: &SqlExpr, method: &MethodInfo) -> SqlExpr {
        let instance = self.factory.apply_default_type_mapping(instance.clone());

        let arguments = vec![
            self.date_part("year", &instance),
            self.date_part("month", &instance),
            self.date_part("day", &instance),
            self.date_part("hour", time),
            self.date_part("minute", time),
            self.date_part("second", time),
            self.factory.constant(Literal::Int(0), HostType::Int32),
            self.factory.constant(Literal::Int(0), HostType::Int32),
        ];

        self.factory.function(
            "DATETIME2FROMPARTS",
            arguments,
            true,
            vec![true; 8],
            method.return_type,
            self.factory
                .type_mapping_source()
                .find_mapping_with_store_type(method.return_type, COMBINED_DATE_TIME_STORE_TYPE),
        )
    }

    /// `DATEPART(part, expr)` as an integer.
    fn date_part(&self, part: &'static str, expr: &SqlExpr) -> SqlExpr {
        self.factory.function(
            "DATEPART",
            vec![self.factory.fragment(part), expr.clone()],
            true,
            vec![false, true],
            HostType::Int32,
            None,
        )
    }
}

impl MethodCallTranslator for DateMethodTranslator {
    fn name(&self) -> &'static str {
        "date"
    }

    fn translate(
        &self,
        instance: Option<&SqlExpr>,
        method: &MethodInfo,
        arguments: &[SqlExpr],
    ) -> Translation {
        if let Some(instance) = instance {
            if let Some(date_part) = date_parts().get(&method.signature).copied() {
                if let [amount] = arguments {
                    log::trace!("{} recognized {}", self.name(), method.signature);
                    return Translation::Recognized(self.add_unit(date_part, instance, amount));
                }
            }

            if &method.signature == to_date_time_method() {
                if let [time] = arguments {
                    log::trace!("{} recognized {}", self.name(), method.signature);
                    return Translation::Recognized(self.combine(instance, time, method));
                }
            }
        }

        if method.declaring_type() == DeclaringType::Date && method.name() == "FromDateTime" {
            if let [date_time] = arguments {
                log::trace!("{} recognized {}", self.name(), method.signature);
                return Translation::Recognized(
                    self.factory.convert(date_time.clone(), HostType::Date),
                );
            }
        }

        Translation::NotRecognized
    }
}
