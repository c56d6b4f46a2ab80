//! First-match chain of method-call translators.

use crate::config::{Settings, SettingsError, TranslatorKind};
use crate::sql::{SqlExpr, SqlExpressionFactory};

use super::method::MethodInfo;
use super::{ConvertTranslator, DateMethodTranslator, MethodCallTranslator, Translation};

/// Offers a call to each translator in order and returns the first
/// recognized translation.
#[derive(Debug, Default)]
pub struct MethodCallTranslatorProvider {
    translators: Vec<Box<dyn MethodCallTranslator>>,
}

impl MethodCallTranslatorProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both built-in translators, conversions first.
    pub fn sql_server(factory: SqlExpressionFactory) -> Self {
        Self::new()
            .with_translator(ConvertTranslator::new(factory.clone()))
            .with_translator(DateMethodTranslator::new(factory))
    }

    /// The translators enabled in `settings`, in the configured order.
    pub fn from_settings(
        settings: &Settings,
        factory: SqlExpressionFactory,
    ) -> Result<Self, SettingsError> {
        let mut provider = Self::new();
        for kind in settings.translators.kinds()? {
            provider = match kind {
                TranslatorKind::Convert => {
                    provider.with_translator(ConvertTranslator::new(factory.clone()))
                }
                TranslatorKind::Date => {
                    provider.with_translator(DateMethodTranslator::new(factory.clone()))
                }
            };
        }
        Ok(provider)
    }

    /// Append a translator to the end of the chain.
    pub fn with_translator(mut self, translator: impl MethodCallTranslator + 'static) -> Self {
        self.translators.push(Box::new(translator));
        self
    }

    /// Names of the translators in dispatch order.
    pub fn translator_names(&self) -> Vec<&'static str> {
        self.translators.iter().map(|t| t.name()).collect()
    }

    pub fn translate(
        &self,
        instance: Option<&SqlExpr>,
        method: &MethodInfo,
        arguments: &[SqlExpr],
    ) -> Translation {
        for translator in &self.translators {
            let translation = translator.translate(instance, method, arguments);
            if translation.is_recognized() {
                return translation;
            }
        }
        log::debug!("no translator recognized {}", method.signature);
        Translation::NotRecognized
    }
}
