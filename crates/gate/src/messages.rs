//! Localized notices for denied access.

use serde::Serialize;

use erpgate_core::Locale;

use crate::decision::{Denial, DenyReason};

/// User-facing explanation of a denial, always pointing at settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub locale: Locale,
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub action_href: String,
}

impl Notice {
    pub fn for_denial(locale: Locale, denial: &Denial) -> Self {
        let module = denial.module.as_deref().unwrap_or_default();
        let (title, message) = text(locale, denial.reason, module);

        Self {
            locale,
            title: title.to_string(),
            message,
            action_label: settings_label(locale).to_string(),
            action_href: locale.localize("/settings"),
        }
    }
}

fn settings_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Открыть настройки",
        Locale::En => "Open settings",
        Locale::Uz => "Sozlamalarni ochish",
        Locale::Tr => "Ayarları aç",
    }
}

fn text(locale: Locale, reason: DenyReason, module: &str) -> (&'static str, String) {
    use DenyReason::*;

    match (locale, reason) {
        (Locale::Ru, ModuleDisabled) => (
            "Модуль недоступен",
            format!("Модуль «{module}» отключён для вашей организации. Включите его в настройках."),
        ),
        (Locale::Ru, ConfigurationUnavailable) => (
            "Настройки недоступны",
            "Не удалось загрузить конфигурацию модулей. Попробуйте позже или откройте настройки.".to_string(),
        ),
        (Locale::Ru, UnknownModule) => (
            "Модуль недоступен",
            "Запрошенный раздел недоступен. Проверьте настройки модулей.".to_string(),
        ),
        (Locale::Ru, RoleNotPermitted) => (
            "Доступ ограничен",
            format!("Ваша роль не даёт доступа к модулю «{module}». Обратитесь к администратору."),
        ),

        (Locale::En, ModuleDisabled) => (
            "Module not available",
            format!("The \u{201c}{module}\u{201d} module is disabled for your organization. Enable it in settings."),
        ),
        (Locale::En, ConfigurationUnavailable) => (
            "Configuration unavailable",
            "Module configuration could not be loaded. Try again later or open settings.".to_string(),
        ),
        (Locale::En, UnknownModule) => (
            "Module not available",
            "The requested section is not available. Check module settings.".to_string(),
        ),
        (Locale::En, RoleNotPermitted) => (
            "Access restricted",
            format!("Your role does not have access to the \u{201c}{module}\u{201d} module. Contact your administrator."),
        ),

        (Locale::Uz, ModuleDisabled) => (
            "Modul mavjud emas",
            format!("\u{201c}{module}\u{201d} moduli tashkilotingiz uchun o\u{2018}chirilgan. Uni sozlamalarda yoqing."),
        ),
        (Locale::Uz, ConfigurationUnavailable) => (
            "Sozlamalar mavjud emas",
            "Modul sozlamalarini yuklab bo\u{2018}lmadi. Keyinroq urinib ko\u{2018}ring yoki sozlamalarni oching.".to_string(),
        ),
        (Locale::Uz, UnknownModule) => (
            "Modul mavjud emas",
            "So\u{2018}ralgan bo\u{2018}lim mavjud emas. Modul sozlamalarini tekshiring.".to_string(),
        ),
        (Locale::Uz, RoleNotPermitted) => (
            "Kirish cheklangan",
            format!("Sizning rolingiz \u{201c}{module}\u{201d} moduliga kirish huquqini bermaydi. Administratorga murojaat qiling."),
        ),

        (Locale::Tr, ModuleDisabled) => (
            "Modül kullanılamıyor",
            format!("\u{201c}{module}\u{201d} modülü kuruluşunuz için devre dışı. Ayarlardan etkinleştirin."),
        ),
        (Locale::Tr, ConfigurationUnavailable) => (
            "Yapılandırma kullanılamıyor",
            "Modül yapılandırması yüklenemedi. Daha sonra tekrar deneyin veya ayarları açın.".to_string(),
        ),
        (Locale::Tr, UnknownModule) => (
            "Modül kullanılamıyor",
            "İstenen bölüm kullanılamıyor. Modül ayarlarını kontrol edin.".to_string(),
        ),
        (Locale::Tr, RoleNotPermitted) => (
            "Erişim kısıtlı",
            format!("Rolünüzün \u{201c}{module}\u{201d} modülüne erişimi yok. Yöneticinize başvurun."),
        ),
    }
}
