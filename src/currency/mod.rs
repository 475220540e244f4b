use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleConfig {
    pub fn fr_fr() -> Self {
        Self {
            language_tag: "fr-FR".into(),
            decimal_separator: ',',
            grouping_separator: '\u{202f}',
        }
    }

    pub fn en_us() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::fr_fr()
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "EUR" => "€".into(),
        "USD" => "$".into(),
        "GBP" => "£".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

/// Formats a cent amount with two decimals, grouping, and currency symbol,
/// e.g. `-123456` as `-1 234,56 €` under the default locale.
pub fn format_cents(cents: i64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let mut int_part = (abs / 100).to_string();
    insert_grouping(&mut int_part, locale.grouping_separator);
    format!(
        "{}{}{}{:02} {}",
        sign,
        int_part,
        locale.decimal_separator,
        abs % 100,
        symbol_for(code.as_str())
    )
}

/// Formats minutes as hours rounded to a tenth, e.g. `210` as `3,5 h`.
/// Whole hours drop the decimal.
pub fn format_minutes_as_hours(minutes: i64, locale: &LocaleConfig) -> String {
    let tenths = crate::finance::round_tenth_hours(minutes);
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    if abs % 10 == 0 {
        format!("{}{} h", sign, abs / 10)
    } else {
        format!(
            "{}{}{}{} h",
            sign,
            abs / 10,
            locale.decimal_separator,
            abs % 10
        )
    }
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in int_part.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    *int_part = grouped;
}
