//! Bundled ISO-4217 currency data.
//!
//! Sorted by alphabetic code; `lookup` relies on the ordering.

use super::CurrencyDescriptor;

const fn currency(
    code: &'static str,
    numeric_code: u16,
    minor_digits: u8,
    symbol: &'static str,
    display_name: &'static str,
) -> CurrencyDescriptor {
    CurrencyDescriptor {
        code,
        numeric_code,
        minor_digits,
        symbol,
        display_name,
    }
}

/// All currencies known to the crate.
pub static CURRENCIES: &[CurrencyDescriptor] = &[
    currency("AED", 784, 2, "د.إ", "UAE Dirham"),
    currency("ARS", 32, 2, "$", "Argentine Peso"),
    currency("AUD", 36, 2, "A$", "Australian Dollar"),
    currency("BGN", 975, 2, "лв", "Bulgarian Lev"),
    currency("BHD", 48, 3, ".د.ب", "Bahraini Dinar"),
    currency("BRL", 986, 2, "R$", "Brazilian Real"),
    currency("CAD", 124, 2, "C$", "Canadian Dollar"),
    currency("CHF", 756, 2, "CHF", "Swiss Franc"),
    currency("CLP", 152, 0, "$", "Chilean Peso"),
    currency("CNY", 156, 2, "¥", "Yuan Renminbi"),
    currency("COP", 170, 2, "$", "Colombian Peso"),
    currency("CZK", 203, 2, "Kč", "Czech Koruna"),
    currency("DKK", 208, 2, "kr", "Danish Krone"),
    currency("EGP", 818, 2, "E£", "Egyptian Pound"),
    currency("EUR", 978, 2, "€", "Euro"),
    currency("GBP", 826, 2, "£", "Pound Sterling"),
    currency("GHS", 936, 2, "₵", "Ghana Cedi"),
    currency("HKD", 344, 2, "HK$", "Hong Kong Dollar"),
    currency("HUF", 348, 2, "Ft", "Forint"),
    currency("IDR", 360, 2, "Rp", "Rupiah"),
    currency("ILS", 376, 2, "₪", "New Israeli Sheqel"),
    currency("INR", 356, 2, "₹", "Indian Rupee"),
    currency("IQD", 368, 3, "ع.د", "Iraqi Dinar"),
    currency("ISK", 352, 0, "kr", "Iceland Krona"),
    currency("JOD", 400, 3, "د.ا", "Jordanian Dinar"),
    currency("JPY", 392, 0, "¥", "Yen"),
    currency("KES", 404, 2, "KSh", "Kenyan Shilling"),
    currency("KRW", 410, 0, "₩", "Won"),
    currency("KWD", 414, 3, "د.ك", "Kuwaiti Dinar"),
    currency("LYD", 434, 3, "ل.د", "Libyan Dinar"),
    currency("MAD", 504, 2, "د.م.", "Moroccan Dirham"),
    currency("MXN", 484, 2, "$", "Mexican Peso"),
    currency("MYR", 458, 2, "RM", "Malaysian Ringgit"),
    currency("NGN", 566, 2, "₦", "Naira"),
    currency("NOK", 578, 2, "kr", "Norwegian Krone"),
    currency("NZD", 554, 2, "NZ$", "New Zealand Dollar"),
    currency("OMR", 512, 3, "ر.ع.", "Rial Omani"),
    currency("PEN", 604, 2, "S/", "Sol"),
    currency("PHP", 608, 2, "₱", "Philippine Peso"),
    currency("PKR", 586, 2, "₨", "Pakistan Rupee"),
    currency("PLN", 985, 2, "zł", "Zloty"),
    currency("QAR", 634, 2, "ر.ق", "Qatari Rial"),
    currency("RON", 946, 2, "lei", "Romanian Leu"),
    currency("RSD", 941, 2, "дин", "Serbian Dinar"),
    currency("RUB", 643, 2, "₽", "Russian Ruble"),
    currency("SAR", 682, 2, "ر.س", "Saudi Riyal"),
    currency("SEK", 752, 2, "kr", "Swedish Krona"),
    currency("SGD", 702, 2, "S$", "Singapore Dollar"),
    currency("THB", 764, 2, "฿", "Baht"),
    currency("TND", 788, 3, "د.ت", "Tunisian Dinar"),
    currency("TRY", 949, 2, "₺", "Turkish Lira"),
    currency("TWD", 901, 2, "NT$", "New Taiwan Dollar"),
    currency("UAH", 980, 2, "₴", "Hryvnia"),
    currency("UGX", 800, 0, "USh", "Uganda Shilling"),
    currency("USD", 840, 2, "$", "US Dollar"),
    currency("UYU", 858, 2, "$U", "Peso Uruguayo"),
    currency("VND", 704, 0, "₫", "Dong"),
    currency("XAF", 950, 0, "FCFA", "CFA Franc BEAC"),
    currency("XOF", 952, 0, "CFA", "CFA Franc BCEAO"),
    currency("XPF", 953, 0, "₣", "CFP Franc"),
    currency("ZAR", 710, 2, "R", "Rand"),
];
