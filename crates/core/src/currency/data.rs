//! ISO 4217 currency table and ISO 3166 region mapping.
//!
//! `decimal_digits` of `-1` marks units without a minor unit ("N.A." in the
//! ISO list); the registry clamps them to zero. Currencies without a
//! commonly used sign carry their code as the symbol.

/// One row of the currency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyRecord {
    /// ISO 4217 alphabetic code.
    pub code: &'static str,
    /// ISO 4217 numeric code.
    pub numeric: &'static str,
    /// Digits after the decimal separator; negative means not applicable.
    pub decimal_digits: i32,
    /// English name as published by ISO.
    pub english_name: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Fund (special settlement unit) flag.
    pub is_fund: bool,
}

const fn fiat(
    code: &'static str,
    numeric: &'static str,
    decimal_digits: i32,
    english_name: &'static str,
    symbol: &'static str,
) -> CurrencyRecord {
    CurrencyRecord {
        code,
        numeric,
        decimal_digits,
        english_name,
        symbol,
        is_fund: false,
    }
}

const fn fund(
    code: &'static str,
    numeric: &'static str,
    decimal_digits: i32,
    english_name: &'static str,
) -> CurrencyRecord {
    CurrencyRecord {
        code,
        numeric,
        decimal_digits,
        english_name,
        symbol: code,
        is_fund: true,
    }
}

/// Active ISO 4217 currencies.
pub static ISO_4217: &[CurrencyRecord] = &[
    fiat("AED", "784", 2, "UAE Dirham", "د.إ"),
    fiat("AFN", "971", 2, "Afghani", "؋"),
    fiat("ALL", "008", 2, "Lek", "L"),
    fiat("AMD", "051", 2, "Armenian Dram", "֏"),
    fiat("ANG", "532", 2, "Netherlands Antillean Guilder", "ƒ"),
    fiat("AOA", "973", 2, "Kwanza", "Kz"),
    fiat("ARS", "032", 2, "Argentine Peso", "$"),
    fiat("AUD", "036", 2, "Australian Dollar", "$"),
    fiat("AWG", "533", 2, "Aruban Florin", "ƒ"),
    fiat("AZN", "944", 2, "Azerbaijan Manat", "₼"),
    fiat("BAM", "977", 2, "Convertible Mark", "KM"),
    fiat("BBD", "052", 2, "Barbados Dollar", "$"),
    fiat("BDT", "050", 2, "Taka", "৳"),
    fiat("BGN", "975", 2, "Bulgarian Lev", "лв."),
    fiat("BHD", "048", 3, "Bahraini Dinar", "د.ب."),
    fiat("BIF", "108", 0, "Burundi Franc", "FBu"),
    fiat("BMD", "060", 2, "Bermudian Dollar", "$"),
    fiat("BND", "096", 2, "Brunei Dollar", "$"),
    fiat("BOB", "068", 2, "Boliviano", "Bs"),
    fund("BOV", "984", 2, "Mvdol"),
    fiat("BRL", "986", 2, "Brazilian Real", "R$"),
    fiat("BSD", "044", 2, "Bahamian Dollar", "$"),
    fiat("BTN", "064", 2, "Ngultrum", "Nu."),
    fiat("BWP", "072", 2, "Pula", "P"),
    fiat("BYN", "933", 2, "Belarusian Ruble", "Br"),
    fiat("BZD", "084", 2, "Belize Dollar", "$"),
    fiat("CAD", "124", 2, "Canadian Dollar", "$"),
    fiat("CDF", "976", 2, "Congolese Franc", "FC"),
    fund("CHE", "947", 2, "WIR Euro"),
    fiat("CHF", "756", 2, "Swiss Franc", "CHF"),
    fund("CHW", "948", 2, "WIR Franc"),
    fund("CLF", "990", 4, "Unidad de Fomento"),
    fiat("CLP", "152", 0, "Chilean Peso", "$"),
    fiat("CNY", "156", 2, "Yuan Renminbi", "¥"),
    fiat("COP", "170", 2, "Colombian Peso", "$"),
    fund("COU", "970", 2, "Unidad de Valor Real"),
    fiat("CRC", "188", 2, "Costa Rican Colon", "₡"),
    fiat("CUP", "192", 2, "Cuban Peso", "$"),
    fiat("CVE", "132", 2, "Cabo Verde Escudo", "$"),
    fiat("CZK", "203", 2, "Czech Koruna", "Kč"),
    fiat("DJF", "262", 0, "Djibouti Franc", "Fdj"),
    fiat("DKK", "208", 2, "Danish Krone", "kr."),
    fiat("DOP", "214", 2, "Dominican Peso", "RD$"),
    fiat("DZD", "012", 2, "Algerian Dinar", "د.ج."),
    fiat("EGP", "818", 2, "Egyptian Pound", "ج.م."),
    fiat("ERN", "232", 2, "Nakfa", "Nfk"),
    fiat("ETB", "230", 2, "Ethiopian Birr", "Br"),
    fiat("EUR", "978", 2, "Euro", "€"),
    fiat("FJD", "242", 2, "Fiji Dollar", "$"),
    fiat("FKP", "238", 2, "Falkland Islands Pound", "£"),
    fiat("GBP", "826", 2, "Pound Sterling", "£"),
    fiat("GEL", "981", 2, "Lari", "₾"),
    fiat("GHS", "936", 2, "Ghana Cedi", "GH₵"),
    fiat("GIP", "292", 2, "Gibraltar Pound", "£"),
    fiat("GMD", "270", 2, "Dalasi", "D"),
    fiat("GNF", "324", 0, "Guinean Franc", "FG"),
    fiat("GTQ", "320", 2, "Quetzal", "Q"),
    fiat("GYD", "328", 2, "Guyana Dollar", "$"),
    fiat("HKD", "344", 2, "Hong Kong Dollar", "HK$"),
    fiat("HNL", "340", 2, "Lempira", "L"),
    fiat("HTG", "332", 2, "Gourde", "G"),
    fiat("HUF", "348", 2, "Forint", "Ft"),
    fiat("IDR", "360", 2, "Rupiah", "Rp"),
    fiat("ILS", "376", 2, "New Israeli Sheqel", "₪"),
    fiat("INR", "356", 2, "Indian Rupee", "₹"),
    fiat("IQD", "368", 3, "Iraqi Dinar", "د.ع."),
    fiat("IRR", "364", 2, "Iranian Rial", "﷼"),
    fiat("ISK", "352", 0, "Iceland Krona", "kr"),
    fiat("JMD", "388", 2, "Jamaican Dollar", "$"),
    fiat("JOD", "400", 3, "Jordanian Dinar", "د.ا."),
    fiat("JPY", "392", 0, "Yen", "¥"),
    fiat("KES", "404", 2, "Kenyan Shilling", "Ksh"),
    fiat("KGS", "417", 2, "Som", "сом"),
    fiat("KHR", "116", 2, "Riel", "៛"),
    fiat("KMF", "174", 0, "Comorian Franc", "CF"),
    fiat("KPW", "408", 2, "North Korean Won", "₩"),
    fiat("KRW", "410", 0, "Won", "₩"),
    fiat("KWD", "414", 3, "Kuwaiti Dinar", "د.ك."),
    fiat("KYD", "136", 2, "Cayman Islands Dollar", "$"),
    fiat("KZT", "398", 2, "Tenge", "₸"),
    fiat("LAK", "418", 2, "Lao Kip", "₭"),
    fiat("LBP", "422", 2, "Lebanese Pound", "ل.ل."),
    fiat("LKR", "144", 2, "Sri Lanka Rupee", "Rs"),
    fiat("LRD", "430", 2, "Liberian Dollar", "$"),
    fiat("LSL", "426", 2, "Loti", "L"),
    fiat("LYD", "434", 3, "Libyan Dinar", "ل.د."),
    fiat("MAD", "504", 2, "Moroccan Dirham", "د.م."),
    fiat("MDL", "498", 2, "Moldovan Leu", "L"),
    fiat("MGA", "969", 2, "Malagasy Ariary", "Ar"),
    fiat("MKD", "807", 2, "Denar", "ден."),
    fiat("MMK", "104", 2, "Kyat", "K"),
    fiat("MNT", "496", 2, "Tugrik", "₮"),
    fiat("MOP", "446", 2, "Pataca", "MOP$"),
    fiat("MRU", "929", 2, "Ouguiya", "UM"),
    fiat("MUR", "480", 2, "Mauritius Rupee", "Rs"),
    fiat("MVR", "462", 2, "Rufiyaa", "Rf"),
    fiat("MWK", "454", 2, "Malawi Kwacha", "MK"),
    fiat("MXN", "484", 2, "Mexican Peso", "$"),
    fund("MXV", "979", 2, "Mexican Unidad de Inversion (UDI)"),
    fiat("MYR", "458", 2, "Malaysian Ringgit", "RM"),
    fiat("MZN", "943", 2, "Mozambique Metical", "MT"),
    fiat("NAD", "516", 2, "Namibia Dollar", "$"),
    fiat("NGN", "566", 2, "Naira", "₦"),
    fiat("NIO", "558", 2, "Cordoba Oro", "C$"),
    fiat("NOK", "578", 2, "Norwegian Krone", "kr"),
    fiat("NPR", "524", 2, "Nepalese Rupee", "रु"),
    fiat("NZD", "554", 2, "New Zealand Dollar", "$"),
    fiat("OMR", "512", 3, "Rial Omani", "ر.ع."),
    fiat("PAB", "590", 2, "Balboa", "B/."),
    fiat("PEN", "604", 2, "Sol", "S/"),
    fiat("PGK", "598", 2, "Kina", "K"),
    fiat("PHP", "608", 2, "Philippine Peso", "₱"),
    fiat("PKR", "586", 2, "Pakistan Rupee", "Rs"),
    fiat("PLN", "985", 2, "Zloty", "zł"),
    fiat("PYG", "600", 0, "Guarani", "₲"),
    fiat("QAR", "634", 2, "Qatari Rial", "ر.ق."),
    fiat("RON", "946", 2, "Romanian Leu", "lei"),
    fiat("RSD", "941", 2, "Serbian Dinar", "дин."),
    fiat("RUB", "643", 2, "Russian Ruble", "₽"),
    fiat("RWF", "646", 0, "Rwanda Franc", "RF"),
    fiat("SAR", "682", 2, "Saudi Riyal", "ر.س."),
    fiat("SBD", "090", 2, "Solomon Islands Dollar", "$"),
    fiat("SCR", "690", 2, "Seychelles Rupee", "SR"),
    fiat("SDG", "938", 2, "Sudanese Pound", "ج.س."),
    fiat("SEK", "752", 2, "Swedish Krona", "kr"),
    fiat("SGD", "702", 2, "Singapore Dollar", "$"),
    fiat("SHP", "654", 2, "Saint Helena Pound", "£"),
    fiat("SLE", "925", 2, "Leone", "Le"),
    fiat("SOS", "706", 2, "Somali Shilling", "S"),
    fiat("SRD", "968", 2, "Surinam Dollar", "$"),
    fiat("SSP", "728", 2, "South Sudanese Pound", "£"),
    fiat("STN", "930", 2, "Dobra", "Db"),
    fiat("SVC", "222", 2, "El Salvador Colon", "₡"),
    fiat("SYP", "760", 2, "Syrian Pound", "ل.س."),
    fiat("SZL", "748", 2, "Lilangeni", "E"),
    fiat("THB", "764", 2, "Baht", "฿"),
    fiat("TJS", "972", 2, "Somoni", "смн"),
    fiat("TMT", "934", 2, "Turkmenistan New Manat", "m"),
    fiat("TND", "788", 3, "Tunisian Dinar", "د.ت."),
    fiat("TOP", "776", 2, "Pa'anga", "T$"),
    fiat("TRY", "949", 2, "Turkish Lira", "₺"),
    fiat("TTD", "780", 2, "Trinidad and Tobago Dollar", "$"),
    fiat("TWD", "901", 2, "New Taiwan Dollar", "NT$"),
    fiat("TZS", "834", 2, "Tanzanian Shilling", "TSh"),
    fiat("UAH", "980", 2, "Hryvnia", "₴"),
    fiat("UGX", "800", 0, "Uganda Shilling", "USh"),
    fiat("USD", "840", 2, "US Dollar", "$"),
    fund("USN", "997", 2, "US Dollar (Next day)"),
    fund("UYI", "940", 0, "Uruguay Peso en Unidades Indexadas (UI)"),
    fiat("UYU", "858", 2, "Peso Uruguayo", "$"),
    fiat("UYW", "927", 4, "Unidad Previsional", "UYW"),
    fiat("UZS", "860", 2, "Uzbekistan Sum", "soʻm"),
    fiat("VED", "926", 2, "Bolívar Soberano", "Bs.D"),
    fiat("VES", "928", 2, "Bolívar Soberano", "Bs.S"),
    fiat("VND", "704", 0, "Dong", "₫"),
    fiat("VUV", "548", 0, "Vatu", "VT"),
    fiat("WST", "882", 2, "Tala", "WS$"),
    fiat("XAF", "950", 0, "CFA Franc BEAC", "FCFA"),
    fiat("XAG", "961", -1, "Silver", "XAG"),
    fiat("XAU", "959", -1, "Gold", "XAU"),
    fiat("XCD", "951", 2, "East Caribbean Dollar", "$"),
    fiat("XDR", "960", -1, "SDR (Special Drawing Right)", "XDR"),
    fiat("XOF", "952", 0, "CFA Franc BCEAO", "F CFA"),
    fiat("XPD", "964", -1, "Palladium", "XPD"),
    fiat("XPF", "953", 0, "CFP Franc", "₣"),
    fiat("XPT", "962", -1, "Platinum", "XPT"),
    fiat("XSU", "994", -1, "Sucre", "XSU"),
    fiat("XUA", "965", -1, "ADB Unit of Account", "XUA"),
    fiat("YER", "886", 2, "Yemeni Rial", "﷼"),
    fiat("ZAR", "710", 2, "Rand", "R"),
    fiat("ZMW", "967", 2, "Zambian Kwacha", "K"),
    fiat("ZWG", "924", 2, "Zimbabwe Gold", "ZiG"),
];

/// ISO 3166 alpha-2 region to the ISO 4217 code of its currency.
#[rustfmt::skip]
pub static REGION_CURRENCIES: &[(&str, &str)] = &[
    ("AD", "EUR"), ("AE", "AED"), ("AF", "AFN"), ("AG", "XCD"), ("AI", "XCD"),
    ("AL", "ALL"), ("AM", "AMD"), ("AO", "AOA"), ("AR", "ARS"), ("AS", "USD"),
    ("AT", "EUR"), ("AU", "AUD"), ("AW", "AWG"), ("AX", "EUR"), ("AZ", "AZN"),
    ("BA", "BAM"), ("BB", "BBD"), ("BD", "BDT"), ("BE", "EUR"), ("BF", "XOF"),
    ("BG", "BGN"), ("BH", "BHD"), ("BI", "BIF"), ("BJ", "XOF"), ("BL", "EUR"),
    ("BM", "BMD"), ("BN", "BND"), ("BO", "BOB"), ("BQ", "USD"), ("BR", "BRL"),
    ("BS", "BSD"), ("BT", "BTN"), ("BW", "BWP"), ("BY", "BYN"), ("BZ", "BZD"),
    ("CA", "CAD"), ("CC", "AUD"), ("CD", "CDF"), ("CF", "XAF"), ("CG", "XAF"),
    ("CH", "CHF"), ("CI", "XOF"), ("CK", "NZD"), ("CL", "CLP"), ("CM", "XAF"),
    ("CN", "CNY"), ("CO", "COP"), ("CR", "CRC"), ("CU", "CUP"), ("CV", "CVE"),
    ("CW", "ANG"), ("CX", "AUD"), ("CY", "EUR"), ("CZ", "CZK"), ("DE", "EUR"),
    ("DJ", "DJF"), ("DK", "DKK"), ("DM", "XCD"), ("DO", "DOP"), ("DZ", "DZD"),
    ("EC", "USD"), ("EE", "EUR"), ("EG", "EGP"), ("EH", "MAD"), ("ER", "ERN"),
    ("ES", "EUR"), ("ET", "ETB"), ("FI", "EUR"), ("FJ", "FJD"), ("FK", "FKP"),
    ("FM", "USD"), ("FO", "DKK"), ("FR", "EUR"), ("GA", "XAF"), ("GB", "GBP"),
    ("GD", "XCD"), ("GE", "GEL"), ("GF", "EUR"), ("GG", "GBP"), ("GH", "GHS"),
    ("GI", "GIP"), ("GL", "DKK"), ("GM", "GMD"), ("GN", "GNF"), ("GP", "EUR"),
    ("GQ", "XAF"), ("GR", "EUR"), ("GT", "GTQ"), ("GU", "USD"), ("GW", "XOF"),
    ("GY", "GYD"), ("HK", "HKD"), ("HN", "HNL"), ("HR", "EUR"), ("HT", "HTG"),
    ("HU", "HUF"), ("ID", "IDR"), ("IE", "EUR"), ("IL", "ILS"), ("IM", "GBP"),
    ("IN", "INR"), ("IO", "USD"), ("IQ", "IQD"), ("IR", "IRR"), ("IS", "ISK"),
    ("IT", "EUR"), ("JE", "GBP"), ("JM", "JMD"), ("JO", "JOD"), ("JP", "JPY"),
    ("KE", "KES"), ("KG", "KGS"), ("KH", "KHR"), ("KI", "AUD"), ("KM", "KMF"),
    ("KN", "XCD"), ("KP", "KPW"), ("KR", "KRW"), ("KW", "KWD"), ("KY", "KYD"),
    ("KZ", "KZT"), ("LA", "LAK"), ("LB", "LBP"), ("LC", "XCD"), ("LI", "CHF"),
    ("LK", "LKR"), ("LR", "LRD"), ("LS", "LSL"), ("LT", "EUR"), ("LU", "EUR"),
    ("LV", "EUR"), ("LY", "LYD"), ("MA", "MAD"), ("MC", "EUR"), ("MD", "MDL"),
    ("ME", "EUR"), ("MF", "EUR"), ("MG", "MGA"), ("MH", "USD"), ("MK", "MKD"),
    ("ML", "XOF"), ("MM", "MMK"), ("MN", "MNT"), ("MO", "MOP"), ("MP", "USD"),
    ("MQ", "EUR"), ("MR", "MRU"), ("MS", "XCD"), ("MT", "EUR"), ("MU", "MUR"),
    ("MV", "MVR"), ("MW", "MWK"), ("MX", "MXN"), ("MY", "MYR"), ("MZ", "MZN"),
    ("NA", "NAD"), ("NC", "XPF"), ("NE", "XOF"), ("NF", "AUD"), ("NG", "NGN"),
    ("NI", "NIO"), ("NL", "EUR"), ("NO", "NOK"), ("NP", "NPR"), ("NR", "AUD"),
    ("NU", "NZD"), ("NZ", "NZD"), ("OM", "OMR"), ("PA", "PAB"), ("PE", "PEN"),
    ("PF", "XPF"), ("PG", "PGK"), ("PH", "PHP"), ("PK", "PKR"), ("PL", "PLN"),
    ("PM", "EUR"), ("PN", "NZD"), ("PR", "USD"), ("PS", "ILS"), ("PT", "EUR"),
    ("PW", "USD"), ("PY", "PYG"), ("QA", "QAR"), ("RE", "EUR"), ("RO", "RON"),
    ("RS", "RSD"), ("RU", "RUB"), ("RW", "RWF"), ("SA", "SAR"), ("SB", "SBD"),
    ("SC", "SCR"), ("SD", "SDG"), ("SE", "SEK"), ("SG", "SGD"), ("SH", "SHP"),
    ("SI", "EUR"), ("SK", "EUR"), ("SL", "SLE"), ("SM", "EUR"), ("SN", "XOF"),
    ("SO", "SOS"), ("SR", "SRD"), ("SS", "SSP"), ("ST", "STN"), ("SV", "USD"),
    ("SX", "ANG"), ("SY", "SYP"), ("SZ", "SZL"), ("TC", "USD"), ("TD", "XAF"),
    ("TG", "XOF"), ("TH", "THB"), ("TJ", "TJS"), ("TK", "NZD"), ("TL", "USD"),
    ("TM", "TMT"), ("TN", "TND"), ("TO", "TOP"), ("TR", "TRY"), ("TT", "TTD"),
    ("TV", "AUD"), ("TW", "TWD"), ("TZ", "TZS"), ("UA", "UAH"), ("UG", "UGX"),
    ("UM", "USD"), ("US", "USD"), ("UY", "UYU"), ("UZ", "UZS"), ("VA", "EUR"),
    ("VC", "XCD"), ("VE", "VES"), ("VG", "USD"), ("VI", "USD"), ("VN", "VND"),
    ("VU", "VUV"), ("WF", "XPF"), ("WS", "WST"), ("XK", "EUR"), ("YE", "YER"),
    ("YT", "EUR"), ("ZA", "ZAR"), ("ZM", "ZMW"), ("ZW", "ZWG"),
];
