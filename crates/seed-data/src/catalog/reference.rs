//! Structural lookup tables every tenant starts with.

pub struct CurrencyTemplate {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimal_places: u8,
}

pub const CURRENCIES: &[CurrencyTemplate] = &[
    CurrencyTemplate { code: "USD", name: "US Dollar", symbol: "$", decimal_places: 2 },
    CurrencyTemplate { code: "EUR", name: "Euro", symbol: "€", decimal_places: 2 },
    CurrencyTemplate { code: "GBP", name: "Pound Sterling", symbol: "£", decimal_places: 2 },
    CurrencyTemplate { code: "CAD", name: "Canadian Dollar", symbol: "CA$", decimal_places: 2 },
    CurrencyTemplate { code: "AUD", name: "Australian Dollar", symbol: "A$", decimal_places: 2 },
    CurrencyTemplate { code: "INR", name: "Indian Rupee", symbol: "₹", decimal_places: 2 },
    CurrencyTemplate { code: "CHF", name: "Swiss Franc", symbol: "CHF", decimal_places: 2 },
    CurrencyTemplate { code: "JPY", name: "Japanese Yen", symbol: "¥", decimal_places: 0 },
    CurrencyTemplate { code: "SGD", name: "Singapore Dollar", symbol: "S$", decimal_places: 2 },
    CurrencyTemplate { code: "AED", name: "UAE Dirham", symbol: "AED", decimal_places: 2 },
];

/// Code of the currency invoices favour when the tenant has it.
pub const PREFERRED_CURRENCY: &str = "USD";

/// (name, description)
pub const CASE_TYPES: &[(&str, &str)] = &[
    ("Civil Litigation", "Disputes between private parties seeking damages or injunctions"),
    ("Criminal Defense", "Representation of individuals charged with criminal offences"),
    ("Family Law", "Divorce, custody, support, and adoption matters"),
    ("Corporate", "Formation, governance, and transactions of business entities"),
    ("Employment", "Wrongful termination, discrimination, and wage claims"),
    ("Real Estate", "Conveyancing, leases, and property disputes"),
    ("Intellectual Property", "Patents, trademarks, copyright, and trade secrets"),
    ("Immigration", "Visas, residency, and naturalization proceedings"),
    ("Personal Injury", "Claims arising from accidents and negligence"),
    ("Probate", "Administration of estates, wills, and trusts"),
    ("Tax", "Tax planning, audits, and disputes with revenue authorities"),
    ("Bankruptcy", "Insolvency proceedings and creditor negotiations"),
];

/// (name, is_closed, sort_order)
pub const CASE_STATUSES: &[(&str, bool, i32)] = &[
    ("Intake", false, 10),
    ("Open", false, 20),
    ("Discovery", false, 30),
    ("Trial Preparation", false, 40),
    ("Settlement Negotiation", false, 50),
    ("On Hold", false, 60),
    ("Closed - Won", true, 70),
    ("Closed - Settled", true, 80),
    ("Closed - Dismissed", true, 90),
];

/// (name, description)
pub const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("Pleading", "Complaints, answers, and counterclaims"),
    ("Motion", "Requests for a ruling or order from the court"),
    ("Contract", "Agreements and amendments"),
    ("Correspondence", "Letters and emails with clients or opposing counsel"),
    ("Evidence", "Exhibits, photographs, and records"),
    ("Affidavit", "Sworn written statements"),
    ("Court Order", "Orders and judgments issued by the court"),
    ("Engagement Letter", "Scope and terms of representation"),
    ("Invoice", "Billing statements sent to the client"),
    ("Memo", "Internal research and strategy memoranda"),
];

/// (name, color)
pub const TASK_CATEGORIES: &[(&str, &str)] = &[
    ("Court Filing", "#d9534f"),
    ("Client Communication", "#5bc0de"),
    ("Research", "#5cb85c"),
    ("Drafting", "#f0ad4e"),
    ("Review", "#337ab7"),
    ("Billing", "#6f42c1"),
    ("Administrative", "#6c757d"),
    ("Deadline", "#e83e8c"),
];

/// Firm names for company accounts, used in order.
pub const FIRM_NAMES: &[&str] = &[
    "Ashgrove & Pell LLP",
    "Marlowe Kincaid Partners",
    "Okafor Lindqvist Legal",
    "Harcourt Vance Attorneys",
    "Beaumont Reyes Law Group",
    "Tanaka Whitford LLP",
];
