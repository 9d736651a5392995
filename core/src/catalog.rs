//! Static catalog: products, their durations, payment-method categories
//! and style presets.

/// Products offered by the store, in display order.
pub const PRODUCTS: &[&str] = &[
    "Melonity",
    "Umbrella",
    "Divine",
    "Hake",
    "Deadlock",
    "DotaAccount",
];

/// Durations for products without their own list.
pub const DEFAULT_DURATIONS: &[&str] = &["1 Day", "7 Days", "30 Days"];

const PRODUCT_DURATIONS: &[(&str, &[&str])] = &[
    (
        "Melonity",
        &["1 Day", "7 Days", "30 Days", "90 Days", "180 Days", "Lifetime"],
    ),
    (
        "Umbrella",
        &["1 Day", "7 Days", "14 Days", "30 Days", "90 Days", "180 Days", "Lifetime"],
    ),
    ("Divine", &["7 Days", "14 Days", "30 Days"]),
    ("Hake", &["1 Day", "7 Days", "30 Days", "90 Days", "180 Days"]),
    (
        "Deadlock",
        &["1 Day", "7 Days", "14 Days", "30 Days", "90 Days", "180 Days", "Lifetime"],
    ),
    ("DotaAccount", &["Ranked Ready", "TBD Rank Open"]),
];

/// Durations (or variants) sold for a product.
pub fn durations_for(product: &str) -> &'static [&'static str] {
    PRODUCT_DURATIONS
        .iter()
        .find(|(name, _)| *name == product)
        .map(|(_, durations)| *durations)
        .unwrap_or(DEFAULT_DURATIONS)
}

pub fn is_known_product(product: &str) -> bool {
    PRODUCTS.contains(&product)
}

/// A group of accepted payment methods shown in the payment info dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethodGroup {
    pub category: &'static str,
    /// Font Awesome icon class.
    pub icon: &'static str,
    pub methods: &'static [&'static str],
}

pub const PAYMENT_METHODS: &[PaymentMethodGroup] = &[
    PaymentMethodGroup {
        category: "Credit & Debit Card",
        icon: "fa-credit-card",
        methods: &["Visa", "Mastercard", "JCB", "American Express"],
    },
    PaymentMethodGroup {
        category: "E-Wallet",
        icon: "fa-wallet",
        methods: &[
            "Apple Pay", "Google Pay", "PayPal Wallet", "PayPal Pay Later", "Neteller",
            "Skrill Wallet", "Payoneer Wallet", "Paysafecard", "CVS Pharmacy", "Dollar General",
            "GrabPay", "Grab PayLater", "ShopeePay", "DANA", "Jenius Pay", "GCash",
            "Samsung Pay", "SSG Pay", "Toss", "TrueMoney", "LINE Pay", "WeChat Pay",
        ],
    },
    PaymentMethodGroup {
        category: "Cryptocurrency",
        icon: "fa-bitcoin",
        methods: &[
            "Binance Pay", "Bitcoin", "Ethereum", "Tether USDT (ETH)",
            "Tether USDT (Polygon)", "USDC", "USDC (Polygon)",
        ],
    },
    PaymentMethodGroup {
        category: "Online Banking",
        icon: "fa-building-columns",
        methods: &[
            "Rapid Transfer", "Multibanco", "MyBank", "PayNow", "DuitNow QR",
            "PromptPay QR", "PIX", "BLIK", "Bangkok Bank", "Bank of Ayudhya (Krungsri)",
            "Kasikornbank PAYPLUS", "Siam Commercial Bank", "BPI Online", "Unionbank Online",
        ],
    },
    PaymentMethodGroup {
        category: "Bank Transfer / ATM / CDM",
        icon: "fa-money-bill-transfer",
        methods: &[
            "BDO Internet Fund Transfer", "Chinabank OTC / ATM", "Landbank Online ATM Payment",
            "Bank Transfer", "Virtual Bank Transfer",
        ],
    },
    PaymentMethodGroup {
        category: "Bill Payment Online / ATM",
        icon: "fa-receipt",
        methods: &[
            "Asia United Bank", "BDO ATM Bill Payment", "BPI OTC Bill Payment",
            "Chinabank Online", "EastWest Bank OTC Bill Payment", "Metrobank Direct",
            "Metrobank OTC Bills Payment", "PayMaya Bills Pay", "PNB Online Bill Payment",
            "PNB OTC Bill Payment", "PS Bank Online Bill Payment", "RCBC OTC Bill Payment",
            "Robinsons Bank Online Bill Payment", "Robinsons Bank OTC Bill Payment",
            "Unionbank OTC Bill Payment",
        ],
    },
    PaymentMethodGroup {
        category: "Over the Counter (Non Bank)",
        icon: "fa-store",
        methods: &[
            "7-Eleven", "Alfamart", "Indomaret", "Cebuana Lhuillier", "EC Pay",
            "M. Lhuillier", "Palawan Pawnshop", "RD Pawnshop", "Robinsons Dept Store",
            "RuralNet", "SM Dept Counter",
        ],
    },
];

/// Gradient presets offered by the style editor as `(label, classes)`.
pub const GRADIENT_PRESETS: &[(&str, &str)] = &[
    ("Pink-Rose", "bg-gradient-to-r from-pink-500 to-rose-500"),
    ("Blue-Violet", "bg-gradient-to-r from-blue-600 to-violet-600"),
    ("Emerald-Lime", "bg-gradient-to-r from-emerald-500 to-lime-600"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_has_durations() {
        for product in PRODUCTS {
            assert!(!durations_for(product).is_empty(), "{product}");
        }
        assert_eq!(durations_for("Divine"), &["7 Days", "14 Days", "30 Days"]);
    }

    #[test]
    fn test_unknown_product_uses_default_durations() {
        assert_eq!(durations_for("Nope"), DEFAULT_DURATIONS);
        assert!(!is_known_product("Nope"));
    }

    #[test]
    fn test_payment_method_groups() {
        assert_eq!(PAYMENT_METHODS.len(), 7);
        assert!(PAYMENT_METHODS.iter().all(|g| !g.methods.is_empty()));
        let crypto = PAYMENT_METHODS.iter().find(|g| g.category == "Cryptocurrency").unwrap();
        assert!(crypto.methods.contains(&"Binance Pay"));
    }
}
