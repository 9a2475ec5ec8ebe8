//! Canonical catalogue of dashboard sections.
//!
//! The server's page catalog supplies *availability*; identity and the
//! Persian display label live here. This enum is also the source of truth
//! for "all known sections" used as the full-visibility fallback when no
//! saved customization exists.

/// A known home-screen section.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageKind {
    DynamicCard,
    SalesRevenue,
    AvailableFunds,
    DebitCredit,
    Cheques,
    UnsettledInvoices,
    TopSoldProducts,
    TopRevenueProducts,
    TopCustomers,
    TopSellers,
    CurrencyRates,
}

impl PageKind {
    pub const ALL: [PageKind; 11] = [
        PageKind::DynamicCard,
        PageKind::SalesRevenue,
        PageKind::AvailableFunds,
        PageKind::DebitCredit,
        PageKind::Cheques,
        PageKind::UnsettledInvoices,
        PageKind::TopSoldProducts,
        PageKind::TopRevenueProducts,
        PageKind::TopCustomers,
        PageKind::TopSellers,
        PageKind::CurrencyRates,
    ];

    /// Server-side page-name key.
    pub fn key(&self) -> &'static str {
        match self {
            PageKind::DynamicCard => "dynamicCard",
            PageKind::SalesRevenue => "salesrevenue",
            PageKind::AvailableFunds => "availablefunds",
            PageKind::DebitCredit => "debitcredit",
            PageKind::Cheques => "cheques",
            PageKind::UnsettledInvoices => "unsettledinvoices",
            PageKind::TopSoldProducts => "topNMostsoldproducts",
            PageKind::TopRevenueProducts => "topNMostrevenuableproducts",
            PageKind::TopCustomers => "topcustomers",
            PageKind::TopSellers => "topsellers",
            PageKind::CurrencyRates => "currencyrates",
        }
    }

    /// Persian display label for the UI.
    pub fn persian_title(&self) -> &'static str {
        match self {
            PageKind::DynamicCard => "کارت پویا",
            PageKind::SalesRevenue => "فروش و درآمد",
            PageKind::AvailableFunds => "موجودی صندوق‌ها",
            PageKind::DebitCredit => "بدهکاران و بستانکاران",
            PageKind::Cheques => "چک‌ها",
            PageKind::UnsettledInvoices => "فاکتورهای تسویه نشده",
            PageKind::TopSoldProducts => "پرفروش‌ترین کالاها",
            PageKind::TopRevenueProducts => "پردرآمدترین کالاها",
            PageKind::TopCustomers => "مشتریان برتر",
            PageKind::TopSellers => "فروشندگان برتر",
            PageKind::CurrencyRates => "نرخ ارز و کالا",
        }
    }

    /// Resolve a server page name to a known section.
    pub fn from_key(key: &str) -> Option<PageKind> {
        Self::ALL.iter().copied().find(|kind| kind.key() == key)
    }

    /// Display label for a raw server page name; unmapped names fall back
    /// to the name itself.
    pub fn title_for_key(key: &str) -> String {
        match Self::from_key(key) {
            Some(kind) => kind.persian_title().to_string(),
            None => key.to_string(),
        }
    }
}
