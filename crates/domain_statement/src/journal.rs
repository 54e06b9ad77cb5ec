//! Year-end adjustment journal
//!
//! The prepaid portions leave the expense accounts and land on asset
//! accounts until the covered periods run out. Each posting category
//! contributes one debit to its asset account and a matching credit to
//! its expense account, so the journal balances by construction.

use serde::Serialize;

use core_kernel::{Currency, Money, MoneyError};

use crate::entry::DocumentKind;

/// Normal balance side of a ledger account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountType {
    Asset,
    Expense,
}

/// A ledger account in the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerAccount {
    pub code: &'static str,
    pub name: &'static str,
    pub account_type: AccountType,
}

/// How a prepaid balance is grouped for posting
///
/// Blue book, fitness and emission fees are all registration charges of
/// the road authority and share one account pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostingCategory {
    VehicleRegistration,
    Insurance,
    Fuel,
}

impl PostingCategory {
    /// All categories in journal order
    pub const ALL: [PostingCategory; 3] = [
        PostingCategory::VehicleRegistration,
        PostingCategory::Insurance,
        PostingCategory::Fuel,
    ];

    /// The category a document kind posts under
    pub fn for_kind(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Insurance => PostingCategory::Insurance,
            DocumentKind::BlueBook | DocumentKind::Fitness | DocumentKind::Emission => {
                PostingCategory::VehicleRegistration
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostingCategory::VehicleRegistration => "Vehicle registration",
            PostingCategory::Insurance => "Insurance",
            PostingCategory::Fuel => "Fuel",
        }
    }

    /// The prepaid asset account the adjustment debits
    pub fn asset_account(&self) -> LedgerAccount {
        match self {
            PostingCategory::VehicleRegistration => LedgerAccount {
                code: "1410",
                name: "Prepaid Vehicle Registration",
                account_type: AccountType::Asset,
            },
            PostingCategory::Insurance => LedgerAccount {
                code: "1420",
                name: "Prepaid Insurance",
                account_type: AccountType::Asset,
            },
            PostingCategory::Fuel => LedgerAccount {
                code: "1430",
                name: "Prepaid Fuel",
                account_type: AccountType::Asset,
            },
        }
    }

    /// The expense account the adjustment credits
    pub fn expense_account(&self) -> LedgerAccount {
        match self {
            PostingCategory::VehicleRegistration => LedgerAccount {
                code: "5410",
                name: "Vehicle Registration Expenses",
                account_type: AccountType::Expense,
            },
            PostingCategory::Insurance => LedgerAccount {
                code: "5420",
                name: "Insurance Expenses",
                account_type: AccountType::Expense,
            },
            PostingCategory::Fuel => LedgerAccount {
                code: "5430",
                name: "Fuel Expenses",
                account_type: AccountType::Expense,
            },
        }
    }
}

/// Which side of the journal a line posts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostingType {
    Debit,
    Credit,
}

/// One line of the adjustment journal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalLine {
    pub posting_type: PostingType,
    pub account: LedgerAccount,
    pub description: String,
    pub amount: Money,
}

impl JournalLine {
    pub fn debit(account: LedgerAccount, amount: Money, description: impl Into<String>) -> Self {
        Self {
            posting_type: PostingType::Debit,
            account,
            description: description.into(),
            amount,
        }
    }

    pub fn credit(account: LedgerAccount, amount: Money, description: impl Into<String>) -> Self {
        Self {
            posting_type: PostingType::Credit,
            account,
            description: description.into(),
            amount,
        }
    }

    /// The amount when this line is a debit
    pub fn debit_amount(&self) -> Option<&Money> {
        match self.posting_type {
            PostingType::Debit => Some(&self.amount),
            PostingType::Credit => None,
        }
    }

    /// The amount when this line is a credit
    pub fn credit_amount(&self) -> Option<&Money> {
        match self.posting_type {
            PostingType::Credit => Some(&self.amount),
            PostingType::Debit => None,
        }
    }
}

/// Sums the journal's two sides
pub fn journal_totals(
    lines: &[JournalLine],
    currency: Currency,
) -> Result<(Money, Money), MoneyError> {
    let mut debits = Money::zero(currency);
    let mut credits = Money::zero(currency);
    for line in lines {
        match line.posting_type {
            PostingType::Debit => debits = debits.checked_add(&line.amount)?,
            PostingType::Credit => credits = credits.checked_add(&line.amount)?,
        }
    }
    Ok((debits, credits))
}

/// Whether debits equal credits
pub fn is_balanced(lines: &[JournalLine], currency: Currency) -> Result<bool, MoneyError> {
    let (debits, credits) = journal_totals(lines, currency)?;
    Ok(debits == credits)
}
