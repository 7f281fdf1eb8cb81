//! Payment transactions and the admin transaction browser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use storefront_core::{
    find_by_id, page_count, paginate, position_by_id, DomainError, DomainResult, Entity, Money,
    PageCursor, TransactionId, UserId,
};

use crate::order::OrderSummary;

pub const DEFAULT_TRANSACTIONS_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub total: Money,
    pub items: Vec<TransactionItem>,
    pub user_id: UserId,
    pub user_name: String,
    #[serde(default)]
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::new(self.total)
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Admin filters over the transaction list. Empty text and `None` bounds
/// impose no constraint; text matches are case-insensitive substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub status: Option<TransactionStatus>,
    pub item_name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_amount: Option<Money>,
    pub max_amount: Option<Money>,
    pub user_name: String,
    /// Exact transaction id.
    pub transaction_id: String,
}

impl TransactionFilter {
    /// Set the amount bounds from raw form input; malformed values are ignored.
    pub fn with_amounts(mut self, min: &str, max: &str) -> Self {
        self.min_amount = Money::parse_lenient(min);
        self.max_amount = Money::parse_lenient(max);
        self
    }

    /// Set the date bounds from `YYYY-MM-DD` form input; malformed values are ignored.
    pub fn with_dates(mut self, start: &str, end: &str) -> Self {
        self.start_date = parse_date(start);
        self.end_date = parse_date(end);
        self
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.status.is_some_and(|s| s != transaction.status) {
            return false;
        }
        if !self.item_name.is_empty() {
            let needle = self.item_name.to_lowercase();
            if !transaction.items.iter().any(|i| i.name.to_lowercase().contains(&needle)) {
                return false;
            }
        }
        if self.start_date.is_some_and(|start| transaction.date < start)
            || self.end_date.is_some_and(|end| transaction.date > end)
        {
            return false;
        }
        if self.min_amount.is_some_and(|min| transaction.total < min)
            || self.max_amount.is_some_and(|max| transaction.total > max)
        {
            return false;
        }
        if !self.user_name.is_empty()
            && !transaction
                .user_name
                .to_lowercase()
                .contains(&self.user_name.to_lowercase())
        {
            return false;
        }
        self.transaction_id.is_empty() || transaction.id.as_str() == self.transaction_id
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    filter: TransactionFilter,
    page_size: usize,
    cursor: PageCursor,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSACTIONS_PAGE_SIZE)
    }
}

impl TransactionStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            transactions: Vec::new(),
            filter: TransactionFilter::default(),
            page_size: page_size.max(1),
            cursor: PageCursor::new(),
        }
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn add(&mut self, transaction: Transaction) -> DomainResult<()> {
        if self.by_id(&transaction.id).is_some() {
            return Err(DomainError::conflict(format!(
                "transaction {} already exists",
                transaction.id
            )));
        }
        tracing::info!(transaction_id = %transaction.id, total = %transaction.total, "transaction recorded");
        self.transactions.push(transaction);
        Ok(())
    }

    pub fn remove(&mut self, id: &TransactionId) -> Option<Transaction> {
        let index = position_by_id(&self.transactions, id)?;
        tracing::info!(transaction_id = %id, "transaction removed");
        let removed = self.transactions.remove(index);
        let (page, len) = (self.cursor.current(), self.filtered().len());
        self.cursor.go_to(page, len, self.page_size);
        Some(removed)
    }

    pub fn by_user(&self, user_id: &UserId) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| &t.user_id == user_id).collect()
    }

    pub fn by_id(&self, id: &TransactionId) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: TransactionFilter) {
        self.filter = filter;
        self.cursor.reset();
    }

    pub fn filtered(&self) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn current_page(&self) -> usize {
        self.cursor.current()
    }

    pub fn set_page(&mut self, page: usize) -> usize {
        let len = self.filtered().len();
        self.cursor.go_to(page, len, self.page_size)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), self.page_size)
    }

    pub fn current_page_items(&self) -> Vec<&Transaction> {
        paginate(&self.filtered(), self.page_size, self.cursor.current()).to_vec()
    }
}
