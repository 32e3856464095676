// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<TxKind> {
        match s {
            "income" => Some(TxKind::Income),
            "expense" => Some(TxKind::Expense),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub country: String,
    pub currency: String,
    pub initial_balance: Decimal,
    pub monthly_income: Option<Decimal>,
    pub estimated_expenses: Option<Decimal>,
    pub card_number: Option<String>,
    pub card_holder_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub kind: TxKind,
    pub amount: Decimal,
    pub purpose: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyLedger {
    pub id: i64,
    pub account_id: i64,
    pub year: i32,
    pub month: u32,
    pub monthly_income: Decimal,
    pub starting_balance: Decimal,
    pub current_balance: Decimal,
    pub used_daily_expense_dates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyGoal {
    pub id: i64,
    pub account_id: i64,
    pub year: i32,
    pub month: u32,
    pub monthly_income: Decimal,
    pub estimated_expenses: Decimal,
}

/// Effective planned figures for a month, after the one-month fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveGoal {
    pub monthly_income: Decimal,
    pub estimated_expenses: Decimal,
    pub is_current_month: bool,
}

/// One month of the cumulative balance fold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthHistory {
    pub year: i32,
    pub month: u32,
    pub monthly_income: Decimal,
    pub transaction_income: Decimal,
    pub expenses: Decimal,
    pub cumulative_balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub current_balance: Decimal,
    pub total_monthly_income: Decimal,
    pub today_spending: Decimal,
    pub card_number: Option<String>,
    pub card_holder_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyStatistics {
    pub monthly_income: Decimal,
    pub total_transactions: usize,
    pub total_addon: Decimal,
    pub total_expenses: Decimal,
    pub current_balance: Decimal,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceHistory {
    pub initial_balance: Decimal,
    pub current_cumulative_balance: Decimal,
    pub monthly_history: Vec<MonthHistory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub account_id: i64,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub month: NaiveDate,
    pub is_achieved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub reward_points: i64,
    pub target_amount: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub account_id: i64,
    pub title: String,
    pub message: String,
    pub is_read: bool,
}
