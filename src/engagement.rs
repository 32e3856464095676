// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::{Challenge, Notification, SavingsGoal};
use crate::utils::{parse_date, parse_decimal};
use chrono::{Datelike, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

/// One savings goal per (account, month); the month is normalized to its
/// first day.
pub fn add_savings_goal(
    conn: &Connection,
    account_id: i64,
    target_amount: Decimal,
    month: NaiveDate,
) -> Result<SavingsGoal> {
    if target_amount <= Decimal::ZERO {
        return Err(LedgerError::validation("Target amount must be positive"));
    }
    let first = month
        .with_day(1)
        .ok_or_else(|| LedgerError::validation("Invalid month date"))?;
    conn.execute(
        "INSERT INTO savings_goals(account_id, target_amount, month) VALUES (?1, ?2, ?3)",
        params![account_id, target_amount.to_string(), first.to_string()],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            LedgerError::DuplicateEntry(format!("Savings goal for {} already exists", first))
        }
        other => LedgerError::Db(other),
    })?;
    Ok(SavingsGoal {
        id: conn.last_insert_rowid(),
        account_id,
        target_amount,
        current_amount: Decimal::ZERO,
        month: first,
        is_achieved: false,
    })
}

pub fn list_savings_goals(conn: &Connection, account_id: i64) -> Result<Vec<SavingsGoal>> {
    let mut stmt = conn.prepare(
        "SELECT id, target_amount, current_amount, month, is_achieved
         FROM savings_goals WHERE account_id=?1 ORDER BY month DESC",
    )?;
    let mut rows = stmt.query(params![account_id])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(SavingsGoal {
            id: r.get(0)?,
            account_id,
            target_amount: parse_decimal(&r.get::<_, String>(1)?)?,
            current_amount: parse_decimal(&r.get::<_, String>(2)?)?,
            month: parse_date(&r.get::<_, String>(3)?)?,
            is_achieved: r.get(4)?,
        });
    }
    Ok(out)
}

/// Record progress toward a savings goal; achieving the target flips the flag.
pub fn update_savings_progress(
    conn: &Connection,
    account_id: i64,
    goal_id: i64,
    current_amount: Decimal,
) -> Result<SavingsGoal> {
    let target: Option<String> = conn
        .query_row(
            "SELECT target_amount FROM savings_goals WHERE id=?1 AND account_id=?2",
            params![goal_id, account_id],
            |r| r.get(0),
        )
        .optional()?;
    let target = match target {
        Some(t) => parse_decimal(&t)?,
        None => return Err(LedgerError::NotFound(format!("Savings goal {}", goal_id))),
    };
    let achieved = current_amount >= target;
    conn.execute(
        "UPDATE savings_goals SET current_amount=?1, is_achieved=?2 WHERE id=?3",
        params![current_amount.to_string(), achieved, goal_id],
    )?;
    let month: String = conn.query_row(
        "SELECT month FROM savings_goals WHERE id=?1",
        params![goal_id],
        |r| r.get(0),
    )?;
    Ok(SavingsGoal {
        id: goal_id,
        account_id,
        target_amount: target,
        current_amount,
        month: parse_date(&month)?,
        is_achieved: achieved,
    })
}

pub fn add_challenge(
    conn: &Connection,
    title: &str,
    description: &str,
    reward_points: i64,
    target_amount: Decimal,
) -> Result<Challenge> {
    conn.execute(
        "INSERT INTO challenges(title, description, reward_points, target_amount)
         VALUES (?1, ?2, ?3, ?4)",
        params![title, description, reward_points, target_amount.to_string()],
    )?;
    Ok(Challenge {
        id: conn.last_insert_rowid(),
        title: title.to_string(),
        description: description.to_string(),
        reward_points,
        target_amount,
        is_active: true,
    })
}

pub fn list_active_challenges(conn: &Connection) -> Result<Vec<Challenge>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, reward_points, target_amount, is_active
         FROM challenges WHERE is_active=1 ORDER BY id",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(Challenge {
            id: r.get(0)?,
            title: r.get(1)?,
            description: r.get(2)?,
            reward_points: r.get(3)?,
            target_amount: parse_decimal(&r.get::<_, String>(4)?)?,
            is_active: r.get(5)?,
        });
    }
    Ok(out)
}

pub fn join_challenge(conn: &Connection, account_id: i64, challenge_id: i64) -> Result<()> {
    let active: Option<bool> = conn
        .query_row(
            "SELECT is_active FROM challenges WHERE id=?1",
            params![challenge_id],
            |r| r.get(0),
        )
        .optional()?;
    match active {
        None => return Err(LedgerError::NotFound(format!("Challenge {}", challenge_id))),
        Some(false) => {
            return Err(LedgerError::validation(format!(
                "Challenge {} is not active",
                challenge_id
            )))
        }
        Some(true) => {}
    }
    conn.execute(
        "INSERT INTO user_challenges(account_id, challenge_id) VALUES (?1, ?2)
         ON CONFLICT(account_id, challenge_id) DO NOTHING",
        params![account_id, challenge_id],
    )?;
    Ok(())
}

/// Complete a joined challenge: mark it done, award its points, and drop a
/// notification. Completing twice is a `DuplicateEntry`.
pub fn complete_challenge(conn: &Connection, account_id: i64, challenge_id: i64) -> Result<i64> {
    let joined: Option<(i64, bool)> = conn
        .query_row(
            "SELECT id, is_completed FROM user_challenges
             WHERE account_id=?1 AND challenge_id=?2",
            params![account_id, challenge_id],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .optional()?;
    let (uc_id, completed) = match joined {
        Some(v) => v,
        None => {
            return Err(LedgerError::NotFound(format!(
                "Challenge {} not joined",
                challenge_id
            )))
        }
    };
    if completed {
        return Err(LedgerError::DuplicateEntry(format!(
            "Challenge {} already completed",
            challenge_id
        )));
    }
    let (title, points): (String, i64) = conn.query_row(
        "SELECT title, reward_points FROM challenges WHERE id=?1",
        params![challenge_id],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )?;
    conn.execute(
        "UPDATE user_challenges SET is_completed=1, completed_at=datetime('now') WHERE id=?1",
        params![uc_id],
    )?;
    conn.execute(
        "INSERT INTO reward_points(account_id, total_points) VALUES (?1, ?2)
         ON CONFLICT(account_id) DO UPDATE SET
             total_points=total_points+excluded.total_points,
             updated_at=datetime('now')",
        params![account_id, points],
    )?;
    add_notification(
        conn,
        account_id,
        "Challenge completed",
        &format!("'{}' completed, {} points awarded", title, points),
    )?;
    total_points(conn, account_id)
}

/// Get-or-create the account's points row.
pub fn total_points(conn: &Connection, account_id: i64) -> Result<i64> {
    conn.execute(
        "INSERT INTO reward_points(account_id) VALUES (?1)
         ON CONFLICT(account_id) DO NOTHING",
        params![account_id],
    )?;
    let points: i64 = conn.query_row(
        "SELECT total_points FROM reward_points WHERE account_id=?1",
        params![account_id],
        |r| r.get(0),
    )?;
    Ok(points)
}

pub fn add_notification(
    conn: &Connection,
    account_id: i64,
    title: &str,
    message: &str,
) -> Result<()> {
    conn.execute(
        "INSERT INTO notifications(account_id, title, message) VALUES (?1, ?2, ?3)",
        params![account_id, title, message],
    )?;
    Ok(())
}

pub fn list_notifications(conn: &Connection, account_id: i64) -> Result<Vec<Notification>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, message, is_read FROM notifications
         WHERE account_id=?1 ORDER BY created_at DESC, id DESC",
    )?;
    let mut rows = stmt.query(params![account_id])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(Notification {
            id: r.get(0)?,
            account_id,
            title: r.get(1)?,
            message: r.get(2)?,
            is_read: r.get(3)?,
        });
    }
    Ok(out)
}

pub fn mark_notification_read(conn: &Connection, account_id: i64, id: i64) -> Result<()> {
    let n = conn.execute(
        "UPDATE notifications SET is_read=1 WHERE id=?1 AND account_id=?2",
        params![id, account_id],
    )?;
    if n == 0 {
        return Err(LedgerError::NotFound(format!("Notification {}", id)));
    }
    Ok(())
}
