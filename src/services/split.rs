//! Share calculator
//!
//! Turns an expense amount and a split policy into the ordered list of
//! participant shares. All arithmetic is in whole cents, so equal splits and
//! full percentage splits always add back up to the expense amount exactly.

use std::collections::HashSet;

use crate::error::{SettleError, SettleResult};
use crate::models::{MemberId, Money, Participant, SplitType, FULL_BASIS_POINTS};

/// One participant as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantInput {
    pub member_id: MemberId,
    /// Explicit share (exact and percentage splits)
    pub share: Option<Money>,
    /// Share in basis points, 10000 = 100% (percentage splits)
    pub percent: Option<u32>,
}

impl ParticipantInput {
    /// A participant in an equal split
    pub fn member(member_id: MemberId) -> Self {
        Self {
            member_id,
            share: None,
            percent: None,
        }
    }

    /// A participant with an explicit share
    pub fn with_share(member_id: MemberId, share: Money) -> Self {
        Self {
            member_id,
            share: Some(share),
            percent: None,
        }
    }

    /// A participant with a percentage of the total
    pub fn with_percent(member_id: MemberId, basis_points: u32) -> Self {
        Self {
            member_id,
            share: None,
            percent: Some(basis_points),
        }
    }
}

/// Computes participant shares for new expenses
#[derive(Debug, Clone, Copy)]
pub struct SplitCalculator {
    /// Allowed gap between explicit shares and the expense amount
    tolerance: Money,
}

impl Default for SplitCalculator {
    fn default() -> Self {
        Self::new(Money::from_cents(1))
    }
}

impl SplitCalculator {
    pub fn new(tolerance: Money) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    /// Shares for an expense only the payer takes part in
    pub fn individual(&self, total: Money, paid_by: MemberId) -> SettleResult<Vec<Participant>> {
        check_amount(total)?;
        Ok(vec![Participant::new(paid_by, total, true)])
    }

    /// Shares for an expense split among the given participants
    pub fn split(
        &self,
        total: Money,
        split_type: SplitType,
        paid_by: MemberId,
        participants: &[ParticipantInput],
    ) -> SettleResult<Vec<Participant>> {
        check_amount(total)?;

        if participants.is_empty() {
            return Err(SettleError::InvalidSplit(
                "An expense needs at least one participant".into(),
            ));
        }

        let mut seen = HashSet::new();
        for p in participants {
            if !seen.insert(p.member_id) {
                return Err(SettleError::InvalidSplit(format!(
                    "Member {} is listed more than once",
                    p.member_id
                )));
            }
        }

        let shares = match split_type {
            SplitType::Equal => total.split_evenly(participants.len()),
            SplitType::Exact => {
                let shares = exact_shares(participants)?;
                self.check_sum(total, &shares)?;
                shares
            }
            SplitType::Percentage => {
                let shares = percentage_shares(total, participants)?;
                self.check_sum(total, &shares)?;
                shares
            }
        };

        Ok(participants
            .iter()
            .zip(shares)
            .map(|(p, share)| Participant::new(p.member_id, share, p.member_id == paid_by))
            .collect())
    }

    fn check_sum(&self, total: Money, shares: &[Money]) -> SettleResult<()> {
        let sum: Money = shares.iter().sum();
        if (sum - total).abs() > self.tolerance {
            return Err(SettleError::Validation(format!(
                "Participant shares sum to {}, expected {}",
                sum, total
            )));
        }
        Ok(())
    }
}

fn check_amount(total: Money) -> SettleResult<()> {
    if !total.is_positive() || !total.is_within_limit() {
        return Err(SettleError::InvalidAmount(total));
    }
    Ok(())
}

fn checked_share(p: &ParticipantInput, share: Money) -> SettleResult<Money> {
    if share.is_negative() {
        return Err(SettleError::InvalidSplit(format!(
            "Share for member {} cannot be negative",
            p.member_id
        )));
    }
    if !share.is_within_limit() {
        return Err(SettleError::InvalidSplit(format!(
            "Share for member {} exceeds {}",
            p.member_id,
            Money::MAX
        )));
    }
    Ok(share)
}

fn exact_shares(participants: &[ParticipantInput]) -> SettleResult<Vec<Money>> {
    participants
        .iter()
        .map(|p| match p.share {
            Some(share) => checked_share(p, share),
            None => Err(SettleError::InvalidSplit(format!(
                "No amount given for member {}",
                p.member_id
            ))),
        })
        .collect()
}

fn percentage_shares(total: Money, participants: &[ParticipantInput]) -> SettleResult<Vec<Money>> {
    let mut shares = Vec::with_capacity(participants.len());
    let mut basis_points: u64 = 0;
    let mut all_percent = true;

    for p in participants {
        match (p.percent, p.share) {
            (Some(bps), _) => {
                if bps > FULL_BASIS_POINTS {
                    return Err(SettleError::InvalidSplit(format!(
                        "Percentage for member {} is above 100%",
                        p.member_id
                    )));
                }
                basis_points += u64::from(bps);
                shares.push(total.percentage(bps));
            }
            (None, Some(share)) => {
                all_percent = false;
                shares.push(checked_share(p, share)?);
            }
            (None, None) => {
                return Err(SettleError::InvalidSplit(format!(
                    "No percentage given for member {}",
                    p.member_id
                )));
            }
        }
    }

    // Hand out the cents lost to rounding down, one each from the front
    if all_percent && basis_points == u64::from(FULL_BASIS_POINTS) {
        let allocated: Money = shares.iter().sum();
        let leftover = (total - allocated).cents().max(0) as usize;
        for share in shares.iter_mut().take(leftover) {
            *share += Money::from_cents(1);
        }
    }

    Ok(shares)
}

/// Parse a percentage like "25", "12.5" or "33.33%" into basis points
pub fn parse_basis_points(s: &str) -> Result<u32, String> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let invalid = || format!("Invalid percentage: '{}'", s);

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits, ""),
    };

    if fraction.len() > 2 || (whole.is_empty() && fraction.is_empty()) {
        return Err(invalid());
    }

    let whole: u32 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: u32 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u32>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    let bps = whole
        .checked_mul(100)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(invalid)?;

    if bps > FULL_BASIS_POINTS {
        return Err(format!("Percentage cannot exceed 100: '{}'", s));
    }

    Ok(bps)
}
