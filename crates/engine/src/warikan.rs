//! Bill splitting (warikan).
//!
//! A total is divided among `people`, optionally with weighted groups that
//! pay `ratio` times the regular share. Rounding happens per share and the
//! leftover lands in `remainder`: a shortage when truncating, a surplus when
//! rounding up to the next 100.

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a share is rounded to a payable amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rounding {
    /// Drop the fraction
    #[default]
    #[serde(rename = "truncate")]
    Truncate,
    /// Round up to the next multiple of 100
    #[serde(rename = "round_up_to_100")]
    RoundUpTo100,
}

impl Rounding {
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            Rounding::Truncate => amount.floor(),
            Rounding::RoundUpTo100 => (amount / 100.0).ceil() * 100.0,
        }
    }
}

/// `count` people paying `ratio` times the regular share
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightGroup {
    pub count: u32,
    pub ratio: f64,
}

impl WeightGroup {
    pub fn new(count: u32, ratio: f64) -> Self {
        Self { count, ratio }
    }
}

/// Per-person payment of one weighted group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupShare {
    pub count: u32,
    pub ratio: f64,
    pub pay: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitResult {
    Simple {
        per_person: f64,
        remainder: f64,
    },
    Weighted {
        regular_pay: f64,
        regular_count: u32,
        groups: Vec<GroupShare>,
        remainder: f64,
    },
}

impl SplitResult {
    pub fn remainder(&self) -> f64 {
        match self {
            SplitResult::Simple { remainder, .. } | SplitResult::Weighted { remainder, .. } => {
                *remainder
            }
        }
    }

    /// What each regular participant pays
    pub fn regular_pay(&self) -> f64 {
        match self {
            SplitResult::Simple { per_person, .. } => *per_person,
            SplitResult::Weighted { regular_pay, .. } => *regular_pay,
        }
    }

    /// Sum of every individual payment
    pub fn collected(&self, people: u32) -> f64 {
        match self {
            SplitResult::Simple { per_person, .. } => per_person * f64::from(people),
            SplitResult::Weighted {
                regular_pay,
                regular_count,
                groups,
                ..
            } => paid_total(*regular_pay, *regular_count, groups),
        }
    }
}

fn paid_total(regular_pay: f64, regular_count: u32, groups: &[GroupShare]) -> f64 {
    regular_pay * f64::from(regular_count)
        + groups
            .iter()
            .map(|g| g.pay * f64::from(g.count))
            .sum::<f64>()
}

/// Everything needed to compute a split
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRequest {
    pub total: f64,
    pub people: u32,
    pub rounding: Rounding,
    pub groups: Vec<WeightGroup>,
}

impl SplitRequest {
    pub fn new(total: f64, people: u32, rounding: Rounding) -> Self {
        Self {
            total,
            people,
            rounding,
            groups: Vec::new(),
        }
    }

    pub fn with_groups(mut self, groups: Vec<WeightGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Simple split without groups, weighted otherwise
    pub fn compute(&self) -> CalcResult<SplitResult> {
        if self.groups.is_empty() {
            compute_simple(self.total, self.people, self.rounding)
        } else {
            compute_weighted(self.total, self.people, &self.groups, self.rounding)
        }
    }
}

fn validate(total: f64, people: u32) -> CalcResult<()> {
    if !(total.is_finite() && total > 0.0) {
        return Err(CalcError::validation("total must be a positive amount"));
    }
    if people == 0 {
        return Err(CalcError::validation("people must be a positive integer"));
    }
    Ok(())
}

/// Even split of `total` among `people`.
pub fn compute_simple(total: f64, people: u32, rounding: Rounding) -> CalcResult<SplitResult> {
    validate(total, people)?;

    let headcount = f64::from(people);
    let per_person = rounding.apply(total / headcount);
    let remainder = match rounding {
        Rounding::Truncate => total % headcount,
        Rounding::RoundUpTo100 => per_person * headcount - total,
    };

    debug!(total, people, ?rounding, per_person, remainder, "simple split");
    Ok(SplitResult::Simple {
        per_person,
        remainder,
    })
}

/// Weighted split: each group's share is rounded on its own from the
/// rounded regular share, so rounding error compounds per group.
pub fn compute_weighted(
    total: f64,
    people: u32,
    groups: &[WeightGroup],
    rounding: Rounding,
) -> CalcResult<SplitResult> {
    validate(total, people)?;

    if let Some(group) = groups
        .iter()
        .find(|g| !g.ratio.is_finite() || g.ratio <= 0.0)
    {
        return Err(CalcError::validation(format!(
            "ratio must be a positive finite number, found {}",
            group.ratio
        )));
    }

    let grouped: u64 = groups.iter().map(|g| u64::from(g.count)).sum();
    let Some(regular_count) = u64::from(people)
        .checked_sub(grouped)
        .and_then(|r| u32::try_from(r).ok())
    else {
        return Err(CalcError::validation(format!(
            "groups exceed total headcount ({} > {})",
            grouped, people
        )));
    };

    let weighted_heads: f64 = groups.iter().map(|g| f64::from(g.count) * g.ratio).sum();
    let shares = f64::from(regular_count) + weighted_heads;
    if shares == 0.0 {
        return Err(CalcError::validation("nobody to split the total between"));
    }

    let regular_pay = rounding.apply(total / shares);
    let groups: Vec<GroupShare> = groups
        .iter()
        .map(|g| GroupShare {
            count: g.count,
            ratio: g.ratio,
            pay: rounding.apply(regular_pay * g.ratio),
        })
        .collect();

    let current_total = paid_total(regular_pay, regular_count, &groups);
    let remainder = match rounding {
        Rounding::Truncate => total - current_total,
        Rounding::RoundUpTo100 => current_total - total,
    };

    debug!(total, people, ?rounding, regular_pay, remainder, "weighted split");
    Ok(SplitResult::Weighted {
        regular_pay,
        regular_count,
        groups,
        remainder,
    })
}
