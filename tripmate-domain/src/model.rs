use arcstr::ArcStr;
use fxhash::FxHashSet;
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// Identifier of a member within one trip's roster.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(ArcStr);

impl MemberId {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemberBuildError {
    #[error("Display name of member '{0}' is empty")]
    EmptyDisplayName(MemberId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    display_name: ArcStr,
}

impl Member {
    pub fn try_new(
        id: impl Into<MemberId>,
        display_name: impl Into<ArcStr>,
    ) -> Result<Self, MemberBuildError> {
        let id = id.into();
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(MemberBuildError::EmptyDisplayName(id));
        }
        Ok(Self { id, display_name })
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Amount in the smallest currency unit (yen).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Ordered, duplicate-free members sharing one expense.
///
/// The last member absorbs the remainder of the integer division, so the
/// order is part of the value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitSet {
    members: Vec<MemberId>,
}

impl SplitSet {
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemberId> + '_ {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseBuildError {
    #[error("Expense amount must not be negative (found {0})")]
    NegativeAmount(i64),
    #[error("Member '{0}' appears more than once in the split set")]
    DuplicateSplitMember(MemberId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    amount: Money,
    payer: Option<MemberId>,
    split: SplitSet,
}

impl Expense {
    pub fn try_new<I>(
        amount: Money,
        payer: Option<MemberId>,
        split: I,
    ) -> Result<Self, ExpenseBuildError>
    where
        I: IntoIterator<Item = MemberId>,
    {
        if amount.is_negative() {
            return Err(ExpenseBuildError::NegativeAmount(amount.amount()));
        }

        let mut seen = FxHashSet::default();
        let mut members = Vec::new();
        for member in split {
            if !seen.insert(member.clone()) {
                return Err(ExpenseBuildError::DuplicateSplitMember(member));
            }
            members.push(member);
        }

        Ok(Self {
            amount,
            payer,
            split: SplitSet { members },
        })
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn payer(&self) -> Option<&MemberId> {
        self.payer.as_ref()
    }

    pub fn split(&self) -> &SplitSet {
        &self.split
    }
}

/// Net position of one member: positive is owed money, negative owes money.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberBalance {
    pub member: MemberId,
    pub balance: Money,
}

/// One recommended payment from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}
