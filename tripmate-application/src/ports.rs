use crate::{
    error::SourceError,
    model::{ExpenseRecord, TripId},
};
use tripmate_domain::{CurrencyCode, ExchangeRates, Member, MemberId};

/// Supplies the stored expenses of a trip.
pub trait ExpenseSource: Send + Sync {
    fn expenses(&self, trip: &TripId) -> Result<Vec<ExpenseRecord>, SourceError>;
}

/// Supplies the member roster of a trip, in display order.
pub trait MemberRosterSource: Send + Sync {
    fn roster(&self, trip: &TripId) -> Result<Vec<Member>, SourceError>;
}

pub trait ExchangeRateSource: Send + Sync {
    /// Rates expressed against `base`.
    fn rates(&self, base: CurrencyCode) -> Result<ExchangeRates, SourceError>;
}

pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: &MemberId) -> Option<&str>;
}

impl MemberDirectory for [Member] {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.iter()
            .find(|member| member.id() == member_id)
            .map(Member::display_name)
    }
}

impl MemberDirectory for Vec<Member> {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.as_slice().display_name(member_id)
    }
}
