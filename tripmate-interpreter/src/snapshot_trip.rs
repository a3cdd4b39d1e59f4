use fxhash::FxHashSet;
use std::borrow::Cow;
use tripmate_application::{
    ExchangeRateSource, ExpenseRecord, ExpenseSource, MemberRosterSource, SourceError, TripId,
    validation::{MAX_MEMBER_NAME, MAX_TRIP_NAME, validate_amount, validate_length},
};
use tripmate_domain::{CurrencyCode, ExchangeRates, Member, MemberId};
use tripmate_parser::Snapshot;

/// A parsed snapshot file serving as roster, expense and rate source.
pub struct SnapshotTrip {
    pub id: TripId,
    pub members: Vec<Member>,
    expenses: Vec<ExpenseRecord>,
    rates: ExchangeRates,
}

impl SnapshotTrip {
    /// Applies the input limits a user-facing form would enforce.
    pub fn from_snapshot(snapshot: &Snapshot<'_>) -> Result<Self, Cow<'static, str>> {
        validate_length(snapshot.trip, MAX_TRIP_NAME, "trip name")
            .map_err(|err| err.to_string())?;

        let mut seen = FxHashSet::default();
        let mut members = Vec::with_capacity(snapshot.members.len());
        for line in &snapshot.members {
            if !seen.insert(line.id) {
                return Err(
                    format!("line {}: member '{}' is declared twice", line.line, line.id).into(),
                );
            }
            validate_length(line.display_name, MAX_MEMBER_NAME, "member name")
                .map_err(|err| format!("line {}: {err}", line.line))?;
            let member = Member::try_new(line.id, line.display_name)
                .map_err(|err| format!("line {}: {err}", line.line))?;
            members.push(member);
        }

        let mut rates = ExchangeRates::new();
        for line in &snapshot.rates {
            let currency: CurrencyCode = line
                .currency
                .parse()
                .map_err(|err| format!("line {}: {err}", line.line))?;
            rates.insert(currency, line.rate);
        }

        let mut expenses = Vec::with_capacity(snapshot.expenses.len());
        for line in &snapshot.expenses {
            let currency = match line.currency {
                Some(code) => code
                    .parse::<CurrencyCode>()
                    .map_err(|err| format!("line {}: {err}", line.line))?,
                None => CurrencyCode::Jpy,
            };
            if currency == CurrencyCode::Jpy {
                validate_amount(line.amount, "amount")
                    .map_err(|err| format!("line {}: {err}", line.line))?;
            }

            expenses.push(ExpenseRecord {
                amount: line.amount,
                currency,
                paid_by: line.payer.map(MemberId::from),
                splits: line.splits.iter().copied().map(MemberId::from).collect(),
                is_settled: line.settled,
            });
        }

        Ok(Self {
            id: TripId::new(snapshot.trip),
            members,
            expenses,
            rates,
        })
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn exchange_rates(&self) -> &ExchangeRates {
        &self.rates
    }
}

impl ExpenseSource for SnapshotTrip {
    fn expenses(&self, trip: &TripId) -> Result<Vec<ExpenseRecord>, SourceError> {
        if *trip != self.id {
            return Err(SourceError::TripNotFound(trip.to_string()));
        }
        Ok(self.expenses.clone())
    }
}

impl MemberRosterSource for SnapshotTrip {
    fn roster(&self, trip: &TripId) -> Result<Vec<Member>, SourceError> {
        if *trip != self.id {
            return Err(SourceError::TripNotFound(trip.to_string()));
        }
        Ok(self.members.clone())
    }
}

impl ExchangeRateSource for SnapshotTrip {
    fn rates(&self, base: CurrencyCode) -> Result<ExchangeRates, SourceError> {
        if base != CurrencyCode::Jpy {
            return Err(SourceError::Request(format!(
                "snapshot rates are JPY-based, not {base}"
            )));
        }
        Ok(self.rates.clone())
    }
}
