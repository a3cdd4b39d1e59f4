use crate::{
    error::SettlementBuildError,
    model::{ExpenseRecord, SettlementResult, SettlementWarning, TripId},
    ports::{ExchangeRateSource, ExpenseSource, MemberRosterSource},
    validation::MAX_EXPENSE_AMOUNT,
};
use fxhash::FxHashSet;
use tripmate_domain::{
    BalanceCalculator, CurrencyCode, ExchangeRates, Expense, Member, MemberId, Money,
    SettlementPlanner, convert_to_jpy,
};

#[derive(Clone, Copy)]
pub struct SettlementService<'a> {
    expenses: &'a dyn ExpenseSource,
    roster: &'a dyn MemberRosterSource,
    rates: &'a dyn ExchangeRateSource,
    include_settled: bool,
}

impl<'a> SettlementService<'a> {
    pub fn new(
        expenses: &'a dyn ExpenseSource,
        roster: &'a dyn MemberRosterSource,
        rates: &'a dyn ExchangeRateSource,
    ) -> Self {
        Self {
            expenses,
            roster,
            rates,
            include_settled: false,
        }
    }

    /// Also settle records already marked as settled.
    pub fn include_settled(mut self, include: bool) -> Self {
        self.include_settled = include;
        self
    }

    /// Recomputes balances and transfers from the current snapshot of `trip`.
    pub fn settle(&self, trip: &TripId) -> Result<SettlementResult, SettlementBuildError> {
        let members = self
            .roster
            .roster(trip)
            .map_err(SettlementBuildError::Roster)?;
        let records: Vec<ExpenseRecord> = self
            .expenses
            .expenses(trip)
            .map_err(SettlementBuildError::Expenses)?
            .into_iter()
            .filter(|record| self.include_settled || !record.is_settled)
            .collect();

        let rates = if records
            .iter()
            .any(|record| record.currency != CurrencyCode::Jpy)
        {
            self.rates
                .rates(CurrencyCode::Jpy)
                .map_err(SettlementBuildError::ExchangeRates)?
        } else {
            ExchangeRates::new()
        };

        let expenses = build_expenses(&records, &rates)?;
        let warnings = collect_warnings(&expenses, &members);
        for warning in &warnings {
            tracing::warn!(trip = %trip, ?warning, "expense references outside the roster");
        }

        let total_amount: Money = expenses.iter().map(Expense::amount).sum();
        let balances = BalanceCalculator.calculate(&expenses, &members);
        let transfers = SettlementPlanner.plan(&balances);

        tracing::debug!(
            trip = %trip,
            members = members.len(),
            expenses = expenses.len(),
            transfers = transfers.len(),
            "settlement computed"
        );

        Ok(SettlementResult {
            balances,
            transfers,
            total_amount,
            warnings,
        })
    }
}

fn build_expenses(
    records: &[ExpenseRecord],
    rates: &ExchangeRates,
) -> Result<Vec<Expense>, SettlementBuildError> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let index = idx + 1;
            let amount = convert_to_jpy(record.amount, record.currency, rates)
                .map_err(|source| SettlementBuildError::Currency { index, source })?;
            if amount.amount() > MAX_EXPENSE_AMOUNT {
                return Err(SettlementBuildError::AmountTooLarge {
                    index,
                    amount,
                    max: MAX_EXPENSE_AMOUNT,
                });
            }
            Expense::try_new(amount, record.paid_by.clone(), record.splits.iter().cloned())
                .map_err(|source| SettlementBuildError::InvalidExpense { index, source })
        })
        .collect()
}

fn collect_warnings(expenses: &[Expense], members: &[Member]) -> Vec<SettlementWarning> {
    let roster: FxHashSet<&MemberId> = members.iter().map(Member::id).collect();
    let mut warnings = Vec::new();

    for (idx, expense) in expenses.iter().enumerate() {
        let expense_index = idx + 1;

        if expense.split().is_empty() {
            warnings.push(SettlementWarning::EmptySplit { expense_index });
            continue;
        }

        match expense.payer() {
            None => warnings.push(SettlementWarning::MissingPayer { expense_index }),
            Some(payer) if !roster.contains(payer) => {
                warnings.push(SettlementWarning::UnknownPayer {
                    expense_index,
                    member: payer.clone(),
                });
            }
            Some(_) => {}
        }

        for member in expense.split().iter() {
            if !roster.contains(member) {
                warnings.push(SettlementWarning::UnknownSplitMember {
                    expense_index,
                    member: member.clone(),
                });
            }
        }
    }

    warnings
}
