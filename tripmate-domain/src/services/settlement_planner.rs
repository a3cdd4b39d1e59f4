use crate::model::{MemberBalance, MemberId, Money, Transfer};

/// Greedy debt netting between the largest creditor and the largest debtor.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Plan the transfers that drive every balance to zero
    ///
    /// Creditors and debtors are each sorted by descending magnitude with a
    /// stable sort, so equal balances keep their input order. The two lists
    /// are then walked in lockstep, settling `min(creditor, debtor)` at each
    /// step and advancing whichever side reached zero.
    ///
    /// # Returns
    /// Transfers in emission order; empty when every balance is zero.
    pub fn plan(&self, balances: &[MemberBalance]) -> Vec<Transfer> {
        let mut creditors: Vec<(&MemberId, Money)> = balances
            .iter()
            .filter(|entry| entry.balance.is_positive())
            .map(|entry| (&entry.member, entry.balance))
            .collect();
        let mut debtors: Vec<(&MemberId, Money)> = balances
            .iter()
            .filter(|entry| entry.balance.is_negative())
            .map(|entry| (&entry.member, entry.balance.abs()))
            .collect();

        creditors.sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1));
        debtors.sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1));

        let mut transfers = Vec::with_capacity(creditors.len() + debtors.len());
        let (mut i, mut j) = (0, 0);

        while i < creditors.len() && j < debtors.len() {
            let (creditor, credit) = &mut creditors[i];
            let (debtor, debt) = &mut debtors[j];

            let amount = (*credit).min(*debt);
            if amount.is_positive() {
                transfers.push(Transfer {
                    from: (*debtor).clone(),
                    to: (*creditor).clone(),
                    amount,
                });
            }

            *credit -= amount;
            *debt -= amount;

            if credit.is_zero() {
                i += 1;
            }
            if debt.is_zero() {
                j += 1;
            }
        }

        transfers
    }
}
