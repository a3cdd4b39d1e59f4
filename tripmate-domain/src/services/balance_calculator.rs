use crate::model::{Expense, Member, MemberBalance, MemberId, Money};
use fxhash::FxHashMap;

/// Reduces a snapshot of expenses into one net balance per roster member.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Calculate balances for every member of the roster
    ///
    /// # Arguments
    /// * `expenses` - Expenses to settle
    /// * `members` - Trip roster; output follows its order
    ///
    /// # Returns
    /// One balance per roster entry. Payers and split members outside the
    /// roster are not tracked, so their share does not appear anywhere.
    pub fn calculate(&self, expenses: &[Expense], members: &[Member]) -> Vec<MemberBalance> {
        let mut balances: FxHashMap<&MemberId, Money> = members
            .iter()
            .map(|member| (member.id(), Money::ZERO))
            .collect();

        for expense in expenses {
            apply_expense(&mut balances, expense);
        }

        members
            .iter()
            .map(|member| MemberBalance {
                member: member.id().clone(),
                balance: balances.get(member.id()).copied().unwrap_or_default(),
            })
            .collect()
    }
}

fn apply_expense(balances: &mut FxHashMap<&MemberId, Money>, expense: &Expense) {
    let split = expense.split().members();
    let Some((last, rest)) = split.split_last() else {
        return;
    };

    let amount = expense.amount().amount();
    let per_person = amount / split.len() as i64;
    let remainder = amount - per_person * split.len() as i64;

    if let Some(payer) = expense.payer()
        && let Some(balance) = balances.get_mut(payer)
    {
        *balance += expense.amount();
    }

    for member in rest {
        if let Some(balance) = balances.get_mut(member) {
            *balance -= Money::from_i64(per_person);
        }
    }

    // The last listed member absorbs the remainder.
    if let Some(balance) = balances.get_mut(last) {
        *balance -= Money::from_i64(per_person + remainder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> BalanceCalculator {
        BalanceCalculator
    }

    fn roster(ids: &[&str]) -> Vec<Member> {
        ids.iter()
            .map(|id| Member::try_new(*id, id.to_lowercase()).expect("valid member"))
            .collect()
    }

    fn expense(amount: i64, payer: Option<&str>, split: &[&str]) -> Expense {
        Expense::try_new(
            Money::from_i64(amount),
            payer.map(MemberId::from),
            split.iter().copied().map(MemberId::from),
        )
        .expect("valid expense")
    }

    fn amounts(balances: &[MemberBalance]) -> Vec<(&str, i64)> {
        balances
            .iter()
            .map(|b| (b.member.as_str(), b.balance.amount()))
            .collect()
    }

    #[rstest]
    #[case::remainder_goes_to_last(
        vec![expense(100, Some("A"), &["A", "B", "C"])],
        vec![("A", 67), ("B", -33), ("C", -34)]
    )]
    #[case::remainder_follows_split_order(
        vec![expense(100, Some("A"), &["C", "B", "A"])],
        vec![("A", 66), ("B", -33), ("C", -33)]
    )]
    #[case::even_split(
        vec![expense(3000, Some("B"), &["A", "B", "C"])],
        vec![("A", -1000), ("B", 2000), ("C", -1000)]
    )]
    #[case::payer_outside_split(
        vec![expense(500, Some("C"), &["A", "B"])],
        vec![("A", -250), ("B", -250), ("C", 500)]
    )]
    #[case::empty_split_is_skipped(
        vec![expense(900, Some("A"), &[])],
        vec![("A", 0), ("B", 0), ("C", 0)]
    )]
    #[case::zero_amount(
        vec![expense(0, Some("A"), &["A", "B"])],
        vec![("A", 0), ("B", 0), ("C", 0)]
    )]
    #[case::amount_smaller_than_split(
        vec![expense(2, Some("A"), &["A", "B", "C"])],
        vec![("A", 2), ("B", 0), ("C", -2)]
    )]
    #[case::multiple_expenses(
        vec![
            expense(1200, Some("A"), &["A", "B", "C"]),
            expense(600, Some("B"), &["A", "B"]),
        ],
        vec![("A", 500), ("B", -100), ("C", -400)]
    )]
    #[case::no_expenses(vec![], vec![("A", 0), ("B", 0), ("C", 0)])]
    fn calculates_balances(
        calculator: BalanceCalculator,
        #[case] expenses: Vec<Expense>,
        #[case] expected: Vec<(&str, i64)>,
    ) {
        let members = roster(&["A", "B", "C"]);

        let balances = calculator.calculate(&expenses, &members);

        assert_eq!(amounts(&balances), expected);
    }

    #[rstest]
    fn missing_payer_is_skipped(calculator: BalanceCalculator) {
        let members = roster(&["A", "B"]);

        let balances = calculator.calculate(&[expense(100, None, &["A", "B"])], &members);

        assert_eq!(amounts(&balances), vec![("A", -50), ("B", -50)]);
    }

    #[rstest]
    fn unknown_references_are_not_reported(calculator: BalanceCalculator) {
        let members = roster(&["A", "B"]);
        let expenses = [
            expense(300, Some("X"), &["A", "B", "X"]),
            expense(200, Some("A"), &["B", "Y"]),
        ];

        let balances = calculator.calculate(&expenses, &members);

        assert_eq!(amounts(&balances), vec![("A", 100), ("B", -200)]);
    }

    #[rstest]
    fn output_follows_roster_order(calculator: BalanceCalculator) {
        let members = roster(&["C", "A", "B"]);

        let balances = calculator.calculate(&[expense(90, Some("A"), &["B"])], &members);

        assert_eq!(amounts(&balances), vec![("C", 0), ("A", 90), ("B", -90)]);
    }

    #[rstest]
    fn is_repeatable(calculator: BalanceCalculator) {
        let members = roster(&["A", "B", "C"]);
        let expenses = [
            expense(1000, Some("A"), &["A", "B", "C"]),
            expense(77, Some("C"), &["B", "C"]),
        ];

        assert_eq!(
            calculator.calculate(&expenses, &members),
            calculator.calculate(&expenses, &members)
        );
    }
}
