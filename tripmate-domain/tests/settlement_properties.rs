use proptest::prelude::*;
use std::collections::HashMap;
use tripmate_domain::{
    BalanceCalculator, Expense, Member, MemberBalance, MemberId, Money, SettlementPlanner,
};

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn roster(member_count: usize) -> Vec<Member> {
    NAMES[..member_count]
        .iter()
        .map(|name| Member::try_new(*name, *name).expect("valid member"))
        .collect()
}

/// Picks split members from a bit mask, rotated so the last member varies.
fn split_members(member_count: usize, mask: usize, rotation: usize) -> Vec<MemberId> {
    (0..member_count)
        .map(|idx| (idx + rotation) % member_count)
        .filter(|idx| mask & (1 << idx) != 0)
        .map(|idx| MemberId::from(NAMES[idx]))
        .collect()
}

fn build_expenses(
    member_count: usize,
    amounts: &[u32],
    payer_indexes: &[usize],
    split_masks: &[usize],
) -> Vec<Expense> {
    amounts
        .iter()
        .enumerate()
        .map(|(idx, amount)| {
            let payer = payer_indexes.get(idx).copied().unwrap_or(0) % member_count;
            let mask = split_masks.get(idx).copied().unwrap_or(0);
            Expense::try_new(
                Money::from_i64(i64::from(*amount)),
                Some(MemberId::from(NAMES[payer])),
                split_members(member_count, mask, idx),
            )
            .expect("valid expense")
        })
        .collect()
}

fn apply_transfers(
    balances: &[MemberBalance],
    planner: &SettlementPlanner,
) -> HashMap<MemberId, i64> {
    let mut remaining: HashMap<MemberId, i64> = balances
        .iter()
        .map(|entry| (entry.member.clone(), entry.balance.amount()))
        .collect();
    for transfer in planner.plan(balances) {
        *remaining.entry(transfer.from).or_insert(0) += transfer.amount.amount();
        *remaining.entry(transfer.to).or_insert(0) -= transfer.amount.amount();
    }
    remaining
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0u32..=100_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        split_masks in prop::collection::vec(0usize..=63, 0..=30),
    ) {
        let members = roster(member_count);
        let expenses = build_expenses(member_count, &amounts, &payer_indexes, &split_masks);

        let balances = BalanceCalculator.calculate(&expenses, &members);

        prop_assert_eq!(balances.len(), members.len());
        let total: Money = balances.iter().map(|entry| entry.balance).sum();
        prop_assert_eq!(total, Money::zero());
    }

    #[test]
    fn balances_are_repeatable(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0u32..=100_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        split_masks in prop::collection::vec(0usize..=63, 0..=30),
    ) {
        let members = roster(member_count);
        let expenses = build_expenses(member_count, &amounts, &payer_indexes, &split_masks);

        prop_assert_eq!(
            BalanceCalculator.calculate(&expenses, &members),
            BalanceCalculator.calculate(&expenses, &members)
        );
    }

    #[test]
    fn transfers_settle_every_balance(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(0u32..=100_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        split_masks in prop::collection::vec(0usize..=63, 0..=30),
    ) {
        let members = roster(member_count);
        let expenses = build_expenses(member_count, &amounts, &payer_indexes, &split_masks);
        let balances = BalanceCalculator.calculate(&expenses, &members);
        let planner = SettlementPlanner;

        for (member, remaining) in apply_transfers(&balances, &planner) {
            prop_assert_eq!(remaining, 0, "{} is left with {}", member, remaining);
        }

        let transfers = planner.plan(&balances);
        let nonzero = balances.iter().filter(|entry| !entry.balance.is_zero()).count();
        prop_assert!(transfers.len() <= nonzero.saturating_sub(1));
        for transfer in &transfers {
            prop_assert!(transfer.amount.is_positive());
            prop_assert_ne!(&transfer.from, &transfer.to);
        }
    }

    #[test]
    fn zero_balances_have_no_transfers(member_count in 0usize..=6) {
        let balances: Vec<MemberBalance> = NAMES[..member_count]
            .iter()
            .map(|name| MemberBalance { member: MemberId::from(*name), balance: Money::zero() })
            .collect();

        prop_assert!(SettlementPlanner.plan(&balances).is_empty());
    }
}
