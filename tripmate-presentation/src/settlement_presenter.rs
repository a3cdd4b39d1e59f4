use crate::money_format::{format_signed_yen, format_yen};
use std::fmt::Write as _;
use tripmate_application::{MemberDirectory, SettlementResult};
use tripmate_domain::{MemberBalance, MemberId, Money, Transfer};
use tripmate_i18n as i18n;

pub struct SettlementPresenter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceTone {
    /// Is owed money.
    Positive,
    /// Owes money.
    Negative,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceRow {
    pub name: String,
    pub amount: String,
    pub tone: BalanceTone,
}

pub struct SettlementView {
    pub total: String,
    pub balance_rows: Vec<BalanceRow>,
    pub transfer_lines: Vec<String>,
    pub share_text: String,
}

impl SettlementPresenter {
    pub fn render(
        trip_label: &str,
        result: &SettlementResult,
        member_directory: &dyn MemberDirectory,
    ) -> SettlementView {
        SettlementView {
            total: format_yen(result.total_amount),
            balance_rows: Self::balance_rows(&result.balances, member_directory),
            transfer_lines: Self::transfer_lines(&result.transfers, member_directory),
            share_text: Self::share_text(
                trip_label,
                &result.transfers,
                result.total_amount,
                member_directory,
            ),
        }
    }

    /// Plain-text summary for the clipboard or a messaging share link.
    pub fn share_text(
        trip_label: &str,
        transfers: &[Transfer],
        total_amount: Money,
        member_directory: &dyn MemberDirectory,
    ) -> String {
        if transfers.is_empty() {
            return format!(
                "{}\n\n{}",
                i18n::share_heading(trip_label, i18n::SETTLEMENT_COMPLETE),
                i18n::NO_SETTLEMENT_NEEDED
            );
        }

        let mut text = String::with_capacity(128 + transfers.len() * 48);
        let _ = writeln!(
            text,
            "{}\n",
            i18n::share_heading(trip_label, i18n::SETTLEMENT_REQUEST)
        );
        let _ = writeln!(text, "💰 {}: {}\n", i18n::TOTAL, format_yen(total_amount));
        let _ = writeln!(text, "📝 {}:", i18n::SETTLEMENT_DETAILS);
        for (idx, transfer) in transfers.iter().enumerate() {
            let _ = writeln!(
                text,
                "{}. {}",
                idx + 1,
                format_transfer(transfer, member_directory)
            );
        }
        let _ = write!(text, "\n{}", i18n::SHARE_FOOTER);

        text
    }

    pub fn balance_rows(
        balances: &[MemberBalance],
        member_directory: &dyn MemberDirectory,
    ) -> Vec<BalanceRow> {
        balances
            .iter()
            .map(|entry| BalanceRow {
                name: format_member_label(&entry.member, member_directory).to_string(),
                amount: format_signed_yen(entry.balance),
                tone: match entry.balance.signum() {
                    1 => BalanceTone::Positive,
                    -1 => BalanceTone::Negative,
                    _ => BalanceTone::Neutral,
                },
            })
            .collect()
    }

    pub fn transfer_lines(
        transfers: &[Transfer],
        member_directory: &dyn MemberDirectory,
    ) -> Vec<String> {
        transfers
            .iter()
            .map(|transfer| format_transfer(transfer, member_directory))
            .collect()
    }

    /// Two-column table of balances, one member per line.
    pub fn balance_table(rows: &[BalanceRow]) -> String {
        let name_width = rows
            .iter()
            .map(|row| row.name.chars().count())
            .chain(std::iter::once(i18n::MEMBER.chars().count()))
            .max()
            .unwrap_or_default();

        let mut table = String::new();
        let _ = writeln!(
            table,
            "{}  {}",
            pad_end(i18n::MEMBER, name_width),
            i18n::BALANCE
        );
        for row in rows {
            let _ = writeln!(table, "{}  {}", pad_end(&row.name, name_width), row.amount);
        }
        table
    }
}

fn format_transfer(transfer: &Transfer, member_directory: &dyn MemberDirectory) -> String {
    format!(
        "{} → {}: {}",
        format_member_label(&transfer.from, member_directory),
        format_member_label(&transfer.to, member_directory),
        format_yen(transfer.amount)
    )
}

fn format_member_label<'a>(
    member_id: &MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> &'a str {
    member_directory
        .display_name(member_id)
        .unwrap_or(i18n::UNKNOWN_MEMBER)
}

fn pad_end(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let mut padded = String::with_capacity(value.len() + width.saturating_sub(len));
    padded.push_str(value);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tripmate_domain::Member;

    #[fixture]
    fn members() -> Vec<Member> {
        [("a", "Alice"), ("b", "Bob"), ("c", "Carol"), ("d", "Dave")]
            .into_iter()
            .map(|(id, name)| Member::try_new(id, name).expect("valid member"))
            .collect()
    }

    fn transfer(from: &str, to: &str, amount: i64) -> Transfer {
        Transfer {
            from: MemberId::from(from),
            to: MemberId::from(to),
            amount: Money::from_i64(amount),
        }
    }

    fn balance(member: &str, amount: i64) -> MemberBalance {
        MemberBalance {
            member: MemberId::from(member),
            balance: Money::from_i64(amount),
        }
    }

    #[rstest]
    fn share_text_lists_transfers_in_order(members: Vec<Member>) {
        let transfers = [
            transfer("d", "a", 300),
            transfer("d", "b", 100),
            transfer("c", "b", 1500),
        ];

        let text = SettlementPresenter::share_text(
            "沖縄旅行",
            &transfers,
            Money::from_i64(1234567),
            &members,
        );

        let heading = i18n::share_heading("沖縄旅行", i18n::SETTLEMENT_REQUEST);
        assert!(text.starts_with(&heading));
        assert!(text.contains("¥1,234,567"));
        assert!(text.ends_with(i18n::SHARE_FOOTER));

        let lines: Vec<&str> = text.lines().filter(|line| line.contains('→')).collect();
        assert_eq!(
            lines,
            vec![
                "1. Dave → Alice: ¥300",
                "2. Dave → Bob: ¥100",
                "3. Carol → Bob: ¥1,500",
            ]
        );
    }

    #[rstest]
    fn share_text_without_transfers_declares_completion(members: Vec<Member>) {
        let text = SettlementPresenter::share_text("京都", &[], Money::from_i64(4000), &members);

        assert_eq!(
            text,
            format!(
                "{}\n\n{}",
                i18n::share_heading("京都", i18n::SETTLEMENT_COMPLETE),
                i18n::NO_SETTLEMENT_NEEDED
            )
        );
        assert!(text.contains("京都"));
        assert!(!text.contains('→'));
    }

    #[rstest]
    fn unknown_members_use_fallback_label(members: Vec<Member>) {
        let lines = SettlementPresenter::transfer_lines(&[transfer("x", "a", 10)], &members);

        assert_eq!(lines, vec![format!("{} → Alice: ¥10", i18n::UNKNOWN_MEMBER)]);
    }

    #[rstest]
    fn balance_rows_carry_sign_and_tone(members: Vec<Member>) {
        let rows = SettlementPresenter::balance_rows(
            &[balance("a", 1200), balance("b", 0), balance("c", -1200)],
            &members,
        );

        assert_eq!(
            rows,
            vec![
                BalanceRow {
                    name: "Alice".to_string(),
                    amount: "+¥1,200".to_string(),
                    tone: BalanceTone::Positive,
                },
                BalanceRow {
                    name: "Bob".to_string(),
                    amount: "¥0".to_string(),
                    tone: BalanceTone::Neutral,
                },
                BalanceRow {
                    name: "Carol".to_string(),
                    amount: "¥-1,200".to_string(),
                    tone: BalanceTone::Negative,
                },
            ]
        );
    }

    #[rstest]
    fn balance_table_has_one_line_per_member(members: Vec<Member>) {
        let rows =
            SettlementPresenter::balance_rows(&[balance("a", 50), balance("d", -50)], &members);

        let table = SettlementPresenter::balance_table(&rows);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(i18n::MEMBER));
        assert!(lines[1].starts_with("Alice") && lines[1].ends_with("+¥50"));
        assert!(lines[2].starts_with("Dave") && lines[2].ends_with("¥-50"));
    }

    #[rstest]
    fn render_uses_display_names(members: Vec<Member>) {
        let result = SettlementResult {
            balances: vec![balance("a", 100), balance("b", -100)],
            transfers: vec![transfer("b", "a", 100)],
            total_amount: Money::from_i64(200),
            warnings: Vec::new(),
        };

        let view = SettlementPresenter::render("Trip", &result, &members);

        assert_eq!(view.total, "¥200");
        assert_eq!(view.transfer_lines, vec!["Bob → Alice: ¥100".to_string()]);
        assert_eq!(view.balance_rows.len(), 2);
        assert!(view.share_text.contains("1. Bob → Alice: ¥100"));
    }
}
