use tripmate_application::SettlementWarning;

pub fn format_settlement_warning(warning: &SettlementWarning) -> String {
    match warning {
        SettlementWarning::MissingPayer { expense_index } => {
            tripmate_i18n::missing_payer(*expense_index)
        }
        SettlementWarning::UnknownPayer {
            expense_index,
            member,
        }
        | SettlementWarning::UnknownSplitMember {
            expense_index,
            member,
        } => tripmate_i18n::orphaned_reference(*expense_index, member),
        SettlementWarning::EmptySplit { expense_index } => {
            tripmate_i18n::empty_split(*expense_index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripmate_domain::MemberId;

    #[test]
    fn orphaned_reference_names_member_and_expense() {
        let message = format_settlement_warning(&SettlementWarning::UnknownSplitMember {
            expense_index: 4,
            member: MemberId::from("ghost"),
        });

        assert!(message.contains("#4"));
        assert!(message.contains("ghost"));
    }
}
