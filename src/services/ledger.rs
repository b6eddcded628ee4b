//! Ledger service
//!
//! Business logic for groups and expenses: validation, share calculation,
//! budget bookkeeping, persistence and the audit trail. Every mutation is
//! validated and applied on a working copy of the group, so a failed call
//! leaves the stored group exactly as it was.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{SettleError, SettleResult};
use crate::models::{
    Expense, ExpenseId, Group, GroupId, Member, MemberId, Money, Participant, SplitType,
    MIN_GROUP_NAME_LEN,
};
use crate::storage::Storage;

use super::balance::{self, MemberSummary};
use super::settlement::{self, Settlement};
use super::split::{ParticipantInput, SplitCalculator};

/// A member to add when creating a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInput {
    pub name: String,
    pub email: Option<String>,
    /// Falls back to the configured default budget
    pub budget: Option<Money>,
}

impl MemberInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            budget: None,
        }
    }

    pub fn with_budget(name: impl Into<String>, budget: Money) -> Self {
        Self {
            budget: Some(budget),
            ..Self::new(name)
        }
    }
}

/// Input for creating a new group
#[derive(Debug, Clone)]
pub struct CreateGroupInput {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<MemberInput>,
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: Money,
    pub description: Option<String>,
    pub paid_by: MemberId,
    pub split_type: SplitType,
    /// Only the payer takes part; `participants` must be empty or the payer
    pub individual: bool,
    pub participants: Vec<ParticipantInput>,
}

impl ExpenseInput {
    /// An expense split equally among the given members
    pub fn equal(
        title: impl Into<String>,
        amount: Money,
        paid_by: MemberId,
        members: &[MemberId],
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            description: None,
            paid_by,
            split_type: SplitType::Equal,
            individual: false,
            participants: members.iter().map(|id| ParticipantInput::member(*id)).collect(),
        }
    }

    /// An expense carried by the payer alone
    pub fn individual(title: impl Into<String>, amount: Money, paid_by: MemberId) -> Self {
        Self {
            title: title.into(),
            amount,
            description: None,
            paid_by,
            split_type: SplitType::Equal,
            individual: true,
            participants: Vec::new(),
        }
    }
}

/// Service for group and expense management
pub struct LedgerService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Create a new group with its members and no expenses
    pub fn create_group(&self, input: CreateGroupInput) -> SettleResult<Group> {
        let name = input.name.trim().to_string();
        if name.chars().count() < MIN_GROUP_NAME_LEN {
            return Err(SettleError::Validation(format!(
                "Group name must be at least {} characters",
                MIN_GROUP_NAME_LEN
            )));
        }

        if input.members.is_empty() {
            return Err(SettleError::Validation(
                "A group needs at least one member".into(),
            ));
        }

        let mut seen = HashSet::new();
        let mut members = Vec::with_capacity(input.members.len());
        for member in input.members {
            let member_name = member.name.trim().to_string();
            if member_name.is_empty() {
                return Err(SettleError::Validation("Member name cannot be empty".into()));
            }
            if !seen.insert(member_name.to_lowercase()) {
                return Err(SettleError::Duplicate {
                    entity_type: "Member",
                    identifier: member_name,
                });
            }

            let budget = member.budget.unwrap_or(self.settings.default_member_budget);
            if budget.is_negative() {
                return Err(SettleError::Validation(format!(
                    "Budget for {} cannot be negative",
                    member_name
                )));
            }
            if !budget.is_within_limit() {
                return Err(SettleError::Validation(format!(
                    "Budget for {} cannot exceed {}",
                    member_name,
                    Money::MAX
                )));
            }

            let mut created = Member::new(member_name, budget);
            created.email = member
                .email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty());
            members.push(created);
        }

        let description = input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let group = Group::new(name, description, members);

        self.storage.groups.insert(group.clone())?;
        self.storage.log_create(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            group.id,
            &group,
        )?;

        info!(group = %group.id, name = %group.name, members = group.members.len(), "created group");
        Ok(group)
    }

    /// Record an expense and charge every participant their share
    pub fn add_expense(&self, group_id: GroupId, input: ExpenseInput) -> SettleResult<Expense> {
        let calculator = SplitCalculator::new(self.settings.share_tolerance);
        let enforce_budgets = self.settings.enforce_budgets;

        let expense = self.storage.groups.update(group_id, |group| {
            let expense = build_expense(group, &calculator, input)?;
            if enforce_budgets {
                check_budgets(group, &expense.participants)?;
            }
            group.apply_expense(expense.clone());
            Ok(expense)
        })?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.title.clone()),
            group_id,
            &expense,
        )?;

        info!(
            group = %group_id,
            expense = %expense.id,
            amount = %expense.amount,
            participants = expense.participants.len(),
            "added expense"
        );
        Ok(expense)
    }

    /// Remove an expense, refunding each participant's share
    pub fn delete_expense(&self, group_id: GroupId, expense_id: ExpenseId) -> SettleResult<Expense> {
        let expense = self.storage.groups.update(group_id, |group| {
            group
                .remove_expense(expense_id)
                .ok_or_else(|| SettleError::expense_not_found(expense_id.to_string()))
        })?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.title.clone()),
            group_id,
            &expense,
        )?;

        info!(group = %group_id, expense = %expense.id, "deleted expense");
        Ok(expense)
    }

    /// Get a group by ID
    pub fn get_group(&self, group_id: GroupId) -> SettleResult<Option<Group>> {
        self.storage.groups.get(group_id)
    }

    /// All groups in creation order
    pub fn list_groups(&self) -> SettleResult<Vec<Group>> {
        self.storage.groups.get_all()
    }

    /// Find a group by name or ID
    pub fn find_group(&self, identifier: &str) -> SettleResult<Option<Group>> {
        self.storage.groups.find(identifier)
    }

    /// Find a group by name or ID, failing if it doesn't exist
    pub fn resolve_group(&self, identifier: &str) -> SettleResult<Group> {
        self.find_group(identifier)?
            .ok_or_else(|| SettleError::group_not_found(identifier))
    }

    /// Spending and balance totals for every member of a group
    pub fn member_summaries(&self, group_id: GroupId) -> SettleResult<Vec<MemberSummary>> {
        let group = self.require_group(group_id)?;
        Ok(balance::member_summaries(&group))
    }

    /// Suggested transfers that settle a group
    pub fn settlements(&self, group_id: GroupId) -> SettleResult<Vec<Settlement>> {
        let group = self.require_group(group_id)?;
        let settlements = settlement::group_settlements(&group);
        debug!(group = %group_id, count = settlements.len(), "computed settlements");
        Ok(settlements)
    }

    fn require_group(&self, group_id: GroupId) -> SettleResult<Group> {
        self.get_group(group_id)?
            .ok_or_else(|| SettleError::group_not_found(group_id.to_string()))
    }
}

fn build_expense(
    group: &Group,
    calculator: &SplitCalculator,
    input: ExpenseInput,
) -> SettleResult<Expense> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(SettleError::Validation("Expense title cannot be empty".into()));
    }

    if group.member(input.paid_by).is_none() {
        return Err(SettleError::member_not_found(input.paid_by.to_string()));
    }
    for p in &input.participants {
        if group.member(p.member_id).is_none() {
            return Err(SettleError::member_not_found(p.member_id.to_string()));
        }
    }

    let participants = if input.individual {
        let only_payer = match input.participants.as_slice() {
            [] => true,
            [p] => p.member_id == input.paid_by,
            _ => false,
        };
        if !only_payer {
            return Err(SettleError::InvalidSplit(
                "An individual expense can only involve the payer".into(),
            ));
        }
        calculator.individual(input.amount, input.paid_by)?
    } else {
        calculator.split(
            input.amount,
            input.split_type,
            input.paid_by,
            &input.participants,
        )?
    };

    // Keeps every group total, and so every balance, inside i64
    group
        .expenses
        .iter()
        .try_fold(input.amount, |acc, e| acc.checked_add(e.amount))
        .filter(Money::is_within_limit)
        .ok_or(SettleError::InvalidAmount(input.amount))?;

    let mut expense = Expense::new(
        title,
        input.amount,
        input.paid_by,
        input.split_type,
        participants,
    );
    expense.description = input
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    Ok(expense)
}

fn check_budgets(group: &Group, participants: &[Participant]) -> SettleResult<()> {
    for p in participants {
        if let Some(member) = group.member(p.member_id) {
            if !member.can_afford(p.share) {
                return Err(SettleError::InsufficientBudget {
                    member: member.name.clone(),
                    needed: p.share,
                    available: member.remaining,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::SettlePaths;
    use crate::storage::file_io::temp_path;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SettlePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn group_input(name: &str, members: &[&str]) -> CreateGroupInput {
        CreateGroupInput {
            name: name.into(),
            description: None,
            members: members.iter().map(|m| MemberInput::new(*m)).collect(),
        }
    }

    fn ids(group: &Group) -> Vec<MemberId> {
        group.members.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_create_group() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let mut input = group_input("  Weekend Getaway ", &["Neo", "Lizzy"]);
        input.members[1].budget = Some(Money::from_cents(50000));
        let group = service.create_group(input).unwrap();

        assert_eq!(group.name, "Weekend Getaway");
        assert!(group.expenses.is_empty());
        assert_eq!(group.members[0].budget, Money::from_cents(80000));
        assert_eq!(group.members[1].remaining, Money::from_cents(50000));
        assert_eq!(service.list_groups().unwrap().len(), 1);
        assert_eq!(service.find_group("weekend getaway").unwrap().unwrap().id, group.id);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Group);
    }

    #[test]
    fn test_create_group_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let err = service.create_group(group_input("ab", &["Neo"])).unwrap_err();
        assert!(matches!(err, SettleError::Validation(_)));

        let err = service.create_group(group_input("Trip", &[])).unwrap_err();
        assert!(matches!(err, SettleError::Validation(_)));

        let err = service
            .create_group(group_input("Trip", &["Neo", "neo"]))
            .unwrap_err();
        assert!(matches!(err, SettleError::Duplicate { .. }));

        let mut negative = group_input("Trip", &["Neo"]);
        negative.members[0].budget = Some(Money::from_cents(-1));
        assert!(service.create_group(negative).unwrap_err().is_validation());

        assert!(service.list_groups().unwrap().is_empty());
    }

    #[test]
    fn test_two_member_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service.create_group(group_input("Flat", &["A", "B"])).unwrap();
        let members = ids(&group);
        service
            .add_expense(
                group.id,
                ExpenseInput::equal("Dinner", Money::from_cents(10000), members[0], &members),
            )
            .unwrap();

        let summaries = service.member_summaries(group.id).unwrap();
        assert_eq!(summaries[0].total_paid, Money::from_cents(10000));
        assert_eq!(summaries[0].total_spent, Money::from_cents(5000));
        assert_eq!(summaries[0].balance, Money::from_cents(5000));
        assert_eq!(summaries[1].balance, Money::from_cents(-5000));

        let settlements = service.settlements(group.id).unwrap();
        assert_eq!(settlements.len(), 1);
        assert_eq!(settlements[0].from, members[1]);
        assert_eq!(settlements[0].to, members[0]);
        assert_eq!(settlements[0].amount, Money::from_cents(5000));
    }

    #[test]
    fn test_three_member_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service
            .create_group(group_input("Road Trip", &["A", "B", "C"]))
            .unwrap();
        let members = ids(&group);
        service
            .add_expense(
                group.id,
                ExpenseInput::equal("Fuel", Money::from_cents(9000), members[0], &members),
            )
            .unwrap();
        let solo = service
            .add_expense(
                group.id,
                ExpenseInput::individual("Snacks", Money::from_cents(3000), members[1]),
            )
            .unwrap();
        assert!(solo.is_individual());

        let balances: Vec<i64> = service
            .member_summaries(group.id)
            .unwrap()
            .iter()
            .map(|s| s.balance.cents())
            .collect();
        assert_eq!(balances, vec![6000, -3000, -3000]);

        let settlements = service.settlements(group.id).unwrap();
        assert_eq!(settlements.len(), 2);
        let total: Money = settlements.iter().map(|s| s.amount).sum();
        assert_eq!(total, Money::from_cents(6000));
        assert!(settlements.iter().all(|s| s.to == members[0]));
    }

    #[test]
    fn test_add_then_delete_restores_budgets() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service
            .create_group(group_input("Flat", &["A", "B", "C"]))
            .unwrap();
        let members = ids(&group);
        let before = service.get_group(group.id).unwrap().unwrap();

        let expense = service
            .add_expense(
                group.id,
                ExpenseInput::equal("Rent", Money::from_cents(10001), members[2], &members),
            )
            .unwrap();
        let during = service.get_group(group.id).unwrap().unwrap();
        assert_eq!(during.members[0].remaining, Money::from_cents(80000 - 3334));

        let removed = service.delete_expense(group.id, expense.id).unwrap();
        assert_eq!(removed.id, expense.id);

        let after = service.get_group(group.id).unwrap().unwrap();
        assert!(after.expenses.is_empty());
        assert_eq!(after.members, before.members);

        let ops: Vec<Operation> = storage
            .audit()
            .read_all()
            .unwrap()
            .iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Create, Operation::Delete]);
    }

    #[test]
    fn test_delete_unknown_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service.create_group(group_input("Flat", &["A", "B"])).unwrap();
        let members = ids(&group);
        service
            .add_expense(
                group.id,
                ExpenseInput::equal("Dinner", Money::from_cents(10000), members[0], &members),
            )
            .unwrap();
        let before = service.get_group(group.id).unwrap().unwrap();

        let err = service.delete_expense(group.id, ExpenseId::new()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(service.get_group(group.id).unwrap().unwrap(), before);

        let err = service.delete_expense(GroupId::new(), ExpenseId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_expense_validation_leaves_group_untouched() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service.create_group(group_input("Flat", &["A", "B"])).unwrap();
        let members = ids(&group);

        let blank = ExpenseInput::equal("  ", Money::from_cents(100), members[0], &members);
        assert!(matches!(
            service.add_expense(group.id, blank).unwrap_err(),
            SettleError::Validation(_)
        ));

        let zero = ExpenseInput::equal("Tea", Money::zero(), members[0], &members);
        assert!(matches!(
            service.add_expense(group.id, zero).unwrap_err(),
            SettleError::InvalidAmount(_)
        ));

        let nobody = ExpenseInput::equal("Tea", Money::from_cents(100), members[0], &[]);
        assert!(matches!(
            service.add_expense(group.id, nobody).unwrap_err(),
            SettleError::InvalidSplit(_)
        ));

        let stranger = ExpenseInput::equal("Tea", Money::from_cents(100), MemberId::new(), &members);
        assert!(service.add_expense(group.id, stranger).unwrap_err().is_not_found());

        let mut solo = ExpenseInput::individual("Tea", Money::from_cents(100), members[0]);
        solo.participants = vec![ParticipantInput::member(members[1])];
        assert!(matches!(
            service.add_expense(group.id, solo).unwrap_err(),
            SettleError::InvalidSplit(_)
        ));

        let mut exact = ExpenseInput::equal("Tea", Money::from_cents(1000), members[0], &[]);
        exact.split_type = SplitType::Exact;
        exact.participants = vec![
            ParticipantInput::with_share(members[0], Money::from_cents(500)),
            ParticipantInput::with_share(members[1], Money::from_cents(400)),
        ];
        assert!(matches!(
            service.add_expense(group.id, exact).unwrap_err(),
            SettleError::Validation(_)
        ));

        assert_eq!(service.get_group(group.id).unwrap().unwrap(), group);
    }

    #[test]
    fn test_percentage_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service.create_group(group_input("Flat", &["A", "B"])).unwrap();
        let members = ids(&group);
        let mut input = ExpenseInput::equal("Rent", Money::from_cents(20000), members[0], &[]);
        input.split_type = SplitType::Percentage;
        input.participants = vec![
            ParticipantInput::with_percent(members[0], 7500),
            ParticipantInput::with_percent(members[1], 2500),
        ];
        let expense = service.add_expense(group.id, input).unwrap();

        assert_eq!(expense.share_of(members[1]), Some(Money::from_cents(5000)));
        assert_eq!(expense.split_type, SplitType::Percentage);
    }

    #[test]
    fn test_enforced_budgets() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            enforce_budgets: true,
            ..Settings::default()
        };
        let service = LedgerService::new(&storage, &settings);

        let mut input = group_input("Flat", &["A", "B"]);
        input.members[1].budget = Some(Money::from_cents(1000));
        let group = service.create_group(input).unwrap();
        let members = ids(&group);

        let err = service
            .add_expense(
                group.id,
                ExpenseInput::equal("Dinner", Money::from_cents(4000), members[0], &members),
            )
            .unwrap_err();
        assert!(matches!(err, SettleError::InsufficientBudget { .. }));
        assert!(service.get_group(group.id).unwrap().unwrap().expenses.is_empty());

        service
            .add_expense(
                group.id,
                ExpenseInput::equal("Coffee", Money::from_cents(2000), members[0], &members),
            )
            .unwrap();
    }

    #[test]
    fn test_changes_persist_across_reload() {
        let (temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service.create_group(group_input("Flat", &["A", "B"])).unwrap();
        let members = ids(&group);
        service
            .add_expense(
                group.id,
                ExpenseInput::equal("Dinner", Money::from_cents(10000), members[0], &members),
            )
            .unwrap();

        let paths = SettlePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        let group = reloaded.groups.get(group.id).unwrap().unwrap();
        assert_eq!(group.expenses.len(), 1);
        assert_eq!(group.members[1].remaining, Money::from_cents(75000));
    }

    #[test]
    fn test_group_total_is_capped() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service.create_group(group_input("Flat", &["A", "B"])).unwrap();
        let members = ids(&group);
        service
            .add_expense(
                group.id,
                ExpenseInput::individual("Yacht", Money::MAX, members[0]),
            )
            .unwrap();

        let err = service
            .add_expense(
                group.id,
                ExpenseInput::individual("Coffee", Money::from_cents(300), members[1]),
            )
            .unwrap_err();
        assert!(matches!(err, SettleError::InvalidAmount(_)));
        assert_eq!(service.get_group(group.id).unwrap().unwrap().expenses.len(), 1);

        let mut rich = group_input("Office", &["C"]);
        rich.members[0].budget = Some(Money::MAX + Money::from_cents(1));
        assert!(service.create_group(rich).unwrap_err().is_validation());
    }

    #[test]
    fn test_failed_save_leaves_group_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service.create_group(group_input("Flat", &["A", "B"])).unwrap();
        let members = ids(&group);
        let dinner = service
            .add_expense(
                group.id,
                ExpenseInput::equal("Dinner", Money::from_cents(5000), members[0], &members),
            )
            .unwrap();
        let before = service.get_group(group.id).unwrap().unwrap();

        let blocker = temp_path(&storage.paths().groups_file());
        std::fs::create_dir(&blocker).unwrap();

        let err = service
            .add_expense(
                group.id,
                ExpenseInput::equal("Taxi", Money::from_cents(10000), members[0], &members),
            )
            .unwrap_err();
        assert!(matches!(err, SettleError::Storage(_)));
        assert!(service.delete_expense(group.id, dinner.id).is_err());
        assert!(service.create_group(group_input("Office", &["C"])).is_err());

        assert_eq!(service.get_group(group.id).unwrap().unwrap(), before);
        assert_eq!(service.list_groups().unwrap().len(), 1);
        assert_eq!(storage.audit().entry_count().unwrap(), 2);

        std::fs::remove_dir(&blocker).unwrap();
        service
            .add_expense(
                group.id,
                ExpenseInput::equal("Taxi", Money::from_cents(10000), members[0], &members),
            )
            .unwrap();

        let group = service.get_group(group.id).unwrap().unwrap();
        assert_eq!(group.expenses.len(), 2);
        assert_eq!(group.members[0].remaining, Money::from_cents(80000 - 7500));
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = LedgerService::new(&storage, &settings);

        let group = service.create_group(group_input("Flat", &["A", "B"])).unwrap();
        let members = ids(&group);

        std::thread::scope(|scope| {
            for t in 0..4 {
                let service = &service;
                let members = &members;
                scope.spawn(move || {
                    for _ in 0..10 {
                        let input = ExpenseInput::equal(
                            "Coffee",
                            Money::from_cents(200),
                            members[t % 2],
                            members,
                        );
                        service.add_expense(group.id, input).unwrap();
                    }
                });
            }
        });

        let group = service.get_group(group.id).unwrap().unwrap();
        assert_eq!(group.expenses.len(), 40);
        assert_eq!(group.members[0].remaining, Money::from_cents(80000 - 40 * 100));
        assert_eq!(group.members[1].remaining, Money::from_cents(80000 - 40 * 100));
        assert_eq!(storage.audit().entry_count().unwrap(), 41);
    }
}
