//! JSON Export functionality
//!
//! Exports groups to JSON format with schema versioning.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SettleError, SettleResult};
use crate::models::Group;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Exported groups with their members and expenses
    pub groups: Vec<Group>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub group_count: usize,
    pub member_count: usize,
    pub expense_count: usize,
}

impl FullExport {
    /// Build an export of the given groups
    pub fn new(groups: Vec<Group>) -> Self {
        let metadata = ExportMetadata {
            group_count: groups.len(),
            member_count: groups.iter().map(|g| g.members.len()).sum(),
            expense_count: groups.iter().map(|g| g.expenses.len()).sum(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            groups,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut group_ids = HashSet::new();
        for group in &self.groups {
            if !group_ids.insert(group.id) {
                return Err(format!("Group {} appears more than once", group.id));
            }

            for expense in &group.expenses {
                if group.member(expense.paid_by).is_none() {
                    return Err(format!(
                        "Expense {} in {} was paid by unknown member {}",
                        expense.id, group.name, expense.paid_by
                    ));
                }
                if let Some(p) = expense
                    .participants
                    .iter()
                    .find(|p| group.member(p.member_id).is_none())
                {
                    return Err(format!(
                        "Expense {} in {} references unknown member {}",
                        expense.id, group.name, p.member_id
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Write an export as JSON
pub fn export_json<W: Write>(export: &FullExport, writer: &mut W, pretty: bool) -> SettleResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| SettleError::Export(e.to_string()))
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> SettleResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| SettleError::Export(e.to_string()))?;

    export.validate().map_err(SettleError::Export)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Member, MemberId, Money, Participant, SplitType};

    fn test_group() -> Group {
        let mut group = Group::new(
            "Weekend Getaway",
            None,
            vec![
                Member::new("Neo", Money::from_cents(80000)),
                Member::new("Lizzy", Money::from_cents(80000)),
            ],
        );
        let (a, b) = (group.members[0].id, group.members[1].id);
        group.apply_expense(Expense::new(
            "Dinner",
            Money::from_cents(10000),
            a,
            SplitType::Equal,
            vec![
                Participant::new(a, Money::from_cents(5000), true),
                Participant::new(b, Money::from_cents(5000), false),
            ],
        ));
        group
    }

    #[test]
    fn test_metadata() {
        let export = FullExport::new(vec![test_group(), test_group()]);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.group_count, 2);
        assert_eq!(export.metadata.member_count, 4);
        assert_eq!(export.metadata.expense_count, 2);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let export = FullExport::new(vec![test_group()]);

        let mut output = Vec::new();
        export_json(&export, &mut output, true).unwrap();
        let json = String::from_utf8(output).unwrap();
        assert!(json.contains("\"split_type\": \"EQUAL\""));

        let imported = import_from_json(&json).unwrap();
        assert_eq!(imported.groups, export.groups);
    }

    #[test]
    fn test_validate_rejects_unknown_member() {
        let mut group = test_group();
        group.expenses[0].participants[1].member_id = MemberId::new();

        let export = FullExport::new(vec![group]);
        assert!(export.validate().unwrap_err().contains("unknown member"));
    }

    #[test]
    fn test_validate_rejects_schema_mismatch() {
        let mut export = FullExport::new(Vec::new());
        export.schema_version = "0.1.0".into();
        assert!(export.validate().is_err());
    }
}
