//! Audit log display

use crate::audit::AuditEntry;

/// Format audit entries, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries.\n".to_string();
    }

    entries
        .iter()
        .map(|e| format!("{}\n", e.format_human_readable()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EntityType;

    #[test]
    fn test_format_audit_entries() {
        let entries = vec![
            AuditEntry::create(EntityType::Group, "grp-1", Some("Flat".into()), &"{}"),
            AuditEntry::delete(EntityType::Expense, "exp-1", None, &"{}").in_group("grp-1"),
        ];
        let output = format_audit_entries(&entries);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("CREATE Group grp-1 (Flat)"));
        assert!(lines[1].ends_with("DELETE Expense exp-1 in grp-1"));
    }

    #[test]
    fn test_empty_audit_log() {
        assert_eq!(format_audit_entries(&[]), "No audit entries.\n");
    }
}
