//! YAML Export functionality
//!
//! Writes the same document as the JSON export in a human-readable form.

use std::io::Write;

use crate::error::{SettleError, SettleResult};
use crate::export::json::FullExport;

fn export_error(e: impl std::fmt::Display) -> SettleError {
    SettleError::Export(e.to_string())
}

/// Write an export as YAML, preceded by a comment header
pub fn export_yaml<W: Write>(export: &FullExport, writer: &mut W) -> SettleResult<()> {
    writeln!(writer, "# SettleUp Export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, export).map_err(export_error)
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> SettleResult<FullExport> {
    let export: FullExport = serde_yaml::from_str(yaml_str).map_err(export_error)?;

    export.validate().map_err(SettleError::Export)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Group, Member, Money};

    fn test_export() -> FullExport {
        FullExport::new(vec![Group::new(
            "Ski Trip",
            Some("Alps".into()),
            vec![Member::new("Neo", Money::from_cents(80000))],
        )])
    }

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_yaml(&test_export(), &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# SettleUp Export"));
        assert!(yaml.contains("Ski Trip"));
        assert!(yaml.contains("group_count: 1"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let export = test_export();
        let mut output = Vec::new();
        export_yaml(&export, &mut output).unwrap();

        // Comment lines are valid YAML, so the whole file parses
        let imported = import_from_yaml(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(imported.groups, export.groups);
    }
}
