//! CSV export

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::error::{Result, TaskError};
use super::model::Task;

pub const DEFAULT_EXPORT_FILE: &str = "tarefas.csv";

/// Which header row to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvHeader {
    #[default]
    Portuguese,
    English,
}

impl CsvHeader {
    pub fn columns(&self) -> [&'static str; 3] {
        match self {
            Self::Portuguese => ["Descrição", "Prioridade", "Data de Vencimento"],
            Self::English => ["Description", "Priority", "Due Date"],
        }
    }
}

pub fn export_to_writer<W: Write>(tasks: &[Task], header: CsvHeader, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(header.columns())?;
    for task in tasks {
        csv_writer.write_record([
            task.description.as_str(),
            task.priority.label(),
            task.due_date_text().as_str(),
        ])?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write `tasks` to `path` as CSV, overwriting it.
pub fn export(tasks: &[Task], header: CsvHeader, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| TaskError::io(path, e))?;
    export_to_writer(tasks, header, file)?;
    info!("Exported {} tasks to {}", tasks.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use tempfile::tempdir;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("Buy milk", Priority::Low, "01/01/2025").unwrap(),
            Task::new("File taxes", Priority::High, "15/04/2025").unwrap(),
        ]
    }

    fn export_string(tasks: &[Task], header: CsvHeader) -> String {
        let mut buf = Vec::new();
        export_to_writer(tasks, header, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_export_scenario() {
        let output = export_string(&sample(), CsvHeader::English);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Description,Priority,Due Date",
                "Buy milk,Low,01/01/2025",
                "File taxes,High,15/04/2025",
            ]
        );
    }

    #[test]
    fn test_default_header_is_portuguese() {
        let output = export_string(&[], CsvHeader::default());
        assert_eq!(output, "Descrição,Prioridade,Data de Vencimento\n");
    }

    #[test]
    fn test_export_quotes_fields_with_commas() {
        let tasks =
            vec![Task::new("Eggs, flour, \"sugar\"", Priority::Medium, "02/02/2025").unwrap()];
        let output = export_string(&tasks, CsvHeader::English);
        assert!(output.contains(r#""Eggs, flour, ""sugar""",Medium,02/02/2025"#));
    }

    #[test]
    fn test_export_to_file() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DEFAULT_EXPORT_FILE);
        export(&sample(), CsvHeader::Portuguese, &path)?;

        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();
        assert_eq!(&headers[0], "Descrição");

        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>()?;
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Buy milk");
        assert_eq!(&rows[1][1], "High");
        assert_eq!(&rows[1][2], "15/04/2025");
        Ok(())
    }

    #[test]
    fn test_header_deserialize() {
        let header: CsvHeader = serde_json::from_str(r#""english""#).unwrap();
        assert_eq!(header, CsvHeader::English);
    }
}
