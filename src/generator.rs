use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::contacts::Table;
use crate::error::SampleError;
use crate::workbook::write_table;

pub const OUTPUT_PATH: &str = "contatos.xlsx";
pub const SUCCESS_MESSAGE: &str = "Planilha criada com sucesso!";

/// Gera a planilha de exemplo em `path` com a data de importação `today`.
pub fn generate_at(path: impl AsRef<Path>, today: NaiveDate) -> Result<PathBuf, SampleError> {
    let path = path.as_ref();

    let table = Table::sample(today);
    debug!(contacts = table.len(), %today, "tabela de contatos montada");

    write_table(&table, path)?;
    info!(path = %path.display(), "planilha salva");

    Ok(path.to_path_buf())
}

/// Gera `contatos.xlsx` no diretório atual com a data de hoje.
pub fn generate() -> Result<PathBuf, SampleError> {
    generate_at(OUTPUT_PATH, Local::now().date_naive())
}

pub fn run() -> Result<()> {
    generate().context("falha ao gerar a planilha de contatos")?;
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_at_returns_written_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_PATH);
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let written = generate_at(&path, today).unwrap();

        assert_eq!(written, path);
        assert!(path.is_file());
    }

    #[test]
    fn output_path_is_relative() {
        assert!(Path::new(OUTPUT_PATH).is_relative());
        assert_eq!(Path::new(OUTPUT_PATH).extension().unwrap(), "xlsx");
    }
}
