use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;
use umya_spreadsheet::Spreadsheet;

use crate::contacts::Table;
use crate::error::{SampleError, WriteCause};

/// Monta a pasta de trabalho com a tabela na aba ativa, a partir de A1.
///
/// Todas as células são gravadas como texto: o telefone não pode virar número
/// nem a data ser reinterpretada pelo leitor.
pub fn to_spreadsheet(table: &Table) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();

    for (row_idx, fields) in table.rows().enumerate() {
        for (col_idx, value) in fields.iter().enumerate() {
            // umya: (coluna, linha), ambos a partir de 1
            let coord = ((col_idx + 1) as u32, (row_idx + 1) as u32);
            sheet.get_cell_mut(coord).set_value_string(*value);
        }
    }

    book
}

/// Grava a tabela em `path`, sobrescrevendo o arquivo existente.
///
/// A planilha é gravada num arquivo temporário no mesmo diretório e só então
/// renomeada para `path`. Em caso de erro o temporário é apagado e o destino
/// fica como estava.
pub fn write_table(table: &Table, path: &Path) -> Result<(), SampleError> {
    let book = to_spreadsheet(table);
    debug!(path = %path.display(), contacts = table.len(), "gravando planilha");

    save_atomically(&book, path).map_err(|source| SampleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn save_atomically(book: &Spreadsheet, path: &Path) -> Result<(), WriteCause> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        umya_spreadsheet::writer::xlsx::write_writer(book, &mut writer)?;
        writer.flush()?;
    }

    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
