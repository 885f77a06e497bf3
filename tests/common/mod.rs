use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

fn data_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) if n.fract() == 0.0 => format!("{n:.0}"),
        Data::Float(n) => n.to_string(),
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    }
}

/// Primeira aba da planilha como linhas de texto, como o endpoint de
/// importação a enxerga.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, calamine::Error> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names.first().expect("planilha sem abas");
    let range = workbook.worksheet_range(sheet_name)?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(data_to_string).collect())
        .collect())
}

#[test]
fn data_to_string_drops_integral_fraction() {
    assert_eq!(data_to_string(&Data::Float(5565984193431.0)), "5565984193431");
    assert_eq!(data_to_string(&Data::Float(1.5)), "1.5");
    assert_eq!(data_to_string(&Data::Empty), "");
    assert_eq!(data_to_string(&Data::String("Pendente".into())), "Pendente");
}
