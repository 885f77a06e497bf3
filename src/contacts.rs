//! Contatos de exemplo usados como fixture de importação.
//!
//! A tabela é sempre a mesma: um cabeçalho fixo e cinco contatos fictícios,
//! todos com o mesmo telefone e status. Só a data de importação varia, uma vez
//! por dia.

use chrono::NaiveDate;

pub const HEADERS: [&str; 4] = ["Nome", "Telefone", "Status", "Data de Importação"];

pub const NAMES: [&str; 5] = [
    "João Silva",
    "Maria Santos",
    "Pedro Oliveira",
    "Ana Costa",
    "Carlos Souza",
];

pub const PHONE: &str = "5565984193431";
pub const STATUS: &str = "Pendente";

/// DD/MM/YYYY, independente do locale do sistema.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_import_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub phone: String,
    pub status: String,
    pub import_date: String,
}

impl Row {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        status: impl Into<String>,
        import_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            status: status.into(),
            import_date: import_date.into(),
        }
    }

    /// Campos na ordem das colunas do cabeçalho.
    pub fn fields(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.phone.as_str(),
            self.status.as_str(),
            self.import_date.as_str(),
        ]
    }
}

/// Cabeçalho seguido das linhas de dados, em ordem de inserção.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: [&'static str; 4],
    rows: Vec<Row>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            header: HEADERS,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Os cinco contatos fixos, todos importados em `today`.
    pub fn sample(today: NaiveDate) -> Self {
        let import_date = format_import_date(today);
        let mut table = Self::new();
        for name in NAMES {
            table.push(Row::new(name, PHONE, STATUS, import_date.as_str()));
        }
        table
    }

    pub fn header(&self) -> [&str; 4] {
        self.header
    }

    pub fn data_rows(&self) -> &[Row] {
        &self.rows
    }

    /// Todas as linhas, começando pelo cabeçalho.
    pub fn rows(&self) -> impl Iterator<Item = [&str; 4]> + '_ {
        std::iter::once(self.header).chain(self.rows.iter().map(Row::fields))
    }

    /// Número de linhas de dados, sem contar o cabeçalho.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
