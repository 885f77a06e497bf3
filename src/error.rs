use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    /// O arquivo de destino não pôde ser criado ou sobrescrito.
    #[error("não foi possível salvar o arquivo: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteCause,
    },
}

#[derive(Debug, Error)]
pub enum WriteCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Xlsx(#[from] umya_spreadsheet::XlsxError),
}
