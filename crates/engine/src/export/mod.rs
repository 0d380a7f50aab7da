//! Export adapters: serialize a ledger snapshot and hand the bytes to a sink.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Ledger, ResultEngine};

pub mod csv_file;
pub mod pdf_file;

pub use pdf_file::{PlacedLine, ReportLayout};

/// Destination for exported files; the stand-in for a browser download.
pub trait DownloadSink {
    /// Stores `bytes` under `file_name` and returns where they went.
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> ResultEngine<PathBuf>;
}

/// Writes exports into a directory, replacing files with the same name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> ResultEngine<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "expenses.csv",
            ExportFormat::Pdf => "expenses.pdf",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// Renders `ledger` in `format` and delivers it to `sink`.
pub fn export(
    format: ExportFormat,
    ledger: &Ledger,
    sink: &mut dyn DownloadSink,
) -> ResultEngine<PathBuf> {
    let bytes = match format {
        ExportFormat::Csv => csv_file::render(ledger)?,
        ExportFormat::Pdf => pdf_file::render(&pdf_file::layout(ledger))?,
    };
    let path = sink
        .deliver(format.file_name(), &bytes)
        .inspect_err(|err| tracing::error!("failed to deliver {}: {err}", format.file_name()))?;
    tracing::info!(
        records = ledger.len(),
        path = %path.display(),
        "{} export written",
        format.label()
    );
    Ok(path)
}

/// Writes `expenses.csv`.
pub fn export_csv(ledger: &Ledger, sink: &mut dyn DownloadSink) -> ResultEngine<PathBuf> {
    export(ExportFormat::Csv, ledger, sink)
}

/// Writes `expenses.pdf`.
pub fn export_pdf(ledger: &Ledger, sink: &mut dyn DownloadSink) -> ResultEngine<PathBuf> {
    export(ExportFormat::Pdf, ledger, sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemorySink {
        files: Vec<(String, Vec<u8>)>,
    }

    impl DownloadSink for MemorySink {
        fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> ResultEngine<PathBuf> {
            self.files.push((file_name.to_string(), bytes.to_vec()));
            Ok(PathBuf::from(file_name))
        }
    }

    #[test]
    fn export_uses_fixed_file_names() {
        let mut sink = MemorySink::default();
        let ledger = Ledger::default();

        export_csv(&ledger, &mut sink).unwrap();
        export_pdf(&ledger, &mut sink).unwrap();

        assert_eq!(sink.files[0].0, "expenses.csv");
        assert_eq!(
            sink.files[0].1,
            b"Category,Amount,Description,Date,Currency,Payment Method\n".to_vec()
        );
        assert_eq!(sink.files[1].0, "expenses.pdf");
        assert!(sink.files[1].1.starts_with(b"%PDF"));
    }
}
