pub mod archive;
pub mod csv_export;

pub use archive::{archive_file_name, bundle_datasets, ExportBundle};
pub use csv_export::{to_csv, CsvCell, CsvRow};
